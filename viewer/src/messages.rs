//! Localized chrome strings
//!
//! The viewer's only i18n contract is a lookup from message key to
//! localized string for the active locale. Document content itself
//! arrives already localized from the API.

use knowpanel_model::Locale;

const EN: &[(&str, &str)] = &[
    ("title", "Knowledge panel"),
    ("loading", "Loading knowledge panel..."),
    ("error.product_not_found", "Product not found"),
    ("error.fetch_failed", "Error fetching knowledge panel"),
    ("error.malformed_response", "Unexpected response from server"),
    ("product.no_name", "Unnamed product"),
];

const FR: &[(&str, &str)] = &[
    ("title", "Panneau de connaissances"),
    ("loading", "Chargement du panneau..."),
    ("error.product_not_found", "Produit introuvable"),
    ("error.fetch_failed", "Erreur lors de la récupération du panneau"),
    ("error.malformed_response", "Réponse inattendue du serveur"),
    ("product.no_name", "Produit sans nom"),
];

/// Look up a message key for a locale, falling back to the key itself
pub(crate) fn lookup(locale: Locale, key: &str) -> &str {
    let table = match locale {
        Locale::En => EN,
        Locale::Fr => FR,
    };
    table
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(key, |(_, message)| message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_key_resolves_per_locale() {
        assert_eq!(lookup(Locale::En, "error.product_not_found"), "Product not found");
        assert_eq!(lookup(Locale::Fr, "error.product_not_found"), "Produit introuvable");
    }

    #[test]
    fn unknown_key_falls_back_to_key() {
        assert_eq!(lookup(Locale::En, "no.such.key"), "no.such.key");
    }

    #[test]
    fn tables_cover_the_same_keys() {
        let mut en_keys: Vec<&str> = EN.iter().map(|(k, _)| *k).collect();
        let mut fr_keys: Vec<&str> = FR.iter().map(|(k, _)| *k).collect();
        en_keys.sort_unstable();
        fr_keys.sort_unstable();
        assert_eq!(en_keys, fr_keys);
    }
}
