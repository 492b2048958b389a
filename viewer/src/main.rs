//! Knowpanel viewer
//!
//! Fetches the knowledge panel document for a product barcode and prints
//! it as a collapsible tree. Selection comes from a demo barcode list or
//! free-text entry; chrome strings are localized per the active locale.

use anyhow::Context;
use clap::Parser;
use knowpanel_client::{FetcherConfig, HttpPanelFetcher};
use knowpanel_model::Locale;
use knowpanel_session::{SessionController, SessionState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod messages;
mod present;

/// Demo barcodes with the product category they exercise
const DEMO_BARCODES: &[(&str, &str)] = &[
    ("3450970045360", "cage eggs from France"),
    ("2000000124898", "cage eggs from USA"),
    ("8003636004529", "no specific category"),
    ("3560071098278", "both free-range and cage eggs"),
    ("3270190205685", "free-range chicken eggs from France"),
    ("50326686", "cage chicken eggs from UK"),
    ("4311501688120", "barn chicken eggs from Germany"),
    ("9413000012057", "free-range eggs from New Zealand"),
    ("9414674989591", "cage eggs from New Zealand"),
    ("5202930932252", "free-range eggs, no country"),
    ("9313715907009", "poultry chicken"),
    ("5010482558413", "cage, France and UK"),
    ("3372140000101", "cage, two countries"),
];

#[derive(Debug, Parser)]
#[command(name = "knowpanel", version, about = "Product knowledge panel viewer")]
struct Args {
    /// Product barcode to fetch (defaults to the first demo barcode)
    barcode: Option<String>,

    /// Locale tag for the request and for chrome strings
    #[arg(long, default_value = "en")]
    locale: Locale,

    /// Base URL of the knowledge panel API
    #[arg(long, default_value = "http://127.0.0.1:8000")]
    base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,

    /// Collapse the given panel before printing (repeatable)
    #[arg(long = "collapse", value_name = "PANEL_ID")]
    collapse: Vec<String>,

    /// Print the rendered document as JSON instead of text
    #[arg(long)]
    json: bool,

    /// List the demo barcodes and exit
    #[arg(long)]
    list: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "knowpanel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if args.list {
        for (barcode, note) in DEMO_BARCODES {
            println!("{barcode}  {note}");
        }
        return Ok(());
    }

    let barcode = args
        .barcode
        .as_deref()
        .unwrap_or(DEMO_BARCODES[0].0)
        .to_string();

    tracing::info!(barcode = %barcode, locale = %args.locale, "fetching knowledge panel");

    let fetcher = HttpPanelFetcher::new(
        FetcherConfig::new(args.base_url).with_timeout_secs(args.timeout_secs),
    )
    .context("building HTTP client")?;

    let mut session = SessionController::new(args.locale);
    println!("{}", messages::lookup(args.locale, "loading"));
    session.load(&fetcher, barcode).await;

    for panel_id in &args.collapse {
        session.toggle(panel_id);
    }

    if let Some(rendered) = session.rendered() {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&rendered)?);
        } else {
            print!("{}", present::render_text(&rendered, args.locale));
        }
        return Ok(());
    }

    match session.state() {
        SessionState::Error(err) => {
            eprintln!("{}", messages::lookup(args.locale, err.message_key()));
            Err(anyhow::Error::new(err.clone()))
        }
        state => anyhow::bail!("unexpected session state after load: {state:?}"),
    }
}
