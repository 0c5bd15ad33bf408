use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use khata_categorize::{Categorizer, GeminiClassifier};
use khata_sms::{ImportPipeline, JsonExportInbox, DEFAULT_IMPORT_LIMIT};

/// Reconstruct a transaction history from an SMS inbox export.
///
/// The export is a JSON array of messages ({sender, body, timestamp_millis},
/// with the `address`/`date` field names of common backup tools also
/// accepted), most recent first. Set GEMINI_API_KEY to let uncategorized
/// transactions fall through to the remote classifier.
#[derive(Parser)]
#[command(name = "khata", version, about)]
struct Args {
    /// Path to the inbox export file.
    export: PathBuf,

    /// Maximum number of most-recent messages to scan.
    #[arg(long, default_value_t = DEFAULT_IMPORT_LIMIT)]
    limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    anyhow::ensure!(
        args.export.exists(),
        "inbox export not found: {}",
        args.export.display()
    );

    let pipeline = ImportPipeline::new(JsonExportInbox::new(&args.export));
    let transactions = pipeline.import(args.limit);
    tracing::info!(count = transactions.len(), "import finished");

    let classifier = GeminiClassifier::from_env();
    if classifier.is_none() {
        tracing::info!("GEMINI_API_KEY not set, categorizing with keyword rules only");
    }
    let categorizer = Categorizer::new(classifier);

    for t in &transactions {
        let c = categorizer.categorize(&t.merchant, &t.description).await;
        println!(
            "{}  {:>12}  {:<4}  {:<12} ({}%)  {}",
            t.occurred_at.format("%Y-%m-%d %H:%M"),
            t.amount,
            t.mode,
            c.category,
            c.confidence,
            t.merchant,
        );
    }
    println!(
        "{} transaction(s) from {}",
        transactions.len(),
        args.export.display()
    );

    Ok(())
}
