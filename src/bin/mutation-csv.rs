use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mutation_csv_report::{
    CsvReportListener, DirectoryOutputStrategy, MUTATIONS_CSV, NoCoverage, ReportConfig,
    TestListener, replay_events,
};

#[derive(Debug, Parser)]
#[command(name = "mutation-csv")]
#[command(about = "Write mutations.csv from a recorded mutation test run")]
#[command(
    after_help = "If replay fails, the rows written before the failure are kept in a partial mutations.csv and the command exits non-zero."
)]
struct Cli {
    /// Run event log (JSON lines).
    events: PathBuf,
    /// Report directory.
    #[arg(long)]
    report_dir: Option<PathBuf>,
    /// Write into a per-run `<report-dir>/<start-ms>` directory.
    #[arg(long)]
    timestamped: bool,
    /// Run start time in unix millis. Defaults to now.
    #[arg(long)]
    start_ms: Option<i64>,
    /// Log progress to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn now_timestamp_ms() -> i64 {
    let now = std::time::SystemTime::now();
    let duration = now
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_else(|_| std::time::Duration::from_secs(0));
    (duration.as_secs() as i64)
        .saturating_mul(1000)
        .saturating_add(duration.subsec_millis() as i64)
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ReportConfig::default().with_timestamped_reports(cli.timestamped);
    if let Some(report_dir) = cli.report_dir {
        config = config.with_report_dir(report_dir);
    }
    let start_ms = cli.start_ms.unwrap_or_else(now_timestamp_ms);
    let strategy = DirectoryOutputStrategy::from_config(&config, start_ms);

    let mut listener = CsvReportListener::from_strategy(&NoCoverage, start_ms, &strategy, &[])
        .with_context(|| format!("failed to open report in {}", strategy.dir().display()))?;

    // The report is closed before any replay error is returned.
    let replayed = replay_events(&cli.events, &mut listener);
    let closed = listener.on_run_end();

    let summary =
        replayed.with_context(|| format!("failed to replay {}", cli.events.display()))?;
    closed.context("failed to close mutation report")?;
    if !summary.run_ended {
        tracing::warn!("event log has no run end; report closed after replay");
    }

    if summary.malformed_lines > 0 {
        eprintln!("skipped {} malformed event lines", summary.malformed_lines);
    }
    println!(
        "wrote {} rows to {}",
        listener.rows_written(),
        strategy.path_for(MUTATIONS_CSV).display()
    );
    Ok(())
}
