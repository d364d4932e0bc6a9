use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use hitlog_cli::OutputFormat;
use hitlog_cli::commands;
use hitlog_cli::source::LogSource;
use hitlog_core::analysis::{AnalysisOptions, DEFAULT_TOP_N};
use hitlog_core::log::TimestampMode;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "hitlog")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Summarize traffic from a space-delimited HTTP access log",
    long_about = "hitlog reads an access log from a file, a URL or standard input and reports \
                  the covered time range, request volume, status-code distribution, the slowest \
                  endpoints and the most requested endpoints."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Pretty, env = "HITLOG_FORMAT")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an access log and print a summary report
    Analyze {
        /// Log file path, http(s) URL, or `-` for standard input
        #[arg(value_name = "SOURCE", default_value = "-")]
        source: String,

        /// Number of endpoints listed in each ranking
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Also accept timestamps without an offset, or bare dates, as UTC
        #[arg(long)]
        lenient_timestamps: bool,

        /// HTTP timeout in seconds when SOURCE is a URL
        #[arg(long, value_name = "SECS", default_value_t = 30)]
        timeout: u64,
    },

    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(long, value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match cli.command {
        Commands::Analyze {
            source,
            top,
            lenient_timestamps,
            timeout,
        } => {
            let options = AnalysisOptions {
                top_n: top,
                timestamp_mode: if lenient_timestamps {
                    TimestampMode::Lenient
                } else {
                    TimestampMode::Strict
                },
            };
            commands::analyze::execute(
                &LogSource::parse(&source),
                &options,
                cli.format,
                Duration::from_secs(timeout),
            )
        }
        Commands::Completion { shell } => commands::completion::execute(shell, &mut Cli::command()),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("hitlog=debug,hitlog_cli=debug,hitlog_core=debug")
    } else {
        EnvFilter::new("hitlog=info")
    };

    // stdout carries the report, so diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
