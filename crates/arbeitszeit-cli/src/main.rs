mod commands;
mod output;

use arbeitszeit_core::options::FirstRowPolicy;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "arbeitszeit",
    version,
    about = "Extract daily working times from a MyTMA timesheet PDF"
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a timesheet PDF into raw day rows (without normalizing times)
    Parse {
        /// Path to the timesheet PDF
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// JSON options file (first-row policy, header keywords)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// First-row policy: keep, drop-first, drop-previous-month
        #[arg(long, value_name = "POLICY")]
        first_row_policy: Option<FirstRowPolicy>,
    },
    /// Extract start and end times per day (PDF or JSON from `parse -o json`)
    Extract {
        /// Path to the timesheet PDF or pre-parsed JSON file
        input_file: PathBuf,

        /// Output format: table (default) or json
        #[arg(short, long, default_value = "table")]
        output: String,

        /// Write the styled spreadsheet to FILE
        #[arg(long, value_name = "FILE")]
        xlsx: Option<PathBuf>,

        /// JSON options file (first-row policy, header keywords)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// First-row policy: keep, drop-first, drop-previous-month
        #[arg(long, value_name = "POLICY")]
        first_row_policy: Option<FirstRowPolicy>,
    },
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose {
        "arbeitszeit_core=debug,arbeitszeit=debug"
    } else {
        "arbeitszeit_core=info,arbeitszeit=info"
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Parse {
            input_file,
            output,
            config,
            first_row_policy,
        } => commands::load_options(config, first_row_policy)
            .and_then(|opts| commands::parse::run(input_file, &output, &opts)),
        Commands::Extract {
            input_file,
            output,
            xlsx,
            config,
            first_row_policy,
        } => {
            let has_option_overrides = config.is_some() || first_row_policy.is_some();
            commands::load_options(config, first_row_policy).and_then(|opts| {
                commands::extract::run(input_file, &output, xlsx, &opts, has_option_overrides)
            })
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
