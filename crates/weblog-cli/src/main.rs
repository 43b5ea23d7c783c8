use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use weblog_cli::{OutputFormat, commands};

#[derive(Parser)]
#[command(name = "weblog")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "A CLI tool for analyzing hourly web server access patterns",
    long_about = "Weblog reads simple access logs (one 'YYYY MM DD HH MM' record per line) \
                  and reports access counts per hour along with the busiest and quietest \
                  hours, two-hour windows, days and months."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value = "pretty")]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze hourly access patterns in a log file
    Analyze {
        /// Path to the log file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Year that day and month results are reported in [default: current year]
        #[arg(long, env = "WEBLOG_YEAR")]
        year: Option<u32>,

        /// Month that day results are reported in [default: current month]
        #[arg(long, env = "WEBLOG_MONTH", value_parser = clap::value_parser!(u32).range(1..=12))]
        month: Option<u32>,

        /// Print the access count for every hour
        #[arg(long)]
        hours: bool,
    },

    /// Generate a synthetic log file
    Generate {
        /// Path of the log file to write
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Number of entries to write
        #[arg(short = 'n', long, default_value_t = commands::generate::DEFAULT_ENTRIES)]
        entries: usize,

        /// Year of the generated entries [default: current year]
        #[arg(long, env = "WEBLOG_YEAR")]
        year: Option<u32>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the raw lines of a log file
    Dump {
        /// Path to the log file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate shell completion scripts
    #[command(after_help = "SUPPORTED SHELLS:\n  \
        bash, zsh, fish, powershell, elvish\n\n\
        INSTALLATION:\n  \
        bash:  weblog completion --shell bash >> ~/.bashrc\n  \
        zsh:   echo 'source <(weblog completion --shell zsh)' >> ~/.zshrc\n  \
        fish:  weblog completion --shell fish > ~/.config/fish/completions/weblog.fish")]
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

    // Execute the command
    match cli.command {
        Commands::Analyze {
            file,
            year,
            month,
            hours,
        } => {
            let period = commands::analyze::resolve_period(year, month)?;
            commands::analyze::execute(&file, period, hours, cli.format)
        }
        Commands::Generate {
            file,
            entries,
            year,
            seed,
        } => {
            let year = commands::analyze::resolve_period(year, None)?.year();
            commands::generate::execute(&file, entries, year, seed)
        }
        Commands::Dump { file } => commands::dump::execute(&file),
        Commands::Completion { shell } => {
            commands::completion::execute(shell, &mut Cli::command())
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("weblog=debug,weblog_cli=debug,weblog_core=debug")
    } else {
        EnvFilter::new("weblog=info,weblog_cli=info,weblog_core=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
