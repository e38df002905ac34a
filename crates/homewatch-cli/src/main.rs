use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "homewatch-cli", version, about = "Homework review status notifier")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the polling loop
    Run {
        /// Execute a single cycle and exit
        #[arg(long)]
        once: bool,
        /// Override the poll interval in seconds
        #[arg(long)]
        interval: Option<u64>,
    },
    /// Verify settings and credentials
    Check,
    /// Send a text message through the configured Telegram chat
    Send {
        /// Message text
        message: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    // Load .env for API and bot credentials
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Run { once, interval } => commands::run::run(once, interval),
        Commands::Check => commands::check::run(),
        Commands::Send { message } => commands::send::run(&message),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => commands::completions::run(shell),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
