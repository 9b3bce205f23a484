use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use rickdex::cli;

#[derive(Parser)]
#[command(
    name = "rickdex",
    about = "Rickdex — character catalog for the Rick and Morty API",
    version,
    after_help = "Run 'rickdex <command> --help' for details on each command."
)]
struct Cli {
    /// Output results as JSON (machine-readable)
    #[arg(long, global = true)]
    json: bool,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose/debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the full catalog and list characters
    List {
        /// Case-insensitive substring matched against names
        #[arg(long, short)]
        search: Option<String>,
        /// Filter by status (all, alive, dead, unknown)
        #[arg(long)]
        status: Option<String>,
        /// Maximum number of rows to print
        #[arg(long, default_value = "20")]
        limit: usize,
    },
    /// Show per-status counts for the full catalog
    Stats,
    /// Demo login against the fixed credential pair
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Simulated registration (validates, logs, stores nothing)
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global flags via environment variables so all modules can check them
    if cli.json {
        std::env::set_var("RICKDEX_JSON", "1");
    }
    if cli.quiet {
        std::env::set_var("RICKDEX_QUIET", "1");
    }
    if cli.no_color {
        std::env::set_var("RICKDEX_NO_COLOR", "1");
    }

    let directive = if cli.verbose {
        "rickdex=debug"
    } else {
        "rickdex=info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(directive.parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::List {
            search,
            status,
            limit,
        } => cli::list_cmd::run(search.as_deref(), status.as_deref(), limit).await,
        Commands::Stats => cli::stats_cmd::run().await,
        Commands::Login { email, password } => cli::login_cmd::run(&email, &password),
        Commands::Register {
            name,
            email,
            password,
            confirm_password,
        } => cli::register_cmd::run(&name, &email, &password, &confirm_password),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "rickdex", &mut std::io::stdout());
            Ok(())
        }
    };

    // Consistent exit codes: 0=success, 1=error
    if let Err(e) = &result {
        if !cli::output::is_quiet() && !cli::output::is_json() {
            eprintln!("  Error: {e:#}");
        }
        if cli::output::is_json() {
            cli::output::print_json(&serde_json::json!({
                "error": true,
                "message": format!("{e:#}"),
            }));
        }
        std::process::exit(1);
    }

    result
}
