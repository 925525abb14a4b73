use crate::demo::{
    run_demo, run_lifecycle_resolve, run_location_export, run_location_search, LifecycleArgs,
    LocationSearchArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use estate_atlas::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Estate Atlas",
    about = "Serve and query the marketplace location directory and lifecycle stages",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the City / Area / Compound directory
    Locations {
        #[command(subcommand)]
        command: LocationCommand,
    },
    /// Resolve tenant and property lifecycle stages
    Lifecycle {
        #[command(subcommand)]
        command: LifecycleCommand,
    },
    /// Print a walkthrough of location search and lifecycle resolution
    Demo,
}

#[derive(Subcommand, Debug)]
enum LocationCommand {
    /// Search locations by name (compounds, then areas, then cities)
    Search(LocationSearchArgs),
    /// Write every location as CSV to stdout
    Export,
}

#[derive(Subcommand, Debug)]
enum LifecycleCommand {
    /// Show where a status label sits in its lifecycle
    Resolve(LifecycleArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Locations {
            command: LocationCommand::Search(args),
        } => run_location_search(args),
        Command::Locations {
            command: LocationCommand::Export,
        } => run_location_export(std::io::stdout().lock()),
        Command::Lifecycle {
            command: LifecycleCommand::Resolve(args),
        } => run_lifecycle_resolve(args),
        Command::Demo => run_demo(),
    }
}
