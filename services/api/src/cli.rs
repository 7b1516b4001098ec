use crate::demo::{run_demo, run_recommend, run_tiers, DemoArgs, RecommendArgs, TiersArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use tier_routing::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Tier Routing Service",
    about = "Score project intakes and route them to a service tier",
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
    /// Score a single intake read from a JSON file or stdin
    Recommend(RecommendArgs),
    /// Print the active tier definitions
    Tiers(TiersArgs),
    /// Walk through the canonical intake scenarios
    Demo(DemoArgs),
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
        Command::Recommend(args) => run_recommend(args),
        Command::Tiers(args) => run_tiers(args),
        Command::Demo(args) => run_demo(args),
    }
}
