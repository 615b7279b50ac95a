use crate::compare::{run_compare, run_demo, CompareArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use shopwise::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "ShopWise Basket Comparator",
    about = "Compare a free-text grocery list across supermarket chains from the command line",
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
    /// Compare a shopping list and print per-store totals
    Compare(CompareArgs),
    /// Run a canned German shopping list through the built-in staples
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
        Command::Compare(args) => run_compare(args),
        Command::Demo(args) => run_demo(args),
    }
}
