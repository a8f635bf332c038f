use crate::demo::{run_assess, run_demo, AssessArgs, DemoArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use pedsdx::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "pedsdx-api",
    about = "Rank pediatric emergency differentials from a primary survey snapshot",
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
    /// Reason over a snapshot JSON file and print the result
    Assess(AssessArgs),
    /// Walk through bundled bedside scenarios, including protocol phase transitions
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
        Command::Assess(args) => run_assess(args),
        Command::Demo(args) => run_demo(args),
    }
}
