use crate::server;
use crate::solve::{run_solve, SolveArgs};
use clap::{Args, Parser, Subcommand};
use skill_dispatch::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Skill Dispatch",
    about = "Assign technicians to service tickets by skill, over HTTP or from the command line",
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
    /// Solve the standard roster once and print the plan
    Solve(SolveArgs),
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
        Command::Solve(args) => run_solve(args),
    }
}
