mod cli;
mod infra;
mod routes;
mod server;
mod solve;

use skill_dispatch::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
