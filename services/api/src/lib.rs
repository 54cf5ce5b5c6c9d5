mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use moodmeal::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
