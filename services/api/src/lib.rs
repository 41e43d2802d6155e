mod cli;
mod infra;
mod report;
mod routes;
mod server;

use enrollment_dashboard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
