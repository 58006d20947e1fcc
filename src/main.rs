mod handlers;

use anyhow::{Context, Result};
use sqlx::Connection;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "studentdb=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load environment variables
    dotenv::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://students.db".to_string());

    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = handlers::parse_command(&args)?;

    if command == handlers::Command::Help {
        return handlers::run_help();
    }

    tracing::info!("Connecting to database: {}", database_url);
    let mut conn = studentdb::db::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let result = handlers::run(&mut conn, command).await;

    // The connection belongs to main; tables only borrow it.
    conn.close().await.context("Failed to close database connection")?;
    result
}
