use clap::{Parser, Subcommand};

mod app;
mod articles;
mod auth;
mod config;
mod error;
mod extract;
mod state;
#[cfg(test)]
mod testing;

#[derive(Parser)]
#[command(name = "cms-backend", about = "Article CMS backend")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Print an Argon2 hash to store in users.password
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    if let Some(Command::HashPassword { password }) = cli.command {
        println!("{}", auth::password::hash_password(&password)?);
        return Ok(());
    }

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "cms_backend=debug,axum=info,tower_http=info".to_string());
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    if json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let config = config::AppConfig::from_env()?;
    let (app_state, db) = state::AppState::init(config).await?;

    // Run migrations if present
    if let Err(e) = sqlx::migrate!("./migrations").run(&db).await {
        tracing::warn!(error = %e, "migration failed; continuing");
    }

    let config = app_state.config.clone();
    app::serve(app::build_app(app_state), &config).await
}
