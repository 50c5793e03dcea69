use clap::{Args, Parser, Subcommand};
use companies_app::database::{self, DatabaseSettings};
use sqlx::PgPool;

mod company;
mod db;

#[derive(Debug, Parser)]
#[command(name = "companies-app", about = "Company records CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Company(company::CompanyCommand),
    Db(db::DbCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Company(command) => company::run(command).await,
            Commands::Db(command) => db::run(command).await,
        }
    }
}

/// Connection flags shared by every subcommand.
#[derive(Debug, Args)]
pub(crate) struct DatabaseArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,
}

impl DatabaseArgs {
    pub(crate) async fn connect(&self) -> Result<PgPool, String> {
        database::connect(&DatabaseSettings::new(self.database_url.as_str()))
            .await
            .map_err(|error| format!("failed to connect to database: {error}"))
    }
}
