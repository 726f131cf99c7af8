//! Lunas Admin Console
//!
//! Terminal front-end for the Lunas inventory and accounting backend.
//! One subcommand per screen: fetch, filter client-side, render.

mod commands;
mod render;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lunas_client::{ApiClient, SessionStore};
use lunas_shared::AppConfig;

/// Command-line interface definition.
#[derive(Debug, Parser)]
#[command(name = "lunas", version, about = "Administrative console for the Lunas backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Sign in and store the session token.
    Login(commands::auth::LoginArgs),
    /// Drop the stored session.
    Logout,
    /// Show the signed-in user.
    Whoami,
    /// Summary cards: open AP/AR, stock alerts.
    Dashboard,
    /// Purchase and sales orders.
    Orders(commands::orders::OrdersArgs),
    /// Purchase and sales invoices.
    Invoices(commands::invoices::InvoicesArgs),
    /// Accounts payable.
    Payables(commands::settlements::SettlementArgs),
    /// Accounts receivable.
    Receivables(commands::settlements::SettlementArgs),
    /// Chart of accounts.
    Accounts(commands::accounts::AccountsArgs),
    /// Journal entries.
    Journals(commands::journals::JournalsArgs),
    /// Stock levels and valuation.
    Stock(commands::stock::StockArgs),
    /// User and role management.
    Users(commands::users::UsersArgs),
    /// Company profile.
    Company(commands::company::CompanyArgs),
    /// Financial reports, on screen or exported.
    Reports(commands::reports::ReportsArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lunas=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;
    tracing::debug!(base_url = %config.api.base_url, "Configured backend");

    let store = SessionStore::new(&config.session.path);
    let session = store.load()?;

    let mut api = ApiClient::new(&config.api.base_url, config.api.timeout_secs)?;
    if let Some(session) = &session {
        api.set_token(Some(session.auth_token.clone()));
    }

    match cli.command {
        Command::Login(args) => commands::auth::login(&api, &store, args).await,
        Command::Logout => commands::auth::logout(&store),
        Command::Whoami => commands::auth::whoami(session.as_ref()),
        Command::Dashboard => commands::dashboard::run(&api).await,
        Command::Orders(args) => commands::orders::run(&api, args).await,
        Command::Invoices(args) => commands::invoices::run(&api, args).await,
        Command::Payables(args) => {
            commands::settlements::run(&api, lunas_core::settlement::SettlementSide::Payable, args)
                .await
        }
        Command::Receivables(args) => {
            commands::settlements::run(
                &api,
                lunas_core::settlement::SettlementSide::Receivable,
                args,
            )
            .await
        }
        Command::Accounts(args) => commands::accounts::run(&api, args).await,
        Command::Journals(args) => commands::journals::run(&api, args).await,
        Command::Stock(args) => commands::stock::run(&api, args).await,
        Command::Users(args) => commands::users::run(&api, args).await,
        Command::Company(args) => commands::company::run(&api, args).await,
        Command::Reports(args) => commands::reports::run(&api, args).await,
    }
}
