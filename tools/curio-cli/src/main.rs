//! Curio CLI - Command line storefront for the Curio marketplace.
//!
//! Commands:
//! - `curio browse` - Search and filter listings
//! - `curio add` - Add a listing to the cart
//! - `curio remove` - Remove a cart line
//! - `curio update` - Change a cart line's quantity
//! - `curio show` - Show the cart and price totals
//! - `curio clear` - Empty the cart
//! - `curio checkout` - Place an order from the cart
//! - `curio purchases` - List past purchases
//! - `curio login` / `curio logout` / `curio whoami` - Mock account

mod commands;
mod config;
mod output;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use curio_auth::AuthService;
use curio_commerce::catalog::Catalog;
use curio_engine::CartEngine;
use curio_store::{Session, Store};

use commands::{AddArgs, BrowseArgs, LoginArgs, RemoveArgs, UpdateArgs};
use config::CurioConfig;
use output::Output;

/// Curio CLI - Browse listings and manage your cart
#[derive(Parser)]
#[command(name = "curio")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and filter listings
    Browse(BrowseArgs),

    /// Add a listing to the cart
    Add(AddArgs),

    /// Remove a line from the cart
    Remove(RemoveArgs),

    /// Change a cart line's quantity
    Update(UpdateArgs),

    /// Show the cart and price totals
    Show,

    /// Empty the cart
    Clear,

    /// Place an order from the cart
    Checkout,

    /// List past purchases
    Purchases,

    /// Sign in (any email/password is accepted)
    Login(LoginArgs),

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = Output;

    let config = CurioConfig::load(cli.config.as_deref())?;
    let catalog = Arc::new(Catalog::demo());
    let auth = AuthService::new(Session::new(Store::in_file(&config.store)));

    let mut engine = CartEngine::load(
        Arc::clone(&catalog),
        Session::new(Store::in_file(&config.store)),
    )
    .with_pricing(config.pricing.to_pricing());
    if let Some(user) = auth.current_user() {
        engine = engine.for_user(user.id);
    }

    let result = match cli.command {
        Commands::Browse(args) => commands::run_browse(args, &catalog, &output),
        Commands::Add(args) => commands::run_add(args, &mut engine, &output),
        Commands::Remove(args) => commands::run_remove(args, &mut engine, &output),
        Commands::Update(args) => commands::run_update(args, &mut engine, &output),
        Commands::Show => commands::run_show(&engine, &output),
        Commands::Clear => commands::run_clear(&mut engine, &output),
        Commands::Checkout => commands::run_checkout(&mut engine, &output),
        Commands::Purchases => commands::run_purchases(&engine, &output),
        Commands::Login(args) => commands::run_login(args, &auth, &output),
        Commands::Logout => commands::run_logout(&auth, &output),
        Commands::Whoami => commands::run_whoami(&auth, &output),
    };

    if let Err(e) = result {
        output.warn(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
