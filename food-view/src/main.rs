//! foodflow - host the ordering view against a live backend
//!
//! Runs the page load, performs one user action, and prints what the page
//! would show. Session values come from `FOODFLOW_*` variables (or `.env`)
//! and can be overridden on the command line.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use food_client::FoodApi;
use food_view::dom::{ids, Document};
use food_view::{logger, App, ControlId, MemoryDocument, ViewConfig};

/// Terminal host for the FoodFlow ordering view
#[derive(Parser)]
#[command(name = "foodflow")]
#[command(about = "Browse restaurants and manage orders", long_about = None)]
#[command(version)]
struct Cli {
    /// Backend base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Display name of the signed-in user
    #[arg(long)]
    user: Option<String>,

    /// admin, manager or member
    #[arg(long)]
    role: Option<String>,

    /// Country of the signed-in user
    #[arg(long)]
    country: Option<String>,

    /// Backend login session cookie, e.g. `session=...`
    #[arg(long)]
    session_cookie: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Load the page and print both panels
    Show,

    /// Add one menu item to the cart
    Add { restaurant_id: i64, item_id: i64 },

    /// Cancel an order
    Cancel { order_id: i64 },

    /// Check out the cart with a saved payment method
    Checkout { payment_method_id: i64 },

    /// Save a new payment method (admin)
    AddPayment { name: String, last4: String },
}

impl Cli {
    fn config(&self) -> Result<ViewConfig> {
        let mut config = ViewConfig::from_env()?;
        if let Some(url) = &self.base_url {
            config.base_url = url.clone();
        }
        if let Some(user) = &self.user {
            config.user_name = user.clone();
        }
        if let Some(role) = &self.role {
            config.role = role.clone();
        }
        if let Some(country) = &self.country {
            config.country = country.clone();
        }
        if let Some(cookie) = &self.session_cookie {
            config.session_cookie = Some(cookie.clone());
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = cli.config()?;
    logger::init_logger(&config.log_level, config.log_dir.as_deref());

    let session = config.session().context("FOODFLOW_ROLE / --role must be set")?;
    let http = config
        .client_config()
        .build_http_client()
        .context("failed to build HTTP client")?;

    tracing::info!(base_url = %config.base_url, "Starting foodflow");

    let document = Arc::new(MemoryDocument::host_page());
    let mut app = App::new(FoodApi::new(http), Arc::clone(&document), session);
    app.start().await;

    match cli.command {
        Command::Show => {}
        Command::Add {
            restaurant_id,
            item_id,
        } => {
            let id = ControlId::AddToCart {
                restaurant_id,
                item_id,
            };
            app.click(&id.to_string()).await;
        }
        Command::Cancel { order_id } => {
            app.click(&ControlId::Cancel { order_id }.to_string()).await;
        }
        Command::Checkout { payment_method_id } => {
            app.click(ids::CHECKOUT_BUTTON).await;
            if document.is_visible(ids::PAYMENT_MODAL) {
                document.set_value(ids::PAYMENT_SELECTOR, &payment_method_id.to_string());
                app.click(ids::SUBMIT_PAYMENT).await;
            }
        }
        Command::AddPayment { name, last4 } => {
            app.click(ids::SHOW_ADD_PAYMENT).await;
            document.set_value(ids::PAYMENT_NAME_INPUT, &name);
            document.set_value(ids::PAYMENT_LAST4_INPUT, &last4);
            app.click(ids::SAVE_PAYMENT_METHOD).await;
        }
    }

    print_page(&document);
    Ok(())
}

fn print_page(document: &MemoryDocument) {
    if let Some(label) = document.html(ids::USER_LABEL).filter(|l| !l.is_empty()) {
        println!("{}", label);
    }
    for notice in document.notices() {
        println!("! {}", notice);
    }
    for (title, id) in [("Restaurants", ids::RESTAURANTS), ("Orders", ids::ORDERS)] {
        println!("\n== {} ==", title);
        println!("{}", document.html(id).unwrap_or_default());
    }
}
