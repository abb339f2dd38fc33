// food-client/examples/list_orders.rs
// Print the restaurants and orders visible to a logged-in session

use food_client::{ClientConfig, FoodApi};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        println!("Usage: {} <base_url> [session_cookie]", args[0]);
        println!("  Example: {} http://localhost:5000 session=eyJfZnJlc2giOmZhbHNlfQ", args[0]);
        return Ok(());
    }

    let mut config = ClientConfig::new(&args[1]);
    if let Some(cookie) = args.get(2) {
        config = config.with_session_cookie(cookie);
    }
    let api = FoodApi::new(config.build_http_client()?);

    match api.list_restaurants().await {
        Ok(restaurants) => {
            for r in restaurants {
                tracing::info!("{} ({}) - {} menu items", r.name, r.country, r.menu.len());
            }
        }
        Err(e) => tracing::error!("Failed to list restaurants: {}", e),
    }

    match api.list_orders().await {
        Ok(orders) => {
            for o in orders {
                tracing::info!("Order #{} [{}] {}", o.id, o.status, o.item_summary());
            }
        }
        Err(e) => tracing::error!("Failed to list orders: {}", e),
    }

    Ok(())
}
