//! Browse the catalog from the command line
//!
//! Run: cargo run -p storefront-client --example browse -- [query]

use storefront_client::logger::init_logger;
use storefront_client::pages::HomePage;
use storefront_client::{ClientConfig, Gateway, Preferences, SessionContext, SessionEvent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let config = ClientConfig::from_env()?;
    let prefs = Preferences::load(&config.data_dir)?;
    let gateway = Gateway::new(config.build_http_client()?);

    let mut session = SessionContext::from_preferences(&prefs);
    let header = session.subscribe(|event| {
        if let SessionEvent::Refreshed(user) = event {
            match user {
                Some(user) => tracing::info!(username = %user.username, admin = user.is_admin(), "Signed in"),
                None => tracing::info!("Browsing anonymously"),
            }
        }
    });
    session.refresh(&gateway).await;

    let query = std::env::args().nth(1);
    let mut home = HomePage::new();
    home.load(&gateway, query.as_deref()).await;

    if let Some(status) = home.status() {
        println!("{}", status);
    }
    let catalog = home.catalog();
    println!(
        "Page {}/{} ({} products, language {})",
        catalog.current_page(),
        catalog.total_pages(),
        catalog.filtered_len(),
        session.language()
    );
    for product in catalog.visible() {
        println!("  #{:<4} {:<32} {:>10} {}", product.id, product.name, product.price, product.currency);
    }

    session.unsubscribe(header);
    Ok(())
}
