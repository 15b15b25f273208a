use food_delivery::store::Catalog;
use food_delivery::view::Session;

fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();

    let catalog = match std::env::var("MENU_PATH") {
        Ok(path) => Catalog::load(&path)
            .unwrap_or_else(|err| panic!("Failed to load menu from {}: {}", path, err)),
        Err(_) => Catalog::builtin().clone(),
    };
    tracing::info!(items = catalog.len(), "Catalog loaded");

    let mut session = Session::new(&catalog);
    session.run().expect("Storefront session failed");
}
