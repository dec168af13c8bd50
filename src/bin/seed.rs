use cashier_api::{
    config::AppConfig,
    db::{create_pool, run_migrations},
    dto::products::CreateProductRequest,
    store::ProductStore,
    validation::validate_create,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database).await?;
    // Ensure migrations are applied.
    run_migrations(&pool).await?;

    let store = ProductStore::new(pool);
    seed_products(&store).await?;

    println!("Seed completed");
    Ok(())
}

async fn seed_products(store: &ProductStore) -> anyhow::Result<()> {
    if !store.list_all().await?.is_empty() {
        println!("Products table is not empty, skipping");
        return Ok(());
    }

    // Prices in cents.
    let products = vec![
        ("Ballpoint Pen", 150, 120),
        ("A5 Notebook", 450, 60),
        ("Mineral Water 600ml", 100, 240),
        ("Instant Noodles", 275, 80),
        ("AA Batteries (4 pack)", 899, 25),
    ];

    for (name, cents, stock) in products {
        let request = CreateProductRequest {
            name: name.to_string(),
            price: Decimal::new(cents, 2),
            stock,
        };
        let product = store.create(&validate_create(request)?).await?;
        println!("Seeded product {} ({})", product.name, product.id);
    }

    Ok(())
}
