//! # Seed Data Generator
//!
//! Fills an empty database with sample products for development.
//!
//! ## Usage
//! ```bash
//! # Generate 50 products (default)
//! cargo run -p stockroom-db --bin seed
//!
//! # Generate custom amount
//! cargo run -p stockroom-db --bin seed -- --count 200
//!
//! # Specify database path
//! cargo run -p stockroom-db --bin seed -- --db ./data/products.db
//! ```
//!
//! Products get ids `1..=count`, so the generator refuses to run against a
//! database that already has rows.

use std::env;
use stockroom_core::Product;
use stockroom_db::{Database, DbConfig};

/// Base names combined with a size to build product names.
const NAMES: &[&str] = &[
    "Widget",
    "Gadget",
    "Sprocket",
    "Gear",
    "Bolt",
    "Washer",
    "Bracket",
    "Hinge",
    "Spring",
    "Pulley",
];

/// Size variants with a price multiplier.
const SIZES: &[(&str, f64)] = &[("Small", 1.0), ("Medium", 1.5), ("Large", 2.25), ("XL", 3.0)];

/// Ratings handed out in rotation.
const RATINGS: &[f64] = &[3.0, 3.5, 4.0, 4.5, 5.0];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = env::args().collect();

    let mut count: i64 = 50;
    let mut db_path = String::from("./products_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--count" | "-c" => {
                if i + 1 < args.len() {
                    count = args[i + 1].parse().unwrap_or(50);
                    i += 1;
                }
            }
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Stockroom Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -c, --count <N>    Number of products to generate (default: 50)");
                println!("  -d, --db <PATH>    Database file path (default: ./products_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("Stockroom Seed Data Generator");
    println!("=============================");
    println!("Database: {}", db_path);
    println!("Products: {}", count);
    println!();

    let db = Database::new(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");
    println!("✓ Schema ensured");

    let existing = db.products().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicate ids.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    let mut generated = 0;
    for product_id in 1..=count {
        let product = generate_product(product_id);

        if let Err(e) = db.products().insert(&product).await {
            eprintln!("Failed to insert {}: {}", product.product_id, e);
            continue;
        }
        generated += 1;
    }

    let total: f64 = db
        .products()
        .list_all()
        .await?
        .iter()
        .map(Product::total_price)
        .sum();

    println!();
    println!("✓ Generated {} products", generated);
    println!("  Total stock value: {:.2}", total);

    db.close().await;
    Ok(())
}

/// Builds a deterministic sample product for the given id.
fn generate_product(product_id: i64) -> Product {
    let seed = (product_id - 1) as usize;

    let name = NAMES[seed % NAMES.len()];
    let (size, multiplier) = SIZES[(seed / NAMES.len()) % SIZES.len()];

    // Base price 0.99 - 9.99 in whole cents, scaled by size
    let base_cents = 99 + ((seed * 37) % 901) as i64;
    let price_per_unit = (base_cents as f64 * multiplier).round() / 100.0;

    Product::new(
        product_id,
        format!("{} {}", name, size),
        ((seed * 13) % 120) as i64,
        price_per_unit,
        RATINGS[seed % RATINGS.len()],
    )
}
