//! # Seed Data Generator
//!
//! Populates the database with a starter catalog for development.
//!
//! ## Usage
//! ```bash
//! # Seed the default development database
//! cargo run -p mercato-db --bin seed
//!
//! # Specify database path
//! cargo run -p mercato-db --bin seed -- --db ./data/mercato.db
//! ```
//!
//! The catalog is a small fixed set of butcher-counter cuts, priced per kg
//! in integer cents. Seeding is skipped when the catalog is non-empty.

use std::env;

use mercato_db::{Database, DbConfig};
use tracing_subscriber::EnvFilter;

/// Starter catalog: (name, price in cents, initial stock).
const CATALOG: &[(&str, i64, i64)] = &[
    ("Picanha", 5990, 20),
    ("Alcatra", 3450, 25),
    ("Fraldinha", 2800, 15),
    ("Cupim", 2250, 10),
    ("Contra File", 3990, 18),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,mercato=debug,sqlx=warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let mut db_path = String::from("./mercato_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Mercato POS Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./mercato_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Mercato POS Seed Data Generator");
    println!("==================================");
    println!("Database: {}", db_path);
    println!();

    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;
    let store = db.store();

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    let existing = store.count_products().await?;
    if existing > 0 {
        println!("⚠ Database already has {} products", existing);
        println!("  Skipping seed to avoid duplicates.");
        println!("  Delete the database file to regenerate.");
        return Ok(());
    }

    println!();
    println!("Inserting catalog...");

    for (name, price_cents, stock) in CATALOG {
        let product = store.insert_product(name, *price_cents, *stock).await?;
        println!(
            "  {} at {} ({} in stock)",
            product.name,
            product.price(),
            product.stock
        );
    }

    println!();
    println!("✓ Seed complete: {} products", CATALOG.len());

    Ok(())
}
