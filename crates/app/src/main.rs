//! Orchard Application CLI

use std::process;

use clap::{Args, Parser, Subcommand};
use orchard_app::{
    database::{self, Db, MIGRATOR},
    domain::products::{
        PgProductsService,
        models::{NewProduct, Variant},
    },
};

#[derive(Debug, Parser)]
#[command(name = "orchard-app", about = "Orchard CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load or refresh the initial product catalog.
    Seed(SeedArgs),
}

#[derive(Debug, Args)]
struct SeedArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL")]
    database_url: String,
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        eprintln!("{error}");
        process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Commands::Seed(args) => seed(args).await,
    }
}

async fn seed(args: SeedArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    MIGRATOR
        .run(&pool)
        .await
        .map_err(|error| format!("failed to run migrations: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    for product in catalog() {
        let id = product.id;

        service
            .upsert_product(product)
            .await
            .map_err(|error| format!("failed to seed product {id}: {error}"))?;

        println!("seeded product {id}");
    }

    Ok(())
}

/// The launch catalog. Prices are in paise; re-running refreshes entries in
/// place.
fn catalog() -> Vec<NewProduct> {
    fn variant(unit: &str, price: u64) -> Variant {
        Variant {
            unit: unit.to_string(),
            price,
        }
    }

    vec![
        NewProduct {
            id: 1,
            name: "Roasted Flax Seeds".to_string(),
            price: 9900,
            unit: "250g".to_string(),
            variants: vec![variant("250g", 9900), variant("500g", 17900)],
        },
        NewProduct {
            id: 2,
            name: "Roasted Pumpkin Seeds".to_string(),
            price: 14900,
            unit: "250g".to_string(),
            variants: vec![variant("250g", 14900), variant("500g", 27900)],
        },
        NewProduct {
            id: 3,
            name: "Chia Seeds".to_string(),
            price: 12900,
            unit: "250g".to_string(),
            variants: vec![variant("250g", 12900), variant("500g", 23900)],
        },
        NewProduct {
            id: 4,
            name: "Gulkand".to_string(),
            price: 19900,
            unit: "400g".to_string(),
            variants: vec![],
        },
        NewProduct {
            id: 5,
            name: "Kokum Agal".to_string(),
            price: 16900,
            unit: "500ml".to_string(),
            variants: vec![],
        },
        NewProduct {
            id: 6,
            name: "Amla Candy".to_string(),
            price: 11900,
            unit: "250g".to_string(),
            variants: vec![variant("250g", 11900), variant("500g", 21900)],
        },
    ]
}
