use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde_json::Value;

use quoter::config::{load_config, ConfigError};

#[derive(Parser)]
#[command(name = "quoter-cli")]
#[command(about = "Management CLI for the financing quote service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Request a quote
    Quote {
        #[arg(long)]
        vehicle_type: String,
        #[arg(long)]
        vehicle_subtype: Option<String>,
        #[arg(long)]
        brand: String,
        #[arg(long)]
        year: String,
        #[arg(long)]
        price: String,
        #[arg(long)]
        downpayment: String,
        #[arg(long, default_value = "yes")]
        vat_included: String,
    },
    /// List brands eligible for financing
    Brands,
    /// Show when the calculator was last updated
    UpdateDate,
    /// Validate a configuration file without starting the service
    CheckConfig { path: PathBuf },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Quote {
            vehicle_type,
            vehicle_subtype,
            brand,
            year,
            price,
            downpayment,
            vat_included,
        } => {
            let mut query = vec![
                ("vehicle_type", vehicle_type),
                ("brand", brand),
                ("year", year),
                ("price", price),
                ("downpayment", downpayment),
                ("VAT_included", vat_included),
            ];
            if let Some(subtype) = vehicle_subtype {
                query.push(("vehicle_subtype", subtype));
            }
            let res = client
                .get(format!("{}/quote", cli.url))
                .query(&query)
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Brands => {
            let res = client.get(format!("{}/brands", cli.url)).send().await?;
            print_response(res).await?;
        }
        Commands::UpdateDate => {
            let res = client
                .get(format!("{}/calc_update_date", cli.url))
                .send()
                .await?;
            println!("{}", res.text().await?);
        }
        Commands::CheckConfig { path } => match load_config(&path) {
            Ok(config) => println!(
                "{}: OK (rules revision {})",
                path.display(),
                config.rules.revision
            ),
            Err(ConfigError::Validation(issues)) => {
                eprintln!("{}: {} issue(s)", path.display(), issues.len());
                for issue in issues {
                    eprintln!("  {}", issue);
                }
                std::process::exit(1);
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                std::process::exit(1);
            }
        },
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;
    if !status.is_success() {
        eprintln!("Error: service returned status {}", status);
    }
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
