//! Payments CLI
//!
//! Command-line interface for the payment records API.

use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use payments_client::PaymentsClient;
use payments_types::CreatePaymentRequest;

#[derive(Parser)]
#[command(name = "payments")]
#[command(author, version, about = "Payment records API CLI client", long_about = None)]
struct Cli {
    /// Base URL of the Payments API
    #[arg(
        long,
        env = "PAYMENTS_API_URL",
        default_value = "http://localhost:3000"
    )]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new payment
    Create {
        /// Unique transaction ID
        #[arg(long)]
        transaction_id: String,
        /// Decimal amount, e.g. 200.00
        #[arg(long)]
        amount: Decimal,
        /// Currency code
        #[arg(long, default_value = "USD")]
        currency: String,
        /// RFC 3339 timestamp; defaults to now on the server
        #[arg(long)]
        timestamp: Option<DateTime<Utc>>,
    },
    /// Get a payment by transaction ID
    Get {
        /// Transaction ID
        transaction_id: String,
    },
    /// Delete a payment by transaction ID
    Delete {
        /// Transaction ID
        transaction_id: String,
    },
    /// Check API health
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = PaymentsClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            let status = if healthy { "healthy" } else { "unhealthy" };
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({ "status": status }))?
            );
            if !healthy {
                std::process::exit(1);
            }
        }

        Commands::Create {
            transaction_id,
            amount,
            currency,
            timestamp,
        } => {
            let req = CreatePaymentRequest {
                transaction_id,
                amount,
                currency,
                timestamp,
            };
            let payment = client.create_payment(&req).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Get { transaction_id } => {
            let payment = client.get_payment(&transaction_id).await?;
            println!("{}", serde_json::to_string_pretty(&payment)?);
        }

        Commands::Delete { transaction_id } => {
            client.delete_payment(&transaction_id).await?;
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "transactionId": transaction_id,
                    "deleted": true,
                }))?
            );
        }
    }

    Ok(())
}
