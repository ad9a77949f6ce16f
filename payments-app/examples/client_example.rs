//! Client example demonstrating the payment record flow against a running server.
//!
//! Run with: cargo run -p payments-app --example client_example --no-default-features --features sqlite

use payments_client::PaymentsClient;
use payments_hex::{PaymentService, inbound::HttpServer};
use payments_repo::build_repo;
use payments_types::CreatePaymentRequest;
use rust_decimal_macros::dec;
use tempfile::tempdir;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt().with_env_filter("info").init();

    // Bind an available port
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    // Use a temp file-backed SQLite DB
    let tmp = tempdir()?;
    let db_path = tmp.path().join("payments.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    println!("🚀 Starting server on {addr}...");
    println!("   Database: {db_url}");

    // Build store (handles connection and migration)
    let repo = build_repo(&db_url).await?;

    // Start server in background
    let server = HttpServer::new(PaymentService::new(repo));
    tokio::spawn(server.serve(listener));

    let client = PaymentsClient::new(format!("http://{addr}"));

    // ─────────────────────────────────────────────────────────────────────────
    // Demo: Full payment flow
    // ─────────────────────────────────────────────────────────────────────────

    let healthy = client.health().await?;
    println!("✅ Server healthy: {healthy}");

    let payment = client
        .create_payment(&CreatePaymentRequest {
            transaction_id: "TXN12345".into(),
            amount: dec!(200.00),
            currency: "USD".into(),
            timestamp: None,
        })
        .await?;
    println!(
        "✅ Stored payment {} (id={}) for {} {}",
        payment.transaction_id(),
        payment.id(),
        payment.amount(),
        payment.currency()
    );

    let fetched = client.get_payment("TXN12345").await?;
    println!("✅ Fetched: {}", serde_json::to_string_pretty(&fetched)?);

    client.delete_payment("TXN12345").await?;
    println!("✅ Deleted TXN12345");

    match client.get_payment("TXN12345").await {
        Err(err) => println!("✅ Lookup after delete fails: {err}"),
        Ok(_) => anyhow::bail!("payment still present after delete"),
    }

    println!("\n🎉 Example completed successfully!");

    Ok(())
}
