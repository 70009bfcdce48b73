//! Create a payment and look it up again
//!
//! Reads `NUVO_PAYMENT_BASE_URL`, `NUVO_CLIENT_ID` and `NUVO_CLIENT_SECRET`
//! from the environment or a `.env` file in the working directory.
//!
//! Run with: `cargo run --example create_payment`

use nuvo_payment::{CreatePayment, NuvoPayment, Outcome};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let nuvo = NuvoPayment::from_env()?;

    println!("💳 Creating payment...");
    let created = nuvo
        .payments
        .create(
            CreatePayment::new(49.99)
                .currency("USD")
                .redirect_url("success", "https://example.com/success")
                .redirect_url("cancel", "https://example.com/cancel")
                .metadata_entry("order_id", "ORD-12345"),
        )
        .await;

    let payment_id = match &created {
        Outcome::Success { body } => {
            println!("✅ Payment created: {}", body);
            body["payment_id"].as_str().map(str::to_string)
        }
        Outcome::Failure(err) => {
            println!("❌ Payment failed ({}): {}", err.http_status, err.message);
            None
        }
    };

    if let Some(payment_id) = payment_id {
        println!("🔍 Looking up {}...", payment_id);
        let found = nuvo.payments.find(&payment_id).await;
        println!("{}", serde_json::to_string_pretty(&found.to_value())?);
    }

    Ok(())
}
