//! Demo client: posts one profile to a running service and prints the result.

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::{json, Value};

/// Ask a running EV recommendation service for a recommendation
#[derive(Parser)]
#[command(name = "evrec-trigger")]
#[command(about = "Sends a sample profile to /rekomendasi-mobil", long_about = None)]
struct Cli {
    /// Recommendation endpoint URL
    #[arg(long, default_value = "http://localhost:5000/rekomendasi-mobil")]
    url: String,

    /// Age of the user
    #[arg(long, default_value = "30")]
    umur: u32,

    /// Style preference, e.g. sporty, luxury, economic
    #[arg(long, default_value = "modern dan minimalis")]
    gaya: String,

    /// Occupation
    #[arg(long, default_value = "software engineer")]
    pekerjaan: String,

    /// Manufacturer, or "all" for any manufacturer
    #[arg(long, default_value = "all")]
    manufacturer: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let payload = json!({
        "umur": cli.umur,
        "gaya": cli.gaya,
        "pekerjaan": cli.pekerjaan,
        "manufacturer": cli.manufacturer,
    });

    let response = reqwest::Client::new()
        .post(&cli.url)
        .json(&payload)
        .send()
        .await
        .with_context(|| format!("Failed to reach {}", cli.url))?;

    let status = response.status();
    let body = response.text().await.context("Failed to read response body")?;

    if !status.is_success() {
        eprintln!("Error: {} - {}", status.as_u16(), body);
        std::process::exit(1);
    }

    let parsed: Value = serde_json::from_str(&body).context("Response was not valid JSON")?;
    let rekomendasi = parsed
        .get("rekomendasi")
        .and_then(Value::as_str)
        .context("Response did not contain a recommendation")?;

    println!("Rekomendasi Mobil Listrik: {rekomendasi}");
    Ok(())
}
