//! fetch
//!
//! Command-line demonstration of the two-track fetch boundary.
//!
//! # Usage
//!
//! ```bash
//! # Fetch the default address
//! cargo run --bin fetch
//!
//! # Fetch a specific address
//! cargo run --bin fetch -- http://example.com/index.html
//! ```

use std::process::ExitCode;
use std::time::Duration;

use reqwest::Url;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fetch_sample::client::{build_client, fetch};

const DEFAULT_ADDRESS: &str = "http://www.digger.org/index.html";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fetch=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let raw = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());
    let address = match Url::parse(&raw) {
        Ok(address) => address,
        Err(error) => {
            tracing::error!("invalid address {raw}: {error}");
            return ExitCode::FAILURE;
        }
    };

    let client = match build_client(REQUEST_TIMEOUT) {
        Ok(client) => client,
        Err(error) => {
            tracing::error!("could not build the HTTP client: {error}");
            return ExitCode::FAILURE;
        }
    };

    let result = fetch(&client, address).await;

    // One report string, whichever track was taken.
    let report = result
        .clone()
        .map_ok(|resource| resource.body)
        .fold(|failure| failure.message());
    println!("{report}");

    // Or tap both tracks for effect only.
    result
        .tap_ok(|resource| tracing::info!(bytes = resource.body.len(), "fetch succeeded"))
        .tap_err(|failure| tracing::warn!("{}", failure.message()));

    ExitCode::SUCCESS
}
