//! Fetches an indicative price for selling 1 ETH into 1INCH on mainnet.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example price --features tracing
//! ```

use rust_decimal::Decimal;
use tracing::{error, info};
use zeroex_swap_client::swap::Client;
use zeroex_swap_client::swap::types::{Network, PriceRequest};

const ETH: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";
const ONE_INCH: &str = "0x111111111117dc0aa78b770fa6a738034120c302";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let network = std::env::var("ZEROEX_NETWORK")
        .unwrap_or_else(|_| Network::Ethereum.as_ref().to_owned());
    let client = Client::new(&network)?;

    info!(network = client.network(), host = %client.host());

    // 3% slippage allowed
    let request = PriceRequest::builder()
        .sell_amount("1000000000000000000")
        .slippage_percentage(Decimal::new(3, 2))
        .build();

    match client.price(ETH, ONE_INCH, &request).await {
        Ok(price) => {
            info!(
                endpoint = "price",
                price = %price.price,
                buy_amount = %price.buy_amount,
                sources = price.sources.len()
            );
        }
        Err(e) => error!(endpoint = "price", error = %e),
    }

    Ok(())
}
