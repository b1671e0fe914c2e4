//! Lists the liquidity sources enabled on a few deployed mirrors.
//!
//! Run with tracing enabled:
//! ```sh
//! RUST_LOG=info,hyper_util=off,hyper=off,reqwest=off,h2=off,rustls=off cargo run --example sources --features tracing
//! ```

use tracing::{error, info};
use zeroex_swap_client::swap::Client;
use zeroex_swap_client::swap::types::Network;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let mut client = Client::new(Network::Ethereum.as_ref())?;

    for network in [Network::Ethereum, Network::Polygon, Network::Celo] {
        client.switch_network(network.as_ref())?;

        match client.sources().await {
            Ok(sources) => {
                info!(network = %network, host = %client.host(), count = sources.len());
                for source in &sources {
                    info!(network = %network, source);
                }
            }
            Err(e) => error!(network = %network, error = %e),
        }
    }

    Ok(())
}
