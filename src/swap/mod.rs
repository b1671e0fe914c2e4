//! Swap API client and types.
//!
//! This module wraps the three endpoints of the 0x swap API:
//!
//! - **`/price`**: an indicative, non-binding exchange rate for a token pair
//! - **`/quote`**: a firm, fillable quote including transaction data
//! - **`/sources`**: the liquidity sources enabled for the current network
//!
//! Endpoint selection is driven by a network identifier: `"ethereum"` maps to
//! `https://api.0x.org/swap/v1`, every other identifier `n` maps to
//! `https://n.api.0x.org/swap/v1`.
//!
//! # Example
//!
//! ```rust,no_run
//! use zeroex_swap_client::swap::Client;
//! use zeroex_swap_client::swap::types::{Network, QuoteRequest};
//!
//! # async fn example() -> zeroex_swap_client::Result<()> {
//! let mut client = Client::new(Network::Bsc.as_ref())?;
//!
//! let request = QuoteRequest::builder()
//!     .sell_amount("1000000000000000000")
//!     .build();
//!
//! let quote = client
//!     .quote(
//!         "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
//!         "0x111111111117dc0aa78b770fa6a738034120c302",
//!         &request,
//!     )
//!     .await?;
//! println!("fill via {} with data {}", quote.to, quote.data);
//!
//! // Retarget the same client at another mirror.
//! client.switch_network(Network::Polygon.as_ref())?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod types;

pub use client::Client;
