//! Client SDK for the 0x swap API (v1).
//!
//! The 0x API aggregates liquidity across decentralized exchanges and serves
//! indicative prices, firm quotes (with fillable transaction data), and the
//! set of liquidity sources enabled per network. This crate wraps the three
//! `/swap/v1` endpoints behind [`swap::Client`], with endpoint selection
//! driven by a network identifier.
//!
//! # Example
//!
//! ```rust,no_run
//! use rust_decimal::Decimal;
//! use zeroex_swap_client::swap::Client;
//! use zeroex_swap_client::swap::types::{Network, PriceRequest};
//!
//! # async fn example() -> zeroex_swap_client::Result<()> {
//! let client = Client::new(Network::Polygon.as_ref())?;
//!
//! // 3% slippage allowed
//! let request = PriceRequest::builder()
//!     .slippage_percentage(Decimal::new(3, 2))
//!     .build();
//! let price = client
//!     .price(
//!         "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
//!         "0x111111111117dc0aa78b770fa6a738034120c302",
//!         &request,
//!     )
//!     .await?;
//! println!("price: {}", price.price);
//! # Ok(())
//! # }
//! ```
//!
//! Any non-empty network string is accepted, so deployed api mirrors that are
//! not listed in [`swap::types::Network`] keep working.

pub mod error;
pub mod swap;

use reqwest::{Client as ReqwestClient, Method, Request};
use serde::Serialize;
use serde::de::DeserializeOwned;

pub use error::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Serializes a request type into a URL query string.
///
/// Produces `?key=value&..` for non-empty serializations and an empty string
/// otherwise, so the result can be appended to a path unconditionally.
pub trait ToQueryParams: Serialize {
    /// Returns the query string for this request, including the leading `?`.
    fn query_params(&self) -> String {
        match serde_html_form::to_string(self) {
            Ok(params) if !params.is_empty() => format!("?{params}"),
            _ => String::new(),
        }
    }
}

impl<T: Serialize> ToQueryParams for T {}

/// Executes a request and deserializes the JSON response.
///
/// Non-success statuses are mapped to [`error::Kind::Status`] with the error
/// body the API attached; bodies that do not match the expected shape are
/// mapped to [`error::Kind::Decode`].
pub(crate) async fn request<Response: DeserializeOwned>(
    client: &ReqwestClient,
    request: Request,
) -> Result<Response> {
    let method = request.method().clone();
    let path = request.url().path().to_owned();

    let response = client.execute(request).await?;
    let status = response.status();

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(Error::status(status, method, path, message));
    }

    let body = response.text().await?;
    deserialize(&method, &path, &body)
}

#[cfg(feature = "tracing")]
fn deserialize<Response: DeserializeOwned>(
    method: &Method,
    path: &str,
    body: &str,
) -> Result<Response> {
    let json = &mut serde_json::Deserializer::from_str(body);
    let mut unused = Vec::new();
    let ignored = serde_ignored::Deserializer::new(json, |field| unused.push(field.to_string()));
    let result = serde_path_to_error::deserialize(ignored);

    if !unused.is_empty() {
        tracing::debug!(%method, path, fields = ?unused, "response contained unrecognized fields");
    }

    result.map_err(|error| {
        tracing::error!(%method, path, %error, "failed to deserialize response");
        Error::decode(error.to_string())
    })
}

#[cfg(not(feature = "tracing"))]
fn deserialize<Response: DeserializeOwned>(
    _method: &Method,
    _path: &str,
    body: &str,
) -> Result<Response> {
    serde_json::from_str(body).map_err(Error::from)
}
