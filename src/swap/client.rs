//! Client for the 0x swap API.
//!
//! Provides the [`Client`] for fetching indicative prices, firm quotes, and
//! liquidity sources from the `/swap/v1` endpoints. No endpoint requires
//! authentication.

use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Client as ReqwestClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;
use url::form_urlencoded::Serializer as QuerySerializer;

use super::types::request::{Network, PriceRequest, QuoteRequest};
use super::types::response::{PriceResponse, QuoteResponse, SourcesResponse};
use crate::error::Error;
use crate::{Result, ToQueryParams as _};

/// HTTP client for the 0x swap API.
///
/// A [`Client`] targets one network at a time. The base URL is derived from
/// the network identifier: `https://api.0x.org/swap/v1` for `"ethereum"`,
/// `https://{network}.api.0x.org/swap/v1` for everything else. The two are
/// always updated together, so [`Client::network`] and [`Client::host`] can
/// never disagree.
///
/// # Example
///
/// ```rust,no_run
/// use zeroex_swap_client::swap::Client;
/// use zeroex_swap_client::swap::types::{Network, PriceRequest};
///
/// # async fn example() -> zeroex_swap_client::Result<()> {
/// let client = Client::new(Network::Polygon.as_ref())?;
/// assert_eq!(client.host().as_str(), "https://polygon.api.0x.org/swap/v1");
///
/// let price = client
///     .price(
///         "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE",
///         "0x111111111117dc0aa78b770fa6a738034120c302",
///         &PriceRequest::default(),
///     )
///     .await?;
/// println!("price: {}", price.price);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Client {
    network: String,
    host: Url,
    client: ReqwestClient,
}

impl Default for Client {
    fn default() -> Self {
        Client::new(Network::Ethereum.as_ref())
            .expect("Client for the ethereum deployment should succeed")
    }
}

impl Client {
    /// Creates a client for the given network or deployed api mirror.
    ///
    /// Any non-empty string is accepted and interpolated into the base URL,
    /// so mirrors beyond the [`Network`] enumeration keep working.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `network` is empty, a URL error if the
    /// derived base URL does not parse, or a transport error if the HTTP
    /// client cannot be created.
    pub fn new(network: &str) -> Result<Self> {
        let host = swap_host(network)?;
        Self::build(network, host)
    }

    /// Creates a client with an explicit base URL instead of the derived one.
    ///
    /// `network` is still validated and reported by [`Client::network`].
    /// This is primarily useful for testing against a local server.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `network` is empty, a URL error if
    /// `host` does not parse, or a transport error if the HTTP client cannot
    /// be created.
    pub fn with_host(network: &str, host: &str) -> Result<Self> {
        if network.is_empty() {
            return Err(Error::validation("Invalid network endpoint"));
        }

        Self::build(network, Url::parse(host)?)
    }

    fn build(network: &str, host: Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert("User-Agent", HeaderValue::from_static("zeroex_swap_client"));
        headers.insert("Accept", HeaderValue::from_static("*/*"));
        headers.insert("Connection", HeaderValue::from_static("keep-alive"));
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = ReqwestClient::builder().default_headers(headers).build()?;

        Ok(Self {
            network: network.to_owned(),
            host,
            client,
        })
    }

    /// Returns the base URL requests are issued against.
    #[must_use]
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Returns the current network identifier.
    #[must_use]
    pub fn network(&self) -> &str {
        &self.network
    }

    /// Points the client at another network or deployed api mirror.
    ///
    /// The network identifier and the derived base URL are replaced together;
    /// on error the previous state is left untouched. Requests already
    /// dispatched keep the base URL captured when they were built.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `network` is empty, or a URL error if
    /// the derived base URL does not parse.
    pub fn switch_network(&mut self, network: &str) -> Result<()> {
        let host = swap_host(network)?;

        self.network = network.to_owned();
        self.host = host;

        Ok(())
    }

    /// Fetches an indicative price for swapping `sell_token` into
    /// `buy_token`.
    ///
    /// The returned rate carries no commitment to fill; use
    /// [`Client::quote`] for a fillable offer. `params` fields are passed
    /// through to the API verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the body cannot be decoded.
    pub async fn price(
        &self,
        sell_token: &str,
        buy_token: &str,
        params: &PriceRequest,
    ) -> Result<PriceResponse> {
        self.get("price", &pair_query(sell_token, buy_token, params))
            .await
    }

    /// Fetches a firm quote for swapping `sell_token` into `buy_token`.
    ///
    /// The response includes the transaction data sufficient to fill the
    /// quote on-chain. Unlike [`Client::price`], submitting this request
    /// signals readiness to trade to market makers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the body cannot be decoded.
    pub async fn quote(
        &self,
        sell_token: &str,
        buy_token: &str,
        params: &QuoteRequest,
    ) -> Result<QuoteResponse> {
        self.get("quote", &pair_query(sell_token, buy_token, params))
            .await
    }

    /// Fetches the liquidity sources enabled for the current network.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the API responds with a
    /// non-success status, or the body lacks the `records` field.
    pub async fn sources(&self) -> Result<Vec<String>> {
        let response: SourcesResponse = self.get("sources", "").await?;
        Ok(response.records)
    }

    async fn get<Response: DeserializeOwned>(&self, path: &str, query: &str) -> Result<Response> {
        // Derived hosts display without a trailing slash, but a bare origin
        // (e.g. `http://127.0.0.1:8080` via `with_host`) normalizes to one.
        let host = self.host.as_str().trim_end_matches('/');

        // The full URL is captured here, before the first await, so a
        // concurrent network switch cannot change where this request goes.
        let request = self
            .client
            .request(Method::GET, format!("{host}/{path}{query}"))
            .build()?;

        crate::request(&self.client, request).await
    }
}

/// Derives the base URL for a network identifier.
///
/// The single place this derivation lives; both the constructor and
/// [`Client::switch_network`] go through it, so `network` and `host` cannot
/// drift apart.
fn swap_host(network: &str) -> Result<Url> {
    if network.is_empty() {
        return Err(Error::validation("Invalid network endpoint"));
    }

    let host = if network == Network::Ethereum.as_ref() {
        "https://api.0x.org/swap/v1".to_owned()
    } else {
        format!("https://{network}.api.0x.org/swap/v1")
    };

    Ok(Url::parse(&host)?)
}

/// Builds the query string for `/price` and `/quote`: the mandatory token
/// pair first, then the serialized option bag.
fn pair_query<P: Serialize>(sell_token: &str, buy_token: &str, params: &P) -> String {
    let mut query = QuerySerializer::for_suffix(String::from("?"), 1);
    query.append_pair("buyToken", buy_token);
    query.append_pair("sellToken", sell_token);
    let mut query = query.finish();

    if let Some(rest) = params.query_params().strip_prefix('?') {
        query.push('&');
        query.push_str(rest);
    }

    query
}
