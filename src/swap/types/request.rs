//! Swap request types

#![allow(
    clippy::module_name_repetitions,
    reason = "Request suffix is intentional for clarity"
)]

use bon::Builder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::formats::CommaSeparator;
use serde_with::{StringWithSeparator, serde_as};
use strum_macros::{AsRefStr, Display};

/// Networks with a documented 0x swap API deployment.
///
/// [`Client`](crate::swap::Client) accepts any non-empty network string, so
/// deployed api mirrors absent from this list remain usable; the enum covers
/// the documented ones.
#[non_exhaustive]
#[derive(
    AsRefStr, Clone, Copy, Debug, Default, Deserialize, Display, Eq, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Network {
    /// Ethereum mainnet. The only network served without a subdomain.
    #[default]
    Ethereum,
    /// Ethereum Ropsten testnet.
    Ropsten,
    /// Polygon PoS.
    Polygon,
    /// Binance Smart Chain.
    Bsc,
    /// Optimism.
    Optimism,
    /// Fantom Opera.
    Fantom,
    /// Celo.
    Celo,
    /// Avalanche C-Chain.
    Avalanche,
}

/// Optional query parameters for `/price`.
///
/// Every field is passed through to the API verbatim; unset fields are
/// omitted from the query string. The mandatory `sellToken`/`buyToken` pair
/// is supplied as explicit arguments to
/// [`Client::price`](crate::swap::Client::price), not here.
#[serde_as]
#[non_exhaustive]
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct PriceRequest {
    /// Amount of `sellToken` to send, in base units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_amount: Option<String>,
    /// Amount of `buyToken` to receive, in base units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_amount: Option<String>,
    /// Maximum acceptable slippage, e.g. `0.03` for 3%.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage_percentage: Option<Decimal>,
    /// Target gas price for the swap transaction, in wei.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    /// Address that will fill the quote. When provided the API estimates gas
    /// and validates the entire transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker_address: Option<String>,
    /// Liquidity sources to leave out of the quote, e.g. `Uniswap_V3`.
    /// Serialized comma-separated. Cannot be combined with `included_sources`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub excluded_sources: Vec<String>,
    /// The only liquidity sources to draw from, e.g. `RFQT`.
    /// Serialized comma-separated. Cannot be combined with `excluded_sources`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub included_sources: Vec<String>,
    /// Set to `false` to force validation when a `taker_address` is present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_validation: Option<bool>,
    /// Address credited with the affiliate fee set via
    /// `buy_token_percentage_fee`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_recipient: Option<String>,
    /// Share of `buyAmount` (0 to 1.0) attributed to `fee_recipient`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_token_percentage_fee: Option<Decimal>,
    /// Address the trade is attributed to for tracking and analytics. Has no
    /// impact on fees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_address: Option<String>,
}

/// Optional query parameters for `/quote`.
///
/// Same contract as [`PriceRequest`] plus `intent_on_filling`, which opts in
/// to RFQ-T liquidity.
#[serde_as]
#[non_exhaustive]
#[derive(Builder, Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
#[builder(on(String, into))]
pub struct QuoteRequest {
    /// Amount of `sellToken` to send, in base units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sell_amount: Option<String>,
    /// Amount of `buyToken` to receive, in base units.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_amount: Option<String>,
    /// Maximum acceptable slippage, e.g. `0.03` for 3%.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slippage_percentage: Option<Decimal>,
    /// Target gas price for the swap transaction, in wei.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
    /// Address that will fill the quote. When provided the API estimates gas
    /// and validates the entire transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taker_address: Option<String>,
    /// Liquidity sources to leave out of the quote, e.g. `Uniswap_V3`.
    /// Serialized comma-separated. Cannot be combined with `included_sources`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub excluded_sources: Vec<String>,
    /// The only liquidity sources to draw from, e.g. `RFQT`.
    /// Serialized comma-separated. Cannot be combined with `excluded_sources`.
    #[serde_as(as = "StringWithSeparator::<CommaSeparator, String>")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[builder(default)]
    pub included_sources: Vec<String>,
    /// Validation runs by default for `/quote`; set to `true` to skip it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_validation: Option<bool>,
    /// Signals intent to fill, enabling RFQ-T liquidity. Requires
    /// `taker_address`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent_on_filling: Option<bool>,
    /// Address credited with the affiliate fee set via
    /// `buy_token_percentage_fee`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_recipient: Option<String>,
    /// Share of `buyAmount` (0 to 1.0) attributed to `fee_recipient`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buy_token_percentage_fee: Option<Decimal>,
    /// Address the trade is attributed to for tracking and analytics. Has no
    /// impact on fees.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliate_address: Option<String>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;
    use crate::ToQueryParams as _;

    #[test]
    fn network_displays_lowercase() {
        assert_eq!(Network::Ethereum.as_ref(), "ethereum");
        assert_eq!(Network::Bsc.to_string(), "bsc");
        assert_eq!(Network::Avalanche.to_string(), "avalanche");
    }

    #[test]
    fn empty_price_request_serializes_to_nothing() {
        let request = PriceRequest::default();
        assert_eq!(request.query_params(), "");
    }

    #[test]
    fn price_request_query_params() {
        let request = PriceRequest::builder()
            .sell_amount("1000000000000000000")
            .slippage_percentage(dec!(0.03))
            .taker_address("0xab5801a7d398351b8be11c439e05c5b3259aec9b")
            .skip_validation(false)
            .build();

        let params = request.query_params();
        assert!(params.starts_with('?'), "params: {params}");
        assert!(params.contains("sellAmount=1000000000000000000"));
        assert!(params.contains("slippagePercentage=0.03"));
        assert!(params.contains("takerAddress=0xab5801a7d398351b8be11c439e05c5b3259aec9b"));
        assert!(params.contains("skipValidation=false"));
        assert!(!params.contains("buyAmount"));
    }

    #[test]
    fn source_lists_serialize_comma_separated() {
        let request = PriceRequest::builder()
            .excluded_sources(vec!["Uniswap_V3".to_owned(), "SushiSwap".to_owned()])
            .build();

        // Commas are percent-encoded in the query string.
        let params = request.query_params();
        assert!(
            params.contains("excludedSources=Uniswap_V3%2CSushiSwap"),
            "params: {params}"
        );
        assert!(!params.contains("includedSources"));
    }

    #[test]
    fn quote_request_query_params() {
        let request = QuoteRequest::builder()
            .buy_amount("5000000")
            .intent_on_filling(true)
            .fee_recipient("0xab5801a7d398351b8be11c439e05c5b3259aec9b")
            .buy_token_percentage_fee(dec!(0.01))
            .build();

        let params = request.query_params();
        assert!(params.contains("buyAmount=5000000"));
        assert!(params.contains("intentOnFilling=true"));
        assert!(params.contains("feeRecipient=0xab5801a7d398351b8be11c439e05c5b3259aec9b"));
        assert!(params.contains("buyTokenPercentageFee=0.01"));
    }
}
