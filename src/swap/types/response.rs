//! Swap response types

#![allow(
    clippy::module_name_repetitions,
    reason = "Response suffix is intentional for clarity"
)]

use rust_decimal::Decimal;
use serde::Deserialize;

/// Share of a swap routed through a single liquidity source.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SourceProportion {
    /// Liquidity source name, e.g. `Uniswap_V3`.
    pub name: String,
    /// Fraction of the swap routed through this source (0 to 1).
    pub proportion: Decimal,
}

/// An indicative, non-binding price for a token pair (`/price`).
///
/// Fields the API does not guarantee on every response are optional.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PriceResponse {
    /// Exchange rate between `sellToken` and `buyToken`.
    pub price: Decimal,
    /// Estimated change in the price caused by this trade's size.
    pub estimated_price_impact: Option<Decimal>,
    /// Amount of ether (in wei) to attach to the transaction.
    pub value: Option<String>,
    /// Gas price (in wei) the quote was priced at.
    pub gas_price: Option<String>,
    /// Gas limit suggested for the swap transaction.
    pub gas: Option<String>,
    /// Estimated gas consumption of the swap.
    pub estimated_gas: Option<String>,
    /// Protocol fee (in wei) included in `value`.
    pub protocol_fee: Option<String>,
    /// Minimum protocol fee (in wei) the transaction must carry.
    pub minimum_protocol_fee: Option<String>,
    /// ERC20 address of the token being bought.
    pub buy_token_address: String,
    /// Amount of `buyToken` received, in base units.
    pub buy_amount: String,
    /// ERC20 address of the token being sold.
    pub sell_token_address: String,
    /// Amount of `sellToken` sent, in base units.
    pub sell_amount: String,
    /// Distribution of the swap across liquidity sources.
    #[serde(default)]
    pub sources: Vec<SourceProportion>,
    /// Contract address that must be approved to spend `sellToken`.
    pub allowance_target: Option<String>,
    /// Exchange rate between `sellToken` and the chain's native token.
    pub sell_token_to_eth_rate: Option<Decimal>,
    /// Exchange rate between `buyToken` and the chain's native token.
    pub buy_token_to_eth_rate: Option<Decimal>,
}

/// A firm, fillable quote for a token pair (`/quote`).
///
/// Includes the transaction data sufficient to execute the trade on-chain.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Exchange rate between `sellToken` and `buyToken`.
    pub price: Decimal,
    /// Worst-case exchange rate after the allowed slippage.
    pub guaranteed_price: Decimal,
    /// Estimated change in the price caused by this trade's size.
    pub estimated_price_impact: Option<Decimal>,
    /// Contract address to submit the transaction to.
    pub to: String,
    /// ABI-encoded call data for the swap transaction.
    pub data: String,
    /// Amount of ether (in wei) to attach to the transaction.
    pub value: Option<String>,
    /// Gas price (in wei) the quote was priced at.
    pub gas_price: Option<String>,
    /// Gas limit suggested for the swap transaction.
    pub gas: Option<String>,
    /// Estimated gas consumption of the swap.
    pub estimated_gas: Option<String>,
    /// Protocol fee (in wei) included in `value`.
    pub protocol_fee: Option<String>,
    /// Minimum protocol fee (in wei) the transaction must carry.
    pub minimum_protocol_fee: Option<String>,
    /// ERC20 address of the token being bought.
    pub buy_token_address: String,
    /// Amount of `buyToken` received, in base units.
    pub buy_amount: String,
    /// ERC20 address of the token being sold.
    pub sell_token_address: String,
    /// Amount of `sellToken` sent, in base units.
    pub sell_amount: String,
    /// Distribution of the swap across liquidity sources.
    #[serde(default)]
    pub sources: Vec<SourceProportion>,
    /// Contract address that must be approved to spend `sellToken`.
    pub allowance_target: Option<String>,
    /// Exchange rate between `sellToken` and the chain's native token.
    pub sell_token_to_eth_rate: Option<Decimal>,
    /// Exchange rate between `buyToken` and the chain's native token.
    pub buy_token_to_eth_rate: Option<Decimal>,
}

/// Response from `/sources`.
///
/// [`Client::sources`](crate::swap::Client::sources) unwraps `records` and
/// returns the names directly.
#[non_exhaustive]
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct SourcesResponse {
    /// Names of the liquidity sources enabled for the network.
    pub records: Vec<String>,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn deserialize_price_response() {
        let json = r#"{
            "price": "1.478",
            "estimatedPriceImpact": "0.0032",
            "value": "0",
            "gasPrice": "42000000000",
            "gas": "111000",
            "estimatedGas": "111000",
            "protocolFee": "0",
            "minimumProtocolFee": "0",
            "buyTokenAddress": "0x111111111117dc0aa78b770fa6a738034120c302",
            "buyAmount": "1478000000000000000",
            "sellTokenAddress": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
            "sellAmount": "1000000000000000000",
            "sources": [
                {"name": "Uniswap_V3", "proportion": "0.8"},
                {"name": "SushiSwap", "proportion": "0.2"}
            ],
            "allowanceTarget": "0x0000000000000000000000000000000000000000",
            "sellTokenToEthRate": "1",
            "buyTokenToEthRate": "1.478"
        }"#;
        let response: PriceResponse =
            serde_json::from_str(json).expect("deserialize should succeed");

        assert_eq!(response.price, dec!(1.478));
        assert_eq!(response.estimated_price_impact, Some(dec!(0.0032)));
        assert_eq!(response.buy_amount, "1478000000000000000");
        assert_eq!(response.sources.len(), 2);
        assert_eq!(response.sources[0].name, "Uniswap_V3");
        assert_eq!(response.sources[0].proportion, dec!(0.8));
    }

    #[test]
    fn deserialize_price_response_without_optional_fields() {
        let json = r#"{
            "price": "0.5",
            "buyTokenAddress": "0x111111111117dc0aa78b770fa6a738034120c302",
            "buyAmount": "500000",
            "sellTokenAddress": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
            "sellAmount": "1000000"
        }"#;
        let response: PriceResponse =
            serde_json::from_str(json).expect("deserialize should succeed");

        assert_eq!(response.price, dec!(0.5));
        assert_eq!(response.gas, None);
        assert!(response.sources.is_empty());
    }

    #[test]
    fn deserialize_quote_response() {
        let json = r#"{
            "price": "1.478",
            "guaranteedPrice": "1.46322",
            "to": "0xdef1c0ded9bec7f1a1670819833240f027b25eff",
            "data": "0xd9627aa4000000000000000000000000",
            "value": "0",
            "gasPrice": "42000000000",
            "gas": "111000",
            "buyTokenAddress": "0x111111111117dc0aa78b770fa6a738034120c302",
            "buyAmount": "1478000000000000000",
            "sellTokenAddress": "0xeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeeee",
            "sellAmount": "1000000000000000000",
            "sources": [{"name": "Uniswap_V3", "proportion": "1"}],
            "allowanceTarget": "0xdef1c0ded9bec7f1a1670819833240f027b25eff"
        }"#;
        let response: QuoteResponse =
            serde_json::from_str(json).expect("deserialize should succeed");

        assert_eq!(response.guaranteed_price, dec!(1.46322));
        assert_eq!(response.to, "0xdef1c0ded9bec7f1a1670819833240f027b25eff");
        assert!(response.data.starts_with("0xd9627aa4"));
        assert_eq!(response.sources[0].proportion, dec!(1));
    }

    #[test]
    fn deserialize_sources_response() {
        let json = r#"{"records": ["Uniswap_V3", "SushiSwap", "Curve"]}"#;
        let response: SourcesResponse =
            serde_json::from_str(json).expect("deserialize should succeed");

        assert_eq!(response.records, ["Uniswap_V3", "SushiSwap", "Curve"]);
    }

    #[test]
    fn sources_response_without_records_is_an_error() {
        serde_json::from_str::<SourcesResponse>("{}").expect_err("records field is mandatory");
    }
}
