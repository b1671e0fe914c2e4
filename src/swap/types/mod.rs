//! Request and response types for the swap API.

pub mod request;
pub mod response;

pub use request::{Network, PriceRequest, QuoteRequest};
pub use response::{PriceResponse, QuoteResponse, SourceProportion, SourcesResponse};
