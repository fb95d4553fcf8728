pub mod http_enrichment_client;
pub mod wire;

pub use http_enrichment_client::{EnrichmentEndpoints, HttpEnrichmentClient};
