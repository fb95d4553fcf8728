pub mod enrichment;

pub use enrichment::{Enrichment, EnrichmentPort, Lookup};
