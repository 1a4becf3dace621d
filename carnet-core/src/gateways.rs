use thiserror::Error;

use crate::entities::GeocodedLocation;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("no match found for the given address")]
    NoMatch,
    #[error("the matched position is outside the covered area")]
    OutOfCoverage,
    #[error("confidence score {0} is below the acceptance threshold")]
    LowConfidence(f64),
    #[error("the matched address is in another country")]
    WrongCountry,
    #[error("geocoding provider failed: {0}")]
    Provider(#[from] anyhow::Error),
}

/// A single external geocoding provider.
///
/// One call means exactly one pass: no retries on transient failures.
/// Callers that need a fallback chain stack several gateways.
pub trait GeoCodingGateway {
    fn resolve_address(&self, address: &str) -> Result<GeocodedLocation, GeocodeError>;

    /// Short label for logs and the `source` field of results.
    fn name(&self) -> &str;
}
