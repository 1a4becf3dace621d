use thiserror::Error;

use crate::{gateways::GeocodeError, geo_validate::GeoValidationError, repositories};

#[derive(Debug, Error)]
pub enum Error {
    #[error("the address must not be empty")]
    EmptyAddress,
    #[error("could not geocode the address: {0}")]
    Geocode(#[from] GeocodeError),
    #[error(transparent)]
    OutOfBounds(#[from] GeoValidationError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}
