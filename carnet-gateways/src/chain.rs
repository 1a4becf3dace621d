use carnet_core::{
    entities::GeocodedLocation,
    gateways::{GeoCodingGateway, GeocodeError},
};

use crate::{ban, photon, BanGeocoder, PhotonGeocoder};

/// An ordered fallback chain of geocoding providers. Providers are
/// tried in order and the first acceptable result wins; every provider
/// gets exactly one pass per call. The error of the last provider is
/// reported when all of them fail.
pub struct GeocoderChain {
    gateways: Vec<Box<dyn GeoCodingGateway + Send + Sync>>,
}

impl GeocoderChain {
    pub fn new(gateways: Vec<Box<dyn GeoCodingGateway + Send + Sync>>) -> Self {
        Self { gateways }
    }

    /// BAN first, Photon second: the standard setup for France.
    pub fn france_default(
        ban_endpoint: Option<&str>,
        photon_endpoint: Option<&str>,
    ) -> anyhow::Result<Self> {
        let ban = BanGeocoder::new(ban_endpoint.unwrap_or(ban::DEFAULT_ENDPOINT))?;
        let photon = PhotonGeocoder::new(photon_endpoint.unwrap_or(photon::DEFAULT_ENDPOINT))?;
        Ok(Self::new(vec![Box::new(ban), Box::new(photon)]))
    }
}

impl GeoCodingGateway for GeocoderChain {
    fn resolve_address(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        let mut last_err = GeocodeError::NoMatch;
        for gateway in &self.gateways {
            match gateway.resolve_address(address) {
                Ok(location) => {
                    log::debug!("{} resolved {address:?} to {}", gateway.name(), location.pos);
                    return Ok(location);
                }
                Err(err) => {
                    log::info!("{} could not resolve {address:?}: {err}", gateway.name());
                    last_err = err;
                }
            }
        }
        Err(last_err)
    }

    fn name(&self) -> &str {
        "chain"
    }
}
