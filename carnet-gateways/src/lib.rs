//! HTTP geocoding gateways.
//!
//! Two providers are supported: the French national address base (BAN)
//! as the primary and Photon as the secondary. Both speak GeoJSON-ish
//! feature collections. [`chain::GeocoderChain`] stacks them into an
//! ordered fallback chain.

mod ban;
mod chain;
mod photon;
mod wire;

pub use self::{ban::BanGeocoder, chain::GeocoderChain, photon::PhotonGeocoder};

use std::time::Duration;

/// Fixed timeout for every geocoding HTTP call.
const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

fn http_client() -> anyhow::Result<reqwest::blocking::Client> {
    Ok(reqwest::blocking::Client::builder()
        .timeout(HTTP_TIMEOUT)
        .build()?)
}
