use anyhow::Context;

use carnet_core::{
    entities::GeocodedLocation,
    france,
    gateways::{GeoCodingGateway, GeocodeError},
};

use crate::wire::FeatureCollection;

pub const DEFAULT_ENDPOINT: &str = "https://api-adresse.data.gouv.fr";

/// Matches at or above this score are accepted outright.
const ACCEPT_SCORE: f64 = 0.4;
/// Matches between this and [`ACCEPT_SCORE`] are accepted with reduced
/// confidence; anything below is rejected.
const MIN_SCORE: f64 = 0.3;

/// Base Adresse Nationale, the French national address registry.
/// Primary provider: covers France only, reports a match score.
pub struct BanGeocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl BanGeocoder {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: crate::http_client()?,
            endpoint: endpoint.into(),
        })
    }

    fn query(&self, address: &str) -> Result<FeatureCollection, GeocodeError> {
        let url = format!("{}/search/", self.endpoint.trim_end_matches('/'));
        let rsp = self
            .client
            .get(url)
            .query(&[("q", address), ("limit", "1")])
            .send()
            .and_then(|rsp| rsp.error_for_status())
            .context("BAN request failed")?;
        Ok(rsp.json().context("invalid BAN response")?)
    }
}

impl GeoCodingGateway for BanGeocoder {
    fn resolve_address(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        location_from_response(self.query(address)?)
    }

    fn name(&self) -> &str {
        "ban"
    }
}

fn location_from_response(rsp: FeatureCollection) -> Result<GeocodedLocation, GeocodeError> {
    let Some(feature) = rsp.features.first() else {
        return Err(GeocodeError::NoMatch);
    };
    let pos = feature.position();
    if !france::contains(pos) {
        return Err(GeocodeError::OutOfCoverage);
    }
    let score = feature.properties.score.unwrap_or(0.0);
    if score < MIN_SCORE {
        return Err(GeocodeError::LowConfidence(score));
    }
    if score < ACCEPT_SCORE {
        log::debug!(
            "accepting low-confidence BAN match (score {score}) for {:?}",
            feature.properties.label
        );
    }
    Ok(GeocodedLocation {
        pos,
        confidence: Some(score),
        source: "ban".to_string(),
    })
}
