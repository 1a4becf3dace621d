use anyhow::Context;

use carnet_core::{
    entities::GeocodedLocation,
    france,
    gateways::{GeoCodingGateway, GeocodeError},
};

use crate::wire::FeatureCollection;

pub const DEFAULT_ENDPOINT: &str = "https://photon.komoot.io";

const TARGET_COUNTRY: &str = "france";

/// Photon (OSM-based) geocoder. Secondary provider: worldwide
/// coverage and no match score, so results are filtered by the
/// reported country and the France bounding box instead.
pub struct PhotonGeocoder {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl PhotonGeocoder {
    pub fn new(endpoint: impl Into<String>) -> anyhow::Result<Self> {
        Ok(Self {
            client: crate::http_client()?,
            endpoint: endpoint.into(),
        })
    }

    fn query(&self, address: &str) -> Result<FeatureCollection, GeocodeError> {
        let url = format!("{}/api/", self.endpoint.trim_end_matches('/'));
        let rsp = self
            .client
            .get(url)
            .query(&[
                ("q", address),
                ("limit", "1"),
                ("lang", "fr"),
                ("location_bias_scale", "0.5"),
            ])
            .send()
            .and_then(|rsp| rsp.error_for_status())
            .context("Photon request failed")?;
        Ok(rsp.json().context("invalid Photon response")?)
    }
}

impl GeoCodingGateway for PhotonGeocoder {
    fn resolve_address(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        location_from_response(self.query(address)?)
    }

    fn name(&self) -> &str {
        "photon"
    }
}

fn location_from_response(rsp: FeatureCollection) -> Result<GeocodedLocation, GeocodeError> {
    let Some(feature) = rsp.features.first() else {
        return Err(GeocodeError::NoMatch);
    };
    // An absent country field is tolerated; a mismatching one is not.
    if let Some(country) = feature.properties.country.as_deref() {
        if !country.is_empty() && !country.eq_ignore_ascii_case(TARGET_COUNTRY) {
            return Err(GeocodeError::WrongCountry);
        }
    }
    let pos = feature.position();
    if !france::contains(pos) {
        return Err(GeocodeError::OutOfCoverage);
    }
    Ok(GeocodedLocation {
        pos,
        confidence: None,
        source: "photon".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(lng: f64, lat: f64, country: Option<&str>) -> FeatureCollection {
        let country = match country {
            Some(c) => format!(r#", "country": "{c}""#),
            None => String::new(),
        };
        let json = format!(
            r#"{{"features": [{{
                "geometry": {{"coordinates": [{lng}, {lat}]}},
                "properties": {{"label": "somewhere"{country}}}
            }}]}}"#
        );
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn accepts_an_in_bounds_french_match() {
        let loc = location_from_response(response(5.37, 43.30, Some("France"))).unwrap();
        assert_eq!(loc.confidence, None);
        assert_eq!(loc.source, "photon");
    }

    #[test]
    fn a_missing_or_empty_country_is_tolerated() {
        assert!(location_from_response(response(5.37, 43.30, None)).is_ok());
        assert!(location_from_response(response(5.37, 43.30, Some(""))).is_ok());
    }

    #[test]
    fn a_foreign_country_is_rejected() {
        assert!(matches!(
            location_from_response(response(13.405, 52.52, Some("Deutschland"))),
            Err(GeocodeError::WrongCountry)
        ));
    }

    #[test]
    fn rejects_out_of_bounds_coordinates() {
        assert!(matches!(
            location_from_response(response(13.405, 52.52, Some("France"))),
            Err(GeocodeError::OutOfCoverage)
        ));
    }
}
