use thiserror::Error;

use crate::{entities::MapPoint, france};

#[derive(Debug, Error, PartialEq)]
pub enum GeoValidationError {
    #[error("latitude {0} is outside France")]
    Latitude(f64),
    #[error("longitude {0} is outside France")]
    Longitude(f64),
}

/// The outcome of a successful validation: the (possibly corrected)
/// position plus a user-facing notice when a correction was applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedCoords {
    pub pos: MapPoint,
    pub correction: Option<String>,
}

// Address fragments that identify the Paris region, where the
// truncation bug has been observed.
const PARIS_MARKERS: &[&str] = &["paris", "75"];

const TRUNCATED_LNG_OFFSET: f64 = 2.0;

/// Checks that a coordinate pair lies inside the France bounding box.
///
/// Latitude is never corrected. Longitude gets one narrow repair: some
/// stored Paris coordinates lost the leading digit of their longitude
/// ("2.35" written as "0.35"-ish values). When the address text points
/// at the Paris region and the raw longitude lies in (0, 1), the
/// missing 2 is added back and the bounds are re-checked. This is a
/// patch for one observed encoding defect, not a general geodetic
/// correction, and must not be extended to other truncation patterns.
pub fn validate_france_coords(
    lat: f64,
    lng: f64,
    address: &str,
) -> Result<ValidatedCoords, GeoValidationError> {
    if !(france::LAT_MIN..=france::LAT_MAX).contains(&lat) {
        return Err(GeoValidationError::Latitude(lat));
    }
    if (france::LNG_MIN..=france::LNG_MAX).contains(&lng) {
        return Ok(ValidatedCoords {
            pos: MapPoint::from_lat_lng_deg(lat, lng),
            correction: None,
        });
    }
    if looks_like_paris(address) && lng > 0.0 && lng < 1.0 {
        let corrected = lng + TRUNCATED_LNG_OFFSET;
        if (france::LNG_MIN..=france::LNG_MAX).contains(&corrected) {
            log::warn!("corrected longitude {lng} -> {corrected} for {address:?}");
            return Ok(ValidatedCoords {
                pos: MapPoint::from_lat_lng_deg(lat, corrected),
                correction: Some(format!(
                    "longitude corrected from {lng} to {corrected} (Paris address)"
                )),
            });
        }
    }
    Err(GeoValidationError::Longitude(lng))
}

fn looks_like_paris(address: &str) -> bool {
    let address = address.to_lowercase();
    PARIS_MARKERS.iter().any(|m| address.contains(m))
}
