use serde::Deserialize;

use carnet_core::entities::MapPoint;

// Shared feature-collection shape of both providers.

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub geometry: Geometry,
    #[serde(default)]
    pub properties: Properties,
}

#[derive(Debug, Deserialize)]
pub struct Geometry {
    /// `[longitude, latitude]`, GeoJSON order.
    pub coordinates: [f64; 2],
}

#[derive(Debug, Default, Deserialize)]
pub struct Properties {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub country: Option<String>,
}

impl Feature {
    pub fn position(&self) -> MapPoint {
        let [lng, lat] = self.geometry.coordinates;
        MapPoint::from_lat_lng_deg(lat, lng)
    }
}
