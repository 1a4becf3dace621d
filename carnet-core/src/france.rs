use crate::entities::{MapBbox, MapPoint};

// Metropolitan France, generously framed. Everything outside this
// rectangle is treated as "not in France".
pub const LAT_MIN: f64 = 41.0;
pub const LAT_MAX: f64 = 51.5;
pub const LNG_MIN: f64 = -5.5;
pub const LNG_MAX: f64 = 10.0;

/// Geographic center used when there is nothing to show.
pub const CENTER: MapPoint = MapPoint::from_lat_lng_deg(46.603354, 1.888334);

pub const DEFAULT_ZOOM: f64 = 6.0;
pub const SINGLE_MARKER_ZOOM: f64 = 13.0;

pub const fn bbox() -> MapBbox {
    MapBbox::new(
        MapPoint::from_lat_lng_deg(LAT_MIN, LNG_MIN),
        MapPoint::from_lat_lng_deg(LAT_MAX, LNG_MAX),
    )
}

pub fn contains(pt: MapPoint) -> bool {
    bbox().contains_point(pt)
}
