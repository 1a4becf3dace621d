use std::fmt;

/// A geographical position given in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPoint {
    lat: f64,
    lng: f64,
}

impl MapPoint {
    pub const fn from_lat_lng_deg(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub const fn lat(self) -> f64 {
        self.lat
    }

    pub const fn lng(self) -> f64 {
        self.lng
    }

    pub fn is_valid(self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat.abs() <= 90.0
            && self.lng.abs() <= 180.0
    }
}

impl fmt::Display for MapPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

/// An axis-aligned rectangle given by its south-west and
/// north-east corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBbox {
    sw: MapPoint,
    ne: MapPoint,
}

impl MapBbox {
    pub const fn new(sw: MapPoint, ne: MapPoint) -> Self {
        Self { sw, ne }
    }

    pub const fn southwest(&self) -> MapPoint {
        self.sw
    }

    pub const fn northeast(&self) -> MapPoint {
        self.ne
    }

    pub fn is_valid(&self) -> bool {
        self.sw.is_valid() && self.ne.is_valid() && self.sw.lat() <= self.ne.lat()
    }

    pub fn contains_point(&self, pt: MapPoint) -> bool {
        pt.lat() >= self.sw.lat()
            && pt.lat() <= self.ne.lat()
            && pt.lng() >= self.sw.lng()
            && pt.lng() <= self.ne.lng()
    }
}

/// Arithmetic mean of a set of points. `None` if the slice is empty.
pub fn centroid(points: &[MapPoint]) -> Option<MapPoint> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let lat = points.iter().map(|p| p.lat()).sum::<f64>() / n;
    let lng = points.iter().map(|p| p.lng()).sum::<f64>() / n;
    Some(MapPoint::from_lat_lng_deg(lat, lng))
}

/// Componentwise min/max rectangle over a set of points.
/// `None` if the slice is empty.
pub fn bounds(points: &[MapPoint]) -> Option<MapBbox> {
    let first = points.first()?;
    let mut lat_min = first.lat();
    let mut lat_max = first.lat();
    let mut lng_min = first.lng();
    let mut lng_max = first.lng();
    for pt in &points[1..] {
        lat_min = lat_min.min(pt.lat());
        lat_max = lat_max.max(pt.lat());
        lng_min = lng_min.min(pt.lng());
        lng_max = lng_max.max(pt.lng());
    }
    Some(MapBbox::new(
        MapPoint::from_lat_lng_deg(lat_min, lng_min),
        MapPoint::from_lat_lng_deg(lat_max, lng_max),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_validity() {
        assert!(MapPoint::from_lat_lng_deg(48.85, 2.35).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(100.0, 2.35).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(48.85, 200.0).is_valid());
        assert!(!MapPoint::from_lat_lng_deg(f64::NAN, 2.35).is_valid());
    }

    #[test]
    fn bbox_validity() {
        let sw = MapPoint::from_lat_lng_deg(41.0, -5.5);
        let ne = MapPoint::from_lat_lng_deg(51.5, 10.0);
        assert!(MapBbox::new(sw, ne).is_valid());
        // Corners swapped.
        assert!(!MapBbox::new(ne, sw).is_valid());
    }

    #[test]
    fn bbox_contains_point() {
        let bb = MapBbox::new(
            MapPoint::from_lat_lng_deg(-10.0, -10.0),
            MapPoint::from_lat_lng_deg(10.0, 10.0),
        );
        assert!(bb.contains_point(MapPoint::from_lat_lng_deg(5.0, 5.0)));
        assert!(!bb.contains_point(MapPoint::from_lat_lng_deg(10.1, 10.0)));
        assert!(!bb.contains_point(MapPoint::from_lat_lng_deg(5.0, -10.1)));
    }

    #[test]
    fn centroid_of_points() {
        assert_eq!(centroid(&[]), None);
        let pts = [
            MapPoint::from_lat_lng_deg(44.0, 2.0),
            MapPoint::from_lat_lng_deg(46.0, 4.0),
        ];
        let c = centroid(&pts).unwrap();
        assert!((c.lat() - 45.0).abs() < 1e-12);
        assert!((c.lng() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn bounds_of_points() {
        assert_eq!(bounds(&[]), None);
        let pts = [
            MapPoint::from_lat_lng_deg(48.85, 2.35),
            MapPoint::from_lat_lng_deg(43.30, 5.37),
            MapPoint::from_lat_lng_deg(45.76, 4.83),
        ];
        let bb = bounds(&pts).unwrap();
        assert_eq!(bb.southwest(), MapPoint::from_lat_lng_deg(43.30, 2.35));
        assert_eq!(bb.northeast(), MapPoint::from_lat_lng_deg(48.85, 5.37));
    }
}
