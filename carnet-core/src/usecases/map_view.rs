use super::prelude::*;
use crate::france;
use carnet_entities::geo::{bounds, centroid};

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub pos: MapPoint,
    /// Address text, with the note when present.
    pub label: String,
    /// Deep link into a street-level imagery viewer at the exact pair.
    pub street_view_url: String,
}

/// Framing instructions for the interactive map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapView {
    pub center: MapPoint,
    pub zoom: f64,
    /// When set, the client fits the view to this rectangle (with a
    /// fixed padding margin), overriding `center`/`zoom`.
    pub fit_bounds: Option<MapBbox>,
    pub markers: Vec<Marker>,
}

/// Projects the listed records onto the map.
///
/// Records outside the France bounding box are left off the map; they
/// remain visible in the management table. Framing: no valid record
/// renders the empty country view, a single record gets a tight zoom,
/// several records are framed by their componentwise min/max rectangle.
pub fn map_view(records: &[AddressRecord]) -> MapView {
    let markers: Vec<Marker> = records
        .iter()
        .filter(|r| france::contains(r.pos))
        .map(marker_for)
        .collect();

    match markers.len() {
        0 => MapView {
            center: france::CENTER,
            zoom: france::DEFAULT_ZOOM,
            fit_bounds: None,
            markers,
        },
        1 => MapView {
            center: markers[0].pos,
            zoom: france::SINGLE_MARKER_ZOOM,
            fit_bounds: None,
            markers,
        },
        _ => {
            let points: Vec<MapPoint> = markers.iter().map(|m| m.pos).collect();
            MapView {
                // The mean center is the initial placement; the fitted
                // bounds override it on the client.
                center: centroid(&points).unwrap_or(france::CENTER),
                zoom: france::DEFAULT_ZOOM,
                fit_bounds: bounds(&points),
                markers,
            }
        }
    }
}

fn marker_for(record: &AddressRecord) -> Marker {
    let label = if record.has_note() {
        format!("{} ({})", record.address, record.note)
    } else {
        record.address.clone()
    };
    Marker {
        pos: record.pos,
        label,
        street_view_url: street_view_url(record.pos),
    }
}

fn street_view_url(pos: MapPoint) -> String {
    format!(
        "https://www.google.com/maps?layer=c&cbll={},{}",
        pos.lat(),
        pos.lng()
    )
}
