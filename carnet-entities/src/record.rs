use crate::geo::MapPoint;

/// A stored address. Identity is positional: the row index in the
/// backing store. Deleting a record shifts all subsequent indices.
#[derive(Debug, Clone, PartialEq)]
pub struct AddressRecord {
    pub address: String,
    pub pos: MapPoint,
    pub note: String,
}

impl AddressRecord {
    pub fn has_note(&self) -> bool {
        !self.note.trim().is_empty()
    }
}

/// The transient result of a geocoding lookup. Only the coordinate
/// pair is ever persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodedLocation {
    pub pos: MapPoint,
    /// Provider-reported match quality in `[0, 1]`, if any.
    pub confidence: Option<f64>,
    /// Which provider produced the match.
    pub source: String,
}
