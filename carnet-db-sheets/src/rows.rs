use carnet_core::{
    entities::{AddressRecord, MapPoint},
    normalize::normalize_coord,
};

pub const HEADER: [&str; 4] = ["Address", "Latitude", "Longitude", "Note"];

/// Whether the first sheet row already equals [`HEADER`]. A missing
/// row, a different arity or different labels all call for a rewrite
/// of the header row.
pub fn header_matches(first_row: Option<&Vec<String>>) -> bool {
    match first_row {
        Some(row) => row.iter().map(String::as_str).eq(HEADER),
        None => false,
    }
}

/// One record in header column order. Coordinates are written via the
/// `f64` Display impl (shortest round-trip form) so no precision is
/// lost on the way into the sheet.
pub fn record_to_row(record: &AddressRecord) -> Vec<String> {
    vec![
        record.address.clone(),
        record.pos.lat().to_string(),
        record.pos.lng().to_string(),
        record.note.clone(),
    ]
}

/// Parses one sheet row. `None` when the address is empty or a
/// coordinate does not survive normalization; such rows are skipped.
pub fn row_to_record(row: &[String]) -> Option<AddressRecord> {
    let address = row.first()?.trim();
    if address.is_empty() {
        return None;
    }
    let lat = normalize_coord(row.get(1)?)?;
    let lng = normalize_coord(row.get(2)?)?;
    let pos = MapPoint::from_lat_lng_deg(lat, lng);
    if !pos.is_valid() {
        return None;
    }
    Some(AddressRecord {
        address: address.to_string(),
        pos,
        note: row.get(3).map(|n| n.trim().to_string()).unwrap_or_default(),
    })
}

/// 0-based half-open row range of the sheet dimension backing a display
/// index. Row 0 is the header, so record `i` lives in sheet row `i + 1`
/// (1-based store row `i + 2`).
pub fn store_row_range(display_index: usize) -> (u64, u64) {
    let start = display_index as u64 + 1;
    (start, start + 1)
}
