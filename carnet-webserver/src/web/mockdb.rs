// In-memory stand-ins for the spreadsheet store and the geocoding
// chain, used by the web tests.

use std::sync::{Arc, Mutex};

use carnet_core::{prelude::*, repositories};

#[derive(Debug, Clone, Default)]
pub struct MockDb {
    pub records: Arc<Mutex<Vec<AddressRecord>>>,
}

impl AddressRepo for MockDb {
    fn ensure_header(&self) -> Result<(), repositories::Error> {
        Ok(())
    }

    fn all_records(&self) -> Result<Vec<AddressRecord>, repositories::Error> {
        Ok(self.records.lock().unwrap().clone())
    }

    fn append_record(&self, record: &AddressRecord) -> Result<(), repositories::Error> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    fn delete_row(&self, display_index: usize) -> Result<(), repositories::Error> {
        let mut records = self.records.lock().unwrap();
        if display_index >= records.len() {
            return Err(repositories::Error::NotFound(display_index));
        }
        records.remove(display_index);
        Ok(())
    }
}

/// Resolves a couple of well-known landmarks, fails everything else.
pub struct StubGeocoder;

impl GeoCodingGateway for StubGeocoder {
    fn resolve_address(&self, address: &str) -> Result<GeocodedLocation, GeocodeError> {
        let needle = address.to_lowercase();
        let pos = if needle.contains("tour eiffel") {
            MapPoint::from_lat_lng_deg(48.858370, 2.294481)
        } else if needle.contains("vieux-port") {
            MapPoint::from_lat_lng_deg(43.295, 5.374)
        } else if needle.contains("berlin") {
            MapPoint::from_lat_lng_deg(52.52, 13.405)
        } else {
            return Err(GeocodeError::NoMatch);
        };
        Ok(GeocodedLocation {
            pos,
            confidence: Some(0.9),
            source: "stub".to_string(),
        })
    }

    fn name(&self) -> &str {
        "stub"
    }
}
