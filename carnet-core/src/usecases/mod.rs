mod add_address;
mod delete_address;
mod error;
mod import_addresses;
mod list_addresses;
mod map_view;

pub use self::{
    add_address::*, delete_address::*, error::*, import_addresses::*, list_addresses::*,
    map_view::*,
};

pub type Result<T> = std::result::Result<T, Error>;

pub(crate) mod prelude {
    pub use super::{Error, Result};
    pub use crate::{entities::*, gateways::*, repositories::AddressRepo};
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::prelude::*;
    use crate::repositories;

    #[derive(Debug, Default)]
    pub struct MockRepo {
        pub records: Mutex<Vec<AddressRecord>>,
        pub fail_writes: bool,
    }

    impl AddressRepo for MockRepo {
        fn ensure_header(&self) -> std::result::Result<(), repositories::Error> {
            Ok(())
        }

        fn all_records(&self) -> std::result::Result<Vec<AddressRecord>, repositories::Error> {
            Ok(self.records.lock().unwrap().clone())
        }

        fn append_record(
            &self,
            record: &AddressRecord,
        ) -> std::result::Result<(), repositories::Error> {
            if self.fail_writes {
                return Err(repositories::Error::Write(anyhow::anyhow!("boom")));
            }
            self.records.lock().unwrap().push(record.clone());
            Ok(())
        }

        fn delete_row(&self, display_index: usize) -> std::result::Result<(), repositories::Error> {
            let mut records = self.records.lock().unwrap();
            if display_index >= records.len() {
                return Err(repositories::Error::NotFound(display_index));
            }
            records.remove(display_index);
            Ok(())
        }
    }

    /// Resolves a few well-known landmarks and fails everything else.
    pub struct StubGeocoder;

    impl GeoCodingGateway for StubGeocoder {
        fn resolve_address(
            &self,
            address: &str,
        ) -> std::result::Result<GeocodedLocation, GeocodeError> {
            let needle = address.to_lowercase();
            let pos = if needle.contains("tour eiffel") {
                MapPoint::from_lat_lng_deg(48.858370, 2.294481)
            } else if needle.contains("vieux-port") {
                MapPoint::from_lat_lng_deg(43.295, 5.374)
            } else if needle.contains("berlin") {
                MapPoint::from_lat_lng_deg(52.52, 13.405)
            } else if needle.contains("truncated") {
                // Simulates the Paris longitude encoding defect.
                MapPoint::from_lat_lng_deg(48.85, 0.35)
            } else {
                return Err(GeocodeError::NoMatch);
            };
            Ok(GeocodedLocation {
                pos,
                confidence: Some(0.9),
                source: self.name().to_string(),
            })
        }

        fn name(&self) -> &str {
            "stub"
        }
    }
}
