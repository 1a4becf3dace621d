use super::prelude::*;
use crate::geo_validate::validate_france_coords;

#[derive(Debug, Clone, PartialEq)]
pub struct AddedAddress {
    pub record: AddressRecord,
    /// Present when the longitude repair kicked in.
    pub correction: Option<String>,
}

/// Geocodes, validates and persists a single address.
pub fn add_address<R>(
    repo: &R,
    geocoder: &dyn GeoCodingGateway,
    address: &str,
    note: &str,
) -> Result<AddedAddress>
where
    R: AddressRepo + ?Sized,
{
    let address = address.trim();
    if address.is_empty() {
        return Err(Error::EmptyAddress);
    }
    let location = geocoder.resolve_address(address)?;
    let validated = validate_france_coords(location.pos.lat(), location.pos.lng(), address)?;
    log::debug!(
        "geocoded {address:?} via {} to {}",
        location.source,
        validated.pos
    );
    let record = AddressRecord {
        address: address.to_string(),
        pos: validated.pos,
        note: note.trim().to_string(),
    };
    repo.append_record(&record)?;
    Ok(AddedAddress {
        record,
        correction: validated.correction,
    })
}

#[cfg(test)]
mod tests {
    use super::super::tests::{MockRepo, StubGeocoder};
    use super::*;
    use crate::entities::MapPoint;

    #[test]
    fn adds_a_geocodable_address() {
        let repo = MockRepo::default();
        let added = add_address(&repo, &StubGeocoder, "Tour Eiffel, 75007 Paris", "vue").unwrap();
        assert_eq!(added.record.address, "Tour Eiffel, 75007 Paris");
        assert_eq!(added.record.note, "vue");
        assert_eq!(added.correction, None);
        assert_eq!(repo.records.lock().unwrap().len(), 1);
    }

    #[test]
    fn rejects_an_empty_address() {
        let repo = MockRepo::default();
        assert!(matches!(
            add_address(&repo, &StubGeocoder, "   ", ""),
            Err(Error::EmptyAddress)
        ));
        assert!(repo.records.lock().unwrap().is_empty());
    }

    #[test]
    fn reports_geocoding_failures() {
        let repo = MockRepo::default();
        assert!(matches!(
            add_address(&repo, &StubGeocoder, "nowhere in particular", ""),
            Err(Error::Geocode(_))
        ));
        assert!(repo.records.lock().unwrap().is_empty());
    }

    #[test]
    fn rejects_out_of_bounds_results() {
        let repo = MockRepo::default();
        assert!(matches!(
            add_address(&repo, &StubGeocoder, "Berlin", ""),
            Err(Error::OutOfBounds(_))
        ));
        assert!(repo.records.lock().unwrap().is_empty());
    }

    #[test]
    fn persists_the_corrected_longitude() {
        let repo = MockRepo::default();
        let added = add_address(&repo, &StubGeocoder, "truncated, Paris", "").unwrap();
        assert!(added.correction.is_some());
        assert_eq!(added.record.pos, MapPoint::from_lat_lng_deg(48.85, 2.35));
        assert_eq!(
            repo.records.lock().unwrap()[0].pos,
            MapPoint::from_lat_lng_deg(48.85, 2.35)
        );
    }

    #[test]
    fn write_failures_surface_as_repo_errors() {
        let repo = MockRepo {
            fail_writes: true,
            ..MockRepo::default()
        };
        assert!(matches!(
            add_address(&repo, &StubGeocoder, "Tour Eiffel", ""),
            Err(Error::Repo(_))
        ));
    }
}
