use super::prelude::*;

/// Deletes the record at `display_index` of the most recent listing.
/// The caller must re-fetch afterwards; all subsequent indices shift.
pub fn delete_address<R>(repo: &R, display_index: usize) -> Result<()>
where
    R: AddressRepo + ?Sized,
{
    repo.delete_row(display_index)?;
    log::info!("deleted address at display index {display_index}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::super::tests::MockRepo;
    use super::*;
    use crate::entities::MapPoint;

    fn record(address: &str) -> AddressRecord {
        AddressRecord {
            address: address.to_string(),
            pos: MapPoint::from_lat_lng_deg(45.0, 2.0),
            note: String::new(),
        }
    }

    #[test]
    fn removes_exactly_the_requested_record() {
        let repo = MockRepo::default();
        for a in ["a", "b", "c"] {
            repo.append_record(&record(a)).unwrap();
        }
        delete_address(&repo, 0).unwrap();
        let remaining = repo.all_records().unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|r| r.address != "a"));
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let repo = MockRepo::default();
        assert!(matches!(
            delete_address(&repo, 0),
            Err(Error::Repo(crate::repositories::Error::NotFound(0)))
        ));
    }
}
