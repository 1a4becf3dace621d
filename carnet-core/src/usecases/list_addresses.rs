use super::prelude::*;

/// All stored records in display order. No caching: every page render
/// re-reads the store.
pub fn list_addresses<R>(repo: &R) -> Result<Vec<AddressRecord>>
where
    R: AddressRepo + ?Sized,
{
    Ok(repo.all_records()?)
}
