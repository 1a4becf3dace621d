// Low-level access to the spreadsheet-backed address store.
// The store is a remote key-row service: row 1 is the header, every
// following row is one address record in header column order.

use thiserror::Error;

use crate::entities::AddressRecord;

#[derive(Debug, Error)]
pub enum Error {
    #[error("could not open the address store: {0}")]
    Connection(String),
    #[error("failed to read from the address store")]
    Read(#[source] anyhow::Error),
    #[error("failed to write to the address store")]
    Write(#[source] anyhow::Error),
    #[error("no address at index {0}")]
    NotFound(usize),
}

type Result<T> = std::result::Result<T, Error>;

pub trait AddressRepo {
    /// Idempotently ensures that the first row of the store equals the
    /// expected header tuple, writing it when absent or mismatched.
    /// Fails with [`Error::Connection`] when credentials are invalid or
    /// the target sheet cannot be opened.
    fn ensure_header(&self) -> Result<()>;

    /// All records in store order. Rows whose coordinates cannot be
    /// normalized are dropped; a missing note defaults to the empty
    /// string. Order is stable across reads absent writes.
    fn all_records(&self) -> Result<Vec<AddressRecord>>;

    /// Appends one record in header column order, preserving the full
    /// decimal precision of both coordinates.
    fn append_record(&self, record: &AddressRecord) -> Result<()>;

    /// Deletes the store row backing `display_index` of the most recent
    /// [`AddressRepo::all_records`] result. The header occupies row 1
    /// and store rows are 1-based, so the targeted store row is
    /// `display_index + 2`. Callers must re-fetch afterwards; indices of
    /// subsequent records shift.
    fn delete_row(&self, display_index: usize) -> Result<()>;
}
