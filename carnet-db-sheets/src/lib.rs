//! `AddressRepo` implementation backed by a Google spreadsheet.
//!
//! The sheet is the single point of truth: row 1 is the header, every
//! following row one address. Concurrent writers are assumed to be
//! serialized by the spreadsheet service itself.

mod client;
mod rows;

pub use client::DEFAULT_BASE_URL;

use carnet_core::{
    entities::AddressRecord,
    repositories::{AddressRepo, Error},
};

use crate::client::{is_access_denied, SheetsClient};

type Result<T> = std::result::Result<T, Error>;

pub struct SheetsAddressRepo {
    client: SheetsClient,
    sheet_name: String,
    /// Numeric grid id of the sheet tab (0 for the first tab); the
    /// batchUpdate delete request addresses the tab by this id, not by
    /// its name.
    sheet_gid: i64,
}

impl SheetsAddressRepo {
    pub fn new(
        base_url: impl Into<String>,
        spreadsheet_id: impl Into<String>,
        token: impl Into<String>,
        sheet_name: impl Into<String>,
        sheet_gid: i64,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            client: SheetsClient::new(base_url, spreadsheet_id, token)?,
            sheet_name: sheet_name.into(),
            sheet_gid,
        })
    }

    fn range(&self, cells: &str) -> String {
        format!("{}!{cells}", self.sheet_name)
    }
}

impl AddressRepo for SheetsAddressRepo {
    fn ensure_header(&self) -> Result<()> {
        // Doubles as the connectivity/credentials check: any failure
        // here means the store cannot be used at all.
        let first_row = self
            .client
            .get_values(&self.range("A1:D1"))
            .map_err(|err| Error::Connection(err.to_string()))?;
        if rows::header_matches(first_row.first()) {
            return Ok(());
        }
        log::info!("writing address sheet header");
        let header: Vec<String> = rows::HEADER.iter().map(ToString::to_string).collect();
        self.client
            .update_values(&self.range("A1:D1"), &[header])
            .map_err(|err| Error::Connection(err.to_string()))
    }

    fn all_records(&self) -> Result<Vec<AddressRecord>> {
        let raw = self
            .client
            .get_values(&self.range("A2:D"))
            .map_err(Error::Read)?;
        let mut records = Vec::with_capacity(raw.len());
        for (i, row) in raw.iter().enumerate() {
            match rows::row_to_record(row) {
                Some(record) => records.push(record),
                None => {
                    // Store row number, 1-based, header included.
                    log::warn!("skipping unreadable sheet row {}: {row:?}", i + 2);
                }
            }
        }
        Ok(records)
    }

    fn append_record(&self, record: &AddressRecord) -> Result<()> {
        self.client
            .append_row(&self.range("A:D"), rows::record_to_row(record))
            .map_err(|err| {
                if is_access_denied(&err) {
                    Error::Connection(err.to_string())
                } else {
                    Error::Write(err)
                }
            })
    }

    fn delete_row(&self, display_index: usize) -> Result<()> {
        let (start, end) = rows::store_row_range(display_index);
        self.client
            .delete_rows(self.sheet_gid, start, end)
            .map_err(Error::Write)
    }
}
