use std::{thread, time::Duration};

use super::{add_address, prelude::*, AddedAddress};
use crate::parse::parse_batch_input;

/// Per-item result of a batch run, reported through the progress
/// callback after the item has been processed.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemStatus {
    Added,
    Corrected(String),
    Failed(String),
}

/// The three outcome classes of a batch run, each preserving the
/// input order of its items.
#[derive(Debug, Default, PartialEq)]
pub struct BatchOutcome {
    pub succeeded: Vec<String>,
    /// `(address, correction notice)`
    pub corrected: Vec<(String, String)>,
    /// `(address, human-readable reason)`
    pub failed: Vec<(String, String)>,
}

impl BatchOutcome {
    pub fn total(&self) -> usize {
        self.succeeded.len() + self.corrected.len() + self.failed.len()
    }
}

/// Parses a comma-separated blob of addresses (see [`parse_batch_input`])
/// and drives every item through geocode, validate and append.
///
/// Items are processed strictly sequentially in input order; the
/// external providers are rate-sensitive, so `delay` is inserted
/// between items (pass [`Duration::ZERO`] in tests). A failure of one
/// item never aborts the run. There is no cancellation mid-batch.
pub fn import_addresses<R>(
    repo: &R,
    geocoder: &dyn GeoCodingGateway,
    input: &str,
    delay: Duration,
    mut progress: impl FnMut(usize, usize, &str, &ItemStatus),
) -> BatchOutcome
where
    R: AddressRepo + ?Sized,
{
    let items = parse_batch_input(input);
    let total = items.len();
    let mut outcome = BatchOutcome::default();

    for (i, (address, note)) in items.into_iter().enumerate() {
        if i > 0 && !delay.is_zero() {
            thread::sleep(delay);
        }
        let status = match add_address(repo, geocoder, &address, &note) {
            Ok(AddedAddress {
                correction: None, ..
            }) => {
                outcome.succeeded.push(address.clone());
                ItemStatus::Added
            }
            Ok(AddedAddress {
                correction: Some(notice),
                ..
            }) => {
                outcome.corrected.push((address.clone(), notice.clone()));
                ItemStatus::Corrected(notice)
            }
            Err(err) => {
                let reason = err.to_string();
                log::info!("batch item {address:?} failed: {reason}");
                outcome.failed.push((address.clone(), reason.clone()));
                ItemStatus::Failed(reason)
            }
        };
        progress(i + 1, total, &address, &status);
    }
    outcome
}
