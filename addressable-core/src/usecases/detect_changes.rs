use super::prelude::*;
use crate::repositories::Error as RepoError;

/// How far back to look for the baseline of a change.
///
/// `1` compares against the persisted state the record has been
/// loaded from, `2` against the one before that and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChangeLevel(u64);

impl ChangeLevel {
    pub fn new(level: u64) -> Self {
        Self(level.max(1))
    }

    pub const fn value(self) -> u64 {
        self.0
    }
}

impl Default for ChangeLevel {
    fn default() -> Self {
        Self(1)
    }
}

/// Compares all six address fields.
///
/// A missing address is treated like an empty one.
pub fn address_changed(current: Option<&Address>, baseline: Option<&Address>) -> bool {
    let empty = Address::default();
    let current = current.unwrap_or(&empty);
    let baseline = baseline.unwrap_or(&empty);
    let changed = current.changed_fields(baseline).next().is_some();
    changed
}

/// Checks if the address of the record differs from a persisted revision.
pub fn is_address_changed<R>(repo: &R, record: &HostRecord, level: ChangeLevel) -> Result<bool>
where
    R: HostRecordRepo + ?Sized,
{
    let baseline = match record.revision.back(level.value() - 1) {
        Some(rev) => match repo.get_record_revision(record.id.as_str(), rev) {
            Ok(persisted) => persisted.address,
            Err(RepoError::NotFound) => None,
            Err(err) => return Err(err.into()),
        },
        None => None,
    };
    Ok(address_changed(record.address.as_ref(), baseline.as_ref()))
}
