// Low-level storage access for host records.
// Every save stores a new revision so that earlier
// persisted states stay available for change detection.

use crate::entities::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The version of the object is invalid")]
    InvalidVersion,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

pub trait HostRecordRepo {
    /// Loads the latest persisted revision.
    fn get_record(&self, id: &str) -> Result<HostRecord>;

    /// Loads a specific persisted revision.
    fn get_record_revision(&self, id: &str, revision: Revision) -> Result<HostRecord>;

    /// Stores the record under `record.revision` which must
    /// directly follow the latest persisted revision.
    fn save_record(&self, record: HostRecord) -> Result<()>;
}
