use super::prelude::*;
use crate::{gateways::geocode::GeoCodingGateway, repositories::Error as RepoError};
use std::cell::{Cell, RefCell};

type RepoResult<T> = std::result::Result<T, RepoError>;

/// Keeps every stored revision of every record.
#[derive(Default)]
pub struct MockDb {
    pub records: RefCell<Vec<HostRecord>>,
}

impl HostRecordRepo for MockDb {
    fn get_record(&self, id: &str) -> RepoResult<HostRecord> {
        self.records
            .borrow()
            .iter()
            .filter(|r| r.id.as_str() == id)
            .max_by_key(|r| r.revision)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn get_record_revision(&self, id: &str, revision: Revision) -> RepoResult<HostRecord> {
        self.records
            .borrow()
            .iter()
            .find(|r| r.id.as_str() == id && r.revision == revision)
            .cloned()
            .ok_or(RepoError::NotFound)
    }

    fn save_record(&self, record: HostRecord) -> RepoResult<()> {
        let expected = match self.get_record(record.id.as_str()) {
            Ok(latest) => latest.revision.next(),
            Err(RepoError::NotFound) => Revision::initial().next(),
            Err(err) => return Err(err),
        };
        if record.revision != expected {
            return Err(RepoError::InvalidVersion);
        }
        self.records.borrow_mut().push(record);
        Ok(())
    }
}

/// Never finds anything.
pub struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lat_lng(&self, _: &str, _: &str) -> Option<(f64, f64)> {
        None
    }
}

/// Resolves every address to the same position and records the queries.
pub struct FixedGeoGw {
    pos: (f64, f64),
    calls: Cell<usize>,
    last_query: RefCell<Option<(String, String)>>,
}

impl FixedGeoGw {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self {
            pos: (lat, lng),
            calls: Cell::new(0),
            last_query: RefCell::new(None),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    pub fn last_query(&self) -> Option<(String, String)> {
        self.last_query.borrow().clone()
    }
}

impl GeoCodingGateway for FixedGeoGw {
    fn resolve_address_lat_lng(&self, address: &str, region_hint: &str) -> Option<(f64, f64)> {
        self.calls.set(self.calls.get() + 1);
        *self.last_query.borrow_mut() = Some((address.to_string(), region_hint.to_string()));
        Some(self.pos)
    }
}
