use crate::{address::*, coordinate::*, id::*, revision::*};

/// A domain entity carrying an address and its coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct HostRecord {
    pub id: Id,
    /// Revision of the persisted state this record has been loaded from.
    pub revision: Revision,
    pub address: Option<Address>,
    pub coordinate: Option<Coordinate>,
}

impl HostRecord {
    pub fn new(id: Id) -> Self {
        Self {
            id,
            revision: Revision::initial(),
            address: None,
            coordinate: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        !self.revision.is_initial()
    }

    pub fn is_manually_located(&self) -> bool {
        self.coordinate.map(|c| c.manually_set).unwrap_or(false)
    }

    pub fn country(&self) -> Option<&str> {
        self.address
            .as_ref()
            .and_then(|a| a.get(AddressField::Country))
    }
}
