pub type RevisionValue = u64;

/// Counter of persisted states of a host record.
///
/// Every successful save stores the record under the next revision.
/// [`Revision::initial`] denotes a record that has never been saved.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct Revision(RevisionValue);

impl Revision {
    pub const fn initial() -> Self {
        Self(0)
    }

    pub fn is_initial(self) -> bool {
        self == Self::initial()
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Steps back `count` revisions, or `None` if that
    /// would go before the first persisted revision.
    pub fn back(self, count: RevisionValue) -> Option<Self> {
        self.0
            .checked_sub(count)
            .map(Self)
            .filter(|rev| !rev.is_initial())
    }
}

impl From<Revision> for RevisionValue {
    fn from(from: Revision) -> Self {
        from.0
    }
}

impl From<RevisionValue> for Revision {
    fn from(from: RevisionValue) -> Self {
        Self(from)
    }
}
