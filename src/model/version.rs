// Mon Feb 2 2026 - Alex

/// Per-build record for a symbol: the address in that build (0 = absent)
/// and the raw reference-list string merged from the diff tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionRecord {
    pub address: u64,
    pub refs: String,
}

/// Dense per-build address table. Slot 0 is the base build; every other
/// slot is populated only by diff merging.
#[derive(Debug, Clone, Default)]
pub struct VersionTable {
    slots: Vec<VersionRecord>,
}

impl VersionTable {
    pub fn new(count: usize) -> Self {
        Self {
            slots: vec![VersionRecord::default(); count],
        }
    }

    /// Address of the symbol in the base build, the identity used by the
    /// diff tables.
    pub fn base_address(&self) -> u64 {
        self.slots.first().map(|s| s.address).unwrap_or(0)
    }

    pub fn get(&self, slot: usize) -> Option<&VersionRecord> {
        self.slots.get(slot)
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut VersionRecord> {
        self.slots.get_mut(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VersionRecord> {
        self.slots.iter()
    }
}
