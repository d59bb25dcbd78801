use crate::model::{
    Direction, Money, ParticipantEntry, RoundingUnit, ValidationError, WeightRecord,
};

pub const DEFAULT_ROSTER_SIZE: usize = 12;

/// Fixed-length, ordered roster. The index of an entry is its identity.
///
/// Every operation returns a new snapshot and leaves `self` untouched, so a
/// holder of an older roster always sees a consistent state.
#[derive(Clone, Debug, PartialEq)]
pub struct Roster {
    entries: Vec<ParticipantEntry>,
}

impl Roster {
    /// Creates a roster of `capacity` slots with slot 0 seeded as the payer.
    pub fn new(capacity: usize) -> Result<Self, ValidationError> {
        if capacity == 0 {
            return Err(ValidationError::EmptyRoster);
        }
        Ok(Self::seeded(capacity))
    }

    fn seeded(capacity: usize) -> Self {
        let mut entries = vec![ParticipantEntry::default(); capacity];
        entries[0].count = 1;
        Self { entries }
    }

    pub fn from_entries(entries: Vec<ParticipantEntry>) -> Result<Self, ValidationError> {
        if entries.is_empty() {
            return Err(ValidationError::EmptyRoster);
        }
        Ok(Self { entries })
    }

    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    pub fn entries(&self) -> &[ParticipantEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &ParticipantEntry> + '_ {
        self.entries.iter()
    }

    pub(crate) fn with_entries(&self, entries: Vec<ParticipantEntry>) -> Self {
        debug_assert_eq!(entries.len(), self.entries.len());
        Self { entries }
    }

    /// Clears every slot and seeds slot 0 with a count of one.
    pub fn reset_all(&self) -> Self {
        Self::seeded(self.capacity())
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn adjust_count(&self, index: usize, direction: Direction) -> Self {
        let mut next = self.clone();
        let entry = &mut next.entries[index];
        match direction {
            Direction::Increment => entry.count = entry.count.saturating_add(1),
            Direction::Decrement => {
                if entry.count == 0 {
                    return next;
                }
                entry.count -= 1;
            }
        }
        next
    }

    /// # Panics
    /// If `index` is out of range.
    pub fn adjust_amount(&self, index: usize, direction: Direction, unit: RoundingUnit) -> Self {
        let mut next = self.clone();
        let entry = &mut next.entries[index];
        let step = unit.as_money();
        match direction {
            Direction::Increment => entry.amount += step,
            Direction::Decrement => {
                if (entry.amount - step).is_negative() {
                    return next;
                }
                entry.amount -= step;
            }
        }
        next
    }

    /// Resets the roster and assigns `records` to the leading slots, each with
    /// a count of one.
    pub fn merge_weights(&self, records: &[WeightRecord]) -> Result<Self, ValidationError> {
        if records.len() > self.capacity() {
            return Err(ValidationError::CapacityExceeded {
                len: records.len(),
                capacity: self.capacity(),
            });
        }

        let mut next = self.reset_all();
        for (entry, record) in next.entries.iter_mut().zip(records) {
            entry.name = Some(record.name.clone());
            entry.weight = Some(record.weight);
            entry.count = 1;
        }
        Ok(next)
    }

    /// True when every active slot carries a weight.
    pub fn has_complete_weights(&self) -> bool {
        self.entries
            .iter()
            .filter(|entry| entry.is_active())
            .all(|entry| entry.weight.is_some())
    }

    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|entry| u64::from(entry.count)).sum()
    }

    /// `Σ amount * count` over all slots.
    pub fn allocated(&self) -> Money {
        self.entries.iter().map(ParticipantEntry::subtotal).sum()
    }

    /// Unallocated remainder of `total_amount`. Always derived, never stored.
    pub fn leftover(&self, total_amount: Money) -> Money {
        total_amount - self.allocated()
    }

    /// Weight records for every slot that carries both a name and a weight.
    pub fn export_weights(&self) -> Vec<WeightRecord> {
        self.entries
            .iter()
            .filter_map(|entry| match (&entry.name, entry.weight) {
                (Some(name), Some(weight)) => Some(WeightRecord::new(name.clone(), weight)),
                _ => None,
            })
            .collect()
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::seeded(DEFAULT_ROSTER_SIZE)
    }
}
