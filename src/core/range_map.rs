use crate::error::{ChartError, ChartResult};

/// Half-open index range `[min, max)` owned by `value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeEntry<T> {
    pub min: usize,
    pub max: usize,
    pub value: T,
}

impl<T> RangeEntry<T> {
    #[must_use]
    pub fn new(min: usize, max: usize, value: T) -> Self {
        Self { min, max, value }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min == self.max
    }

    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.min <= index && index < self.max
    }
}

/// Immutable interval lookup from an index to the value owning it.
///
/// Entries must be sorted ascending and disjoint. Zero-width entries are
/// accepted but never returned by [`RangeMap::get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeMap<T> {
    entries: Vec<RangeEntry<T>>,
}

impl<T> Default for RangeMap<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> RangeMap<T> {
    pub fn new(ranges: impl IntoIterator<Item = RangeEntry<T>>) -> ChartResult<Self> {
        let mut entries = Vec::new();
        let mut previous_max = 0;

        for (index, entry) in ranges.into_iter().enumerate() {
            if entry.min > entry.max || entry.min < previous_max {
                return Err(ChartError::InvalidRange {
                    index,
                    min: entry.min,
                    max: entry.max,
                });
            }
            previous_max = entry.max;
            if !entry.is_empty() {
                entries.push(entry);
            }
        }

        Ok(Self { entries })
    }

    /// Returns the value whose range contains `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        let upper = self.entries.partition_point(|entry| entry.min <= index);
        let candidate = self.entries.get(upper.checked_sub(1)?)?;
        candidate.contains(index).then_some(&candidate.value)
    }

    /// Number of non-empty ranges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// End of the last range, i.e. the first index not covered.
    #[must_use]
    pub fn upper_bound(&self) -> usize {
        self.entries.last().map_or(0, |entry| entry.max)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RangeEntry<T>> {
        self.entries.iter()
    }
}
