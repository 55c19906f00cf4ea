use crate::foundation::error::{EpicycleError, EpicycleResult};

/// Fixed-capacity ring; pushing into a full buffer overwrites the oldest item.
#[derive(Clone, Debug, PartialEq)]
pub struct TrailBuffer<T> {
    items: Vec<T>,
    capacity: usize,
    head: usize, // next write slot
}

impl<T: Copy> TrailBuffer<T> {
    /// Empty ring holding at most `capacity` items.
    pub fn new(capacity: usize) -> EpicycleResult<Self> {
        if capacity == 0 {
            return Err(EpicycleError::validation("trail capacity must be >= 1"));
        }
        Ok(Self {
            items: Vec::with_capacity(capacity),
            capacity,
            head: 0,
        })
    }

    /// Full ring where every slot holds `value`.
    pub fn filled(capacity: usize, value: T) -> EpicycleResult<Self> {
        let mut out = Self::new(capacity)?;
        out.items.resize(capacity, value);
        Ok(out)
    }

    /// Append `value`, evicting the oldest item when full.
    pub fn push(&mut self, value: T) {
        if self.items.len() < self.capacity {
            self.items.push(value);
        } else {
            self.items[self.head] = value;
        }
        self.head = (self.head + 1) % self.capacity;
    }

    /// Items from oldest to newest.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + '_ {
        let split = if self.items.len() < self.capacity {
            0
        } else {
            self.head
        };
        let (newer, older) = self.items.split_at(split);
        older.iter().chain(newer.iter())
    }

    /// Most recently pushed item.
    pub fn latest(&self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }
        let idx = (self.head + self.capacity - 1) % self.capacity;
        self.items.get(idx)
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Maximum number of items.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once `len() == capacity()`.
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Drop every item, keeping the capacity.
    pub fn clear(&mut self) {
        self.items.clear();
        self.head = 0;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/trail/buffer.rs"]
mod tests;
