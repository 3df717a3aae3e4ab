use std::collections::HashSet;
use std::hash::Hash;

/// Membership-only hash set.
///
/// There is no removal; a value is either recorded or it isn't.
#[derive(Debug, Clone)]
pub struct Set<T> {
    inner: HashSet<T>,
}

impl<T: Eq + Hash> Set<T> {
    pub fn new() -> Self {
        Self {
            inner: HashSet::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: HashSet::with_capacity(capacity),
        }
    }

    /// Record `value`, returning `true` if it was not present before
    pub fn insert(&mut self, value: T) -> bool {
        self.inner.insert(value)
    }

    pub fn contains(&self, value: &T) -> bool {
        self.inner.contains(value)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.inner.iter()
    }
}

impl<T: Eq + Hash> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.inner.extend(values);
    }
}

impl<T: Eq + Hash> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self {
            inner: values.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_is_idempotent() {
        let mut set = Set::new();
        assert!(set.is_empty());
        assert!(set.insert((1, 2)));
        assert!(!set.insert((1, 2)));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&(1, 2)));
        assert!(!set.contains(&(2, 1)));
    }

    #[test]
    fn extend_accepts_zero_or_more_values() {
        let mut set: Set<char> = Set::default();
        set.extend(std::iter::empty());
        assert_eq!(set.len(), 0);

        set.extend(['a', 'b', 'a', 'c']);
        assert_eq!(set.len(), 3);
        assert!(set.contains(&'c'));
    }

    #[test]
    fn collects_from_iterator() {
        let set: Set<u8> = (0..10).chain(5..15).collect();
        assert_eq!(set.len(), 15);
        assert_eq!(set.iter().copied().max(), Some(14));
    }
}
