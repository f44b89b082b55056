use crate::search::insertion_point;

/// A set of totally-ordered values kept as a strictly-ascending sequence.
///
/// All positioning goes through [`insertion_point`], so membership queries
/// are O(log n); insertion and removal pay the usual O(n) element shift.
/// The backing sequence is never handed out mutably, which is what keeps
/// the ascending / no-duplicates invariant local to this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSet<T> {
    items: Vec<T>,
}

impl<T> Default for SortedSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Ord> SortedSet<T> {
    #[inline]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Inserts `value` if absent. Returns whether the set changed.
    pub fn insert(&mut self, value: T) -> bool {
        let i = insertion_point(&self.items, &value);
        if i < self.items.len() && self.items[i] == value {
            return false;
        }
        self.items.insert(i, value);
        true
    }

    /// Removes `value` if present. Returns whether the set changed.
    pub fn remove(&mut self, value: &T) -> bool {
        let i = insertion_point(&self.items, value);
        if i < self.items.len() && self.items[i] == *value {
            self.items.remove(i);
            return true;
        }
        false
    }

    /// Inserts `value` when absent, removes it when present.
    ///
    /// Returns whether `value` is a member afterwards. Toggling twice with
    /// the same value restores the prior membership.
    pub fn toggle(&mut self, value: T) -> bool {
        let i = insertion_point(&self.items, &value);
        if i < self.items.len() && self.items[i] == value {
            self.items.remove(i);
            false
        } else {
            self.items.insert(i, value);
            true
        }
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        let i = insertion_point(&self.items, value);
        i < self.items.len() && self.items[i] == *value
    }
}

impl<T> SortedSet<T> {
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates members in ascending order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// The backing sequence, ascending. Read-only by design.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<T: Ord> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ascending_no_dups(set: &SortedSet<i32>) -> bool {
        set.as_slice().windows(2).all(|w| w[0] < w[1])
    }

    // ── insert / remove ───────────────────────────────────────────────────

    #[test]
    fn insert_keeps_ascending_order() {
        let mut set = SortedSet::new();
        for v in [5, 1, 9, 3, 7] {
            assert!(set.insert(v));
        }
        assert_eq!(set.as_slice(), &[1, 3, 5, 7, 9]);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = SortedSet::new();
        assert!(set.insert(4));
        assert!(!set.insert(4));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn remove_present() {
        let mut set: SortedSet<i32> = [1, 2, 3].into_iter().collect();
        assert!(set.remove(&2));
        assert_eq!(set.as_slice(), &[1, 3]);
    }

    #[test]
    fn remove_absent_is_noop() {
        let mut set: SortedSet<i32> = [1, 3].into_iter().collect();
        assert!(!set.remove(&2));
        assert_eq!(set.as_slice(), &[1, 3]);
    }

    // ── toggle ────────────────────────────────────────────────────────────

    #[test]
    fn toggle_inserts_then_removes() {
        let mut set = SortedSet::new();
        assert!(set.toggle(8));
        assert!(set.contains(&8));
        assert!(!set.toggle(8));
        assert!(!set.contains(&8));
    }

    #[test]
    fn toggle_twice_is_identity() {
        let mut set: SortedSet<i32> = [1, 5, 9].into_iter().collect();
        let before = set.clone();
        set.toggle(5);
        set.toggle(5);
        assert_eq!(set, before);
        set.toggle(3);
        set.toggle(3);
        assert_eq!(set, before);
    }

    // ── invariant under mixed operations ──────────────────────────────────

    #[test]
    fn invariant_survives_mixed_operations() {
        let mut set = SortedSet::new();
        let script = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        for (i, v) in script.into_iter().enumerate() {
            match i % 3 {
                0 => {
                    set.insert(v);
                }
                1 => {
                    set.toggle(v);
                }
                _ => {
                    set.remove(&v);
                }
            }
            assert!(ascending_no_dups(&set));
        }
    }

    #[test]
    fn contains_is_pure() {
        let set: SortedSet<i32> = [2, 4, 6].into_iter().collect();
        assert!(set.contains(&4));
        assert!(!set.contains(&5));
        assert_eq!(set.as_slice(), &[2, 4, 6]);
    }

    #[test]
    fn first_last_and_iter() {
        let set: SortedSet<i32> = [9, 1, 5].into_iter().collect();
        assert_eq!(set.first(), Some(&1));
        assert_eq!(set.last(), Some(&9));
        let collected: Vec<i32> = set.iter().copied().collect();
        assert_eq!(collected, vec![1, 5, 9]);
    }
}
