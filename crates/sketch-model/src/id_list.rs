#![forbid(unsafe_code)]

//! Handle-ordered collections.
//!
//! [`IdList`] keeps its elements sorted by handle so that iteration order is
//! deterministic and lookups are `O(log n)`. It is the storage type for all
//! five sketch collections.
//!
//! # Ownership
//!
//! `IdList<T>` is `Clone` only when `T` is. Groups and constraints carry
//! regenerable caches and are deliberately not `Clone`; copying them goes
//! through their `snapshot()` methods. Moving a whole list out is done with
//! [`IdList::take`], which leaves the source empty.

use std::fmt;

/// An element addressable by a handle.
pub trait Keyed {
    /// Handle type used for ordering and lookup.
    type Id: Ord + Copy + fmt::Debug;

    /// The element's handle.
    fn id(&self) -> Self::Id;
}

/// A list of elements kept sorted by their handle.
#[derive(Clone, PartialEq)]
pub struct IdList<T> {
    elems: Vec<T>,
}

impl<T> Default for IdList<T> {
    fn default() -> Self {
        Self { elems: Vec::new() }
    }
}

impl<T: Keyed + fmt::Debug> fmt::Debug for IdList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elems.iter()).finish()
    }
}

impl<T: Keyed> IdList<T> {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn search(&self, id: T::Id) -> Result<usize, usize> {
        self.elems.binary_search_by(|e| e.id().cmp(&id))
    }

    /// Insert an element at its sorted position.
    ///
    /// If an element with the same handle is already present it is replaced
    /// and returned.
    pub fn add(&mut self, elem: T) -> Option<T> {
        match self.search(elem.id()) {
            Ok(i) => Some(std::mem::replace(&mut self.elems[i], elem)),
            Err(i) => {
                self.elems.insert(i, elem);
                None
            }
        }
    }

    /// Look up an element by handle.
    #[must_use]
    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.search(id).ok().map(|i| &self.elems[i])
    }

    /// Look up an element by handle, mutably.
    pub fn get_mut(&mut self, id: T::Id) -> Option<&mut T> {
        match self.search(id) {
            Ok(i) => Some(&mut self.elems[i]),
            Err(_) => None,
        }
    }

    /// Whether an element with this handle exists.
    #[must_use]
    pub fn contains(&self, id: T::Id) -> bool {
        self.search(id).is_ok()
    }

    /// Position of the element with this handle in iteration order.
    #[must_use]
    pub fn index_of(&self, id: T::Id) -> Option<usize> {
        self.search(id).ok()
    }

    /// Remove and return the element with this handle.
    pub fn remove(&mut self, id: T::Id) -> Option<T> {
        self.search(id).ok().map(|i| self.elems.remove(i))
    }

    /// Drop every element.
    pub fn clear(&mut self) {
        self.elems.clear();
    }

    /// Move the whole list out, leaving `self` empty.
    ///
    /// No element is copied; only the backing buffer changes owner.
    #[must_use]
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Whether the list has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Element with the highest handle.
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elems.last()
    }

    /// Iterate in handle order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elems.iter()
    }

    /// Iterate mutably in handle order.
    ///
    /// Handles must not be changed through this iterator.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.elems.iter_mut()
    }

    /// Elements as a slice, in handle order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }
}

impl<T: Keyed> FromIterator<T> for IdList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for elem in iter {
            list.add(elem);
        }
        list
    }
}

impl<T: Keyed> Extend<T> for IdList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for elem in iter {
            self.add(elem);
        }
    }
}

impl<'a, T: Keyed> IntoIterator for &'a IdList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a mut IdList<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: Keyed> IntoIterator for IdList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Keyed for Item {
        type Id = u32;
        fn id(&self) -> u32 {
            self.id
        }
    }

    fn item(id: u32, label: &'static str) -> Item {
        Item { id, label }
    }

    #[test]
    fn add_keeps_handle_order() {
        let mut list = IdList::new();
        list.add(item(3, "c"));
        list.add(item(1, "a"));
        list.add(item(2, "b"));
        let ids: Vec<u32> = list.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn add_replaces_duplicate_handle() {
        let mut list = IdList::new();
        assert!(list.add(item(1, "old")).is_none());
        let replaced = list.add(item(1, "new")).unwrap();
        assert_eq!(replaced.label, "old");
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(1).unwrap().label, "new");
    }

    #[test]
    fn remove_and_lookup() {
        let mut list: IdList<Item> = [item(1, "a"), item(5, "e")].into_iter().collect();
        assert!(list.contains(5));
        assert_eq!(list.index_of(5), Some(1));
        assert_eq!(list.remove(1).unwrap().label, "a");
        assert!(list.get(1).is_none());
        assert!(list.remove(42).is_none());
    }

    #[test]
    fn take_leaves_source_empty() {
        let mut list: IdList<Item> = [item(1, "a"), item(2, "b")].into_iter().collect();
        let moved = list.take();
        assert!(list.is_empty());
        assert_eq!(moved.len(), 2);
    }

    #[test]
    fn get_mut_edits_in_place() {
        let mut list: IdList<Item> = [item(4, "d")].into_iter().collect();
        list.get_mut(4).unwrap().label = "D";
        assert_eq!(list.get(4).unwrap().label, "D");
        assert!(list.get_mut(9).is_none());
    }
}
