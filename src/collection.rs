//! Ordered, identifier-keyed discovery results
//!
//! [`DiscoveredTypes`] keeps entries in the order the walker produced them.
//! Keys are unique: inserting an existing identifier replaces its descriptor
//! in place. Post-processing goes through the explicit operations below or,
//! for anything else, through [`into_vec`](DiscoveredTypes::into_vec) and the
//! standard iterator adapters.

use std::collections::HashMap;
use std::iter::FusedIterator;
use std::slice;
use std::vec;

use crate::registry::{TypeDescriptor, TypeIdentifier};

/// Result of one discovery call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredTypes {
    entries: Vec<(TypeIdentifier, TypeDescriptor)>,
    index: HashMap<TypeIdentifier, usize>,
}

impl DiscoveredTypes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, returning the one it replaced
    pub fn insert(
        &mut self,
        identifier: TypeIdentifier,
        descriptor: TypeDescriptor,
    ) -> Option<TypeDescriptor> {
        if let Some(&position) = self.index.get(&identifier) {
            return Some(std::mem::replace(&mut self.entries[position].1, descriptor));
        }
        self.index.insert(identifier.clone(), self.entries.len());
        self.entries.push((identifier, descriptor));
        None
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn get(&self, identifier: &str) -> Option<&TypeDescriptor> {
        self.index.get(identifier).map(|&i| &self.entries[i].1)
    }

    #[must_use]
    pub fn contains_key(&self, identifier: &str) -> bool {
        self.index.contains_key(identifier)
    }

    /// Alias of [`contains_key`](Self::contains_key)
    #[must_use]
    pub fn has(&self, identifier: &str) -> bool {
        self.contains_key(identifier)
    }

    #[must_use]
    pub fn first(&self) -> Option<(&TypeIdentifier, &TypeDescriptor)> {
        self.entries.first().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &TypeIdentifier> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter(self.entries.iter())
    }

    /// Transform every entry, in order
    pub fn map<U, F>(&self, mut f: F) -> Vec<U>
    where
        F: FnMut(&TypeIdentifier, &TypeDescriptor) -> U,
    {
        self.entries.iter().map(|(k, v)| f(k, v)).collect()
    }

    /// Keep the entries matching `predicate`, preserving order
    #[must_use]
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&TypeIdentifier, &TypeDescriptor) -> bool,
    {
        self.entries
            .iter()
            .filter(|(k, v)| predicate(k, v))
            .cloned()
            .collect()
    }

    /// Fold the entries into a single value, in order
    pub fn reduce<A, F>(&self, init: A, mut f: F) -> A
    where
        F: FnMut(A, &TypeIdentifier, &TypeDescriptor) -> A,
    {
        self.entries.iter().fold(init, |acc, (k, v)| f(acc, k, v))
    }

    /// Underlying ordered entries
    #[must_use]
    pub fn into_vec(self) -> Vec<(TypeIdentifier, TypeDescriptor)> {
        self.entries
    }
}

/// Borrowing iterator over `(identifier, descriptor)` pairs
#[derive(Debug, Clone)]
pub struct Iter<'a>(slice::Iter<'a, (TypeIdentifier, TypeDescriptor)>);

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a TypeIdentifier, &'a TypeDescriptor);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k, v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, v)| (k, v))
    }
}

impl ExactSizeIterator for Iter<'_> {}
impl FusedIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a DiscoveredTypes {
    type Item = (&'a TypeIdentifier, &'a TypeDescriptor);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for DiscoveredTypes {
    type Item = (TypeIdentifier, TypeDescriptor);
    type IntoIter = vec::IntoIter<(TypeIdentifier, TypeDescriptor)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl FromIterator<(TypeIdentifier, TypeDescriptor)> for DiscoveredTypes {
    fn from_iter<T: IntoIterator<Item = (TypeIdentifier, TypeDescriptor)>>(iter: T) -> Self {
        let mut types = Self::new();
        types.extend(iter);
        types
    }
}

impl Extend<(TypeIdentifier, TypeDescriptor)> for DiscoveredTypes {
    fn extend<T: IntoIterator<Item = (TypeIdentifier, TypeDescriptor)>>(&mut self, iter: T) {
        for (identifier, descriptor) in iter {
            self.insert(identifier, descriptor);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeKind;

    fn entry(name: &str) -> (TypeIdentifier, TypeDescriptor) {
        (TypeIdentifier::from(name), TypeDescriptor::new(name, TypeKind::Class))
    }

    fn sample() -> DiscoveredTypes {
        ["App\\C", "App\\A", "App\\B"].into_iter().map(entry).collect()
    }

    #[test]
    fn test_preserves_insertion_order() {
        let keys: Vec<_> = sample().keys().map(TypeIdentifier::as_str).map(str::to_string).collect();
        assert_eq!(keys, ["App\\C", "App\\A", "App\\B"]);
    }

    #[test]
    fn test_reinsert_overwrites_in_place() {
        let mut types = sample();
        let (id, mut replacement) = entry("App\\A");
        replacement.method_names.insert("handle".to_string());

        let previous = types.insert(id, replacement);
        assert!(previous.is_some());
        assert_eq!(types.len(), 3);
        assert_eq!(types.iter().nth(1).unwrap().0, "App\\A");
        assert!(types.get("App\\A").unwrap().method_names.contains("handle"));
    }

    #[test]
    fn test_lookup() {
        let types = sample();
        assert!(types.has("App\\B"));
        assert!(types.contains_key("App\\C"));
        assert!(!types.has("App\\D"));
        assert!(types.get("App\\D").is_none());
        assert_eq!(types.first().unwrap().0, "App\\C");
    }

    #[test]
    fn test_map_filter_reduce() {
        let types = sample();
        let names = types.map(|k, _| k.to_string());
        assert_eq!(names, ["App\\C", "App\\A", "App\\B"]);

        let total = types.reduce(0, |acc, k, _| acc + k.as_str().len());
        assert_eq!(total, 15);

        let filtered = types.filter(|k, _| k.as_str() != "App\\A");
        assert_eq!(filtered.len(), 2);
        assert!(!filtered.has("App\\A"));
        assert_eq!(filtered.keys().last().unwrap(), "App\\B");
        assert_eq!(types.len(), 3);

        let chained = types
            .filter(|k, _| k.as_str() != "App\\C")
            .filter(|k, _| k.as_str() != "App\\B")
            .map(|k, _| k.to_string());
        assert_eq!(chained, ["App\\A"]);
        assert_eq!(types.keys().count(), 3);
    }

    #[test]
    fn test_iterators() {
        let types = sample();
        assert_eq!((&types).into_iter().len(), 3);
        assert_eq!(types.iter().rev().next().unwrap().0, "App\\B");
        assert_eq!(types.values().count(), 3);

        let owned: Vec<_> = types.into_iter().map(|(k, _)| k.into_string()).collect();
        assert_eq!(owned, ["App\\C", "App\\A", "App\\B"]);
    }

    #[test]
    fn test_empty() {
        let types = DiscoveredTypes::new();
        assert!(types.is_empty());
        assert!(types.first().is_none());
        assert!(types.into_vec().is_empty());
    }
}
