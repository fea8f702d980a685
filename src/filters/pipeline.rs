use super::types::{Filter, FilterCategory};
use crate::registry::TypeDescriptor;

/// Ordered filters, at most one per category, combined with AND
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterPipeline {
    filters: Vec<Filter>,
}

impl FilterPipeline {
    #[must_use]
    pub const fn new() -> Self {
        Self { filters: Vec::new() }
    }

    /// Register a filter, replacing the one already held for its category.
    ///
    /// A replaced filter keeps its position in evaluation order.
    pub fn register(&mut self, filter: Filter) {
        match self.filters.iter_mut().find(|f| f.category() == filter.category()) {
            Some(slot) => *slot = filter,
            None => self.filters.push(filter),
        }
    }

    #[must_use]
    pub fn get(&self, category: FilterCategory) -> Option<&Filter> {
        self.filters.iter().find(|f| f.category() == category)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.filters.iter()
    }

    /// First category whose filter rejects the descriptor, in registration order
    #[must_use]
    pub fn first_rejection(&self, descriptor: &TypeDescriptor) -> Option<FilterCategory> {
        self.filters
            .iter()
            .find(|f| !f.matches(descriptor))
            .map(Filter::category)
    }

    /// Whether every registered filter accepts the descriptor
    #[must_use]
    pub fn evaluate(&self, descriptor: &TypeDescriptor) -> bool {
        self.first_rejection(descriptor).is_none()
    }
}
