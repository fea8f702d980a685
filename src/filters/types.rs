//! Filter data structures
//!
//! - `FilterCategory`: the five structural facts a filter can test
//! - `Filter`: a category plus the arguments given at registration

use std::fmt;

use crate::registry::TypeDescriptor;

/// Category a filter is registered under; one filter per category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterCategory {
    /// Type is, or descends from, one of the arguments
    Classes,
    /// Type has one of the public methods
    Methods,
    /// Type has one of the public fields
    Properties,
    /// Type composes one of the traits
    Traits,
    /// Type declares one of the attributes
    Attributes,
}

impl FilterCategory {
    pub const ALL: [Self; 5] = [
        Self::Classes,
        Self::Methods,
        Self::Properties,
        Self::Traits,
        Self::Attributes,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Classes => "classes",
            Self::Methods => "methods",
            Self::Properties => "properties",
            Self::Traits => "traits",
            Self::Attributes => "attributes",
        }
    }
}

impl fmt::Display for FilterCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Predicate over a descriptor, true when any argument matches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    category: FilterCategory,
    arguments: Vec<String>,
}

impl Filter {
    pub fn new<I, S>(category: FilterCategory, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            arguments: arguments.into_iter().map(Into::into).collect(),
        }
    }

    /// Types that are, extend or implement one of `identifiers`
    pub fn instances_of<I, S>(identifiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FilterCategory::Classes, identifiers)
    }

    pub fn with_method<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FilterCategory::Methods, methods)
    }

    pub fn with_property<I, S>(properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FilterCategory::Properties, properties)
    }

    pub fn with_trait<I, S>(traits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FilterCategory::Traits, traits)
    }

    pub fn with_attribute<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(FilterCategory::Attributes, attributes)
    }

    #[must_use]
    pub const fn category(&self) -> FilterCategory {
        self.category
    }

    #[must_use]
    pub fn arguments(&self) -> &[String] {
        &self.arguments
    }

    /// Whether the descriptor satisfies any of the arguments.
    ///
    /// An empty argument list never matches.
    #[must_use]
    pub fn matches(&self, descriptor: &TypeDescriptor) -> bool {
        let set = match self.category {
            FilterCategory::Classes => {
                return self.arguments.iter().any(|name| descriptor.is_a(name));
            }
            FilterCategory::Methods => &descriptor.method_names,
            FilterCategory::Properties => &descriptor.field_names,
            FilterCategory::Traits => &descriptor.mixin_names,
            FilterCategory::Attributes => &descriptor.annotation_names,
        };
        self.arguments.iter().any(|name| set.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeKind;

    fn listener() -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new("App\\Listeners\\SendMail", TypeKind::Class);
        descriptor.supertypes.insert("App\\Contracts\\Listener".to_string());
        descriptor.method_names.insert("handle".to_string());
        descriptor.field_names.insert("queue".to_string());
        descriptor.mixin_names.insert("App\\Concerns\\Queueable".to_string());
        descriptor.annotation_names.insert("AsListener".to_string());
        descriptor
    }

    #[test]
    fn test_instances_of_matches_self_and_supertypes() {
        let descriptor = listener();
        assert!(Filter::instances_of(["App\\Listeners\\SendMail"]).matches(&descriptor));
        assert!(Filter::instances_of(["Other", "App\\Contracts\\Listener"]).matches(&descriptor));
        assert!(!Filter::instances_of(["App\\Contracts\\Job"]).matches(&descriptor));
    }

    #[test]
    fn test_set_categories_are_disjunctive() {
        let descriptor = listener();
        assert!(Filter::with_method(["boot", "handle"]).matches(&descriptor));
        assert!(Filter::with_property(["queue"]).matches(&descriptor));
        assert!(Filter::with_trait(["App\\Concerns\\Queueable"]).matches(&descriptor));
        assert!(Filter::with_attribute(["AsListener"]).matches(&descriptor));
        assert!(!Filter::with_method(["boot"]).matches(&descriptor));
        assert!(!Filter::with_attribute(["queue"]).matches(&descriptor));
    }

    #[test]
    fn test_empty_arguments_never_match() {
        let descriptor = listener();
        for category in FilterCategory::ALL {
            assert!(!Filter::new(category, Vec::<String>::new()).matches(&descriptor), "{category}");
        }
    }

    #[test]
    fn test_category_names() {
        let names: Vec<_> = FilterCategory::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(names, ["classes", "methods", "properties", "traits", "attributes"]);
    }
}
