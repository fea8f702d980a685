//! Structural filters
//!
//! Filters decide which resolved types end up in a discovery result. Each
//! [`Filter`] belongs to a [`FilterCategory`] and holds the arguments it was
//! registered with:
//!
//! - **classes**: the type is one of the arguments or descends from one
//! - **methods** / **properties**: the type has one of the public members
//! - **traits**: the type composes one of the traits, directly or not
//! - **attributes**: the type declares one of the attributes
//!
//! A [`FilterPipeline`] keeps one filter per category. Arguments of one filter
//! are OR'd; categories are AND'd, stopping at the first rejection.

pub mod pipeline;
pub mod types;

pub use pipeline::FilterPipeline;
pub use types::{Filter, FilterCategory};
