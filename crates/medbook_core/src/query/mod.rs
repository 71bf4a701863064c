//! Derived read views over the record store.
//!
//! # Responsibility
//! - Compute the visible record subset from search text and facet filters.
//! - Derive facet option lists for the filter dropdowns.

pub mod view;
