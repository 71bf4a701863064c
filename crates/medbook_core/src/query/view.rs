//! Search and facet filtering.
//!
//! # Responsibility
//! - Pure view computation: same inputs, same output, input order preserved.
//!
//! # Invariants
//! - Search enumerates the five known fields explicitly; no reflective
//!   property walking.
//! - The `"all"` sentinel leaves a facet unconstrained.

use crate::model::doctor::Doctor;

/// Sentinel selection meaning "facet unconstrained".
pub const FACET_ALL: &str = "all";

/// Exact-match constraint on one facet attribute.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FacetFilter {
    #[default]
    All,
    Exact(String),
}

impl FacetFilter {
    /// Maps a dropdown selection to a filter; the [`FACET_ALL`] sentinel
    /// becomes [`FacetFilter::All`], anything else is an exact match.
    pub fn from_selection(selection: &str) -> Self {
        if selection == FACET_ALL {
            Self::All
        } else {
            Self::Exact(selection.to_string())
        }
    }

    fn matches(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Exact(expected) => expected == value,
        }
    }
}

/// Current search/filter state of the interaction surface.
///
/// `Default` matches every record: empty search, both facets unconstrained.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub city: FacetFilter,
    pub specialty: FacetFilter,
}

/// Computes the visible subset of `records`.
///
/// A record is included iff the search term occurs case-insensitively in at
/// least one field (empty term matches everything) and both facet filters
/// accept it. Relative order is preserved; nothing is re-sorted.
pub fn view(records: &[Doctor], query: &ViewQuery) -> Vec<Doctor> {
    let needle = query.search.to_lowercase();

    records
        .iter()
        .filter(|record| {
            let search_match = needle.is_empty()
                || record
                    .field_values()
                    .iter()
                    .any(|value| value.to_lowercase().contains(&needle));

            search_match
                && query.city.matches(&record.city)
                && query.specialty.matches(&record.specialty)
        })
        .cloned()
        .collect()
}

/// Distinct city values across the full store, `"all"` first, in first-seen
/// order.
pub fn city_options(records: &[Doctor]) -> Vec<String> {
    facet_options(records, |record| record.city.as_str())
}

/// Distinct specialty values across the full store, `"all"` first, in
/// first-seen order.
pub fn specialty_options(records: &[Doctor]) -> Vec<String> {
    facet_options(records, |record| record.specialty.as_str())
}

fn facet_options<'a>(
    records: &'a [Doctor],
    facet: impl Fn(&'a Doctor) -> &'a str,
) -> Vec<String> {
    let mut options = vec![FACET_ALL.to_string()];
    for record in records {
        let value = facet(record);
        if !options[1..].iter().any(|seen| seen == value) {
            options.push(value.to_string());
        }
    }
    options
}
