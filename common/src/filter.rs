//! Search and state filtering for the school gallery.
//!
//! The listing page runs these functions in memory over the records it fetched
//! once. The backend registers [`contains_ignore_case`] and [`compare_names`]
//! on its SQLite connection so that `GET /api/schools/get` matches and orders
//! rows by the very same rules.

use crate::model::school::SchoolSummary;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// State filter value meaning "no state restriction".
pub const ALL_STATES: &str = "All";

/// Case-insensitive substring test. An empty needle matches everything.
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Alphabetic order for school names: case-folded first, raw name as tiebreak.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// The search term and state selection of the listing page, or the
/// `search`/`state` query of the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolFilter {
    pub search: Option<String>,
    pub state: Option<String>,
}

impl SchoolFilter {
    pub fn new(search: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            state: Some(state.into()),
        }
    }

    /// The search term, if it restricts anything.
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }

    /// The exact state to match, unless unset, empty, or the "All" sentinel.
    pub fn state_restriction(&self) -> Option<&str> {
        self.state
            .as_deref()
            .filter(|s| !s.is_empty() && *s != ALL_STATES)
    }

    pub fn matches(&self, school: &SchoolSummary) -> bool {
        let search_ok = self.search_term().is_none_or(|term| {
            contains_ignore_case(&school.name, term)
                || contains_ignore_case(&school.city, term)
                || contains_ignore_case(&school.address, term)
        });
        let state_ok = self
            .state_restriction()
            .is_none_or(|state| school.state == state);
        search_ok && state_ok
    }

    /// Matching schools sorted by name.
    pub fn apply(&self, schools: &[SchoolSummary]) -> Vec<SchoolSummary> {
        let mut filtered: Vec<SchoolSummary> = schools
            .iter()
            .filter(|school| self.matches(school))
            .cloned()
            .collect();
        sort_by_name(&mut filtered);
        filtered
    }
}

pub fn sort_by_name(schools: &mut [SchoolSummary]) {
    schools.sort_by(|a, b| compare_names(&a.name, &b.name).then_with(|| a.id.cmp(&b.id)));
}

/// Distinct states present in `schools`, sorted, for the filter dropdown.
pub fn unique_states(schools: &[SchoolSummary]) -> Vec<String> {
    schools
        .iter()
        .map(|school| school.state.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn school(id: i64, name: &str, address: &str, city: &str, state: &str) -> SchoolSummary {
        SchoolSummary {
            id,
            name: name.into(),
            address: address.into(),
            city: city.into(),
            state: state.into(),
            image: format!("https://example.com/{id}.jpg"),
            created_at: DateTime::from_timestamp(1_700_000_000 + id, 0).unwrap(),
        }
    }

    fn sample() -> Vec<SchoolSummary> {
        vec![
            school(1, "Westview High", "123 Spring St", "Portland", "Oregon"),
            school(2, "Springfield Elementary", "19 Plympton Street", "Springfield", "Oregon"),
            school(3, "Bayside High", "8 Ocean Avenue", "Palisades", "California"),
            school(4, "anderson Academy", "400 Elm Road", "Fresno", "California"),
        ]
    }

    fn names(schools: &[SchoolSummary]) -> Vec<&str> {
        schools.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn search_matches_name_city_or_address() {
        let filtered = SchoolFilter::new("SPRING", ALL_STATES).apply(&sample());
        assert_eq!(names(&filtered), ["Springfield Elementary", "Westview High"]);
    }

    #[test]
    fn state_filter_is_exact() {
        let filtered = SchoolFilter::new("", "California").apply(&sample());
        assert_eq!(names(&filtered), ["anderson Academy", "Bayside High"]);

        let none = SchoolFilter::new("", "california").apply(&sample());
        assert!(none.is_empty());
    }

    #[test]
    fn filters_combine_with_and() {
        let filtered = SchoolFilter::new("high", "Oregon").apply(&sample());
        assert_eq!(names(&filtered), ["Westview High"]);
    }

    #[test]
    fn empty_search_and_all_states_reproduce_the_sorted_set() {
        let all = SchoolFilter::new("", ALL_STATES).apply(&sample());
        assert_eq!(all.len(), 4);
        assert_eq!(
            names(&all),
            ["anderson Academy", "Bayside High", "Springfield Elementary", "Westview High"]
        );
        assert_eq!(SchoolFilter::new("", ALL_STATES).apply(&all), all);
        assert_eq!(SchoolFilter::default().apply(&sample()), all);
    }

    #[test]
    fn unique_states_are_deduplicated_and_sorted() {
        assert_eq!(unique_states(&sample()), ["California", "Oregon"]);
        assert!(unique_states(&[]).is_empty());
    }

    #[test]
    fn name_order_ignores_case_then_falls_back_to_raw() {
        assert_eq!(compare_names("apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names("Apple", "apple"), Ordering::Less);
        assert_eq!(compare_names("École", "école"), Ordering::Less);
    }

    #[test]
    fn case_folding_covers_non_ascii() {
        assert!(contains_ignore_case("Lycée Français", "FRANÇAIS"));
        assert!(contains_ignore_case("anything", ""));
    }
}
