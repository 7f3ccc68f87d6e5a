use common::filter::{unique_states, SchoolFilter, ALL_STATES};
use common::model::school::SchoolSummary;

pub struct HomePage {
    /// Every school returned by the list endpoint.
    pub schools: Vec<SchoolSummary>,
    pub search_term: String,
    /// `"All"` or one of `states`.
    pub selected_state: String,
    pub loading: bool,
    pub error: Option<String>,

    /// Distinct states of `schools`, sorted, for the dropdown.
    pub states: Vec<String>,
    /// `schools` after search and state filtering, sorted by name.
    pub filtered: Vec<SchoolSummary>,
}

impl Default for HomePage {
    fn default() -> Self {
        Self::new()
    }
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            schools: Vec::new(),
            search_term: String::new(),
            selected_state: ALL_STATES.to_string(),
            loading: true,
            error: None,
            states: Vec::new(),
            filtered: Vec::new(),
        }
    }

    pub fn filter(&self) -> SchoolFilter {
        SchoolFilter::new(self.search_term.clone(), self.selected_state.clone())
    }

    /// Recomputes `states` and `filtered` from the current inputs.
    pub fn refresh(&mut self) {
        self.states = unique_states(&self.schools);
        self.filtered = self.filter().apply(&self.schools);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i64, name: &str, state: &str) -> SchoolSummary {
        SchoolSummary {
            id,
            name: name.into(),
            address: "1 Main Street".into(),
            city: "Springfield".into(),
            state: state.into(),
            image: String::new(),
            created_at: Default::default(),
        }
    }

    #[test]
    fn default_page_starts_loading_with_every_state() {
        let page = HomePage::default();
        assert!(page.loading);
        assert_eq!(page.selected_state, ALL_STATES);
        assert!(page.filtered.is_empty());
    }

    #[test]
    fn refresh_applies_state_selection() {
        let mut page = HomePage::default();
        page.schools = vec![summary(1, "Oak Ridge", "Ohio"), summary(2, "Ash Grove", "Iowa")];
        page.selected_state = "Iowa".into();
        page.refresh();
        assert_eq!(page.states, vec!["Iowa".to_string(), "Ohio".to_string()]);
        assert_eq!(page.filtered.len(), 1);
        assert_eq!(page.filtered[0].name, "Ash Grove");
    }
}
