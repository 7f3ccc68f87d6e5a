use common::model::school::SchoolSummary;

pub enum Msg {
    /// Load (or reload, from the retry button) every school.
    Fetch,
    Fetched(Result<Vec<SchoolSummary>, String>),
    SetSearch(String),
    ClearSearch,
    SelectState(String),
}
