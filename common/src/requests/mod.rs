use crate::filter::SchoolFilter;
use serde::{Deserialize, Serialize};

/// Query string of `GET /api/schools/get`. Both parameters are optional.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ListSchoolsQuery {
    pub search: Option<String>,
    pub state: Option<String>,
}

impl From<ListSchoolsQuery> for SchoolFilter {
    fn from(query: ListSchoolsQuery) -> Self {
        SchoolFilter {
            search: query.search,
            state: query.state,
        }
    }
}
