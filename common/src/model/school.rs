use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered school as stored in the `schools` table.
///
/// This is the full record returned by `POST /api/schools/add`. Records are
/// immutable once created: there is no update or delete path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct School {
    /// Generated by the database on insert.
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Ten digit phone number (checked by the add form, not by the server).
    pub contact: String,
    pub email_id: String,
    /// Hosted image URL, stored verbatim.
    pub image: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// The listing projection returned by `GET /api/schools/get`.
///
/// Contact details are left out of the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolSummary {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub image: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl From<School> for SchoolSummary {
    fn from(school: School) -> Self {
        Self {
            id: school.id,
            name: school.name,
            address: school.address,
            city: school.city,
            state: school.state,
            image: school.image,
            created_at: school.created_at,
        }
    }
}

/// Body of `POST /api/schools/add`.
///
/// Every field is optional on the wire so that a missing key and an empty
/// string are both reported as "required" instead of a JSON decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSchool {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub email_id: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A `NewSchool` whose seven fields are all present and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: String,
}

impl NewSchool {
    /// Names of the fields that are absent or empty, in declaration order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("name", &self.name),
            ("address", &self.address),
            ("city", &self.city),
            ("state", &self.state),
            ("contact", &self.contact),
            ("email_id", &self.email_id),
            ("image", &self.image),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(field, _)| field)
        .collect()
    }

    /// Converts into a `SchoolDraft`, or returns the missing field names.
    pub fn into_draft(self) -> Result<SchoolDraft, Vec<&'static str>> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(missing);
        }
        Ok(SchoolDraft {
            name: self.name.unwrap_or_default(),
            address: self.address.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            state: self.state.unwrap_or_default(),
            contact: self.contact.unwrap_or_default(),
            email_id: self.email_id.unwrap_or_default(),
            image: self.image.unwrap_or_default(),
        })
    }
}

/// `201` body of `POST /api/schools/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSchoolResponse {
    pub message: String,
    pub school: School,
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
