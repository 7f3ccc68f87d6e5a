//! Client-side schema for the add-school form.
//!
//! The rules mirror what the form enforces before it talks to the server:
//! minimum lengths for the text fields, a ten digit contact number, and a
//! well-formed email. The server itself only checks that fields are present.

use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

static CONTACT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid contact pattern"));

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$")
        .expect("valid email pattern")
});

/// The user-editable fields of the add form. The image is handled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    Name,
    Address,
    City,
    State,
    Contact,
    EmailId,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Name,
        FormField::Address,
        FormField::City,
        FormField::State,
        FormField::Contact,
        FormField::EmailId,
    ];

    /// JSON key used for this field in `NewSchool`.
    pub fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Address => "address",
            FormField::City => "city",
            FormField::State => "state",
            FormField::Contact => "contact",
            FormField::EmailId => "email_id",
        }
    }

    fn min_len(self) -> Option<usize> {
        match self {
            FormField::Name | FormField::City | FormField::State => Some(2),
            FormField::Address => Some(10),
            FormField::Contact | FormField::EmailId => None,
        }
    }

    fn required_message(self) -> &'static str {
        match self {
            FormField::Name => "School name is required",
            FormField::Address => "Address is required",
            FormField::City => "City is required",
            FormField::State => "State is required",
            FormField::Contact => "Contact is required",
            FormField::EmailId => "Email is required",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Current values of the add form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchoolForm {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
}

pub type FormErrors = BTreeMap<FormField, String>;

impl SchoolForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Address => &self.address,
            FormField::City => &self.city,
            FormField::State => &self.state,
            FormField::Contact => &self.contact,
            FormField::EmailId => &self.email_id,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        let slot = match field {
            FormField::Name => &mut self.name,
            FormField::Address => &mut self.address,
            FormField::City => &mut self.city,
            FormField::State => &mut self.state,
            FormField::Contact => &mut self.contact,
            FormField::EmailId => &mut self.email_id,
        };
        *slot = value;
    }

    /// First failing rule of a single field, if any.
    pub fn validate_field(&self, field: FormField) -> Option<String> {
        let value = self.get(field);
        if value.is_empty() {
            return Some(field.required_message().to_string());
        }
        if let Some(min) = field.min_len() {
            if value.chars().count() < min {
                return Some(format!("{field} must be at least {min} characters"));
            }
        }
        match field {
            FormField::Contact if !CONTACT_RE.is_match(value) => {
                Some("Contact must be exactly 10 digits".to_string())
            }
            FormField::EmailId if !is_valid_email(value) => {
                Some("Enter a valid email address".to_string())
            }
            _ => None,
        }
    }

    /// All failing fields. An empty map means the form may be submitted.
    pub fn validate(&self) -> FormErrors {
        FormField::ALL
            .into_iter()
            .filter_map(|field| self.validate_field(field).map(|msg| (field, msg)))
            .collect()
    }

    /// Request body for the create endpoint, with the hosted image URL.
    pub fn to_new_school(&self, image_url: &str) -> crate::model::school::NewSchool {
        crate::model::school::NewSchool {
            name: Some(self.name.clone()),
            address: Some(self.address.clone()),
            city: Some(self.city.clone()),
            state: Some(self.state.clone()),
            contact: Some(self.contact.clone()),
            email_id: Some(self.email_id.clone()),
            image: Some(image_url.to_string()),
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Whether the submit control is enabled: nothing in flight and an image
/// already uploaded.
pub fn can_submit(is_loading: bool, image_url: &str) -> bool {
    !is_loading && !image_url.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SchoolForm {
        SchoolForm {
            name: "Springfield Elementary".into(),
            address: "19 Plympton Street".into(),
            city: "Springfield".into(),
            state: "Oregon".into(),
            contact: "5551234567".into(),
            email_id: "office@springfield.edu".into(),
        }
    }

    #[test]
    fn valid_form_has_no_errors() {
        assert!(valid_form().validate().is_empty());
    }

    #[test]
    fn nine_digit_contact_is_rejected() {
        let mut form = valid_form();
        form.contact = "555123456".into();
        let errors = form.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[&FormField::Contact], "Contact must be exactly 10 digits");
    }

    #[test]
    fn contact_must_be_digits_only() {
        let mut form = valid_form();
        form.contact = "555-123-45".into();
        assert!(form.validate_field(FormField::Contact).is_some());
    }

    #[test]
    fn minimum_lengths_apply() {
        let mut form = valid_form();
        form.name = "A".into();
        form.address = "1 Main St".into();
        form.state = "O".into();
        let errors = form.validate();
        assert_eq!(
            errors.keys().copied().collect::<Vec<_>>(),
            [FormField::Name, FormField::Address, FormField::State]
        );
        assert_eq!(errors[&FormField::Address], "address must be at least 10 characters");
    }

    #[test]
    fn empty_fields_report_required() {
        let errors = SchoolForm::default().validate();
        assert_eq!(errors.len(), 6);
        assert_eq!(errors[&FormField::EmailId], "Email is required");
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("a.b+c@school.edu"));
        assert!(!is_valid_email("office@"));
        assert!(!is_valid_email("office school.edu"));
        assert!(is_valid_email("office@school"));
        assert!(!is_valid_email("office@-school.edu"));
    }

    #[test]
    fn submit_needs_an_uploaded_image() {
        assert!(!can_submit(false, ""));
        assert!(!can_submit(true, "https://example.com/a.jpg"));
        assert!(can_submit(false, "https://example.com/a.jpg"));
    }

    #[test]
    fn form_converts_to_complete_request() {
        let body = valid_form().to_new_school("https://example.com/a.jpg");
        assert!(body.missing_fields().is_empty());
    }
}
