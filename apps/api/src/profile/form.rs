use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{Profile, TokenList};

/// Column widths for the short scalar fields.
const SHORT_FIELD_MAX: usize = 10;
const TEXT_FIELD_MAX: usize = 200;

/// A list field as submitted: a JSON array, or a legacy comma-joined string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListField {
    Items(Vec<String>),
    CommaJoined(String),
}

impl Default for ListField {
    fn default() -> Self {
        ListField::Items(Vec::new())
    }
}

impl From<ListField> for TokenList {
    fn from(field: ListField) -> Self {
        match field {
            ListField::Items(items) => items.into(),
            ListField::CommaJoined(raw) => TokenList::from_comma_joined(&raw),
        }
    }
}

/// Body of `PUT /api/v1/profile`. Every field is replaced on save; omitted
/// fields are stored empty.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileForm {
    pub user_id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub age: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub course: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub skills: ListField,
    #[serde(default)]
    pub preferred_roles: ListField,
    #[serde(default)]
    pub preferred_locations: ListField,
    #[serde(default)]
    pub home_location: Option<String>,
}

impl ProfileForm {
    /// Validates field widths and converts the form into a storable profile.
    pub fn into_profile(self) -> Result<Profile, AppError> {
        let name = scalar("name", self.name, TEXT_FIELD_MAX)?;
        let age = scalar("age", self.age, SHORT_FIELD_MAX)?;
        let gender = scalar("gender", self.gender, TEXT_FIELD_MAX)?;
        let course = scalar("course", self.course, TEXT_FIELD_MAX)?;
        let gpa = scalar("gpa", self.gpa, SHORT_FIELD_MAX)?;
        let home_location = scalar("home_location", self.home_location, TEXT_FIELD_MAX)?;

        Ok(Profile {
            user_id: self.user_id,
            name,
            age,
            gender,
            course,
            gpa,
            skills: self.skills.into(),
            preferred_roles: self.preferred_roles.into(),
            preferred_locations: self.preferred_locations.into(),
            home_location,
            updated_at: None,
        })
    }
}

/// Trims a scalar, maps blank to `None` and enforces the column width.
fn scalar(field: &str, value: Option<String>, max: usize) -> Result<Option<String>, AppError> {
    let Some(value) = value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    if value.chars().count() > max {
        return Err(AppError::Validation(format!(
            "{field} must be at most {max} characters"
        )));
    }
    Ok(Some(value))
}
