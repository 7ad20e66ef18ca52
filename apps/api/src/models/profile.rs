use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Ordered list of trimmed, non-empty tokens. Replaces the comma-joined text
/// columns used by older deployments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenList(Vec<String>);

impl TokenList {
    /// Parses a legacy comma-joined value. Commas are not escapable, so
    /// `"a,b"` is always two tokens.
    pub fn from_comma_joined(raw: &str) -> Self {
        raw.split(',').map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Lower-cased copy of every token, order preserved.
    pub fn to_lowercase(&self) -> Vec<String> {
        self.0.iter().map(|t| t.to_lowercase()).collect()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl FromIterator<String> for TokenList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        TokenList(
            iter.into_iter()
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }
}

impl From<Vec<String>> for TokenList {
    fn from(tokens: Vec<String>) -> Self {
        tokens.into_iter().collect()
    }
}

/// A student's saved profile. One per user, replaced wholesale on save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub course: Option<String>,
    pub gpa: Option<String>,
    pub skills: TokenList,
    pub preferred_roles: TokenList,
    pub preferred_locations: TokenList,
    pub home_location: Option<String>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, FromRow)]
pub struct ProfileRow {
    pub user_id: Uuid,
    pub name: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub course: Option<String>,
    pub gpa: Option<String>,
    pub skills: Vec<String>,
    pub preferred_roles: Vec<String>,
    pub preferred_locations: Vec<String>,
    pub home_location: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProfileRow> for Profile {
    fn from(row: ProfileRow) -> Self {
        Profile {
            user_id: row.user_id,
            name: row.name,
            age: row.age,
            gender: row.gender,
            course: row.course,
            gpa: row.gpa,
            skills: row.skills.into(),
            preferred_roles: row.preferred_roles.into(),
            preferred_locations: row.preferred_locations.into(),
            home_location: row.home_location,
            updated_at: Some(row.updated_at),
        }
    }
}
