use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// An internship listing. Immutable once loaded into the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Listing {
    pub id: i32,
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    /// Free text, tags separated by spaces and/or commas.
    pub tags: Option<String>,
    pub stipend: Option<String>,
    pub url: Option<String>,
}

impl Listing {
    pub fn title_lower(&self) -> String {
        lower_or_empty(self.title.as_deref())
    }

    pub fn location_lower(&self) -> String {
        lower_or_empty(self.location.as_deref())
    }

    pub fn tags_lower(&self) -> String {
        lower_or_empty(self.tags.as_deref())
    }
}

fn lower_or_empty(field: Option<&str>) -> String {
    field.map(str::to_lowercase).unwrap_or_default()
}
