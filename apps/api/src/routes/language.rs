//! Request-scoped display language.
//!
//! The language travels with each request (`?lang=` or `Accept-Language`)
//! and is handed to the presentation layer in responses. Scoring never sees it.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::{header::ACCEPT_LANGUAGE, request::Parts},
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DisplayLanguage(String);

impl DisplayLanguage {
    /// Accepts a language tag such as `hi`, `ta-IN` or `pt_BR` and keeps the
    /// lower-cased primary subtag.
    pub fn parse(tag: &str) -> Option<Self> {
        let primary = tag.trim().split(['-', '_']).next()?;
        let valid = (2..=8).contains(&primary.len()) && primary.chars().all(|c| c.is_ascii_alphabetic());
        valid.then(|| DisplayLanguage(primary.to_ascii_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for DisplayLanguage {
    fn default() -> Self {
        DisplayLanguage(DEFAULT_LANGUAGE.to_string())
    }
}

#[derive(Deserialize)]
struct LangQuery {
    lang: Option<String>,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for DisplayLanguage {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let explicit = Query::<LangQuery>::try_from_uri(&parts.uri)
            .ok()
            .and_then(|Query(q)| q.lang)
            .filter(|l| !l.trim().is_empty());

        if let Some(lang) = explicit {
            return DisplayLanguage::parse(&lang)
                .ok_or_else(|| AppError::Validation(format!("Unsupported language tag '{lang}'")));
        }

        // Header values are best-effort: a malformed header falls back to the default.
        let from_header = parts
            .headers
            .get(ACCEPT_LANGUAGE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .and_then(|v| v.split(';').next())
            .and_then(DisplayLanguage::parse);

        Ok(from_header.unwrap_or_default())
    }
}
