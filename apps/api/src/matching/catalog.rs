use std::collections::BTreeSet;

use serde::Serialize;

use crate::matching::vocabulary::extract_vocabulary;
use crate::models::listing::Listing;

/// Selectable values for the profile form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProfileOptions {
    pub skills: Vec<String>,
    pub locations: Vec<String>,
    pub roles: Vec<String>,
}

/// The listing set as loaded at startup. Read-only for the life of the process.
#[derive(Debug, Clone, Default)]
pub struct ListingCatalog {
    listings: Vec<Listing>,
    options: ProfileOptions,
}

impl ListingCatalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        let options = ProfileOptions {
            skills: extract_vocabulary(&listings),
            locations: distinct_non_empty(listings.iter().map(|l| l.location.as_deref())),
            roles: distinct_non_empty(listings.iter().map(|l| l.title.as_deref())),
        };
        Self { listings, options }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn options(&self) -> &ProfileOptions {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }
}

fn distinct_non_empty<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
