//! Recommendation scoring — a fixed linear match between one profile and
//! every listing in the catalog.
//!
//! Three independent signals, each matched by case-insensitive substring:
//! - skills   (50): proportional, `floor(50 * min(1, matched / skill_count))`
//! - roles    (30): all-or-nothing against the listing title
//! - location (20): all-or-nothing against the listing location
//!
//! The denominator is always the full 100 points, so an unfilled profile field
//! zeroes its sub-score instead of dropping out of the total.

use serde::{Deserialize, Serialize};

use crate::models::listing::Listing;
use crate::models::profile::Profile;

pub const SKILL_WEIGHT: u32 = 50;
pub const ROLE_WEIGHT: u32 = 30;
pub const LOCATION_WEIGHT: u32 = 20;

/// Maximum number of recommendations returned per request.
pub const RECOMMENDATION_LIMIT: usize = 6;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Per-signal contribution to a listing's percentage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub skill_score: u32,
    pub role_score: u32,
    pub location_score: u32,
    /// Lower-cased profile skills found in the listing tags, profile order.
    pub matched_skills: Vec<String>,
}

impl MatchBreakdown {
    pub fn raw_score(&self) -> u32 {
        self.skill_score + self.role_score + self.location_score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub listing: Listing,
    pub percentage: u32, // 0 – 100
    pub breakdown: MatchBreakdown,
}

// ────────────────────────────────────────────────────────────────────────────
// Profile normalisation
// ────────────────────────────────────────────────────────────────────────────

/// Lower-cased token lists the scorer matches with. Built once per request.
#[derive(Debug, Clone, Default)]
pub struct NormalizedProfile {
    pub skills: Vec<String>,
    pub roles: Vec<String>,
    pub locations: Vec<String>,
}

impl NormalizedProfile {
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            skills: profile.skills.to_lowercase(),
            roles: profile.preferred_roles.to_lowercase(),
            locations: profile.preferred_locations.to_lowercase(),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

/// Scores one listing against a normalised profile.
pub fn score_listing(profile: &NormalizedProfile, listing: &Listing) -> MatchBreakdown {
    let title = listing.title_lower();
    let location = listing.location_lower();
    let tags = listing.tags_lower();

    let matched_skills: Vec<String> = profile
        .skills
        .iter()
        .filter(|s| tags.contains(s.as_str()))
        .cloned()
        .collect();

    let skill_score = if profile.skills.is_empty() {
        0
    } else {
        let ratio = (matched_skills.len() as f64 / profile.skills.len() as f64).min(1.0);
        (SKILL_WEIGHT as f64 * ratio).floor() as u32
    };

    let role_score = if any_substring(&profile.roles, &title) {
        ROLE_WEIGHT
    } else {
        0
    };

    let location_score = if any_substring(&profile.locations, &location) {
        LOCATION_WEIGHT
    } else {
        0
    };

    MatchBreakdown {
        skill_score,
        role_score,
        location_score,
        matched_skills,
    }
}

/// Ranks every listing for `profile` and returns the best matches.
///
/// Listings scoring zero are dropped, the rest sorted by percentage
/// descending (stable, so ties keep catalog order) and capped at
/// [`RECOMMENDATION_LIMIT`]. An absent profile yields no recommendations.
pub fn recommend(profile: Option<&Profile>, listings: &[Listing]) -> Vec<Recommendation> {
    let Some(profile) = profile else {
        return Vec::new();
    };
    let normalized = NormalizedProfile::from_profile(profile);

    let mut recommendations: Vec<Recommendation> = listings
        .iter()
        .filter_map(|listing| {
            let breakdown = score_listing(&normalized, listing);
            let raw = breakdown.raw_score();
            if raw == 0 {
                return None;
            }
            Some(Recommendation {
                listing: listing.clone(),
                percentage: to_percentage(raw),
                breakdown,
            })
        })
        .collect();

    recommendations.sort_by(|a, b| b.percentage.cmp(&a.percentage));
    recommendations.truncate(RECOMMENDATION_LIMIT);
    recommendations
}

fn any_substring(needles: &[String], haystack: &str) -> bool {
    needles.iter().any(|n| haystack.contains(n.as_str()))
}

fn to_percentage(raw: u32) -> u32 {
    let total = SKILL_WEIGHT + ROLE_WEIGHT + LOCATION_WEIGHT;
    ((raw as f64 / total as f64) * 100.0).round().clamp(0.0, 100.0) as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
