//! Pure refinement of an already-fetched, gender-and-status-narrowed profile
//! list. Gender and age-sort are server-side query parameters; everything
//! here runs in-process over the fetched rows and never touches the store.

use serde::Deserialize;

use crate::models::profile::ProfileRow;

/// Conjunctive (AND-composed) predicate set for the public listing.
///
/// Every field is independent and optional; an absent field imposes no
/// constraint. There is no OR mode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileFilter {
    /// Inclusive lower age bound.
    pub min_age: Option<i32>,
    /// Inclusive upper age bound.
    pub max_age: Option<i32>,
    /// Minimum annual income in lakh. A profile with no recorded income is
    /// excluded whenever this is set; unknown income never passes.
    pub min_income: Option<f64>,
    /// Case-insensitive substring match against `family_gotra`.
    pub gotra: Option<String>,
}

impl ProfileFilter {
    /// True when no predicate is active.
    pub fn is_empty(&self) -> bool {
        self.min_age.is_none()
            && self.max_age.is_none()
            && self.min_income.is_none()
            && !self.gotra.as_deref().is_some_and(|g| !g.is_empty())
    }

    /// Resets every predicate to no-constraint. Does not touch the gender
    /// tab or sort order; those live in the server-side query.
    pub fn clear(&mut self) {
        *self = ProfileFilter::default();
    }

    /// Whether a single profile passes every active predicate.
    pub fn matches(&self, profile: &ProfileRow) -> bool {
        if let Some(min_age) = self.min_age {
            if profile.age < min_age {
                return false;
            }
        }
        if let Some(max_age) = self.max_age {
            if profile.age > max_age {
                return false;
            }
        }
        if let Some(min_income) = self.min_income {
            // Exclude-on-missing: a profile without a recorded income never
            // passes an active income filter.
            match profile.income_lakh {
                Some(income) if income >= min_income => {}
                _ => return false,
            }
        }
        if let Some(gotra) = self.gotra.as_deref() {
            if !gotra.is_empty()
                && !profile
                    .family_gotra
                    .to_lowercase()
                    .contains(&gotra.to_lowercase())
            {
                return false;
            }
        }
        true
    }

    /// Applies the filter, keeping input order. The result is always a
    /// subsequence of the input; an empty filter returns it unchanged.
    pub fn apply(&self, profiles: Vec<ProfileRow>) -> Vec<ProfileRow> {
        if self.is_empty() {
            return profiles;
        }
        profiles.into_iter().filter(|p| self.matches(p)).collect()
    }
}
