//! User profile snapshot and age computation.
//!
//! Profiles are owned by the account system. The engine receives a
//! read-only snapshot per request and only looks at three fields.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Age assumed when no profile (or no birthday) is supplied.
///
/// Anonymous queries are treated as adult.
pub const DEFAULT_AGE: i32 = 18;

/// The profile fields the engine consumes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(default)]
    pub birthday: Option<NaiveDate>,
    #[serde(default)]
    pub favorite_genres: Vec<String>,
    #[serde(default)]
    pub preferred_actors: Vec<String>,
}

impl UserProfile {
    pub fn new(birthday: NaiveDate) -> Self {
        Self {
            birthday: Some(birthday),
            ..Self::default()
        }
    }

    pub fn with_favorite_genres<I, S>(mut self, genres: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.favorite_genres = genres.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_preferred_actors<I, S>(mut self, actors: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_actors = actors.into_iter().map(Into::into).collect();
        self
    }
}

/// Whole years between `birthday` and `today`.
///
/// One less if this year's birthday hasn't come yet. A birthday in the
/// future yields a negative age, which the age gates treat as a child.
pub fn age_on(birthday: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthday.year();
    if (today.month(), today.day()) < (birthday.month(), birthday.day()) {
        age -= 1;
    }
    age
}

/// Age used for content gating: the profile's age, or [`DEFAULT_AGE`].
pub fn effective_age(profile: Option<&UserProfile>, today: NaiveDate) -> i32 {
    profile
        .and_then(|p| p.birthday)
        .map(|birthday| age_on(birthday, today))
        .unwrap_or(DEFAULT_AGE)
}

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_birthday_already_passed() {
        assert_eq!(age_on(date(2000, 3, 15), date(2024, 6, 1)), 24);
    }

    #[test]
    fn test_age_birthday_not_yet_reached() {
        assert_eq!(age_on(date(2000, 9, 15), date(2024, 6, 1)), 23);
        // Same month, earlier day
        assert_eq!(age_on(date(2000, 6, 2), date(2024, 6, 1)), 23);
    }

    #[test]
    fn test_age_on_birthday() {
        assert_eq!(age_on(date(2011, 6, 1), date(2024, 6, 1)), 13);
    }

    #[test]
    fn test_leap_day_birthday() {
        // Feb 29 birthdays turn over on Mar 1 in common years
        assert_eq!(age_on(date(2008, 2, 29), date(2025, 2, 28)), 16);
        assert_eq!(age_on(date(2008, 2, 29), date(2025, 3, 1)), 17);
    }

    #[test]
    fn test_effective_age_defaults_to_adult() {
        let today = date(2024, 6, 1);
        assert_eq!(effective_age(None, today), DEFAULT_AGE);

        let no_birthday = UserProfile::default();
        assert_eq!(effective_age(Some(&no_birthday), today), DEFAULT_AGE);

        let child = UserProfile::new(date(2014, 1, 1));
        assert_eq!(effective_age(Some(&child), today), 10);
    }

    #[test]
    fn test_profile_from_json() {
        let json = r#"{
            "birthday": "1990-04-12",
            "favoriteGenres": ["Drama"],
            "preferredActors": ["Bill Murray"]
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.birthday, Some(date(1990, 4, 12)));
        assert_eq!(profile.favorite_genres, vec!["Drama"]);
    }
}
