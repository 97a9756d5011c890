//! Integration tests for the engine.
//!
//! These run the full filter -> score -> select path against catalogs
//! loaded the way production loads them (JSON, or the built-in seed).

use catalog::{Catalog, ContentRating, EnergyLevel, Intensity, MentalDepth, PrimaryMood};
use chrono::NaiveDate;
use engine::{
    explain, recommend_on, score, AvoidanceFlag, DeliveryStyle, MoodQuery, UserProfile,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn born(year: i32) -> UserProfile {
    UserProfile::new(NaiveDate::from_ymd_opt(year, 1, 1).unwrap())
}

fn two_movie_catalog() -> Catalog {
    Catalog::from_json_str(
        r#"[
            {
                "id": "a", "title": "Movie A", "year": 2010, "qualityScore": 8.0,
                "moodTags": ["happy"], "intensity": "low", "energyLevel": "medium",
                "mentalDepth": "light", "contentRating": "PG"
            },
            {
                "id": "b", "title": "Movie B", "year": 2012, "qualityScore": 7.0,
                "moodTags": ["sad"], "intensity": "high", "energyLevel": "low",
                "mentalDepth": "deep", "contentRating": "PG-13"
            }
        ]"#,
    )
    .unwrap()
}

fn age_gate_catalog() -> Catalog {
    Catalog::from_json_str(
        r#"[
            {
                "id": "r", "title": "Restricted", "qualityScore": 10.0,
                "moodTags": ["calm"], "intensity": "low", "energyLevel": "low",
                "mentalDepth": "deep", "contentRating": "R"
            },
            {
                "id": "g", "title": "General", "qualityScore": 1.0,
                "moodTags": ["angry"], "intensity": "high", "energyLevel": "high",
                "mentalDepth": "light", "contentRating": "G"
            }
        ]"#,
    )
    .unwrap()
}

fn calm_query() -> MoodQuery {
    MoodQuery::new(
        PrimaryMood::Calm,
        Intensity::Low,
        EnergyLevel::Low,
        MentalDepth::Deep,
    )
}

#[test]
fn test_two_movie_scenario_from_json() {
    let catalog = two_movie_catalog();
    let query = MoodQuery::new(
        PrimaryMood::Happy,
        Intensity::Low,
        EnergyLevel::Medium,
        MentalDepth::Light,
    );

    let a = catalog.get("a").unwrap();
    assert_eq!(score(a, &query, None), 19.0);

    let result = recommend_on(&catalog, &query, None, today());
    assert_eq!(result.safe.id, "a");
    assert_eq!(result.challenge.id, "b");
    assert_eq!(result.deep.id, "b");
}

#[test]
fn test_recommend_is_deterministic() {
    let catalog = Catalog::seed().unwrap();
    let profile = born(1995)
        .with_favorite_genres(["Drama", "Animation"])
        .with_preferred_actors(["Bill Murray"]);

    for mood in PrimaryMood::ALL {
        let query = MoodQuery::new(mood, Intensity::Medium, EnergyLevel::Low, MentalDepth::Deep);
        let first = recommend_on(&catalog, &query, Some(&profile), today());
        for _ in 0..5 {
            let again = recommend_on(&catalog, &query, Some(&profile), today());
            assert_eq!(first, again, "mood {}", mood);
            assert_eq!(first.safe.id, again.safe.id);
        }
    }
}

#[test]
fn test_child_never_gets_restricted_movie() {
    let catalog = age_gate_catalog();
    let child = born(2015);

    // The R movie would win easily on score for an adult
    let adult = recommend_on(&catalog, &calm_query(), None, today());
    assert_eq!(adult.safe.id, "r");

    let result = recommend_on(&catalog, &calm_query(), Some(&child), today());
    for pick in result.picks() {
        assert_ne!(pick.content_rating, ContentRating::R);
        assert_eq!(pick.id, "g");
    }
}

#[test]
fn test_teen_sees_pg13_but_not_r() {
    let catalog = Catalog::seed().unwrap();
    let teen = born(2010); // 15 on the test date

    for mood in PrimaryMood::ALL {
        let query = MoodQuery::new(mood, Intensity::High, EnergyLevel::High, MentalDepth::Deep);
        let result = recommend_on(&catalog, &query, Some(&teen), today());
        for pick in result.picks() {
            assert!(
                !matches!(pick.content_rating, ContentRating::R | ContentRating::Nc17),
                "{} recommended to a 15 year old for {}",
                pick.title,
                mood
            );
        }
    }
}

#[test]
fn test_fallback_returns_three_picks() {
    let catalog = Catalog::from_json_str(
        r#"[
            {
                "id": "v1", "title": "Violent R", "qualityScore": 6.0,
                "moodTags": ["angry"], "intensity": "high", "energyLevel": "high",
                "mentalDepth": "light", "isViolent": true, "contentRating": "R"
            },
            {
                "id": "v2", "title": "Violent G", "qualityScore": 6.0,
                "moodTags": ["tense"], "intensity": "high", "energyLevel": "high",
                "mentalDepth": "light", "isViolent": true, "contentRating": "G"
            }
        ]"#,
    )
    .unwrap();
    let query = calm_query().avoiding(AvoidanceFlag::NoViolence);

    let result = recommend_on(&catalog, &query, None, today());
    assert!(result.fallback);
    assert_eq!(result.safe.id, "v2");
    assert_eq!(result.challenge.id, "v2");
    assert_eq!(result.deep.id, "v2");
}

#[test]
fn test_challenge_lacks_query_mood_whenever_possible() {
    let catalog = Catalog::seed().unwrap();

    for mood in PrimaryMood::ALL {
        let query = MoodQuery::new(mood, Intensity::Low, EnergyLevel::Medium, MentalDepth::Medium);
        let result = recommend_on(&catalog, &query, None, today());
        let someone_lacks_mood = catalog.movies().iter().any(|m| !m.has_mood(mood));
        if someone_lacks_mood {
            assert!(
                !result.challenge.has_mood(mood),
                "challenge {} carries {}",
                result.challenge.title,
                mood
            );
        }
    }
}

#[test]
fn test_avoidance_flags_apply_to_every_slot() {
    let catalog = Catalog::seed().unwrap();
    let query = MoodQuery::new(
        PrimaryMood::Angry,
        Intensity::High,
        EnergyLevel::High,
        MentalDepth::Deep,
    )
    .avoiding(AvoidanceFlag::NoViolence)
    .avoiding(AvoidanceFlag::NoExtremeSadness);

    let result = recommend_on(&catalog, &query, None, today());
    assert!(!result.fallback);
    for pick in result.picks() {
        assert!(!pick.is_violent, "{}", pick.title);
        assert!(!pick.is_extremely_sad, "{}", pick.title);
    }
}

#[test]
fn test_preferred_actor_lifts_movie_to_safe() {
    let catalog = Catalog::seed().unwrap();
    let query = MoodQuery::new(
        PrimaryMood::Lonely,
        Intensity::Low,
        EnergyLevel::Low,
        MentalDepth::Medium,
    )
    .with_style(DeliveryStyle::Quick);

    let fan = born(1980).with_preferred_actors(["Bill Murray"]);
    let result = recommend_on(&catalog, &query, Some(&fan), today());

    assert_eq!(result.safe.title, "Lost in Translation");
    let breakdown = explain(result.safe, &query, Some(&fan));
    assert_eq!(breakdown.actor_bonus, 12.0);
    assert_eq!(breakdown.total(), score(result.safe, &query, Some(&fan)));
}

#[test]
fn test_unknown_values_degrade_gracefully() {
    let catalog = Catalog::from_json_str(
        r#"[
            {
                "id": "odd", "title": "Odd Movie", "qualityScore": 5.0,
                "moodTags": ["wistful"], "intensity": "extreme", "energyLevel": "frantic",
                "mentalDepth": "bottomless", "contentRating": "TV-MA"
            }
        ]"#,
    )
    .unwrap();

    let query: MoodQuery = serde_json::from_str(
        r#"{
            "primaryMood": "happy",
            "intensity": "low",
            "energyLevel": "medium",
            "mentalDepth": "light",
            "avoidanceFlags": ["no_spiders"]
        }"#,
    )
    .unwrap();

    let odd = catalog.get("odd").unwrap();
    // Only the quality term survives
    assert_eq!(score(odd, &query, None), 2.5);

    let result = recommend_on(&catalog, &query, None, today());
    assert_eq!(result.safe.id, "odd");
    assert!(!result.fallback);
}
