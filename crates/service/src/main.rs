//! Simple test harness for the recommendation orchestrator.
//!
//! Loads a catalog (the file named by `MOODFLIX_CATALOG`, or the built-in
//! seed) and serves one sample request end to end.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use catalog::{Catalog, EnergyLevel, Intensity, MentalDepth, PrimaryMood};
use engine::{AvoidanceFlag, DeliveryStyle, MoodQuery, UserProfile};
use service::{MoodRequest, RecommendationOrchestrator};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,service=debug,engine=debug")),
        )
        .init();

    info!("Starting Moodflix service test harness");

    let catalog = match std::env::var("MOODFLIX_CATALOG") {
        Ok(path) => Catalog::load_from_file(Path::new(&path))?,
        Err(_) => Catalog::seed()?,
    };
    info!("Catalog loaded with {} movies", catalog.len());

    let orchestrator = RecommendationOrchestrator::new(Arc::new(catalog));

    let query = MoodQuery::new(
        PrimaryMood::Lonely,
        Intensity::Medium,
        EnergyLevel::Low,
        MentalDepth::Deep,
    )
    .avoiding(AvoidanceFlag::NoViolence)
    .with_style(DeliveryStyle::Triple);
    let profile = UserProfile::default()
        .with_favorite_genres(["Drama"])
        .with_preferred_actors(["Bill Murray"]);

    let pack = orchestrator
        .recommend(MoodRequest::for_user(query, "demo", profile))
        .await?;

    for (slot, movie) in [("safe", &pack.safe), ("challenge", &pack.challenge), ("deep", &pack.deep)] {
        info!(
            "{:>9}: {} ({}) [{}]",
            slot,
            movie.title,
            movie.year.map(|y| y.to_string()).unwrap_or_else(|| "????".to_string()),
            movie.genres.join(", ")
        );
    }

    let history = orchestrator.history("demo").await;
    info!("History for demo has {} entries", history.len());

    Ok(())
}
