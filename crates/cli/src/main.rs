use anyhow::{bail, Context, Result};
use catalog::{Catalog, EnergyLevel, Intensity, MentalDepth, MovieRecord, PrimaryMood};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use colored::Colorize;
use engine::tables::adjacent_moods;
use engine::{explain, AvoidanceFlag, DeliveryStyle, MoodQuery, UserProfile};
use service::{MoodRequest, MoviePack, RecommendationOrchestrator};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Moodflix - mood-based movie recommendations
#[derive(Parser)]
#[command(name = "moodflix")]
#[command(about = "Pick three movies for how you feel right now", long_about = None)]
struct Cli {
    /// Catalog JSON file (defaults to the built-in seed catalog)
    #[arg(short, long, env = "MOODFLIX_CATALOG")]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a safe, a challenge and a deep pick
    Recommend {
        /// How you feel (e.g. sad, lonely, playful)
        #[arg(long)]
        mood: PrimaryMood,

        /// How strongly you feel it: low, medium, high
        #[arg(long, default_value = "medium")]
        intensity: Intensity,

        /// very_low, low, medium, high
        #[arg(long, default_value = "medium")]
        energy: EnergyLevel,

        /// light, medium, fun, deep
        #[arg(long, default_value = "medium")]
        depth: MentalDepth,

        /// quick, triple, pack, therapy
        #[arg(long, default_value = "pack")]
        style: DeliveryStyle,

        /// Content to avoid: no_violence, no_extreme_sadness (repeatable)
        #[arg(long)]
        avoid: Vec<AvoidanceFlag>,

        /// Birthday as YYYY-MM-DD, used for age gating
        #[arg(long)]
        birthday: Option<NaiveDate>,

        /// Favorite genre (repeatable)
        #[arg(long)]
        genre: Vec<String>,

        /// Preferred actor (repeatable)
        #[arg(long)]
        actor: Vec<String>,

        /// Show how each pick was scored
        #[arg(long)]
        explain: bool,

        /// Print the pack as JSON
        #[arg(long)]
        json: bool,
    },

    /// List catalog movies
    Catalog {
        /// Only movies tagged with this mood
        #[arg(long)]
        mood: Option<PrimaryMood>,

        /// Case-insensitive title substring
        #[arg(long)]
        title: Option<String>,
    },

    /// Show every mood and the moods next to it
    Moods,

    /// Run benchmark to test performance
    Benchmark {
        /// Number of requests to make
        #[arg(long, default_value = "100")]
        requests: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    if let Commands::Moods = cli.command {
        print_moods();
        return Ok(());
    }

    let start = Instant::now();
    let catalog = Arc::new(load_catalog(cli.catalog.as_ref())?);
    eprintln!(
        "{} Loaded {} movies in {:?}",
        "✓".green(),
        catalog.len(),
        start.elapsed()
    );

    match cli.command {
        Commands::Recommend {
            mood,
            intensity,
            energy,
            depth,
            style,
            avoid,
            birthday,
            genre,
            actor,
            explain,
            json,
        } => {
            let mut query = MoodQuery::new(mood, intensity, energy, depth).with_style(style);
            for flag in avoid {
                query = query.avoiding(flag);
            }
            let profile = (birthday.is_some() || !genre.is_empty() || !actor.is_empty()).then(|| {
                UserProfile {
                    birthday,
                    ..UserProfile::default()
                }
                .with_favorite_genres(genre)
                .with_preferred_actors(actor)
            });
            handle_recommend(catalog, query, profile, explain, json).await?
        }
        Commands::Catalog { mood, title } => handle_catalog(&catalog, mood, title.as_deref()),
        Commands::Benchmark { requests } => handle_benchmark(catalog, requests).await?,
        Commands::Moods => {}
    }

    Ok(())
}

fn load_catalog(path: Option<&PathBuf>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display())),
        None => Catalog::seed().context("Failed to load the built-in seed catalog"),
    }
}

/// Handle the 'recommend' command
async fn handle_recommend(
    catalog: Arc<Catalog>,
    query: MoodQuery,
    profile: Option<UserProfile>,
    show_explain: bool,
    json: bool,
) -> Result<()> {
    let orchestrator = RecommendationOrchestrator::new(catalog);
    let request = match profile.clone() {
        Some(profile) => MoodRequest::for_user(query.clone(), "cli", profile),
        None => MoodRequest::anonymous(query.clone()),
    };
    let pack = orchestrator.recommend(request).await?;

    if json {
        let output = if show_explain {
            let breakdowns: Vec<_> = slots(&pack)
                .iter()
                .map(|(slot, movie)| {
                    serde_json::json!({
                        "slot": slot,
                        "id": movie.id,
                        "breakdown": explain(movie, &query, profile.as_ref()),
                    })
                })
                .collect();
            serde_json::json!({ "pack": pack, "explanations": breakdowns })
        } else {
            serde_json::to_value(&pack)?
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_pack(&pack, &query, profile.as_ref(), show_explain);
    Ok(())
}

/// Handle the 'catalog' command
fn handle_catalog(catalog: &Catalog, mood: Option<PrimaryMood>, title: Option<&str>) {
    let mut movies: Vec<&MovieRecord> = match title {
        Some(title) => catalog.search_title(title),
        None => catalog.movies().iter().collect(),
    };
    if let Some(mood) = mood {
        movies.retain(|movie| movie.has_mood(mood));
    }

    println!("{}", format!("{} movies:", movies.len()).bold().blue());
    for movie in movies {
        let moods = movie
            .mood_tags
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "{:>5}  {} ({}) {} - quality {:.1} [{}]",
            movie.id.dimmed(),
            movie.title.bold(),
            year_label(movie),
            movie.content_rating,
            movie.quality_score,
            moods
        );
    }
}

/// Handle the 'moods' command
fn print_moods() {
    println!("{}", "Moods and their neighbours:".bold().blue());
    for mood in PrimaryMood::ALL {
        let neighbours = adjacent_moods(mood)
            .iter()
            .map(|m| m.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{:>11} -> {}", mood.as_str().green(), neighbours);
    }
}

/// Handle the 'benchmark' command
async fn handle_benchmark(catalog: Arc<Catalog>, requests: usize) -> Result<()> {
    if requests == 0 {
        bail!("--requests must be at least 1");
    }
    let orchestrator = RecommendationOrchestrator::new(catalog);

    let queries: Vec<MoodQuery> = (0..requests).map(|_| random_query()).collect();

    let wall_clock = Instant::now();
    let mut handles = vec![];
    for query in queries {
        let orchestrator = orchestrator.clone();
        let handle = tokio::spawn(async move {
            let start = Instant::now();
            orchestrator.recommend(MoodRequest::anonymous(query)).await?;
            Ok::<_, anyhow::Error>(start.elapsed())
        });
        handles.push(handle);
    }

    let mut timings = vec![];
    for handle in handles {
        let elapsed = handle.await??;
        timings.push(elapsed);
    }
    let total_time = wall_clock.elapsed();

    let latency_sum: Duration = timings.iter().sum();
    let avg_latency = latency_sum / (timings.len() as u32);
    timings.sort();
    let p50 = timings[timings.len() / 2];
    let p95 = timings[(timings.len() as f32 * 0.95) as usize];
    let p99 = timings[(timings.len() as f32 * 0.99) as usize];
    let throughput = requests as f32 / total_time.as_secs_f32();

    println!("{}", "Benchmark results:".bold().blue());
    println!("Total time: {:?}", total_time);
    println!("Average latency: {:?}", avg_latency);
    println!("P50 latency: {:?}", p50);
    println!("P95 latency: {:?}", p95);
    println!("P99 latency: {:?}", p99);
    println!("Throughput: {:.2} requests/second", throughput);

    Ok(())
}

fn random_query() -> MoodQuery {
    const INTENSITIES: [Intensity; 3] = [Intensity::Low, Intensity::Medium, Intensity::High];
    const ENERGIES: [EnergyLevel; 4] = [
        EnergyLevel::VeryLow,
        EnergyLevel::Low,
        EnergyLevel::Medium,
        EnergyLevel::High,
    ];
    const DEPTHS: [MentalDepth; 4] = [
        MentalDepth::Light,
        MentalDepth::Medium,
        MentalDepth::Fun,
        MentalDepth::Deep,
    ];

    let pick = |len: usize| rand::random::<u32>() as usize % len;
    let mut query = MoodQuery::new(
        PrimaryMood::ALL[pick(PrimaryMood::ALL.len())],
        INTENSITIES[pick(INTENSITIES.len())],
        ENERGIES[pick(ENERGIES.len())],
        DEPTHS[pick(DEPTHS.len())],
    );
    if rand::random::<bool>() {
        query = query.avoiding(AvoidanceFlag::NoViolence);
    }
    query
}

fn slots(pack: &MoviePack) -> [(&'static str, &MovieRecord); 3] {
    [
        ("safe", &pack.safe),
        ("challenge", &pack.challenge),
        ("deep", &pack.deep),
    ]
}

fn year_label(movie: &MovieRecord) -> String {
    movie
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "????".to_string())
}

/// Format and print a pack
fn print_pack(
    pack: &MoviePack,
    query: &MoodQuery,
    profile: Option<&UserProfile>,
    show_explain: bool,
) {
    println!(
        "{}",
        format!(
            "Feeling {} ({} delivery):",
            pack.primary_mood, pack.delivery_style
        )
        .bold()
        .blue()
    );
    if pack.fallback {
        println!(
            "{}",
            "Nothing matched your filters; here is a family-friendly default.".yellow()
        );
    }

    for (slot, movie) in slots(pack) {
        println!(
            "{:>10}  {} ({}) [{}] {}",
            slot.green(),
            movie.title.bold(),
            year_label(movie),
            movie.genres.join(", "),
            movie.content_rating
        );
        if let Some(description) = &movie.description {
            println!("            {}", description.dimmed());
        }
        if show_explain {
            let b = explain(movie, query, profile);
            println!(
                "            mood +{} genres +{} actors +{} intensity -{} energy -{} depth -{} quality +{} = {:.1}",
                b.mood_bonus,
                b.genre_bonus,
                b.actor_bonus,
                b.intensity_penalty,
                b.energy_penalty,
                b.depth_penalty,
                b.quality_bonus,
                b.total()
            );
        }
    }
}
