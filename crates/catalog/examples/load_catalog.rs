use catalog::{Catalog, PrimaryMood};
use std::path::Path;
use std::time::Instant;

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let start = Instant::now();
    let catalog = match args.get(1) {
        Some(path) => Catalog::load_from_file(Path::new(path)),
        None => Catalog::seed(),
    }
    .expect("Failed to load catalog");
    let elapsed = start.elapsed();

    println!("=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", catalog.len());
    println!();
    for mood in PrimaryMood::ALL {
        println!("{:>12}: {}", mood, catalog.movies_with_mood(mood).len());
    }
}
