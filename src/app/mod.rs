//! Headless driver: polls the synthetic newswire, feeds the landscape, and
//! demonstrates the pointer path the way an interactive host would use it.

pub mod export;
pub mod feed;

use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use moodscape::landscape::{GridSpec, Landscape, LandscapeConfig, LandscapeEvent};
use moodscape::sentiment::EmotionTag;

use self::feed::SyntheticNewswire;

/// Configuration assembled from CLI arguments.
pub struct RunConfig {
    pub seed: u64,
    pub batches: usize,
    pub batch_size: usize,
    pub interval_ms: u64,
    pub grid: GridSpec,
    pub export_path: Option<PathBuf>,
}

pub fn run(config: RunConfig) {
    let total_start = Instant::now();

    let mut landscape = Landscape::new(LandscapeConfig {
        grid: config.grid,
        ..LandscapeConfig::from_seed(config.seed)
    });
    let mut wire = SyntheticNewswire::new(config.seed);

    for batch_idx in 0..config.batches {
        if batch_idx > 0 && config.interval_ms > 0 {
            thread::sleep(Duration::from_millis(config.interval_ms));
        }

        print!("Batch {}... ", batch_idx + 1);
        let start = Instant::now();
        let raw = wire.next_batch(config.batch_size);
        landscape.ingest(raw);
        println!("{:.1}ms", start.elapsed().as_secs_f64() * 1000.0);

        print_batch_stats(&landscape);
    }

    demonstrate_interaction(&mut landscape);

    if let Some(path) = &config.export_path {
        export::export_landscape(&landscape, config.seed, path);
    }

    // The poll loop above is the "timer"; once it ends, latch the core so a
    // straggling batch would be dropped.
    landscape.stop();

    println!(
        "Done: {} batch(es), mesh revision {}, {:.1}ms total",
        config.batches,
        landscape.mesh_revision(),
        total_start.elapsed().as_secs_f64() * 1000.0
    );
}

fn print_batch_stats(landscape: &Landscape) {
    let batch = landscape.batch();

    let mut histogram = [0usize; EmotionTag::ALL.len()];
    let mut peak = 0.0f32;
    for article in batch.articles() {
        let slot = EmotionTag::ALL
            .iter()
            .position(|&t| t == article.sentiment.tag)
            .unwrap_or(EmotionTag::ALL.len() - 1);
        histogram[slot] += 1;
        peak = peak.max(article.sentiment.intensity);
    }

    let summary: Vec<String> = EmotionTag::ALL
        .iter()
        .zip(histogram)
        .filter(|(_, count)| *count > 0)
        .map(|(tag, count)| format!("{} {}", tag.name(), count))
        .collect();

    println!(
        "  {} articles on {} cells | {} | peak intensity {:.2}",
        batch.len(),
        batch.num_occupied(),
        summary.join(", "),
        peak
    );
}

/// Drive one hover + click round trip against a cell we know is occupied,
/// the same calls an interactive host makes from its raycast handler.
fn demonstrate_interaction(landscape: &mut Landscape) {
    let Some(cell) = landscape
        .batch()
        .articles()
        .iter()
        .find_map(|a| a.grid_cell)
    else {
        println!("No occupied cells to probe");
        return;
    };
    let point = landscape.grid().cell_to_point(cell);

    let update = landscape.pointer_moved(point);
    println!(
        "Hover ({}, {}): cursor '{}', hovering {:?}",
        cell.x,
        cell.z,
        update.cursor.name(),
        landscape.hovered()
    );

    for event in landscape.click(point) {
        if let LandscapeEvent::ArticleSelected(article) = event {
            println!(
                "Selected: {} [{} {:.2}]",
                article.title,
                article.sentiment.tag.name(),
                article.sentiment.intensity
            );
        }
    }

    landscape.pointer_left();
}
