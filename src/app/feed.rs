//! Synthetic newswire: the article-stream collaborator for headless runs.
//!
//! Stands in for the real news API. Headlines are assembled from a seeded
//! RNG so a run is fully reproducible; the driver owns the poll cadence and
//! calls [`SyntheticNewswire::next_batch`] once per tick.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use moodscape::landscape::RawArticle;

const SUBJECTS: &[&str] = &[
    "City officials",
    "Markets",
    "Residents",
    "Scientists",
    "The transit authority",
    "Union leaders",
    "Local farmers",
    "Hospital staff",
    "The school board",
    "Rescue crews",
];

const PHRASES: &[&str] = &[
    "celebrate a triumph as the stadium opens in delight",
    "express outrage over the surprise budget vote",
    "describe grief and sorrow after the flood",
    "report panic and fear as the outage spreads",
    "call the shock ruling unexpected and remarkable",
    "voice disgust at the repugnant landfill plan",
    "announce a superb quarter with strong growth",
    "warn of a deepening crisis after the collapse",
    "review the annual budget in a routine session",
    "schedule maintenance for the river bridge",
    "welcome optimistic forecasts and exciting plans",
    "face frustrated commuters and rising annoyance",
];

/// Seeded fake article source.
pub struct SyntheticNewswire {
    rng: ChaCha8Rng,
    serial: u64,
}

impl SyntheticNewswire {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            serial: 0,
        }
    }

    /// One poll's worth of articles.
    pub fn next_batch(&mut self, size: usize) -> Vec<RawArticle> {
        (0..size).map(|_| self.next_article()).collect()
    }

    fn next_article(&mut self) -> RawArticle {
        self.serial += 1;
        let subject = SUBJECTS[self.rng.gen_range(0..SUBJECTS.len())];
        let phrase = PHRASES[self.rng.gen_range(0..PHRASES.len())];
        let follow_up = PHRASES[self.rng.gen_range(0..PHRASES.len())];

        let minutes = self.serial % (24 * 60);
        RawArticle {
            id: format!("synthetic-{:06}", self.serial),
            title: format!("{} {}", subject, phrase),
            summary: format!("Correspondents add context as {}.", follow_up),
            url: format!("https://newswire.example.com/story/{}", self.serial),
            published_at: format!("2025-06-01T{:02}:{:02}:00Z", minutes / 60, minutes % 60),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_batch() {
        let mut a = SyntheticNewswire::new(5);
        let mut b = SyntheticNewswire::new(5);
        let batch_a = a.next_batch(20);
        let batch_b = b.next_batch(20);
        for (x, y) in batch_a.iter().zip(&batch_b) {
            assert_eq!(x.id, y.id);
            assert_eq!(x.title, y.title);
        }
    }

    #[test]
    fn test_ids_are_unique_across_batches() {
        let mut wire = SyntheticNewswire::new(5);
        let first = wire.next_batch(10);
        let second = wire.next_batch(10);
        for a in &first {
            assert!(second.iter().all(|b| b.id != a.id));
        }
    }
}
