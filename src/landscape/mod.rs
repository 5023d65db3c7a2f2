//! The emotional landscape: batches of scored articles expressed as terrain.
//!
//! Data flows one way through this module:
//!
//! 1. A batch of raw articles arrives from the external stream.
//! 2. Each article is classified (emotion tag + intensity).
//! 3. Placement scatters the batch over the lattice.
//! 4. Synthesis turns occupancy + highlight state into geometry buffers.
//! 5. The buffers publish through the mesh slot for the renderer.
//! 6. Pointer events resolve against the same lattice and feed highlight
//!    changes back into step 4.
//!
//! [`Landscape`] owns one session of that loop. Everything runs on the
//! host's single event-loop thread; a rebuild fully replaces the published
//! buffers before the next draw reads them.

mod article;
mod coloring;
mod constants;
mod grid;
mod interact;
mod placement;
mod synthesis;

pub use article::{Article, RawArticle};
pub use coloring::{emotion_color, HIGHLIGHT, NEUTRAL_TERRAIN};
pub use constants::{
    CLICK_TOLERANCE, DEFAULT_GRID_DEPTH, DEFAULT_GRID_WIDTH, MAX_HEIGHT, NOISE_AMPLITUDE,
    NOISE_FREQUENCY,
};
pub use grid::{GridCell, GridSpec};
pub use interact::{resolve_click, resolve_hover, CursorIcon, HoverResolution};
pub use placement::PlacedBatch;
pub use synthesis::{synthesize, NoiseField};

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::mesh::{MeshSlot, TerrainBuffers};
use crate::sentiment::SentimentAnalyzer;
use crate::util::Timed;

/// Explicit configuration for a landscape session. No module-level
/// defaults are consulted at runtime; everything the session needs is here.
#[derive(Clone, Copy, Debug)]
pub struct LandscapeConfig {
    pub grid: GridSpec,
    /// Peak height of a maximum-intensity article.
    pub max_height: f32,
    /// Seed for the base terrain noise field.
    pub terrain_seed: u32,
    /// Seed for the placement RNG, independent of the terrain seed.
    pub placement_seed: u64,
}

impl LandscapeConfig {
    /// Derive both sub-seeds from one session seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            grid: GridSpec::default(),
            max_height: MAX_HEIGHT,
            terrain_seed: seed as u32,
            placement_seed: seed.wrapping_add(1),
        }
    }
}

impl Default for LandscapeConfig {
    fn default() -> Self {
        Self::from_seed(0)
    }
}

/// Events the landscape emits for the host UI.
#[derive(Clone, Debug)]
pub enum LandscapeEvent {
    /// Highlight changed: the hovered article's id, or `None` when the
    /// pointer left occupied terrain (or the article vanished with a batch).
    ArticleHovered(Option<String>),
    /// A click resolved to an article.
    ArticleSelected(Article),
}

/// Outcome of a pointer-move: the cursor the host should show plus any
/// events the move produced.
pub struct PointerUpdate {
    pub cursor: CursorIcon,
    pub events: Vec<LandscapeEvent>,
}

/// One live landscape session.
pub struct Landscape {
    grid: GridSpec,
    max_height: f32,
    analyzer: SentimentAnalyzer,
    noise: NoiseField,
    placement_rng: ChaCha8Rng,
    batch: PlacedBatch,
    highlight: Option<String>,
    mesh: MeshSlot,
    stopped: bool,
}

impl Landscape {
    /// Create a session and synthesize the empty base terrain so the
    /// renderer has geometry before the first batch lands.
    pub fn new(config: LandscapeConfig) -> Self {
        let noise = NoiseField::new(config.terrain_seed);
        let batch = PlacedBatch::empty();
        let initial = synthesize(config.grid, &noise, config.max_height, &batch, None);

        Self {
            grid: config.grid,
            max_height: config.max_height,
            analyzer: SentimentAnalyzer::new(),
            noise,
            placement_rng: ChaCha8Rng::seed_from_u64(config.placement_seed),
            batch,
            highlight: None,
            mesh: MeshSlot::new(initial),
            stopped: false,
        }
    }

    /// Accept a batch from the article stream, replacing the previous one
    /// wholesale.
    ///
    /// An empty batch is how upstream failures arrive and is a no-op: the
    /// prior terrain stays up rather than flickering to flat. The highlight
    /// survives only if the hovered article's id is present in the new
    /// batch. Batches after [`Landscape::stop`] are ignored.
    pub fn ingest(&mut self, raw: Vec<RawArticle>) -> Vec<LandscapeEvent> {
        if self.stopped {
            log::debug!("batch dropped after stop");
            return Vec::new();
        }
        if raw.is_empty() {
            log::debug!("empty batch, retaining current terrain");
            return Vec::new();
        }

        let _t = Timed::info("batch ingest");
        let articles: Vec<Article> = raw
            .into_iter()
            .map(|r| {
                let sentiment = self.analyzer.classify(&Article::classification_text(&r));
                Article::from_raw(r, sentiment)
            })
            .collect();
        log::info!("ingesting batch of {} articles", articles.len());

        self.batch = PlacedBatch::place(articles, self.grid, &mut self.placement_rng);

        let mut events = Vec::new();
        if let Some(id) = &self.highlight {
            if !self.batch.contains(id) {
                self.highlight = None;
                events.push(LandscapeEvent::ArticleHovered(None));
            }
        }

        self.rebuild();
        events
    }

    /// Resolve a pointer position over the mesh. A highlight change
    /// triggers a color resynthesis - the only rebuild without a new batch.
    pub fn pointer_moved(&mut self, point: Vec3) -> PointerUpdate {
        let resolution = resolve_hover(self.grid, &self.batch, point);
        let cursor = resolution.cursor;
        let next = resolution.article.map(|a| a.id.clone());

        let mut events = Vec::new();
        if next != self.highlight {
            self.highlight = next.clone();
            self.rebuild();
            events.push(LandscapeEvent::ArticleHovered(next));
        }
        PointerUpdate { cursor, events }
    }

    /// The pointer left the mesh entirely: clear any highlight and revert
    /// the hovered cell to its emotion color.
    pub fn pointer_left(&mut self) -> Vec<LandscapeEvent> {
        if self.highlight.take().is_some() {
            self.rebuild();
            vec![LandscapeEvent::ArticleHovered(None)]
        } else {
            Vec::new()
        }
    }

    /// Resolve a click. Selection does not touch highlight state.
    pub fn click(&self, point: Vec3) -> Vec<LandscapeEvent> {
        match resolve_click(self.grid, &self.batch, point) {
            Some(article) => vec![LandscapeEvent::ArticleSelected(article.clone())],
            None => Vec::new(),
        }
    }

    /// Idempotent teardown latch. The host cancels its poll timer and calls
    /// this; any batch already in flight is then dropped on arrival.
    pub fn stop(&mut self) {
        if !self.stopped {
            self.stopped = true;
            log::info!("landscape stopped");
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Discard the current noise field and rebuild on a fresh one. The only
    /// way the base terrain changes within a session.
    pub fn reseed_terrain(&mut self, seed: u32) {
        self.noise = NoiseField::new(seed);
        self.rebuild();
    }

    /// The currently published geometry.
    pub fn mesh(&self) -> &TerrainBuffers {
        self.mesh.buffers()
    }

    /// Bumps on every rebuild; hosts compare it to skip redundant uploads.
    pub fn mesh_revision(&self) -> u64 {
        self.mesh.revision()
    }

    pub fn hovered(&self) -> Option<&str> {
        self.highlight.as_deref()
    }

    pub fn batch(&self) -> &PlacedBatch {
        &self.batch
    }

    pub fn grid(&self) -> GridSpec {
        self.grid
    }

    fn rebuild(&mut self) {
        let buffers = synthesize(
            self.grid,
            &self.noise,
            self.max_height,
            &self.batch,
            self.highlight.as_deref(),
        );
        self.mesh.publish(buffers);
    }
}
