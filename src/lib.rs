//! Moodscape: emotional news landscape core.
//!
//! Converts batches of news articles into an interactive terrain: each
//! article is scored for its dominant emotion, scattered onto a fixed grid,
//! and expressed as a colored peak rising out of a procedural noise field.
//! Pointer events resolve back through the same grid to the article under
//! the cursor.
//!
//! The pipeline, leaf-first:
//!
//! - [`sentiment`] - keyword classifier producing an emotion tag and a
//!   normalized intensity per article.
//! - [`landscape`] - placement of a batch onto the grid, terrain synthesis
//!   (noise base + emotion peaks + palette colors), and pointer
//!   hover/click resolution. [`landscape::Landscape`] owns a session.
//! - [`mesh`] - flat geometry buffers and the publish protocol a renderer
//!   consumes, plus the required vertex-normal recomputation.
//!
//! The crate stops at buffers and events: rendering, camera, overlays, and
//! the real article fetcher are host responsibilities.
//!
//! # Example
//!
//! ```
//! use moodscape::landscape::{Landscape, LandscapeConfig, RawArticle};
//!
//! let mut landscape = Landscape::new(LandscapeConfig::from_seed(7));
//! landscape.ingest(vec![RawArticle {
//!     id: "a1".into(),
//!     title: "Team celebrates stunning triumph".into(),
//!     summary: "Fans describe the win as a delight.".into(),
//!     url: "https://example.com/a1".into(),
//!     published_at: "2025-06-01T12:00:00Z".into(),
//! }]);
//!
//! let mesh = landscape.mesh();
//! assert_eq!(mesh.vertex_count(), 100 * 100);
//! ```

pub mod landscape;
pub mod mesh;
pub mod sentiment;
pub mod util;

pub use landscape::{Landscape, LandscapeConfig, LandscapeEvent};
