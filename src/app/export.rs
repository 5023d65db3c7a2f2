//! Landscape export for external analysis.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::Instant;

use flate2::write::GzEncoder;
use flate2::Compression;
use serde::Serialize;

use moodscape::landscape::{GridCell, Landscape};
use moodscape::mesh::compute_vertex_normals;

/// Export the current landscape to a JSON file (gzipped when the path ends
/// in `.gz`).
pub fn export_landscape(landscape: &Landscape, seed: u64, path: &Path) {
    print!("Exporting to {}... ", path.display());
    let start = Instant::now();

    let data = LandscapeExport::from_landscape(landscape, seed);
    let file = File::create(path).expect("Failed to create export file");

    let is_gzip = path.extension().map(|ext| ext == "gz").unwrap_or(false);
    if is_gzip {
        let encoder = GzEncoder::new(BufWriter::new(file), Compression::default());
        serde_json::to_writer(encoder, &data).expect("Failed to write JSON");
    } else {
        let writer = BufWriter::new(file);
        serde_json::to_writer(writer, &data).expect("Failed to write JSON");
    }

    println!("{:.1}ms", start.elapsed().as_secs_f64() * 1000.0);
}

#[derive(Serialize)]
struct LandscapeExport {
    metadata: Metadata,
    mesh: MeshData,
    articles: Vec<ArticleRecord>,
}

#[derive(Serialize)]
struct Metadata {
    seed: u64,
    grid_width: u32,
    grid_depth: u32,
    num_articles: usize,
    num_occupied_cells: usize,
    num_vertices: usize,
    num_triangles: usize,
    mesh_revision: u64,
}

#[derive(Serialize)]
struct MeshData {
    positions: Vec<f32>,
    /// Recomputed from the triangulation, not the published placeholders.
    normals: Vec<f32>,
    colors: Vec<f32>,
    indices: Vec<u32>,
}

#[derive(Serialize)]
struct ArticleRecord {
    id: String,
    title: String,
    url: String,
    published_at: String,
    emotion: &'static str,
    intensity: f32,
    score: i32,
    cell: Option<GridCell>,
}

impl LandscapeExport {
    fn from_landscape(landscape: &Landscape, seed: u64) -> Self {
        let grid = landscape.grid();
        let mesh = landscape.mesh();

        let articles = landscape
            .batch()
            .articles()
            .iter()
            .map(|a| ArticleRecord {
                id: a.id.clone(),
                title: a.title.clone(),
                url: a.url.clone(),
                published_at: a.published_at.clone(),
                emotion: a.sentiment.tag.name(),
                intensity: a.sentiment.intensity,
                score: a.sentiment.score,
                cell: a.grid_cell,
            })
            .collect();

        Self {
            metadata: Metadata {
                seed,
                grid_width: grid.width,
                grid_depth: grid.depth,
                num_articles: landscape.batch().len(),
                num_occupied_cells: landscape.batch().num_occupied(),
                num_vertices: mesh.vertex_count(),
                num_triangles: mesh.triangle_count(),
                mesh_revision: landscape.mesh_revision(),
            },
            mesh: MeshData {
                positions: mesh.positions.clone(),
                normals: compute_vertex_normals(&mesh.positions, &mesh.indices),
                colors: mesh.colors.clone(),
                indices: mesh.indices.clone(),
            },
            articles,
        }
    }
}
