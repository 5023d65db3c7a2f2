//! Tuning constants for terrain synthesis and interaction.

/// Default lattice width (cells along x).
pub const DEFAULT_GRID_WIDTH: u32 = 100;

/// Default lattice depth (cells along z).
pub const DEFAULT_GRID_DEPTH: u32 = 100;

/// Height added by a maximum-intensity article on top of the base field.
/// Article peaks scale linearly with intensity up to this value.
pub const MAX_HEIGHT: f32 = 10.0;

/// Frequency applied to normalized lattice coordinates before sampling the
/// noise field. Coordinates are normalized to [-0.5, 0.5] first.
pub const NOISE_FREQUENCY: f64 = 2.0;

/// Amplitude applied to the raw noise sample. The base field therefore
/// spans roughly [-2, 2].
pub const NOISE_AMPLITUDE: f32 = 2.0;

/// Click acceptance radius in grid units. Strictly less-than: a candidate
/// at exactly this distance is rejected.
pub const CLICK_TOLERANCE: f32 = 2.0;
