//! Vertex colors for the terrain.
//!
//! The palette is fixed: every emotion maps to one RGB, unoccupied terrain
//! is a medium gray, and the hovered article renders pure white. The
//! highlight must stay distinct from every palette entry so a hovered peak
//! is unambiguous.

use glam::Vec3;

use crate::sentiment::EmotionTag;

/// Color of terrain with no article on it (#888888).
pub const NEUTRAL_TERRAIN: Vec3 = Vec3::new(0.533, 0.533, 0.533);

/// Color of the currently hovered article's cell.
pub const HIGHLIGHT: Vec3 = Vec3::ONE;

fn rgb(hex: u32) -> Vec3 {
    Vec3::new(
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    )
}

/// Fixed emotion palette.
pub fn emotion_color(tag: EmotionTag) -> Vec3 {
    match tag {
        EmotionTag::Joy => rgb(0x42f59b),      // vibrant mint green
        EmotionTag::Anger => rgb(0xff4d4d),    // bright red
        EmotionTag::Sadness => rgb(0x5da9ff),  // light blue
        EmotionTag::Fear => rgb(0xc05cff),     // rich purple
        EmotionTag::Surprise => rgb(0xffbb33), // bright gold
        EmotionTag::Disgust => rgb(0x16e6cc),  // turquoise
        EmotionTag::Neutral => rgb(0xd9d9d9),  // light gray
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let mut colors: Vec<Vec3> = EmotionTag::ALL.iter().map(|&t| emotion_color(t)).collect();
        colors.push(NEUTRAL_TERRAIN);
        colors.push(HIGHLIGHT);

        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert!(a.distance(*b) > 0.05, "palette entries too close: {:?} vs {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_components_stay_in_unit_range() {
        for &tag in &EmotionTag::ALL {
            let c = emotion_color(tag);
            for component in c.to_array() {
                assert!((0.0..=1.0).contains(&component));
            }
        }
    }
}
