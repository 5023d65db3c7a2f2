//! Keyword-based emotion classification for article text.
//!
//! Two passes over the same whole-word tokens: a signed valence sum gives a
//! base sentiment score, and per-emotion keyword counts pick the dominant
//! emotion. When no emotion keyword matches, the sign of the base score
//! decides (strongly positive reads as joy, strongly negative as sadness).
//! Intensity is the normalized magnitude of the base score.
//!
//! This is a deliberately simple heuristic. It never fails: empty input
//! classifies as neutral with zero intensity.

mod lexicon;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Dominant emotion of a piece of text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmotionTag {
    Joy,
    Anger,
    Sadness,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl EmotionTag {
    /// All tags, emotions first, neutral last.
    pub const ALL: [EmotionTag; 7] = [
        Self::Joy,
        Self::Anger,
        Self::Sadness,
        Self::Fear,
        Self::Surprise,
        Self::Disgust,
        Self::Neutral,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Joy => "joy",
            Self::Anger => "anger",
            Self::Sadness => "sadness",
            Self::Fear => "fear",
            Self::Surprise => "surprise",
            Self::Disgust => "disgust",
            Self::Neutral => "neutral",
        }
    }
}

/// Classification result for one piece of text.
///
/// `score` is the raw signed valence sum; `intensity` is its magnitude
/// normalized into `[0, 1]` (`min(|score| / 5, 1)`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Sentiment {
    pub tag: EmotionTag,
    pub score: i32,
    pub intensity: f32,
}

impl Sentiment {
    /// The result for empty or unscorable input.
    pub fn neutral() -> Self {
        Self {
            tag: EmotionTag::Neutral,
            score: 0,
            intensity: 0.0,
        }
    }
}

/// Score above which keyword-less text reads as joy (below the negation,
/// sadness).
const FALLBACK_SCORE_THRESHOLD: i32 = 2;

/// Score magnitude that saturates intensity at 1.0.
const INTENSITY_SCALE: f32 = 5.0;

/// Owns the lexicon tables and classifies text.
///
/// Construct one per session and share it by reference; classification is
/// pure and keeps no state across calls.
pub struct SentimentAnalyzer {
    valence: FxHashMap<&'static str, i32>,
}

impl SentimentAnalyzer {
    pub fn new() -> Self {
        let valence = lexicon::WORD_VALENCE.iter().copied().collect();
        Self { valence }
    }

    /// Classify a piece of text.
    ///
    /// Tokens are lowercase alphanumeric runs; keyword and valence matches
    /// are whole-word only ("happiness" does not count as "happy").
    pub fn classify(&self, text: &str) -> Sentiment {
        if text.trim().is_empty() {
            return Sentiment::neutral();
        }

        let lowered = text.to_lowercase();
        let mut counts: FxHashMap<&str, u32> = FxHashMap::default();
        let mut score = 0i32;
        for token in lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            if let Some(v) = self.valence.get(token) {
                score += v;
            }
            *counts.entry(token).or_insert(0) += 1;
        }

        // Strict greater-than keeps the earlier emotion on ties.
        let mut tag = EmotionTag::Neutral;
        let mut best = 0u32;
        for &(candidate, keywords) in lexicon::EMOTION_KEYWORDS {
            let count: u32 = keywords
                .iter()
                .filter_map(|k| counts.get(k).copied())
                .sum();
            if count > best {
                best = count;
                tag = candidate;
            }
        }

        if best == 0 {
            tag = if score > FALLBACK_SCORE_THRESHOLD {
                EmotionTag::Joy
            } else if score < -FALLBACK_SCORE_THRESHOLD {
                EmotionTag::Sadness
            } else {
                EmotionTag::Neutral
            };
        }

        let intensity = (score.unsigned_abs() as f32 / INTENSITY_SCALE).min(1.0);
        Sentiment {
            tag,
            score,
            intensity,
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        let analyzer = SentimentAnalyzer::new();
        assert_eq!(analyzer.classify(""), Sentiment::neutral());
        assert_eq!(analyzer.classify("   \t\n"), Sentiment::neutral());
    }

    #[test]
    fn test_intensity_stays_in_range() {
        let analyzer = SentimentAnalyzer::new();
        for text in [
            "a quiet tuesday",
            "triumph triumph triumph triumph triumph",
            "crisis disaster collapse war violence terror",
            "HAPPY!!! happy??? happy...",
        ] {
            let result = analyzer.classify(text);
            assert!(
                (0.0..=1.0).contains(&result.intensity),
                "intensity {} out of range for {:?}",
                result.intensity,
                text
            );
        }
    }

    #[test]
    fn test_keyword_majority_wins() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.classify("happy crowds, happy streets, happy night despite angry protesters");
        assert_eq!(result.tag, EmotionTag::Joy);
    }

    #[test]
    fn test_tied_counts_keep_first_declared_emotion() {
        let analyzer = SentimentAnalyzer::new();
        // One joy keyword, one anger keyword: joy is declared first.
        let result = analyzer.classify("happy about the outrage");
        assert_eq!(result.tag, EmotionTag::Joy);
    }

    #[test]
    fn test_fallback_positive_score_reads_as_joy() {
        let analyzer = SentimentAnalyzer::new();
        // "superb" carries valence 5 and is not an emotion keyword.
        let result = analyzer.classify("a superb quarter for the company");
        assert_eq!(result.tag, EmotionTag::Joy);
        assert_eq!(result.score, 5);
        assert_eq!(result.intensity, 1.0);
    }

    #[test]
    fn test_fallback_negative_score_reads_as_sadness() {
        let analyzer = SentimentAnalyzer::new();
        let result = analyzer.classify("crisis deepens after disaster");
        assert_eq!(result.tag, EmotionTag::Sadness);
        assert_eq!(result.score, -5);
    }

    #[test]
    fn test_fallback_weak_score_stays_neutral() {
        let analyzer = SentimentAnalyzer::new();
        // Valence -2 is inside the neutral band and matches no keyword.
        let result = analyzer.classify("residents unhappy with roadworks");
        assert_eq!(result.tag, EmotionTag::Neutral);
        assert_eq!(result.intensity, 0.4);
    }

    #[test]
    fn test_whole_word_matching_only() {
        let analyzer = SentimentAnalyzer::new();
        // "unhappy" must not count as the joy keyword "happy".
        let result = analyzer.classify("unhappy");
        assert_eq!(result.tag, EmotionTag::Neutral);

        // Case-insensitive whole words still match.
        let result = analyzer.classify("HAPPY Happy hApPy");
        assert_eq!(result.tag, EmotionTag::Joy);
    }

    #[test]
    fn test_deterministic_across_calls() {
        let analyzer = SentimentAnalyzer::new();
        let text = "markets in panic as fear spreads";
        assert_eq!(analyzer.classify(text), analyzer.classify(text));
    }
}
