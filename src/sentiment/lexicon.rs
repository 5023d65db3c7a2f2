//! Fixed word lists backing the classifier.
//!
//! The per-emotion keyword lists decide the dominant emotion; the valence
//! table is an AFINN-style subset tuned for newswire vocabulary and drives
//! the signed base score. Both are matched case-insensitively against whole
//! word tokens only.

use super::EmotionTag;

/// Keywords per emotion, in tie-break order: when two emotions count the
/// same number of matches, the earlier entry here wins.
pub(crate) const EMOTION_KEYWORDS: &[(EmotionTag, &[&str])] = &[
    (
        EmotionTag::Joy,
        &[
            "happy",
            "joy",
            "celebration",
            "delight",
            "triumph",
            "pleased",
            "glad",
            "exciting",
            "enthusiastic",
            "optimistic",
        ],
    ),
    (
        EmotionTag::Anger,
        &[
            "angry",
            "fury",
            "outrage",
            "rage",
            "wrath",
            "indignation",
            "irritation",
            "annoyance",
            "frustrated",
        ],
    ),
    (
        EmotionTag::Sadness,
        &[
            "sad",
            "grief",
            "sorrow",
            "depression",
            "regret",
            "despair",
            "melancholy",
            "gloomy",
            "heartbreak",
        ],
    ),
    (
        EmotionTag::Fear,
        &[
            "fear",
            "terror",
            "horror",
            "dread",
            "anxiety",
            "panic",
            "afraid",
            "frightened",
            "nervous",
            "worried",
        ],
    ),
    (
        EmotionTag::Surprise,
        &[
            "surprise",
            "shock",
            "amazement",
            "astonish",
            "unexpected",
            "startled",
            "sudden",
            "remarkable",
        ],
    ),
    (
        EmotionTag::Disgust,
        &[
            "disgust",
            "revulsion",
            "repulsion",
            "distaste",
            "aversion",
            "repugnant",
            "offensive",
            "repellent",
        ],
    ),
];

/// Signed valence per word. Positive words lift the base score, negative
/// words sink it; everything else scores zero.
pub(crate) const WORD_VALENCE: &[(&str, i32)] = &[
    ("acclaimed", 2),
    ("afraid", -2),
    ("agreement", 1),
    ("angry", -3),
    ("annoyance", -2),
    ("anxiety", -2),
    ("attack", -2),
    ("breakthrough", 3),
    ("catastrophe", -2),
    ("celebration", 3),
    ("charged", -3),
    ("collapse", -2),
    ("conflict", -2),
    ("corruption", -3),
    ("crisis", -3),
    ("dead", -3),
    ("death", -2),
    ("delight", 3),
    ("depression", -2),
    ("despair", -3),
    ("dies", -3),
    ("disaster", -2),
    ("disgust", -3),
    ("distaste", -2),
    ("dread", -2),
    ("enthusiastic", 3),
    ("excellent", 3),
    ("exciting", 3),
    ("failed", -2),
    ("failure", -2),
    ("fear", -2),
    ("fire", -2),
    ("fraud", -4),
    ("frightened", -2),
    ("frustrated", -2),
    ("fury", -3),
    ("gains", 2),
    ("glad", 3),
    ("gloomy", -2),
    ("good", 3),
    ("great", 3),
    ("grief", -2),
    ("growth", 2),
    ("guilty", -3),
    ("happy", 3),
    ("heartbreak", -3),
    ("hope", 2),
    ("hopeful", 2),
    ("horror", -3),
    ("indignation", -2),
    ("joy", 3),
    ("killed", -3),
    ("landslide", -1),
    ("lawsuit", -2),
    ("layoffs", -2),
    ("loss", -3),
    ("losses", -3),
    ("melancholy", -2),
    ("nervous", -2),
    ("offensive", -2),
    ("optimistic", 2),
    ("outrage", -3),
    ("outstanding", 5),
    ("panic", -3),
    ("peace", 2),
    ("pleased", 3),
    ("praised", 3),
    ("protest", -2),
    ("rage", -2),
    ("recession", -2),
    ("recovery", 2),
    ("regret", -2),
    ("remarkable", 2),
    ("repugnant", -3),
    ("revulsion", -2),
    ("sad", -2),
    ("scandal", -3),
    ("shock", -2),
    ("sorrow", -2),
    ("strike", -1),
    ("strong", 2),
    ("success", 2),
    ("successful", 3),
    ("superb", 5),
    ("surprise", 1),
    ("terror", -3),
    ("threat", -2),
    ("thriving", 3),
    ("triumph", 4),
    ("unhappy", -2),
    ("violence", -3),
    ("war", -2),
    ("warning", -3),
    ("win", 4),
    ("wins", 4),
    ("won", 3),
    ("wonderful", 4),
    ("worried", -3),
    ("wrath", -3),
];
