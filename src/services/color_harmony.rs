use rand::Rng;

/// Score returned when either side has no colors: "no information" rather than "clash"
pub const NEUTRAL_DEFAULT_SCORE: f64 = 2.5;

const EXACT_MATCH: f64 = 5.0;
const COMPLEMENTARY: f64 = 4.0;
const NEUTRAL: f64 = 3.0;
const ANALOGOUS: f64 = 2.0;

const NEUTRAL_COLORS: [&str; 4] = ["black", "white", "gray", "silver"];

const COMPLEMENTARY_PAIRS: [(&str, &str); 3] =
    [("red", "green"), ("blue", "yellow"), ("magenta", "cyan")];

/// Named colors understood by the scorer, with their RGB values
///
/// Covers the demo catalog palette so hex codes can be canonicalised to names.
const NAMED_COLORS: [(&str, [u8; 3]); 19] = [
    ("black", [0x00, 0x00, 0x00]),
    ("white", [0xff, 0xff, 0xff]),
    ("gray", [0x80, 0x80, 0x80]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("red", [0xff, 0x00, 0x00]),
    ("green", [0x00, 0xff, 0x00]),
    ("blue", [0x00, 0x00, 0xff]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("magenta", [0xff, 0x00, 0xff]),
    ("cyan", [0x00, 0xff, 0xff]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("olive", [0x80, 0x80, 0x00]),
    ("darkgreen", [0x00, 0x80, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("teal", [0x00, 0x80, 0x80]),
    ("navy", [0x00, 0x00, 0x80]),
    ("orange", [0xff, 0xa5, 0x00]),
    ("brown", [0xa5, 0x2a, 0x2a]),
    ("pink", [0xff, 0xc0, 0xcb]),
];

/// Spellings folded onto a canonical name
const ALIASES: [(&str, &str); 4] = [
    ("grey", "gray"),
    ("fuchsia", "magenta"),
    ("aqua", "cyan"),
    ("lime", "green"),
];

/// A color value normalised for comparison
#[derive(Debug, Clone, PartialEq)]
struct Swatch {
    /// Lowercased name, or the lowercased hex code when it has no name
    key: String,
    rgb: Option<[u8; 3]>,
}

impl Swatch {
    fn parse(raw: &str) -> Self {
        let lowered = raw.trim().to_lowercase();
        let lowered = ALIASES
            .iter()
            .find(|(alias, _)| *alias == lowered)
            .map(|(_, canonical)| canonical.to_string())
            .unwrap_or(lowered);

        if let Some(rgb) = parse_hex(&lowered) {
            let key = NAMED_COLORS
                .iter()
                .find(|(_, named)| *named == rgb)
                .map(|(name, _)| name.to_string())
                .unwrap_or(lowered);
            return Self { key, rgb: Some(rgb) };
        }

        let rgb = NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == lowered)
            .map(|(_, rgb)| *rgb);
        Self { key: lowered, rgb }
    }

    fn is_neutral(&self) -> bool {
        NEUTRAL_COLORS.contains(&self.key.as_str())
    }

    /// Hue in degrees, or `None` for unknown or near-achromatic colors
    fn hue(&self) -> Option<f64> {
        let [r, g, b] = self.rgb?.map(|c| c as f64 / 255.0);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        if max == 0.0 || delta / max < 0.15 {
            return None;
        }

        let hue = if max == r {
            60.0 * (((g - b) / delta).rem_euclid(6.0))
        } else if max == g {
            60.0 * ((b - r) / delta + 2.0)
        } else {
            60.0 * ((r - g) / delta + 4.0)
        };
        Some(hue)
    }
}

fn parse_hex(value: &str) -> Option<[u8; 3]> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some([channel(0)?, channel(2)?, channel(4)?])
}

fn is_complementary(a: &Swatch, b: &Swatch) -> bool {
    COMPLEMENTARY_PAIRS.iter().any(|(x, y)| {
        (a.key == *x && b.key == *y) || (a.key == *y && b.key == *x)
    })
}

/// Scores how well two sets of colors go together
#[derive(Debug, Clone)]
pub struct ColorHarmonyScorer {
    /// Half-width of the uniform tie-break jitter added to every score
    jitter: f64,
    /// Maximum hue distance, in degrees, for two colors to count as analogous
    analogous_window: f64,
}

impl Default for ColorHarmonyScorer {
    fn default() -> Self {
        Self {
            jitter: 0.1,
            analogous_window: 30.0,
        }
    }
}

impl ColorHarmonyScorer {
    pub fn new(jitter: f64, analogous_window: f64) -> Self {
        Self {
            jitter: jitter.max(0.0),
            analogous_window,
        }
    }

    /// Scorer without tie-break jitter, for exact comparisons
    pub fn deterministic() -> Self {
        Self {
            jitter: 0.0,
            ..Self::default()
        }
    }

    /// Average pairwise compatibility of `a` against `b`, plus jitter
    ///
    /// Always non-negative. Returns [`NEUTRAL_DEFAULT_SCORE`] when either side is empty.
    pub fn score<R, S>(&self, a: &[S], b: &[S], rng: &mut R) -> f64
    where
        R: Rng + ?Sized,
        S: AsRef<str>,
    {
        if a.is_empty() || b.is_empty() {
            return NEUTRAL_DEFAULT_SCORE;
        }

        let left: Vec<Swatch> = a.iter().map(|c| Swatch::parse(c.as_ref())).collect();
        let right: Vec<Swatch> = b.iter().map(|c| Swatch::parse(c.as_ref())).collect();

        let total: f64 = left
            .iter()
            .flat_map(|x| right.iter().map(move |y| self.pair_score(x, y)))
            .sum();
        let average = total / (left.len() * right.len()) as f64;

        let jitter = if self.jitter > 0.0 {
            rng.gen_range(-self.jitter..=self.jitter)
        } else {
            0.0
        };
        (average + jitter).max(0.0)
    }

    fn pair_score(&self, a: &Swatch, b: &Swatch) -> f64 {
        if a.key == b.key {
            EXACT_MATCH
        } else if a.is_neutral() || b.is_neutral() {
            NEUTRAL
        } else if is_complementary(a, b) {
            COMPLEMENTARY
        } else if self.is_analogous(a, b) {
            ANALOGOUS
        } else {
            0.0
        }
    }

    fn is_analogous(&self, a: &Swatch, b: &Swatch) -> bool {
        match (a.hue(), b.hue()) {
            (Some(x), Some(y)) => {
                let distance = (x - y).abs();
                distance.min(360.0 - distance) <= self.analogous_window
            }
            _ => false,
        }
    }
}

/// Whether any of `colors` is black, white, gray or silver
pub fn has_neutral_color<S: AsRef<str>>(colors: &[S]) -> bool {
    colors.iter().any(|c| Swatch::parse(c.as_ref()).is_neutral())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn exact(a: &[&str], b: &[&str]) -> f64 {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        ColorHarmonyScorer::deterministic().score(a, b, &mut rng)
    }

    #[test]
    fn test_exact_match_is_case_insensitive() {
        assert_eq!(exact(&["Navy"], &["navy"]), 5.0);
        assert_eq!(exact(&["#FF0000"], &["red"]), 5.0);
    }

    #[test]
    fn test_neutral_pairs() {
        assert_eq!(exact(&["black"], &["orange"]), 3.0);
        assert_eq!(exact(&["teal"], &["#C0C0C0"]), 3.0);
        assert_eq!(exact(&["grey"], &["purple"]), 3.0);
    }

    #[test]
    fn test_complementary_pairs() {
        assert_eq!(exact(&["red"], &["green"]), 4.0);
        assert_eq!(exact(&["#FFFF00"], &["#0000FF"]), 4.0);
        assert_eq!(exact(&["cyan"], &["magenta"]), 4.0);
    }

    #[test]
    fn test_analogous_by_hue() {
        // orange (~39°) sits next to yellow (60°)
        assert_eq!(exact(&["orange"], &["yellow"]), 2.0);
        // red (0°) and blue (240°) are far apart
        assert_eq!(exact(&["red"], &["blue"]), 0.0);
        // unnamed hex values still get a hue
        assert_eq!(exact(&["#ff2000"], &["#ff0000"]), 2.0);
    }

    #[test]
    fn test_score_is_averaged() {
        // red-red 5, red-blue 0, black-red 3, black-blue 3 => 11 / 4
        assert_eq!(exact(&["red", "black"], &["red", "blue"]), 2.75);
    }

    #[test]
    fn test_empty_side_returns_neutral_default() {
        let empty: [&str; 0] = [];
        assert_eq!(exact(&empty, &["red"]), NEUTRAL_DEFAULT_SCORE);
        assert_eq!(exact(&["red"], &empty), NEUTRAL_DEFAULT_SCORE);
    }

    #[test]
    fn test_identical_sets_beat_disjoint_sets() {
        let scorer = ColorHarmonyScorer::default();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..50 {
            let same = scorer.score(&["red", "blue"], &["red", "blue"], &mut rng);
            let disjoint = scorer.score(&["red", "purple"], &["teal", "olive"], &mut rng);
            assert!(same >= disjoint);
        }
    }

    #[test]
    fn test_jitter_stays_in_bounds() {
        let scorer = ColorHarmonyScorer::default();
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..100 {
            let s = scorer.score(&["red"], &["red"], &mut rng);
            assert!((4.9..=5.1).contains(&s));
            let zero = scorer.score(&["red"], &["blue"], &mut rng);
            assert!((0.0..=0.1).contains(&zero));
        }
    }

    #[test]
    fn test_has_neutral_color() {
        assert!(has_neutral_color(&["red", "#ffffff"]));
        assert!(!has_neutral_color(&["red", "navy"]));
    }
}
