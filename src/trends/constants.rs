/// Lowest rating a user can give a recommendation.
pub const MIN_RATING: f64 = 1.0;

/// Highest rating; also the denominator for distribution bar fractions.
pub const MAX_RATING: f64 = 5.0;

/// Filter sentinel meaning "no filtering on this dimension".
pub const ALL_SENTINEL: &str = "all";

// ─────────────────────────────────────────────────────────────────────────────
// Recommendation quality bands
// ─────────────────────────────────────────────────────────────────────────────

/// Overall average at or above which recommendations count as effective.
pub const HIGH_QUALITY_THRESHOLD: f64 = 4.0;

/// Overall average at or above which recommendations count as adequate.
pub const MODERATE_QUALITY_THRESHOLD: f64 = 3.0;

// ─────────────────────────────────────────────────────────────────────────────
// Display
// ─────────────────────────────────────────────────────────────────────────────

/// Width in characters of a full (5/5) rating bar.
pub const BAR_WIDTH: usize = 30;

/// Minimum Jaro-Winkler similarity for suggesting a known label.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;
