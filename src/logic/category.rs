//! Presentation categories derived from response metadata.

/// Band a safety score falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SafetyCategory {
    /// Score of 90 or above.
    High,
    /// Score from 70 up to (not including) 90.
    Moderate,
    /// Anything below 70, including non-numeric scores.
    Low,
}

impl SafetyCategory {
    /// Stable identifier used by renderers and in the JSON/plain CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high-safety",
            Self::Moderate => "moderate-safety",
            Self::Low => "low-safety",
        }
    }
}

/// Band a confidence label falls into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfidenceCategory {
    /// Exactly `"High"`.
    High,
    /// Exactly `"Medium"`.
    Medium,
    /// Any other label.
    Low,
}

impl ConfidenceCategory {
    /// Stable identifier used by renderers and in the JSON/plain CLI output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high-confidence",
            Self::Medium => "medium-confidence",
            Self::Low => "low-confidence",
        }
    }
}

/// What: Map a safety score onto its presentation band.
///
/// Inputs:
/// - `score`: Service safety score, nominally 0–100.
///
/// Output:
/// - `High` for `>= 90`, `Moderate` for `>= 70`, `Low` otherwise.
///
/// Details:
/// - Lower bounds are inclusive, so 90 and 70 land in the higher band.
/// - `NaN` compares false against both bounds and falls through to `Low`.
#[must_use]
pub fn safety_category(score: f64) -> SafetyCategory {
    if score >= 90.0 {
        SafetyCategory::High
    } else if score >= 70.0 {
        SafetyCategory::Moderate
    } else {
        SafetyCategory::Low
    }
}

/// What: Map a confidence label onto its presentation band.
///
/// Inputs:
/// - `confidence`: Label reported by the service.
///
/// Output:
/// - `High`/`Medium` on exact (case-sensitive) match, `Low` for everything else.
#[must_use]
pub fn confidence_category(confidence: &str) -> ConfidenceCategory {
    match confidence {
        "High" => ConfidenceCategory::High,
        "Medium" => ConfidenceCategory::Medium,
        _ => ConfidenceCategory::Low,
    }
}
