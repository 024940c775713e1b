// src/models.rs
use serde::{Deserialize, Serialize};

/// Which generation strategy is active. Exactly one mode applies per call;
/// the selection itself is UI state and arrives here as a plain value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    Random,
    Memorable,
    Pin,
    Pattern,
}

/// A generation request: the mode tag plus the options that mode needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum GenerationRequest {
    Random(RandomOptions),
    Memorable(MemorableOptions),
    Pin(PinOptions),
    Pattern(PatternOptions),
}

impl GenerationRequest {
    pub fn mode(&self) -> GenerationMode {
        match self {
            GenerationRequest::Random(_) => GenerationMode::Random,
            GenerationRequest::Memorable(_) => GenerationMode::Memorable,
            GenerationRequest::Pin(_) => GenerationMode::Pin,
            GenerationRequest::Pattern(_) => GenerationMode::Pattern,
        }
    }
}

/// Options for fully random generation.
///
/// A non-empty `custom_chars` replaces the class-derived pool entirely;
/// the class flags then only steer the required-representative step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomOptions {
    pub length: usize,
    pub include_uppercase: bool,
    pub include_lowercase: bool,
    pub include_numbers: bool,
    pub include_symbols: bool,
    pub custom_chars: String,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    pub avoid_duplicates: bool,
    pub require_every_type: bool,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            length: 16,
            include_uppercase: true,
            include_lowercase: true,
            include_numbers: true,
            include_symbols: true,
            custom_chars: String::new(),
            exclude_similar: false,
            exclude_ambiguous: false,
            avoid_duplicates: false,
            require_every_type: false,
        }
    }
}

/// Options for word-based generation. Length is emergent from the word
/// count; no truncation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemorableOptions {
    pub word_count: usize,
    pub separator: String,
    pub capitalize: bool,
    pub append_number: bool,
    pub append_symbol: bool,
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            word_count: 3,
            separator: "-".to_string(),
            capitalize: true,
            append_number: false,
            append_symbol: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PinOptions {
    pub length: usize,
}

impl Default for PinOptions {
    fn default() -> Self {
        Self { length: 4 }
    }
}

/// Template for pattern generation: `A` uppercase, `x` lowercase,
/// `n` digit, `S` symbol, `@` any of the four classes, anything else
/// is copied through as a literal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatternOptions {
    pub template: String,
}

impl Default for PatternOptions {
    fn default() -> Self {
        Self {
            template: "Axx-nnnn".to_string(),
        }
    }
}

/// Output of a successful generation call. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    pub strength: StrengthAssessment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthAssessment {
    /// Raw heuristic score. Not clamped; a pathological input may push it
    /// negative, which still maps to `Weak`.
    pub score: i32,
    pub label: StrengthLabel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthLabel {
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            StrengthLabel::VeryStrong
        } else if score >= 60 {
            StrengthLabel::Strong
        } else if score >= 40 {
            StrengthLabel::Medium
        } else {
            StrengthLabel::Weak
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
            StrengthLabel::VeryStrong => write!(f, "Very strong"),
        }
    }
}
