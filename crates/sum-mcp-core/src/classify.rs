//! Operand-count heuristic for free-text math requests.
//!
//! The classifier only recommends an endpoint. It never talks to one.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::ProtocolVersion;

// Compile-time literal; a failure here is a programmer error.
static NUMBER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("BUG: NUMBER_PATTERN regex is invalid")
});

/// Outcome of scanning a request for numeric literals.
#[derive(Debug, Clone, PartialEq)]
pub enum Classification {
    /// Zero or one number found.
    Insufficient { numbers: Vec<f64> },
    /// Exactly two numbers: the 1.0 endpoint applies.
    TwoOperands([f64; 2]),
    /// Exactly three numbers: the 1.1 endpoint applies.
    ThreeOperands([f64; 3]),
    /// Four or more numbers; no endpoint takes that many.
    Unsupported { numbers: Vec<f64> },
}

impl Classification {
    /// Numbers found, in order of appearance.
    #[must_use]
    pub fn numbers(&self) -> &[f64] {
        match self {
            Self::Insufficient { numbers } | Self::Unsupported { numbers } => numbers.as_slice(),
            Self::TwoOperands(n) => n.as_slice(),
            Self::ThreeOperands(n) => n.as_slice(),
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.numbers().len()
    }

    /// Recommended endpoint and its operands, if any endpoint fits.
    #[must_use]
    pub fn route(&self) -> Option<(ProtocolVersion, &[f64])> {
        match self {
            Self::TwoOperands(n) => Some((ProtocolVersion::V1_0, n.as_slice())),
            Self::ThreeOperands(n) => Some((ProtocolVersion::V1_1, n.as_slice())),
            Self::Insufficient { .. } | Self::Unsupported { .. } => None,
        }
    }
}

/// Extract every signed/decimal literal from `text`, left to right.
#[must_use]
pub fn extract_numbers(text: &str) -> Vec<f64> {
    NUMBER_PATTERN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}

/// Classify `text` by how many numbers it contains.
#[must_use]
pub fn classify(text: &str) -> Classification {
    let numbers = extract_numbers(text);
    match numbers.len() {
        0 | 1 => Classification::Insufficient { numbers },
        2 => Classification::TwoOperands([numbers[0], numbers[1]]),
        3 => Classification::ThreeOperands([numbers[0], numbers[1], numbers[2]]),
        _ => Classification::Unsupported { numbers },
    }
}
