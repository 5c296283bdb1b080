// ============================================================
// Layer 3 - Hard-Sample Label
// ============================================================
// Each annotation file receives exactly one label:
//
//   0  NotHard       nothing unusual in the layout
//   1  LargeSpacing  some line has widely spaced characters
//   2  Juxtaposed    some line sits abreast another line
//
// When a file triggers both predicates, LargeSpacing wins.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HardType {
    NotHard,
    LargeSpacing,
    Juxtaposed,
}

impl HardType {
    /// Numeric code used in logs: 0, 1 or 2.
    pub fn code(self) -> u8 {
        match self {
            HardType::NotHard      => 0,
            HardType::LargeSpacing => 1,
            HardType::Juxtaposed   => 2,
        }
    }

    pub fn is_hard(self) -> bool {
        self != HardType::NotHard
    }
}

impl fmt::Display for HardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HardType::NotHard      => write!(f, "not-hard"),
            HardType::LargeSpacing => write!(f, "large-spacing"),
            HardType::Juxtaposed   => write!(f, "juxtaposed"),
        }
    }
}
