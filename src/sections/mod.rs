//! Password scoring sections
//!
//! Each section scores one independent aspect of password strength; the
//! evaluator combines them under the length check's cap.

mod classes;
mod composition;
mod entropy;
mod length;
mod pattern;

pub use classes::{is_symbol, CharacterClasses, SYMBOLS};
pub use composition::composition_section;
pub use entropy::{entropy_section, EntropyScore};
pub use length::{length_section, LengthScore};
pub use pattern::{pattern_section, PatternPenalty};
