//! Utility functions shared across the pipeline.
//!
//! This module provides:
//! - CSS selector parsing utilities
//! - Character-budget text truncation

mod selector;
mod text;

pub use selector::{parse_selector_unsafe, parse_selector_with_fallback};
pub use text::truncate_chars;

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
