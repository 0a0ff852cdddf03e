//! Utility functions for common operations.
//!
//! - **Search matching**: case-folded substring tests used by article search
//! - **Terminal text**: Unicode-aware width calculation and truncation for
//!   the CLI's table output
//!
//! # Examples
//!
//! ```
//! use jurisdata::util::{contains_folded, fold_case, truncate_to_width};
//!
//! let needle = fold_case("Aluguel");
//! assert!(contains_folded("Reajuste do ALUGUEL", &needle));
//!
//! let cell = truncate_to_width("Direito do Consumidor", 12);
//! assert_eq!(cell, "Direito d...");
//! ```

mod text;

pub use text::{contains_folded, display_width, fit_to_width, fold_case, truncate_to_width};
