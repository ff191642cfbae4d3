//! # Tailorfit
//!
//! Resume tailoring toolkit. Re-exports the analysis engine from
//! [`tailorfit_core`] so applications depend on a single crate.
//!
//! ```rust
//! use tailorfit::Analyzer;
//!
//! let analyzer = Analyzer::default().unwrap();
//! let suggestions = analyzer.get_optimization_suggestions(
//!     "I know Python.",
//!     "Requirements: Python, SQL",
//! );
//! assert!(suggestions[0].contains("sql"));
//! ```

pub use tailorfit_core::*;
