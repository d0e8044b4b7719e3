// prelude.rs - Convenient re-exports for the idiomatic API.
//
//! # Prelude
//!
//! ```
//! use ferrune::prelude::*;
//!
//! assert_eq!(nfc("A\u{030A}").unwrap(), "Å");
//! let clusters: Vec<&str> = graphemes("e\u{0301}!").collect();
//! assert_eq!(clusters, ["e\u{0301}", "!"]);
//! ```

pub use crate::api::{graphemes, nfc, nfd, nfkc, nfkc_casefold, nfkd, Graphemes};
pub use crate::error::UnicodeError;
pub use crate::types::{unicode_version, version, Category};
