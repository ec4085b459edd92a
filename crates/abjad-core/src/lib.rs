//! Abjad calculation engine.
//!
//! Letter values under the Maghribi and Mashriqi conventions, totals,
//! digital-root and 1-indexed modulo reductions, classification into
//! elements, buruj, planets and destiny tiers, single-name profiles and
//! two-person compatibility scoring.
//!
//! ```
//! use abjad_core::{mod_index, total};
//! use abjad_model::{Convention, Modulus};
//!
//! let n = total("محمد", Convention::Maghribi);
//! assert_eq!(n, 92);
//! assert_eq!(mod_index(n, Modulus::Elements), 4);
//! ```

pub mod classify;
pub mod compatibility;
pub mod profile;
pub mod reduce;
pub mod resolve;
pub mod tables;
pub mod total;

pub use classify::{classify_buruj, classify_element, classify_planet, destiny_tier};
pub use compatibility::{analyze_compatibility, element_affinity};
pub use profile::{analyze_name, analyze_name_with};
pub use reduce::{digital_root, mod_index};
pub use resolve::{ResolvedName, resolve_name};
pub use tables::{LetterValueTable, letter_element};
pub use total::{letter_breakdown, total, total_with};
