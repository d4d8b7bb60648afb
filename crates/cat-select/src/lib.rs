//! `cat-select` — item selection strategies.
//!
//! # Crate layout
//!
//! | Module           | Contents                                             |
//! |------------------|------------------------------------------------------|
//! | [`selector`]     | `ItemSelector` trait, `SelectContext`, bootstrap     |
//! | [`sequential`]   | `Sequential` — universe-order selection              |
//! | [`random`]       | `Random` — uniform selection via a scoped `SimRng`   |
//! | [`max_info`]     | `MaxInformation` — Fisher-information ranking        |
//! | [`max_distance`] | `MaxDistance`, `MaxDistanceEnhanced` — network-based |
//!
//! # The selection contract
//!
//! Every strategy obeys the same protocol:
//!
//! 1. First call (`administered = None`): return the deterministic bootstrap
//!    subset — the first five items in universe order for every person — so
//!    estimation has data to start from.
//! 2. Later calls: per person, choose exactly one record from the
//!    unadministered remainder (zero if that person is exhausted) and return
//!    the input set plus the new records.  The input set is never shrunk and
//!    never mutated — the driver owns the lifecycle.
//!
//! The distance-based strategies additionally require the current exposure
//! matrix and fail fast when it is missing.

pub mod max_distance;
pub mod max_info;
pub mod random;
pub mod selector;
pub mod sequential;


pub use max_distance::{MaxDistance, MaxDistanceEnhanced};
pub use max_info::MaxInformation;
pub use random::Random;
pub use selector::{ItemSelector, SelectContext, BOOTSTRAP_ITEMS};
pub use sequential::Sequential;
