//! `cat-core` — foundational types for the `cat_sim` adaptive-testing
//! simulator.
//!
//! This crate is a dependency of every other `cat-*` crate.  It intentionally
//! has no `cat-*` dependencies and minimal external ones (only `rand`,
//! `rustc-hash`, and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module       | Contents                                                |
//! |--------------|---------------------------------------------------------|
//! | [`ids`]      | `PersonId`, `ItemId`                                    |
//! | [`params`]   | `ParamTable` — named per-entity parameter columns       |
//! | [`response`] | `Response`, `ResponseUniverse`, `ResponseSet`           |
//! | [`irt`]      | Logistic response model: probability, information, ll   |
//! | [`rng`]      | `SimRng` — scoped deterministic RNG                     |
//! | [`error`]    | `CatError`, `CatResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.          |

pub mod error;
pub mod ids;
pub mod irt;
pub mod params;
pub mod response;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CatError, CatResult};
pub use ids::{ItemId, PersonId};
pub use params::ParamTable;
pub use response::{Response, ResponseSet, ResponseUniverse};
pub use rng::SimRng;
