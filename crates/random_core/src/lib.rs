//! # Random Core
//!
//! Pseudo-random value helpers layered over a single bit generator:
//! uniform and normal-distributed numbers, percentage rolls, uniform and
//! normal-weighted sequence indices, uniform picks from a list of index
//! values, and 64-/128-bit identifiers.
//!
//! ## Design
//!
//! Every operation pairs a shared bit generator with a distribution adapter
//! built for that one call:
//!
//! - [`FacadeRng`]: the bit generator (`rand::rngs::StdRng`), seeded from the
//!   wall clock or from an explicit seed
//! - [`Randomizer`]: a generator plus a [`FacadeConfig`], implementing every
//!   operation; pass one by context for deterministic or per-worker draws
//! - [`facade`]: free functions running the same operations against the
//!   calling thread's generator
//!
//! Inputs are validated before anything is drawn. Invalid bounds, invalid
//! normal parameters and empty sequences are reported as [`RandomError`];
//! rejection-sampling loops give up with [`RandomError::SamplingTimeout`]
//! once the configured budget is spent.
//!
//! Not cryptographically secure. The facade is seeded from the clock, so its
//! sequences are not reproducible across runs; use [`Randomizer::from_seed`]
//! when they must be.
//!
//! ## Usage Example
//!
//! ```rust
//! use random_core::{index, number, percentage, pick_from_list, uuid128};
//!
//! let damage: u32 = number(1, 12).unwrap();
//! assert!((1..=12).contains(&damage));
//!
//! let critical = percentage(5);
//!
//! let loot = ["sword", "shield", "potion"];
//! let chosen = loot[index(&loot).unwrap()];
//!
//! let spawn_points = [3usize, 7, 11];
//! let spawn = pick_from_list(&spawn_points).unwrap();
//! assert!(spawn_points.contains(&spawn));
//!
//! let entity = uuid128();
//! # let _ = (critical, chosen, entity);
//! ```

pub mod config;
pub mod error;
pub mod facade;
pub mod generator;
pub mod id;
pub mod sampler;
pub mod scalar;

pub use config::{ConfigError, FacadeConfig, PercentageMode, RejectionLimit};
pub use error::RandomError;
pub use facade::{
    generator_handle, index, number, percentage, pick_from_list, shuffle, uuid, uuid128,
    weighted_index, weighted_number, weighted_number_in,
};
pub use generator::{with_generator, FacadeRng, GeneratorHandle};
pub use id::Id128;
pub use sampler::{Randomizer, DEFAULT_STD_DEV};
pub use scalar::Scalar;
