//! # Sampling Operations
//!
//! [`Randomizer`] pairs a bit generator with a [`FacadeConfig`](crate::config::FacadeConfig)
//! and implements every sampling operation on top of it. Each call builds a
//! fresh distribution adapter (`rand::distributions::Uniform` or
//! `rand_distr::Normal`), draws from the generator, and discards the adapter.
//!
//! The free functions in [`facade`](crate::facade) run these same methods
//! against the calling thread's shared generator. Use a `Randomizer` directly
//! when the generator should be passed by context, for example a seeded one
//! in tests or one owned by a worker thread.
//!
//! ## Rejection Sampling
//!
//! The ranged normal draws never clamp: clamping piles probability mass onto
//! the bounds. They redraw until a value lands in range instead, up to the
//! configured [`RejectionLimit`](crate::config::RejectionLimit).
//!
//! ## Usage Example
//!
//! ```rust
//! use random_core::Randomizer;
//!
//! let mut randomizer = Randomizer::from_seed(12345);
//!
//! let roll: u8 = randomizer.number(1, 6).unwrap();
//! assert!((1..=6).contains(&roll));
//!
//! let height: f64 = randomizer.weighted_number_in(150.0, 200.0, 175.0, 10.0).unwrap();
//! assert!((150.0..=200.0).contains(&height));
//!
//! let cards = ["ace", "king", "queen"];
//! let position = randomizer.index(&cards).unwrap();
//! assert!(position < cards.len());
//! ```

mod randomizer;

pub use randomizer::{Randomizer, DEFAULT_STD_DEV};
