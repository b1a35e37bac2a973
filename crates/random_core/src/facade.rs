//! Stateless free functions over the calling thread's shared generator.
//!
//! Each function borrows the thread's [`GeneratorHandle`], applies the
//! process-wide [`FacadeConfig`], and delegates to the matching
//! [`Randomizer`] method. No function holds state of its own.
//!
//! # Thread Safety
//!
//! Each thread has its own generator, created lazily on first use and kept
//! until the thread exits. Calls from different threads never touch the same
//! generator, so no synchronisation is needed.
//!
//! # Example
//!
//! ```rust
//! use random_core::facade;
//!
//! let roll: u32 = facade::number(1, 20).unwrap();
//! assert!((1..=20).contains(&roll));
//!
//! if facade::percentage(25) {
//!     // one time in four
//! }
//!
//! let id = facade::uuid128();
//! assert_eq!(id.to_string().len(), 32);
//! ```

use std::sync::OnceLock;
use tracing::debug;

use crate::config::{ConfigError, FacadeConfig};
use crate::error::RandomError;
use crate::generator::GeneratorHandle;
use crate::id::Id128;
use crate::sampler::Randomizer;
use crate::scalar::Scalar;

static CONFIG: OnceLock<FacadeConfig> = OnceLock::new();

/// Installs the process-wide configuration.
///
/// May be called once; facade calls made before it use the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Validation`] for an invalid configuration and
/// [`ConfigError::AlreadyConfigured`] on a second call.
pub fn configure(config: FacadeConfig) -> Result<(), ConfigError> {
    config.validate()?;
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyConfigured)?;
    debug!(?config, "installed process-wide sampling configuration");
    Ok(())
}

/// Returns the process-wide configuration, or the defaults if none was installed.
pub fn config() -> FacadeConfig {
    CONFIG.get().copied().unwrap_or_default()
}

fn with_randomizer<F, V>(f: F) -> V
where
    F: FnOnce(&mut Randomizer<GeneratorHandle>) -> V,
{
    let mut randomizer = Randomizer::from_validated(generator_handle(), config());
    f(&mut randomizer)
}

/// Draws uniformly from `[min, max]`. See [`Randomizer::number`].
pub fn number<T: Scalar>(min: T, max: T) -> Result<T, RandomError> {
    with_randomizer(|r| r.number(min, max))
}

/// Draws once from a normal distribution. See [`Randomizer::weighted_number`].
pub fn weighted_number<T: Scalar>(mean: T, std_dev: f64) -> Result<T, RandomError> {
    with_randomizer(|r| r.weighted_number(mean, std_dev))
}

/// Rejection-samples a normal draw into `[min, max]`.
/// See [`Randomizer::weighted_number_in`].
pub fn weighted_number_in<T: Scalar>(
    min: T,
    max: T,
    mean: f64,
    std_dev: f64,
) -> Result<T, RandomError> {
    with_randomizer(|r| r.weighted_number_in(min, max, mean, std_dev))
}

/// Rolls against a percentage. See [`Randomizer::percentage`].
pub fn percentage<T: Scalar>(x: T) -> bool {
    with_randomizer(|r| r.percentage(x))
}

/// Draws a 64-bit identifier.
pub fn uuid() -> u64 {
    with_randomizer(|r| r.uuid())
}

/// Draws a 128-bit identifier.
pub fn uuid128() -> Id128 {
    with_randomizer(|r| r.uuid128())
}

/// Draws a uniform position into `sequence`. See [`Randomizer::index`].
pub fn index<T>(sequence: &[T]) -> Result<usize, RandomError> {
    with_randomizer(|r| r.index(sequence))
}

/// Draws a normal-weighted position into `sequence`.
/// See [`Randomizer::weighted_index`].
pub fn weighted_index<T>(sequence: &[T], mean: f64, std_dev: f64) -> Result<usize, RandomError> {
    with_randomizer(|r| r.weighted_index(sequence, mean, std_dev))
}

/// Picks one value from a list of index values. See [`Randomizer::pick_from_list`].
pub fn pick_from_list<T: Copy>(indices: &[T]) -> Result<T, RandomError> {
    with_randomizer(|r| r.pick_from_list(indices))
}

/// Shuffles `slice` in place with the shared generator.
pub fn shuffle<T>(slice: &mut [T]) {
    with_randomizer(|r| r.shuffle(slice))
}

/// Returns a shared handle to the calling thread's generator.
///
/// The handle shares the generator's state: draws through it advance the
/// same sequence the facade functions use.
pub fn generator_handle() -> GeneratorHandle {
    GeneratorHandle::current()
}
