//! Generator-plus-configuration context implementing every draw.

use num_traits::AsPrimitive;
use rand::distributions::{Distribution, Uniform};
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use rand_distr::Normal;
use tracing::warn;

use crate::config::{ConfigError, FacadeConfig, PercentageMode, RejectionLimit};
use crate::error::RandomError;
use crate::generator::FacadeRng;
use crate::id::Id128;
use crate::scalar::Scalar;

/// Suggested spread for normal-distributed draws.
///
/// Nothing applies it implicitly: every normal-distributed operation takes
/// `std_dev` explicitly. Pass this constant when no better spread is known.
pub const DEFAULT_STD_DEV: f64 = 10.0;

/// Random value generator over an explicitly owned bit generator.
///
/// # Type Parameters
///
/// * `R` - Bit generator; [`FacadeRng`] by default, or a
///   [`GeneratorHandle`](crate::GeneratorHandle) to share the thread's generator
///
/// # Examples
///
/// ```rust
/// use random_core::Randomizer;
///
/// let mut a = Randomizer::from_seed(42);
/// let mut b = Randomizer::from_seed(42);
///
/// // Same seed produces identical draws
/// assert_eq!(a.uuid(), b.uuid());
/// assert_eq!(a.number(0, 100).unwrap(), b.number(0, 100).unwrap());
/// ```
#[derive(Clone, Debug)]
pub struct Randomizer<R = FacadeRng> {
    rng: R,
    config: FacadeConfig,
}

impl Randomizer<FacadeRng> {
    /// Creates a randomizer over a seeded generator with default configuration.
    pub fn from_seed(seed: u64) -> Self {
        Self::from_validated(FacadeRng::from_seed(seed), FacadeConfig::default())
    }

    /// Creates a randomizer over a time-seeded generator with default configuration.
    pub fn from_time() -> Self {
        Self::from_validated(FacadeRng::from_time(), FacadeConfig::default())
    }
}

impl<R: RngCore> Randomizer<R> {
    /// Creates a randomizer from a generator and a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `config` fails
    /// [`FacadeConfig::validate`].
    pub fn new(rng: R, config: FacadeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(rng, config))
    }

    /// Replaces the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Validation`] if `config` fails
    /// [`FacadeConfig::validate`].
    pub fn with_config(mut self, config: FacadeConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Pairs a generator with a configuration the caller has already validated.
    #[inline]
    pub(crate) fn from_validated(rng: R, config: FacadeConfig) -> Self {
        debug_assert!(config.validate().is_ok());
        Self { rng, config }
    }

    /// Returns the active configuration.
    #[inline]
    pub fn config(&self) -> &FacadeConfig {
        &self.config
    }

    /// Returns the underlying generator, e.g. for `rand` algorithms.
    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consumes the randomizer and returns its generator.
    #[inline]
    pub fn into_inner(self) -> R {
        self.rng
    }

    /// Draws uniformly from the inclusive range `[min, max]`.
    ///
    /// Integer types use an integer-uniform adapter, floating-point types a
    /// real-uniform adapter.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidRange`] if `min > max`, if either bound is
    /// NaN or infinite, or if `max - min` overflows a floating-point type.
    pub fn number<T: Scalar>(&mut self, min: T, max: T) -> Result<T, RandomError> {
        if !T::is_valid_range(min, max) {
            return Err(RandomError::invalid_range(min, max));
        }
        Ok(Uniform::new_inclusive(min, max).sample(&mut self.rng))
    }

    /// Draws once from `Normal(mean, std_dev)` and converts to `T`.
    ///
    /// Integer types truncate toward zero and saturate at their bounds.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::InvalidParameter`] if `std_dev` is negative or
    /// either parameter is not finite.
    pub fn weighted_number<T: Scalar>(
        &mut self,
        mean: T,
        std_dev: f64,
    ) -> Result<T, RandomError> {
        let normal = normal_adapter(mean.as_(), std_dev)?;
        Ok(T::from_draw(normal.sample(&mut self.rng)))
    }

    /// Draws from `Normal(mean, std_dev)` until the value lies in `[min, max]`.
    ///
    /// Out-of-range draws are rejected, never clamped, so the result follows
    /// the normal distribution conditioned on the interval. For integer types
    /// the draw is truncated toward zero before the range check.
    ///
    /// The caller must pick bounds that carry non-negligible probability
    /// mass; the expected number of draws grows quickly as `[min, max]` moves
    /// away from `mean` in units of `std_dev`.
    ///
    /// # Errors
    ///
    /// - [`RandomError::InvalidRange`] for bounds rejected by [`Self::number`]
    /// - [`RandomError::InvalidParameter`] for invalid normal parameters
    /// - [`RandomError::SamplingTimeout`] once the rejection budget is spent
    pub fn weighted_number_in<T: Scalar>(
        &mut self,
        min: T,
        max: T,
        mean: f64,
        std_dev: f64,
    ) -> Result<T, RandomError> {
        if !T::is_valid_range(min, max) {
            return Err(RandomError::invalid_range(min, max));
        }
        let normal = normal_adapter(mean, std_dev)?;
        let (lower, upper): (f64, f64) = (min.as_(), max.as_());

        self.reject_until(|rng| {
            let draw = T::normalise_draw(normal.sample(rng));
            if draw < lower || draw > upper {
                return None;
            }
            // Re-check in `T`: wide integer bounds lose precision as `f64`.
            let value = T::from_draw(draw);
            (value >= min && value <= max).then_some(value)
        })
    }

    /// Rolls against a percentage.
    ///
    /// See [`PercentageMode`] for how `x` outside `[0, 100]` is treated.
    pub fn percentage<T: Scalar>(&mut self, x: T) -> bool {
        let x: f64 = x.as_();
        match self.config.percentage_mode {
            PercentageMode::Clamped => {
                let threshold = if x.is_nan() { 0.0 } else { x.clamp(0.0, 100.0) };
                self.rng.gen_range(0.0..100.0) < threshold
            }
            PercentageMode::Literal => {
                let roll: u32 = Uniform::new_inclusive(0, 100).sample(&mut self.rng);
                f64::from(roll) < x
            }
        }
    }

    /// Draws a uniformly distributed 64-bit identifier.
    ///
    /// Collisions follow the birthday bound for a 64-bit space.
    #[inline]
    pub fn uuid(&mut self) -> u64 {
        self.rng.gen()
    }

    /// Draws a 128-bit identifier from two independent 64-bit draws.
    ///
    /// The high half is drawn first.
    #[inline]
    pub fn uuid128(&mut self) -> Id128 {
        let high = self.uuid();
        let low = self.uuid();
        Id128::from_halves(high, low)
    }

    /// Draws a uniform position in `[0, sequence.len() - 1]`.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyInput`] for an empty sequence.
    pub fn index<T>(&mut self, sequence: &[T]) -> Result<usize, RandomError> {
        let last = last_index(sequence)?;
        Ok(Uniform::new_inclusive(0, last).sample(&mut self.rng))
    }

    /// Draws a position from `Normal(mean, std_dev)`, floored, until it lies in
    /// `[0, sequence.len() - 1]`.
    ///
    /// Shares the stall risk and rejection budget of [`Self::weighted_number_in`].
    ///
    /// # Errors
    ///
    /// - [`RandomError::EmptyInput`] for an empty sequence
    /// - [`RandomError::InvalidParameter`] for invalid normal parameters
    /// - [`RandomError::SamplingTimeout`] once the rejection budget is spent
    pub fn weighted_index<T>(
        &mut self,
        sequence: &[T],
        mean: f64,
        std_dev: f64,
    ) -> Result<usize, RandomError> {
        let last = last_index(sequence)?;
        let normal = normal_adapter(mean, std_dev)?;
        let upper = last as f64;

        self.reject_until(|rng| {
            let draw = normal.sample(rng).floor();
            (draw >= 0.0 && draw <= upper).then(|| draw as usize)
        })
    }

    /// Picks one value uniformly from a list of candidate index values.
    ///
    /// Every element is equally likely; the values themselves are not weights.
    ///
    /// # Errors
    ///
    /// Returns [`RandomError::EmptyInput`] for an empty list.
    pub fn pick_from_list<T: Copy>(&mut self, indices: &[T]) -> Result<T, RandomError> {
        indices
            .choose(&mut self.rng)
            .copied()
            .ok_or(RandomError::EmptyInput)
    }

    /// Shuffles `slice` in place.
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.rng);
    }

    /// Repeats `accept` until it yields a value or the rejection budget runs out.
    fn reject_until<V, F>(&mut self, mut accept: F) -> Result<V, RandomError>
    where
        F: FnMut(&mut R) -> Option<V>,
    {
        let limit = self.config.rejection_limit();
        let mut rejected: u64 = 0;

        loop {
            if let Some(value) = accept(&mut self.rng) {
                return Ok(value);
            }
            rejected = rejected.saturating_add(1);

            if let RejectionLimit::Bounded(max) = limit {
                if rejected >= u64::from(max) {
                    warn!(attempts = rejected, "rejection sampling exhausted its budget");
                    return Err(RandomError::SamplingTimeout { attempts: rejected });
                }
            }
        }
    }
}

/// Validates normal parameters and builds the adapter.
fn normal_adapter(mean: f64, std_dev: f64) -> Result<Normal<f64>, RandomError> {
    if !mean.is_finite() {
        return Err(RandomError::invalid_parameter(
            "mean",
            format!("must be finite, got {}", mean),
        ));
    }
    if !std_dev.is_finite() || std_dev < 0.0 {
        return Err(RandomError::invalid_parameter(
            "std_dev",
            format!("must be finite and non-negative, got {}", std_dev),
        ));
    }
    Normal::new(mean, std_dev)
        .map_err(|err| RandomError::invalid_parameter("std_dev", err.to_string()))
}

fn last_index<T>(sequence: &[T]) -> Result<usize, RandomError> {
    sequence.len().checked_sub(1).ok_or(RandomError::EmptyInput)
}
