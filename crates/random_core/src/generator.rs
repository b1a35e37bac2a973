//! Bit generator and its per-thread shared instance.
//!
//! [`FacadeRng`] wraps `rand::rngs::StdRng` and remembers the seed it was
//! initialised with. The facade keeps one `FacadeRng` per thread, created
//! lazily on first use and kept until the thread exits. It is never reseeded.
//!
//! [`GeneratorHandle`] is a shared handle to the calling thread's generator:
//! cloning a handle shares the future sequence instead of duplicating it.
//! Handles are `!Send`, so a generator cannot be reached from two threads.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::cell::{RefCell, RefMut};
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::trace;

use crate::error::RandomError;

const BUSY_MESSAGE: &str =
    "thread generator is lent out by with_generator; draw from the &mut FacadeRng it passes";

/// Odd 64-bit constant used to spread the seed sequence counter.
const SEED_SPREAD: u64 = 0x9E37_79B9_7F4A_7C15;

/// Count of time-based seeds handed out by this process.
static SEED_SEQUENCE: AtomicU64 = AtomicU64::new(0);

thread_local! {
    static THREAD_GENERATOR: Rc<RefCell<FacadeRng>> = {
        let rng = FacadeRng::from_time();
        trace!(seed = rng.seed(), "initialised thread generator");
        Rc::new(RefCell::new(rng))
    };
}

/// Derives a seed from the wall clock.
///
/// Generators created within the same clock tick still diverge because each
/// call also mixes in a process-wide sequence number.
fn time_seed() -> u64 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default();
    let sequence = SEED_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    nanos ^ sequence.wrapping_add(1).wrapping_mul(SEED_SPREAD)
}

/// Pseudo-random bit generator behind every draw.
///
/// Not cryptographically secure.
///
/// # Examples
///
/// ```rust
/// use random_core::FacadeRng;
/// use rand::RngCore;
///
/// let mut rng1 = FacadeRng::from_seed(12345);
/// let mut rng2 = FacadeRng::from_seed(12345);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.next_u64(), rng2.next_u64());
/// assert_eq!(rng1.seed(), 12345);
/// ```
#[derive(Clone, Debug)]
pub struct FacadeRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl FacadeRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a generator seeded from the high-resolution wall clock.
    pub fn from_time() -> Self {
        Self::from_seed(time_seed())
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging and for replaying a failing sequence.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RngCore for FacadeRng {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    #[inline]
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}

/// Shared handle to the calling thread's generator.
///
/// Every handle obtained on one thread drives the same sequence. Implements
/// [`RngCore`], so it can be passed to any `rand` algorithm.
///
/// # Examples
///
/// ```rust
/// use random_core::generator_handle;
/// use rand::seq::SliceRandom;
///
/// let mut deck: Vec<u32> = (0..52).collect();
/// deck.shuffle(&mut generator_handle());
/// assert_eq!(deck.len(), 52);
/// ```
#[derive(Clone, Debug)]
pub struct GeneratorHandle {
    inner: Rc<RefCell<FacadeRng>>,
}

impl GeneratorHandle {
    /// Returns a handle to the calling thread's generator.
    pub fn current() -> Self {
        Self {
            inner: THREAD_GENERATOR.with(Rc::clone),
        }
    }

    /// Returns the seed of the shared generator.
    ///
    /// # Panics
    ///
    /// Panics when called inside a [`with_generator`] closure.
    pub fn seed(&self) -> u64 {
        self.generator().seed()
    }

    /// Returns `true` when both handles drive the same generator.
    pub fn shares_with(&self, other: &GeneratorHandle) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    fn generator(&self) -> RefMut<'_, FacadeRng> {
        self.inner
            .try_borrow_mut()
            .unwrap_or_else(|_| panic!("{}", BUSY_MESSAGE))
    }
}

impl RngCore for GeneratorHandle {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.generator().next_u32()
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        self.generator().next_u64()
    }

    #[inline]
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.generator().fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner
            .try_borrow_mut()
            .map_err(|_| rand::Error::new(RandomError::GeneratorBusy))?
            .try_fill_bytes(dest)
    }
}

/// Runs `f` with exclusive access to the calling thread's generator.
///
/// While `f` runs, draw only from the `&mut FacadeRng` it is given.
///
/// # Errors
///
/// Returns [`RandomError::GeneratorBusy`] when called from inside another
/// `with_generator` closure on the same thread.
///
/// # Panics
///
/// Panics if `f` draws through the facade or a [`GeneratorHandle`].
pub fn with_generator<F, R>(f: F) -> Result<R, RandomError>
where
    F: FnOnce(&mut FacadeRng) -> R,
{
    THREAD_GENERATOR.with(|generator| {
        let mut rng = generator
            .try_borrow_mut()
            .map_err(|_| RandomError::GeneratorBusy)?;
        Ok(f(&mut rng))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_reproducibility() {
        let mut rng1 = FacadeRng::from_seed(7);
        let mut rng2 = FacadeRng::from_seed(7);
        for _ in 0..100 {
            assert_eq!(rng1.next_u64(), rng2.next_u64());
        }
    }

    #[test]
    fn test_time_seeds_diverge() {
        // The sequence counter separates seeds taken in the same clock tick.
        let seeds: Vec<u64> = (0..64).map(|_| time_seed()).collect();
        let mut unique = seeds.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), seeds.len());
    }

    #[test]
    fn test_handles_share_one_sequence() {
        let mut first = GeneratorHandle::current();
        let mut second = GeneratorHandle::current();
        assert!(first.shares_with(&second));
        assert_eq!(first.seed(), second.seed());

        let mut expected = with_generator(|rng| rng.clone()).unwrap();
        assert_eq!(first.next_u64(), expected.next_u64());
        assert_eq!(second.next_u64(), expected.next_u64());
        assert_eq!(first.next_u32(), expected.next_u32());
    }

    #[test]
    fn test_nested_with_generator_is_busy() {
        let nested = with_generator(|_| with_generator(|rng| rng.next_u64())).unwrap();
        assert_eq!(nested, Err(RandomError::GeneratorBusy));

        // The generator is released once the outer closure returns.
        assert!(with_generator(|rng| rng.next_u64()).is_ok());
    }

    #[test]
    fn test_handle_reports_busy_generator() {
        let mut handle = GeneratorHandle::current();
        let mut buffer = [0u8; 8];
        let result = with_generator(|_| handle.try_fill_bytes(&mut buffer)).unwrap();
        assert!(result.is_err());
    }

    #[test]
    #[should_panic(expected = "thread generator is lent out by with_generator")]
    fn test_handle_draw_inside_with_generator_panics() {
        let mut handle = GeneratorHandle::current();
        let _ = with_generator(|_| handle.next_u64());
    }

    #[test]
    fn test_threads_get_distinct_generators() {
        let here = GeneratorHandle::current().seed();
        let there = std::thread::spawn(|| GeneratorHandle::current().seed())
            .join()
            .unwrap();
        assert_ne!(here, there);
    }

    #[test]
    fn test_fill_bytes_advances_state() {
        let mut rng = FacadeRng::from_seed(1);
        let mut first = [0u8; 16];
        let mut second = [0u8; 16];
        rng.fill_bytes(&mut first);
        rng.try_fill_bytes(&mut second).unwrap();
        assert_ne!(first, second);
    }
}
