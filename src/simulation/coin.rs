//! Fair-coin sources for the walk simulator.
//!
//! Every round the simulator draws two fair binary choices (one per walker).
//! [`CoinSource`] abstracts where those draws come from: any [`rand::Rng`]
//! works out of the box for one-off trials and tests, while [`CoinBuffer`]
//! is the batch fast path — SplitMix64 behind a bit buffer, so one PRNG
//! step supplies 64 flips. A trial on an n×n grid consumes 2(n-1) flips,
//! so most trials cost a single PRNG step.

use rand::Rng;

/// Outcome of one fair flip. Heads moves a walker along x, tails along y
/// (each toward that walker's target corner).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Coin {
    Heads,
    Tails,
}

/// A source of independent fair binary draws.
pub trait CoinSource {
    fn flip(&mut self) -> Coin;
}

/// Any rand RNG is a coin source: one fair Bernoulli draw per flip.
impl<R: Rng> CoinSource for R {
    #[inline]
    fn flip(&mut self) -> Coin {
        if self.random_bool(0.5) {
            Coin::Heads
        } else {
            Coin::Tails
        }
    }
}

/// SplitMix64 PRNG — single u64 state word, ~2 cycles per step.
#[derive(Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    /// Create from seed.
    #[inline(always)]
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Generate next u64.
    #[inline(always)]
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9e3779b97f4a7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58476d1ce4e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d049bb133111eb);
        z ^ (z >> 31)
    }
}

/// Buffered coin source: each SplitMix64 output is consumed one bit at a
/// time, least-significant first. Keeps per-trial RNG state tiny when the
/// aggregator spins up one source per trial.
#[derive(Clone)]
pub struct CoinBuffer {
    rng: SplitMix64,
    bits: u64,
    remaining: u32,
}

impl CoinBuffer {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SplitMix64::new(seed),
            bits: 0,
            remaining: 0,
        }
    }
}

impl CoinSource for CoinBuffer {
    #[inline(always)]
    fn flip(&mut self) -> Coin {
        if self.remaining == 0 {
            self.bits = self.rng.next_u64();
            self.remaining = 64;
        }
        let heads = self.bits & 1 == 1;
        self.bits >>= 1;
        self.remaining -= 1;
        if heads {
            Coin::Heads
        } else {
            Coin::Tails
        }
    }
}
