//! XTEA-based pseudo-random generator.
//!
//! The generator enciphers a 64-bit working value with 32 XTEA cycles per
//! draw. The 128-bit key starts from a fixed constant and is folded with the
//! RTC registers at power-on, so every boot that happens at a different time
//! of day produces a different sequence.
//!
//! # Usage
//!
//! ```ignore
//! let mut rng = Xtea::seeded(&clock);
//! let noise = rng.next(Draw::Full);   // 0..=0x7FFF
//! let coin = rng.next(Draw::OneBit);  // 0 or 1
//! ```

use crate::clock::ClockState;

/// Largest value returned by a full-width draw.
pub const RAND_MAX: u16 = 0x7FFF;

/// Initial key before the clock is folded in.
const INITIAL_KEY: [u32; 4] = [0x2DE9_716E, 0x993F_DDD1, 0x2A77_FB57, 0xB172_E6B0];

/// XTEA key schedule constant.
const DELTA: u32 = 0x9E37_79B9;

/// XTEA cycles per encipher.
const CYCLES: u32 = 32;

/// Width of a random draw.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Draw {
    /// 15-bit value, `0..=RAND_MAX`.
    Full,
    /// 0..=3
    TwoBit,
    /// 0 or 1
    OneBit,
}

impl Draw {
    /// Map a raw kind code: 1 = two bits, 2 = one bit, anything else full width.
    pub const fn from_kind(kind: u8) -> Self {
        match kind {
            1 => Self::TwoBit,
            2 => Self::OneBit,
            _ => Self::Full,
        }
    }
}

/// Generator state: 128-bit key and 64-bit working value.
#[derive(Clone, Debug)]
pub struct Xtea {
    key: [u32; 4],
    value: [u32; 2],
}

impl Xtea {
    /// Generator with the initial key and a zero working value (unseeded).
    pub const fn new() -> Self {
        Self {
            key: INITIAL_KEY,
            value: [0, 0],
        }
    }

    /// Generator seeded from the clock and alarm registers.
    pub fn seeded(clock: &ClockState) -> Self {
        let mut rng = Self::new();
        rng.seed(clock);
        rng
    }

    /// Fold the clock registers into the key and restart the working value.
    pub fn seed(
        &mut self,
        clock: &ClockState,
    ) {
        self.key = INITIAL_KEY;
        self.value = [0, 0];
        self.encipher();

        let time_word = u32::from_be_bytes([clock.alarm_hour, clock.hour, clock.minute, clock.second]);
        self.key[0] ^= self.value[1] << 1;
        self.encipher();
        self.key[1] ^= time_word << 1;
        self.encipher();
        self.key[2] ^= time_word >> 1;
        self.encipher();
        self.key[3] ^= self.value[1] >> 1;
        self.encipher();

        let date_word = u32::from_be_bytes([clock.alarm_minute, clock.month, clock.day, clock.year]);
        self.key[0] ^= date_word << 1;
        self.encipher();
        self.key[1] ^= self.value[0] << 1;
        self.encipher();
        self.key[2] ^= self.value[0] >> 1;
        self.encipher();
        self.key[3] ^= date_word >> 1;

        self.value = [0, 0];
        self.encipher();
    }

    /// Advance the generator one round and return a value of the requested width.
    pub fn next(
        &mut self,
        draw: Draw,
    ) -> u16 {
        self.encipher();
        let mixed = self.value[0] ^ self.value[1];
        match draw {
            Draw::Full => (mixed & u32::from(RAND_MAX)) as u16,
            Draw::TwoBit => ((mixed >> 15) & 3) as u16,
            Draw::OneBit => ((mixed >> 17) & 1) as u16,
        }
    }

    /// Current 64-bit working value.
    #[inline]
    pub const fn value(&self) -> [u32; 2] { self.value }

    /// One XTEA encipher (32 cycles) of the working value under the key.
    fn encipher(&mut self) {
        let [mut v0, mut v1] = self.value;
        let mut sum: u32 = 0;
        for _ in 0..CYCLES {
            v0 = v0.wrapping_add(
                (((v1 << 4) ^ (v1 >> 5)).wrapping_add(v1)) ^ sum.wrapping_add(self.key[(sum & 3) as usize]),
            );
            sum = sum.wrapping_add(DELTA);
            v1 = v1.wrapping_add(
                (((v0 << 4) ^ (v0 >> 5)).wrapping_add(v0)) ^ sum.wrapping_add(self.key[((sum >> 11) & 3) as usize]),
            );
        }
        self.value = [v0, v1];
    }
}

impl Default for Xtea {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
