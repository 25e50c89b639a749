//! Blocking delays
//!
//! Panel bring-up only needs coarse millisecond waits. [`CycleDelay`] burns
//! core cycles and works before any timer is running; [`HalDelay`] adapts
//! any `embedded-hal` delay provider.

use embedded_hal::delay::DelayNs;
use hc32_hal::DelayMs;

/// HCLK after reset (internal high-speed RC)
pub const RESET_HCLK_HZ: u32 = 16_000_000;

/// Busy-wait delay calibrated from the core clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CycleDelay {
    hclk_hz: u32,
}

impl CycleDelay {
    /// Delay for a core running at `hclk_hz`
    pub const fn new(hclk_hz: u32) -> Self {
        Self { hclk_hz }
    }

    /// Core cycles per millisecond
    pub const fn cycles_per_ms(&self) -> u32 {
        self.hclk_hz / 1_000
    }

    /// Split a delay into chunks that fit the cycle counter argument
    fn cycle_chunks(&self, ms: u32) -> impl Iterator<Item = u32> {
        let mut remaining = u64::from(self.cycles_per_ms()) * u64::from(ms);
        core::iter::from_fn(move || {
            if remaining == 0 {
                return None;
            }
            let chunk = remaining.min(u64::from(u32::MAX));
            remaining -= chunk;
            Some(chunk as u32)
        })
    }
}

impl Default for CycleDelay {
    fn default() -> Self {
        Self::new(RESET_HCLK_HZ)
    }
}

impl DelayMs for CycleDelay {
    fn delay_ms(&mut self, ms: u32) {
        for cycles in self.cycle_chunks(ms) {
            cortex_m::asm::delay(cycles);
        }
    }
}

/// [`DelayMs`] on top of an `embedded-hal` delay
#[derive(Debug)]
pub struct HalDelay<D>(pub D);

impl<D: DelayNs> HalDelay<D> {
    pub fn new(delay: D) -> Self {
        Self(delay)
    }

    pub fn release(self) -> D {
        self.0
    }
}

impl<D: DelayNs> DelayMs for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct CountingDelay {
        total_ns: u64,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_cycles_per_ms() {
        assert_eq!(CycleDelay::default().cycles_per_ms(), 16_000);
        assert_eq!(CycleDelay::new(240_000_000).cycles_per_ms(), 240_000);
    }

    #[test]
    fn test_cycle_chunks() {
        let delay = CycleDelay::new(240_000_000);
        assert_eq!(delay.cycle_chunks(0).count(), 0);
        assert_eq!(delay.cycle_chunks(120).collect::<Vec<_>>(), [28_800_000]);

        // 240 MHz for 60 s overflows u32
        let chunks: Vec<_> = delay.cycle_chunks(60_000).collect();
        assert_eq!(chunks.len(), 4);
        assert_eq!(
            chunks.iter().map(|&c| u64::from(c)).sum::<u64>(),
            240_000 * 60_000
        );
    }

    #[test]
    fn test_hal_delay_forwards() {
        let mut delay = HalDelay::new(CountingDelay::default());
        delay.delay_ms(120);
        delay.delay_ms(10);
        assert_eq!(delay.release().total_ns, 130_000_000);
    }
}
