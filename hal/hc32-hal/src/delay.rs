//! Blocking delay abstraction
//!
//! Controller bring-up needs fixed settling times between register writes.
//! There is nothing else to run meanwhile, so delays simply block.

/// Blocking millisecond delay
pub trait DelayMs {
    /// Block for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

impl<T: DelayMs + ?Sized> DelayMs for &mut T {
    fn delay_ms(&mut self, ms: u32) {
        T::delay_ms(self, ms)
    }
}
