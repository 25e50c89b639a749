//! Backlight abstraction
//!
//! Some display controllers drive their own backlight PWM; others rely on a
//! timer output on the MCU. This trait covers the latter.

/// Maximum brightness in percent
pub const MAX_BRIGHTNESS: u8 = 100;

/// Panel backlight with adjustable brightness
pub trait Backlight {
    /// Error type for brightness updates
    type Error;

    /// Set brightness in percent (0-100)
    ///
    /// Values above 100 are treated as 100.
    fn set_brightness(&mut self, percent: u8) -> Result<(), Self::Error>;

    /// Get the last brightness set, in percent
    fn brightness(&self) -> u8;

    /// Turn the backlight fully on
    fn on(&mut self) -> Result<(), Self::Error> {
        self.set_brightness(MAX_BRIGHTNESS)
    }

    /// Turn the backlight off
    fn off(&mut self) -> Result<(), Self::Error> {
        self.set_brightness(0)
    }
}
