//! Evaluation board LCD
//!
//! Binds the panel driver to the board's backlight. The SSD1963 dims the
//! backlight with its own PWM output; with an NT35510 the board's timer
//! PWM does it instead.

use hc32_hal::{Backlight, DelayMs, LcdBus};
use hc32_lcd::{Lcd, LcdConfig, LcdError};

use crate::delay::CycleDelay;
use crate::exmc::ExmcLcdBus;

/// Panel driver with backlight routing
pub struct BspLcd<B, D, L> {
    lcd: Lcd<B, D>,
    backlight: L,
}

impl<L: Backlight> BspLcd<ExmcLcdBus, CycleDelay, L> {
    /// Bring up the panel on the evaluation board's EXMC wiring
    ///
    /// # Safety
    ///
    /// Same contract as [`ExmcLcdBus::ev_board`].
    pub unsafe fn ev_board(hclk_hz: u32, backlight: L, config: LcdConfig) -> Result<Self, LcdError> {
        let bus = ExmcLcdBus::ev_board();
        let lcd = Lcd::new(bus, CycleDelay::new(hclk_hz), config)?;
        Ok(Self::new(lcd, backlight))
    }
}

impl<B: LcdBus, D: DelayMs, L: Backlight> BspLcd<B, D, L> {
    pub fn new(lcd: Lcd<B, D>, backlight: L) -> Self {
        Self { lcd, backlight }
    }

    /// Set panel brightness in percent
    ///
    /// Goes to the controller when it has a backlight output, to the
    /// external backlight otherwise.
    pub fn set_backlight(&mut self, percent: u8) -> Result<(), L::Error> {
        if self.lcd.set_controller_backlight(percent) {
            #[cfg(feature = "defmt")]
            defmt::debug!("backlight {}% via controller", percent);
            return Ok(());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("backlight {}% via PWM", percent);
        self.backlight.set_brightness(percent)
    }

    pub fn lcd(&self) -> &Lcd<B, D> {
        &self.lcd
    }

    pub fn lcd_mut(&mut self) -> &mut Lcd<B, D> {
        &mut self.lcd
    }

    pub fn backlight(&self) -> &L {
        &self.backlight
    }

    pub fn release(self) -> (Lcd<B, D>, L) {
        (self.lcd, self.backlight)
    }
}
