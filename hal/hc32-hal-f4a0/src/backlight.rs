//! PWM backlight
//!
//! On the evaluation board the NT35510 panel's backlight LED driver is
//! dimmed by a timer channel. Any `embedded-hal` PWM channel will do.

use embedded_hal::pwm::{Error as _, ErrorKind, SetDutyCycle};
use hc32_hal::backlight::{Backlight, MAX_BRIGHTNESS};

/// Backlight errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BacklightError {
    /// The PWM channel rejected the duty cycle
    Pwm(ErrorKind),
}

/// Backlight dimmed by a PWM duty cycle
#[derive(Debug)]
pub struct PwmBacklight<P> {
    pwm: P,
    percent: u8,
}

impl<P: SetDutyCycle> PwmBacklight<P> {
    /// Wrap a PWM channel; the backlight starts off
    pub fn new(mut pwm: P) -> Result<Self, BacklightError> {
        pwm.set_duty_cycle_fully_off()
            .map_err(|e| BacklightError::Pwm(e.kind()))?;
        Ok(Self { pwm, percent: 0 })
    }

    pub fn release(self) -> P {
        self.pwm
    }
}

impl<P: SetDutyCycle> Backlight for PwmBacklight<P> {
    type Error = BacklightError;

    fn set_brightness(&mut self, percent: u8) -> Result<(), Self::Error> {
        let percent = percent.min(MAX_BRIGHTNESS);
        self.pwm
            .set_duty_cycle_percent(percent)
            .map_err(|e| BacklightError::Pwm(e.kind()))?;
        self.percent = percent;
        Ok(())
    }

    fn brightness(&self) -> u8 {
        self.percent
    }
}
