//! HC32F4A0 support for the LCD stack
//!
//! Implements the `hc32-hal` traits on top of the HC32F4A0 peripherals and
//! wires them up the way the evaluation board does:
//!
//! - [`exmc::ExmcLcdBus`] - panel controller on an EXMC static memory chip
//!   window
//! - [`delay::CycleDelay`] / [`delay::HalDelay`] - blocking delays
//! - [`backlight::PwmBacklight`] - timer PWM backlight
//! - [`board::BspLcd`] - driver plus backlight routing
//!
//! Clock tree, pin muxing and EXMC timing are set up by the application
//! before any of these are used.

#![cfg_attr(not(test), no_std)]

pub mod backlight;
pub mod board;
pub mod delay;
pub mod exmc;

pub use backlight::{BacklightError, PwmBacklight};
pub use board::BspLcd;
pub use delay::{CycleDelay, HalDelay};
pub use exmc::ExmcLcdBus;
