//! TFT panel driver for the HC32F4A0 evaluation board
//!
//! This crate drives the board's 480x800 RGB565 panel through a 16-bit
//! parallel command/data bus. Two controller families are supported and
//! detected at runtime:
//!
//! - **NT35510** - wide (16-bit) register addressing, register-per-byte
//!   cursor programming
//! - **SSD1963** - narrow DCS commands, window-based addressing with its own
//!   PLL and backlight PWM
//!
//! # Architecture
//!
//! [`Lcd::new`] probes the bus to identify the controller, runs its
//! configuration sequence and selects portrait orientation. The detected
//! family is stored once as a [`Controller`] and every addressing operation
//! dispatches through it.
//!
//! Geometry (lines, circles, triangles, rectangles) is provided by the
//! [`Canvas`] trait on top of single-pixel writes. With the `graphics`
//! feature the driver is also an `embedded-graphics` draw target.
//!
//! ```text
//! Lcd::new ──► probe ──► configure ──► set_direction(Portrait)
//!                                          │
//!                                          ▼
//!                                  set_scan_direction ──► full window
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod controller;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod graphics;

#[cfg(feature = "graphics")]
mod draw_target;

#[cfg(test)]
mod mock;

// Re-export key types
pub use color::Color;
pub use config::{LcdConfig, PanelTiming};
pub use controller::{Controller, ControllerId, ControllerProtocol, Opcodes};
pub use driver::Lcd;
pub use error::LcdError;
pub use geometry::{Orientation, ScanBits, ScanDirection, PANEL_HEIGHT, PANEL_WIDTH};
pub use graphics::{Canvas, LinePoints};
