//! HC32 Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the LCD driver is
//! written against. Chip-specific crates implement them for real hardware,
//! test code implements them with mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application / BSP                      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hc32-lcd (NT35510 / SSD1963 driver)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hc32-hal (this crate - traits)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  hc32-hal-f4a0 (EXMC bus, delays, PWM)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::LcdBus`] - 16-bit command/data parallel bus
//! - [`delay::DelayMs`] - Blocking millisecond delays
//! - [`backlight::Backlight`] - Panel backlight brightness

#![no_std]
#![deny(unsafe_code)]

pub mod backlight;
pub mod bus;
pub mod delay;

// Re-export key traits at crate root for convenience
pub use backlight::Backlight;
pub use bus::LcdBus;
pub use delay::DelayMs;
