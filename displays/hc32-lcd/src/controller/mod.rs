//! Display controller families
//!
//! The board ships with either an NT35510 or an SSD1963 behind the same
//! bus. Both speak MIPI DCS-style commands but differ in how commands are
//! encoded, how the address window is programmed, and how much bring-up
//! they need. The family is identified once by [`Controller::probe`] and
//! every later call dispatches through [`ControllerProtocol`].

pub mod nt35510;
pub mod ssd1963;

use hc32_hal::{DelayMs, LcdBus};

use crate::config::LcdConfig;
use crate::error::LcdError;
use crate::geometry::{Orientation, ScanBits};

pub use nt35510::Nt35510;
pub use ssd1963::Ssd1963;

/// Settling time between an identity register select and its read
pub const ID_READ_SETTLE_MS: u32 = 10;

/// Canonical identity codes of the supported controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum ControllerId {
    /// Novatek NT35510
    Nt35510 = 0x5510,
    /// Solomon Systech SSD1963
    Ssd1963 = 0x1963,
}

impl ControllerId {
    /// 16-bit identity code
    pub const fn code(self) -> u16 {
        self as u16
    }
}

/// Command opcodes used for addressing frame memory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Opcodes {
    /// Start a memory write burst
    pub write_ram: u16,
    /// Column (X) address register
    pub set_x: u16,
    /// Page (Y) address register
    pub set_y: u16,
}

/// Current addressing state handed to the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Logical width in pixels
    pub width: u16,
    /// Logical height in pixels
    pub height: u16,
    /// Logical orientation
    pub orientation: Orientation,
    /// Opcodes for this family and orientation
    pub opcodes: Opcodes,
}

/// Addressing protocol of a controller family
///
/// Coordinates are not range-checked; values outside the panel are written
/// to the controller as-is.
pub trait ControllerProtocol {
    /// Canonical identity of this family
    fn id(&self) -> ControllerId;

    /// Addressing opcodes for the given orientation
    fn opcodes(&self, orientation: Orientation) -> Opcodes;

    /// Bring the controller from reset to display-ready
    fn configure<B: LcdBus, D: DelayMs>(&self, bus: &mut B, delay: &mut D, config: &LcdConfig);

    /// Whether scan directions must be rotated in this orientation
    ///
    /// True when the scan engine sits 90° off the logical screen.
    fn rotates_scan(&self, orientation: Orientation) -> bool;

    /// Whether the row/column exchange bit also exchanges logical width
    /// and height
    fn scan_swaps_dimensions(&self) -> bool {
        false
    }

    /// Write the memory access control register
    fn write_scan_bits<B: LcdBus>(&self, bus: &mut B, bits: ScanBits);

    /// Program the address window to the inclusive rectangle
    /// `(x0, y0)..=(x1, y1)`
    fn set_window<B: LcdBus>(
        &self,
        bus: &mut B,
        view: &Viewport,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    );

    /// Position the write pointer at `(x, y)`
    fn set_cursor<B: LcdBus>(&self, bus: &mut B, view: &Viewport, x: u16, y: u16);

    /// Start a memory write burst at the current cursor
    fn begin_ram_write<B: LcdBus>(&self, bus: &mut B, view: &Viewport) {
        bus.write_command(view.opcodes.write_ram);
    }

    /// Read the pixel at the current cursor as RGB565
    fn read_pixel<B: LcdBus>(&self, bus: &mut B) -> u16;

    /// Switch the panel output on or off
    fn set_display_on<B: LcdBus>(&self, bus: &mut B, on: bool);

    /// Drive the controller's own backlight PWM
    ///
    /// Returns `false` when the controller has no backlight output.
    fn set_backlight<B: LcdBus>(&self, bus: &mut B, percent: u8) -> bool;
}

/// Detected controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Controller {
    Nt35510(Nt35510),
    Ssd1963(Ssd1963),
}

impl Controller {
    /// Identify the controller on the bus
    ///
    /// The NT35510 probe runs first; the SSD1963 probe only runs when it
    /// does not match.
    pub fn probe<B: LcdBus, D: DelayMs>(bus: &mut B, delay: &mut D) -> Result<Self, LcdError> {
        let id = Nt35510::read_id(bus, delay);
        if id == nt35510::ID_SENTINEL {
            return Ok(Self::Nt35510(Nt35510));
        }

        let id = Ssd1963::read_id(bus, delay);
        if id == ssd1963::ID_SENTINEL {
            return Ok(Self::Ssd1963(Ssd1963));
        }

        Err(LcdError::UnrecognizedController { probed: id })
    }
}

macro_rules! dispatch {
    ($self:ident, $c:ident => $call:expr) => {
        match $self {
            Controller::Nt35510($c) => $call,
            Controller::Ssd1963($c) => $call,
        }
    };
}

impl ControllerProtocol for Controller {
    fn id(&self) -> ControllerId {
        dispatch!(self, c => c.id())
    }

    fn opcodes(&self, orientation: Orientation) -> Opcodes {
        dispatch!(self, c => c.opcodes(orientation))
    }

    fn configure<B: LcdBus, D: DelayMs>(&self, bus: &mut B, delay: &mut D, config: &LcdConfig) {
        dispatch!(self, c => c.configure(bus, delay, config))
    }

    fn rotates_scan(&self, orientation: Orientation) -> bool {
        dispatch!(self, c => c.rotates_scan(orientation))
    }

    fn scan_swaps_dimensions(&self) -> bool {
        dispatch!(self, c => c.scan_swaps_dimensions())
    }

    fn write_scan_bits<B: LcdBus>(&self, bus: &mut B, bits: ScanBits) {
        dispatch!(self, c => c.write_scan_bits(bus, bits))
    }

    fn set_window<B: LcdBus>(
        &self,
        bus: &mut B,
        view: &Viewport,
        x0: u16,
        y0: u16,
        x1: u16,
        y1: u16,
    ) {
        dispatch!(self, c => c.set_window(bus, view, x0, y0, x1, y1))
    }

    fn set_cursor<B: LcdBus>(&self, bus: &mut B, view: &Viewport, x: u16, y: u16) {
        dispatch!(self, c => c.set_cursor(bus, view, x, y))
    }

    fn begin_ram_write<B: LcdBus>(&self, bus: &mut B, view: &Viewport) {
        dispatch!(self, c => c.begin_ram_write(bus, view))
    }

    fn read_pixel<B: LcdBus>(&self, bus: &mut B) -> u16 {
        dispatch!(self, c => c.read_pixel(bus))
    }

    fn set_display_on<B: LcdBus>(&self, bus: &mut B, on: bool) {
        dispatch!(self, c => c.set_display_on(bus, on))
    }

    fn set_backlight<B: LcdBus>(&self, bus: &mut B, percent: u8) -> bool {
        dispatch!(self, c => c.set_backlight(bus, percent))
    }
}

/// Split a 16-bit value into the high/low byte words most parameter
/// registers expect
pub(crate) const fn split(value: u16) -> [u16; 2] {
    [value >> 8, value & 0xFF]
}
