//! NT35510 controller
//!
//! The NT35510 addresses every parameter byte as its own 16-bit register:
//! command `0x2A00` takes the X start high byte, `0x2A01` the low byte, and
//! so on. Every register write is therefore one command word plus one data
//! word.
//!
//! # Bring-up
//!
//! Manufacturer command set page 1 holds the power rails and gamma, page 0
//! the panel timing. Both are unlocked with the `0xF0xx` enable key. The
//! values are those validated for the evaluation board's 480x800 glass.

use hc32_hal::{DelayMs, LcdBus};

use super::{split, ControllerId, ControllerProtocol, Opcodes, Viewport, ID_READ_SETTLE_MS};
use crate::config::LcdConfig;
use crate::geometry::{Orientation, ScanBits};

/// 24-bit identity assembled from the three ID registers
pub const ID_SENTINEL: u32 = 0x00_80_00;

/// Sleep-out to first command, per datasheet
pub const SLEEP_OUT_SETTLE_MS: u32 = 120;

/// Display-on to first pixel write
pub const DISPLAY_ON_SETTLE_MS: u32 = 50;

/// NT35510 register addresses
pub mod reg {
    /// ID1 (module manufacturer)
    pub const READ_ID1: u16 = 0xDA00;
    /// ID2 (module/driver version)
    pub const READ_ID2: u16 = 0xDB00;
    /// ID3 (module/driver)
    pub const READ_ID3: u16 = 0xDC00;
    /// Exit sleep mode
    pub const SLEEP_OUT: u16 = 0x1100;
    /// Display off
    pub const DISPLAY_OFF: u16 = 0x2800;
    /// Display on
    pub const DISPLAY_ON: u16 = 0x2900;
    /// Column address set
    pub const COLUMN_ADDRESS: u16 = 0x2A00;
    /// Page (row) address set
    pub const PAGE_ADDRESS: u16 = 0x2B00;
    /// Memory write
    pub const MEMORY_WRITE: u16 = 0x2C00;
    /// Memory read
    pub const MEMORY_READ: u16 = 0x2E00;
    /// Memory data access control (MADCTL)
    pub const MEMORY_ACCESS_CONTROL: u16 = 0x3600;
    /// Interface pixel format
    pub const PIXEL_FORMAT: u16 = 0x3A00;
}

/// 16 bits per pixel on both the RGB and MCU interfaces
const PIXEL_FORMAT_RGB565: u16 = 0x55;

/// Page 1 unlock, then power rail trim
const POWER_SETUP: &[(u16, u8)] = &[
    // Manufacturer command set, page 1
    (0xF000, 0x55),
    (0xF001, 0xAA),
    (0xF002, 0x52),
    (0xF003, 0x08),
    (0xF004, 0x01),
    // AVDD 5.2V
    (0xB000, 0x0D),
    (0xB001, 0x0D),
    (0xB002, 0x0D),
    // AVDD ratio
    (0xB600, 0x34),
    (0xB601, 0x34),
    (0xB602, 0x34),
    // AVEE -5.2V
    (0xB100, 0x0D),
    (0xB101, 0x0D),
    (0xB102, 0x0D),
    // AVEE ratio
    (0xB700, 0x34),
    (0xB701, 0x34),
    (0xB702, 0x34),
    // VCL -2.5V
    (0xB200, 0x00),
    (0xB201, 0x00),
    (0xB202, 0x00),
    // VCL ratio
    (0xB800, 0x24),
    (0xB801, 0x24),
    (0xB802, 0x24),
    // VGH 15V, free pump
    (0xBF00, 0x01),
    (0xB300, 0x0F),
    (0xB301, 0x0F),
    (0xB302, 0x0F),
    // VGH ratio
    (0xB900, 0x34),
    (0xB901, 0x34),
    (0xB902, 0x34),
    // VGL_REG -10V
    (0xB500, 0x08),
    (0xB501, 0x08),
    (0xB502, 0x08),
    (0xC200, 0x03),
    // VGLX ratio
    (0xBA00, 0x24),
    (0xBA01, 0x24),
    (0xBA02, 0x24),
    // VGMP/VGSP 4.5V/0V
    (0xBC00, 0x00),
    (0xBC01, 0x78),
    (0xBC02, 0x00),
    // VGMN/VGSN -4.5V/0V
    (0xBD00, 0x00),
    (0xBD01, 0x78),
    (0xBD02, 0x00),
    // VCOM
    (0xBE00, 0x00),
    (0xBE01, 0x64),
];

/// Gamma correction registers (one 52-byte curve each)
const GAMMA_REGISTERS: [u16; 4] = [0xD100, 0xD200, 0xD300, 0xD400];

/// Gamma curve shared by all channels, as (high, low) pairs of 10-bit
/// reference voltages
const GAMMA_CURVE: [u8; 52] = [
    0x00, 0x33, 0x00, 0x34, 0x00, 0x3A, 0x00, 0x4A, 0x00, 0x5C, 0x00, 0x81, 0x00, 0xA6,
    0x00, 0xE5, 0x01, 0x13, 0x01, 0x54, 0x01, 0x82, 0x01, 0xCA, 0x02, 0x00, 0x02, 0x01,
    0x02, 0x34, 0x02, 0x67, 0x02, 0x84, 0x02, 0xA4, 0x02, 0xB7, 0x02, 0xCF, 0x02, 0xDE,
    0x02, 0xF2, 0x02, 0xFE, 0x03, 0x10, 0x03, 0x33, 0x03, 0x6D,
];

/// Page 0 unlock, then panel timing
const DISPLAY_SETUP: &[(u16, u8)] = &[
    // Manufacturer command set, page 0
    (0xF000, 0x55),
    (0xF001, 0xAA),
    (0xF002, 0x52),
    (0xF003, 0x08),
    (0xF004, 0x00),
    // Display control
    (0xB100, 0xCC),
    (0xB101, 0x00),
    // Source hold time
    (0xB600, 0x05),
    // Gate EQ control
    (0xB700, 0x70),
    (0xB701, 0x70),
    // Source EQ control, mode 2
    (0xB800, 0x01),
    (0xB801, 0x03),
    (0xB802, 0x03),
    (0xB803, 0x03),
    // Inversion mode, 2-dot
    (0xBC00, 0x02),
    (0xBC01, 0x00),
    (0xBC02, 0x00),
    // Timing control, 4H with 4 delay
    (0xC900, 0xD0),
    (0xC901, 0x02),
    (0xC902, 0x50),
    (0xC903, 0x50),
    (0xC904, 0x50),
    // Tearing effect line off
    (0x3500, 0x00),
];

/// NT35510 addressing protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Nt35510;

impl Nt35510 {
    /// Read the 24-bit identity from ID1..ID3
    ///
    /// Each register yields one significant byte in the low half of the
    /// data word.
    pub fn read_id<B: LcdBus, D: DelayMs>(bus: &mut B, delay: &mut D) -> u32 {
        [reg::READ_ID1, reg::READ_ID2, reg::READ_ID3]
            .into_iter()
            .fold(0u32, |id, register| {
                bus.write_command(register);
                delay.delay_ms(ID_READ_SETTLE_MS);
                (id << 8) | u32::from(bus.read_data() & 0xFF)
            })
    }

    fn write_table<B: LcdBus>(bus: &mut B, table: &[(u16, u8)]) {
        for &(register, value) in table {
            bus.write_register(register, value.into());
        }
    }

    /// Write one byte-pair per register, starting at `base`
    fn write_pairs<B: LcdBus>(bus: &mut B, base: u16, first: u16, second: u16) {
        for (offset, value) in split(first).into_iter().chain(split(second)).enumerate() {
            bus.write_register(base + offset as u16, value);
        }
    }
}

impl ControllerProtocol for Nt35510 {
    fn id(&self) -> ControllerId {
        ControllerId::Nt35510
    }

    fn opcodes(&self, _orientation: Orientation) -> Opcodes {
        Opcodes {
            write_ram: reg::MEMORY_WRITE,
            set_x: reg::COLUMN_ADDRESS,
            set_y: reg::PAGE_ADDRESS,
        }
    }

    fn configure<B: LcdBus, D: DelayMs>(&self, bus: &mut B, delay: &mut D, _config: &LcdConfig) {
        Self::write_table(bus, POWER_SETUP);

        for base in GAMMA_REGISTERS {
            for (offset, &value) in GAMMA_CURVE.iter().enumerate() {
                bus.write_register(base + offset as u16, value.into());
            }
        }

        Self::write_table(bus, DISPLAY_SETUP);

        bus.write_register(reg::PIXEL_FORMAT, PIXEL_FORMAT_RGB565);
        bus.write_command(reg::SLEEP_OUT);
        delay.delay_ms(SLEEP_OUT_SETTLE_MS);
        bus.write_command(reg::DISPLAY_ON);
        delay.delay_ms(DISPLAY_ON_SETTLE_MS);
    }

    fn rotates_scan(&self, orientation: Orientation) -> bool {
        orientation == Orientation::Landscape
    }

    fn scan_swaps_dimensions(&self) -> bool {
        true
    }

    fn write_scan_bits<B: LcdBus>(&self, bus: &mut B, bits: ScanBits) {
        bus.write_register(reg::MEMORY_ACCESS_CONTROL, bits.register_value());
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
        Self::write_pairs(bus, view.opcodes.set_x, x0, x1);
        Self::write_pairs(bus, view.opcodes.set_y, y0, y1);
    }

    fn set_cursor<B: LcdBus>(&self, bus: &mut B, view: &Viewport, x: u16, y: u16) {
        let [x_high, x_low] = split(x);
        let [y_high, y_low] = split(y);
        bus.write_register(view.opcodes.set_x, x_high);
        bus.write_register(view.opcodes.set_x + 1, x_low);
        bus.write_register(view.opcodes.set_y, y_high);
        bus.write_register(view.opcodes.set_y + 1, y_low);
    }

    fn read_pixel<B: LcdBus>(&self, bus: &mut B) -> u16 {
        bus.write_command(reg::MEMORY_READ);
        let _dummy = bus.read_data();
        // RGB888 over two words: R in the high byte, G low; then B high
        let rg = bus.read_data();
        let b = bus.read_data();
        let g = (rg & 0xFF) << 8;
        ((rg >> 11) << 11) | ((g >> 10) << 5) | (b >> 11)
    }

    fn set_display_on<B: LcdBus>(&self, bus: &mut B, on: bool) {
        bus.write_command(if on {
            reg::DISPLAY_ON
        } else {
            reg::DISPLAY_OFF
        });
    }

    fn set_backlight<B: LcdBus>(&self, _bus: &mut B, _percent: u8) -> bool {
        false
    }
}
