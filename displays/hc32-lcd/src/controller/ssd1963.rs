//! SSD1963 controller
//!
//! The SSD1963 is a frame buffer in front of a raw RGB TFT interface. It
//! takes one-byte DCS commands with their parameters as following data
//! words, and knows nothing about the attached glass: pixel clock, sync
//! timing and resolution all come from [`PanelTiming`](crate::PanelTiming).
//!
//! The glass is physically landscape, so the portrait view is produced by
//! rotating the scan and mirroring X addresses.

use hc32_hal::{DelayMs, LcdBus};

use super::{split, ControllerId, ControllerProtocol, Opcodes, Viewport, ID_READ_SETTLE_MS};
use crate::config::{LcdConfig, PanelTiming};
use crate::geometry::{Orientation, ScanBits};

/// Identity assembled from the two significant device descriptor bytes
pub const ID_SENTINEL: u32 = 0x5761;

/// PLL programming to lock
pub const PLL_CONFIG_SETTLE_MS: u32 = 1;
/// PLL enable to PLL lock
pub const PLL_ENABLE_SETTLE_MS: u32 = 10;
/// PLL lock to switching the system clock over
pub const PLL_LOCK_SETTLE_MS: u32 = 12;
/// Soft reset duration
pub const SOFT_RESET_SETTLE_MS: u32 = 10;

/// SSD1963 command set
pub mod cmd {
    /// Software reset
    pub const SOFT_RESET: u16 = 0x01;
    /// Display off
    pub const DISPLAY_OFF: u16 = 0x28;
    /// Display on
    pub const DISPLAY_ON: u16 = 0x29;
    /// Column address set
    pub const SET_COLUMN_ADDRESS: u16 = 0x2A;
    /// Page address set
    pub const SET_PAGE_ADDRESS: u16 = 0x2B;
    /// Memory write
    pub const WRITE_MEMORY_START: u16 = 0x2C;
    /// Memory read
    pub const READ_MEMORY_START: u16 = 0x2E;
    /// Address mode (scan direction)
    pub const SET_ADDRESS_MODE: u16 = 0x36;
    /// Read device descriptor block
    pub const READ_DDB: u16 = 0xA1;
    /// LCD panel mode
    pub const SET_LCD_MODE: u16 = 0xB0;
    /// Horizontal period
    pub const SET_HORI_PERIOD: u16 = 0xB4;
    /// Vertical period
    pub const SET_VERT_PERIOD: u16 = 0xB6;
    /// GPIO direction
    pub const SET_GPIO_CONF: u16 = 0xB8;
    /// GPIO output values
    pub const SET_GPIO_VALUE: u16 = 0xBA;
    /// PWM backlight configuration
    pub const SET_PWM_CONF: u16 = 0xBE;
    /// Dynamic backlight control
    pub const SET_DBC_CONF: u16 = 0xD0;
    /// PLL start
    pub const SET_PLL: u16 = 0xE0;
    /// PLL multiplier/divider
    pub const SET_PLL_MN: u16 = 0xE2;
    /// Pixel clock frequency
    pub const SET_LSHIFT_FREQ: u16 = 0xE6;
    /// Pixel data interface format
    pub const SET_PIXEL_DATA_INTERFACE: u16 = 0xF0;
}

/// PLL multiplier 30, divider 3, effective
const PLL_MN: [u16; 3] = [0x1D, 0x02, 0x04];
/// Enable PLL, keep reference clock
const PLL_ENABLE: u16 = 0x01;
/// Enable PLL and run from it
const PLL_LOCK: u16 = 0x03;
/// Pixel clock divisor
const LSHIFT_FREQ: [u16; 3] = [0x2F, 0xFF, 0xFF];
/// 16-bit (565) pixel data interface
const PIXEL_INTERFACE_565: u16 = 0x03;
/// PWM frequency divisor for the backlight output
const PWM_FREQUENCY: u16 = 0x05;

/// SSD1963 addressing protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ssd1963;

impl Ssd1963 {
    /// Read the device descriptor block
    ///
    /// The first word is the supplier's high byte and is skipped; the next
    /// two carry the product identity in their low bytes.
    pub fn read_id<B: LcdBus, D: DelayMs>(bus: &mut B, delay: &mut D) -> u32 {
        bus.write_command(cmd::READ_DDB);
        delay.delay_ms(ID_READ_SETTLE_MS);
        let _supplier = bus.read_data();
        let high = u32::from(bus.read_data() & 0xFF);
        let low = u32::from(bus.read_data() & 0xFF);
        (high << 8) | low
    }

    fn write_lcd_mode<B: LcdBus>(bus: &mut B, panel: &PanelTiming) {
        let [h_high, h_low] = split(panel.hor_resolution.saturating_sub(1));
        let [v_high, v_low] = split(panel.ver_resolution.saturating_sub(1));
        // 24-bit panel, FRC and dithering off, TFT mode
        bus.write_command_data(
            cmd::SET_LCD_MODE,
            &[0x20, 0x00, h_high, h_low, v_high, v_low, 0x00],
        );
    }

    fn write_periods<B: LcdBus>(bus: &mut B, panel: &PanelTiming) {
        let [ht_high, ht_low] = split(panel.horizontal_total().saturating_sub(1));
        let [hps_high, hps_low] = split(panel.horizontal_start());
        bus.write_command_data(
            cmd::SET_HORI_PERIOD,
            &[
                ht_high,
                ht_low,
                hps_high,
                hps_low,
                panel.hor_pulse_width.saturating_sub(1),
                0x00,
                0x00,
                0x00,
            ],
        );

        let [vt_high, vt_low] = split(panel.vertical_total().saturating_sub(1));
        let [vps_high, vps_low] = split(panel.vertical_start());
        bus.write_command_data(
            cmd::SET_VERT_PERIOD,
            &[
                vt_high,
                vt_low,
                vps_high,
                vps_low,
                panel.ver_pulse_width.saturating_sub(1),
                0x00,
                0x00,
            ],
        );
    }

    fn write_pwm<B: LcdBus>(bus: &mut B, percent: u8) {
        let duty = u16::from(percent.min(100)) * 255 / 100;
        bus.write_command_data(
            cmd::SET_PWM_CONF,
            &[PWM_FREQUENCY, duty, 0x01, 0xFF, 0x00, 0x00],
        );
    }

    /// Mirror an X address across the physical width
    fn mirror_x(view: &Viewport, x: u16) -> u16 {
        view.width.wrapping_sub(1).wrapping_sub(x)
    }
}

impl ControllerProtocol for Ssd1963 {
    fn id(&self) -> ControllerId {
        ControllerId::Ssd1963
    }

    fn opcodes(&self, _orientation: Orientation) -> Opcodes {
        Opcodes {
            write_ram: cmd::WRITE_MEMORY_START,
            set_x: cmd::SET_COLUMN_ADDRESS,
            set_y: cmd::SET_PAGE_ADDRESS,
        }
    }

    fn configure<B: LcdBus, D: DelayMs>(&self, bus: &mut B, delay: &mut D, config: &LcdConfig) {
        bus.write_command_data(cmd::SET_PLL_MN, &PLL_MN);
        delay.delay_ms(PLL_CONFIG_SETTLE_MS);
        bus.write_command_data(cmd::SET_PLL, &[PLL_ENABLE]);
        delay.delay_ms(PLL_ENABLE_SETTLE_MS);
        bus.write_command_data(cmd::SET_PLL, &[PLL_LOCK]);
        delay.delay_ms(PLL_LOCK_SETTLE_MS);

        bus.write_command(cmd::SOFT_RESET);
        delay.delay_ms(SOFT_RESET_SETTLE_MS);

        bus.write_command_data(cmd::SET_LSHIFT_FREQ, &LSHIFT_FREQ);
        Self::write_lcd_mode(bus, &config.panel);
        Self::write_periods(bus, &config.panel);
        bus.write_command_data(cmd::SET_PIXEL_DATA_INTERFACE, &[PIXEL_INTERFACE_565]);
        bus.write_command(cmd::DISPLAY_ON);

        // Dynamic backlight off, then manual PWM
        bus.write_command_data(cmd::SET_DBC_CONF, &[0x00]);
        Self::write_pwm(bus, config.backlight_percent);

        // GPIO0 drives the panel enable
        bus.write_command_data(cmd::SET_GPIO_CONF, &[0x03, 0x01]);
        bus.write_command_data(cmd::SET_GPIO_VALUE, &[0x01]);
    }

    fn rotates_scan(&self, orientation: Orientation) -> bool {
        orientation == Orientation::Portrait
    }

    fn write_scan_bits<B: LcdBus>(&self, bus: &mut B, bits: ScanBits) {
        bus.write_register(cmd::SET_ADDRESS_MODE, bits.register_value());
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
        let (x_start, x_end) = match view.orientation {
            Orientation::Portrait => (Self::mirror_x(view, x1), Self::mirror_x(view, x0)),
            Orientation::Landscape => (x0, x1),
        };

        let [xs_high, xs_low] = split(x_start);
        let [xe_high, xe_low] = split(x_end);
        bus.write_command_data(view.opcodes.set_x, &[xs_high, xs_low, xe_high, xe_low]);

        let [ys_high, ys_low] = split(y0);
        let [ye_high, ye_low] = split(y1);
        bus.write_command_data(view.opcodes.set_y, &[ys_high, ys_low, ye_high, ye_low]);
    }

    fn set_cursor<B: LcdBus>(&self, bus: &mut B, view: &Viewport, x: u16, y: u16) {
        // The cursor opens a window to the far edge
        let (x_start, x_end) = match view.orientation {
            Orientation::Portrait => (0, Self::mirror_x(view, x)),
            Orientation::Landscape => (x, view.width.wrapping_sub(1)),
        };

        let [xs_high, xs_low] = split(x_start);
        let [xe_high, xe_low] = split(x_end);
        bus.write_command_data(view.opcodes.set_x, &[xs_high, xs_low, xe_high, xe_low]);

        let [ys_high, ys_low] = split(y);
        let [ye_high, ye_low] = split(view.height.wrapping_sub(1));
        bus.write_command_data(view.opcodes.set_y, &[ys_high, ys_low, ye_high, ye_low]);
    }

    fn read_pixel<B: LcdBus>(&self, bus: &mut B) -> u16 {
        bus.write_command(cmd::READ_MEMORY_START);
        bus.read_data()
    }

    fn set_display_on<B: LcdBus>(&self, bus: &mut B, on: bool) {
        bus.write_command(if on {
            cmd::DISPLAY_ON
        } else {
            cmd::DISPLAY_OFF
        });
    }

    fn set_backlight<B: LcdBus>(&self, bus: &mut B, percent: u8) -> bool {
        Self::write_pwm(bus, percent);
        true
    }
}
