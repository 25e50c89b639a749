//! LCD driver
//!
//! [`Lcd`] owns the bus and delay, the detected controller and the current
//! addressing state. Construction performs the whole bring-up, so a live
//! `Lcd` is always ready for pixel traffic.

use hc32_hal::{DelayMs, LcdBus};

use crate::color::Color;
use crate::config::LcdConfig;
use crate::controller::{Controller, ControllerId, ControllerProtocol, Opcodes, Viewport};
use crate::error::LcdError;
use crate::geometry::{Orientation, ScanDirection};
use crate::graphics::Canvas;

/// LCD panel driver
pub struct Lcd<B, D> {
    bus: B,
    delay: D,
    config: LcdConfig,
    controller: Controller,
    orientation: Orientation,
    width: u16,
    height: u16,
    opcodes: Opcodes,
}

impl<B: LcdBus, D: DelayMs> Lcd<B, D> {
    /// Identify and bring up the panel controller
    ///
    /// Probes the bus, runs the controller's configuration sequence and
    /// selects portrait orientation with the configured scan direction.
    pub fn new(mut bus: B, mut delay: D, config: LcdConfig) -> Result<Self, LcdError> {
        let controller = match Controller::probe(&mut bus, &mut delay) {
            Ok(controller) => controller,
            Err(e) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("LCD controller not recognized: {}", e);
                return Err(e);
            }
        };

        #[cfg(feature = "defmt")]
        defmt::info!("LCD controller {:?}, configuring", controller.id());

        controller.configure(&mut bus, &mut delay, &config);

        let orientation = Orientation::Portrait;
        let (width, height) = orientation.dimensions();
        let mut lcd = Self {
            bus,
            delay,
            config,
            controller,
            orientation,
            width,
            height,
            opcodes: controller.opcodes(orientation),
        };
        lcd.set_direction(orientation);

        Ok(lcd)
    }

    fn view(&self) -> Viewport {
        Viewport {
            width: self.width,
            height: self.height,
            orientation: self.orientation,
            opcodes: self.opcodes,
        }
    }

    /// Switch orientation
    ///
    /// Resets the logical dimensions and reapplies the configured default
    /// scan direction.
    pub fn set_direction(&mut self, orientation: Orientation) {
        self.orientation = orientation;
        self.opcodes = self.controller.opcodes(orientation);
        (self.width, self.height) = orientation.dimensions();

        #[cfg(feature = "defmt")]
        defmt::debug!("LCD orientation {}", orientation);

        self.set_scan_direction(self.config.default_scan);
    }

    /// Switch orientation from a raw flag (0 = portrait, otherwise landscape)
    pub fn set_direction_raw(&mut self, dir: u8) {
        self.set_direction(Orientation::from_raw(dir));
    }

    /// Set the frame memory scan direction
    ///
    /// The direction is expressed relative to the logical screen and
    /// remapped when the controller scans 90° against it. The address
    /// window is reset to the full panel afterwards.
    pub fn set_scan_direction(&mut self, dir: ScanDirection) {
        let effective = if self.controller.rotates_scan(self.orientation) {
            dir.rotated()
        } else {
            dir
        };
        let bits = effective.bits();

        self.controller.write_scan_bits(&mut self.bus, bits);

        if self.controller.scan_swaps_dimensions() {
            let short = self.width.min(self.height);
            let long = self.width.max(self.height);
            (self.width, self.height) = if bits.swap_xy {
                (long, short)
            } else {
                (short, long)
            };
        }

        let view = self.view();
        self.controller.set_window(
            &mut self.bus,
            &view,
            0,
            0,
            self.width - 1,
            self.height - 1,
        );
    }

    /// Position the write pointer
    ///
    /// Coordinates are not checked against the panel.
    pub fn set_cursor(&mut self, x: u16, y: u16) {
        let view = self.view();
        self.controller.set_cursor(&mut self.bus, &view, x, y);
    }

    /// Program the address window to `w` x `h` pixels at `(x, y)`
    ///
    /// An empty window leaves the controller untouched.
    pub fn set_window(&mut self, x: u16, y: u16, w: u16, h: u16) {
        if w == 0 || h == 0 {
            return;
        }

        let view = self.view();
        self.controller.set_window(
            &mut self.bus,
            &view,
            x,
            y,
            x.saturating_add(w - 1),
            y.saturating_add(h - 1),
        );
    }

    /// Start a memory write burst at the cursor
    pub fn begin_ram_write(&mut self) {
        let view = self.view();
        self.controller.begin_ram_write(&mut self.bus, &view);
    }

    /// Write one pixel into an open memory write burst
    pub fn push_color(&mut self, color: Color) {
        self.bus.write_data(color.raw());
    }

    /// Write a single pixel
    pub fn write_pixel(&mut self, x: u16, y: u16, color: Color) {
        self.set_cursor(x, y);
        self.begin_ram_write();
        self.push_color(color);
    }

    /// Read back a single pixel
    ///
    /// Returns `None` outside the panel.
    pub fn read_pixel(&mut self, x: u16, y: u16) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.set_cursor(x, y);
        Some(Color(self.controller.read_pixel(&mut self.bus)))
    }

    /// Fill the whole panel
    pub fn clear(&mut self, color: Color) {
        let total = u32::from(self.width) * u32::from(self.height);

        self.set_cursor(0, 0);
        self.begin_ram_write();
        for _ in 0..total {
            self.push_color(color);
        }
    }

    /// Fill a rectangle row by row
    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) {
        for row in y..y.saturating_add(h) {
            self.set_cursor(x, row);
            self.begin_ram_write();
            for _ in 0..w {
                self.push_color(color);
            }
        }
    }

    /// Turn the panel output on
    pub fn display_on(&mut self) {
        self.controller.set_display_on(&mut self.bus, true);
    }

    /// Turn the panel output off (frame memory is retained)
    pub fn display_off(&mut self) {
        self.controller.set_display_on(&mut self.bus, false);
    }

    /// Set the controller's built-in backlight PWM
    ///
    /// Returns `false` when the controller has no backlight output and the
    /// brightness must be set elsewhere.
    pub fn set_controller_backlight(&mut self, percent: u8) -> bool {
        self.controller.set_backlight(&mut self.bus, percent)
    }

    /// Detected controller
    pub fn controller(&self) -> Controller {
        self.controller
    }

    /// Canonical identity of the detected controller
    pub fn id(&self) -> ControllerId {
        self.controller.id()
    }

    /// Logical width in pixels
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Logical height in pixels
    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn opcodes(&self) -> Opcodes {
        self.opcodes
    }

    pub fn config(&self) -> &LcdConfig {
        &self.config
    }

    pub fn bus(&self) -> &B {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Release the bus and delay
    pub fn release(self) -> (B, D) {
        (self.bus, self.delay)
    }
}

impl<B: LcdBus, D: DelayMs> Canvas for Lcd<B, D> {
    fn draw_pixel(&mut self, x: u16, y: u16, color: Color) {
        self.write_pixel(x, y, color);
    }

    fn dimensions(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, color: Color) {
        Lcd::fill_rect(self, x, y, w, h, color);
    }

    fn clear(&mut self, color: Color) {
        Lcd::clear(self, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{nt35510, ssd1963};
    use crate::mock::{nt35510_lcd, ssd1963_lcd, BusOp, MockBus, MockDelay};

    #[test]
    fn test_new_nt35510() {
        let lcd = nt35510_lcd();
        assert_eq!(lcd.id(), ControllerId::Nt35510);
        assert_eq!(lcd.orientation(), Orientation::Portrait);
        assert_eq!((lcd.width(), lcd.height()), (480, 800));
        assert_eq!(lcd.opcodes().write_ram, 0x2C00);
    }

    #[test]
    fn test_new_ssd1963() {
        let lcd = ssd1963_lcd();
        assert_eq!(lcd.id(), ControllerId::Ssd1963);
        assert_eq!((lcd.width(), lcd.height()), (480, 800));
        assert_eq!(lcd.opcodes().write_ram, 0x2C);
    }

    #[test]
    fn test_new_fails_without_controller() {
        let result = Lcd::new(MockBus::default(), MockDelay::default(), LcdConfig::default());
        assert!(matches!(
            result,
            Err(LcdError::UnrecognizedController { probed: 0xFFFF })
        ));
    }

    #[test]
    fn test_new_ends_with_portrait_setup() {
        let lcd = Lcd::new(
            MockBus::nt35510(),
            MockDelay::default(),
            LcdConfig::default(),
        )
        .unwrap();
        let (bus, delay) = lcd.release();

        // Scan register, then the full 480x800 window
        let writes = bus.register_writes();
        assert_eq!(
            &writes[writes.len() - 9..],
            &[
                (0x3600, 0x00),
                (0x2A00, 0),
                (0x2A01, 0),
                (0x2A02, 0x01),
                (0x2A03, 0xDF),
                (0x2B00, 0),
                (0x2B01, 0),
                (0x2B02, 0x03),
                (0x2B03, 0x1F),
            ]
        );
        // Probe settles, then sleep-out and display-on
        assert_eq!(
            delay.calls,
            [
                10,
                10,
                10,
                nt35510::SLEEP_OUT_SETTLE_MS,
                nt35510::DISPLAY_ON_SETTLE_MS
            ]
        );
    }

    #[test]
    fn test_orientation_round_trip() {
        for mut lcd in [nt35510_lcd(), ssd1963_lcd()] {
            lcd.set_direction(Orientation::Portrait);
            let portrait = lcd.bus().ops.clone();
            lcd.bus_mut().clear();

            lcd.set_direction(Orientation::Landscape);
            assert_eq!((lcd.width(), lcd.height()), (800, 480));
            lcd.bus_mut().clear();

            lcd.set_direction(Orientation::Portrait);
            assert_eq!((lcd.width(), lcd.height()), (480, 800));
            assert_eq!(lcd.bus().ops, portrait);
        }
    }

    #[test]
    fn test_set_direction_raw() {
        let mut lcd = nt35510_lcd();
        lcd.set_direction_raw(1);
        assert_eq!(lcd.orientation(), Orientation::Landscape);
        lcd.set_direction_raw(0);
        assert_eq!(lcd.orientation(), Orientation::Portrait);
    }

    #[test]
    fn test_landscape_scan_remap_nt35510() {
        let mut lcd = nt35510_lcd();
        lcd.set_direction(Orientation::Landscape);

        let expected: [u16; 8] = [0xA0, 0xE0, 0x20, 0x60, 0x80, 0x00, 0xC0, 0x40];
        for (dir, want) in ScanDirection::ALL.into_iter().zip(expected) {
            lcd.bus_mut().clear();
            lcd.set_scan_direction(dir);
            assert_eq!(
                lcd.bus().register_writes()[0],
                (0x3600, want),
                "{:?}",
                dir
            );

            // Row/column exchange puts the long side horizontal
            let (w, h) = (lcd.width(), lcd.height());
            if want & 0x20 != 0 {
                assert_eq!((w, h), (800, 480));
            } else {
                assert_eq!((w, h), (480, 800));
            }
        }
    }

    #[test]
    fn test_landscape_scan_passthrough_ssd1963() {
        let mut lcd = ssd1963_lcd();
        lcd.set_direction(Orientation::Landscape);

        for dir in ScanDirection::ALL {
            lcd.bus_mut().clear();
            lcd.set_scan_direction(dir);
            assert_eq!(
                lcd.bus().command_data(ssd1963::cmd::SET_ADDRESS_MODE),
                [dir.bits().register_value()]
            );
            // Dimensions follow the orientation only
            assert_eq!((lcd.width(), lcd.height()), (800, 480));
        }
    }

    #[test]
    fn test_portrait_scan_remap_ssd1963() {
        let mut lcd = ssd1963_lcd();
        lcd.set_scan_direction(ScanDirection::L2R_U2D);

        // L2R_U2D becomes D2U_L2R: MY | MV
        assert_eq!(lcd.bus().command_data(0x36), [0xA0]);
        // Full window, mirrored X range is still the full width
        assert_eq!(lcd.bus().command_data(0x2A), [0x00, 0x00, 0x01, 0xDF]);
        assert_eq!(lcd.bus().command_data(0x2B), [0x00, 0x00, 0x03, 0x1F]);
    }

    #[test]
    fn test_write_pixel_nt35510() {
        let mut lcd = nt35510_lcd();
        lcd.write_pixel(10, 20, Color::RED);

        assert_eq!(
            lcd.bus().ops,
            [
                BusOp::Command(0x2A00),
                BusOp::Data(0),
                BusOp::Command(0x2A01),
                BusOp::Data(10),
                BusOp::Command(0x2B00),
                BusOp::Data(0),
                BusOp::Command(0x2B01),
                BusOp::Data(20),
                BusOp::Command(0x2C00),
                BusOp::Data(0xF800),
            ]
        );
    }

    #[test]
    fn test_write_pixel_ssd1963() {
        let mut lcd = ssd1963_lcd();
        lcd.write_pixel(10, 20, Color::BLUE);

        assert_eq!(lcd.bus().commands(), [0x2A, 0x2B, 0x2C]);
        assert_eq!(lcd.bus().command_data(0x2A), [0x00, 0x00, 0x01, 0xD5]);
        assert_eq!(lcd.bus().command_data(0x2C), [0x001F]);
    }

    #[test]
    fn test_clear_writes_every_pixel() {
        for mut lcd in [nt35510_lcd(), ssd1963_lcd()] {
            lcd.clear(Color::BLUE);

            let write_ram = lcd.opcodes().write_ram;
            let ops = &lcd.bus().ops;
            let start = ops
                .iter()
                .position(|op| *op == BusOp::Command(write_ram))
                .unwrap();
            let pixels = &ops[start + 1..];
            assert_eq!(pixels.len(), 480 * 800);
            assert!(pixels.iter().all(|op| *op == BusOp::Data(0x001F)));
        }
    }

    #[test]
    fn test_clear_landscape() {
        let mut lcd = nt35510_lcd();
        lcd.set_direction(Orientation::Landscape);
        lcd.bus_mut().clear();
        lcd.clear(Color::WHITE);

        let data = lcd.bus().data();
        // Four cursor bytes, then the pixels
        assert_eq!(data.len(), 4 + 800 * 480);
    }

    #[test]
    fn test_set_window() {
        let mut lcd = nt35510_lcd();
        lcd.set_window(10, 20, 100, 50);
        assert_eq!(
            lcd.bus().register_writes(),
            [
                (0x2A00, 0),
                (0x2A01, 10),
                (0x2A02, 0),
                (0x2A03, 109),
                (0x2B00, 0),
                (0x2B01, 20),
                (0x2B02, 0),
                (0x2B03, 69),
            ]
        );

        lcd.bus_mut().clear();
        lcd.set_window(10, 20, 0, 50);
        assert!(lcd.bus().ops.is_empty());
    }

    #[test]
    fn test_fill_rect_rows() {
        let mut lcd = nt35510_lcd();
        lcd.fill_rect(5, 6, 3, 2, Color::GREEN);

        let commands = lcd.bus().commands();
        // Per row: four cursor registers and a memory write
        assert_eq!(commands.len(), 2 * 5);
        assert_eq!(
            commands.iter().filter(|&&c| c == 0x2C00).count(),
            2
        );
        let pixels = lcd
            .bus()
            .data()
            .into_iter()
            .filter(|&d| d == 0x07E0)
            .count();
        assert_eq!(pixels, 6);
    }

    #[test]
    fn test_read_pixel() {
        let mut lcd = ssd1963_lcd();
        lcd.bus_mut().push_reads(&[0xBC40]);
        assert_eq!(lcd.read_pixel(1, 2), Some(Color::BROWN));

        lcd.bus_mut().clear();
        assert_eq!(lcd.read_pixel(480, 0), None);
        assert_eq!(lcd.read_pixel(0, 800), None);
        assert!(lcd.bus().ops.is_empty());
    }

    #[test]
    fn test_display_on_off() {
        let mut lcd = nt35510_lcd();
        lcd.display_off();
        lcd.display_on();
        assert_eq!(lcd.bus().commands(), [0x2800, 0x2900]);

        let mut lcd = ssd1963_lcd();
        lcd.display_off();
        lcd.display_on();
        assert_eq!(lcd.bus().commands(), [0x28, 0x29]);
    }

    #[test]
    fn test_controller_backlight() {
        let mut lcd = nt35510_lcd();
        assert!(!lcd.set_controller_backlight(50));

        let mut lcd = ssd1963_lcd();
        assert!(lcd.set_controller_backlight(50));
        assert_eq!(lcd.bus().command_data(0xBE)[1], 127);
    }

    #[test]
    fn test_custom_default_scan() {
        let config = LcdConfig {
            default_scan: ScanDirection::R2L_D2U,
            ..Default::default()
        };
        let mut lcd = Lcd::new(MockBus::nt35510(), MockDelay::default(), config).unwrap();
        lcd.bus_mut().clear();

        lcd.set_direction(Orientation::Portrait);
        assert_eq!(lcd.bus().register_writes()[0], (0x3600, 0xC0));
    }

    #[test]
    fn test_canvas_line() {
        let mut lcd = nt35510_lcd();
        lcd.draw_line(0, 0, 4, 2, Color::WHITE);

        let writes = lcd.bus().register_writes();
        let xs: Vec<u16> = writes
            .iter()
            .filter(|(r, _)| *r == 0x2A01)
            .map(|&(_, v)| v)
            .collect();
        let ys: Vec<u16> = writes
            .iter()
            .filter(|(r, _)| *r == 0x2B01)
            .map(|&(_, v)| v)
            .collect();
        assert_eq!(xs, [0, 1, 2, 3, 4]);
        assert_eq!(ys, [0, 0, 1, 1, 2]);
    }
}
