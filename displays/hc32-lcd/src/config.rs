//! Driver configuration
//!
//! Defaults match the HC32F4A0 evaluation board panel. The SSD1963 has no
//! built-in knowledge of the glass it drives, so its timing comes from
//! [`PanelTiming`]; the NT35510 ignores it.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::geometry::ScanDirection;

/// RGB panel timing for controllers driving a raw TFT interface
///
/// Resolutions are in the panel's physical (landscape) frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PanelTiming {
    /// Horizontal resolution in pixels
    pub hor_resolution: u16,
    /// Vertical resolution in lines
    pub ver_resolution: u16,
    /// Horizontal sync pulse width in pixel clocks
    pub hor_pulse_width: u16,
    /// Horizontal back porch in pixel clocks
    pub hor_back_porch: u16,
    /// Horizontal front porch in pixel clocks
    pub hor_front_porch: u16,
    /// Vertical sync pulse width in lines
    pub ver_pulse_width: u16,
    /// Vertical back porch in lines
    pub ver_back_porch: u16,
    /// Vertical front porch in lines
    pub ver_front_porch: u16,
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            hor_resolution: 800,
            ver_resolution: 480,
            hor_pulse_width: 1,
            hor_back_porch: 46,
            hor_front_porch: 210,
            ver_pulse_width: 1,
            ver_back_porch: 23,
            ver_front_porch: 22,
        }
    }
}

impl PanelTiming {
    /// Total horizontal period (HT) in pixel clocks
    pub const fn horizontal_total(&self) -> u16 {
        self.hor_resolution + self.hor_back_porch + self.hor_front_porch
    }

    /// Horizontal sync to first pixel (HPS)
    pub const fn horizontal_start(&self) -> u16 {
        self.hor_back_porch
    }

    /// Total vertical period (VT) in lines
    pub const fn vertical_total(&self) -> u16 {
        self.ver_resolution + self.ver_back_porch + self.ver_front_porch
    }

    /// Vertical sync to first line (VPS)
    pub const fn vertical_start(&self) -> u16 {
        self.ver_back_porch
    }
}

/// LCD driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// Scan direction applied on every orientation change
    pub default_scan: ScanDirection,
    /// Panel timing (SSD1963 only)
    pub panel: PanelTiming,
    /// Initial backlight brightness for controllers with built-in PWM
    pub backlight_percent: u8,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            default_scan: ScanDirection::L2R_U2D,
            panel: PanelTiming::default(),
            backlight_percent: 100,
        }
    }
}
