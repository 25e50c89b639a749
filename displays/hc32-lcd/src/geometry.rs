//! Panel geometry, orientation and scan direction
//!
//! The scan direction is the order in which the controller walks its frame
//! memory while pixels are written. It is encoded in three bits of the
//! memory access control register:
//!
//! | Bit | Name    | Meaning                          |
//! |-----|---------|----------------------------------|
//! | 7   | MY      | Rows bottom to top               |
//! | 6   | MX      | Columns right to left            |
//! | 5   | MV      | Row/column exchange (Y-major)    |

use crate::error::LcdError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Panel width in native (portrait) orientation
pub const PANEL_WIDTH: u16 = 480;

/// Panel height in native (portrait) orientation
pub const PANEL_HEIGHT: u16 = 800;

/// Logical panel orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// Native vertical orientation (480 wide, 800 high)
    #[default]
    Portrait,
    /// Rotated horizontal orientation (800 wide, 480 high)
    Landscape,
}

impl Orientation {
    /// Decode the classic 0 / nonzero direction flag
    pub const fn from_raw(dir: u8) -> Self {
        if dir == 0 {
            Self::Portrait
        } else {
            Self::Landscape
        }
    }

    /// Logical (width, height) for this orientation
    pub const fn dimensions(self) -> (u16, u16) {
        match self {
            Self::Portrait => (PANEL_WIDTH, PANEL_HEIGHT),
            Self::Landscape => (PANEL_HEIGHT, PANEL_WIDTH),
        }
    }
}

/// Frame memory scan direction
///
/// Names read "primary direction, then secondary": `L2R_U2D` fills each row
/// left to right, rows top to bottom.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ScanDirection {
    /// Left to right, top to bottom
    #[default]
    L2R_U2D = 0,
    /// Left to right, bottom to top
    L2R_D2U = 1,
    /// Right to left, top to bottom
    R2L_U2D = 2,
    /// Right to left, bottom to top
    R2L_D2U = 3,
    /// Top to bottom, left to right
    U2D_L2R = 4,
    /// Top to bottom, right to left
    U2D_R2L = 5,
    /// Bottom to top, left to right
    D2U_L2R = 6,
    /// Bottom to top, right to left
    D2U_R2L = 7,
}

/// Memory access control polarity bits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ScanBits {
    /// Rows scanned bottom to top (MY, bit 7)
    pub mirror_y: bool,
    /// Columns scanned right to left (MX, bit 6)
    pub mirror_x: bool,
    /// Rows and columns exchanged (MV, bit 5)
    pub swap_xy: bool,
}

impl ScanBits {
    const fn new(mirror_y: bool, mirror_x: bool, swap_xy: bool) -> Self {
        Self {
            mirror_y,
            mirror_x,
            swap_xy,
        }
    }

    /// Register value with the three bits in their MADCTL positions
    pub const fn register_value(self) -> u16 {
        ((self.mirror_y as u16) << 7) | ((self.mirror_x as u16) << 6) | ((self.swap_xy as u16) << 5)
    }
}

/// Polarity bits for each scan direction, indexed by discriminant
const SCAN_BITS: [ScanBits; 8] = [
    ScanBits::new(false, false, false), // L2R_U2D
    ScanBits::new(true, false, false),  // L2R_D2U
    ScanBits::new(false, true, false),  // R2L_U2D
    ScanBits::new(true, true, false),   // R2L_D2U
    ScanBits::new(false, false, true),  // U2D_L2R
    ScanBits::new(false, true, true),   // U2D_R2L
    ScanBits::new(true, false, true),   // D2U_L2R
    ScanBits::new(true, true, true),    // D2U_R2L
];

/// Direction to use once the scan engine is rotated 90° against the
/// logical screen, indexed by discriminant
const ROTATED: [ScanDirection; 8] = [
    ScanDirection::D2U_L2R, // L2R_U2D
    ScanDirection::D2U_R2L, // L2R_D2U
    ScanDirection::U2D_L2R, // R2L_U2D
    ScanDirection::U2D_R2L, // R2L_D2U
    ScanDirection::L2R_D2U, // U2D_L2R
    ScanDirection::L2R_U2D, // U2D_R2L
    ScanDirection::R2L_D2U, // D2U_L2R
    ScanDirection::R2L_U2D, // D2U_R2L
];

impl ScanDirection {
    /// All directions in discriminant order
    pub const ALL: [Self; 8] = [
        Self::L2R_U2D,
        Self::L2R_D2U,
        Self::R2L_U2D,
        Self::R2L_D2U,
        Self::U2D_L2R,
        Self::U2D_R2L,
        Self::D2U_L2R,
        Self::D2U_R2L,
    ];

    /// Equivalent direction for a scan engine rotated against the screen
    pub const fn rotated(self) -> Self {
        ROTATED[self as usize]
    }

    /// Polarity bits for this direction
    pub const fn bits(self) -> ScanBits {
        SCAN_BITS[self as usize]
    }
}

impl TryFrom<u8> for ScanDirection {
    type Error = LcdError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(raw as usize)
            .copied()
            .ok_or(LcdError::InvalidScanDirection(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_raw() {
        assert_eq!(Orientation::from_raw(0), Orientation::Portrait);
        assert_eq!(Orientation::from_raw(1), Orientation::Landscape);
        assert_eq!(Orientation::from_raw(0xFF), Orientation::Landscape);
    }

    #[test]
    fn test_orientation_dimensions() {
        assert_eq!(Orientation::Portrait.dimensions(), (480, 800));
        assert_eq!(Orientation::Landscape.dimensions(), (800, 480));
    }

    #[test]
    fn test_scan_direction_try_from() {
        for raw in 0..8u8 {
            let dir = ScanDirection::try_from(raw).unwrap();
            assert_eq!(dir as u8, raw);
        }
        assert_eq!(
            ScanDirection::try_from(8),
            Err(LcdError::InvalidScanDirection(8))
        );
    }

    #[test]
    fn test_rotation_table() {
        let expected = [6u8, 7, 4, 5, 1, 0, 3, 2];
        for (dir, want) in ScanDirection::ALL.iter().zip(expected) {
            assert_eq!(dir.rotated() as u8, want);
        }
    }

    #[test]
    fn test_rotation_is_a_permutation() {
        let mut seen = [false; 8];
        for dir in ScanDirection::ALL {
            seen[dir.rotated() as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_register_values() {
        let values: [u16; 8] = [0x00, 0x80, 0x40, 0xC0, 0x20, 0x60, 0xA0, 0xE0];
        for (dir, want) in ScanDirection::ALL.iter().zip(values) {
            assert_eq!(dir.bits().register_value(), want, "{:?}", dir);
        }
    }
}
