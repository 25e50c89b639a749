//! Driver errors

/// LCD driver errors
///
/// Bus accesses are memory-mapped and cannot fail, so errors only come
/// from identification and from converting raw user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcdError {
    /// Neither the NT35510 nor the SSD1963 identity probe matched
    ///
    /// `probed` holds the value assembled by the last probe.
    UnrecognizedController {
        /// Raw identity read back from the bus
        probed: u32,
    },
    /// Scan direction outside 0-7
    InvalidScanDirection(u8),
}
