//! EXMC memory-mapped LCD bus
//!
//! The controller sits on a static memory chip window of the External
//! Memory Controller with its register-select (RS) pin wired to an address
//! line. Writing to an address with RS low reaches the command register,
//! with RS high the data register. On a 16-bit bus, address line `An` is
//! AHB address bit `n + 1`.

use hc32_hal::LcdBus;

/// Start of EXMC SMC chip 0 on the evaluation board
pub const EV_CHIP_BASE: usize = 0x6000_0000;

/// Address line carrying RS on the evaluation board
pub const EV_RS_ADDRESS_LINE: u32 = 12;

/// Command register address for RS on address line `rs_line`
///
/// Every address line below RS is driven high so that the data address is
/// the next halfword up.
pub const fn command_address(base: usize, rs_line: u32) -> usize {
    base | ((1 << (rs_line + 1)) - 2)
}

/// Data register address for RS on address line `rs_line`
pub const fn data_address(base: usize, rs_line: u32) -> usize {
    command_address(base, rs_line) + 2
}

/// LCD controller behind an EXMC chip window
#[derive(Debug)]
pub struct ExmcLcdBus {
    command: usize,
    data: usize,
}

impl ExmcLcdBus {
    /// Bus at explicit command and data register addresses
    ///
    /// # Safety
    ///
    /// Both addresses must be valid for volatile 16-bit reads and writes for
    /// the lifetime of the bus, and nothing else may access them.
    pub const unsafe fn new(command: usize, data: usize) -> Self {
        Self { command, data }
    }

    /// Evaluation board wiring: chip 0, RS on A12
    ///
    /// # Safety
    ///
    /// The EXMC must be enabled and chip 0 configured for the panel, and
    /// no other `ExmcLcdBus` may exist for it.
    pub const unsafe fn ev_board() -> Self {
        Self::new(
            command_address(EV_CHIP_BASE, EV_RS_ADDRESS_LINE),
            data_address(EV_CHIP_BASE, EV_RS_ADDRESS_LINE),
        )
    }

    pub fn command_register(&self) -> usize {
        self.command
    }

    pub fn data_register(&self) -> usize {
        self.data
    }
}

impl LcdBus for ExmcLcdBus {
    #[inline]
    fn write_command(&mut self, command: u16) {
        // SAFETY: address validity is guaranteed by the constructor contract
        unsafe { core::ptr::write_volatile(self.command as *mut u16, command) }
    }

    #[inline]
    fn write_data(&mut self, data: u16) {
        // SAFETY: address validity is guaranteed by the constructor contract
        unsafe { core::ptr::write_volatile(self.data as *mut u16, data) }
    }

    #[inline]
    fn read_data(&mut self) -> u16 {
        // SAFETY: address validity is guaranteed by the constructor contract
        unsafe { core::ptr::read_volatile(self.data as *const u16) }
    }
}
