//! LCD bus abstractions
//!
//! Display controllers on this board sit behind an 8080-style parallel bus
//! with a register-select line: one address takes commands (register
//! indices), the other takes data words.

/// 16-bit command/data bus to a display controller
///
/// Accesses are fire-and-forget: the bus gives no acknowledgment, so
/// implementations are infallible and ordering is program order.
pub trait LcdBus {
    /// Write to the command/index register
    fn write_command(&mut self, command: u16);

    /// Write to the data register
    fn write_data(&mut self, data: u16);

    /// Read from the data register
    fn read_data(&mut self) -> u16;

    /// Write a single value to a register
    ///
    /// Equivalent to a command write followed by one data write.
    fn write_register(&mut self, register: u16, value: u16) {
        self.write_command(register);
        self.write_data(value);
    }

    /// Write a command followed by its parameter words
    fn write_command_data(&mut self, command: u16, data: &[u16]) {
        self.write_command(command);
        for &word in data {
            self.write_data(word);
        }
    }
}

impl<T: LcdBus + ?Sized> LcdBus for &mut T {
    fn write_command(&mut self, command: u16) {
        T::write_command(self, command)
    }

    fn write_data(&mut self, data: u16) {
        T::write_data(self, data)
    }

    fn read_data(&mut self) -> u16 {
        T::read_data(self)
    }
}
