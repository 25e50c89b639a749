//! Recording bus and delay for tests

use std::collections::VecDeque;
use std::vec::Vec;

use hc32_hal::{DelayMs, LcdBus};

use crate::config::LcdConfig;
use crate::driver::Lcd;

/// One bus access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusOp {
    Command(u16),
    Data(u16),
    Read(u16),
}

/// Records every access and serves reads from a queue
///
/// Once the queue is empty reads return `0xFFFF`, like a floating bus.
#[derive(Debug, Default)]
pub struct MockBus {
    pub ops: Vec<BusOp>,
    reads: VecDeque<u16>,
}

impl MockBus {
    pub fn with_reads(reads: &[u16]) -> Self {
        Self {
            ops: Vec::new(),
            reads: reads.iter().copied().collect(),
        }
    }

    /// Bus answering the NT35510 identity probe
    pub fn nt35510() -> Self {
        Self::with_reads(&[0x00, 0x80, 0x00])
    }

    /// Bus failing the NT35510 probe and answering the SSD1963 one
    pub fn ssd1963() -> Self {
        Self::with_reads(&[0x00, 0x00, 0x00, 0x01, 0x57, 0x61])
    }

    pub fn push_reads(&mut self, reads: &[u16]) {
        self.reads.extend(reads.iter().copied());
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn commands(&self) -> Vec<u16> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                BusOp::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    pub fn data(&self) -> Vec<u16> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                BusOp::Data(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    /// Every command immediately followed by a data write, as pairs
    pub fn register_writes(&self) -> Vec<(u16, u16)> {
        self.ops
            .windows(2)
            .filter_map(|pair| match pair {
                [BusOp::Command(c), BusOp::Data(d)] => Some((*c, *d)),
                _ => None,
            })
            .collect()
    }

    /// Data words following the last occurrence of `command`
    pub fn command_data(&self, command: u16) -> Vec<u16> {
        let Some(start) = self
            .ops
            .iter()
            .rposition(|op| *op == BusOp::Command(command))
        else {
            return Vec::new();
        };

        self.ops[start + 1..]
            .iter()
            .map_while(|op| match op {
                BusOp::Data(d) => Some(*d),
                _ => None,
            })
            .collect()
    }
}

impl LcdBus for MockBus {
    fn write_command(&mut self, command: u16) {
        self.ops.push(BusOp::Command(command));
    }

    fn write_data(&mut self, data: u16) {
        self.ops.push(BusOp::Data(data));
    }

    fn read_data(&mut self) -> u16 {
        let value = self.reads.pop_front().unwrap_or(0xFFFF);
        self.ops.push(BusOp::Read(value));
        value
    }
}

/// Records requested delays
#[derive(Debug, Default)]
pub struct MockDelay {
    pub calls: Vec<u32>,
}

impl DelayMs for MockDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.calls.push(ms);
    }
}

/// Initialized NT35510 driver with the bring-up traffic cleared
pub fn nt35510_lcd() -> Lcd<MockBus, MockDelay> {
    let mut lcd = Lcd::new(MockBus::nt35510(), MockDelay::default(), LcdConfig::default())
        .unwrap();
    lcd.bus_mut().clear();
    lcd
}

/// Initialized SSD1963 driver with the bring-up traffic cleared
pub fn ssd1963_lcd() -> Lcd<MockBus, MockDelay> {
    let mut lcd = Lcd::new(MockBus::ssd1963(), MockDelay::default(), LcdConfig::default())
        .unwrap();
    lcd.bus_mut().clear();
    lcd
}
