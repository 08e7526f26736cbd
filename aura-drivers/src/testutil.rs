//! Scripted bus for host-side driver tests

use aura_core::traits::{BusError, BusTransport};

/// In-memory register map standing in for a chip on the bus
#[derive(Debug)]
pub struct MockBus {
    pub regs: [u8; 256],
    /// Every transaction fails while set
    pub failing: bool,
    /// Register writes seen, in order
    pub writes: [(u8, u8); 8],
    pub write_count: usize,
}

impl MockBus {
    pub fn new() -> Self {
        Self {
            regs: [0; 256],
            failing: false,
            writes: [(0, 0); 8],
            write_count: 0,
        }
    }

    /// Preload consecutive registers starting at `base`
    pub fn load(&mut self, base: u8, bytes: &[u8]) {
        let base = base as usize;
        self.regs[base..base + bytes.len()].copy_from_slice(bytes);
    }
}

impl BusTransport for MockBus {
    fn read_register(&mut self, reg: u8) -> Result<u8, BusError> {
        if self.failing {
            return Err(BusError::Transaction);
        }
        Ok(self.regs[reg as usize])
    }

    fn read_burst(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), BusError> {
        if self.failing {
            return Err(BusError::Transaction);
        }
        let base = reg as usize;
        buf.copy_from_slice(&self.regs[base..base + buf.len()]);
        Ok(())
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        if self.failing {
            return Err(BusError::Transaction);
        }
        self.regs[reg as usize] = value;
        self.writes[self.write_count] = (reg, value);
        self.write_count += 1;
        Ok(())
    }
}
