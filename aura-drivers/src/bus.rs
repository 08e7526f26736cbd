//! embedded-hal I2C bus adapter
//!
//! Wraps an `embedded_hal::i2c::I2c` bus plus a fixed 7-bit device
//! address as the core `BusTransport`. The bus is owned exclusively by
//! the adapter, which is owned by the active sensor driver, so all
//! pipeline traffic to the chip is serialized by construction.

use aura_core::traits::{BusError, BusTransport};
use embedded_hal::i2c::I2c;

/// `BusTransport` over any blocking embedded-hal I2C implementation
pub struct I2cTransport<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cTransport<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }
}

impl<I2C: I2c> BusTransport for I2cTransport<I2C> {
    fn read_register(&mut self, reg: u8) -> Result<u8, BusError> {
        let mut value = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut value)
            .map_err(|_| BusError::Transaction)?;
        Ok(value[0])
    }

    fn read_burst(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), BusError> {
        self.i2c
            .write_read(self.address, &[reg], buf)
            .map_err(|_| BusError::Transaction)
    }

    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusError> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(|_| BusError::Transaction)
    }
}
