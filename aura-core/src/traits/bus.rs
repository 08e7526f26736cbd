//! Shared-bus transport trait

/// Errors that can occur during bus transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusError {
    /// Bus controller is not ready (fatal at startup)
    Unavailable,
    /// Chip identity register did not hold the expected value
    IdentityMismatch { expected: u8, found: u8 },
    /// A read or write transaction failed
    Transaction,
}

/// Register-level access to a fixed-address bus peripheral
///
/// All operations are synchronous and block until the transaction
/// completes or the underlying bus driver gives up. A burst read fills
/// the whole buffer or fails as a unit; there is no internal retry, the
/// caller decides what a failure means.
pub trait BusTransport {
    /// Read a single register
    fn read_register(&mut self, reg: u8) -> Result<u8, BusError>;

    /// Read consecutive registers starting at `reg` into `buf`
    fn read_burst(&mut self, reg: u8, buf: &mut [u8]) -> Result<(), BusError>;

    /// Write a single register
    fn write_register(&mut self, reg: u8, value: u8) -> Result<(), BusError>;
}
