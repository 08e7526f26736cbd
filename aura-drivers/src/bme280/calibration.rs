//! Per-unit trim values
//!
//! Every BME280 carries factory-programmed trim values in NVM. They are
//! read once at startup and never change; compensation must not run
//! against a partial set, so the only constructors parse complete
//! register blocks.

use aura_core::traits::{BusError, BusTransport};

use super::reg;

/// Factory trim set of one physical BME280
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    pub dig_t1: u16,
    pub dig_t2: i16,
    pub dig_t3: i16,
    pub dig_p1: u16,
    pub dig_p2: i16,
    pub dig_p3: i16,
    pub dig_p4: i16,
    pub dig_p5: i16,
    pub dig_p6: i16,
    pub dig_p7: i16,
    pub dig_p8: i16,
    pub dig_p9: i16,
    pub dig_h1: u8,
    pub dig_h2: i16,
    pub dig_h3: u8,
    pub dig_h4: i16,
    pub dig_h5: i16,
    pub dig_h6: i8,
}

impl Calibration {
    /// Read the full trim set from the chip
    ///
    /// Three reads: the 24-byte temperature/pressure block, the lone
    /// dig_H1 byte, and the 7-byte humidity block. Any failure aborts
    /// the load; no partial set escapes.
    pub fn load<B: BusTransport>(bus: &mut B) -> Result<Self, BusError> {
        let mut tp = [0u8; 24];
        bus.read_burst(reg::CALIB_TP, &mut tp)?;
        let h1 = bus.read_register(reg::CALIB_H1)?;
        let mut h = [0u8; 7];
        bus.read_burst(reg::CALIB_H2, &mut h)?;
        Ok(Self::from_registers(&tp, h1, &h))
    }

    /// Reassemble trim values from the raw register blocks
    ///
    /// Everything is a two-byte little-endian pair except dig_H4 and
    /// dig_H5, which share the nibbles of register 0xE4: dig_H4 takes
    /// its low nibble, dig_H5 its high nibble.
    pub fn from_registers(tp: &[u8; 24], h1: u8, h: &[u8; 7]) -> Self {
        let le_u16 = |i: usize| u16::from_le_bytes([tp[i], tp[i + 1]]);
        let le_i16 = |i: usize| i16::from_le_bytes([tp[i], tp[i + 1]]);
        Self {
            dig_t1: le_u16(0),
            dig_t2: le_i16(2),
            dig_t3: le_i16(4),
            dig_p1: le_u16(6),
            dig_p2: le_i16(8),
            dig_p3: le_i16(10),
            dig_p4: le_i16(12),
            dig_p5: le_i16(14),
            dig_p6: le_i16(16),
            dig_p7: le_i16(18),
            dig_p8: le_i16(20),
            dig_p9: le_i16(22),
            dig_h1: h1,
            dig_h2: i16::from_le_bytes([h[0], h[1]]),
            dig_h3: h[2],
            dig_h4: ((h[3] as i16) << 4) | (h[4] & 0x0F) as i16,
            dig_h5: ((h[5] as i16) << 4) | (h[4] >> 4) as i16,
            dig_h6: h[6] as i8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::MockBus;

    // Trim blocks matching the datasheet example coefficients.
    const TP_BLOCK: [u8; 24] = [
        0x70, 0x6B, // dig_T1 = 27504
        0x43, 0x67, // dig_T2 = 26435
        0x18, 0xFC, // dig_T3 = -1000
        0x7D, 0x8E, // dig_P1 = 36477
        0x43, 0xD6, // dig_P2 = -10685
        0xD0, 0x0B, // dig_P3 = 3024
        0x27, 0x0B, // dig_P4 = 2855
        0x8C, 0x00, // dig_P5 = 140
        0xF9, 0xFF, // dig_P6 = -7
        0x8C, 0x3C, // dig_P7 = 15500
        0xF8, 0xC6, // dig_P8 = -14600
        0x70, 0x17, // dig_P9 = 6000
    ];
    const H1: u8 = 75;
    const H_BLOCK: [u8; 7] = [
        0x6B, 0x01, // dig_H2 = 363
        0x00, // dig_H3 = 0
        0x13, 0x2F, 0x03, // dig_H4 = 319, dig_H5 = 50 (shared 0xE4)
        0x1E, // dig_H6 = 30
    ];

    #[test]
    fn temperature_pressure_pairs_are_little_endian() {
        let cal = Calibration::from_registers(&TP_BLOCK, H1, &H_BLOCK);
        assert_eq!(cal.dig_t1, 27504);
        assert_eq!(cal.dig_t2, 26435);
        assert_eq!(cal.dig_t3, -1000);
        assert_eq!(cal.dig_p1, 36477);
        assert_eq!(cal.dig_p2, -10685);
        assert_eq!(cal.dig_p9, 6000);
    }

    #[test]
    fn humidity_nibble_split() {
        let cal = Calibration::from_registers(&TP_BLOCK, H1, &H_BLOCK);
        assert_eq!(cal.dig_h1, 75);
        assert_eq!(cal.dig_h2, 363);
        assert_eq!(cal.dig_h3, 0);
        assert_eq!(cal.dig_h4, 319);
        assert_eq!(cal.dig_h5, 50);
        assert_eq!(cal.dig_h6, 30);
    }

    #[test]
    fn shared_register_feeds_both_nibble_values() {
        // 0xE4 = 0xAB: low nibble into dig_H4, high nibble into dig_H5.
        let h = [0x00, 0x00, 0x00, 0x01, 0xAB, 0x02, 0x00];
        let cal = Calibration::from_registers(&[0u8; 24], 0, &h);
        assert_eq!(cal.dig_h4, (1 << 4) | 0x0B);
        assert_eq!(cal.dig_h5, (2 << 4) | 0x0A);
    }

    #[test]
    fn load_reads_all_three_blocks() {
        let mut bus = MockBus::new();
        bus.load(reg::CALIB_TP, &TP_BLOCK);
        bus.load(reg::CALIB_H1, &[H1]);
        bus.load(reg::CALIB_H2, &H_BLOCK);

        let cal = Calibration::load(&mut bus).unwrap();
        assert_eq!(cal, Calibration::from_registers(&TP_BLOCK, H1, &H_BLOCK));
    }

    #[test]
    fn load_propagates_bus_failure() {
        let mut bus = MockBus::new();
        bus.failing = true;
        assert_eq!(Calibration::load(&mut bus), Err(BusError::Transaction));
    }
}
