//! Telemetry attribute records and value encoding

use crate::traits::sensor::AxisTriple;

/// Largest encoded attribute payload (three 16-bit axes)
pub const MAX_VALUE_LEN: usize = 6;

/// Stable identifiers for the published quantities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttributeId {
    Temperature,
    Humidity,
    Pressure,
    Acceleration,
    AngularRate,
}

impl AttributeId {
    /// All attributes, in registry order
    pub const ALL: [AttributeId; 5] = [
        AttributeId::Temperature,
        AttributeId::Humidity,
        AttributeId::Pressure,
        AttributeId::Acceleration,
        AttributeId::AngularRate,
    ];

    pub(crate) const fn index(self) -> usize {
        match self {
            AttributeId::Temperature => 0,
            AttributeId::Humidity => 1,
            AttributeId::Pressure => 2,
            AttributeId::Acceleration => 3,
            AttributeId::AngularRate => 4,
        }
    }

    /// Wire byte order for this attribute
    ///
    /// Scalars follow the transport's little-endian convention; the
    /// three-axis vectors are packed big-endian per axis.
    pub const fn byte_order(self) -> ByteOrder {
        match self {
            AttributeId::Acceleration | AttributeId::AngularRate => ByteOrder::BigEndian,
            _ => ByteOrder::LittleEndian,
        }
    }
}

/// Fixed-width encoding rule for attribute payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ByteOrder {
    LittleEndian,
    BigEndian,
}

impl ByteOrder {
    fn put_u16(self, value: u16, buf: &mut [u8]) {
        let bytes = match self {
            ByteOrder::LittleEndian => value.to_le_bytes(),
            ByteOrder::BigEndian => value.to_be_bytes(),
        };
        buf[..2].copy_from_slice(&bytes);
    }
}

/// A value being published to an attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AttributeValue {
    Signed16(i16),
    Unsigned16(u16),
    Unsigned32(u32),
    Vector(AxisTriple),
}

impl AttributeValue {
    /// Encode into `buf` with the given byte order, returning the length
    pub fn encode(self, order: ByteOrder, buf: &mut [u8; MAX_VALUE_LEN]) -> usize {
        match self {
            AttributeValue::Signed16(v) => {
                order.put_u16(v as u16, buf);
                2
            }
            AttributeValue::Unsigned16(v) => {
                order.put_u16(v, buf);
                2
            }
            AttributeValue::Unsigned32(v) => {
                let bytes = match order {
                    ByteOrder::LittleEndian => v.to_le_bytes(),
                    ByteOrder::BigEndian => v.to_be_bytes(),
                };
                buf[..4].copy_from_slice(&bytes);
                4
            }
            AttributeValue::Vector(triple) => {
                order.put_u16(triple.x as u16, &mut buf[0..2]);
                order.put_u16(triple.y as u16, &mut buf[2..4]);
                order.put_u16(triple.z as u16, &mut buf[4..6]);
                6
            }
        }
    }
}

/// One attribute record: last encoded value plus subscription state
#[derive(Debug, Clone, Copy)]
pub struct TelemetryAttribute {
    id: AttributeId,
    value: [u8; MAX_VALUE_LEN],
    len: usize,
    subscribed: bool,
}

impl TelemetryAttribute {
    pub(crate) const fn new(id: AttributeId) -> Self {
        Self {
            id,
            value: [0; MAX_VALUE_LEN],
            len: 0,
            subscribed: false,
        }
    }

    pub const fn id(&self) -> AttributeId {
        self.id
    }

    /// Last published encoded value (empty before the first publish)
    pub fn value(&self) -> &[u8] {
        &self.value[..self.len]
    }

    pub const fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub(crate) fn store(&mut self, value: AttributeValue) {
        self.len = value.encode(self.id.byte_order(), &mut self.value);
    }

    pub(crate) fn set_subscribed(&mut self, enabled: bool) {
        self.subscribed = enabled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_encodings_are_little_endian() {
        let mut buf = [0u8; MAX_VALUE_LEN];

        let len = AttributeValue::Signed16(-1573).encode(ByteOrder::LittleEndian, &mut buf);
        assert_eq!(&buf[..len], &(-1573i16).to_le_bytes());

        let len = AttributeValue::Unsigned32(100653).encode(ByteOrder::LittleEndian, &mut buf);
        assert_eq!(&buf[..len], &100653u32.to_le_bytes());
    }

    #[test]
    fn vector_encoding_is_big_endian_per_axis() {
        let triple = AxisTriple {
            x: 4096,
            y: -1,
            z: 0x1234,
        };
        let mut buf = [0u8; MAX_VALUE_LEN];
        let len = AttributeValue::Vector(triple).encode(ByteOrder::BigEndian, &mut buf);
        assert_eq!(len, 6);
        assert_eq!(buf, [0x10, 0x00, 0xFF, 0xFF, 0x12, 0x34]);
    }

    #[test]
    fn byte_order_assignment() {
        for id in AttributeId::ALL {
            let expected = match id {
                AttributeId::Acceleration | AttributeId::AngularRate => ByteOrder::BigEndian,
                _ => ByteOrder::LittleEndian,
            };
            assert_eq!(id.byte_order(), expected);
        }
    }
}
