//! Bosch fixed-point compensation
//!
//! Integer transcription of the vendor reference algorithm. The shift
//! and multiply order must be preserved exactly; the chain is a
//! fixed-point approximation, not re-derivable math. Pressure runs in
//! 64-bit signed arithmetic; temperature and humidity use wrapping
//! 32-bit arithmetic, matching the reference behavior on pathological
//! trim/input combinations.

use super::calibration::Calibration;

/// Upper clamp of the humidity intermediate (100 %RH in Q22.10, pre-shift)
pub const HUMIDITY_CLAMP: i32 = 419_430_400;

/// Fine-resolution temperature intermediate
///
/// Only `compensate_temperature` produces one; pressure and humidity
/// compensation consume it, which pins the evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FineTemperature(i32);

impl FineTemperature {
    /// Raw fixed-point value
    pub const fn raw(self) -> i32 {
        self.0
    }
}

/// Compensated temperature plus its fine-resolution intermediate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TemperatureReading {
    /// Hundredths of a degree Celsius
    pub centi_celsius: i32,
    pub fine: FineTemperature,
}

/// Temperature from the raw 20-bit ADC value, in hundredths of a degree
pub fn compensate_temperature(adc_t: i32, cal: &Calibration) -> TemperatureReading {
    let t1 = cal.dig_t1 as i32;
    let t2 = cal.dig_t2 as i32;
    let t3 = cal.dig_t3 as i32;

    let var1 = ((adc_t >> 3).wrapping_sub(t1 << 1)).wrapping_mul(t2) >> 11;
    let delta = (adc_t >> 4).wrapping_sub(t1);
    let var2 = ((delta.wrapping_mul(delta) >> 12).wrapping_mul(t3)) >> 14;

    let fine = var1.wrapping_add(var2);
    let centi_celsius = (fine.wrapping_mul(5).wrapping_add(128)) >> 8;
    TemperatureReading {
        centi_celsius,
        fine: FineTemperature(fine),
    }
}

/// Pressure from the raw 20-bit ADC value, in pascals
///
/// Returns 0 when the intermediate denominator is zero; that sentinel
/// means "not computable", never a vacuum reading, and callers must not
/// publish it.
pub fn compensate_pressure(adc_p: i32, fine: FineTemperature, cal: &Calibration) -> u32 {
    let p1 = cal.dig_p1 as i64;
    let p2 = cal.dig_p2 as i64;
    let p3 = cal.dig_p3 as i64;
    let p4 = cal.dig_p4 as i64;
    let p5 = cal.dig_p5 as i64;
    let p6 = cal.dig_p6 as i64;
    let p7 = cal.dig_p7 as i64;
    let p8 = cal.dig_p8 as i64;
    let p9 = cal.dig_p9 as i64;

    let var1 = fine.raw() as i64 - 128_000;
    let mut var2 = var1 * var1 * p6;
    var2 += (var1 * p5) << 17;
    var2 += p4 << 35;
    let var1 = ((var1 * var1 * p3) >> 8) + ((var1 * p2) << 12);
    let var1 = (((1i64 << 47) + var1) * p1) >> 33;

    if var1 == 0 {
        return 0;
    }

    let mut p = 1_048_576 - adc_p as i64;
    p = (((p << 31) - var2) * 3125) / var1;
    let var1 = (p9 * (p >> 13) * (p >> 13)) >> 25;
    let var2 = (p8 * p) >> 19;
    p = ((p + var1 + var2) >> 8) + (p7 << 4);

    (p / 256) as u32
}

/// Relative humidity from the raw 16-bit ADC value, in 1/1024 %RH
///
/// The intermediate is clamped to `[0, HUMIDITY_CLAMP]` before the final
/// shift, so the result never exceeds 102400 (100.00 %). No other
/// compensation path clamps.
pub fn compensate_humidity(adc_h: i32, fine: FineTemperature, cal: &Calibration) -> u32 {
    let h1 = cal.dig_h1 as i32;
    let h2 = cal.dig_h2 as i32;
    let h3 = cal.dig_h3 as i32;
    let h4 = cal.dig_h4 as i32;
    let h5 = cal.dig_h5 as i32;
    let h6 = cal.dig_h6 as i32;

    let v = fine.raw().wrapping_sub(76_800);

    let x = ((adc_h << 14)
        .wrapping_sub(h4 << 20)
        .wrapping_sub(h5.wrapping_mul(v))
        .wrapping_add(16_384))
        >> 15;

    let y = (v.wrapping_mul(h6) >> 10)
        .wrapping_mul((v.wrapping_mul(h3) >> 11).wrapping_add(32_768))
        >> 10;
    let y = (y.wrapping_add(2_097_152).wrapping_mul(h2).wrapping_add(8_192)) >> 14;

    let mut value = x.wrapping_mul(y);
    let correction = (((value >> 15).wrapping_mul(value >> 15) >> 7).wrapping_mul(h1)) >> 4;
    value = value.wrapping_sub(correction);

    (value.clamp(0, HUMIDITY_CLAMP) >> 12) as u32
}

/// Convert the Q22.10 humidity value to hundredths of a percent
pub fn humidity_centi_percent(q10: u32) -> u16 {
    ((q10 * 100) >> 10) as u16
}
