//! Waveform table shared by the background bars and the sprite.
//!
//! One period of a triangle approximation of a sine, ten samples long.
//! Callers always reduce the address modulo [`SINE_LEN`].

/// Number of samples in one waveform period.
pub const SINE_LEN: u16 = 10;

/// Waveform samples, indexed by phase address 0-9.
pub const SINE_TABLE: [u8; SINE_LEN as usize] = [50, 40, 30, 20, 10, 0, 10, 20, 30, 40];

/// Sample at `address`.
///
/// # Panics
///
/// Panics if `address >= 10`. Every caller reduces modulo 10 first, so an
/// out-of-range address is a bug upstream.
#[must_use]
pub fn lookup(address: u16) -> u16 {
    assert!(
        address < SINE_LEN,
        "waveform address {address} out of range (0-9)"
    );
    u16::from(SINE_TABLE[address as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_values() {
        let expected = [50, 40, 30, 20, 10, 0, 10, 20, 30, 40];
        for (address, &value) in expected.iter().enumerate() {
            assert_eq!(lookup(address as u16), value, "sample {address}");
            // Pure: a second read gives the same sample
            assert_eq!(lookup(address as u16), value);
        }
    }

    #[test]
    fn symmetric_about_trough() {
        for i in 1..5 {
            assert_eq!(lookup(5 - i), lookup(5 + i));
        }
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn out_of_range_address_panics() {
        let _ = lookup(10);
    }
}
