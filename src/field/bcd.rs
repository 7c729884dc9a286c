//! Binary-coded decimal packing.
//!
//! Each byte holds two decimal digits, the first in its high nibble. Digits
//! are right-aligned, and unused leading nibbles are zero. There is no sign
//! nibble.

use tartan_bitfield::bitfield;

use super::FieldError;

bitfield! {
    struct PackedByte(u8) {
        [0..4] low: u8,
        [4..8] high: u8,
    }
}

/// Pack ASCII decimal digits into `out`.
///
/// Fails if a byte of `digits` is not an ASCII digit, or if `digits` holds
/// more than two digits per byte of `out`. `out` is left unchanged on error.
pub fn pack(digits: &[u8], out: &mut [u8]) -> Result<(), FieldError> {
    let capacity = out.len() * 2;

    if digits.len() > capacity {
        Err(FieldError::ValueTooLong {
            length: digits.len(),
            capacity,
        })?;
    }

    if let Some(&found) = digits.iter().find(|d| !d.is_ascii_digit()) {
        Err(FieldError::InvalidNumericField {
            found: found as char,
        })?;
    }

    out.fill(0);

    let pad = capacity - digits.len();
    for (n, d) in (pad..).zip(digits) {
        let mut byte = PackedByte(out[n / 2]);
        let nibble = d - b'0';

        if n % 2 == 0 {
            byte.set_high(nibble);
        } else {
            byte.set_low(nibble);
        }

        out[n / 2] = u8::from(byte);
    }

    Ok(())
}

/// Unpack bytes into ASCII decimal digits at the front of `out`, two per
/// byte.
///
/// Returns the number of digits written, which is less than `2 * r.len()`
/// only if `out` is too short. Fails if a nibble is not a decimal digit.
pub fn unpack(r: &[u8], out: &mut [u8]) -> Result<usize, FieldError> {
    let mut written = 0;

    for (pair, &b) in out.chunks_exact_mut(2).zip(r) {
        let byte = PackedByte(b);

        for (slot, nibble) in pair.iter_mut().zip([byte.high(), byte.low()]) {
            if nibble > 9 {
                Err(FieldError::InvalidPackedDigit { nibble })?;
            }

            *slot = b'0' + nibble;
        }

        written += 2;
    }

    Ok(written)
}
