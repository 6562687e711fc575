//! Hexadecimal rendering of digests
//!
//! Two renderings exist and must stay distinct. Cryptographic digests are
//! opaque fixed-length buffers and get two uppercase digits per byte. CRC-32
//! results are a single integer and get the minimal-digit uppercase form of
//! that integer, so `0x00A1` renders as `"A1"` and zero renders as `"0"`.

/// Render bytes as uppercase hex, two zero-padded digits per byte.
pub fn to_hex(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}

/// Render a CRC-32 value as variable-width uppercase hex.
pub fn crc_value_to_hex(value: u32) -> String {
    integer_to_hex(u64::from(value))
}

/// Big-endian bytes of `value` with leading zero bytes dropped.
///
/// At least one byte is always returned, so zero becomes `[0x00]`.
pub fn minimal_be_bytes(value: u32) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let first = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[first..].to_vec()
}

pub(crate) fn integer_to_hex(value: u64) -> String {
    format!("{value:X}")
}

/// Fold a big-endian byte string back into an integer.
pub(crate) fn fold_be(bytes: &[u8]) -> u64 {
    bytes
        .iter()
        .fold(0u64, |acc, &b| (acc << 8) | u64::from(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex_is_uppercase_and_zero_padded() {
        assert_eq!(to_hex(&[0x00, 0x0a, 0xff, 0x10]), "000AFF10");
        assert_eq!(to_hex(&[]), "");
    }

    #[test]
    fn test_to_hex_length_is_twice_input() {
        for len in [0usize, 1, 16, 32, 64] {
            let bytes = vec![0u8; len];
            assert_eq!(to_hex(&bytes).len(), 2 * len);
        }
    }

    #[test]
    fn test_crc_value_to_hex_drops_leading_zeros() {
        assert_eq!(crc_value_to_hex(0x00A1), "A1");
        assert_eq!(crc_value_to_hex(0), "0");
        assert_eq!(crc_value_to_hex(0x0A1B), "A1B");
        assert_eq!(crc_value_to_hex(0x0D4A_1185), "D4A1185");
        assert_eq!(crc_value_to_hex(u32::MAX), "FFFFFFFF");
    }

    #[test]
    fn test_minimal_be_bytes() {
        assert_eq!(minimal_be_bytes(0), vec![0x00]);
        assert_eq!(minimal_be_bytes(0xA1), vec![0xA1]);
        assert_eq!(minimal_be_bytes(0x65E3), vec![0x65, 0xE3]);
        assert_eq!(minimal_be_bytes(0x00E7_DDCE), vec![0xE7, 0xDD, 0xCE]);
        assert_eq!(minimal_be_bytes(0xCBF4_3926), vec![0xCB, 0xF4, 0x39, 0x26]);
    }

    #[test]
    fn test_fold_be_inverts_minimal_bytes() {
        for value in [0u32, 1, 0xA1, 0x0A1B, 0x00E7_DDCE, 0xCBF4_3926, u32::MAX] {
            assert_eq!(fold_be(&minimal_be_bytes(value)), u64::from(value));
        }
    }

    #[test]
    fn test_paths_diverge_for_same_value() {
        let value = 0x00A1;
        let bytes = minimal_be_bytes(value);

        assert_eq!(crc_value_to_hex(value), "A1");
        assert_eq!(to_hex(&value.to_be_bytes()), "000000A1");
        assert_eq!(to_hex(&bytes), "A1");
    }
}
