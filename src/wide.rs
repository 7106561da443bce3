use crate::cast::{vec_from_byte_vec, vec_from_bytes, CastError};

/// Decodes `bytes` as a packed run of native-endian UTF-16 code units.
///
/// The input length must be even; empty input yields an empty string. No
/// encoding validation is performed beyond what `String` forces on us:
/// unpaired surrogates are not rejected, they decode to U+FFFD.
pub fn string_from_utf16(bytes: &[u8]) -> Result<String, CastError> {
    let units = vec_from_bytes::<u16>(bytes)?;
    Ok(string_from_units(&units))
}

/// Same as [`string_from_utf16`], but consumes the buffer so the code-unit
/// array can take over its storage instead of allocating a fresh one.
pub fn string_from_utf16_vec(bytes: Vec<u8>) -> Result<String, CastError> {
    let units = vec_from_byte_vec::<u16>(bytes)?;
    Ok(string_from_units(&units))
}

fn string_from_units(units: &[u16]) -> String {
    char::decode_utf16(units.iter().copied())
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

#[cfg(test)]
mod wide_tests {
    use super::*;

    fn utf16_bytes(text: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_ne_bytes());
        }
        bytes
    }

    #[test]
    fn decodes_two_code_units() {
        assert_eq!("Hi", string_from_utf16(&utf16_bytes("Hi")).unwrap());
    }

    #[cfg(target_endian = "little")]
    #[test]
    fn decodes_literal_little_endian_units() {
        assert_eq!("Hi", string_from_utf16(&[0x48, 0x00, 0x69, 0x00]).unwrap());
    }

    #[test]
    fn round_trips_beyond_the_basic_plane() {
        let text = "žvaigždė 🌌";
        assert_eq!(text, string_from_utf16(&utf16_bytes(text)).unwrap());
    }

    #[test]
    fn empty_input_is_an_empty_string() {
        assert_eq!("", string_from_utf16(&[]).unwrap());
        assert_eq!("", string_from_utf16_vec(Vec::new()).unwrap());
    }

    #[test]
    fn odd_length_is_rejected() {
        let error = string_from_utf16(&[0x48, 0x00, 0x69]).unwrap_err();
        assert!(matches!(error, CastError::SizeMismatch { element_size: 2, byte_len: 3, .. }));
    }

    #[test]
    fn unpaired_surrogate_becomes_replacement() {
        let bytes = 0xD800u16.to_ne_bytes();
        assert_eq!("\u{FFFD}", string_from_utf16(&bytes).unwrap());
    }

    #[test]
    fn consuming_and_borrowing_decodes_agree() {
        let bytes = utf16_bytes("spanų kaštas");
        assert_eq!(
            string_from_utf16(&bytes).unwrap(),
            string_from_utf16_vec(bytes.clone()).unwrap()
        );
    }
}
