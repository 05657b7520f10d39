use crc::{Crc, CRC_16_XMODEM};

/// Length of the `*hh` trailer at the end of every sentence body.
pub const TRAILER_LEN: usize = 3;

/// CRC-CCITT, polynomial 0x1021, initial value 0, MSB first, no final xor.
const CRC_CCITT: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// Which algorithm produced the two hex digits after the `*`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChecksumScheme {
    /// XOR of every byte between `$` and `*`, what NMEA-0183 receivers emit.
    #[default]
    NmeaXor,
    /// 16 bit CRC-CCITT compared against the 8 bit trailer value.
    CrcCcitt,
}

pub fn crc_checksum(data: &[u8]) -> u16 {
    CRC_CCITT.checksum(data)
}

pub fn xor_checksum(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |checksum, byte| checksum ^ byte)
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// Splits `body` (no leading `$`) into the checksummed part and the value
/// written in its `*hh` trailer.
fn split_trailer(body: &[u8]) -> Option<(&[u8], u8)> {
    if body.len() < TRAILER_LEN {
        return None;
    }
    let (data, trailer) = body.split_at(body.len() - TRAILER_LEN);
    if trailer[0] != b'*' {
        return None;
    }
    let high = hex_digit(trailer[1])?;
    let low = hex_digit(trailer[2])?;
    Some((data, (high << 4) | low))
}

/// Returns true when the trailer of `body` matches the bytes before it.
///
/// Anything that doesn't end in `*` followed by two hex digits fails.
pub fn verify_checksum(body: &[u8], scheme: ChecksumScheme) -> bool {
    let Some((data, expected)) = split_trailer(body) else {
        return false;
    };

    match scheme {
        ChecksumScheme::NmeaXor => xor_checksum(data) == expected,
        ChecksumScheme::CrcCcitt => crc_checksum(data) == expected as u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn crc_bitwise(data: &[u8]) -> u16 {
        let mut crc: u16 = 0;
        for &byte in data {
            crc ^= (byte as u16) << 8;
            for _ in 0..8 {
                if crc & 0x8000 != 0 {
                    crc = (crc << 1) ^ 0x1021;
                } else {
                    crc <<= 1;
                }
            }
        }
        crc
    }

    #[test]
    fn crc_matches_reference_vector() {
        assert_eq!(crc_checksum(b"123456789"), 0x31C3);
        assert_eq!(crc_checksum(b""), 0);
    }

    #[test]
    fn crc_matches_bitwise_register() {
        let body = b"GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,";
        assert_eq!(crc_checksum(body), crc_bitwise(body));
    }

    #[test]
    fn xor_of_known_sentences() {
        assert_eq!(xor_checksum(b"GPGLL,4916.45,N,12311.12,W,225444,A,"), 0x1D);
        assert_eq!(
            xor_checksum(b"GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,"),
            0x47
        );
    }

    #[test]
    fn verify_xor() {
        assert!(verify_checksum(
            b"GPGLL,4916.45,N,12311.12,W,225444,A,*1D",
            ChecksumScheme::NmeaXor
        ));
        assert!(verify_checksum(
            b"GPGLL,4916.45,N,12311.12,W,225444,A,*1d",
            ChecksumScheme::NmeaXor
        ));
        assert!(!verify_checksum(
            b"GPGLL,4916.45,N,12311.12,W,225444,A,*1E",
            ChecksumScheme::NmeaXor
        ));
    }

    #[test]
    fn verify_crc_only_matches_small_crcs() {
        // the trailer holds one byte, so only a CRC <= 0xFF can ever match
        let body = (0u8..=255)
            .map(|b| [b])
            .find(|data| crc_checksum(data) <= 0xFF)
            .unwrap();
        let crc = crc_checksum(&body) as u8;

        let mut sentence = [0u8; 4];
        sentence[0] = body[0];
        sentence[1] = b'*';
        sentence[2] = b"0123456789ABCDEF"[(crc >> 4) as usize];
        sentence[3] = b"0123456789ABCDEF"[(crc & 0xF) as usize];
        assert!(verify_checksum(&sentence, ChecksumScheme::CrcCcitt));

        assert!(!verify_checksum(
            b"GPGLL,4916.45,N,12311.12,W,225444,A,*1D",
            ChecksumScheme::CrcCcitt
        ));
    }

    #[test]
    fn malformed_trailers_fail() {
        let bodies: [&[u8]; 8] = [
            b"",
            b"*",
            b"1D",
            b"GPGLL,1D",
            b"GPGLL,*1",
            b"GPGLL,*G0",
            b"GPGLL,*1D\r\n",
            b"GPGLL,*1D0",
        ];
        for body in bodies {
            assert!(!verify_checksum(body, ChecksumScheme::NmeaXor));
            assert!(!verify_checksum(body, ChecksumScheme::CrcCcitt));
        }
    }

    #[test]
    fn empty_body_with_trailer() {
        assert!(verify_checksum(b"*00", ChecksumScheme::NmeaXor));
        assert!(verify_checksum(b"*00", ChecksumScheme::CrcCcitt));
    }
}
