use core::str::{from_utf8, FromStr};

use crate::message::Time;
use heapless::String;

/// `HHMMSS[.sss]` to `HH:MM:SS`, fractional seconds are dropped.
///
/// `None` when the field is shorter than six bytes or not ASCII.
pub fn parse_time(field: &[u8]) -> Option<Time> {
    let digits = field.get(..6)?;
    if !digits.is_ascii() {
        return None;
    }

    let mut time = String::<8>::new();
    for (i, &byte) in digits.iter().enumerate() {
        if i == 2 || i == 4 {
            time.push(':').ok()?;
        }
        time.push(byte as char).ok()?;
    }
    Some(Time(time))
}

/// Parses a float, anything that doesn't parse reads as zero.
pub fn parse_float<F: FromStr + Default>(field: &[u8]) -> F {
    from_utf8(field)
        .ok()
        .and_then(|text| text.trim().parse::<F>().ok())
        .unwrap_or_default()
}

/// First byte of the field, copied as is.
pub fn parse_hemisphere(field: &[u8]) -> Option<char> {
    field.first().map(|&byte| byte as char)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_inserts_colons() {
        assert_eq!(parse_time(b"123519").unwrap().as_str(), "12:35:19");
        assert_eq!(parse_time(b"080023.000").unwrap().as_str(), "08:00:23");
    }

    #[test]
    fn short_time_is_rejected() {
        assert_eq!(parse_time(b""), None);
        assert_eq!(parse_time(b"12351"), None);
    }

    #[test]
    fn time_is_copied_verbatim() {
        assert_eq!(parse_time(b"ab:cde").unwrap().as_str(), "ab::c:de");
        assert_eq!(parse_time("12é519".as_bytes()), None);
    }

    #[test]
    fn floats() {
        assert_eq!(parse_float::<f64>(b"4807.038"), 4807.038);
        assert_eq!(parse_float::<f32>(b"545.4"), 545.4);
        assert_eq!(parse_float::<f32>(b"-12.5"), -12.5);
    }

    #[test]
    fn bad_floats_are_zero() {
        assert_eq!(parse_float::<f64>(b"abc"), 0.0);
        assert_eq!(parse_float::<f32>(b""), 0.0);
        assert_eq!(parse_float::<f32>(&[0xff, 0xfe]), 0.0);
    }

    #[test]
    fn hemisphere() {
        assert_eq!(parse_hemisphere(b"N"), Some('N'));
        assert_eq!(parse_hemisphere(b"west"), Some('w'));
        assert_eq!(parse_hemisphere(b""), None);
    }
}
