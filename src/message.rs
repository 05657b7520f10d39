use core::fmt;
use heapless::String;

/// UTC time of fix as `HH:MM:SS`.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Time(pub(crate) String<8>);

impl Time {
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Default for Time {
    fn default() -> Self {
        let mut time = String::new();
        let pushed = time.push_str("00:00:00");
        debug_assert!(pushed.is_ok());
        Time(time)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Global positioning system fix data.
///
/// Latitude and longitude hold the raw `ddmm.mmmm` / `dddmm.mmmm` numbers as
/// they appear on the wire, they are not converted to decimal degrees.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GgaData {
    pub time: Time,
    pub latitude: f64,
    pub lat_hemisphere: char,
    pub longitude: f64,
    pub lon_hemisphere: char,
    /// Metres above mean sea level.
    pub altitude: f32,
    /// Metres between the WGS-84 ellipsoid and mean sea level.
    pub geoid_separation: f32,
}

/// Geographic position.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GllData {
    pub latitude: f64,
    pub lat_hemisphere: char,
    pub longitude: f64,
    pub lon_hemisphere: char,
}

/// Recommended minimum specific data.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RmcData {
    pub time: Time,
    pub latitude: f64,
    pub lat_hemisphere: char,
    pub longitude: f64,
    pub lon_hemisphere: char,
}

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedMessage {
    Gga(GgaData),
    Gll(GllData),
    Rmc(RmcData),
}

/// Raw coordinate split into the digits before the decimal point and the
/// first four digits after it.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreesMinutes {
    pub degrees_minutes: i32,
    pub fraction: i32,
}

// f64 can't represent most decimal fractions exactly, e.g. 4916.45 is stored
// as 4916.4499999..., so nudge before truncating.
const FRACTION_EPSILON: f64 = 1e-6;
const MAX_FRACTION: i32 = 9_999;

impl DegreesMinutes {
    pub fn from_raw(value: f64) -> Self {
        let degrees_minutes = value as i32;
        let scaled = (value - degrees_minutes as f64) * 10_000.0;
        // the nudge must not carry into the integer part
        let fraction = if scaled < 0.0 {
            ((scaled - FRACTION_EPSILON) as i32).max(-MAX_FRACTION)
        } else {
            ((scaled + FRACTION_EPSILON) as i32).min(MAX_FRACTION)
        };
        Self {
            degrees_minutes,
            fraction,
        }
    }
}

/// What [`crate::Gps::lat_lon`] returns.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatLon {
    pub latitude: DegreesMinutes,
    pub lat_hemisphere: char,
    pub longitude: DegreesMinutes,
    pub lon_hemisphere: char,
}

impl LatLon {
    fn new(latitude: f64, lat_hemisphere: char, longitude: f64, lon_hemisphere: char) -> Self {
        Self {
            latitude: DegreesMinutes::from_raw(latitude),
            lat_hemisphere,
            longitude: DegreesMinutes::from_raw(longitude),
            lon_hemisphere,
        }
    }
}

impl DecodedMessage {
    pub fn lat_lon(&self) -> LatLon {
        match self {
            DecodedMessage::Gga(gga) => LatLon::new(
                gga.latitude,
                gga.lat_hemisphere,
                gga.longitude,
                gga.lon_hemisphere,
            ),
            DecodedMessage::Gll(gll) => LatLon::new(
                gll.latitude,
                gll.lat_hemisphere,
                gll.longitude,
                gll.lon_hemisphere,
            ),
            DecodedMessage::Rmc(rmc) => LatLon::new(
                rmc.latitude,
                rmc.lat_hemisphere,
                rmc.longitude,
                rmc.lon_hemisphere,
            ),
        }
    }

    pub fn time(&self) -> Option<&Time> {
        match self {
            DecodedMessage::Gga(gga) => Some(&gga.time),
            DecodedMessage::Rmc(rmc) => Some(&rmc.time),
            DecodedMessage::Gll(_) => None,
        }
    }

    pub fn altitude(&self) -> Option<f32> {
        match self {
            DecodedMessage::Gga(gga) => Some(gga.altitude),
            _ => None,
        }
    }

    pub fn geoid_separation(&self) -> Option<f32> {
        match self {
            DecodedMessage::Gga(gga) => Some(gga.geoid_separation),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_keeps_raw_digits() {
        assert_eq!(
            DegreesMinutes::from_raw(4916.45),
            DegreesMinutes {
                degrees_minutes: 4916,
                fraction: 4500
            }
        );
        assert_eq!(
            DegreesMinutes::from_raw(12311.12),
            DegreesMinutes {
                degrees_minutes: 12311,
                fraction: 1200
            }
        );
        assert_eq!(
            DegreesMinutes::from_raw(4807.038),
            DegreesMinutes {
                degrees_minutes: 4807,
                fraction: 380
            }
        );
    }

    #[test]
    fn split_truncates_past_four_digits() {
        assert_eq!(
            DegreesMinutes::from_raw(4315.68533),
            DegreesMinutes {
                degrees_minutes: 4315,
                fraction: 6853
            }
        );
        assert_eq!(
            DegreesMinutes::from_raw(0.0),
            DegreesMinutes {
                degrees_minutes: 0,
                fraction: 0
            }
        );
    }

    #[test]
    fn split_never_reaches_next_integer() {
        assert_eq!(
            DegreesMinutes::from_raw(4916.99999999995),
            DegreesMinutes {
                degrees_minutes: 4916,
                fraction: 9999
            }
        );
        assert_eq!(
            DegreesMinutes::from_raw(-4916.99999999995),
            DegreesMinutes {
                degrees_minutes: -4916,
                fraction: -9999
            }
        );
        assert_eq!(DegreesMinutes::from_raw(4916.9999).fraction, 9999);
    }

    #[test]
    fn default_time() {
        assert_eq!(Time::default().as_str(), "00:00:00");
    }

    #[test]
    fn gll_has_no_time_or_altitude() {
        let gll = DecodedMessage::Gll(GllData::default());
        assert_eq!(gll.time(), None);
        assert_eq!(gll.altitude(), None);
        assert_eq!(gll.geoid_separation(), None);
    }

    #[test]
    fn rmc_has_time_but_no_altitude() {
        let rmc = DecodedMessage::Rmc(RmcData::default());
        assert_eq!(rmc.time(), Some(&Time::default()));
        assert_eq!(rmc.altitude(), None);
    }
}
