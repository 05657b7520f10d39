use crate::decoder::{field_setter, FieldSetter, SentenceDecoder};
use crate::message::GgaData;

field_setter!(set_time, GgaData, time, time);
field_setter!(set_latitude, GgaData, latitude, float);
field_setter!(set_lat_hemisphere, GgaData, lat_hemisphere, hemisphere);
field_setter!(set_longitude, GgaData, longitude, float);
field_setter!(set_lon_hemisphere, GgaData, lon_hemisphere, hemisphere);
field_setter!(set_altitude, GgaData, altitude, float);
field_setter!(set_geoid_separation, GgaData, geoid_separation, float);

// 6 fix quality, 7 satellites, 8 hdop, 10 and 12 units, 13 and 14 dgps
impl SentenceDecoder for GgaData {
    const FIELDS: &'static [(usize, FieldSetter<Self>)] = &[
        (1, set_time),
        (2, set_latitude),
        (3, set_lat_hemisphere),
        (4, set_longitude),
        (5, set_lon_hemisphere),
        (9, set_altitude),
        (11, set_geoid_separation),
    ];
}
