use crate::decoder::{field_setter, FieldSetter, SentenceDecoder};
use crate::message::RmcData;

field_setter!(set_time, RmcData, time, time);
field_setter!(set_latitude, RmcData, latitude, float);
field_setter!(set_lat_hemisphere, RmcData, lat_hemisphere, hemisphere);
field_setter!(set_longitude, RmcData, longitude, float);
field_setter!(set_lon_hemisphere, RmcData, lon_hemisphere, hemisphere);

// 2 is the A/V status, 7 onwards are speed, course, date and variation
impl SentenceDecoder for RmcData {
    const FIELDS: &'static [(usize, FieldSetter<Self>)] = &[
        (1, set_time),
        (3, set_latitude),
        (4, set_lat_hemisphere),
        (5, set_longitude),
        (6, set_lon_hemisphere),
    ];
}
