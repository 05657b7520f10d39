use crate::decoder::{field_setter, FieldSetter, SentenceDecoder};
use crate::message::GllData;

field_setter!(set_latitude, GllData, latitude, float);
field_setter!(set_lat_hemisphere, GllData, lat_hemisphere, hemisphere);
field_setter!(set_longitude, GllData, longitude, float);
field_setter!(set_lon_hemisphere, GllData, lon_hemisphere, hemisphere);

impl SentenceDecoder for GllData {
    const FIELDS: &'static [(usize, FieldSetter<Self>)] = &[
        (1, set_latitude),
        (2, set_lat_hemisphere),
        (3, set_longitude),
        (4, set_lon_hemisphere),
    ];
}
