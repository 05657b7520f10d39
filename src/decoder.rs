use crate::tokenizer::Fields;

/// Writes one non-empty raw field into the message being decoded.
pub type FieldSetter<T> = fn(&mut T, &[u8]);

/// A message whose fields are filled in by position.
///
/// `FIELDS` maps a field index (0 is the `GPGGA`-style token) to the setter
/// for that index. Indices missing from the table are skipped.
pub trait SentenceDecoder: Sized + 'static {
    const FIELDS: &'static [(usize, FieldSetter<Self>)];

    /// Applies `payload` on top of `self`. Empty fields leave the current
    /// value in place.
    fn decode(&mut self, payload: &[u8]) {
        decode_fields(payload, Self::FIELDS, self);
    }
}

pub fn decode_fields<T>(payload: &[u8], table: &[(usize, FieldSetter<T>)], target: &mut T) {
    let Some(last_index) = table.iter().map(|(index, _)| *index).max() else {
        return;
    };

    for (index, field) in Fields::new(payload).take_while(|(index, _)| *index <= last_index) {
        if field.is_empty() {
            continue;
        }
        if let Some((_, setter)) = table.iter().find(|(i, _)| *i == index) {
            setter(target, field);
        }
    }
}

/// Declares a [`FieldSetter`] for one attribute.
///
/// `time` and `hemisphere` leave the attribute alone when the field can't be
/// read, `float` writes zero.
macro_rules! field_setter {
    ($name:ident, $target:ty, $attribute:ident, time) => {
        fn $name(target: &mut $target, field: &[u8]) {
            if let Some(time) = $crate::common::parse_time(field) {
                target.$attribute = time;
            }
        }
    };
    ($name:ident, $target:ty, $attribute:ident, hemisphere) => {
        fn $name(target: &mut $target, field: &[u8]) {
            if let Some(hemisphere) = $crate::common::parse_hemisphere(field) {
                target.$attribute = hemisphere;
            }
        }
    };
    ($name:ident, $target:ty, $attribute:ident, float) => {
        fn $name(target: &mut $target, field: &[u8]) {
            target.$attribute = $crate::common::parse_float(field);
        }
    };
}

pub(crate) use field_setter;
