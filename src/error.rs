use core::fmt;

/// Why a sentence was rejected or a field couldn't be read.
///
/// None of these are fatal, the instance stays usable and keeps whatever
/// message it had loaded before the failing call.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsError {
    /// The `*hh` trailer is missing, malformed, or doesn't match the body.
    InvalidChecksum,
    /// The sentence code isn't one this crate knows about.
    UnknownPrefix,
    /// The sentence code is known but has no decoder, or an accessor was
    /// called while no message carrying that field is loaded.
    Unimplemented,
}

impl fmt::Display for GpsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GpsError::InvalidChecksum => write!(f, "invalid checksum"),
            GpsError::UnknownPrefix => write!(f, "unknown sentence prefix"),
            GpsError::Unimplemented => write!(f, "unimplemented"),
        }
    }
}
