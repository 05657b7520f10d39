use crate::decoder::SentenceDecoder;
use crate::error::GpsError;
use crate::message::{DecodedMessage, GgaData, GllData, RmcData};

/// Sentence codes this crate recognizes. Only GGA, GLL and RMC can be decoded,
/// the rest are known receiver outputs that are reported as unimplemented.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentenceType {
    Gga,
    Gll,
    Gsa,
    Gsv,
    Mss,
    Rmc,
    Vtg,
}

const SENTENCE_CODES: [(&[u8; 3], SentenceType); 7] = [
    (b"GGA", SentenceType::Gga),
    (b"GLL", SentenceType::Gll),
    (b"GSA", SentenceType::Gsa),
    (b"GSV", SentenceType::Gsv),
    (b"MSS", SentenceType::Mss),
    (b"RMC", SentenceType::Rmc),
    (b"VTG", SentenceType::Vtg),
];

fn decode_onto<T: SentenceDecoder + Clone + Default>(previous: Option<&T>, payload: &[u8]) -> T {
    let mut message = previous.cloned().unwrap_or_default();
    message.decode(payload);
    message
}

impl SentenceType {
    pub fn from_code(code: &[u8]) -> Option<Self> {
        SENTENCE_CODES
            .iter()
            .find(|(known, _)| known.as_slice() == code)
            .map(|(_, sentence_type)| *sentence_type)
    }

    pub fn code(&self) -> &'static str {
        match self {
            SentenceType::Gga => "GGA",
            SentenceType::Gll => "GLL",
            SentenceType::Gsa => "GSA",
            SentenceType::Gsv => "GSV",
            SentenceType::Mss => "MSS",
            SentenceType::Rmc => "RMC",
            SentenceType::Vtg => "VTG",
        }
    }

    pub fn is_decodable(&self) -> bool {
        matches!(
            self,
            SentenceType::Gga | SentenceType::Gll | SentenceType::Rmc
        )
    }

    /// Decodes `payload` (sentence body without the `*hh` trailer).
    ///
    /// When `previous` holds a message of the same type, decoding starts from
    /// a copy of it so empty fields keep their old values. Otherwise it starts
    /// from defaults.
    pub fn decode(
        &self,
        payload: &[u8],
        previous: Option<&DecodedMessage>,
    ) -> Result<DecodedMessage, GpsError> {
        let message = match self {
            SentenceType::Gga => {
                let previous = match previous {
                    Some(DecodedMessage::Gga(gga)) => Some(gga),
                    _ => None,
                };
                DecodedMessage::Gga(decode_onto::<GgaData>(previous, payload))
            }
            SentenceType::Gll => {
                let previous = match previous {
                    Some(DecodedMessage::Gll(gll)) => Some(gll),
                    _ => None,
                };
                DecodedMessage::Gll(decode_onto::<GllData>(previous, payload))
            }
            SentenceType::Rmc => {
                let previous = match previous {
                    Some(DecodedMessage::Rmc(rmc)) => Some(rmc),
                    _ => None,
                };
                DecodedMessage::Rmc(decode_onto::<RmcData>(previous, payload))
            }
            SentenceType::Gsa | SentenceType::Gsv | SentenceType::Mss | SentenceType::Vtg => {
                return Err(GpsError::Unimplemented)
            }
        };
        Ok(message)
    }
}

impl DecodedMessage {
    pub fn sentence_type(&self) -> SentenceType {
        match self {
            DecodedMessage::Gga(_) => SentenceType::Gga,
            DecodedMessage::Gll(_) => SentenceType::Gll,
            DecodedMessage::Rmc(_) => SentenceType::Rmc,
        }
    }
}
