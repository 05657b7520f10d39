#![cfg_attr(not(test), no_std)]

//! Decodes NMEA-0183 GGA, GLL and RMC sentences without heap allocation.
//!
//! Framing is left to the caller: hand [`Gps::update`] one sentence at a
//! time, with or without the leading `$` but without the trailing CRLF, then
//! read the fields back through the accessors.
//!
//! ```
//! use tiny_gps::Gps;
//!
//! let mut gps = Gps::new();
//! gps.update(b"$GPGGA,123519,4807.038,N,01131.000,E,1,08,0.9,545.4,M,46.9,M,,*47")
//!     .unwrap();
//! assert_eq!(gps.time().unwrap().as_str(), "12:35:19");
//! assert_eq!(gps.altitude(), Ok(545.4));
//! ```

mod fmt;

mod checksum;
mod common;
mod config;
mod decoder;
mod error;
mod gga;
mod gll;
mod message;
mod rmc;
mod sentence;
mod tokenizer;


pub use crate::checksum::{crc_checksum, verify_checksum, xor_checksum, ChecksumScheme};
pub use crate::config::GpsConfig;
pub use crate::error::GpsError;
pub use crate::message::{
    DecodedMessage, DegreesMinutes, GgaData, GllData, LatLon, RmcData, Time,
};
pub use crate::sentence::SentenceType;
pub use crate::tokenizer::{next_field, Fields};

use crate::checksum::TRAILER_LEN;

/// Checks the trailer and finds the sentence type. Returns the body with the
/// `$` and `*hh` stripped.
fn validate(sentence: &[u8], scheme: ChecksumScheme) -> Result<(SentenceType, &[u8]), GpsError> {
    let body = sentence.strip_prefix(b"$").unwrap_or(sentence);
    if !verify_checksum(body, scheme) {
        log_warn!("Invalid checksum on {} byte sentence", sentence.len());
        return Err(GpsError::InvalidChecksum);
    }

    let payload = &body[..body.len() - TRAILER_LEN];
    // 2 byte talker id, then the 3 byte sentence code
    match payload.get(2..5).and_then(SentenceType::from_code) {
        Some(sentence_type) => Ok((sentence_type, payload)),
        None => {
            log_debug!("Unknown sentence prefix");
            Err(GpsError::UnknownPrefix)
        }
    }
}

/// Decodes a single sentence without keeping any state.
pub fn parse(sentence: &[u8], scheme: ChecksumScheme) -> Result<DecodedMessage, GpsError> {
    let (sentence_type, payload) = validate(sentence, scheme)?;
    sentence_type.decode(payload, None)
}

/// Holds the most recently decoded GGA, GLL or RMC message.
///
/// Only one message is loaded at a time. Accessors for fields the loaded
/// message doesn't carry return [`GpsError::Unimplemented`], even if an
/// earlier message of another type had them.
#[derive(Debug, Clone, Default)]
pub struct Gps {
    config: GpsConfig,
    message: Option<DecodedMessage>,
}

impl Gps {
    pub fn new() -> Self {
        Self::with_config(GpsConfig::default())
    }

    pub fn with_config(config: GpsConfig) -> Self {
        Gps {
            config,
            message: None,
        }
    }

    pub fn config(&self) -> &GpsConfig {
        &self.config
    }

    /// Validates and decodes one sentence, replacing the loaded message on
    /// success. On error nothing changes.
    ///
    /// Empty fields don't clear anything: if the loaded message has the same
    /// type as `sentence`, a field left empty keeps the value from that
    /// earlier sentence. A GGA without altitude after one with `12.3` still
    /// reports `12.3`.
    pub fn update(&mut self, sentence: &[u8]) -> Result<SentenceType, GpsError> {
        let (sentence_type, payload) = validate(sentence, self.config.checksum)?;

        let message = match sentence_type.decode(payload, self.message.as_ref()) {
            Ok(message) => message,
            Err(e) => {
                log_debug!("No decoder for {:?} sentences", sentence_type);
                return Err(e);
            }
        };

        log_trace!("Decoded {:?} sentence", sentence_type);
        self.message = Some(message);
        Ok(sentence_type)
    }

    pub fn message(&self) -> Option<&DecodedMessage> {
        self.message.as_ref()
    }

    pub fn sentence_type(&self) -> Option<SentenceType> {
        self.message.as_ref().map(DecodedMessage::sentence_type)
    }

    /// Raw `ddmm.mmmm` / `dddmm.mmmm` coordinates split into their integer part
    /// and the first four fractional digits. No conversion to degrees is done.
    pub fn lat_lon(&self) -> Result<LatLon, GpsError> {
        self.message
            .as_ref()
            .map(DecodedMessage::lat_lon)
            .ok_or(GpsError::Unimplemented)
    }

    pub fn time(&self) -> Result<Time, GpsError> {
        self.message
            .as_ref()
            .and_then(DecodedMessage::time)
            .cloned()
            .ok_or(GpsError::Unimplemented)
    }

    /// Metres above mean sea level, GGA only.
    pub fn altitude(&self) -> Result<f32, GpsError> {
        self.message
            .as_ref()
            .and_then(DecodedMessage::altitude)
            .ok_or(GpsError::Unimplemented)
    }

    /// Metres between the ellipsoid and mean sea level, GGA only.
    pub fn geoid_separation(&self) -> Result<f32, GpsError> {
        self.message
            .as_ref()
            .and_then(DecodedMessage::geoid_separation)
            .ok_or(GpsError::Unimplemented)
    }
}
