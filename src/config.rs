use crate::checksum::ChecksumScheme;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GpsConfig {
    pub checksum: ChecksumScheme,
}

impl GpsConfig {
    pub fn with_checksum(checksum: ChecksumScheme) -> Self {
        Self { checksum }
    }
}
