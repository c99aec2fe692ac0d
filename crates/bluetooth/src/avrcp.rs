//! AVRCP playback-status codes reported by the paired accessory.
//!
//! The wireless stack hands the player one raw status byte per accessory
//! transport change. Numbering follows the AVRCP `PlayStatus` values:
//!
//! | Code   | Status     |
//! |--------|------------|
//! | `0x00` | Stopped    |
//! | `0x01` | Playing    |
//! | `0x02` | Paused     |
//! | `0x03` | FwdSeek    |
//! | `0x04` | RevSeek    |
//! | `0xFF` | Error      |
//!
//! `Error` and every undocumented code decode to [`UnknownStatus`]; callers
//! log and ignore them.

/// A recognised accessory transport status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AvrcpStatus {
    /// Accessory stopped playback
    Stopped = 0x00,
    /// Accessory requests play (or resume)
    Playing = 0x01,
    /// Accessory requests pause
    Paused = 0x02,
    /// Accessory seek-forward (next track)
    FwdSeek = 0x03,
    /// Accessory seek-backward (previous track)
    RevSeek = 0x04,
}

/// Raw status code with no mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UnknownStatus(pub u8);

impl core::fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "unrecognized AVRCP status 0x{:02X}", self.0)
    }
}

impl AvrcpStatus {
    /// Raw code of the AVRCP `Error` play status.
    pub const ERROR_CODE: u8 = 0xFF;

    /// Decode a raw status byte.
    pub const fn from_raw(raw: u8) -> Result<Self, UnknownStatus> {
        match raw {
            0x00 => Ok(Self::Stopped),
            0x01 => Ok(Self::Playing),
            0x02 => Ok(Self::Paused),
            0x03 => Ok(Self::FwdSeek),
            0x04 => Ok(Self::RevSeek),
            other => Err(UnknownStatus(other)),
        }
    }

    /// Raw status byte.
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Log label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stopped => "STOP",
            Self::Playing => "PLAY",
            Self::Paused => "PAUSE",
            Self::FwdSeek => "FORWARD (Next)",
            Self::RevSeek => "REVERSE (Previous)",
        }
    }
}

impl TryFrom<u8> for AvrcpStatus {
    type Error = UnknownStatus;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes_decode() {
        assert_eq!(AvrcpStatus::from_raw(0), Ok(AvrcpStatus::Stopped));
        assert_eq!(AvrcpStatus::from_raw(1), Ok(AvrcpStatus::Playing));
        assert_eq!(AvrcpStatus::from_raw(2), Ok(AvrcpStatus::Paused));
        assert_eq!(AvrcpStatus::from_raw(3), Ok(AvrcpStatus::FwdSeek));
        assert_eq!(AvrcpStatus::from_raw(4), Ok(AvrcpStatus::RevSeek));
    }

    #[test]
    fn test_error_code_is_unknown() {
        assert_eq!(
            AvrcpStatus::from_raw(AvrcpStatus::ERROR_CODE),
            Err(UnknownStatus(0xFF))
        );
    }

    #[test]
    fn test_code_matches_discriminant() {
        for raw in 0u8..=4 {
            assert_eq!(AvrcpStatus::try_from(raw).map(AvrcpStatus::code), Ok(raw));
        }
    }

    #[test]
    fn test_unknown_status_display_has_hex_code() {
        let text = format!("{}", UnknownStatus(0x2A));
        assert!(text.contains("0x2A"), "got {text}");
    }
}
