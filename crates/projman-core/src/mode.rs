//! Octal permission modes.
//!
//! Template files carry permissions as strings of octal digits (`"0755"`).
//! `Mode` parses that form once, at template load time, so the rest of the
//! system works with validated mode bits.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Maximum permission bits expressible by a POSIX mode string (setuid,
/// setgid, sticky, rwxrwxrwx).
const MODE_MAX: u32 = 0o7777;

/// A POSIX permission mode parsed from an octal string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mode(u32);

impl Mode {
    /// Create a mode from raw bits
    pub fn from_bits(bits: u32) -> Option<Self> {
        (bits <= MODE_MAX).then_some(Self(bits))
    }

    /// Get the raw mode bits
    pub fn bits(&self) -> u32 {
        self.0
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bits = u32::from_str_radix(s, 8).map_err(|_| Error::invalid_mode(s))?;
        Mode::from_bits(bits).ok_or_else(|| Error::invalid_mode(s))
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04o}", self.0)
    }
}

impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_octal() {
        assert_eq!("0755".parse::<Mode>().unwrap().bits(), 0o755);
        assert_eq!("644".parse::<Mode>().unwrap().bits(), 0o644);
        assert_eq!("0000".parse::<Mode>().unwrap().bits(), 0);
        assert_eq!("2755".parse::<Mode>().unwrap().bits(), 0o2755);
    }

    #[test]
    fn test_parse_rejects_non_octal() {
        assert!("0788".parse::<Mode>().is_err());
        assert!("rwxr-xr-x".parse::<Mode>().is_err());
        assert!("".parse::<Mode>().is_err());
        assert!("-755".parse::<Mode>().is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range() {
        assert!("17777".parse::<Mode>().is_err());
        assert!(Mode::from_bits(0o10000).is_none());
    }

    #[test]
    fn test_display_pads_to_four_digits() {
        assert_eq!("755".parse::<Mode>().unwrap().to_string(), "0755");
        assert_eq!("0700".parse::<Mode>().unwrap().to_string(), "0700");
    }

    #[test]
    fn test_serde_string_form() {
        let mode: Mode = serde_yaml_ng::from_str("\"0750\"").unwrap();
        assert_eq!(mode.bits(), 0o750);
        assert_eq!(serde_yaml_ng::to_string(&mode).unwrap().trim(), "'0750'");
    }
}
