use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PireneaError;

/// Leading letter shared by every setup code. The add pass treats any
/// filename starting with this letter as already tagged.
pub const PREFIX_MARKER: char = 'P';

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SetupCode {
    P0,
    P1,
    P2,
}

impl SetupCode {
    pub const ALL: [SetupCode; 3] = [SetupCode::P0, SetupCode::P1, SetupCode::P2];

    /// Human name of the acquisition setup behind the code.
    pub fn setup_label(&self) -> &'static str {
        match self {
            SetupCode::P0 => "Villa",
            SetupCode::P1 => "IRAP",
            SetupCode::P2 => "PILAB",
        }
    }

    /// The literal `<code>_` tag prepended to filenames.
    pub fn file_prefix(&self) -> String {
        format!("{self}_")
    }

    pub fn parse(value: &str) -> Result<Self, PireneaError> {
        value
            .parse()
            .map_err(|_| PireneaError::InvalidSetupCode(value.to_string()))
    }
}

impl FromStr for SetupCode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_uppercase().as_str() {
            "P0" => Ok(SetupCode::P0),
            "P1" => Ok(SetupCode::P1),
            "P2" => Ok(SetupCode::P2),
            _ => Err(format!("unknown setup code: {value} (expected P0, P1 or P2)")),
        }
    }
}

impl fmt::Display for SetupCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            SetupCode::P0 => "P0",
            SetupCode::P1 => "P1",
            SetupCode::P2 => "P2",
        };
        write!(f, "{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_lowercase() {
        assert_eq!(SetupCode::parse("p1").unwrap(), SetupCode::P1);
        assert_eq!("P2".parse::<SetupCode>().unwrap(), SetupCode::P2);
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        let err = SetupCode::parse("P5").unwrap_err();
        assert!(matches!(err, PireneaError::InvalidSetupCode(_)));
        assert!(err.to_string().contains("P0, P1 or P2"));
    }

    #[test]
    fn test_display_round_trip() {
        for code in SetupCode::ALL {
            assert_eq!(code.to_string().parse::<SetupCode>().unwrap(), code);
        }
    }

    #[test]
    fn test_file_prefix_uses_marker_letter() {
        for code in SetupCode::ALL {
            assert!(code.file_prefix().starts_with(PREFIX_MARKER));
            assert!(code.file_prefix().ends_with('_'));
        }
    }
}
