//! YAML encoding: a version number is a string scalar

use semver32_core::VersionNumber;

use super::decode;
use crate::error::Result;

pub fn to_string(version: VersionNumber) -> Result<String> {
    let out = serde_yaml::to_string(&version)?;
    log::trace!("encoded yaml version {}", out.trim_end());
    Ok(out)
}

/// Decode a YAML document holding a single scalar
pub fn from_str(yaml: &str) -> Result<VersionNumber> {
    let text: String = serde_yaml::from_str(yaml)?;
    decode("yaml", &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CodecError;
    use semver32_core::ErrorKind;

    #[test]
    fn test_decode() {
        assert_eq!(from_str("1.2.3").unwrap(), VersionNumber::new(1, 2, 3));
        assert_eq!(from_str("'1.2'").unwrap(), VersionNumber::new(1, 2, 0));
        assert_eq!(from_str("\"0.0.1\"\n").unwrap(), VersionNumber::new(0, 0, 1));
    }

    #[test]
    fn test_decode_errors() {
        let cases = [
            ("''", ErrorKind::Empty),
            ("1-0", ErrorKind::InvalidCharacter),
            ("0.0.256", ErrorKind::PatchTooBig),
            ("0.256.0", ErrorKind::MinorTooBig),
            ("65536.0.0", ErrorKind::MajorTooBig),
        ];

        for (yaml, kind) in cases {
            let err = from_str(yaml).unwrap_err();
            assert_eq!(err.kind(), Some(kind), "yaml {yaml}");
        }

        let err = from_str("1-0").unwrap_err();
        assert_eq!(err.to_string(), "semver: invalid character '-' in: \"1-0\"");
    }

    #[test]
    fn test_not_a_scalar() {
        let err = from_str("[1, 2]").unwrap_err();
        assert!(matches!(err, CodecError::Yaml(_)));
    }

    #[test]
    fn test_round_trip() {
        for version in [
            VersionNumber::ZERO,
            VersionNumber::new(0, 1, 0),
            VersionNumber::new(0, 0, 1),
            VersionNumber::new(3, 0, 0),
            VersionNumber::new(1, 2, 3),
            VersionNumber::MAX,
        ] {
            let yaml = to_string(version).unwrap();
            assert_eq!(from_str(&yaml).unwrap(), version, "yaml {yaml}");
        }
    }
}
