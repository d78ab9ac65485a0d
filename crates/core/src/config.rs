use std::{fmt, str::FromStr};

pub const DEFAULT_OVERWRITE_POLICY: OverwritePolicy = OverwritePolicy::KeepReadCursor;

/// What a `put` into a full buffer does to the read cursor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum OverwritePolicy {
    /// The read cursor stays where it is. Reads resume at that slot, which may
    /// now hold the freshest value.
    #[default]
    KeepReadCursor,
    /// The read cursor follows the write cursor, so reads always start at the
    /// oldest surviving value.
    DropOldest,
}

impl OverwritePolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeepReadCursor => "keep-read-cursor",
            Self::DropOldest => "drop-oldest",
        }
    }
}

impl fmt::Display for OverwritePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OverwritePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "keep-read-cursor" | "keep" => Ok(Self::KeepReadCursor),
            "drop-oldest" | "drop" => Ok(Self::DropOldest),
            _ => Err(ConfigError::UnknownOverwritePolicy(s.to_owned())),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unknown overwrite policy: {0:?} (expected keep-read-cursor or drop-oldest)")]
    UnknownOverwritePolicy(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_keeps_read_cursor() {
        assert_eq!(OverwritePolicy::default(), DEFAULT_OVERWRITE_POLICY);
        assert_eq!(DEFAULT_OVERWRITE_POLICY, OverwritePolicy::KeepReadCursor);
    }

    #[test]
    fn policy_parses_long_and_short_names() {
        assert_eq!("keep-read-cursor".parse::<OverwritePolicy>(), Ok(OverwritePolicy::KeepReadCursor));
        assert_eq!("keep".parse::<OverwritePolicy>(), Ok(OverwritePolicy::KeepReadCursor));
        assert_eq!(" Drop-Oldest ".parse::<OverwritePolicy>(), Ok(OverwritePolicy::DropOldest));
        assert_eq!("drop".parse::<OverwritePolicy>(), Ok(OverwritePolicy::DropOldest));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let err = "lifo".parse::<OverwritePolicy>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownOverwritePolicy("lifo".to_owned()));
        assert!(err.to_string().contains("lifo"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for policy in [OverwritePolicy::KeepReadCursor, OverwritePolicy::DropOldest] {
            assert_eq!(policy.to_string().parse::<OverwritePolicy>(), Ok(policy));
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn policy_serializes_as_kebab_case() {
        let json = serde_json::to_string(&OverwritePolicy::DropOldest).expect("serialize");
        assert_eq!(json, "\"drop-oldest\"");
        let back: OverwritePolicy = serde_json::from_str("\"keep-read-cursor\"").expect("deserialize");
        assert_eq!(back, OverwritePolicy::KeepReadCursor);
    }
}
