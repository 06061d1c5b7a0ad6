use crate::encoding::Encoding;
use crate::error::ConfigError;
use crate::flag::{PresenceFlag, Slot};

/// Separator between the segments of an identifier.
pub const SEPARATOR: &str = "-";

/// Plain configuration of an identifier generator.
///
/// The defaults are prefix `""`, type `"usr"`, timestamp included, shard
/// included (and therefore required), 8 random characters in hex.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct IdConfig {
    pub prefix: String,
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub id_type: String,
    pub include_timestamp: bool,
    pub shard: String,
    pub include_shard: bool,
    pub random_length: usize,
    pub encoding: Encoding,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            id_type: "usr".to_string(),
            include_timestamp: true,
            shard: String::new(),
            include_shard: true,
            random_length: 8,
            encoding: Encoding::Hex,
        }
    }
}

impl IdConfig {
    /// Check the configuration and return it with the prefix trimmed.
    pub fn validate(&self) -> Result<IdConfig, ConfigError> {
        if self.id_type.is_empty() {
            return Err(ConfigError::EmptyType);
        }
        if self.include_shard && self.shard.is_empty() {
            return Err(ConfigError::EmptyShard);
        }
        if self.random_length < 1 {
            return Err(ConfigError::RandomLength(self.random_length));
        }

        let prefix = self.prefix.trim();
        check_separator("prefix", prefix)?;
        check_separator("type", &self.id_type)?;
        if self.include_shard {
            check_separator("shard", &self.shard)?;
        }

        Ok(IdConfig {
            prefix: prefix.to_string(),
            ..self.clone()
        })
    }

    /// The presence flag every identifier built from this configuration carries.
    pub fn flag(&self) -> PresenceFlag {
        PresenceFlag::new()
            .with(Slot::Prefix, !self.prefix.trim().is_empty())
            .with(Slot::Type, true)
            .with(Slot::Timestamp, self.include_timestamp)
            .with(Slot::Shard, self.include_shard)
    }
}

fn check_separator(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.contains(SEPARATOR) {
        return Err(ConfigError::ContainsSeparator {
            field,
            value: value.to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sharded() -> IdConfig {
        IdConfig {
            shard: "eu1".into(),
            ..IdConfig::default()
        }
    }

    #[test]
    fn default_requires_a_shard() {
        assert_eq!(IdConfig::default().validate(), Err(ConfigError::EmptyShard));
        assert!(sharded().validate().is_ok());
    }

    #[test]
    fn empty_shard_is_fine_when_excluded() {
        let config = IdConfig {
            include_shard: false,
            ..IdConfig::default()
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.flag().to_string(), "0110");
    }

    #[test]
    fn rejects_bad_fields() {
        let empty_type = IdConfig {
            id_type: String::new(),
            ..sharded()
        };
        assert_eq!(empty_type.validate(), Err(ConfigError::EmptyType));

        let zero_length = IdConfig {
            random_length: 0,
            ..sharded()
        };
        assert_eq!(zero_length.validate(), Err(ConfigError::RandomLength(0)));

        let dashed = IdConfig {
            prefix: " my-api ".into(),
            ..sharded()
        };
        assert_eq!(
            dashed.validate(),
            Err(ConfigError::ContainsSeparator {
                field: "prefix",
                value: "my-api".into()
            })
        );
    }

    #[test]
    fn trims_prefix() {
        let config = IdConfig {
            prefix: "  api ".into(),
            ..sharded()
        };
        let validated = config.validate().unwrap();
        assert_eq!(validated.prefix, "api");
        assert_eq!(validated.flag().to_string(), "1111");

        let blank = IdConfig {
            prefix: "   ".into(),
            ..sharded()
        };
        assert_eq!(blank.validate().unwrap().flag().to_string(), "0111");
    }
}
