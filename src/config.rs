use dotenv::dotenv;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::env;
use tracing::debug;

use crate::models::configuration_error::ConfigurationError;

const IGNORE_REPRINT_ENV: &str = "WECHAT_BROADCAST_SEND_IGNORE_REPRINT";

/// 图文消息被判定为转载时的处理方式，对应 `send_ignore_reprint`
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum ReprintPolicy {
    /// 停止群发
    Stop = 0,
    /// 继续群发（转载）
    Continue = 1,
}

// num_enum reads a `#[default]` variant as the catch-all for `try_from`.
impl Default for ReprintPolicy {
    fn default() -> Self {
        ReprintPolicy::Stop
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub ignore_reprint: ReprintPolicy,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigurationError> {
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, `from_env` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigurationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let ignore_reprint = match lookup(IGNORE_REPRINT_ENV) {
            Some(value) => parse_reprint_policy(&value)?,
            None => ReprintPolicy::default(),
        };
        debug!("send_ignore_reprint: {:?}", ignore_reprint);

        Ok(Self { ignore_reprint })
    }

    pub fn with_ignore_reprint(mut self, ignore_reprint: ReprintPolicy) -> Self {
        self.ignore_reprint = ignore_reprint;
        self
    }
}

fn parse_reprint_policy(value: &str) -> Result<ReprintPolicy, ConfigurationError> {
    let invalid = || ConfigurationError::InvalidSetting {
        key: IGNORE_REPRINT_ENV.to_owned(),
        value: value.to_owned(),
    };

    let raw = value.trim().parse::<u8>().map_err(|_| invalid())?;
    ReprintPolicy::try_from(raw).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.ignore_reprint, ReprintPolicy::Stop);
    }

    #[test]
    fn test_reads_reprint_policy() {
        let config = Config::from_lookup(|key| {
            (key == IGNORE_REPRINT_ENV).then(|| " 1 ".to_owned())
        })
        .unwrap();
        assert_eq!(config.ignore_reprint, ReprintPolicy::Continue);
        assert_eq!(u8::from(config.ignore_reprint), 1);
    }

    #[test]
    fn test_reprint_policy_has_no_catch_all() {
        assert_eq!(ReprintPolicy::default(), ReprintPolicy::Stop);
        assert_eq!(ReprintPolicy::try_from(0u8).unwrap(), ReprintPolicy::Stop);
        assert!(ReprintPolicy::try_from(2u8).is_err());
    }

    #[test]
    fn test_rejects_invalid_value() {
        for bad in ["2", "yes", ""] {
            let err = Config::from_lookup(|_| Some(bad.to_owned())).unwrap_err();
            assert_eq!(
                err,
                ConfigurationError::InvalidSetting {
                    key: IGNORE_REPRINT_ENV.to_owned(),
                    value: bad.to_owned(),
                }
            );
        }
    }
}
