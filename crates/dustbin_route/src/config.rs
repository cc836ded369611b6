use std::time::Duration;

use jiff::SpanRelativeTo;
use thiserror::Error;

use crate::{osrm::OsrmRouteClientParams, route_assembler::AssemblerParams};

pub const OSRM_URL_ENV_VAR: &str = "DUSTBIN_OSRM_URL";
pub const OSRM_PROFILE_ENV_VAR: &str = "DUSTBIN_OSRM_PROFILE";
pub const SEGMENT_TIMEOUT_ENV_VAR: &str = "DUSTBIN_SEGMENT_TIMEOUT";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, Default)]
pub struct RouteConfig {
    pub osrm: OsrmRouteClientParams,
    pub assembler: AssemblerParams,
}

impl RouteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Unset variables keep their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = RouteConfig::default();

        if let Some(url) = lookup(OSRM_URL_ENV_VAR) {
            config.osrm.osrm_url = require_non_empty(OSRM_URL_ENV_VAR, url)?;
        }

        if let Some(profile) = lookup(OSRM_PROFILE_ENV_VAR) {
            config.osrm.profile = require_non_empty(OSRM_PROFILE_ENV_VAR, profile)?;
        }

        if let Some(timeout) = lookup(SEGMENT_TIMEOUT_ENV_VAR) {
            config.assembler.segment_timeout =
                parse_timeout(&timeout).map_err(|_| ConfigError::InvalidValue {
                    name: SEGMENT_TIMEOUT_ENV_VAR,
                    value: timeout,
                })?;
        }

        Ok(config)
    }
}

/// Rejects empty and whitespace only values. `name` is reported in the error.
pub fn require_non_empty(name: &'static str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue { name, value });
    }
    Ok(value)
}

/// Accepts "10s", "PT1M30S", "1500ms" or a number of seconds. Zero or "none" disables
/// the timeout.
pub fn parse_timeout(input: &str) -> Result<Option<Duration>, String> {
    let input = input.trim();

    if input.eq_ignore_ascii_case("none") {
        return Ok(None);
    }

    let duration = if let Ok(duration) = input.parse::<jiff::SignedDuration>() {
        duration
    } else if let Ok(duration) = input
        .parse::<jiff::Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        duration
    } else if let Ok(seconds) = input.parse::<u64>() {
        jiff::SignedDuration::from_secs(seconds as i64)
    } else {
        return Err(format!("Invalid duration: {input}"));
    };

    let duration = Duration::try_from(duration).map_err(|err| err.to_string())?;

    if duration.is_zero() {
        Ok(None)
    } else {
        Ok(Some(duration))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use crate::osrm::{OSRM_DEFAULT_PROFILE, OSRM_DEFAULT_URL};
    use crate::route_assembler::DEFAULT_SEGMENT_TIMEOUT;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = RouteConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.osrm.osrm_url, OSRM_DEFAULT_URL);
        assert_eq!(config.osrm.profile, OSRM_DEFAULT_PROFILE);
        assert_eq!(
            config.assembler.segment_timeout,
            Some(DEFAULT_SEGMENT_TIMEOUT)
        );
    }

    #[test]
    fn test_overrides() {
        let config = RouteConfig::from_lookup(lookup(&[
            (OSRM_URL_ENV_VAR, "http://localhost:5000"),
            (OSRM_PROFILE_ENV_VAR, "foot"),
            (SEGMENT_TIMEOUT_ENV_VAR, "2s"),
        ]))
        .unwrap();

        assert_eq!(config.osrm.osrm_url, "http://localhost:5000");
        assert_eq!(config.osrm.profile, "foot");
        assert_eq!(
            config.assembler.segment_timeout,
            Some(Duration::from_secs(2))
        );
    }

    #[test]
    fn test_invalid_timeout() {
        let result = RouteConfig::from_lookup(lookup(&[(SEGMENT_TIMEOUT_ENV_VAR, "soon")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: SEGMENT_TIMEOUT_ENV_VAR,
                ..
            })
        ));
    }

    #[test]
    fn test_empty_url() {
        let result = RouteConfig::from_lookup(lookup(&[(OSRM_URL_ENV_VAR, " ")]));

        assert!(result.is_err());
    }

    #[test]
    fn test_empty_profile() {
        let result = RouteConfig::from_lookup(lookup(&[(OSRM_PROFILE_ENV_VAR, "")]));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue {
                name: OSRM_PROFILE_ENV_VAR,
                ..
            })
        ));
    }

    #[test]
    fn test_require_non_empty() {
        assert_eq!(
            require_non_empty("--profile", String::from("foot")).unwrap(),
            "foot"
        );
        assert!(matches!(
            require_non_empty("--osrm-url", String::from("  \t")),
            Err(ConfigError::InvalidValue {
                name: "--osrm-url",
                ..
            })
        ));
    }

    #[test]
    fn test_parse_timeout() {
        assert_eq!(parse_timeout("10s").unwrap(), Some(Duration::from_secs(10)));
        assert_eq!(parse_timeout("PT1M30S").unwrap(), Some(Duration::from_secs(90)));
        assert_eq!(
            parse_timeout("1500ms").unwrap(),
            Some(Duration::from_millis(1500))
        );
        assert_eq!(parse_timeout("7").unwrap(), Some(Duration::from_secs(7)));
        assert_eq!(parse_timeout("0").unwrap(), None);
        assert_eq!(parse_timeout("none").unwrap(), None);
        assert!(parse_timeout("-5s").is_err());
        assert!(parse_timeout("later").is_err());
    }
}
