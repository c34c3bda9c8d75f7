//! Timezone selection for dating worksheets
//!
//! A run files its figures under "today", and today depends on where the
//! operator is. The zone comes from the command line, then the `TZ`
//! environment variable, then the operating system, then UTC.

use crate::error::{BudgetError, Result};
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::str::FromStr;
use tracing::debug;

/// Zone used to decide the current date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimezoneConfig {
    pub tz: Tz,
}

impl Default for TimezoneConfig {
    fn default() -> Self {
        Self {
            tz: detect_local_timezone(),
        }
    }
}

impl TimezoneConfig {
    /// Resolve the zone from command-line options
    ///
    /// `use_utc` wins over an explicit zone name.
    pub fn from_cli(timezone: Option<&str>, use_utc: bool) -> Result<Self> {
        if use_utc {
            return Ok(Self { tz: Tz::UTC });
        }

        match timezone {
            Some(name) => Tz::from_str(name)
                .map(|tz| Self { tz })
                .map_err(|_| {
                    BudgetError::InvalidTimezone(format!(
                        "'{name}'. Use an IANA name such as 'America/Toronto' or 'UTC'"
                    ))
                }),
            None => Ok(Self::default()),
        }
    }

    pub fn is_utc(&self) -> bool {
        self.tz == Tz::UTC
    }

    pub fn display_name(&self) -> &str {
        if self.is_utc() { "UTC" } else { self.tz.name() }
    }

    /// Current calendar date in this zone
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.tz).date_naive()
    }
}

/// Detect the operator's zone, falling back to UTC
pub fn detect_local_timezone() -> Tz {
    if let Some(tz) = std::env::var("TZ")
        .ok()
        .and_then(|name| Tz::from_str(&name).ok())
    {
        debug!("Using timezone from TZ environment variable: {}", tz.name());
        return tz;
    }

    match iana_time_zone::get_timezone() {
        Ok(name) => Tz::from_str(&name).unwrap_or_else(|_| {
            debug!("Unrecognized system timezone '{}', using UTC", name);
            Tz::UTC
        }),
        Err(e) => {
            debug!("System timezone unavailable ({:?}), using UTC", e);
            Tz::UTC
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_flag_overrides_zone() {
        let config = TimezoneConfig::from_cli(Some("Asia/Tokyo"), true).unwrap();
        assert!(config.is_utc());
        assert_eq!(config.display_name(), "UTC");
    }

    #[test]
    fn test_explicit_zone() {
        let config = TimezoneConfig::from_cli(Some("America/Toronto"), false).unwrap();
        assert!(!config.is_utc());
        assert_eq!(config.display_name(), "America/Toronto");
    }

    #[test]
    fn test_invalid_zone() {
        let result = TimezoneConfig::from_cli(Some("Nowhere/Special"), false);
        assert!(matches!(result, Err(BudgetError::InvalidTimezone(_))));
    }

    #[test]
    fn test_today_is_close_to_utc_today() {
        let config = TimezoneConfig::from_cli(None, true).unwrap();
        let diff = (config.today() - Utc::now().date_naive()).num_days().abs();
        assert!(diff <= 1);
    }
}
