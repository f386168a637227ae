//! Default capture file names

use chrono::{DateTime, Local, TimeZone};
use std::fmt::{Display, Write};

use crate::config::{ConfigError, NamingConfig};

/// Generate a capture file name for the given time
///
/// e.g. "screenshot-2025-12-11-14-30-45.png"
pub fn file_name_at<Tz>(naming: &NamingConfig, time: &DateTime<Tz>) -> Result<String, ConfigError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    naming.validate()?;

    let mut stem = String::new();
    write!(stem, "{}", time.format(&naming.pattern)).map_err(|_| {
        ConfigError::Invalid(format!("cannot format naming.pattern: {}", naming.pattern))
    })?;

    let extension = naming.extension.trim_start_matches('.');
    if extension.is_empty() {
        Ok(stem)
    } else {
        Ok(format!("{}.{}", stem, extension))
    }
}

/// Generate a capture file name for the current local time
pub fn default_file_name(naming: &NamingConfig) -> Result<String, ConfigError> {
    file_name_at(naming, &Local::now())
}
