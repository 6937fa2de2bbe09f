//! The simulated "current day".
//!
//! The day lives in a single file holding an ISO-8601 date and no header.
//! It is created on first read with the real local date and afterwards only
//! changes through [`Clock::set_current_day`] or [`Clock::advance_time`].

use chrono::{Days, Local, NaiveDate};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::{StoreConfig, StoreError};

/// File-backed current-day clock.
#[derive(Debug, Clone)]
pub struct Clock {
    path: PathBuf,
    today: NaiveDate,
}

impl Clock {
    /// Create a clock backed by `path`, initialised to the local date on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_today(path, Local::now().date_naive())
    }

    /// Create a clock that initialises to `today` instead of the local date.
    pub fn with_today(path: impl Into<PathBuf>, today: NaiveDate) -> Self {
        Self {
            path: path.into(),
            today,
        }
    }

    /// Create a clock for the current-day file of a data directory.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::new(config.current_day_path())
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the current day, creating the file if it does not exist yet.
    pub fn get_current_day(&self) -> Result<NaiveDate, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let value = content.trim();
                value
                    .parse::<NaiveDate>()
                    .map_err(|source| StoreError::InvalidDay {
                        path: self.path.clone(),
                        value: value.to_string(),
                        source,
                    })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), day = %self.today, "initialising current day");
                self.set_current_day(self.today)?;
                Ok(self.today)
            }
            Err(source) => Err(StoreError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Overwrite the current day.
    pub fn set_current_day(&self, day: NaiveDate) -> Result<(), StoreError> {
        fs::write(&self.path, day.to_string()).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!(day = %day, "current day set");
        Ok(())
    }

    /// Move the current day by `days` (negative moves back) and return the new day.
    pub fn advance_time(&self, days: i64) -> Result<NaiveDate, StoreError> {
        let from = self.get_current_day()?;
        let day = shift_days(from, days).ok_or(StoreError::DateOutOfRange { from, days })?;
        self.set_current_day(day)?;
        Ok(day)
    }
}

/// `day` moved by `days`, or `None` outside the representable range.
pub fn shift_days(day: NaiveDate, days: i64) -> Option<NaiveDate> {
    let delta = Days::new(days.unsigned_abs());
    if days >= 0 {
        day.checked_add_days(delta)
    } else {
        day.checked_sub_days(delta)
    }
}
