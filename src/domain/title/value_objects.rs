use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

const NAME_MAX_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TitleId(i64);

impl TitleId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::Validation("title id must be positive".into()))
        } else {
            Ok(Self(id))
        }
    }
}

impl From<TitleId> for i64 {
    fn from(value: TitleId) -> Self {
        value.0
    }
}

impl fmt::Display for TitleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleName(String);

impl TitleName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("name cannot be empty".into()));
        }
        if value.chars().count() > NAME_MAX_LEN {
            return Err(DomainError::Validation(format!(
                "name must be at most {NAME_MAX_LEN} characters long"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for TitleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Release year of a title. Future years are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ReleaseYear(i32);

impl ReleaseYear {
    pub fn new(year: i32, current_year: i32) -> DomainResult<Self> {
        if year > current_year {
            return Err(DomainError::Validation(format!(
                "year {year} is in the future"
            )));
        }
        Ok(Self(year))
    }

    /// Rebuild a stored year without the "not in the future" check.
    pub const fn from_stored(year: i32) -> Self {
        Self(year)
    }

    pub const fn value(self) -> i32 {
        self.0
    }
}

/// Aggregate review score, an integer in `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(value: u8) -> DomainResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::Validation(format!(
                "rating must be between {} and {}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Round a mean of review scores to the nearest rating. `None` when there
    /// is nothing to average.
    pub fn from_mean(mean: Option<f64>) -> Option<Self> {
        let mean = mean.filter(|m| m.is_finite())?;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let rounded = mean
            .round()
            .clamp(f64::from(Self::MIN), f64::from(Self::MAX)) as u8;
        Some(Self(rounded))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}
