//! Draft and patch validation for movie records.
//!
//! Validation outcome is a tagged result: success yields typed field data,
//! failure yields the full list of [`FieldError`]s, and call sites check
//! the result explicitly. Incoming bodies deserialize into all-`Option`
//! structs so that a missing field surfaces as a validation error rather
//! than a deserialization failure.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lowest accepted rate value.
pub const RATE_MIN: f64 = 0.0;
/// Highest accepted rate value.
pub const RATE_MAX: f64 = 10.0;

/// A single failed validation rule on one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The offending field name.
    pub field: &'static str,
    /// What the rule requires.
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.field, self.message)
    }
}

/// Incoming body for movie creation. All fields optional; `validate`
/// enforces required-ness and per-field constraints in one pass.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDraft {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
    pub rate: Option<f64>,
}

/// A fully validated set of movie fields, ready for the catalog to adopt
/// under a freshly assigned id.
#[derive(Debug, Clone)]
pub struct ValidMovie {
    pub title: String,
    pub year: i32,
    pub director: String,
    pub duration: u32,
    pub poster: String,
    pub genre: Vec<String>,
    pub rate: f64,
}

impl MovieDraft {
    /// Validates the draft, collecting every failing field.
    ///
    /// Rules: `title`, `director` required and non-empty; `year` required;
    /// `duration` required and positive; `poster` required and an http(s)
    /// URL; `genre` required and a non-empty sequence of non-empty tags;
    /// `rate` optional, defaults to 0 and must lie in [0, 10].
    pub fn validate(self) -> Result<ValidMovie, Vec<FieldError>> {
        let mut errors = Vec::new();

        let title = required_text("title", self.title, &mut errors);
        let year = required("year", self.year, &mut errors);
        let director = required_text("director", self.director, &mut errors);

        let duration = match self.duration {
            Some(0) => {
                errors.push(FieldError::new("duration", "must be positive"));
                None
            }
            Some(d) => Some(d),
            None => {
                errors.push(FieldError::new("duration", "is required"));
                None
            }
        };

        let poster = match self.poster {
            Some(p) => {
                if let Some(err) = url_error(&p) {
                    errors.push(FieldError::new("poster", err));
                    None
                } else {
                    Some(p)
                }
            }
            None => {
                errors.push(FieldError::new("poster", "is required"));
                None
            }
        };

        let genre = match self.genre {
            Some(g) => {
                if let Some(err) = genre_error(&g) {
                    errors.push(FieldError::new("genre", err));
                    None
                } else {
                    Some(g)
                }
            }
            None => {
                errors.push(FieldError::new("genre", "is required"));
                None
            }
        };

        // Absent rate defaults to 0.
        let rate = self.rate.unwrap_or(RATE_MIN);
        if let Some(err) = rate_error(rate) {
            errors.push(FieldError::new("rate", err));
        }

        if let (Some(title), Some(year), Some(director), Some(duration), Some(poster), Some(genre)) =
            (title, year, director, duration, poster, genre)
        {
            if errors.is_empty() {
                return Ok(ValidMovie {
                    title,
                    year,
                    director,
                    duration,
                    poster,
                    genre,
                    rate,
                });
            }
        }

        Err(errors)
    }
}

/// Incoming body for partial updates. Present fields are validated with the
/// same rules as creation; the empty patch is valid and merges to a no-op.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i32>,
    pub director: Option<String>,
    pub duration: Option<u32>,
    pub poster: Option<String>,
    pub genre: Option<Vec<String>>,
    pub rate: Option<f64>,
}

impl MoviePatch {
    /// Validates the fields that are present, collecting every failure.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                errors.push(FieldError::new("title", "must not be empty"));
            }
        }
        if let Some(director) = &self.director {
            if director.trim().is_empty() {
                errors.push(FieldError::new("director", "must not be empty"));
            }
        }
        if let Some(0) = self.duration {
            errors.push(FieldError::new("duration", "must be positive"));
        }
        if let Some(poster) = &self.poster {
            if let Some(err) = url_error(poster) {
                errors.push(FieldError::new("poster", err));
            }
        }
        if let Some(genre) = &self.genre {
            if let Some(err) = genre_error(genre) {
                errors.push(FieldError::new("genre", err));
            }
        }
        if let Some(rate) = self.rate {
            if let Some(err) = rate_error(rate) {
                errors.push(FieldError::new("rate", err));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Merges the patch over `movie`: present fields win, absent fields
    /// keep their current value.
    pub fn apply(self, movie: &mut crate::record::Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
    }
}

fn required_text(
    field: &'static str,
    value: Option<String>,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match value {
        Some(s) if !s.trim().is_empty() => Some(s),
        Some(_) => {
            errors.push(FieldError::new(field, "must not be empty"));
            None
        }
        None => {
            errors.push(FieldError::new(field, "is required"));
            None
        }
    }
}

fn required<T>(field: &'static str, value: Option<T>, errors: &mut Vec<FieldError>) -> Option<T> {
    if value.is_none() {
        errors.push(FieldError::new(field, "is required"));
    }
    value
}

fn url_error(value: &str) -> Option<&'static str> {
    if value.starts_with("http://") || value.starts_with("https://") {
        None
    } else {
        Some("must be an http(s) URL")
    }
}

fn genre_error(tags: &[String]) -> Option<&'static str> {
    if tags.is_empty() {
        Some("must contain at least one tag")
    } else if tags.iter().any(|g| g.trim().is_empty()) {
        Some("tags must not be empty")
    } else {
        None
    }
}

fn rate_error(rate: f64) -> Option<String> {
    if (RATE_MIN..=RATE_MAX).contains(&rate) {
        None
    } else {
        Some(format!("must be between {RATE_MIN} and {RATE_MAX}"))
    }
}
