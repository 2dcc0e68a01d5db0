//! Book model and request payloads

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

/// Message returned when a create request lacks one of the required fields
pub const MISSING_FIELDS_MESSAGE: &str = "Data tidak lengkap. Diperlukan: judul, pengarang, tahun";

/// Book record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Sequential identifier, never reused
    #[schema(example = 1)]
    pub id: u64,
    /// Title
    #[serde(rename = "judul")]
    #[schema(example = "Laskar Pelangi")]
    pub title: String,
    /// Author
    #[serde(rename = "pengarang")]
    #[schema(example = "Andrea Hirata")]
    pub author: String,
    /// Publication year
    #[serde(rename = "tahun")]
    #[schema(example = 2005)]
    pub year: i32,
}

impl Book {
    /// Overwrite the fields present in `changes`
    pub fn apply(&mut self, changes: &BookChanges) {
        if let Some(ref title) = changes.title {
            self.title = title.clone();
        }
        if let Some(ref author) = changes.author {
            self.author = author.clone();
        }
        if let Some(year) = changes.year {
            self.year = year;
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Judul: {} | Pengarang: {} | Tahun: {}",
            self.id, self.title, self.author, self.year
        )
    }
}

/// Validated fields of a book that does not have an identifier yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub year: i32,
}

impl NewBook {
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
        }
    }
}

/// Validated partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookChanges {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<i32>,
}

/// Create book request. A `null` field deserializes to `None` and counts as missing.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CreateBook {
    #[serde(rename = "judul")]
    #[schema(example = "Bumi Manusia")]
    pub title: Option<String>,
    #[serde(rename = "pengarang")]
    #[schema(example = "Pramoedya Ananta Toer")]
    pub author: Option<String>,
    /// Integer, or a string/float coercible to one
    #[serde(rename = "tahun")]
    #[schema(value_type = Option<i32>, example = 1980)]
    pub year: Option<Value>,
}

impl CreateBook {
    /// Check that every field is present, then coerce the year.
    pub fn validate(self) -> AppResult<NewBook> {
        let (Some(title), Some(author), Some(year)) = (self.title, self.author, self.year) else {
            return Err(AppError::Validation(MISSING_FIELDS_MESSAGE.to_string()));
        };

        Ok(NewBook {
            title,
            author,
            year: coerce_year(&year)?,
        })
    }
}

/// Update book request. Every field is optional; `null` counts as absent.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateBook {
    #[serde(rename = "judul")]
    pub title: Option<String>,
    #[serde(rename = "pengarang")]
    pub author: Option<String>,
    #[serde(rename = "tahun")]
    #[schema(value_type = Option<i32>)]
    pub year: Option<Value>,
}

impl UpdateBook {
    pub fn validate(self) -> AppResult<BookChanges> {
        let year = self.year.as_ref().map(coerce_year).transpose()?;

        Ok(BookChanges {
            title: self.title,
            author: self.author,
            year,
        })
    }
}

/// Coerce a JSON value into a year.
///
/// Integers pass through, floats are truncated toward zero, strings are
/// trimmed and parsed, booleans map to 1 and 0.
pub fn coerce_year(value: &Value) -> AppResult<i32> {
    let out_of_range = || AppError::Validation(format!("Tahun di luar jangkauan: {}", value));

    match value {
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i32::try_from(i).map_err(|_| out_of_range())
            } else if let Some(f) = n.as_f64() {
                let truncated = f.trunc();
                if truncated < i32::MIN as f64 || truncated > i32::MAX as f64 {
                    Err(out_of_range())
                } else {
                    Ok(truncated as i32)
                }
            } else {
                Err(out_of_range())
            }
        }
        Value::String(s) => s.trim().parse::<i32>().map_err(|_| {
            AppError::Validation(format!("Tahun harus berupa angka, bukan '{}'", s))
        }),
        Value::Bool(b) => Ok(i32::from(*b)),
        _ => Err(AppError::Validation(format!(
            "Tahun harus berupa angka, bukan {}",
            value
        ))),
    }
}
