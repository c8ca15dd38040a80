//! # Dialects
//!
//! Backend-specific literal syntax. Fragment generators take a `&dyn
//! Dialect` so the same resolution logic renders for any supported backend.

/// Backend-specific SQL literal rendering.
///
/// The visibility resolver embeds boolean literals directly into fragment
/// text (they are schema constants, not per-resolution values), and the
/// literal syntax differs per backend.
pub trait Dialect {
    /// Renders a boolean literal for this backend.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopy_sql::{Dialect, Postgres, Sqlite};
    ///
    /// assert_eq!(Sqlite.boolean_str(true), "1");
    /// assert_eq!(Postgres.boolean_str(false), "FALSE");
    /// ```
    fn boolean_str(&self, value: bool) -> &'static str;
}

/// SQLite dialect. Booleans are stored as integers.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sqlite;

impl Dialect for Sqlite {
    fn boolean_str(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }
}

/// PostgreSQL dialect.
#[derive(Debug, Clone, Copy, Default)]
pub struct Postgres;

impl Dialect for Postgres {
    fn boolean_str(&self, value: bool) -> &'static str {
        if value {
            "TRUE"
        } else {
            "FALSE"
        }
    }
}

/// MySQL dialect. Booleans are TINYINT.
#[derive(Debug, Clone, Copy, Default)]
pub struct MySql;

impl Dialect for MySql {
    fn boolean_str(&self, value: bool) -> &'static str {
        if value {
            "1"
        } else {
            "0"
        }
    }
}
