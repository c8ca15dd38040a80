//! # Parameters
//!
//! Typed positional bind values for query fragments.
//! Every `?` placeholder in a fragment is backed by exactly one `SqlParam`.

use serde::{Deserialize, Serialize};

/// A positional bind value carried alongside fragment text.
///
/// Fragments never interpolate values into SQL text; everything that varies
/// per resolution travels as a `SqlParam` and is bound by the storage layer.
///
/// # Example
///
/// ```
/// use canopy_sql::SqlParam;
///
/// let org: SqlParam = 42i64.into();
/// let role: SqlParam = "viewer".into();
/// assert_eq!(org, SqlParam::Int(42));
/// assert_eq!(role, SqlParam::Text("viewer".to_string()));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SqlParam {
    /// 64-bit integer bind value (ids, permission ordinals, org ids).
    Int(i64),

    /// Text bind value (role names).
    Text(String),
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        SqlParam::Int(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        SqlParam::Text(value.to_string())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        SqlParam::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_from_int() {
        assert_eq!(SqlParam::from(7i64), SqlParam::Int(7));
    }

    #[test]
    fn test_param_from_text() {
        assert_eq!(SqlParam::from("editor"), SqlParam::Text("editor".into()));
        assert_eq!(
            SqlParam::from("editor".to_string()),
            SqlParam::Text("editor".into())
        );
    }
}
