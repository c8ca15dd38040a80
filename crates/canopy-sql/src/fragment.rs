//! # Fragments
//!
//! A rendered query fragment: SQL text paired with its ordered parameters.

use serde::{Deserialize, Serialize};

use crate::param::SqlParam;

/// SQL text plus the positional parameters it references, in bind order.
///
/// Fragments are embedded into larger statements via
/// [`SqlBuilder`](crate::SqlBuilder): the text through
/// [`write`](crate::SqlBuilder::write) and the parameters through
/// [`add_params`](crate::SqlBuilder::add_params) (or both at once).
///
/// # Examples
///
/// ```
/// use canopy_sql::{QueryFragment, SqlParam};
///
/// let fragment = QueryFragment::new("org_id = ?".to_string(), vec![SqlParam::Int(42)]);
/// assert_eq!(fragment.placeholder_count(), 1);
/// assert_eq!(fragment.params().len(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QueryFragment {
    sql: String,
    params: Vec<SqlParam>,
}

impl QueryFragment {
    /// Creates a fragment from rendered text and its parameters.
    pub fn new(sql: String, params: Vec<SqlParam>) -> Self {
        Self { sql, params }
    }

    /// The fragment text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// The bind values, in placeholder order.
    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// Number of `?` placeholders in the fragment text.
    ///
    /// A well-formed fragment satisfies
    /// `placeholder_count() == params().len()`.
    pub fn placeholder_count(&self) -> usize {
        self.sql.matches('?').count()
    }

    /// Consumes the fragment, returning `(sql, params)`.
    pub fn into_parts(self) -> (String, Vec<SqlParam>) {
        (self.sql, self.params)
    }
}
