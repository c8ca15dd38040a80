//! # Builder
//!
//! Accumulates fragment text and positional parameters for one query build.

use crate::param::SqlParam;

/// Accumulates SQL text and the positional parameters it references.
///
/// Text and parameters are appended in call order; the final parameter
/// list's order must match the order in which `?` placeholders appear in
/// the concatenated text, across all [`write`](SqlBuilder::write) calls.
/// The builder performs no validation of that alignment — correctness is
/// the caller's responsibility.
///
/// One builder instance belongs to one in-flight query build; it has no
/// internal synchronization and must not be written from multiple threads.
///
/// # Examples
///
/// ```
/// use canopy_sql::{SqlBuilder, SqlParam};
///
/// let mut builder = SqlBuilder::new();
/// builder.write("SELECT id FROM content WHERE org_id = ?", &[SqlParam::Int(42)]);
/// builder.write(" AND is_folder = 0", &[]);
///
/// assert_eq!(builder.sql(), "SELECT id FROM content WHERE org_id = ? AND is_folder = 0");
/// assert_eq!(builder.params(), &[SqlParam::Int(42)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SqlBuilder {
    sql: String,
    params: Vec<SqlParam>,
}

impl SqlBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends fragment text together with the parameters its placeholders
    /// reference, in order.
    ///
    /// # Arguments
    ///
    /// * `sql` - Fragment text to append
    /// * `params` - Bind values for the placeholders in `sql`, in placeholder order
    pub fn write(&mut self, sql: &str, params: &[SqlParam]) {
        self.sql.push_str(sql);

        if !params.is_empty() {
            self.params.extend_from_slice(params);
        }
    }

    /// Appends parameters without text.
    ///
    /// Used for fragments whose parameter list is computed separately from
    /// their text, such as the visibility table fragment.
    pub fn add_params(&mut self, params: &[SqlParam]) {
        self.params.extend_from_slice(params);
    }

    /// Returns the concatenated SQL text.
    pub fn sql(&self) -> &str {
        &self.sql
    }

    /// Returns the accumulated parameters in bind order.
    pub fn params(&self) -> &[SqlParam] {
        &self.params
    }

    /// Consumes the builder, returning `(sql, params)` for execution.
    pub fn into_parts(self) -> (String, Vec<SqlParam>) {
        (self.sql, self.params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_appends_text_and_params() {
        let mut builder = SqlBuilder::new();
        builder.write("WHERE a = ?", &[SqlParam::Int(1)]);
        builder.write(" AND b = ?", &[SqlParam::Text("x".into())]);

        assert_eq!(builder.sql(), "WHERE a = ? AND b = ?");
        assert_eq!(
            builder.params(),
            &[SqlParam::Int(1), SqlParam::Text("x".into())]
        );
    }

    #[test]
    fn test_add_params_without_text() {
        let mut builder = SqlBuilder::new();
        builder.write("WHERE a = ? AND b = ?", &[]);
        builder.add_params(&[SqlParam::Int(1), SqlParam::Int(2)]);

        assert_eq!(builder.sql(), "WHERE a = ? AND b = ?");
        assert_eq!(builder.params().len(), 2);
    }

    #[test]
    fn test_into_parts() {
        let mut builder = SqlBuilder::new();
        builder.write("SELECT ?", &[SqlParam::Int(9)]);

        let (sql, params) = builder.into_parts();
        assert_eq!(sql, "SELECT ?");
        assert_eq!(params, vec![SqlParam::Int(9)]);
    }

    #[test]
    fn test_empty_builder() {
        let builder = SqlBuilder::new();
        assert_eq!(builder.sql(), "");
        assert!(builder.params().is_empty());
    }
}
