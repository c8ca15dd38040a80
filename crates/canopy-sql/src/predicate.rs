//! # Predicates
//!
//! A small typed expression tree for WHERE/ON clauses. Rendering emits
//! exactly one `?` placeholder per carried parameter, so fragments built
//! through this tree cannot drift out of alignment with their bind list.

use crate::fragment::QueryFragment;
use crate::param::SqlParam;

/// Comparison operators available to parameter-bound predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    /// `=`
    Eq,

    /// `>=`
    Ge,
}

impl CmpOp {
    fn as_str(&self) -> &'static str {
        match self {
            CmpOp::Eq => "=",
            CmpOp::Ge => ">=",
        }
    }
}

/// A boolean expression over columns and bind parameters.
///
/// Leaves are either parameter-bound comparisons, `IN` lists over bound
/// parameters, or raw text with no parameters. `all`/`any` combine
/// sub-predicates with AND/OR; nested combinators are parenthesized when
/// rendered.
///
/// # Examples
///
/// ```
/// use canopy_sql::Predicate;
///
/// let filter = Predicate::all(vec![
///     Predicate::eq("c.org_id", 42i64),
///     Predicate::any(vec![
///         Predicate::eq("a.user_id", 7i64),
///         Predicate::eq("tm.user_id", 7i64),
///     ]),
/// ]);
///
/// let fragment = filter.render();
/// assert_eq!(fragment.sql(), "c.org_id = ? AND (a.user_id = ? OR tm.user_id = ?)");
/// assert_eq!(fragment.params().len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// `column <op> ?` with one bind parameter.
    Compare {
        /// Qualified column name, rendered verbatim.
        column: String,
        /// Comparison operator.
        op: CmpOp,
        /// Bind value for the placeholder.
        param: SqlParam,
    },

    /// `column IN (?, ...)` with one placeholder per parameter.
    ///
    /// An empty list renders as `1 = 0` (matches nothing) so a missing
    /// grant list can never widen a result set.
    InList {
        /// Qualified column name, rendered verbatim.
        column: String,
        /// Bind values, one placeholder each.
        params: Vec<SqlParam>,
    },

    /// Raw SQL text carrying no parameters.
    Raw(String),

    /// Conjunction. Empty renders as `1 = 1`.
    All(Vec<Predicate>),

    /// Disjunction. Empty renders as `1 = 0`.
    Any(Vec<Predicate>),
}

impl Predicate {
    /// `column = ?` bound to `param`.
    pub fn eq(column: impl Into<String>, param: impl Into<SqlParam>) -> Self {
        Predicate::Compare {
            column: column.into(),
            op: CmpOp::Eq,
            param: param.into(),
        }
    }

    /// `column >= ?` bound to `param`.
    pub fn ge(column: impl Into<String>, param: impl Into<SqlParam>) -> Self {
        Predicate::Compare {
            column: column.into(),
            op: CmpOp::Ge,
            param: param.into(),
        }
    }

    /// `column IN (?, ...)` bound to `params`.
    pub fn in_list(column: impl Into<String>, params: Vec<SqlParam>) -> Self {
        Predicate::InList {
            column: column.into(),
            params,
        }
    }

    /// Raw SQL text with no parameters.
    pub fn raw(sql: impl Into<String>) -> Self {
        Predicate::Raw(sql.into())
    }

    /// AND of `predicates`.
    pub fn all(predicates: Vec<Predicate>) -> Self {
        Predicate::All(predicates)
    }

    /// OR of `predicates`.
    pub fn any(predicates: Vec<Predicate>) -> Self {
        Predicate::Any(predicates)
    }

    /// Renders the tree into fragment text and its bind list.
    ///
    /// The returned fragment always satisfies
    /// `placeholder_count() == params().len()`.
    pub fn render(&self) -> QueryFragment {
        let mut sql = String::new();
        let mut params = Vec::new();
        self.render_into(&mut sql, &mut params);
        QueryFragment::new(sql, params)
    }

    fn render_into(&self, sql: &mut String, params: &mut Vec<SqlParam>) {
        match self {
            Predicate::Compare { column, op, param } => {
                sql.push_str(column);
                sql.push(' ');
                sql.push_str(op.as_str());
                sql.push_str(" ?");
                params.push(param.clone());
            }
            Predicate::InList {
                column,
                params: values,
            } => {
                if values.is_empty() {
                    sql.push_str("1 = 0");
                    return;
                }
                sql.push_str(column);
                sql.push_str(" IN (?");
                for _ in 1..values.len() {
                    sql.push_str(",?");
                }
                sql.push(')');
                params.extend_from_slice(values);
            }
            Predicate::Raw(text) => sql.push_str(text),
            Predicate::All(children) => {
                Self::render_group(children, " AND ", "1 = 1", sql, params)
            }
            Predicate::Any(children) => Self::render_group(children, " OR ", "1 = 0", sql, params),
        }
    }

    fn render_group(
        children: &[Predicate],
        separator: &str,
        empty: &str,
        sql: &mut String,
        params: &mut Vec<SqlParam>,
    ) {
        if children.is_empty() {
            sql.push_str(empty);
            return;
        }
        for (i, child) in children.iter().enumerate() {
            if i > 0 {
                sql.push_str(separator);
            }
            let nested = matches!(child, Predicate::All(_) | Predicate::Any(_));
            if nested {
                sql.push('(');
            }
            child.render_into(sql, params);
            if nested {
                sql.push(')');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_renders_single_placeholder() {
        let fragment = Predicate::eq("org_id", 42i64).render();
        assert_eq!(fragment.sql(), "org_id = ?");
        assert_eq!(fragment.params(), &[SqlParam::Int(42)]);
    }

    #[test]
    fn test_ge_operator() {
        let fragment = Predicate::ge("a.permission", 1i64).render();
        assert_eq!(fragment.sql(), "a.permission >= ?");
    }

    #[test]
    fn test_in_list_arity() {
        let fragment = Predicate::in_list(
            "a.role",
            vec![SqlParam::from("editor"), SqlParam::from("viewer")],
        )
        .render();
        assert_eq!(fragment.sql(), "a.role IN (?,?)");
        assert_eq!(fragment.params().len(), 2);

        let one = Predicate::in_list("a.role", vec![SqlParam::from("viewer")]).render();
        assert_eq!(one.sql(), "a.role IN (?)");
    }

    #[test]
    fn test_empty_in_list_matches_nothing() {
        let fragment = Predicate::in_list("a.role", vec![]).render();
        assert_eq!(fragment.sql(), "1 = 0");
        assert!(fragment.params().is_empty());
    }

    #[test]
    fn test_nested_combinators_parenthesized() {
        let fragment = Predicate::all(vec![
            Predicate::eq("org_id", 1i64),
            Predicate::any(vec![
                Predicate::eq("user_id", 2i64),
                Predicate::eq("team_id", 3i64),
            ]),
        ])
        .render();
        assert_eq!(
            fragment.sql(),
            "org_id = ? AND (user_id = ? OR team_id = ?)"
        );
    }

    #[test]
    fn test_raw_carries_no_params() {
        let fragment = Predicate::all(vec![
            Predicate::raw("folder.is_folder = 1"),
            Predicate::eq("c.org_id", 9i64),
        ])
        .render();
        assert_eq!(fragment.sql(), "folder.is_folder = 1 AND c.org_id = ?");
        assert_eq!(fragment.params().len(), 1);
    }

    #[test]
    fn test_placeholder_count_matches_params() {
        let fragment = Predicate::all(vec![
            Predicate::eq("a", 1i64),
            Predicate::ge("b", 2i64),
            Predicate::in_list("c", vec![SqlParam::Int(3), SqlParam::Int(4)]),
        ])
        .render();
        assert_eq!(fragment.placeholder_count(), fragment.params().len());
    }

    #[test]
    fn test_empty_groups() {
        assert_eq!(Predicate::all(vec![]).render().sql(), "1 = 1");
        assert_eq!(Predicate::any(vec![]).render().sql(), "1 = 0");
    }
}
