//! # Canopy SQL
//!
//! Parameterized SQL fragment assembly for the Canopy platform,
//! shared by the visibility resolver and the listing query layer.
//!
//! ## Overview
//!
//! The canopy-sql crate handles:
//! - **Parameters**: typed positional bind values (`SqlParam`)
//! - **Builder**: accumulation of fragment text and ordered parameters (`SqlBuilder`)
//! - **Fragments**: a rendered `(text, params)` pair (`QueryFragment`)
//! - **Predicates**: a small typed expression tree that renders exactly one
//!   placeholder per carried parameter (`Predicate`)
//! - **Dialects**: backend-specific literal syntax (`Dialect`)
//!
//! ## Architecture
//!
//! ```text
//! Predicate tree ──render──▶ QueryFragment ──write/add_params──▶ SqlBuilder
//!                                                                    │
//!                                                          (sql, params) to storage
//! ```
//!
//! ## Positional parameter contract
//!
//! The final parameter list's order must match the order in which `?`
//! placeholders appear in the concatenated text, across all `write` calls.
//! `SqlBuilder` performs no validation; fragments produced through
//! [`Predicate::render`] keep the two aligned by construction.
//!
//! ## Usage
//!
//! ```rust
//! use canopy_sql::{Predicate, SqlBuilder, SqlParam};
//!
//! let filter = Predicate::all(vec![
//!     Predicate::eq("c.org_id", 42i64),
//!     Predicate::any(vec![
//!         Predicate::eq("a.user_id", 7i64),
//!         Predicate::in_list("a.role", vec![SqlParam::from("viewer")]),
//!     ]),
//! ]);
//!
//! let mut builder = SqlBuilder::new();
//! builder.write("SELECT c.id FROM content AS c WHERE ", &[]);
//! let fragment = filter.render();
//! builder.write(fragment.sql(), fragment.params());
//!
//! assert_eq!(builder.params().len(), 3);
//! ```

pub mod builder;
pub mod dialect;
pub mod fragment;
pub mod param;
pub mod predicate;

// Re-export main types for convenience
pub use builder::SqlBuilder;
pub use dialect::{Dialect, MySql, Postgres, Sqlite};
pub use fragment::QueryFragment;
pub use param::SqlParam;
pub use predicate::{CmpOp, Predicate};
