//! # Canopy Visibility
//!
//! Content-tree visibility resolution for the Canopy platform: given a
//! principal (org role, user, org, required permission level), compute the
//! effective visibility of every item in the two-level folder/item
//! hierarchy as a parameterized SQL derived table.
//!
//! ## Overview
//!
//! The canopy-visibility crate handles:
//! - **Roles**: the org role hierarchy and its explicit implication set
//! - **Levels**: ordinal permission levels carried by entries
//! - **Scopes**: org-scoped vs. org-wide-default access-control entries
//! - **Records**: the content / ACL / team-membership schema contract
//! - **Resolution**: [`VisibilityTable`], the fragment generator
//!
//! ## Visibility model
//!
//! Three authorization sources are reconciled per content id, taking the
//! per-flag maximum so any single qualifying path grants access:
//!
//! 1. explicit entries on the item or its folder (user / team / role);
//! 2. folder listability inherited from any granted child;
//! 3. the org-wide default, which applies only to content with no explicit
//!    entries at all — explicit entries fully shadow the default, even when
//!    they do not match the principal.
//!
//! Role matching honors hierarchy implication: an Editor matches
//! Viewer-scoped entries; nobody below Admin matches Admin-scoped ones.
//! Admin principals skip resolution entirely and see everything.
//!
//! ## Usage
//!
//! ```rust
//! use canopy_sql::{Sqlite, SqlBuilder};
//! use canopy_visibility::{OrgRole, PermissionLevel, Principal, VisibilityTable};
//!
//! let table = VisibilityTable::new(Principal::new(
//!     OrgRole::Editor,
//!     7,
//!     42,
//!     PermissionLevel::View,
//! ));
//! let fragment = table.fragment(&Sqlite);
//!
//! // Embed as a derived table inside a listing query.
//! let mut builder = SqlBuilder::new();
//! builder.write("SELECT c.id, c.title FROM content AS c JOIN ", &[]);
//! builder.write(fragment.sql(), &[]);
//! builder.add_params(fragment.params());
//! builder.write(" AS vis ON vis.c_id = c.id WHERE vis.listable = 1", &[]);
//! ```

pub mod ace;
pub mod error;
pub mod level;
pub mod principal;
pub mod roles;
pub mod scope;
pub mod table;

// Re-export main types for convenience
pub use ace::{AccessControlEntry, AceTarget, ContentRecord, TeamMembership};
pub use error::{ParseError, ParseResult};
pub use level::PermissionLevel;
pub use principal::Principal;
pub use roles::OrgRole;
pub use scope::AclScope;
pub use table::VisibilityTable;
