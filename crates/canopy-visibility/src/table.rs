//! Visibility table resolution
//!
//! Produces the derived-table fragment mapping every content id to its
//! visibility flags for one principal:
//!
//! - `viewable` — content may be opened directly (by url)
//! - `listable` — content may be shown in listing views
//! - `folder_viewable` — the item's containing folder may be opened; used
//!   when items are fetched without their folders
//!
//! Three derivations feed the result and are reconciled per content id by
//! taking the MAX of each flag, so one qualifying path is sufficient and no
//! derivation can revoke another's grant:
//!
//! 1. an explicit entry on the item or its folder matches the principal
//!    (by user, team membership, or implied role);
//! 2. a folder is listable whenever any of its children is granted, so
//!    navigation never shows orphaned items;
//! 3. the org-wide default applies, but only to content whose item/folder
//!    carries no explicit entries at all.

use canopy_sql::{Dialect, Predicate, QueryFragment, SqlBuilder, SqlParam};

use crate::principal::Principal;
use crate::scope::AclScope;

/// Resolves one principal into a visibility derived-table fragment.
///
/// The fragment yields rows shaped
/// `(c_id, viewable 0|1, listable 0|1, folder_viewable 0|1)`, one row per
/// content id with any visibility, meant to be joined into listing queries
/// by content id. Resolution is pure and deterministic: identical inputs
/// produce byte-identical text and parameters.
///
/// # Parameter contract
///
/// Callers binding the fragment must supply values in exactly the order
/// returned: per derivation, in source order,
/// `(org_id, permission_level, user_id, user_id, roles...)` for the two
/// entry-matching derivations and `(org_id, permission_level, user_id,
/// roles...)` for the default derivation. The role list is the principal
/// role's [`implies`](crate::OrgRole::implies) set.
///
/// # Examples
///
/// ```
/// use canopy_sql::Sqlite;
/// use canopy_visibility::{OrgRole, PermissionLevel, Principal, VisibilityTable};
///
/// let table = VisibilityTable::new(Principal::new(
///     OrgRole::Viewer,
///     7,
///     42,
///     PermissionLevel::View,
/// ));
/// let fragment = table.fragment(&Sqlite);
/// assert_eq!(fragment.placeholder_count(), fragment.params().len());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct VisibilityTable {
    /// The subject of the resolution.
    pub principal: Principal,
}

impl VisibilityTable {
    /// Creates a resolver for one principal.
    pub fn new(principal: Principal) -> Self {
        Self { principal }
    }

    /// Renders the visibility derived-table fragment for `dialect`.
    ///
    /// Admin principals bypass entry matching entirely: every content row
    /// is fully visible and the fragment carries no parameters.
    pub fn fragment(&self, dialect: &dyn Dialect) -> QueryFragment {
        if self.principal.org_role.is_admin() {
            return QueryFragment::new(
                "(SELECT id AS c_id, 1 AS viewable, 1 AS listable, 1 AS folder_viewable \
                 FROM content)"
                    .to_string(),
                Vec::new(),
            );
        }

        let role_params: Vec<SqlParam> = self
            .principal
            .org_role
            .implies()
            .iter()
            .map(|role| SqlParam::from(role.as_str()))
            .collect();

        let mut builder = SqlBuilder::new();
        builder.write(
            "(SELECT c_id, MAX(viewable) AS viewable, MAX(listable) AS listable, \
             MAX(folder_viewable) AS folder_viewable FROM (",
            &[],
        );

        self.write_entry_grants(&mut builder, &role_params);
        builder.write(" UNION ", &[]);
        self.write_child_grants(&mut builder, dialect, &role_params);
        builder.write(" UNION ", &[]);
        self.write_default_grants(&mut builder, dialect, &role_params);

        builder.write(") AS vis GROUP BY c_id)", &[]);

        let (sql, params) = builder.into_parts();
        QueryFragment::new(sql, params)
    }

    /// Derivation 1: an explicit entry on the item or its folder matches.
    ///
    /// `folder_viewable` is set exactly when the matching entry hangs on the
    /// item's folder, since that grant opens the folder itself.
    fn write_entry_grants(&self, builder: &mut SqlBuilder, role_params: &[SqlParam]) {
        builder.write(
            "SELECT c.id AS c_id, 1 AS viewable, 1 AS listable, \
             CASE WHEN acl.content_id = c.folder_id THEN 1 ELSE 0 END AS folder_viewable \
             FROM content AS c \
             LEFT JOIN content AS folder ON folder.id = c.folder_id \
             LEFT JOIN content_acl AS acl ON acl.content_id = c.id OR acl.content_id = c.folder_id \
             LEFT JOIN team_member AS tm ON tm.team_id = acl.team_id \
             WHERE ",
            &[],
        );
        let filter = self.entry_filter(role_params, true).render();
        builder.write(filter.sql(), filter.params());
    }

    /// Derivation 2: a folder is listable when any child is granted.
    ///
    /// Only the children's entries are consulted; the folder's own entries
    /// and the org default play no part here.
    fn write_child_grants(
        &self,
        builder: &mut SqlBuilder,
        dialect: &dyn Dialect,
        role_params: &[SqlParam],
    ) {
        builder.write(
            "SELECT folder.id AS c_id, 0 AS viewable, 1 AS listable, 0 AS folder_viewable \
             FROM content AS folder \
             LEFT JOIN content AS c ON folder.id = c.folder_id \
             LEFT JOIN content_acl AS acl ON acl.content_id = c.id \
             LEFT JOIN team_member AS tm ON tm.team_id = acl.team_id \
             WHERE ",
            &[],
        );
        let filter = Predicate::all(vec![
            Predicate::raw(format!(
                "folder.is_folder = {}",
                dialect.boolean_str(true)
            )),
            self.entry_filter(role_params, true),
        ])
        .render();
        builder.write(filter.sql(), filter.params());
    }

    /// Derivation 3: the org-wide default, shadowed by any explicit entry.
    ///
    /// The join admits default-scoped entries only when the item's folder
    /// (or the item itself, when it has no folder) carries no explicit
    /// entries. Team-scoped defaults are not evaluated; defaults are
    /// org-level, not team-level.
    fn write_default_grants(
        &self,
        builder: &mut SqlBuilder,
        dialect: &dyn Dialect,
        role_params: &[SqlParam],
    ) {
        let no_acl = dialect.boolean_str(false);
        builder.write(
            &format!(
                "SELECT c.id AS c_id, 1 AS viewable, 1 AS listable, \
                 CASE WHEN folder.id = c.folder_id THEN 1 ELSE 0 END AS folder_viewable \
                 FROM content AS c \
                 LEFT JOIN content AS folder ON folder.id = c.folder_id \
                 LEFT JOIN content_acl AS acl ON (acl.org_id = {default_org} AND \
                 ((folder.id IS NOT NULL AND folder.has_acl = {no_acl}) OR \
                 (folder.id IS NULL AND c.has_acl = {no_acl}))) \
                 WHERE ",
                default_org = AclScope::Default.org_id(),
                no_acl = no_acl,
            ),
            &[],
        );
        let filter = self.entry_filter(role_params, false).render();
        builder.write(filter.sql(), filter.params());
    }

    /// The shared entry filter:
    /// `(org_id, permission_level, user_id[, user_id], roles...)`.
    ///
    /// Predicate order is the parameter contract; do not reorder.
    fn entry_filter(&self, role_params: &[SqlParam], match_teams: bool) -> Predicate {
        let principal = &self.principal;
        let mut subject = vec![Predicate::eq("acl.user_id", principal.user_id)];
        if match_teams {
            subject.push(Predicate::eq("tm.user_id", principal.user_id));
        }
        subject.push(Predicate::in_list("acl.role", role_params.to_vec()));

        Predicate::all(vec![
            Predicate::eq("c.org_id", principal.org_id),
            Predicate::ge("acl.permission", principal.permission_level.as_ord()),
            Predicate::any(subject),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::PermissionLevel;
    use crate::roles::OrgRole;
    use canopy_sql::{Postgres, Sqlite};

    fn table(role: OrgRole) -> VisibilityTable {
        VisibilityTable::new(Principal::new(role, 7, 42, PermissionLevel::View))
    }

    #[test]
    fn test_admin_fast_path_has_no_params() {
        let fragment = table(OrgRole::Admin).fragment(&Sqlite);
        assert!(fragment.params().is_empty());
        assert_eq!(fragment.placeholder_count(), 0);
        assert!(fragment.sql().contains("1 AS viewable"));
        assert!(!fragment.sql().contains("UNION"));
    }

    #[test]
    fn test_placeholder_count_matches_params_for_each_roleset_size() {
        for role in [OrgRole::Viewer, OrgRole::Editor] {
            let fragment = table(role).fragment(&Sqlite);
            assert_eq!(
                fragment.placeholder_count(),
                fragment.params().len(),
                "role {role:?}"
            );
        }
    }

    #[test]
    fn test_viewer_param_order_contract() {
        let fragment = table(OrgRole::Viewer).fragment(&Sqlite);
        // Three derivations: (org, level, user, user, viewer) twice, then
        // (org, level, user, viewer) for the default derivation.
        let expected: Vec<SqlParam> = vec![
            42i64.into(),
            1i64.into(),
            7i64.into(),
            7i64.into(),
            "viewer".into(),
            42i64.into(),
            1i64.into(),
            7i64.into(),
            7i64.into(),
            "viewer".into(),
            42i64.into(),
            1i64.into(),
            7i64.into(),
            "viewer".into(),
        ];
        assert_eq!(fragment.params(), expected.as_slice());
    }

    #[test]
    fn test_editor_binds_implied_viewer_role() {
        let fragment = table(OrgRole::Editor).fragment(&Sqlite);
        let roles: Vec<&SqlParam> = fragment
            .params()
            .iter()
            .filter(|p| matches!(p, SqlParam::Text(_)))
            .collect();
        // Editor and its implied Viewer, once per derivation.
        assert_eq!(roles.len(), 6);
        assert_eq!(roles[0], &SqlParam::Text("editor".into()));
        assert_eq!(roles[1], &SqlParam::Text("viewer".into()));
        assert!(fragment.sql().contains("acl.role IN (?,?)"));
    }

    #[test]
    fn test_fragment_is_deterministic() {
        let first = table(OrgRole::Editor).fragment(&Sqlite);
        let second = table(OrgRole::Editor).fragment(&Sqlite);
        assert_eq!(first, second);
    }

    #[test]
    fn test_three_derivations_unioned() {
        let fragment = table(OrgRole::Viewer).fragment(&Sqlite);
        assert_eq!(fragment.sql().matches("UNION").count(), 2);
        assert_eq!(fragment.sql().matches("GROUP BY c_id").count(), 1);
    }

    #[test]
    fn test_default_derivation_skips_team_matching() {
        let fragment = table(OrgRole::Viewer).fragment(&Sqlite);
        // Team joins appear in derivations 1 and 2 only.
        assert_eq!(fragment.sql().matches("tm.user_id = ?").count(), 2);
        assert_eq!(
            fragment
                .sql()
                .matches(&format!("acl.org_id = {}", AclScope::DEFAULT_ORG_ID))
                .count(),
            1
        );
    }

    #[test]
    fn test_dialect_booleans_rendered() {
        let sqlite = table(OrgRole::Viewer).fragment(&Sqlite);
        assert!(sqlite.sql().contains("folder.is_folder = 1"));
        assert!(sqlite.sql().contains("folder.has_acl = 0"));

        let postgres = table(OrgRole::Viewer).fragment(&Postgres);
        assert!(postgres.sql().contains("folder.is_folder = TRUE"));
        assert!(postgres.sql().contains("folder.has_acl = FALSE"));
    }
}
