//! Access-control and content record models
//!
//! These mirror the persisted records the generated fragment queries:
//! content rows (items and folders), access-control entries, and team
//! memberships. The resolver itself never loads them — they define the
//! schema contract and drive test fixtures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::level::PermissionLevel;
use crate::roles::OrgRole;
use crate::scope::AclScope;

/// Who an access-control entry grants to. Exactly one of user, team, or role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AceTarget {
    /// Grant to a single user.
    User(i64),

    /// Grant to every member of a team.
    Team(i64),

    /// Grant to every principal whose role implies this role.
    Role(OrgRole),
}

/// A persisted access-control entry on an item or folder.
///
/// # Examples
///
/// ```
/// use canopy_visibility::{AccessControlEntry, AceTarget, AclScope, PermissionLevel};
///
/// let ace = AccessControlEntry::new(
///     AclScope::Org(42),
///     10,
///     PermissionLevel::View,
///     AceTarget::Team(3),
/// );
/// assert_eq!(ace.content_id, 10);
/// assert!(!ace.scope.is_default());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessControlEntry {
    /// Org scope, or the org-wide default.
    pub scope: AclScope,

    /// The item or folder this entry hangs on.
    pub content_id: i64,

    /// Granted permission level.
    pub permission: PermissionLevel,

    /// Who the entry grants to.
    pub target: AceTarget,

    /// When the entry was created.
    pub created: DateTime<Utc>,

    /// When the entry was last updated.
    pub updated: DateTime<Utc>,
}

impl AccessControlEntry {
    /// Creates a new entry with current timestamps.
    ///
    /// # Arguments
    ///
    /// * `scope` - Org scope or org-wide default
    /// * `content_id` - Target item or folder id
    /// * `permission` - Granted level
    /// * `target` - User, team, or role the entry grants to
    pub fn new(
        scope: AclScope,
        content_id: i64,
        permission: PermissionLevel,
        target: AceTarget,
    ) -> Self {
        let now = Utc::now();
        Self {
            scope,
            content_id,
            permission,
            target,
            created: now,
            updated: now,
        }
    }

    /// The user-id column value, when user-targeted.
    pub fn user_id(&self) -> Option<i64> {
        match self.target {
            AceTarget::User(user_id) => Some(user_id),
            _ => None,
        }
    }

    /// The team-id column value, when team-targeted.
    pub fn team_id(&self) -> Option<i64> {
        match self.target {
            AceTarget::Team(team_id) => Some(team_id),
            _ => None,
        }
    }

    /// The role column value, when role-targeted.
    pub fn role(&self) -> Option<OrgRole> {
        match self.target {
            AceTarget::Role(role) => Some(role),
            _ => None,
        }
    }
}

/// Team membership linking a user to a team.
///
/// Team-scoped entries resolve to principals through this relation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamMembership {
    /// Team ID
    pub team_id: i64,

    /// User ID
    pub user_id: i64,
}

impl TeamMembership {
    /// Creates a membership record.
    pub fn new(team_id: i64, user_id: i64) -> Self {
        Self { team_id, user_id }
    }
}

/// A row in the content tree: an item, or a folder when `is_folder` is set.
///
/// The hierarchy is exactly two levels; folders never nest.
///
/// # Examples
///
/// ```
/// use canopy_visibility::ContentRecord;
///
/// let folder = ContentRecord::folder(1, 42, "Reports");
/// let item = ContentRecord::item(2, 42, "Q3").in_folder(folder.id);
/// assert_eq!(item.folder_id, Some(1));
/// assert!(folder.is_folder);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Content ID
    pub id: i64,

    /// Owning organization
    pub org_id: i64,

    /// Containing folder, if any
    pub folder_id: Option<i64>,

    /// Whether this row is a folder
    pub is_folder: bool,

    /// Whether any explicit access-control entry targets this row directly
    pub has_acl: bool,

    /// Display title
    pub title: String,
}

impl ContentRecord {
    /// Creates a top-level item with no explicit entries.
    pub fn item(id: i64, org_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            org_id,
            folder_id: None,
            is_folder: false,
            has_acl: false,
            title: title.into(),
        }
    }

    /// Creates a folder with no explicit entries.
    pub fn folder(id: i64, org_id: i64, title: impl Into<String>) -> Self {
        Self {
            id,
            org_id,
            folder_id: None,
            is_folder: true,
            has_acl: false,
            title: title.into(),
        }
    }

    /// Places this item inside a folder.
    pub fn in_folder(mut self, folder_id: i64) -> Self {
        self.folder_id = Some(folder_id);
        self
    }

    /// Marks this row as carrying explicit access-control entries.
    pub fn with_acl(mut self) -> Self {
        self.has_acl = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ace_target_columns() {
        let user_ace = AccessControlEntry::new(
            AclScope::Org(1),
            10,
            PermissionLevel::View,
            AceTarget::User(7),
        );
        assert_eq!(user_ace.user_id(), Some(7));
        assert_eq!(user_ace.team_id(), None);
        assert_eq!(user_ace.role(), None);

        let role_ace = AccessControlEntry::new(
            AclScope::Default,
            10,
            PermissionLevel::View,
            AceTarget::Role(OrgRole::Viewer),
        );
        assert_eq!(role_ace.role(), Some(OrgRole::Viewer));
        assert!(role_ace.scope.is_default());
    }

    #[test]
    fn test_content_record_builders() {
        let folder = ContentRecord::folder(1, 42, "Reports");
        assert!(folder.is_folder);
        assert!(folder.folder_id.is_none());

        let item = ContentRecord::item(2, 42, "Q3").in_folder(1).with_acl();
        assert_eq!(item.folder_id, Some(1));
        assert!(item.has_acl);
        assert!(!item.is_folder);
    }

    #[test]
    fn test_team_membership() {
        let membership = TeamMembership::new(3, 7);
        assert_eq!(membership.team_id, 3);
        assert_eq!(membership.user_id, 7);
    }
}
