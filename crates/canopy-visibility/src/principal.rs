//! Principal descriptor
//!
//! The immutable input to one visibility resolution: who is asking, in
//! which organization, and at what required permission level.

use serde::{Deserialize, Serialize};

use crate::level::PermissionLevel;
use crate::roles::OrgRole;

/// The subject of a visibility resolution.
///
/// Team memberships are not carried here; the generated fragment joins the
/// team-membership table by `user_id` instead, so membership changes take
/// effect without re-resolving.
///
/// # Examples
///
/// ```
/// use canopy_visibility::{OrgRole, PermissionLevel, Principal};
///
/// let principal = Principal::new(OrgRole::Editor, 7, 42, PermissionLevel::View);
/// assert_eq!(principal.org_role, OrgRole::Editor);
/// assert!(!principal.org_role.is_admin());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    /// Role within the organization
    pub org_role: OrgRole,

    /// User ID
    pub user_id: i64,

    /// Organization the resolution runs in
    pub org_id: i64,

    /// Minimum permission level an entry must grant to count
    pub permission_level: PermissionLevel,
}

impl Principal {
    /// Creates a principal descriptor.
    ///
    /// # Arguments
    ///
    /// * `org_role` - The user's role in the organization
    /// * `user_id` - The user ID
    /// * `org_id` - The organization ID
    /// * `permission_level` - Minimum required permission level
    pub fn new(
        org_role: OrgRole,
        user_id: i64,
        org_id: i64,
        permission_level: PermissionLevel,
    ) -> Self {
        Self {
            org_role,
            user_id,
            org_id,
            permission_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principal_creation() {
        let principal = Principal::new(OrgRole::Viewer, 7, 42, PermissionLevel::View);
        assert_eq!(principal.user_id, 7);
        assert_eq!(principal.org_id, 42);
        assert_eq!(principal.permission_level, PermissionLevel::View);
    }
}
