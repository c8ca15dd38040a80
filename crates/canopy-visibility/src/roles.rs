//! Organization roles and role-hierarchy implication
//!
//! Roles are hierarchical: Viewer < Editor < Admin. An ACE scoped to a role
//! satisfies any principal whose role implies it, which is how an Editor
//! matches Viewer-scoped grants without an explicit subtype relation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// User role within an organization.
///
/// # Examples
///
/// ```
/// use canopy_visibility::OrgRole;
///
/// assert!(OrgRole::Admin > OrgRole::Editor);
/// assert_eq!(OrgRole::Editor.implies(), &[OrgRole::Editor, OrgRole::Viewer]);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrgRole {
    /// Read-only access to organization content
    Viewer = 1,

    /// Can create and edit content
    Editor = 2,

    /// Full organization control; bypasses ACL resolution entirely
    Admin = 3,
}

impl OrgRole {
    /// The set of roles whose access-control entries satisfy this role.
    ///
    /// Total over the enum: Viewer implies only itself, Editor implies
    /// Editor and Viewer. Admin implies only itself here — admin principals
    /// never reach role matching because the resolver takes the admin fast
    /// path first.
    ///
    /// The returned slice is ordered with the role itself first, and that
    /// order is part of the fragment parameter contract.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopy_visibility::OrgRole;
    ///
    /// assert_eq!(OrgRole::Viewer.implies(), &[OrgRole::Viewer]);
    /// assert_eq!(OrgRole::Editor.implies(), &[OrgRole::Editor, OrgRole::Viewer]);
    /// ```
    pub fn implies(&self) -> &'static [OrgRole] {
        match self {
            OrgRole::Viewer => &[OrgRole::Viewer],
            OrgRole::Editor => &[OrgRole::Editor, OrgRole::Viewer],
            OrgRole::Admin => &[OrgRole::Admin],
        }
    }

    /// Check if this role bypasses ACL resolution.
    pub fn is_admin(&self) -> bool {
        matches!(self, OrgRole::Admin)
    }

    /// Get the string representation of the role.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopy_visibility::OrgRole;
    ///
    /// assert_eq!(OrgRole::Editor.as_str(), "editor");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            OrgRole::Viewer => "viewer",
            OrgRole::Editor => "editor",
            OrgRole::Admin => "admin",
        }
    }
}

impl fmt::Display for OrgRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrgRole {
    type Err = ParseError;

    /// Parse a role from its storage string (case-insensitive).
    ///
    /// Unknown strings are an error, never a default role.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopy_visibility::OrgRole;
    ///
    /// assert_eq!("EDITOR".parse::<OrgRole>(), Ok(OrgRole::Editor));
    /// assert!("superuser".parse::<OrgRole>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "viewer" => Ok(OrgRole::Viewer),
            "editor" => Ok(OrgRole::Editor),
            "admin" => Ok(OrgRole::Admin),
            _ => Err(ParseError::UnknownRole(s.to_string())),
        }
    }
}

impl Default for OrgRole {
    fn default() -> Self {
        OrgRole::Viewer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_hierarchy() {
        assert!(OrgRole::Admin > OrgRole::Editor);
        assert!(OrgRole::Editor > OrgRole::Viewer);
    }

    #[test]
    fn test_implies_is_total_and_nonempty() {
        for role in [OrgRole::Viewer, OrgRole::Editor, OrgRole::Admin] {
            assert!(!role.implies().is_empty());
            assert_eq!(role.implies()[0], role);
        }
    }

    #[test]
    fn test_editor_implies_viewer() {
        assert_eq!(OrgRole::Editor.implies(), &[OrgRole::Editor, OrgRole::Viewer]);
    }

    #[test]
    fn test_viewer_implies_only_itself() {
        assert_eq!(OrgRole::Viewer.implies(), &[OrgRole::Viewer]);
    }

    #[test]
    fn test_viewer_does_not_imply_editor() {
        assert!(!OrgRole::Viewer.implies().contains(&OrgRole::Editor));
    }

    #[test]
    fn test_parse_roundtrip() {
        for role in [OrgRole::Viewer, OrgRole::Editor, OrgRole::Admin] {
            assert_eq!(role.as_str().parse::<OrgRole>(), Ok(role));
        }
    }

    #[test]
    fn test_parse_unknown_fails_loudly() {
        assert_eq!(
            "superuser".parse::<OrgRole>(),
            Err(ParseError::UnknownRole("superuser".to_string()))
        );
    }
}
