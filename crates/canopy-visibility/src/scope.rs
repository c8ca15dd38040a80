//! ACL entry scope
//!
//! An access-control entry is either scoped to one organization or is an
//! org-wide default. Defaults apply only to content with no explicit
//! entries at all; explicit entries fully shadow them.

use serde::{Deserialize, Serialize};

/// Scope of an access-control entry.
///
/// The storage layer persists scope as an org-id column where
/// [`AclScope::DEFAULT_ORG_ID`] marks a default entry; this type keeps that
/// encoding out of the rest of the crate.
///
/// # Examples
///
/// ```
/// use canopy_visibility::AclScope;
///
/// assert_eq!(AclScope::Org(42).org_id(), 42);
/// assert_eq!(AclScope::Default.org_id(), AclScope::DEFAULT_ORG_ID);
/// assert!(AclScope::Default.is_default());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum AclScope {
    /// Entry applies within one organization.
    Org(i64),

    /// Org-wide default; applies only to content with no explicit entries.
    Default,
}

impl AclScope {
    /// Stored org-id value marking a default entry.
    pub const DEFAULT_ORG_ID: i64 = -1;

    /// The org-id column value this scope persists as.
    pub fn org_id(&self) -> i64 {
        match self {
            AclScope::Org(org_id) => *org_id,
            AclScope::Default => Self::DEFAULT_ORG_ID,
        }
    }

    /// Resolve a stored org-id column value back to a scope.
    pub fn from_org_id(org_id: i64) -> Self {
        if org_id == Self::DEFAULT_ORG_ID {
            AclScope::Default
        } else {
            AclScope::Org(org_id)
        }
    }

    /// Check whether this is the org-wide default scope.
    pub fn is_default(&self) -> bool {
        matches!(self, AclScope::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_scope_roundtrip() {
        let scope = AclScope::Org(42);
        assert_eq!(scope.org_id(), 42);
        assert_eq!(AclScope::from_org_id(42), scope);
        assert!(!scope.is_default());
    }

    #[test]
    fn test_default_scope_roundtrip() {
        assert_eq!(AclScope::Default.org_id(), -1);
        assert_eq!(AclScope::from_org_id(-1), AclScope::Default);
        assert!(AclScope::Default.is_default());
    }
}
