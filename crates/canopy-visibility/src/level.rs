//! Permission levels
//!
//! Ordinal permission levels stored on access-control entries. An entry
//! satisfies a resolution when its ordinal is `>=` the required level, so
//! an Edit grant also satisfies a View requirement.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// Permission level required by a resolution or carried by an ACE.
///
/// Ordinal gaps are deliberate; they leave room for intermediate levels
/// without renumbering stored entries.
///
/// # Examples
///
/// ```
/// use canopy_visibility::PermissionLevel;
///
/// assert!(PermissionLevel::Edit.as_ord() >= PermissionLevel::View.as_ord());
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PermissionLevel {
    /// Open and read content
    View = 1,

    /// Modify content
    Edit = 2,

    /// Administer content permissions
    Admin = 4,
}

impl PermissionLevel {
    /// The stored ordinal for this level.
    pub fn as_ord(&self) -> i64 {
        *self as i64
    }

    /// Resolve a stored ordinal back to a level.
    ///
    /// Unknown ordinals are an error, never a defaulted level.
    ///
    /// # Examples
    ///
    /// ```
    /// use canopy_visibility::PermissionLevel;
    ///
    /// assert_eq!(PermissionLevel::from_ord(2), Ok(PermissionLevel::Edit));
    /// assert!(PermissionLevel::from_ord(3).is_err());
    /// ```
    pub fn from_ord(ord: i64) -> Result<Self, ParseError> {
        match ord {
            1 => Ok(PermissionLevel::View),
            2 => Ok(PermissionLevel::Edit),
            4 => Ok(PermissionLevel::Admin),
            other => Err(ParseError::UnknownPermissionLevel(other)),
        }
    }

    /// Check whether a grant at this level satisfies a requirement.
    pub fn satisfies(&self, required: PermissionLevel) -> bool {
        self.as_ord() >= required.as_ord()
    }
}

impl Default for PermissionLevel {
    fn default() -> Self {
        PermissionLevel::View
    }
}
