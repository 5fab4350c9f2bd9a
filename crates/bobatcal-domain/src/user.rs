//! User domain types.

use serde::{Deserialize, Serialize};

/// User permission level.
///
/// Wire format: `u8` (0 = User, 1 = Admin). Stored in the users table as a
/// small integer; unknown stored values are treated as unauthenticated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    User = 0,
    Admin = 1,
}

impl UserRole {
    /// Convert from `u8` wire value. Returns `None` for unknown values.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::User),
            1 => Some(Self::Admin),
            _ => None,
        }
    }

    /// Convert to `u8` wire value.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Capability gate for catalog mutations (shop and drink creation).
    ///
    /// Rating submission is NOT gated on this — any authenticated role
    /// may rate.
    pub fn can_manage_catalog(self) -> bool {
        matches!(self, Self::Admin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_convert_u8_to_user_role() {
        assert_eq!(UserRole::from_u8(0), Some(UserRole::User));
        assert_eq!(UserRole::from_u8(1), Some(UserRole::Admin));
        assert_eq!(UserRole::from_u8(2), None);
        assert_eq!(UserRole::from_u8(255), None);
    }

    #[test]
    fn should_convert_user_role_to_u8() {
        assert_eq!(UserRole::User.as_u8(), 0);
        assert_eq!(UserRole::Admin.as_u8(), 1);
    }

    #[test]
    fn should_gate_catalog_management_on_admin() {
        assert!(!UserRole::User.can_manage_catalog());
        assert!(UserRole::Admin.can_manage_catalog());
    }

    #[test]
    fn should_round_trip_user_role_via_serde() {
        for role in [UserRole::User, UserRole::Admin] {
            let json = serde_json::to_string(&role).unwrap();
            let parsed: UserRole = serde_json::from_str(&json).unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn should_serialize_role_as_snake_case() {
        assert_eq!(serde_json::to_string(&UserRole::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&UserRole::Admin).unwrap(),
            "\"admin\""
        );
    }
}
