//! User profile domain entity

use chrono::{DateTime, Utc};

/// Driver profile, owned 1:1 by an authenticated user.
///
/// Created lazily on first access and mutated only through the profile edit
/// form.
#[derive(Debug, Clone)]
pub struct UserProfile {
    /// Owning user ID (primary key)
    pub user_id: String,
    pub full_name: String,
    /// Free-form vehicle description, e.g. "Tesla Model Y"
    pub vehicle: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserProfile {
    /// Fresh profile for a user who has none yet
    pub fn new(user_id: impl Into<String>, full_name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            user_id: user_id.into(),
            full_name: full_name.into(),
            vehicle: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile edit
    pub fn edit(&mut self, full_name: impl Into<String>, vehicle: impl Into<String>) {
        self.full_name = full_name.into();
        self.vehicle = vehicle.into();
        self.updated_at = Utc::now();
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_profile_has_empty_vehicle() {
        let p = UserProfile::new("user-001", "alex");
        assert_eq!(p.full_name, "alex");
        assert!(p.vehicle.is_empty());
    }

    #[test]
    fn edit_updates_fields_and_timestamp() {
        let mut p = UserProfile::new("user-001", "alex");
        let before = p.updated_at;
        p.edit("Alex Doe", "Tesla Model Y");
        assert_eq!(p.full_name, "Alex Doe");
        assert_eq!(p.vehicle, "Tesla Model Y");
        assert!(p.updated_at >= before);
    }
}
