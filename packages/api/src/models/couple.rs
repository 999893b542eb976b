use serde::{Deserialize, Serialize};

use super::User;

/// Two users sharing a ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Couple {
    pub id: String,
    pub user1: User,
    pub user2: User,
    pub created_at: String,
}

impl Couple {
    /// The member who is not `user_id`.
    pub fn partner_of(&self, user_id: &str) -> &User {
        if self.user1.id == user_id {
            &self.user2
        } else {
            &self.user1
        }
    }

    pub fn members(&self) -> [&User; 2] {
        [&self.user1, &self.user2]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InviteCode {
    pub id: String,
    pub code: String,
    pub expires_at: String,
    pub used: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub(crate) struct InviteRequest {
    pub hours_valid: u32,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub(crate) struct JoinRequest<'a> {
    pub invite_code: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "email": format!("{id}@example.com"),
            "name": null,
            "picture_url": null,
            "is_admin": false,
            "created_at": "2026-01-10T00:00:00",
            "updated_at": "2026-01-10T00:00:00"
        })
    }

    #[test]
    fn test_partner_of() {
        let couple: Couple = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "user1": user("u1"),
            "user2": user("u2"),
            "created_at": "2026-01-10T00:00:00"
        }))
        .unwrap();

        assert_eq!(couple.partner_of("u1").id, "u2");
        assert_eq!(couple.partner_of("u2").id, "u1");
    }

    #[test]
    fn test_null_couple_is_none() {
        let couple: Option<Couple> = serde_json::from_str("null").unwrap();
        assert!(couple.is_none());
    }
}
