use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Developer,
    Admin,
    #[default]
    #[serde(other)]
    User,
}

impl UserRole {
    pub const ALL: [UserRole; 3] = [UserRole::User, UserRole::Admin, UserRole::Developer];

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::Developer => "developer",
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::Developer => "Developer",
            UserRole::Admin => "Administrator",
            UserRole::User => "Operator",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "developer" => UserRole::Developer,
            "admin" => UserRole::Admin,
            _ => UserRole::User,
        }
    }

    /// Roles allowed to see team-wide figures.
    pub fn can_manage_team(self) -> bool {
        matches!(self, UserRole::Developer | UserRole::Admin)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(
        rename = "isActive",
        alias = "is_active",
        default,
        deserialize_with = "flag_from_bool_or_number"
    )]
    pub is_active: bool,
    #[serde(default, alias = "createdAt")]
    pub created_at: Option<String>,
}

/// Create/update payload. `password` is omitted on edit when left blank.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserDto {
    pub name: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: UserRole,
    #[serde(rename = "isActive")]
    pub is_active: bool,
}

/// `PUT /auth/profile` payload: display name and an optional new password.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Some deployments store the active flag as `1`/`0`.
fn flag_from_bool_or_number<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flag {
        Bool(bool),
        Number(i64),
        Missing(Option<()>),
    }

    Ok(match Flag::deserialize(deserializer)? {
        Flag::Bool(b) => b,
        Flag::Number(n) => n == 1,
        Flag::Missing(_) => false,
    })
}

pub fn count_active(users: &[User]) -> usize {
    users.iter().filter(|u| u.is_active).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_flag_accepts_numbers_and_booleans() {
        let users: Vec<User> = serde_json::from_str(
            r#"[
                {"id": "1", "username": "ali", "role": "admin", "isActive": true},
                {"id": "2", "username": "sara", "role": "user", "is_active": 1},
                {"id": "3", "username": "omar", "is_active": 0},
                {"id": "4", "username": "zain", "role": "auditor"}
            ]"#,
        )
        .unwrap();
        assert!(users[0].is_active);
        assert!(users[1].is_active);
        assert!(!users[2].is_active);
        assert!(!users[3].is_active);
        assert_eq!(users[3].role, UserRole::User);
        assert_eq!(count_active(&users), 2);
    }

    #[test]
    fn test_blank_password_is_not_sent() {
        let dto = UserDto {
            name: "Ali".into(),
            username: "ali".into(),
            password: None,
            role: UserRole::Admin,
            is_active: true,
        };
        let value = serde_json::to_value(&dto).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["role"], "admin");
        assert_eq!(value["isActive"], true);
    }

    #[test]
    fn test_team_roles() {
        assert!(UserRole::Developer.can_manage_team());
        assert!(UserRole::Admin.can_manage_team());
        assert!(!UserRole::User.can_manage_team());
        assert_eq!(UserRole::parse("admin"), UserRole::Admin);
        assert_eq!(UserRole::parse("anything"), UserRole::User);
    }
}
