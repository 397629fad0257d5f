use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which dashboard a profile gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Manager,
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Manager => "manager",
            Role::Employee => "employee",
        }
    }

    pub fn is_manager(&self) -> bool {
        *self == Role::Manager
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "manager" => Ok(Role::Manager),
            "employee" => Ok(Role::Employee),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// A profile as listed in team views and employee pickers.
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct Profile {
    pub id: i64,
    pub full_name: String,
    pub email: String,
    pub role: String,
    pub department: Option<String>,
    pub position: Option<String>,
    pub avatar_url: Option<String>,
}

impl Profile {
    pub fn role(&self) -> Role {
        self.role.parse().unwrap_or(Role::Employee)
    }

    pub fn initials(&self) -> String {
        crate::format::initials(&self.full_name)
    }

    pub fn position_or_blank(&self) -> &str {
        self.position.as_deref().unwrap_or("")
    }

    pub fn department_or_blank(&self) -> &str {
        self.department.as_deref().unwrap_or("")
    }
}

/// Profile row used at login, including the password hash.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ProfileCredentials {
    pub id: i64,
    pub full_name: String,
    pub role: String,
    pub password_hash: Option<String>,
}

/// Insert payload for profiles. Used by the demo seeder and tests; the UI
/// never creates profiles.
#[derive(Debug, Clone)]
pub struct NewProfile {
    pub full_name: String,
    pub email: String,
    pub role: Role,
    pub department: Option<String>,
    pub position: Option<String>,
    pub password_hash: Option<String>,
}
