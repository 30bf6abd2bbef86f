use serde::{Deserialize, Serialize};

// 账户角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,   // 管理员
    Teacher, // 教师
    Student, // 学生
}

impl Role {
    pub const ADMIN: &'static str = "admin";
    pub const TEACHER: &'static str = "teacher";
    pub const STUDENT: &'static str = "student";

    pub fn admin_roles() -> &'static [&'static Role] {
        &[&Self::Admin]
    }
    /// 可以增删改学生、考试与成绩的角色
    pub fn staff_roles() -> &'static [&'static Role] {
        &[&Self::Admin, &Self::Teacher]
    }
    /// 允许自助注册的角色
    pub fn self_register_roles() -> &'static [&'static Role] {
        &[&Self::Student, &Self::Teacher]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => Role::ADMIN,
            Role::Teacher => Role::TEACHER,
            Role::Student => Role::STUDENT,
        }
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<Role>().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Role::ADMIN => Ok(Role::Admin),
            Role::TEACHER => Ok(Role::Teacher),
            Role::STUDENT => Ok(Role::Student),
            _ => Err(format!(
                "Invalid role: '{s}'. Supported roles: admin, teacher, student"
            )),
        }
    }
}

// 账户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub contact: String,
    pub fullname: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    pub password_hash: String,
    pub role: Role,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trip_through_str() {
        for role in [Role::Admin, Role::Teacher, Role::Student] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("root".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
    }

    #[test]
    fn test_staff_roles() {
        assert!(Role::staff_roles().contains(&&Role::Admin));
        assert!(Role::staff_roles().contains(&&Role::Teacher));
        assert!(!Role::staff_roles().contains(&&Role::Student));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let account = Account {
            id: 1,
            contact: "t1@x.com".to_string(),
            fullname: "Tom".to_string(),
            password_hash: "$argon2id$secret".to_string(),
            role: Role::Teacher,
            created_at: chrono::Utc::now(),
        };
        let json = serde_json::to_value(&account).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["role"], "teacher");
    }
}
