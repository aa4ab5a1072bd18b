use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// User & follow graph types

/// 用户帐号
///
/// `Display` renders the short debugging form used in logs:
///
/// ```
/// use chrono::Utc;
/// use warbler_common::types::User;
///
/// let user = User {
///     id: 7,
///     username: "u1".into(),
///     email: "u1@email.com".into(),
///     password_hash: String::new(),
///     image_url: warbler_common::DEFAULT_IMAGE_URL.into(),
///     header_image_url: warbler_common::DEFAULT_HEADER_IMAGE_URL.into(),
///     bio: None,
///     location: None,
///     created_at: Utc::now(),
/// };
/// assert_eq!(user.to_string(), "<User #7: u1, u1@email.com>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 自增主键
    pub id: i32,
    /// 用户名（必填，唯一）
    pub username: String,
    /// 邮箱（必填，唯一）
    pub email: String,
    /// 密码哈希（bcrypt）
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    /// 头像地址
    pub image_url: String,
    /// 主页横幅图片地址
    pub header_image_url: String,
    /// 个人简介
    pub bio: Option<String>,
    /// 所在地
    pub location: Option<String>,
    /// 注册时间
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<User #{}: {}, {}>", self.id, self.username, self.email)
    }
}

/// 消息（只读视图）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// 自增主键
    pub id: i32,
    /// 消息正文（最多 140 字符）
    pub text: String,
    /// 发布时间
    pub timestamp: DateTime<Utc>,
    /// 作者
    pub user_id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 3,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$2b$04$abcdefghijklmnopqrstuu".to_string(),
            image_url: crate::DEFAULT_IMAGE_URL.to_string(),
            header_image_url: crate::DEFAULT_HEADER_IMAGE_URL.to_string(),
            bio: None,
            location: Some("Rome".to_string()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn display_matches_debug_format() {
        let user = sample_user();
        assert_eq!(user.to_string(), "<User #3: alice, alice@example.com>");
    }

    #[test]
    fn password_hash_is_never_serialized() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
        assert_eq!(json["image_url"], crate::DEFAULT_IMAGE_URL);
    }
}
