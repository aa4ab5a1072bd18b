use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter,
};
use warbler_common::types::User;

use crate::auth;
use crate::entities::user::{self, Column, Entity};
use crate::error::{Result, StorageError};
use crate::store::Session;
use crate::validate;

pub(crate) fn to_user(m: user::Model) -> User {
    User {
        id: m.id,
        username: m.username,
        email: m.email,
        password_hash: m.password_hash,
        image_url: m.image_url,
        header_image_url: m.header_image_url,
        bio: m.bio,
        location: m.location,
        created_at: m.created_at.with_timezone(&Utc),
    }
}

impl Session {
    /// Validates the input, hashes the password and stages a new user.
    ///
    /// The row only becomes durable once the session is committed. A
    /// duplicate username or email comes back as
    /// [`StorageError::Integrity`]; malformed input as
    /// [`StorageError::Validation`] without touching the database.
    pub async fn signup(
        &self,
        username: &str,
        email: &str,
        password: &str,
        image_url: Option<&str>,
    ) -> Result<User> {
        if let Err(e) = validate::check_signup(username, email, password) {
            tracing::warn!(username = %username, error = %e, "Rejected signup");
            return Err(e);
        }

        let config = self.config();
        let password_hash = auth::hash_password(password, config.bcrypt_cost)?;
        let image_url = image_url
            .filter(|url| !url.is_empty())
            .unwrap_or(config.default_image_url.as_str());

        let am = user::ActiveModel {
            username: Set(username.to_owned()),
            email: Set(email.to_owned()),
            password_hash: Set(password_hash),
            image_url: Set(image_url.to_owned()),
            header_image_url: Set(config.default_header_image_url.clone()),
            bio: Set(None),
            location: Set(None),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };
        let model = am.insert(self.conn()).await?;

        tracing::info!(user_id = model.id, username = %model.username, "User signed up");
        Ok(to_user(model))
    }

    pub async fn get_user(&self, id: i32) -> Result<Option<User>> {
        let model = Entity::find_by_id(id).one(self.conn()).await?;
        Ok(model.map(to_user))
    }

    /// Like [`Session::get_user`] but a missing row is an error.
    pub async fn require_user(&self, id: i32) -> Result<User> {
        self.get_user(id).await?.ok_or_else(|| StorageError::NotFound {
            entity: "user",
            id: id.to_string(),
        })
    }

    pub async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let model = Entity::find()
            .filter(Column::Username.eq(username))
            .one(self.conn())
            .await?;
        Ok(model.map(to_user))
    }

    /// Returns the user when `username` exists and `password` matches the
    /// stored hash, `None` otherwise.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        let Some(user) = self.get_user_by_username(username).await? else {
            tracing::warn!(username = %username, "Authentication failed: unknown user");
            return Ok(None);
        };

        if auth::verify_password(password, &user.password_hash)? {
            tracing::debug!(user_id = user.id, "Authentication succeeded");
            Ok(Some(user))
        } else {
            tracing::warn!(user_id = user.id, "Authentication failed: wrong password");
            Ok(None)
        }
    }

    pub async fn count_users(&self) -> Result<u64> {
        let count = Entity::find().count(self.conn()).await?;
        Ok(count)
    }

    /// Deletes every user. Follow edges, messages and likes go with them.
    pub async fn delete_all_users(&self) -> Result<u64> {
        let res = Entity::delete_many().exec(self.conn()).await?;
        tracing::info!(rows = res.rows_affected, "Deleted all users");
        Ok(res.rows_affected)
    }
}
