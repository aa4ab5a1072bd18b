use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use warbler_common::types::User;

use crate::entities::{follow, user};
use crate::error::Result;
use crate::store::user::to_user;
use crate::store::Session;

impl Session {
    /// Adds `follower` to `user`'s followers.
    pub async fn add_follower(&self, user: &User, follower: &User) -> Result<()> {
        self.insert_edge(follower.id, user.id).await
    }

    /// Makes `follower` follow `followed`.
    pub async fn follow(&self, follower: &User, followed: &User) -> Result<()> {
        self.insert_edge(follower.id, followed.id).await
    }

    async fn insert_edge(&self, follower_id: i32, followed_id: i32) -> Result<()> {
        let am = follow::ActiveModel {
            follower_id: Set(follower_id),
            followed_id: Set(followed_id),
        };
        am.insert(self.conn()).await?;
        tracing::info!(follower_id, followed_id, "Follow edge added");
        Ok(())
    }

    /// True iff `user` follows `other`.
    pub async fn is_following(&self, user: &User, other: &User) -> Result<bool> {
        self.edge_exists(user.id, other.id).await
    }

    /// True iff `other` follows `user`.
    pub async fn is_followed_by(&self, user: &User, other: &User) -> Result<bool> {
        self.edge_exists(other.id, user.id).await
    }

    async fn edge_exists(&self, follower_id: i32, followed_id: i32) -> Result<bool> {
        let edge = follow::Entity::find_by_id((follower_id, followed_id))
            .one(self.conn())
            .await?;
        Ok(edge.is_some())
    }

    /// Users following `user`, by id.
    pub async fn followers(&self, user: &User) -> Result<Vec<User>> {
        let models = user::Entity::find()
            .join_rev(JoinType::InnerJoin, follow::Relation::Follower.def())
            .filter(follow::Column::FollowedId.eq(user.id))
            .order_by_asc(user::Column::Id)
            .all(self.conn())
            .await?;
        Ok(models.into_iter().map(to_user).collect())
    }

    /// Users `user` follows, by id.
    pub async fn following(&self, user: &User) -> Result<Vec<User>> {
        let models = user::Entity::find()
            .join_rev(JoinType::InnerJoin, follow::Relation::Followed.def())
            .filter(follow::Column::FollowerId.eq(user.id))
            .order_by_asc(user::Column::Id)
            .all(self.conn())
            .await?;
        Ok(models.into_iter().map(to_user).collect())
    }
}
