use chrono::Utc;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};
use warbler_common::types::{Message, User};

use crate::entities::{like, message};
use crate::error::Result;
use crate::store::Session;

fn to_message(m: message::Model) -> Message {
    Message {
        id: m.id,
        text: m.text,
        timestamp: m.timestamp.with_timezone(&Utc),
        user_id: m.user_id,
    }
}

impl Session {
    /// Messages written by `user`, newest first.
    pub async fn messages(&self, user: &User) -> Result<Vec<Message>> {
        let models = message::Entity::find()
            .filter(message::Column::UserId.eq(user.id))
            .order_by_desc(message::Column::Timestamp)
            .all(self.conn())
            .await?;
        Ok(models.into_iter().map(to_message).collect())
    }

    /// Messages `user` has liked, newest first.
    pub async fn liked_messages(&self, user: &User) -> Result<Vec<Message>> {
        let models = message::Entity::find()
            .join_rev(JoinType::InnerJoin, like::Relation::Message.def())
            .filter(like::Column::UserId.eq(user.id))
            .order_by_desc(message::Column::Timestamp)
            .all(self.conn())
            .await?;
        Ok(models.into_iter().map(to_message).collect())
    }
}
