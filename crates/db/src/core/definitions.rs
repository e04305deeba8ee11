use super::errors::{DBError, DBResult};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row};
use utoipa::ToSchema;

#[async_trait]
pub trait QuestsDatabase: Send + Sync {
    async fn ping(&self) -> bool;

    async fn create_user(&self, user: &CreateUser) -> DBResult<i64>;
    async fn get_user(&self, id: i64) -> DBResult<User>;

    async fn create_quest(&self, quest: &CreateQuest) -> DBResult<i64>;
    async fn get_quest(&self, id: i64) -> DBResult<Quest>;

    async fn has_completed_quest(&self, user_id: i64, quest_id: i64) -> DBResult<bool>;
    /// Credits the quest cost to the user and records the completion, atomically.
    ///
    /// Fails with [`DBError::QuestAlreadyCompleted`] when the pair was already recorded,
    /// [`DBError::QuestNotFound`] or [`DBError::UserNotFound`] when either side is missing.
    /// Nothing is persisted on failure.
    async fn complete_quest(&self, user_id: i64, quest_id: i64) -> DBResult<()>;
    async fn get_user_history(&self, user_id: i64) -> DBResult<UserHistory>;
}

#[derive(Clone, Debug)]
pub struct CreateUser<'a> {
    pub name: &'a str,
    pub balance: i64,
}

#[derive(Default, PartialEq, Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub balance: i64,
}

impl TryFrom<SqliteRow> for User {
    type Error = DBError;
    fn try_from(value: SqliteRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: value
                .try_get("id")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            name: value
                .try_get("name")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            balance: value
                .try_get("balance")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
        })
    }
}

#[derive(Clone, Debug)]
pub struct CreateQuest<'a> {
    pub name: &'a str,
    pub cost: i64,
    pub steps: i64,
}

#[derive(Default, PartialEq, Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct Quest {
    pub id: i64,
    pub name: String,
    /// Amount credited to the user balance on completion
    pub cost: i64,
    pub steps: i64,
}

impl TryFrom<SqliteRow> for Quest {
    type Error = DBError;
    fn try_from(value: SqliteRow) -> Result<Self, Self::Error> {
        Ok(Quest {
            id: value
                .try_get("id")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            name: value
                .try_get("name")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            cost: value
                .try_get("cost")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
            steps: value
                .try_get("steps")
                .map_err(|err| DBError::RowCorrupted(Box::new(err)))?,
        })
    }
}

#[derive(Default, PartialEq, Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct UserHistory {
    pub quests: Vec<Quest>,
    pub balance: i64,
}
