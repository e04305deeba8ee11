use crate::domain::quests::QuestError;
use quests_db::core::definitions::{CreateUser, QuestsDatabase, User, UserHistory};
use std::sync::Arc;

pub async fn create_user(
    db: Arc<impl QuestsDatabase>,
    user: CreateUser<'_>,
) -> Result<User, QuestError> {
    let id = db.create_user(&user).await?;

    log::info!("> create_user > User {id} created");

    Ok(User {
        id,
        name: user.name.to_string(),
        balance: user.balance,
    })
}

pub async fn get_user_history(
    db: Arc<impl QuestsDatabase>,
    user_id: i64,
) -> Result<UserHistory, QuestError> {
    db.get_user_history(user_id)
        .await
        .map_err(|err| err.into())
}
