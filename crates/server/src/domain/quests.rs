use crate::api::routes::errors::CommonError;
use quests_db::core::definitions::{CreateQuest, Quest, QuestsDatabase};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuestError {
    #[error("{0}")]
    CommonError(CommonError),
    #[error("Quest already completed by the user")]
    QuestAlreadyCompleted,
    #[error("Quest not found")]
    QuestNotFound,
    #[error("User not found")]
    UserNotFound,
}

pub async fn create_quest(
    db: Arc<impl QuestsDatabase>,
    quest: CreateQuest<'_>,
) -> Result<Quest, QuestError> {
    let id = db.create_quest(&quest).await?;

    log::info!("> create_quest > Quest {id} created");

    Ok(Quest {
        id,
        name: quest.name.to_string(),
        cost: quest.cost,
        steps: quest.steps,
    })
}

/// Credits the quest cost to the user once, recording the completion.
pub async fn complete_quest(
    db: Arc<impl QuestsDatabase>,
    user_id: i64,
    quest_id: i64,
) -> Result<(), QuestError> {
    db.complete_quest(user_id, quest_id)
        .await
        .map_err(|err| -> QuestError { err.into() })?;

    log::info!("> complete_quest > User {user_id} completed quest {quest_id}");

    Ok(())
}
