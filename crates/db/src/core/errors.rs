use sqlx::Error;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DBError {
    #[error("Unable to connect to DB")]
    UnableToConnect(Error),

    #[error("Unable to migrate: {0}")]
    MigrationError(BoxDynError),

    #[error("Unable to begin transaction: {0}")]
    TransactionBeginFailed(BoxDynError),

    #[error("Unable to commit or rollback transaction: {0}")]
    TransactionFailed(BoxDynError),

    #[error("Unable to create a user: {0}")]
    CreateUserFailed(BoxDynError),

    #[error("Unable to get a user: {0}")]
    GetUserFailed(BoxDynError),

    #[error("Unable to create a quest: {0}")]
    CreateQuestFailed(BoxDynError),

    #[error("Unable to get a quest: {0}")]
    GetQuestFailed(BoxDynError),

    #[error("Unable to check if user {0} already completed quest {1}: {2}")]
    HasCompletedQuestFailed(i64, i64, BoxDynError),

    #[error("Unable to credit the quest reward to user {0}: {1}")]
    CreditRewardFailed(i64, BoxDynError),

    #[error("Unable to store the quest completion: {0}")]
    CompleteQuestFailed(BoxDynError),

    #[error("Unable to get the completed quests of user {0}: {1}")]
    GetCompletedQuestsFailed(i64, BoxDynError),

    #[error("Row has incorrect data: {0}")]
    RowCorrupted(BoxDynError),

    #[error("Quest {1} was already completed by user {0}")]
    QuestAlreadyCompleted(i64, i64),

    #[error("User {0} not found")]
    UserNotFound(i64),

    #[error("Quest {0} not found")]
    QuestNotFound(i64),
}

/// Convenience type alias for grouping driver-specific errors
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Generic result data structure
pub type DBResult<V> = Result<V, DBError>;

const SQLITE_CONSTRAINT_PRIMARYKEY: &str = "1555";
const SQLITE_CONSTRAINT_UNIQUE: &str = "2067";

/// Whether the error comes from a primary key or unique index rejecting a duplicate row
pub fn is_unique_violation(err: &Error) -> bool {
    match err {
        Error::Database(db_err) => matches!(
            db_err.code().as_deref(),
            Some(SQLITE_CONSTRAINT_PRIMARYKEY) | Some(SQLITE_CONSTRAINT_UNIQUE)
        ),
        _ => false,
    }
}
