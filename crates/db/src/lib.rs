pub mod core;

use std::str::FromStr;

use crate::core::{
    definitions::{CreateQuest, CreateUser, Quest, QuestsDatabase, User, UserHistory},
    errors::{is_unique_violation, DBError, DBResult},
    ops::{Connect, GetConnection, Migrate},
};
use sqlx::{
    pool::PoolConnection,
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Error, Sqlite, SqlitePool,
};

pub struct DatabaseOptions {
    url: String,
    pub pool_options: SqlitePoolOptions,
}

impl DatabaseOptions {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            pool_options: SqlitePoolOptions::new(),
        }
    }
}

#[async_trait::async_trait]
impl Connect for DatabaseOptions {
    type Pool = Database;

    async fn connect(self) -> DBResult<Self::Pool> {
        let sqlite_options = SqliteConnectOptions::from_str(&self.url)
            .map_err(DBError::UnableToConnect)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = self
            .pool_options
            .connect_with(sqlite_options)
            .await
            .map_err(DBError::UnableToConnect)?;

        Ok(Database::new(pool))
    }
}

#[derive(Clone)]
pub struct Database {
    pub pool: SqlitePool,
}

impl Database {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl GetConnection for Database {
    type Conn = PoolConnection<Sqlite>;

    async fn get_conn(&self) -> DBResult<Self::Conn> {
        self.pool.acquire().await.map_err(DBError::UnableToConnect)
    }
}

#[async_trait::async_trait]
impl QuestsDatabase for Database {
    async fn ping(&self) -> bool {
        use sqlx::Connection;

        if let Ok(mut con) = self.get_conn().await {
            con.ping().await.is_ok()
        } else {
            false
        }
    }

    async fn create_user(&self, user: &CreateUser) -> DBResult<i64> {
        sqlx::query("INSERT INTO users (name, balance) VALUES (?, ?)")
            .bind(user.name)
            .bind(user.balance)
            .execute(&self.pool)
            .await
            .map(|result| result.last_insert_rowid())
            .map_err(|err| DBError::CreateUserFailed(Box::new(err)))
    }

    async fn get_user(&self, id: i64) -> DBResult<User> {
        let query_result = sqlx::query("SELECT id, name, balance FROM users WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| match err {
                Error::RowNotFound => DBError::UserNotFound(id),
                _ => DBError::GetUserFailed(Box::new(err)),
            })?;

        User::try_from(query_result)
    }

    async fn create_quest(&self, quest: &CreateQuest) -> DBResult<i64> {
        sqlx::query("INSERT INTO quests (name, cost, steps) VALUES (?, ?, ?)")
            .bind(quest.name)
            .bind(quest.cost)
            .bind(quest.steps)
            .execute(&self.pool)
            .await
            .map(|result| result.last_insert_rowid())
            .map_err(|err| DBError::CreateQuestFailed(Box::new(err)))
    }

    async fn get_quest(&self, id: i64) -> DBResult<Quest> {
        let query_result = sqlx::query("SELECT id, name, cost, steps FROM quests WHERE id = ?")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|err| match err {
                Error::RowNotFound => DBError::QuestNotFound(id),
                _ => DBError::GetQuestFailed(Box::new(err)),
            })?;

        Quest::try_from(query_result)
    }

    async fn has_completed_quest(&self, user_id: i64, quest_id: i64) -> DBResult<bool> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM user_quests WHERE user_id = ? AND quest_id = ?)",
        )
        .bind(user_id)
        .bind(quest_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| DBError::HasCompletedQuestFailed(user_id, quest_id, Box::new(err)))
    }

    async fn complete_quest(&self, user_id: i64, quest_id: i64) -> DBResult<()> {
        // dropping the transaction before commit rolls every statement back
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|err| DBError::TransactionBeginFailed(Box::new(err)))?;

        // writing first takes the write lock before any read; the primary key
        // rejects a second completion of the same pair
        let recorded = sqlx::query(
            "
                INSERT INTO user_quests (user_id, quest_id)
                SELECT ?, ?
                WHERE EXISTS (SELECT 1 FROM users WHERE id = ?)
                AND EXISTS (SELECT 1 FROM quests WHERE id = ?)
            ",
        )
        .bind(user_id)
        .bind(quest_id)
        .bind(user_id)
        .bind(quest_id)
        .execute(&mut transaction)
        .await
        .map_err(|err| {
            if is_unique_violation(&err) {
                DBError::QuestAlreadyCompleted(user_id, quest_id)
            } else {
                DBError::CompleteQuestFailed(Box::new(err))
            }
        })?;

        let cost: i64 = sqlx::query_scalar("SELECT cost FROM quests WHERE id = ?")
            .bind(quest_id)
            .fetch_optional(&mut transaction)
            .await
            .map_err(|err| DBError::GetQuestFailed(Box::new(err)))?
            .ok_or(DBError::QuestNotFound(quest_id))?;

        if recorded.rows_affected() == 0 {
            return Err(DBError::UserNotFound(user_id));
        }

        sqlx::query("UPDATE users SET balance = balance + ? WHERE id = ?")
            .bind(cost)
            .bind(user_id)
            .execute(&mut transaction)
            .await
            .map_err(|err| DBError::CreditRewardFailed(user_id, Box::new(err)))?;

        transaction
            .commit()
            .await
            .map_err(|err| DBError::TransactionFailed(Box::new(err)))
    }

    async fn get_user_history(&self, user_id: i64) -> DBResult<UserHistory> {
        // balance and quest list are read from the same snapshot
        let mut transaction = self
            .pool
            .begin()
            .await
            .map_err(|err| DBError::TransactionBeginFailed(Box::new(err)))?;

        let balance: i64 = sqlx::query_scalar("SELECT balance FROM users WHERE id = ?")
            .bind(user_id)
            .fetch_optional(&mut transaction)
            .await
            .map_err(|err| DBError::GetUserFailed(Box::new(err)))?
            .ok_or(DBError::UserNotFound(user_id))?;

        let query_result = sqlx::query(
            "
                SELECT q.id, q.name, q.cost, q.steps FROM quests q
                JOIN user_quests uq ON q.id = uq.quest_id
                WHERE uq.user_id = ?
                ORDER BY q.id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&mut transaction)
        .await
        .map_err(|err| DBError::GetCompletedQuestsFailed(user_id, Box::new(err)))?;

        let quests = query_result
            .into_iter()
            .map(Quest::try_from)
            .collect::<DBResult<Vec<_>>>()?;

        transaction
            .commit()
            .await
            .map_err(|err| DBError::TransactionFailed(Box::new(err)))?;

        Ok(UserHistory { quests, balance })
    }
}

#[async_trait::async_trait]
impl Migrate for Database {
    async fn migrate(&self) -> DBResult<()> {
        sqlx::migrate!("./migrations")
            .run(&self.pool)
            .await
            .map_err(|err| DBError::MigrationError(Box::new(err)))
    }
}

pub async fn create_quests_db_component(db_url: &str, run_migrations: bool) -> DBResult<Database> {
    log::info!("Database URL: {}", &db_url);
    let mut db_options = DatabaseOptions::new(db_url);
    db_options.pool_options = db_options
        .pool_options
        .min_connections(1)
        .max_connections(10);

    let db = db_options.connect().await?;

    if run_migrations {
        db.migrate().await?;
    }

    Ok(db)
}
