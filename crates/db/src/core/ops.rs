use super::errors::DBResult;

#[async_trait::async_trait]
pub trait Connect {
    type Pool;
    async fn connect(self) -> DBResult<Self::Pool>;
}

#[async_trait::async_trait]
pub trait GetConnection {
    type Conn;
    async fn get_conn(&self) -> DBResult<Self::Conn>;
}

#[async_trait::async_trait]
pub trait Migrate {
    async fn migrate(&self) -> DBResult<()>;
}
