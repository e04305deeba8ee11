use std::{env, process};

use quests_db::create_quests_db_component;

/// Applies the schema migrations to `DATABASE_URL` without starting the API.
#[actix_rt::main]
async fn main() {
    let db_url = env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://quests.db?mode=rwc".into());

    if let Err(err) = create_quests_db_component(&db_url, true).await {
        eprintln!("Unable to migrate {db_url}: {err}");
        process::exit(1);
    }
}
