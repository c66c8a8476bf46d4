use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

use crate::models::PlayerRecord;

/// Handle on the external player database.
///
/// Holds connection settings only. Every query opens its own read-only
/// connection and closes it before returning, whether the query succeeded or
/// not.
#[derive(Debug, Clone)]
pub struct Store {
    options: SqliteConnectOptions,
}

impl Store {
    pub fn new(options: SqliteConnectOptions) -> Self {
        // The store is populated elsewhere; never create or write to it.
        let options = options.read_only(true).create_if_missing(false);
        Self { options }
    }

    async fn connect(&self) -> Result<SqliteConnection, sqlx::Error> {
        SqliteConnection::connect_with(&self.options).await
    }
}

// Closes a per-request connection. Errors are only logged; the query result
// has already been decided by the time this runs.
async fn release(conn: SqliteConnection) {
    if let Err(err) = conn.close().await {
        tracing::warn!("Failed to close database connection: {}", err);
    }
}

// Player queries
pub async fn get_all_players(store: &Store) -> Result<Vec<PlayerRecord>, sqlx::Error> {
    let mut conn = store.connect().await?;
    let players = sqlx::query_as::<_, PlayerRecord>(r#"SELECT * FROM players"#)
        .fetch_all(&mut conn)
        .await;
    release(conn).await;

    players
}

pub async fn get_player_by_id(
    store: &Store,
    player_id: &str,
) -> Result<Option<PlayerRecord>, sqlx::Error> {
    let mut conn = store.connect().await?;
    let player = sqlx::query_as::<_, PlayerRecord>(r#"SELECT * FROM players WHERE id = ?"#)
        .bind(player_id)
        .fetch_optional(&mut conn)
        .await;
    release(conn).await;

    player
}
