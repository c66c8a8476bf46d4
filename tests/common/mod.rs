#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use nhl_players_api::config::{PlayerLookup, RowFormat};
use nhl_players_api::{app, AppState, Config};
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection, SqliteJournalMode};
use sqlx::Connection;
use tempfile::TempDir;
use tower::ServiceExt;

pub const PLAYER_COLUMNS: usize = 5;

/// A players database on disk, removed when dropped.
pub struct Fixture {
    _dir: TempDir,
    pub path: PathBuf,
}

impl Fixture {
    pub async fn with_players(players: &[(i64, &str, &str, Option<i64>, f64)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nhl.db");

        let options = SqliteConnectOptions::new()
            .filename(&path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Delete);
        let mut conn = SqliteConnection::connect_with(&options).await.unwrap();

        sqlx::query(
            "CREATE TABLE players (
                id INTEGER PRIMARY KEY,
                name TEXT NOT NULL,
                team TEXT NOT NULL,
                jersey INTEGER,
                points_per_game REAL NOT NULL
            )",
        )
        .execute(&mut conn)
        .await
        .unwrap();

        for (id, name, team, jersey, ppg) in players {
            sqlx::query(
                "INSERT INTO players (id, name, team, jersey, points_per_game) VALUES (?, ?, ?, ?, ?)",
            )
            .bind(*id)
            .bind(*name)
            .bind(*team)
            .bind(*jersey)
            .bind(*ppg)
            .execute(&mut conn)
            .await
            .unwrap();
        }

        conn.close().await.unwrap();

        Self { _dir: dir, path }
    }

    pub async fn roster() -> Self {
        Self::with_players(&[
            (8, "Alex Ovechkin", "WSH", Some(8), 1.1),
            (87, "Sidney Crosby", "PIT", Some(87), 1.25),
            (97, "Connor McDavid", "EDM", None, 1.5),
        ])
        .await
    }

    pub fn router(&self, player_lookup: PlayerLookup, row_format: RowFormat) -> Router {
        router_for(&self.path, player_lookup, row_format)
    }
}

pub fn router_for(path: &Path, player_lookup: PlayerLookup, row_format: RowFormat) -> Router {
    let mut config = Config::for_database(path);
    config.player_lookup = player_lookup;
    config.row_format = row_format;
    app(AppState::new(&config))
}

/// Send a GET and return the status and raw body.
pub async fn get(app: &Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body.to_vec())
}

pub async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(app, uri).await;
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
