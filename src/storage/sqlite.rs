use async_trait::async_trait;
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use super::{StorageError, TeamStore};
use crate::model::{Player, StoredTeam, Team};

const TEAM_SCHEMA: &str = include_str!("../sql/schema/sqlite/00_team.sql");

const SELECT_TEAMS: &str = "SELECT team_id, name, mascot, city, players FROM team";

/// Team collection backed by one SQLite connection. Rosters are embedded in the
/// team row as a JSON array, so every write is a single-row statement.
#[derive(Clone)]
pub struct SqliteStore {
    conn: Arc<Mutex<Option<Connection>>>,
}

struct TeamRow {
    id: i64,
    name: String,
    mascot: String,
    city: String,
    players: String,
}

impl TeamRow {
    fn read(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            mascot: row.get(2)?,
            city: row.get(3)?,
            players: row.get(4)?,
        })
    }

    fn into_stored(self) -> Result<StoredTeam, StorageError> {
        let players: Vec<Player> = serde_json::from_str(&self.players)?;
        Ok(StoredTeam {
            id: self.id,
            team: Team {
                name: self.name,
                mascot: self.mascot,
                city: self.city,
                players,
            },
        })
    }
}

impl SqliteStore {
    /// Opens (or creates) the database file and makes sure the schema exists.
    /// `:memory:` gives a private in-memory database.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database cannot be opened or the schema fails
    pub fn open(db_name: &str) -> Result<Self, StorageError> {
        let conn = Connection::open(db_name)?;
        conn.execute_batch(TEAM_SCHEMA)?;
        info!(db_name, "opened team store");
        Ok(Self {
            conn: Arc::new(Mutex::new(Some(conn))),
        })
    }

    async fn with_connection<T, F>(&self, f: F) -> Result<T, StorageError>
    where
        T: Send + 'static,
        F: FnOnce(&mut Connection) -> Result<T, StorageError> + Send + 'static,
    {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StorageError::new("store lock poisoned"))?;
            let conn = guard
                .as_mut()
                .ok_or_else(|| StorageError::new("store is closed"))?;
            f(conn)
        })
        .await
        .map_err(|e| StorageError::new(format!("store task failed: {e}")))?
    }
}

#[async_trait]
impl TeamStore for SqliteStore {
    async fn find_all(&self) -> Result<Vec<StoredTeam>, StorageError> {
        self.with_connection(|conn| {
            let mut stmt = conn.prepare(&format!("{SELECT_TEAMS} ORDER BY team_id"))?;
            let rows = stmt
                .query_map([], TeamRow::read)?
                .collect::<Result<Vec<_>, _>>()?;
            rows.into_iter().map(TeamRow::into_stored).collect()
        })
        .await
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<StoredTeam>, StorageError> {
        let name = name.to_string();
        self.with_connection(move |conn| {
            let row = conn
                .query_row(
                    &format!("{SELECT_TEAMS} WHERE name = ?1 ORDER BY team_id LIMIT 1"),
                    params![name],
                    TeamRow::read,
                )
                .optional()?;
            row.map(TeamRow::into_stored).transpose()
        })
        .await
    }

    async fn insert(&self, team: Team) -> Result<StoredTeam, StorageError> {
        self.with_connection(move |conn| {
            let players = serde_json::to_string(&team.players)?;
            conn.execute(
                "INSERT INTO team (name, mascot, city, players) VALUES (?1, ?2, ?3, ?4)",
                params![team.name, team.mascot, team.city, players],
            )?;
            let id = conn.last_insert_rowid();
            debug!(id, name = %team.name, "inserted team");
            Ok(StoredTeam { id, team })
        })
        .await
    }

    async fn save(&self, team: &StoredTeam) -> Result<(), StorageError> {
        let team = team.clone();
        self.with_connection(move |conn| {
            let players = serde_json::to_string(&team.team.players)?;
            let updated = conn.execute(
                "UPDATE team SET name = ?1, mascot = ?2, city = ?3, players = ?4 WHERE team_id = ?5",
                params![
                    team.team.name,
                    team.team.mascot,
                    team.team.city,
                    players,
                    team.id
                ],
            )?;
            if updated == 0 {
                return Err(StorageError::new(format!(
                    "team {} no longer exists",
                    team.id
                )));
            }
            Ok(())
        })
        .await
    }

    async fn clear_all_players(&self) -> Result<(), StorageError> {
        self.with_connection(|conn| {
            let updated = conn.execute("UPDATE team SET players = '[]'", [])?;
            info!(teams = updated, "cleared all rosters");
            Ok(())
        })
        .await
    }

    async fn delete_all_teams(&self) -> Result<(), StorageError> {
        self.with_connection(|conn| {
            let deleted = conn.execute("DELETE FROM team", [])?;
            info!(teams = deleted, "deleted all teams");
            Ok(())
        })
        .await
    }

    async fn close(&self) -> Result<(), StorageError> {
        let conn = Arc::clone(&self.conn);
        tokio::task::spawn_blocking(move || {
            let mut guard = conn
                .lock()
                .map_err(|_| StorageError::new("store lock poisoned"))?;
            match guard.take() {
                Some(conn) => conn.close().map_err(|(_, e)| StorageError::from(e)),
                None => Ok(()),
            }
        })
        .await
        .map_err(|e| StorageError::new(format!("store task failed: {e}")))?
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn celtics() -> Team {
        Team {
            name: "Boston Celtics".into(),
            mascot: "Celtics".into(),
            city: "Boston".into(),
            players: vec![],
        }
    }

    #[tokio::test]
    async fn find_by_name_returns_first_of_duplicates() {
        let store = SqliteStore::open(":memory:").unwrap();
        let first = store.insert(celtics()).await.unwrap();
        let second = store.insert(celtics()).await.unwrap();
        assert_ne!(first.id, second.id);

        let found = store.find_by_name("Boston Celtics").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert!(store.find_by_name("boston celtics").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn closed_store_rejects_operations() {
        let store = SqliteStore::open(":memory:").unwrap();
        store.close().await.unwrap();
        store.close().await.unwrap();

        let err = store.find_all().await.unwrap_err();
        assert_eq!(err.to_string(), "store is closed");
    }

    #[tokio::test]
    async fn save_of_deleted_team_fails() {
        let store = SqliteStore::open(":memory:").unwrap();
        let stored = store.insert(celtics()).await.unwrap();
        store.delete_all_teams().await.unwrap();
        assert!(store.save(&stored).await.is_err());
    }
}
