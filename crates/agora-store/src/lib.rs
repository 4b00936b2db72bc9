use agora_core::{
    DebateGraph, DebateId, DebateSummary, EnumConversionError, GraphSource, LeaderboardEntry,
    SourceError,
};
use parking_lot::Mutex;
use rusqlite::{Connection, params};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

pub mod loader;
mod rows;
mod schema;
pub mod seed;

#[cfg(test)]
mod tests;

pub use loader::{GraphLoader, LoadState};

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Invalid enum value: {0}")]
    EnumConversion(#[from] EnumConversionError),
}

/// Filters applied by the browse and search screens.
#[derive(Debug, Clone, Default)]
pub struct DebateFilter {
    /// Exact category match, case-insensitive. `None` means all categories.
    pub category: Option<String>,
    /// Free-text match against the debate title.
    pub query: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct StoreStats {
    pub debate_count: i64,
    pub argument_count: i64,
    pub relation_count: i64,
}

/// SQLite-backed debate storage.
///
/// The connection sits behind a mutex so a `Store` can be shared with the
/// loader's background thread through `Arc<dyn GraphSource>`.
pub struct Store {
    conn: Mutex<Connection>,
}

impl Store {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        Self::from_connection(Connection::open(path)?)
    }

    pub fn new_in_memory() -> Result<Self, StoreError> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    /// Seeded in-memory store, the default source for the GUI and CLI when
    /// no database path and no API endpoint are configured.
    pub fn seeded_in_memory() -> Result<Self, StoreError> {
        let store = Self::new_in_memory()?;
        store.seed()?;
        Ok(store)
    }

    fn from_connection(conn: Connection) -> Result<Self, StoreError> {
        // Keep reads usable while another handle writes, as in any app shell
        // that queries mid-refresh.
        let _ = conn.busy_timeout(Duration::from_millis(2_500));
        let _ = conn.pragma_update(None, "foreign_keys", "ON");
        let _ = conn.pragma_update(None, "journal_mode", "WAL");
        let _ = conn.pragma_update(None, "synchronous", "NORMAL");
        schema::init(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Load the sample debates and leaderboard. Idempotent: seeding an
    /// already-populated store replaces nothing.
    pub fn seed(&self) -> Result<(), StoreError> {
        let mut conn = self.conn.lock();
        let tx = conn.transaction()?;
        for (summary, graph) in seed::debates() {
            let inserted = tx.execute(
                "INSERT OR IGNORE INTO debate (id, title, category, creator, status,
                     argument_count, participant_count, avg_reputation, last_active)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                params![
                    summary.id.0,
                    summary.title,
                    summary.category,
                    summary.creator,
                    summary.status.as_str(),
                    summary.argument_count,
                    summary.participant_count,
                    summary.avg_reputation,
                    summary.last_active,
                ],
            )?;
            if inserted == 0 {
                continue;
            }
            for (position, node) in graph.nodes.iter().enumerate() {
                tx.execute(
                    "INSERT INTO argument (debate_id, id, label, kind, author, grp, val, rating, position)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
                    params![
                        graph.debate_id.0,
                        node.id.0,
                        node.label,
                        node.kind as i32,
                        node.author,
                        node.group,
                        node.val,
                        node.rating,
                        position as i64,
                    ],
                )?;
            }
            for (position, edge) in graph.edges.iter().enumerate() {
                tx.execute(
                    "INSERT INTO relation (debate_id, source_id, target_id, kind, position)
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![
                        graph.debate_id.0,
                        edge.source.0,
                        edge.target.0,
                        edge.relation as i32,
                        position as i64,
                    ],
                )?;
            }
        }
        for entry in seed::leaderboard() {
            tx.execute(
                "INSERT OR IGNORE INTO leaderboard (rank, username, reputation, debates_won, avg_rating, trend)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    entry.rank,
                    entry.username,
                    entry.reputation,
                    entry.debates_won,
                    entry.avg_rating,
                    entry.trend,
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    pub fn list_debates(&self, filter: &DebateFilter) -> Result<Vec<DebateSummary>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, title, category, creator, status,
                    argument_count, participant_count, avg_reputation, last_active
             FROM debate
             WHERE (?1 IS NULL OR LOWER(category) = LOWER(?1))
               AND (?2 IS NULL OR title LIKE '%' || ?2 || '%')
             ORDER BY id",
        )?;
        let mut rows = stmt.query(params![filter.category, filter.query])?;
        let mut debates = Vec::new();
        while let Some(row) = rows.next()? {
            debates.push(rows::debate_summary(row)?);
        }
        Ok(debates)
    }

    pub fn get_debate(&self, id: &DebateId) -> Result<Option<DebateSummary>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT id, title, category, creator, status,
                    argument_count, participant_count, avg_reputation, last_active
             FROM debate WHERE id = ?1",
        )?;
        let mut rows = stmt.query(params![id.0])?;
        match rows.next()? {
            Some(row) => Ok(Some(rows::debate_summary(row)?)),
            None => Ok(None),
        }
    }

    /// Fetch one debate's node/edge graph, `None` for an unknown id.
    /// Node and edge order is the seed/insert order.
    pub fn graph(&self, id: &DebateId) -> Result<Option<DebateGraph>, StoreError> {
        let conn = self.conn.lock();
        let exists: bool = conn
            .prepare("SELECT 1 FROM debate WHERE id = ?1")?
            .exists(params![id.0])?;
        if !exists {
            return Ok(None);
        }

        let mut graph = DebateGraph::new(id.clone());

        let mut stmt = conn.prepare(
            "SELECT id, label, kind, author, grp, val, rating
             FROM argument WHERE debate_id = ?1 ORDER BY position",
        )?;
        let mut node_rows = stmt.query(params![id.0])?;
        while let Some(row) = node_rows.next()? {
            graph.nodes.push(rows::argument_node(row)?);
        }

        let mut stmt = conn.prepare(
            "SELECT source_id, target_id, kind
             FROM relation WHERE debate_id = ?1 ORDER BY position",
        )?;
        let mut edge_rows = stmt.query(params![id.0])?;
        while let Some(row) = edge_rows.next()? {
            graph.edges.push(rows::argument_edge(row)?);
        }

        Ok(Some(graph))
    }

    pub fn leaderboard(&self) -> Result<Vec<LeaderboardEntry>, StoreError> {
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(
            "SELECT rank, username, reputation, debates_won, avg_rating, trend
             FROM leaderboard ORDER BY rank",
        )?;
        let mut rows = stmt.query([])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(rows::leaderboard_entry(row)?);
        }
        Ok(entries)
    }

    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        let conn = self.conn.lock();
        let count = |sql: &str| -> Result<i64, rusqlite::Error> {
            conn.prepare(sql)?.query_row([], |row| row.get(0))
        };
        Ok(StoreStats {
            debate_count: count("SELECT count(*) FROM debate")?,
            argument_count: count("SELECT count(*) FROM argument")?,
            relation_count: count("SELECT count(*) FROM relation")?,
        })
    }
}

impl GraphSource for Store {
    fn load_graph(&self, id: &DebateId) -> Result<DebateGraph, SourceError> {
        match self.graph(id) {
            Ok(Some(graph)) => Ok(graph),
            Ok(None) => Err(SourceError::NotFound(id.clone())),
            Err(err) => {
                tracing::warn!("store failed to load debate {id}: {err}");
                Err(SourceError::Unavailable(err.to_string()))
            }
        }
    }
}
