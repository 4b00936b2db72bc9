use rusqlite::Connection;

pub(super) const SCHEMA_VERSION: u32 = 1;

pub(super) fn init(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS debate (
            id                TEXT PRIMARY KEY,
            title             TEXT NOT NULL,
            category          TEXT NOT NULL,
            creator           TEXT NOT NULL,
            status            TEXT NOT NULL,
            argument_count    INTEGER NOT NULL,
            participant_count INTEGER NOT NULL,
            avg_reputation    INTEGER NOT NULL,
            last_active       TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS argument (
            debate_id TEXT NOT NULL REFERENCES debate(id) ON DELETE CASCADE,
            id        TEXT NOT NULL,
            label     TEXT NOT NULL,
            kind      INTEGER NOT NULL,
            author    TEXT NOT NULL,
            grp       INTEGER NOT NULL,
            val       REAL NOT NULL,
            rating    REAL NOT NULL,
            position  INTEGER NOT NULL,
            PRIMARY KEY (debate_id, id)
        );

        CREATE TABLE IF NOT EXISTS relation (
            debate_id TEXT NOT NULL REFERENCES debate(id) ON DELETE CASCADE,
            source_id TEXT NOT NULL,
            target_id TEXT NOT NULL,
            kind      INTEGER NOT NULL,
            position  INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS leaderboard (
            rank        INTEGER PRIMARY KEY,
            username    TEXT NOT NULL,
            reputation  INTEGER NOT NULL,
            debates_won INTEGER NOT NULL,
            avg_rating  REAL NOT NULL,
            trend       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_argument_debate_position
            ON argument(debate_id, position);
        CREATE INDEX IF NOT EXISTS idx_relation_debate_position
            ON relation(debate_id, position);
        CREATE INDEX IF NOT EXISTS idx_debate_category
            ON debate(category);",
    )?;
    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    Ok(())
}
