use super::StoreError;
use agora_core::{
    ArgumentEdge, ArgumentId, ArgumentKind, ArgumentNode, DebateId, DebateStatus, DebateSummary,
    LeaderboardEntry, RelationKind,
};
use rusqlite::Row;
use std::str::FromStr;

pub(super) fn debate_summary(row: &Row) -> Result<DebateSummary, StoreError> {
    let status: String = row.get(4)?;
    Ok(DebateSummary {
        id: DebateId(row.get(0)?),
        title: row.get(1)?,
        category: row.get(2)?,
        creator: row.get(3)?,
        status: DebateStatus::from_str(&status)?,
        argument_count: row.get(5)?,
        participant_count: row.get(6)?,
        avg_reputation: row.get(7)?,
        last_active: row.get(8)?,
    })
}

pub(super) fn argument_node(row: &Row) -> Result<ArgumentNode, StoreError> {
    let kind_int: i32 = row.get(2)?;
    Ok(ArgumentNode {
        id: ArgumentId(row.get(0)?),
        label: row.get(1)?,
        kind: ArgumentKind::try_from(kind_int)?,
        author: row.get(3)?,
        group: row.get(4)?,
        val: row.get(5)?,
        rating: row.get(6)?,
    })
}

pub(super) fn argument_edge(row: &Row) -> Result<ArgumentEdge, StoreError> {
    let kind_int: i32 = row.get(2)?;
    Ok(ArgumentEdge {
        source: ArgumentId(row.get(0)?),
        target: ArgumentId(row.get(1)?),
        relation: RelationKind::try_from(kind_int)?,
    })
}

pub(super) fn leaderboard_entry(row: &Row) -> Result<LeaderboardEntry, StoreError> {
    Ok(LeaderboardEntry {
        rank: row.get(0)?,
        username: row.get(1)?,
        reputation: row.get(2)?,
        debates_won: row.get(3)?,
        avg_rating: row.get(4)?,
        trend: row.get(5)?,
    })
}
