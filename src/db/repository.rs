//! Row-level operations on the `ai_conversations` table.
//!
//! Free functions over a borrowed connection; validation above raw SQL
//! happens in the service layer, except for range checks on values read
//! back out of the database.

use chrono::NaiveDateTime;
use rusqlite::{params, Connection};

use super::DatabaseError;
use crate::models::{ConversationId, ConversationTurn, NewConversationTurn, Rating, UserId};

/// Insert a turn and read back the stored row, picking up the
/// database-assigned id and timestamp.
pub fn insert_turn(
    conn: &Connection,
    turn: &NewConversationTurn,
) -> Result<ConversationTurn, DatabaseError> {
    conn.execute(
        "INSERT INTO ai_conversations (user_id, prompt, response, feedback, rating, metadata)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            turn.user_id.as_str(),
            turn.prompt,
            turn.response,
            turn.feedback,
            turn.rating.map(|r| r.as_u8()),
            turn.metadata,
        ],
    )?;

    let id = ConversationId::new(conn.last_insert_rowid());
    get_turn(conn, id)?.ok_or(DatabaseError::NotFound(id))
}

pub fn get_turn(
    conn: &Connection,
    id: ConversationId,
) -> Result<Option<ConversationTurn>, DatabaseError> {
    let result = conn.query_row(
        "SELECT id, user_id, prompt, response, feedback, rating, timestamp, metadata
         FROM ai_conversations WHERE id = ?1",
        params![id.as_i64()],
        read_turn_row,
    );

    match result {
        Ok(row) => Ok(Some(turn_from_row(row)?)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Every stored turn, in no particular order. Ordering is a
/// presentation concern applied by callers.
pub fn list_turns(conn: &Connection) -> Result<Vec<ConversationTurn>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, prompt, response, feedback, rating, timestamp, metadata
         FROM ai_conversations",
    )?;
    let rows = stmt.query_map([], read_turn_row)?;

    let mut turns = Vec::new();
    for row in rows {
        turns.push(turn_from_row(row?)?);
    }
    Ok(turns)
}

/// Set the rating on an existing turn. Touches no other column.
pub fn update_turn_rating(
    conn: &Connection,
    id: ConversationId,
    rating: Rating,
) -> Result<ConversationTurn, DatabaseError> {
    let affected = conn.execute(
        "UPDATE ai_conversations SET rating = ?1 WHERE id = ?2",
        params![rating.as_u8(), id.as_i64()],
    )?;

    if affected == 0 {
        return Err(DatabaseError::NotFound(id));
    }
    get_turn(conn, id)?.ok_or(DatabaseError::NotFound(id))
}

pub fn count_turns(conn: &Connection) -> Result<i64, DatabaseError> {
    let count = conn.query_row("SELECT COUNT(*) FROM ai_conversations", [], |row| {
        row.get::<_, i64>(0)
    })?;
    Ok(count)
}

struct TurnRow {
    id: i64,
    user_id: String,
    prompt: String,
    response: String,
    feedback: Option<String>,
    rating: Option<i64>,
    timestamp: String,
    metadata: Option<String>,
}

fn read_turn_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<TurnRow> {
    Ok(TurnRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        prompt: row.get(2)?,
        response: row.get(3)?,
        feedback: row.get(4)?,
        rating: row.get(5)?,
        timestamp: row.get(6)?,
        metadata: row.get(7)?,
    })
}

fn turn_from_row(row: TurnRow) -> Result<ConversationTurn, DatabaseError> {
    let rating = row
        .rating
        .map(Rating::try_from)
        .transpose()
        .map_err(|e| DatabaseError::ConstraintViolation(e.to_string()))?;

    Ok(ConversationTurn {
        id: ConversationId::new(row.id),
        user_id: UserId::new(row.user_id),
        prompt: row.prompt,
        response: row.response,
        feedback: row.feedback,
        rating,
        timestamp: NaiveDateTime::parse_from_str(&row.timestamp, "%Y-%m-%d %H:%M:%S")
            .unwrap_or_default(),
        metadata: row.metadata,
    })
}

// ═══════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    fn sample_turn() -> NewConversationTurn {
        NewConversationTurn {
            user_id: UserId::new("user1"),
            prompt: "What is the capital of France?".into(),
            response: "The capital of France is Paris.".into(),
            feedback: Some("Accurate response".into()),
            rating: Rating::new(5),
            metadata: Some(r#"{"model":"askLou-prototype-v1","tokens":15}"#.into()),
        }
    }

    #[test]
    fn insert_assigns_id_and_timestamp() {
        let conn = open_memory_database().unwrap();
        let stored = insert_turn(&conn, &sample_turn()).unwrap();

        assert_eq!(stored.id.as_i64(), 1);
        assert_ne!(stored.timestamp, NaiveDateTime::default());
    }

    #[test]
    fn insert_then_get_round_trips_fields() {
        let conn = open_memory_database().unwrap();
        let input = sample_turn();
        let stored = insert_turn(&conn, &input).unwrap();
        let fetched = get_turn(&conn, stored.id).unwrap().unwrap();

        assert_eq!(fetched.prompt, input.prompt);
        assert_eq!(fetched.response, input.response);
        assert_eq!(fetched.feedback, input.feedback);
        assert_eq!(fetched.rating, input.rating);
        assert_eq!(fetched.metadata, input.metadata);
        assert_eq!(fetched, stored);
    }

    #[test]
    fn get_absent_returns_none() {
        let conn = open_memory_database().unwrap();
        assert!(get_turn(&conn, ConversationId::new(999)).unwrap().is_none());
    }

    #[test]
    fn list_returns_all_rows() {
        let conn = open_memory_database().unwrap();
        assert!(list_turns(&conn).unwrap().is_empty());

        insert_turn(&conn, &sample_turn()).unwrap();
        insert_turn(&conn, &sample_turn()).unwrap();
        assert_eq!(list_turns(&conn).unwrap().len(), 2);
        assert_eq!(count_turns(&conn).unwrap(), 2);
    }

    #[test]
    fn update_rating_changes_only_rating() {
        let conn = open_memory_database().unwrap();
        let stored = insert_turn(&conn, &sample_turn()).unwrap();

        let updated = update_turn_rating(&conn, stored.id, Rating::new(2).unwrap()).unwrap();

        assert_eq!(updated.rating, Rating::new(2));
        assert_eq!(updated.prompt, stored.prompt);
        assert_eq!(updated.response, stored.response);
        assert_eq!(updated.feedback, stored.feedback);
        assert_eq!(updated.metadata, stored.metadata);
        assert_eq!(updated.timestamp, stored.timestamp);
    }

    #[test]
    fn update_rating_missing_row_is_not_found() {
        let conn = open_memory_database().unwrap();
        let err = update_turn_rating(&conn, ConversationId::new(7), Rating::new(4).unwrap());
        assert!(matches!(err, Err(DatabaseError::NotFound(_))));
    }

    #[test]
    fn out_of_range_stored_rating_is_rejected_on_read() {
        let conn = open_memory_database().unwrap();
        let stored = insert_turn(&conn, &sample_turn()).unwrap();

        // Bypass the typed path to simulate a corrupt row
        conn.execute(
            "UPDATE ai_conversations SET rating = 9 WHERE id = ?1",
            params![stored.id.as_i64()],
        )
        .unwrap();

        let err = get_turn(&conn, stored.id);
        assert!(matches!(err, Err(DatabaseError::ConstraintViolation(_))));
    }
}
