//! Development seed data.
//!
//! Inserts the two sample exchanges the UI mockups were built around.
//! Seeding is idempotent: a database that already holds turns is left
//! alone.

use rusqlite::Connection;

use crate::db::{self, DatabaseError};
use crate::models::{NewConversationTurn, Rating, UserId};

fn sample_turns() -> Vec<NewConversationTurn> {
    vec![
        NewConversationTurn {
            user_id: UserId::new("user1"),
            prompt: "What is the capital of France?".to_string(),
            response: "The capital of France is Paris.".to_string(),
            feedback: Some("Accurate response".to_string()),
            rating: Rating::new(5),
            metadata: Some(r#"{"model":"askLou-prototype-v1","tokens":15}"#.to_string()),
        },
        NewConversationTurn {
            user_id: UserId::new("user2"),
            prompt: "How do I bake a chocolate cake?".to_string(),
            response: "Here's a recipe for chocolate cake...".to_string(),
            feedback: Some("Missing some ingredients".to_string()),
            rating: Rating::new(3),
            metadata: Some(r#"{"model":"askLou-prototype-v1","tokens":120}"#.to_string()),
        },
    ]
}

/// Insert the sample turns unless the table already has rows.
///
/// Returns how many turns were inserted.
pub fn seed_sample_turns(conn: &Connection) -> Result<usize, DatabaseError> {
    if db::count_turns(conn)? > 0 {
        tracing::info!("Database already has conversation turns, skipping seed");
        return Ok(0);
    }

    let turns = sample_turns();
    for turn in &turns {
        db::insert_turn(conn, turn)?;
    }

    tracing::info!(count = turns.len(), "Seeded sample conversation turns");
    Ok(turns.len())
}

// ═══════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    #[test]
    fn seed_inserts_the_sample_turns() {
        let conn = open_memory_database().unwrap();

        let inserted = seed_sample_turns(&conn).unwrap();
        assert_eq!(inserted, 2);

        let turns = db::list_turns(&conn).unwrap();
        assert_eq!(turns.len(), 2);

        let france = turns.iter().find(|t| t.prompt.contains("France")).unwrap();
        assert_eq!(france.user_id.as_str(), "user1");
        assert_eq!(france.response, "The capital of France is Paris.");
        assert_eq!(france.feedback.as_deref(), Some("Accurate response"));
        assert_eq!(france.rating, Rating::new(5));

        let cake = turns.iter().find(|t| t.prompt.contains("cake")).unwrap();
        assert_eq!(cake.user_id.as_str(), "user2");
        assert_eq!(cake.feedback.as_deref(), Some("Missing some ingredients"));
        assert_eq!(cake.rating, Rating::new(3));
        assert_eq!(
            cake.metadata.as_deref(),
            Some(r#"{"model":"askLou-prototype-v1","tokens":120}"#)
        );
    }

    #[test]
    fn seeding_twice_is_a_no_op() {
        let conn = open_memory_database().unwrap();

        assert_eq!(seed_sample_turns(&conn).unwrap(), 2);
        assert_eq!(seed_sample_turns(&conn).unwrap(), 0);
        assert_eq!(db::count_turns(&conn).unwrap(), 2);
    }
}
