//! Naive SQL statement splitting.
//!
//! Seed files are split on the `;` character, pieces are trimmed, and
//! empty pieces are dropped. This is a character-level heuristic, not a
//! parser: a `;` inside a string literal, a comment, or a procedural
//! block will split in the wrong place. Seed files written for this tool
//! avoid those constructs.

/// Split SQL text into trimmed, non-empty statements.
pub fn split_statements(sql: &str) -> Vec<String> {
    sql.split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
