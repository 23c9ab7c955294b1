//! SQL schema for the quiz SQLite store.
//!
//! Column order matters: row encoders bind positionally. No foreign keys are
//! declared; ids are shared across tables by convention only.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
-- Event log: audience comments.
CREATE TABLE IF NOT EXISTS comment (
    content  TEXT,
    \"offset\" INT,
    createAt INT            -- unix ms
);

-- Leaderboard snapshot; replaced wholesale on every scoring tick.
CREATE TABLE IF NOT EXISTS player (
    id             TEXT,
    name           TEXT,
    score          INT,
    rank           INT,
    correctCount   INT,
    incorrectCount INT,
    correctRate    REAL,
    createAt       INT      -- unix ms
);

-- Event log: answer submissions.
CREATE TABLE IF NOT EXISTS vote (
    playerId   TEXT,
    questionId INT,
    optionId   INT,
    time       INT,         -- unix ms
    isAnswer   INT          -- 0 | 1
);

CREATE TABLE IF NOT EXISTS question (
    id      INT,
    content TEXT
);

CREATE TABLE IF NOT EXISTS option (
    id         INT,
    questionId INT,
    content    TEXT,
    isAnswer   INT          -- 0 | 1
);
";

/// Every table created by [`SCHEMA`].
pub const TABLES: [&str; 5] = ["comment", "player", "vote", "question", "option"];
