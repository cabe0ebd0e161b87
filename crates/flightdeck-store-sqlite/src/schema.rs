//! SQL schema for the Flightdeck SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per flight number. Rows are upserted, never deleted.
CREATE TABLE IF NOT EXISTS launches (
    flight_number INTEGER PRIMARY KEY,
    mission       TEXT    NOT NULL,
    rocket        TEXT    NOT NULL,
    launch_date   TEXT    NOT NULL,          -- RFC 3339 UTC
    target        TEXT,                      -- planet name; scheduled launches only
    customers     TEXT    NOT NULL DEFAULT '[]',
    upcoming      INTEGER NOT NULL,
    success       INTEGER                    -- NULL while the outcome is unknown
);

CREATE TABLE IF NOT EXISTS planets (
    kepler_name TEXT PRIMARY KEY
);

PRAGMA user_version = 1;
";
