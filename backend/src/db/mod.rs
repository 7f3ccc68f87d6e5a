//! SQLite persistence for school records.
//!
//! The server holds a `Database` handle (just the file path) in its app data.
//! Every request opens its own connection on actix's blocking pool; each
//! connection gets the `contains_ci` function and the `SCHOOL_NAME` collation
//! so search and ordering follow `common::filter`.

use chrono::Utc;
use common::filter::{compare_names, contains_ignore_case, SchoolFilter};
use common::model::school::{School, SchoolDraft, SchoolSummary};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS schools (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    name       TEXT NOT NULL,
    address    TEXT NOT NULL,
    city       TEXT NOT NULL,
    state      TEXT NOT NULL,
    contact    TEXT NOT NULL,
    email_id   TEXT NOT NULL,
    image      TEXT NOT NULL,
    created_at TEXT NOT NULL
);
CREATE INDEX IF NOT EXISTS schools_state_idx ON schools (state);
";

const LIST_SQL: &str = "
SELECT id, name, address, city, state, image, created_at
FROM schools
WHERE (?1 IS NULL OR contains_ci(name, ?1) OR contains_ci(city, ?1) OR contains_ci(address, ?1))
  AND (?2 IS NULL OR state = ?2)
ORDER BY name COLLATE SCHOOL_NAME, id
";

#[derive(Clone, Debug)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the `schools` table if it does not exist yet.
    pub fn init(&self) -> rusqlite::Result<()> {
        self.open()?.execute_batch(SCHEMA)
    }

    pub fn open(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        conn.create_scalar_function(
            "contains_ci",
            2,
            FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
            |ctx| {
                let haystack: Option<String> = ctx.get(0)?;
                let needle: Option<String> = ctx.get(1)?;
                Ok(match (haystack, needle) {
                    (Some(haystack), Some(needle)) => contains_ignore_case(&haystack, &needle),
                    _ => false,
                })
            },
        )?;
        conn.create_collation("SCHOOL_NAME", compare_names)?;
        Ok(conn)
    }

    /// Inserts one school and returns it with its generated id and timestamp.
    pub fn insert_school(&self, draft: SchoolDraft) -> rusqlite::Result<School> {
        let conn = self.open()?;
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO schools (name, address, city, state, contact, email_id, image, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                &draft.name,
                &draft.address,
                &draft.city,
                &draft.state,
                &draft.contact,
                &draft.email_id,
                &draft.image,
                &created_at,
            ],
        )?;

        Ok(School {
            id: conn.last_insert_rowid(),
            name: draft.name,
            address: draft.address,
            city: draft.city,
            state: draft.state,
            contact: draft.contact,
            email_id: draft.email_id,
            image: draft.image,
            created_at,
        })
    }

    /// Schools matching `filter`, sorted by name.
    pub fn list_schools(&self, filter: &SchoolFilter) -> rusqlite::Result<Vec<SchoolSummary>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(LIST_SQL)?;
        let rows = stmt.query_map(
            params![filter.search_term(), filter.state_restriction()],
            summary_from_row,
        )?;
        rows.collect()
    }

    pub fn count_schools(&self) -> rusqlite::Result<i64> {
        self.open()?
            .query_row("SELECT COUNT(*) FROM schools", [], |row| row.get(0))
    }
}

fn summary_from_row(row: &Row<'_>) -> rusqlite::Result<SchoolSummary> {
    Ok(SchoolSummary {
        id: row.get(0)?,
        name: row.get(1)?,
        address: row.get(2)?,
        city: row.get(3)?,
        state: row.get(4)?,
        image: row.get(5)?,
        created_at: row.get(6)?,
    })
}

/// Scratch database in a temporary directory; keep the `TempDir` alive.
#[cfg(test)]
pub(crate) fn temp_database() -> (tempfile::TempDir, Database) {
    let dir = tempfile::tempdir().expect("temp dir");
    let db = Database::new(dir.path().join("schools.sqlite"));
    db.init().expect("schema");
    (dir, db)
}

#[cfg(test)]
pub(crate) fn draft(name: &str, address: &str, city: &str, state: &str) -> SchoolDraft {
    SchoolDraft {
        name: name.to_string(),
        address: address.to_string(),
        city: city.to_string(),
        state: state.to_string(),
        contact: "5551234567".to_string(),
        email_id: "office@school.edu".to_string(),
        image: "https://res.cloudinary.com/demo/image/upload/schools/front.jpg".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        let (_dir, db) = temp_database();
        db.init().unwrap();
        assert_eq!(db.count_schools().unwrap(), 0);
    }

    #[test]
    fn insert_assigns_increasing_ids() {
        let (_dir, db) = temp_database();
        let first = db.insert_school(draft("Lincoln High", "1 Main Street", "Boston", "Massachusetts")).unwrap();
        let second = db.insert_school(draft("Adams Prep", "2 Main Street", "Boston", "Massachusetts")).unwrap();
        assert!(second.id > first.id);
        assert_eq!(db.count_schools().unwrap(), 2);
    }

    #[test]
    fn listing_round_trips_created_at() {
        let (_dir, db) = temp_database();
        let school = db.insert_school(draft("Lincoln High", "1 Main Street", "Boston", "Massachusetts")).unwrap();
        let listed = db.list_schools(&SchoolFilter::default()).unwrap();
        assert_eq!(listed, vec![SchoolSummary::from(school)]);
    }

    #[test]
    fn search_folds_non_ascii_case() {
        let (_dir, db) = temp_database();
        db.insert_school(draft("Lycée Français", "10 Rue de la Paix", "Paris", "Île-de-France")).unwrap();
        db.insert_school(draft("Lincoln High", "1 Main Street", "Boston", "Massachusetts")).unwrap();

        let filter = SchoolFilter::new("LYCÉE", "All");
        let listed = db.list_schools(&filter).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Lycée Français");
    }

    #[test]
    fn like_wildcards_are_literal() {
        let (_dir, db) = temp_database();
        db.insert_school(draft("Lincoln High", "1 Main Street", "Boston", "Massachusetts")).unwrap();
        let listed = db.list_schools(&SchoolFilter::new("%", "All")).unwrap();
        assert!(listed.is_empty());
    }
}
