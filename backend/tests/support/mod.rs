//! Shared helper utilities for backend integration tests.
//!
//! Store-backed tests run against the PostgreSQL server named by
//! `QA_TEST_DATABASE_URL`. Each test context provisions a private schema,
//! creates the Q&A tables inside it, and drops it again when finished.

use postgres::{Client, NoTls};
use uuid::Uuid;

/// Environment variable naming the PostgreSQL server used by store tests.
pub const TEST_DATABASE_URL_ENV: &str = "QA_TEST_DATABASE_URL";

const CREATE_TABLES: &str = "
    CREATE TABLE questions (id SERIAL PRIMARY KEY, title TEXT, description TEXT, category TEXT);
    CREATE TABLE answers (id SERIAL PRIMARY KEY, question_id INTEGER, content TEXT);
    CREATE TABLE question_votes (id SERIAL PRIMARY KEY, question_id INTEGER, vote TEXT);
    CREATE TABLE answer_votes (id SERIAL PRIMARY KEY, answer_id INTEGER, vote TEXT);
";

/// Render a `postgres` error with enough detail to be useful in CI logs.
///
/// The `Display` implementation often collapses database errors to a generic
/// `db error`; prefer the server message and SQLSTATE when available.
pub fn format_postgres_error(error: &postgres::Error) -> String {
    let Some(db_error) = error.as_db_error() else {
        return error.to_string();
    };

    let mut summary = format!(
        "postgres error {:?}: {}",
        db_error.code(),
        db_error.message()
    );

    if let Some(detail) = db_error.detail() {
        summary.push_str("; detail: ");
        summary.push_str(detail);
    }

    summary
}

/// A throwaway schema holding the Q&A tables.
pub struct TestSchema {
    admin_url: String,
    name: String,
    scoped_url: String,
}

impl TestSchema {
    /// Create a fresh schema with empty tables.
    pub fn provision(admin_url: &str) -> Result<Self, String> {
        let name = format!("qa_test_{}", Uuid::new_v4().simple());
        let mut client =
            Client::connect(admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
        client
            .batch_execute(&format!(
                "CREATE SCHEMA {name}; SET search_path TO {name}; {CREATE_TABLES}"
            ))
            .map_err(|err| format_postgres_error(&err))?;

        let separator = if admin_url.contains('?') { '&' } else { '?' };
        let scoped_url = format!("{admin_url}{separator}options=-csearch_path%3D{name}");
        Ok(Self {
            admin_url: admin_url.to_owned(),
            name,
            scoped_url,
        })
    }

    /// Connection URL whose `search_path` points at this schema.
    pub fn url(&self) -> &str {
        &self.scoped_url
    }

    /// Run a scalar `count(*)` query inside the schema.
    pub fn count(&self, sql: &str) -> Result<i64, String> {
        let mut client =
            Client::connect(&self.scoped_url, NoTls).map_err(|err| format_postgres_error(&err))?;
        let row = client
            .query_one(sql, &[])
            .map_err(|err| format_postgres_error(&err))?;
        Ok(row.get(0))
    }
}

impl Drop for TestSchema {
    fn drop(&mut self) {
        let Ok(mut client) = Client::connect(&self.admin_url, NoTls) else {
            return;
        };
        if let Err(err) = client.batch_execute(&format!("DROP SCHEMA {} CASCADE", self.name)) {
            eprintln!("failed to drop {}: {}", self.name, format_postgres_error(&err));
        }
    }
}

/// Server URL for store tests, or `None` with a skip marker when unset.
pub fn test_database_url(test_name: &str) -> Option<String> {
    match std::env::var(TEST_DATABASE_URL_ENV) {
        Ok(url) if !url.trim().is_empty() => Some(url),
        _ => {
            eprintln!("SKIP-TEST-DATABASE: {test_name} skipped; set {TEST_DATABASE_URL_ENV}");
            None
        }
    }
}
