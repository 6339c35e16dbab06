//! Helpers for integration tests.

#![allow(dead_code)]

use appetizr_products::db::{DbPool, MIGRATIONS, establish_connection_pool};
use appetizr_products::schema::{categories, venue_profiles};
use diesel::prelude::*;
use diesel_migrations::MigrationHarness;
use tempfile::NamedTempFile;

/// Temporary database used in integration tests.
pub struct TestDb {
    _tempfile: NamedTempFile,
    pool: DbPool,
}

impl TestDb {
    pub fn new() -> Self {
        let tempfile = NamedTempFile::new().expect("Failed to create temp file");
        let pool = establish_connection_pool(tempfile.path().to_str().unwrap())
            .expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            _tempfile: tempfile,
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    /// Register a venue operator profile keyed by `(email, sub)`.
    pub fn add_venue(&self, email: &str, sub: &str, venue_id: &str) {
        let mut conn = self.pool.get().expect("should acquire DB connection");
        diesel::insert_into(venue_profiles::table)
            .values((
                venue_profiles::venue_email.eq(email),
                venue_profiles::cognito_id.eq(sub),
                venue_profiles::venue_id.eq(venue_id),
                venue_profiles::venue_name.eq(Some("Bangkok Corner")),
            ))
            .execute(&mut conn)
            .expect("should insert venue profile");
    }

    pub fn add_category(&self, id: &str, name: &str, category_type: &str) {
        let mut conn = self.pool.get().expect("should acquire DB connection");
        diesel::insert_into(categories::table)
            .values((
                categories::id.eq(id),
                categories::name.eq(name),
                categories::category_type.eq(category_type),
            ))
            .execute(&mut conn)
            .expect("should insert category");
    }
}
