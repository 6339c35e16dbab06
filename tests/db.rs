use appetizr_products::schema::{categories, products, venue_profiles};
use diesel::prelude::*;

mod common;

#[test]
fn test_creates_and_removes_db_files() {
    let test_db = common::TestDb::new();
    let pool = test_db.pool();
    let conn = pool.get();
    assert!(conn.is_ok());
}

#[test]
fn migrations_create_empty_tables() {
    let test_db = common::TestDb::new();
    let mut conn = test_db.pool().get().expect("should acquire DB connection");

    let venues: i64 = venue_profiles::table.count().get_result(&mut conn).unwrap();
    let items: i64 = products::table.count().get_result(&mut conn).unwrap();
    let entries: i64 = categories::table.count().get_result(&mut conn).unwrap();

    assert_eq!((venues, items, entries), (0, 0, 0));
}

#[test]
fn venue_profile_key_is_email_and_subject() {
    let test_db = common::TestDb::new();
    test_db.add_venue("v1@example.com", "sub-1", "ven-1");
    test_db.add_venue("v1@example.com", "sub-2", "ven-2");

    let mut conn = test_db.pool().get().expect("should acquire DB connection");
    let duplicate = diesel::insert_into(venue_profiles::table)
        .values((
            venue_profiles::venue_email.eq("v1@example.com"),
            venue_profiles::cognito_id.eq("sub-1"),
            venue_profiles::venue_id.eq("ven-3"),
        ))
        .execute(&mut conn);
    assert!(duplicate.is_err());
}
