use nextask_core::db::open_db_in_memory;
use nextask_core::{SettingsRepository, SqliteSettingsRepository};

#[test]
fn get_unwritten_key_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);
    assert_eq!(repo.get("hasOnboarded").unwrap(), None);
}

#[test]
fn set_then_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    repo.set("hasOnboarded", "true").unwrap();
    assert_eq!(repo.get("hasOnboarded").unwrap().as_deref(), Some("true"));
}

#[test]
fn set_replaces_existing_value() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    repo.set("theme", "dark").unwrap();
    repo.set("theme", "light").unwrap();
    assert_eq!(repo.get("theme").unwrap().as_deref(), Some("light"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM settings;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}

#[test]
fn keys_are_independent() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSettingsRepository::new(&conn);

    repo.set("a", "1").unwrap();
    repo.set("b", "2").unwrap();
    assert_eq!(repo.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(repo.get("b").unwrap().as_deref(), Some("2"));
}
