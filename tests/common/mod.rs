use std::sync::Arc;

use fintrack_core::db::{self, DbPool};

/// A migrated SQLite database in a temporary directory, dropped with the
/// context.
pub struct TestDb {
    pub pool: Arc<DbPool>,
    _data_dir: tempfile::TempDir,
}

pub fn setup_db() -> TestDb {
    let data_dir = tempfile::tempdir().expect("failed to create temp dir");
    let db_path = db::init(data_dir.path().to_str().expect("non-utf8 temp path"))
        .expect("failed to initialize database");
    let pool = db::create_pool(&db_path).expect("failed to create pool");
    db::run_migrations(&pool).expect("failed to run migrations");

    TestDb {
        pool,
        _data_dir: data_dir,
    }
}
