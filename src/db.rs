use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::SqlitePool;

// The database URL for the production database
const DATABASE_URL: &str = "sqlite:school.db";

/// DbConnection manages the SQLite pool and owns schema setup
#[derive(Clone)]
pub struct DbConnection {
    pool: Arc<SqlitePool>,
}

impl DbConnection {
    /// Create a new database connection, creating the database file and
    /// schema if they don't exist yet
    pub async fn new(url: &str) -> Result<Self> {
        // Foreign keys must be enabled per connection for cascading
        // deletes to fire
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(options).await?;

        Self::setup_schema(&pool).await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Initialize the standard database, honoring DATABASE_URL if set
    pub async fn init() -> Result<Self> {
        let url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DATABASE_URL.to_string());
        Self::new(&url).await
    }

    /// Initialize a uniquely named in-memory database, for tests
    pub async fn init_test() -> Result<Self> {
        let test_id = uuid::Uuid::new_v4().to_string();
        let db_url = format!("sqlite:file:memdb_{}?mode=memory&cache=shared", test_id);

        Self::new(&db_url).await
    }

    /// Set up the required database schema
    async fn setup_schema(pool: &SqlitePool) -> Result<()> {
        // One statement per query; sqlx prepares each individually
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS schools (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL UNIQUE,
                address TEXT,
                phone_number TEXT,
                email TEXT,
                principal TEXT
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS teachers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                employee_id TEXT NOT NULL UNIQUE,
                email TEXT,
                phone_number TEXT,
                address TEXT,
                qualification TEXT,
                specialization TEXT,
                school_id INTEGER REFERENCES schools(id) ON DELETE SET NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS school_classes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                class_name TEXT NOT NULL,
                capacity INTEGER,
                school_id INTEGER NOT NULL REFERENCES schools(id) ON DELETE CASCADE,
                class_teacher_id INTEGER REFERENCES teachers(id) ON DELETE SET NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS class_sections (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                section_name TEXT NOT NULL,
                strength INTEGER,
                school_class_id INTEGER NOT NULL REFERENCES school_classes(id) ON DELETE CASCADE,
                section_teacher_id INTEGER REFERENCES teachers(id) ON DELETE SET NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS students (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                roll_number TEXT NOT NULL UNIQUE,
                email TEXT,
                phone_number TEXT,
                address TEXT,
                class_section_id INTEGER REFERENCES class_sections(id) ON DELETE CASCADE
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS attendance (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                student_id INTEGER NOT NULL REFERENCES students(id) ON DELETE CASCADE,
                date TEXT NOT NULL,
                status TEXT NOT NULL,
                UNIQUE (student_id, date)
            )
            "#,
        ];

        for statement in statements {
            sqlx::query(statement).execute(pool).await?;
        }

        Ok(())
    }

    /// Get the underlying SQLite pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
