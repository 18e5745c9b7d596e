use anyhow::Result;

use crate::db::DbConnection;
use crate::models::{NewStudent, Student};

#[derive(Clone)]
pub struct StudentRepository {
    db: DbConnection,
}

impl StudentRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new student. A duplicate roll number violates the unique
    /// constraint and surfaces as an error.
    pub async fn insert(&self, new: &NewStudent) -> Result<Student> {
        let result = sqlx::query(
            "INSERT INTO students (name, roll_number, email, phone_number, address, class_section_id)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&new.name)
        .bind(&new.roll_number)
        .bind(&new.email)
        .bind(&new.phone_number)
        .bind(&new.address)
        .bind(new.class_section_id)
        .execute(self.db.pool())
        .await?;

        Ok(Student {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            roll_number: new.roll_number.clone(),
            email: new.email.clone(),
            phone_number: new.phone_number.clone(),
            address: new.address.clone(),
            class_section_id: new.class_section_id,
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Student>> {
        let students = sqlx::query_as::<_, Student>("SELECT * FROM students ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;
        Ok(students)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(student)
    }

    /// Point lookup by the unique roll number
    pub async fn find_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>> {
        let student = sqlx::query_as::<_, Student>("SELECT * FROM students WHERE roll_number = ?")
            .bind(roll_number)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(student)
    }
}
