use anyhow::{anyhow, Result};
use chrono::NaiveDate;

use crate::db::DbConnection;
use crate::models::{Attendance, AttendanceStatus};

#[derive(Clone)]
pub struct AttendanceRepository {
    db: DbConnection,
}

impl AttendanceRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert-or-update keyed by (student, date), in a single atomic
    /// statement against the unique index. Repeated calls never create a
    /// second record; a different status flips the existing one in place.
    pub async fn upsert(
        &self,
        student_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<Attendance> {
        sqlx::query(
            "INSERT INTO attendance (student_id, date, status)
             VALUES (?, ?, ?)
             ON CONFLICT (student_id, date) DO UPDATE SET status = excluded.status",
        )
        .bind(student_id)
        .bind(date)
        .bind(status)
        .execute(self.db.pool())
        .await?;

        self.find_by_student_and_date(student_id, date)
            .await?
            .ok_or_else(|| anyhow!("attendance row missing after upsert"))
    }

    pub async fn find_by_student_and_date(
        &self,
        student_id: i64,
        date: NaiveDate,
    ) -> Result<Option<Attendance>> {
        let record = sqlx::query_as::<_, Attendance>(
            "SELECT * FROM attendance WHERE student_id = ? AND date = ?",
        )
        .bind(student_id)
        .bind(date)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(record)
    }

    /// All records for a calendar date, insertion order
    pub async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Attendance>> {
        let records =
            sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE date = ? ORDER BY id")
                .bind(date)
                .fetch_all(self.db.pool())
                .await?;
        Ok(records)
    }

    /// All records for a student, insertion order
    pub async fn find_by_student(&self, student_id: i64) -> Result<Vec<Attendance>> {
        let records = sqlx::query_as::<_, Attendance>(
            "SELECT * FROM attendance WHERE student_id = ? ORDER BY id",
        )
        .bind(student_id)
        .fetch_all(self.db.pool())
        .await?;
        Ok(records)
    }
}
