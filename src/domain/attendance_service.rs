use anyhow::Result;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::db::DbConnection;
use crate::models::{Attendance, AttendanceStatus};
use crate::storage::{AttendanceRepository, StudentRepository};

/// Outcome of attendance operations that depend on a student existing.
/// "Student not found" is part of the contract, not an infrastructure
/// failure, so it gets its own variant instead of an opaque error.
#[derive(Debug, Error)]
pub enum AttendanceError {
    #[error("student not found")]
    StudentNotFound,
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

#[derive(Clone)]
pub struct AttendanceService {
    attendance: AttendanceRepository,
    students: StudentRepository,
}

impl AttendanceService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            attendance: AttendanceRepository::new(db.clone()),
            students: StudentRepository::new(db),
        }
    }

    /// Mark attendance for a student on a date. Upsert keyed by
    /// (student, date): an existing record has its status overwritten in
    /// place, otherwise a new record is inserted. Never creates duplicates.
    pub async fn mark_attendance(
        &self,
        student_id: i64,
        date: NaiveDate,
        status: AttendanceStatus,
    ) -> Result<Attendance, AttendanceError> {
        info!("Marking attendance: student={student_id}, date={date}, status={status:?}");

        self.students
            .find_by_id(student_id)
            .await?
            .ok_or(AttendanceError::StudentNotFound)?;

        let record = self.attendance.upsert(student_id, date, status).await?;
        Ok(record)
    }

    /// All attendance records for a date; a date with no records yields an
    /// empty list, never an error
    pub async fn attendance_by_date(&self, date: NaiveDate) -> Result<Vec<Attendance>> {
        let records = self.attendance.find_by_date(date).await?;
        info!("Found {} attendance records for {date}", records.len());
        Ok(records)
    }

    /// All attendance records for a student; the student must exist
    pub async fn attendance_by_student(
        &self,
        student_id: i64,
    ) -> Result<Vec<Attendance>, AttendanceError> {
        self.students
            .find_by_id(student_id)
            .await?
            .ok_or(AttendanceError::StudentNotFound)?;

        let records = self.attendance.find_by_student(student_id).await?;
        Ok(records)
    }
}
