//! Domain records and request payloads.
//!
//! Wire format is camelCase JSON; database columns are snake_case, so every
//! record derives both `serde` renames and `sqlx::FromRow`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub principal: Option<String>,
}

/// Payload for creating a school, and the full-overwrite update body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchool {
    pub name: String,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub principal: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SchoolClass {
    pub id: i64,
    pub class_name: String,
    pub capacity: Option<i64>,
    pub school_id: i64,
    /// Class teacher, if one is assigned
    pub class_teacher_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSchoolClass {
    pub class_name: String,
    pub capacity: Option<i64>,
    pub school_id: i64,
    pub class_teacher_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ClassSection {
    pub id: i64,
    pub section_name: String,
    /// Section headcount
    pub strength: Option<i64>,
    pub school_class_id: i64,
    pub section_teacher_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClassSection {
    pub section_name: String,
    pub strength: Option<i64>,
    pub school_class_id: i64,
    pub section_teacher_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Teacher {
    pub id: i64,
    pub name: Option<String>,
    pub employee_id: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub school_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTeacher {
    pub name: Option<String>,
    pub employee_id: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub school_id: Option<i64>,
}

/// Partial update for a teacher. Fields left as `None` keep their stored
/// value; this is the one entity with PATCH rather than PUT semantics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeacherPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub qualification: Option<String>,
    pub specialization: Option<String>,
    pub school_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: i64,
    pub name: Option<String>,
    pub roll_number: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub class_section_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub name: Option<String>,
    pub roll_number: String,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
    pub class_section_id: Option<i64>,
}

/// Attendance status for a single school day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "UPPERCASE")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Attendance {
    pub id: i64,
    pub student_id: i64,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceRequest {
    pub student_id: i64,
    /// ISO-8601 calendar date (YYYY-MM-DD)
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&AttendanceStatus::Present).unwrap(),
            "\"PRESENT\""
        );
        assert_eq!(
            serde_json::from_str::<AttendanceStatus>("\"LATE\"").unwrap(),
            AttendanceStatus::Late
        );
    }

    #[test]
    fn test_teacher_json_is_camel_case() {
        let teacher = Teacher {
            id: 1,
            name: Some("A. Grant".to_string()),
            employee_id: "T100".to_string(),
            email: None,
            phone_number: None,
            address: None,
            qualification: None,
            specialization: None,
            school_id: Some(7),
        };

        let json = serde_json::to_value(&teacher).unwrap();
        assert_eq!(json["employeeId"], "T100");
        assert_eq!(json["schoolId"], 7);
    }

    #[test]
    fn test_mark_attendance_request_parses_iso_date() {
        let request: MarkAttendanceRequest = serde_json::from_str(
            r#"{"studentId": 3, "date": "2025-11-30", "status": "ABSENT"}"#,
        )
        .unwrap();

        assert_eq!(request.student_id, 3);
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 11, 30).unwrap());
        assert_eq!(request.status, AttendanceStatus::Absent);
    }

    #[test]
    fn test_teacher_patch_defaults_to_no_changes() {
        let patch: TeacherPatch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch, TeacherPatch::default());
    }
}
