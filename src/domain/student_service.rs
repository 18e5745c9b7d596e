use anyhow::Result;
use tracing::info;

use crate::db::DbConnection;
use crate::models::{NewStudent, Student};
use crate::storage::StudentRepository;

#[derive(Clone)]
pub struct StudentService {
    students: StudentRepository,
}

impl StudentService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            students: StudentRepository::new(db),
        }
    }

    pub async fn add_student(&self, new: NewStudent) -> Result<Student> {
        info!("Creating student: roll_number={}", new.roll_number);
        self.students.insert(&new).await
    }

    pub async fn get_all_students(&self) -> Result<Vec<Student>> {
        self.students.find_all().await
    }

    pub async fn student_by_roll_number(&self, roll_number: &str) -> Result<Option<Student>> {
        self.students.find_by_roll_number(roll_number).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> StudentService {
        let db = DbConnection::init_test().await.expect("test db");
        StudentService::new(db)
    }

    #[tokio::test]
    async fn test_add_and_list_students() {
        let service = setup_test().await;

        service
            .add_student(NewStudent {
                name: Some("J. Lee".to_string()),
                roll_number: "S100".to_string(),
                email: None,
                phone_number: None,
                address: None,
                class_section_id: None,
            })
            .await
            .unwrap();

        let students = service.get_all_students().await.unwrap();
        assert_eq!(students.len(), 1);
        assert_eq!(students[0].roll_number, "S100");
    }

    #[tokio::test]
    async fn test_student_by_roll_number_miss_is_none() {
        let service = setup_test().await;

        assert!(service
            .student_by_roll_number("S404")
            .await
            .unwrap()
            .is_none());
    }
}
