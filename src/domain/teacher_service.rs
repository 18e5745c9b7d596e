use anyhow::Result;
use tracing::info;

use crate::db::DbConnection;
use crate::models::{NewTeacher, Teacher, TeacherPatch};
use crate::storage::TeacherRepository;

#[derive(Clone)]
pub struct TeacherService {
    teachers: TeacherRepository,
}

impl TeacherService {
    pub fn new(db: DbConnection) -> Self {
        Self {
            teachers: TeacherRepository::new(db),
        }
    }

    pub async fn create_teacher(&self, new: NewTeacher) -> Result<Teacher> {
        info!("Creating teacher: employee_id={}", new.employee_id);
        self.teachers.insert(&new).await
    }

    pub async fn get_all_teachers(&self) -> Result<Vec<Teacher>> {
        self.teachers.find_all().await
    }

    pub async fn teacher_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        self.teachers.find_by_id(id).await
    }

    pub async fn teacher_by_employee_id(&self, employee_id: &str) -> Result<Option<Teacher>> {
        self.teachers.find_by_employee_id(employee_id).await
    }

    pub async fn teachers_by_school(&self, school_id: i64) -> Result<Vec<Teacher>> {
        self.teachers.find_by_school(school_id).await
    }

    pub async fn teachers_by_name(&self, name: &str) -> Result<Vec<Teacher>> {
        self.teachers.find_by_name(name).await
    }

    /// Partial update: only the fields present in the patch overwrite the
    /// stored record, everything else keeps its value. Returns `None` (and
    /// writes nothing) when the teacher does not exist.
    pub async fn update_teacher(&self, id: i64, patch: TeacherPatch) -> Result<Option<Teacher>> {
        let Some(mut teacher) = self.teachers.find_by_id(id).await? else {
            info!("Teacher not found for update: {id}");
            return Ok(None);
        };

        if let Some(name) = patch.name {
            teacher.name = Some(name);
        }
        if let Some(email) = patch.email {
            teacher.email = Some(email);
        }
        if let Some(phone_number) = patch.phone_number {
            teacher.phone_number = Some(phone_number);
        }
        if let Some(address) = patch.address {
            teacher.address = Some(address);
        }
        if let Some(qualification) = patch.qualification {
            teacher.qualification = Some(qualification);
        }
        if let Some(specialization) = patch.specialization {
            teacher.specialization = Some(specialization);
        }
        if let Some(school_id) = patch.school_id {
            teacher.school_id = Some(school_id);
        }

        self.teachers.update(&teacher).await?;
        info!("Updated teacher {id}");
        Ok(Some(teacher))
    }

    /// Delete by id; true if the teacher existed
    pub async fn delete_teacher(&self, id: i64) -> Result<bool> {
        let deleted = self.teachers.delete(id).await?;
        if deleted {
            info!("Deleted teacher {id}");
        }
        Ok(deleted)
    }

    pub async fn teacher_exists(&self, id: i64) -> Result<bool> {
        self.teachers.exists(id).await
    }

    pub async fn count_teachers(&self) -> Result<i64> {
        self.teachers.count().await
    }
}
