use anyhow::Result;

use crate::db::DbConnection;
use crate::models::{NewTeacher, Teacher};

#[derive(Clone)]
pub struct TeacherRepository {
    db: DbConnection,
}

impl TeacherRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new teacher. A duplicate employee id violates the unique
    /// constraint and surfaces as an error.
    pub async fn insert(&self, new: &NewTeacher) -> Result<Teacher> {
        let result = sqlx::query(
            "INSERT INTO teachers
             (name, employee_id, email, phone_number, address, qualification, specialization, school_id)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(&new.name)
        .bind(&new.employee_id)
        .bind(&new.email)
        .bind(&new.phone_number)
        .bind(&new.address)
        .bind(&new.qualification)
        .bind(&new.specialization)
        .bind(new.school_id)
        .execute(self.db.pool())
        .await?;

        Ok(Teacher {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            employee_id: new.employee_id.clone(),
            email: new.email.clone(),
            phone_number: new.phone_number.clone(),
            address: new.address.clone(),
            qualification: new.qualification.clone(),
            specialization: new.specialization.clone(),
            school_id: new.school_id,
        })
    }

    pub async fn find_all(&self) -> Result<Vec<Teacher>> {
        let teachers = sqlx::query_as::<_, Teacher>("SELECT * FROM teachers ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;
        Ok(teachers)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Teacher>> {
        let teacher = sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(teacher)
    }

    /// Point lookup by the unique employee id
    pub async fn find_by_employee_id(&self, employee_id: &str) -> Result<Option<Teacher>> {
        let teacher = sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE employee_id = ?")
            .bind(employee_id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(teacher)
    }

    pub async fn find_by_school(&self, school_id: i64) -> Result<Vec<Teacher>> {
        let teachers =
            sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE school_id = ? ORDER BY id")
                .bind(school_id)
                .fetch_all(self.db.pool())
                .await?;
        Ok(teachers)
    }

    /// Exact-match name search; names are not unique
    pub async fn find_by_name(&self, name: &str) -> Result<Vec<Teacher>> {
        let teachers =
            sqlx::query_as::<_, Teacher>("SELECT * FROM teachers WHERE name = ? ORDER BY id")
                .bind(name)
                .fetch_all(self.db.pool())
                .await?;
        Ok(teachers)
    }

    /// Overwrite an existing teacher record (the merge of stored and patch
    /// fields happens in the service)
    pub async fn update(&self, teacher: &Teacher) -> Result<()> {
        sqlx::query(
            "UPDATE teachers
             SET name = ?, email = ?, phone_number = ?, address = ?,
                 qualification = ?, specialization = ?, school_id = ?
             WHERE id = ?",
        )
        .bind(&teacher.name)
        .bind(&teacher.email)
        .bind(&teacher.phone_number)
        .bind(&teacher.address)
        .bind(&teacher.qualification)
        .bind(&teacher.specialization)
        .bind(teacher.school_id)
        .bind(teacher.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Delete a teacher by id. Returns true if a row was removed.
    pub async fn delete(&self, id: i64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers WHERE id = ?")
            .bind(id)
            .fetch_one(self.db.pool())
            .await?;
        Ok(count > 0)
    }

    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM teachers")
            .fetch_one(self.db.pool())
            .await?;
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn setup_test() -> TeacherRepository {
        let db = DbConnection::init_test().await.expect("test db");
        TeacherRepository::new(db)
    }

    fn a_grant() -> NewTeacher {
        NewTeacher {
            name: Some("A. Grant".to_string()),
            employee_id: "T100".to_string(),
            email: Some("a.grant@example.com".to_string()),
            phone_number: None,
            address: None,
            qualification: Some("M.Ed".to_string()),
            specialization: Some("Mathematics".to_string()),
            school_id: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_point_lookups() {
        let repo = setup_test().await;

        let created = repo.insert(&a_grant()).await.unwrap();

        assert_eq!(repo.find_by_id(created.id).await.unwrap(), Some(created.clone()));
        assert_eq!(
            repo.find_by_employee_id("T100").await.unwrap(),
            Some(created)
        );
        assert!(repo.find_by_employee_id("T999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_employee_id_is_rejected() {
        let repo = setup_test().await;
        repo.insert(&a_grant()).await.unwrap();

        assert!(repo.insert(&a_grant()).await.is_err());
    }

    #[tokio::test]
    async fn test_find_by_name_returns_all_matches() {
        let repo = setup_test().await;
        repo.insert(&a_grant()).await.unwrap();

        let mut second = a_grant();
        second.employee_id = "T101".to_string();
        repo.insert(&second).await.unwrap();

        let matches = repo.find_by_name("A. Grant").await.unwrap();
        assert_eq!(matches.len(), 2);

        assert!(repo.find_by_name("Nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_reports_whether_row_existed() {
        let repo = setup_test().await;
        let teacher = repo.insert(&a_grant()).await.unwrap();

        assert!(repo.delete(teacher.id).await.unwrap());
        assert!(!repo.delete(teacher.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_and_count() {
        let repo = setup_test().await;
        assert_eq!(repo.count().await.unwrap(), 0);

        let teacher = repo.insert(&a_grant()).await.unwrap();

        assert!(repo.exists(teacher.id).await.unwrap());
        assert!(!repo.exists(teacher.id + 1).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
