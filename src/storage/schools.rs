use anyhow::Result;

use crate::db::DbConnection;
use crate::models::{NewSchool, School};

#[derive(Clone)]
pub struct SchoolRepository {
    db: DbConnection,
}

impl SchoolRepository {
    pub fn new(db: DbConnection) -> Self {
        Self { db }
    }

    /// Insert a new school; the store assigns the id. A duplicate name
    /// violates the unique constraint and surfaces as an error.
    pub async fn insert(&self, new: &NewSchool) -> Result<School> {
        let result = sqlx::query(
            "INSERT INTO schools (name, address, phone_number, email, principal)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&new.name)
        .bind(&new.address)
        .bind(&new.phone_number)
        .bind(&new.email)
        .bind(&new.principal)
        .execute(self.db.pool())
        .await?;

        Ok(School {
            id: result.last_insert_rowid(),
            name: new.name.clone(),
            address: new.address.clone(),
            phone_number: new.phone_number.clone(),
            email: new.email.clone(),
            principal: new.principal.clone(),
        })
    }

    /// List all schools in insertion order
    pub async fn find_all(&self) -> Result<Vec<School>> {
        let schools = sqlx::query_as::<_, School>("SELECT * FROM schools ORDER BY id")
            .fetch_all(self.db.pool())
            .await?;
        Ok(schools)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<School>> {
        let school = sqlx::query_as::<_, School>("SELECT * FROM schools WHERE id = ?")
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(school)
    }

    /// Point lookup by the unique school name
    pub async fn find_by_name(&self, name: &str) -> Result<Option<School>> {
        let school = sqlx::query_as::<_, School>("SELECT * FROM schools WHERE name = ?")
            .bind(name)
            .fetch_optional(self.db.pool())
            .await?;
        Ok(school)
    }

    /// Overwrite all updatable fields of an existing school
    pub async fn update(&self, school: &School) -> Result<()> {
        sqlx::query(
            "UPDATE schools
             SET name = ?, address = ?, phone_number = ?, email = ?, principal = ?
             WHERE id = ?",
        )
        .bind(&school.name)
        .bind(&school.address)
        .bind(&school.phone_number)
        .bind(&school.email)
        .bind(&school.principal)
        .bind(school.id)
        .execute(self.db.pool())
        .await?;
        Ok(())
    }

    /// Delete a school; its classes (and their sections and students) go
    /// with it via the cascade
    pub async fn delete(&self, id: i64) -> Result<()> {
        sqlx::query("DELETE FROM schools WHERE id = ?")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lincoln_high() -> NewSchool {
        NewSchool {
            name: "Lincoln High".to_string(),
            address: Some("1 Main St".to_string()),
            phone_number: None,
            email: None,
            principal: Some("D. Skinner".to_string()),
        }
    }

    async fn setup_test() -> SchoolRepository {
        let db = DbConnection::init_test().await.expect("test db");
        SchoolRepository::new(db)
    }

    #[tokio::test]
    async fn test_insert_and_find_by_id() {
        let repo = setup_test().await;

        let created = repo.insert(&lincoln_high()).await.unwrap();
        let found = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.name, "Lincoln High");
    }

    #[tokio::test]
    async fn test_find_by_name() {
        let repo = setup_test().await;
        repo.insert(&lincoln_high()).await.unwrap();

        let found = repo.find_by_name("Lincoln High").await.unwrap();
        assert!(found.is_some());

        let missing = repo.find_by_name("Springfield Elementary").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_name_is_rejected() {
        let repo = setup_test().await;
        repo.insert(&lincoln_high()).await.unwrap();

        let duplicate = repo.insert(&lincoln_high()).await;
        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let repo = setup_test().await;
        let mut school = repo.insert(&lincoln_high()).await.unwrap();

        school.principal = Some("E. Krabappel".to_string());
        school.address = None;
        repo.update(&school).await.unwrap();

        let stored = repo.find_by_id(school.id).await.unwrap().unwrap();
        assert_eq!(stored.principal.as_deref(), Some("E. Krabappel"));
        assert_eq!(stored.address, None);
    }

    #[tokio::test]
    async fn test_delete_removes_school() {
        let repo = setup_test().await;
        let school = repo.insert(&lincoln_high()).await.unwrap();

        repo.delete(school.id).await.unwrap();

        assert!(repo.find_by_id(school.id).await.unwrap().is_none());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
