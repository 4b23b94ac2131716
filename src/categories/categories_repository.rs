use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use std::sync::Arc;
use uuid::Uuid;

use crate::categories::categories_errors::CategoryError;
use crate::categories::categories_model::{Category, CategoryUpdate, NewCategory};
use crate::categories::categories_traits::CategoryRepositoryTrait;
use crate::db::{get_connection, DbPool};
use crate::errors::{Error, Result};
use crate::schema::{categories, transactions};

pub struct CategoryRepository {
    pool: Arc<DbPool>,
}

impl CategoryRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        CategoryRepository { pool }
    }
}

#[async_trait]
impl CategoryRepositoryTrait for CategoryRepository {
    fn find_by_user(&self, user_id: &str) -> Result<Vec<Category>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories::table
            .filter(categories::user_id.eq(user_id))
            .order(categories::created_at.asc())
            .load::<Category>(&mut conn)?)
    }

    fn find_by_id_and_user(&self, category_id: &str, user_id: &str) -> Result<Option<Category>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(categories::table
            .filter(categories::id.eq(category_id))
            .filter(categories::user_id.eq(user_id))
            .first::<Category>(&mut conn)
            .optional()?)
    }

    async fn create(&self, new_category: NewCategory) -> Result<Category> {
        let mut conn = get_connection(&self.pool)?;

        let mut category = new_category;
        if category.id.is_none() {
            category.id = Some(Uuid::new_v4().to_string());
        }

        diesel::insert_into(categories::table)
            .values(&category)
            .execute(&mut conn)?;

        let id = category.id.unwrap_or_default();
        Ok(categories::table.find(&id).first::<Category>(&mut conn)?)
    }

    async fn update(
        &self,
        category_id: &str,
        user_id: &str,
        update: CategoryUpdate,
    ) -> Result<Category> {
        let mut conn = get_connection(&self.pool)?;

        let affected = diesel::update(
            categories::table
                .filter(categories::id.eq(category_id))
                .filter(categories::user_id.eq(user_id)),
        )
        .set((
            categories::name.eq(&update.name),
            categories::color.eq(&update.color),
            categories::icon.eq(&update.icon),
            categories::monthly_goal.eq(update.monthly_goal.map(|g| g.to_string())),
            categories::updated_at.eq(Utc::now().to_rfc3339()),
        ))
        .execute(&mut conn)?;

        if affected == 0 {
            return Err(CategoryError::NotFound(format!(
                "Category with id {} not found",
                category_id
            ))
            .into());
        }

        Ok(categories::table
            .find(category_id)
            .first::<Category>(&mut conn)?)
    }

    async fn delete_with_disassociation(&self, category_id: &str, user_id: &str) -> Result<usize> {
        let mut conn = get_connection(&self.pool)?;

        conn.transaction::<usize, Error, _>(|tx_conn| {
            // Disassociate before deleting so the foreign key stays satisfied
            diesel::update(transactions::table.filter(transactions::category_id.eq(category_id)))
                .set(transactions::category_id.eq(None::<String>))
                .execute(tx_conn)?;

            let deleted = diesel::delete(
                categories::table
                    .filter(categories::id.eq(category_id))
                    .filter(categories::user_id.eq(user_id)),
            )
            .execute(tx_conn)?;

            if deleted == 0 {
                // Rolls back the disassociation pass above
                return Err(CategoryError::NotFound(format!(
                    "Category with id {} not found",
                    category_id
                ))
                .into());
            }

            Ok(deleted)
        })
    }
}
