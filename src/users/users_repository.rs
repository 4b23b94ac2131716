use async_trait::async_trait;
use diesel::prelude::*;
use std::sync::Arc;

use crate::db::{get_connection, DbPool};
use crate::errors::Result;
use crate::schema::users;
use crate::users::users_errors::UserError;
use crate::users::users_model::{NewUser, User};
use crate::users::users_traits::UserRepositoryTrait;

pub struct UserRepository {
    pool: Arc<DbPool>,
}

impl UserRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        UserRepository { pool }
    }
}

#[async_trait]
impl UserRepositoryTrait for UserRepository {
    fn find_all(&self) -> Result<Vec<User>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(users::table
            .order(users::created_at.asc())
            .load::<User>(&mut conn)?)
    }

    fn find_by_id(&self, user_id: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(users::table
            .find(user_id)
            .first::<User>(&mut conn)
            .optional()?)
    }

    fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let mut conn = get_connection(&self.pool)?;
        Ok(users::table
            .filter(users::email.eq(email))
            .first::<User>(&mut conn)
            .optional()?)
    }

    fn exists_by_email(&self, email: &str) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let count: i64 = users::table
            .filter(users::email.eq(email))
            .count()
            .get_result(&mut conn)?;
        Ok(count > 0)
    }

    async fn create(&self, new_user: NewUser) -> Result<User> {
        let mut conn = get_connection(&self.pool)?;

        let mut user = new_user;
        if user.id.is_none() {
            user.id = Some(uuid::Uuid::new_v4().to_string());
        }

        diesel::insert_into(users::table)
            .values(&user)
            .execute(&mut conn)
            .map_err(UserError::from)?;

        let id = user.id.unwrap_or_default();
        Ok(users::table.find(&id).first::<User>(&mut conn)?)
    }
}
