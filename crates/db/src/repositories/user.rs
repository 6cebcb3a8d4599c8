//! User repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use riocaja_core::auth::{CredentialStore, NewUser, UserRecord};
use riocaja_core::store::StoreError;
use riocaja_shared::types::UserId;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    sea_query::Expr,
};
use tracing::debug;

use super::store_error;
use crate::entities::users;

/// User repository backing [`CredentialStore`].
#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DatabaseConnection,
}

impl UserRepository {
    /// Creates a new user repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_record(model: users::Model) -> Result<UserRecord, StoreError> {
    let failed_login_attempts = u32::try_from(model.failed_login_attempts).map_err(|_| {
        StoreError::Backend(format!(
            "negative failed_login_attempts for user {}",
            model.id
        ))
    })?;

    Ok(UserRecord {
        id: UserId::from_uuid(model.id),
        name: model.nombre,
        email: model.email,
        password_hash: model.password_hash,
        role: model.rol.into(),
        status: model.estado.into(),
        registered_at: model.fecha_registro.with_timezone(&Utc),
        failed_login_attempts,
        recovery_token: model.recovery_token,
    })
}

#[async_trait]
impl CredentialStore for UserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, StoreError> {
        users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(store_error)?
            .map(to_record)
            .transpose()
    }

    async fn insert(&self, user: NewUser) -> Result<UserRecord, StoreError> {
        let model = users::ActiveModel {
            id: Set(UserId::new().into_inner()),
            nombre: Set(user.name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            rol: Set(user.role.into()),
            estado: Set(user.status.into()),
            fecha_registro: Set(user.registered_at.into()),
            failed_login_attempts: Set(0),
            recovery_token: Set(None),
        };

        let inserted = model.insert(&self.db).await.map_err(store_error)?;
        to_record(inserted)
    }

    async fn increment_failed_logins(&self, email: &str) -> Result<(), StoreError> {
        let result = users::Entity::update_many()
            .col_expr(
                users::Column::FailedLoginAttempts,
                Expr::col(users::Column::FailedLoginAttempts).add(1),
            )
            .filter(users::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .map_err(store_error)?;

        debug!(rows = result.rows_affected, "Failed login counter incremented");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<UserRecord>, StoreError> {
        users::Entity::find()
            .order_by_asc(users::Column::FechaRegistro)
            .order_by_asc(users::Column::Id)
            .all(&self.db)
            .await
            .map_err(store_error)?
            .into_iter()
            .map(to_record)
            .collect()
    }
}
