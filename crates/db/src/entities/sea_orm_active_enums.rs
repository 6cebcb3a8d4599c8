//! `SeaORM` active enums mirroring the PostgreSQL enum types.

use riocaja_shared::{Role, UserStatus as DomainUserStatus};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role")]
pub enum UserRole {
    #[sea_orm(string_value = "admin")]
    Admin,
    #[sea_orm(string_value = "operador")]
    Operador,
    #[sea_orm(string_value = "lector")]
    Lector,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_status")]
pub enum UserStatus {
    #[sea_orm(string_value = "activo")]
    Activo,
    #[sea_orm(string_value = "inactivo")]
    Inactivo,
}

impl From<Role> for UserRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::Operator => Self::Operador,
            Role::Reader => Self::Lector,
        }
    }
}

impl From<UserRole> for Role {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Admin => Self::Admin,
            UserRole::Operador => Self::Operator,
            UserRole::Lector => Self::Reader,
        }
    }
}

impl From<DomainUserStatus> for UserStatus {
    fn from(status: DomainUserStatus) -> Self {
        match status {
            DomainUserStatus::Active => Self::Activo,
            DomainUserStatus::Inactive => Self::Inactivo,
        }
    }
}

impl From<UserStatus> for DomainUserStatus {
    fn from(status: UserStatus) -> Self {
        match status {
            UserStatus::Activo => Self::Active,
            UserStatus::Inactivo => Self::Inactive,
        }
    }
}
