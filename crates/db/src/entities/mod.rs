//! `SeaORM` entities.

pub mod prelude;

pub mod receipts;
pub mod sea_orm_active_enums;
pub mod users;
