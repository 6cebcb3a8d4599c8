//! `SeaORM` entity prelude.

pub use super::receipts::Entity as Receipts;
pub use super::users::Entity as Users;
