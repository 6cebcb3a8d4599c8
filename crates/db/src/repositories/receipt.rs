//! Receipt repository for database operations.

use async_trait::async_trait;
use chrono::Utc;
use riocaja_core::receipts::{NewReceipt, Receipt, ReceiptData, ReceiptFilter, ReceiptStore};
use riocaja_core::store::StoreError;
use riocaja_shared::types::{ReceiptId, UserId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, Select, Set,
};

use super::store_error;
use crate::entities::receipts;

/// Receipt store over the `receipts` table.
///
/// Uniqueness of transaction numbers is enforced by two partial unique
/// indexes: one per owner, one among ownerless rows.
#[derive(Debug, Clone)]
pub struct DbReceiptStore {
    db: DatabaseConnection,
}

impl DbReceiptStore {
    /// Creates a new receipt store.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn select(filter: &ReceiptFilter) -> Select<receipts::Entity> {
        let condition = Condition::all()
            .add_option(
                filter
                    .owner
                    .map(|owner| receipts::Column::OwnerId.eq(owner.into_inner())),
            )
            .add_option(
                filter
                    .date
                    .as_deref()
                    .map(|date| receipts::Column::Fecha.eq(date)),
            )
            .add_option(
                filter
                    .transaction_number
                    .as_deref()
                    .map(|number| receipts::Column::NroTransaccion.eq(number)),
            );

        // v7 ids break created_at ties in insertion order.
        receipts::Entity::find()
            .filter(condition)
            .order_by_desc(receipts::Column::CreatedAt)
            .order_by_desc(receipts::Column::Id)
    }
}

fn to_receipt(model: receipts::Model) -> Receipt {
    Receipt {
        id: ReceiptId::from_uuid(model.id),
        data: ReceiptData {
            bank: model.banco,
            date: model.fecha,
            time: model.hora,
            transaction_type: model.tipo,
            transaction_number: model.nro_transaccion,
            control_number: model.nro_control,
            branch: model.local,
            alternate_date: model.fecha_alternativa,
            agent: model.corresponsal,
            account_type: model.tipo_cuenta,
            total_value: model.valor_total,
            full_text: model.full_text,
        },
        owner: model.owner_id.map(UserId::from_uuid),
        created_at: model.created_at.with_timezone(&Utc),
    }
}

#[async_trait]
impl ReceiptStore for DbReceiptStore {
    async fn find(&self, filter: &ReceiptFilter) -> Result<Vec<Receipt>, StoreError> {
        let models = Self::select(filter)
            .all(&self.db)
            .await
            .map_err(store_error)?;
        Ok(models.into_iter().map(to_receipt).collect())
    }

    async fn find_one(&self, filter: &ReceiptFilter) -> Result<Option<Receipt>, StoreError> {
        let model = Self::select(filter)
            .one(&self.db)
            .await
            .map_err(store_error)?;
        Ok(model.map(to_receipt))
    }

    async fn insert(&self, receipt: NewReceipt) -> Result<Receipt, StoreError> {
        let NewReceipt {
            data,
            owner,
            created_at,
        } = receipt;

        let model = receipts::ActiveModel {
            id: Set(ReceiptId::new().into_inner()),
            owner_id: Set(owner.map(UserId::into_inner)),
            banco: Set(data.bank),
            fecha: Set(data.date),
            hora: Set(data.time),
            tipo: Set(data.transaction_type),
            nro_transaccion: Set(data.transaction_number),
            nro_control: Set(data.control_number),
            local: Set(data.branch),
            fecha_alternativa: Set(data.alternate_date),
            corresponsal: Set(data.agent),
            tipo_cuenta: Set(data.account_type),
            valor_total: Set(data.total_value),
            full_text: Set(data.full_text),
            created_at: Set(created_at.into()),
        };

        let inserted = model.insert(&self.db).await.map_err(store_error)?;
        Ok(to_receipt(inserted))
    }

    async fn delete_by_id(&self, id: ReceiptId) -> Result<bool, StoreError> {
        let result = receipts::Entity::delete_by_id(id.into_inner())
            .exec(&self.db)
            .await
            .map_err(store_error)?;
        Ok(result.rows_affected > 0)
    }
}
