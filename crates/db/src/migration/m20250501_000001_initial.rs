//! Initial database migration.
//!
//! Creates the user and receipt tables, their enum types and the uniqueness
//! rules receipts rely on.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(ENUMS_SQL).await?;
        db.execute_unprepared(USERS_SQL).await?;
        db.execute_unprepared(RECEIPTS_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_SQL).await?;
        Ok(())
    }
}

const ENUMS_SQL: &str = r"
CREATE TYPE user_role AS ENUM ('admin', 'operador', 'lector');

CREATE TYPE user_status AS ENUM ('activo', 'inactivo');
";

const USERS_SQL: &str = r"
CREATE TABLE users (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    nombre VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL UNIQUE,
    password_hash VARCHAR(255) NOT NULL,
    rol user_role NOT NULL DEFAULT 'lector',
    estado user_status NOT NULL DEFAULT 'activo',
    fecha_registro TIMESTAMPTZ NOT NULL DEFAULT now(),
    failed_login_attempts INTEGER NOT NULL DEFAULT 0,
    recovery_token VARCHAR(255),

    CONSTRAINT chk_failed_login_attempts CHECK (failed_login_attempts >= 0)
);
";

const RECEIPTS_SQL: &str = r"
CREATE TABLE receipts (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    owner_id UUID REFERENCES users(id) ON DELETE SET NULL,
    banco VARCHAR(255) NOT NULL,
    fecha VARCHAR(10) NOT NULL,
    hora VARCHAR(32) NOT NULL,
    tipo VARCHAR(100),
    nro_transaccion VARCHAR(100) NOT NULL,
    nro_control VARCHAR(100) NOT NULL,
    local VARCHAR(255) NOT NULL,
    fecha_alternativa VARCHAR(32) NOT NULL DEFAULT '',
    corresponsal VARCHAR(255) NOT NULL,
    tipo_cuenta VARCHAR(100) NOT NULL DEFAULT '',
    valor_total NUMERIC NOT NULL,
    full_text TEXT NOT NULL DEFAULT '',
    created_at TIMESTAMPTZ NOT NULL DEFAULT now()
);

-- One transaction number per owner
CREATE UNIQUE INDEX uq_receipts_owner_transaction
    ON receipts(owner_id, nro_transaccion)
    WHERE owner_id IS NOT NULL;

-- One transaction number among ownerless receipts
CREATE UNIQUE INDEX uq_receipts_unowned_transaction
    ON receipts(nro_transaccion)
    WHERE owner_id IS NULL;

-- Listing and closing reports by day
CREATE INDEX idx_receipts_owner_fecha ON receipts(owner_id, fecha, created_at DESC);

-- Unrestricted lookups by transaction number
CREATE INDEX idx_receipts_transaction ON receipts(nro_transaccion, created_at DESC);
";

const DROP_SQL: &str = r"
DROP TABLE IF EXISTS receipts CASCADE;
DROP TABLE IF EXISTS users CASCADE;
DROP TYPE IF EXISTS user_status;
DROP TYPE IF EXISTS user_role;
";
