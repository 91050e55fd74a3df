use anyhow::Context as _;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use otp_auth_schema::otps;

use crate::domain::repository::OtpRepository;
use crate::domain::types::OtpRecord;
use crate::error::AuthServiceError;

#[derive(Clone)]
pub struct DbOtpRepository {
    pub db: DatabaseConnection,
}

impl OtpRepository for DbOtpRepository {
    async fn upsert(&self, record: &OtpRecord) -> Result<(), AuthServiceError> {
        // Single INSERT .. ON CONFLICT (email) DO UPDATE statement, so two
        // racing requests for the same address cannot interleave a
        // read-then-write and leave a torn record behind.
        otps::Entity::insert(otps::ActiveModel {
            email: Set(record.email.clone()),
            otp: Set(record.code.clone()),
            expires_at: Set(record.expires_at),
        })
        .on_conflict(
            OnConflict::column(otps::Column::Email)
                .update_columns([otps::Column::Otp, otps::Column::ExpiresAt])
                .to_owned(),
        )
        // No use for the returned key, and skipping it keeps the statement
        // portable across backends with a string primary key.
        .exec_without_returning(&self.db)
        .await
        .context("upsert otp")?;
        Ok(())
    }

    async fn find(&self, email: &str) -> Result<Option<OtpRecord>, AuthServiceError> {
        let model = otps::Entity::find_by_id(email.to_owned())
            .one(&self.db)
            .await
            .context("find otp")?;
        Ok(model.map(otp_from_model))
    }

    async fn delete(&self, email: &str) -> Result<(), AuthServiceError> {
        // delete_many so a missing row is rows_affected = 0, not an error.
        otps::Entity::delete_many()
            .filter(otps::Column::Email.eq(email))
            .exec(&self.db)
            .await
            .context("delete otp")?;
        Ok(())
    }
}

fn otp_from_model(model: otps::Model) -> OtpRecord {
    OtpRecord {
        email: model.email,
        code: model.otp,
        expires_at: model.expires_at,
    }
}
