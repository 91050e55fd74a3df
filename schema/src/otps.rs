use sea_orm::entity::prelude::*;

/// Outstanding one-time passcode for an email address.
///
/// Keyed by email: at most one row per address. Issuing a new code replaces
/// the existing row (`ON CONFLICT (email) DO UPDATE`), so there is never a
/// second live code for the same address. Expired rows are removed lazily on
/// the next verification attempt.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "otps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub email: String,
    pub otp: String,
    pub expires_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
