//! Audit columns shared by every roster record.

/// Who created/updated a record and when (epoch milliseconds).
///
/// The core never computes these; the caller supplies them or the store
/// fills the timestamps on save.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Audit {
    pub created_at: Option<i64>,
    pub created_by: Option<String>,
    pub updated_at: Option<i64>,
    pub updated_by: Option<String>,
}

impl Audit {
    /// Audit stamp with only `created_by` set.
    pub fn created_by(actor: impl Into<String>) -> Self {
        Self {
            created_by: Some(actor.into()),
            ..Self::default()
        }
    }
}
