use crate::Amount;
use crate::model::AccountId;

/// One party able to hold funds. The name is a display label only; identity
/// is the id.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    pub balance: Amount,
}

impl Account {
    pub fn new(id: AccountId, name: impl Into<String>, balance: Amount) -> Self {
        Self {
            id,
            name: name.into(),
            balance,
        }
    }
}
