pub mod amount;
pub mod csv;
pub mod facade;
pub mod model;
pub mod store;

pub use amount::Amount;
pub use facade::TransferService;
pub use model::{AccountId, RawTransfer, TransferReceipt, TransferRequest};
pub use store::{Account, AccountStore, TransferError};
