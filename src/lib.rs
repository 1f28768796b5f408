pub mod access;
pub mod contract;
mod error;
pub mod events;
pub mod gate;
pub mod ledger;
pub mod mint;
pub mod msg;
pub mod price;
pub mod state;
pub mod treasury;

pub use crate::error::ContractError;
