use cosmwasm_std::{Addr, MessageInfo, Storage};

use crate::state::OWNER;
use crate::ContractError;

/// Fails with `Unauthorized` unless `caller` is the stored owner.
pub fn require_owner(storage: &dyn Storage, caller: &Addr) -> Result<(), ContractError> {
    let owner = OWNER.load(storage)?;
    if *caller != owner {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

/// Gate for owner-only messages: ownership is checked first, then that the
/// call carries no payment.
pub fn require_owner_call(storage: &dyn Storage, info: &MessageInfo) -> Result<(), ContractError> {
    require_owner(storage, &info.sender)?;
    reject_funds(info)
}

/// Owner-only messages never carry a payment.
pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    match info.funds.first() {
        Some(coin) => Err(ContractError::UnexpectedFunds {
            denom: coin.denom.clone(),
        }),
        None => Ok(()),
    }
}
