use cosmwasm_std::{
    coins, BankMsg, DepsMut, MessageInfo, Response, StdResult, Storage, SubMsg, SubMsgResult,
    Uint128,
};

use crate::access::require_owner;
use crate::events;
use crate::state::{OWNER, PENDING_WITHDRAWAL, SALE_CONFIG, TREASURY};
use crate::ContractError;

pub const WITHDRAW_REPLY_ID: u64 = 1;

/// Payments received and not yet withdrawn.
pub fn balance(storage: &dyn Storage) -> StdResult<Uint128> {
    TREASURY.load(storage)
}

pub fn set_balance(storage: &mut dyn Storage, amount: Uint128) -> Result<(), ContractError> {
    TREASURY.save(storage, &amount)?;
    Ok(())
}

/// Sends the whole treasury to the owner. The counter is zeroed before the
/// bank message is dispatched; the reply settles or restores it.
pub fn withdraw_funds(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    require_owner(deps.storage, &info.sender)?;
    let owner = info.sender;
    let amount = balance(deps.storage)?;

    if amount.is_zero() {
        // the bank module refuses empty sends
        return Ok(Response::new()
            .add_attribute("action", "withdraw_funds")
            .add_attribute("amount", amount.to_string())
            .add_event(events::funds_withdrawn(&owner, amount)));
    }

    let denom = SALE_CONFIG.load(deps.storage)?.payment_denom;
    set_balance(deps.storage, Uint128::zero())?;
    PENDING_WITHDRAWAL.save(deps.storage, &amount)?;
    deps.api
        .debug(&format!("treasury: sending {}{} to {}", amount, denom, owner));

    let send = BankMsg::Send {
        to_address: owner.to_string(),
        amount: coins(amount.u128(), denom),
    };
    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(send, WITHDRAW_REPLY_ID))
        .add_attribute("action", "withdraw_funds")
        .add_attribute("amount", amount.to_string()))
}

/// Settles the pending withdrawal once the bank send has been executed.
pub fn settle_withdrawal(deps: DepsMut, result: SubMsgResult) -> Result<Response, ContractError> {
    let amount = PENDING_WITHDRAWAL.load(deps.storage)?;
    PENDING_WITHDRAWAL.remove(deps.storage);

    match result {
        SubMsgResult::Ok(_) => {
            let owner = OWNER.load(deps.storage)?;
            Ok(Response::new()
                .add_attribute("action", "funds_withdrawn")
                .add_event(events::funds_withdrawn(&owner, amount)))
        }
        SubMsgResult::Err(reason) => {
            let restored = balance(deps.storage)?.checked_add(amount)?;
            set_balance(deps.storage, restored)?;
            deps.api
                .debug(&format!("treasury: send of {} failed, restored: {}", amount, reason));
            Err(ContractError::TransferFailure { amount, reason })
        }
    }
}
