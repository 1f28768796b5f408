use cosmwasm_std::{Addr, Response, StdResult, Storage};

use crate::access::require_owner;
use crate::events;
use crate::state::{PAUSED, SALE_CONFIG};
use crate::ContractError;

pub fn is_paused(storage: &dyn Storage) -> StdResult<bool> {
    PAUSED.load(storage)
}

/// The single precondition of the mint path.
pub fn assert_mintable(storage: &dyn Storage) -> Result<(), ContractError> {
    if is_paused(storage)? {
        return Err(ContractError::MintingPaused {});
    }
    Ok(())
}

pub fn pause(storage: &mut dyn Storage, caller: &Addr) -> Result<Response, ContractError> {
    set_paused(storage, caller, true)?;
    Ok(Response::new()
        .add_attribute("action", "pause_minting")
        .add_event(events::minting_paused()))
}

pub fn unpause(storage: &mut dyn Storage, caller: &Addr) -> Result<Response, ContractError> {
    set_paused(storage, caller, false)?;
    Ok(Response::new()
        .add_attribute("action", "unpause_minting")
        .add_event(events::minting_unpaused()))
}

fn set_paused(storage: &mut dyn Storage, caller: &Addr, paused: bool) -> Result<(), ContractError> {
    require_owner(storage, caller)?;

    if SALE_CONFIG.load(storage)?.strict_pause && is_paused(storage)? == paused {
        return Err(if paused {
            ContractError::AlreadyPaused {}
        } else {
            ContractError::NotPaused {}
        });
    }

    PAUSED.save(storage, &paused)?;
    Ok(())
}
