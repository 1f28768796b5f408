use cosmwasm_std::{Addr, Response, StdResult, Storage, Uint128};

use crate::access::require_owner;
use crate::events;
use crate::state::TOKEN_PRICE;
use crate::ContractError;

pub fn current_price(storage: &dyn Storage) -> StdResult<Uint128> {
    TOKEN_PRICE.load(storage)
}

/// Replaces the price; only strictly higher prices are accepted.
pub fn set_price(
    storage: &mut dyn Storage,
    caller: &Addr,
    new_price: Uint128,
) -> Result<Response, ContractError> {
    require_owner(storage, caller)?;

    let current = current_price(storage)?;
    if new_price <= current {
        return Err(ContractError::InvalidPrice {
            current,
            proposed: new_price,
        });
    }

    TOKEN_PRICE.save(storage, &new_price)?;
    Ok(Response::new()
        .add_attribute("action", "set_price")
        .add_event(events::price_updated(new_price)))
}
