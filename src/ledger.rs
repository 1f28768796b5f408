use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::state::{BALANCES, TOKEN_INFO};
use crate::ContractError;

pub fn balance_of(storage: &dyn Storage, account: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, account)?.unwrap_or_default())
}

pub fn total_supply(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(TOKEN_INFO.load(storage)?.total_supply)
}

/// Credits `amount` to `account` and grows the supply by the same amount.
/// Both sums are checked before either is written.
pub fn credit(
    storage: &mut dyn Storage,
    account: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let mut info = TOKEN_INFO.load(storage)?;
    let balance = balance_of(storage, account)?.checked_add(amount)?;
    info.total_supply = info.total_supply.checked_add(amount)?;

    BALANCES.save(storage, account, &balance)?;
    TOKEN_INFO.save(storage, &info)?;
    Ok(())
}
