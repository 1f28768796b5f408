use cosmwasm_std::{Addr, StdResult, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const DEFAULT_DECIMALS: u8 = 18;
pub const DEFAULT_PAYMENT_DENOM: &str = "uluna";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct SaleConfig {
    pub payment_denom: String,
    /// Reject pausing while paused and unpausing while unpaused.
    pub strict_pause: bool,
}

// Keys below are the persisted layout; renaming any of them orphans
// the data of already deployed instances.
pub const OWNER: Item<Addr> = Item::new("owner");
pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
pub const TOKEN_PRICE: Item<Uint128> = Item::new("token_price");
pub const PAUSED: Item<bool> = Item::new("paused");
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balance");
pub const TREASURY: Item<Uint128> = Item::new("treasury");
pub const SALE_CONFIG: Item<SaleConfig> = Item::new("sale_config");
pub const PENDING_WITHDRAWAL: Item<Uint128> = Item::new("pending_withdrawal");

pub fn is_initialized(storage: &dyn Storage) -> StdResult<bool> {
    Ok(OWNER.may_load(storage)?.is_some())
}
