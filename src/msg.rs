use cosmwasm_std::{Addr, Uint128};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Payment units (smallest denomination) per whole token.
    pub initial_price: Uint128,
    /// Defaults to 18.
    pub decimals: Option<u8>,
    /// Native denom accepted as payment, defaults to "uluna".
    pub payment_denom: Option<String>,
    /// Reject redundant pause/unpause calls instead of accepting them.
    pub strict_pause: Option<bool>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    BuyTokens {},
    /// Plain payment with no instruction, handled exactly like `BuyTokens`.
    Deposit {},
    SetPrice { new_price: Uint128 },
    PauseMinting {},
    UnpauseMinting {},
    WithdrawFunds {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns cw20::TokenInfoResponse.
    TokenInfo {},
    /// Returns cw20::BalanceResponse.
    Balance { address: String },
    TokenPrice {},
    Owner {},
    Paused {},
    Treasury {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TokenPriceResponse {
    pub price: Uint128,
    pub denom: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct OwnerResponse {
    pub owner: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct PausedResponse {
    pub paused: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct TreasuryResponse {
    pub balance: Uint128,
    pub denom: String,
}
