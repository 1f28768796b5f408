use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response,
    StdResult, Uint128,
};
use cw20::{BalanceResponse, TokenInfoResponse};

use crate::access::{reject_funds, require_owner_call};
use crate::gate::{self, is_paused};
use crate::ledger::balance_of;
use crate::mint::buy_tokens;
use crate::msg::{
    ExecuteMsg, InstantiateMsg, OwnerResponse, PausedResponse, QueryMsg, TokenPriceResponse,
    TreasuryResponse,
};
use crate::price::{current_price, set_price};
use crate::state::{
    is_initialized, SaleConfig, TokenInfo, DEFAULT_DECIMALS, DEFAULT_PAYMENT_DENOM, OWNER, PAUSED,
    SALE_CONFIG, TOKEN_INFO, TOKEN_PRICE, TREASURY,
};
use crate::treasury::{self, settle_withdrawal, withdraw_funds, WITHDRAW_REPLY_ID};
use crate::ContractError;

/// 10^decimals has to fit in a Uint128.
const MAX_DECIMALS: u8 = 38;

/// One-time initialization; the sender becomes the owner.
#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    if is_initialized(deps.storage)? {
        return Err(ContractError::AlreadyInitialized {});
    }
    reject_funds(&info)?;

    let decimals = msg.decimals.unwrap_or(DEFAULT_DECIMALS);
    if decimals > MAX_DECIMALS {
        return Err(ContractError::InvalidDecimals { decimals });
    }
    if msg.initial_price.is_zero() {
        return Err(ContractError::InvalidPrice {
            current: Uint128::zero(),
            proposed: msg.initial_price,
        });
    }
    let payment_denom = msg
        .payment_denom
        .unwrap_or_else(|| DEFAULT_PAYMENT_DENOM.to_string());
    for (field, value) in [
        ("name", &msg.name),
        ("symbol", &msg.symbol),
        ("payment_denom", &payment_denom),
    ] {
        if value.trim().is_empty() {
            return Err(ContractError::InvalidConfig {
                reason: format!("{} must not be empty", field),
            });
        }
    }
    let config = SaleConfig {
        payment_denom,
        strict_pause: msg.strict_pause.unwrap_or(false),
    };

    OWNER.save(deps.storage, &info.sender)?;
    TOKEN_INFO.save(
        deps.storage,
        &TokenInfo {
            name: msg.name.clone(),
            symbol: msg.symbol.clone(),
            decimals,
            total_supply: Uint128::zero(),
        },
    )?;
    TOKEN_PRICE.save(deps.storage, &msg.initial_price)?;
    PAUSED.save(deps.storage, &false)?;
    TREASURY.save(deps.storage, &Uint128::zero())?;
    SALE_CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("name", msg.name)
        .add_attribute("symbol", msg.symbol)
        .add_attribute("decimals", decimals.to_string())
        .add_attribute("token_price", msg.initial_price.to_string())
        .add_attribute("payment_denom", config.payment_denom)
        .add_attribute("strict_pause", config.strict_pause.to_string()))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::BuyTokens {} | ExecuteMsg::Deposit {} => buy_tokens(deps, info),
        ExecuteMsg::SetPrice { new_price } => {
            require_owner_call(deps.storage, &info)?;
            set_price(deps.storage, &info.sender, new_price)
        }
        ExecuteMsg::PauseMinting {} => {
            require_owner_call(deps.storage, &info)?;
            gate::pause(deps.storage, &info.sender)
        }
        ExecuteMsg::UnpauseMinting {} => {
            require_owner_call(deps.storage, &info)?;
            gate::unpause(deps.storage, &info.sender)
        }
        ExecuteMsg::WithdrawFunds {} => {
            require_owner_call(deps.storage, &info)?;
            withdraw_funds(deps, info)
        }
    }
}

#[entry_point]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        WITHDRAW_REPLY_ID => settle_withdrawal(deps, msg.result),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenInfo {} => {
            let info = TOKEN_INFO.load(deps.storage)?;
            to_json_binary(&TokenInfoResponse {
                name: info.name,
                symbol: info.symbol,
                decimals: info.decimals,
                total_supply: info.total_supply,
            })
        }
        QueryMsg::Balance { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&BalanceResponse {
                balance: balance_of(deps.storage, &address)?,
            })
        }
        QueryMsg::TokenPrice {} => to_json_binary(&TokenPriceResponse {
            price: current_price(deps.storage)?,
            denom: SALE_CONFIG.load(deps.storage)?.payment_denom,
        }),
        QueryMsg::Owner {} => to_json_binary(&OwnerResponse {
            owner: OWNER.load(deps.storage)?,
        }),
        QueryMsg::Paused {} => to_json_binary(&PausedResponse {
            paused: is_paused(deps.storage)?,
        }),
        QueryMsg::Treasury {} => to_json_binary(&TreasuryResponse {
            balance: treasury::balance(deps.storage)?,
            denom: SALE_CONFIG.load(deps.storage)?.payment_denom,
        }),
    }
}
