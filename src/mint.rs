use cosmwasm_std::{Addr, Coin, DepsMut, MessageInfo, Response, Storage, Uint128};

use crate::events;
use crate::gate::assert_mintable;
use crate::ledger;
use crate::price::current_price;
use crate::state::{SALE_CONFIG, TOKEN_INFO};
use crate::treasury;
use crate::ContractError;

/// `floor(payment * 10^decimals / price)` with a 256-bit intermediate product.
pub fn compute_mint_amount(
    payment: Uint128,
    decimals: u8,
    price: Uint128,
) -> Result<Uint128, ContractError> {
    let scale = 10u128
        .checked_pow(decimals.into())
        .ok_or(ContractError::InvalidDecimals { decimals })?;
    Ok(payment.checked_multiply_ratio(scale, price)?)
}

/// Picks the payment out of the attached funds. Only the sale denom is accepted.
pub fn extract_payment(funds: &[Coin], denom: &str) -> Result<Uint128, ContractError> {
    if let Some(other) = funds.iter().find(|c| c.denom != denom) {
        return Err(ContractError::UnexpectedFunds {
            denom: other.denom.clone(),
        });
    }
    let payment = funds
        .iter()
        .filter(|c| c.denom == denom)
        .try_fold(Uint128::zero(), |acc, c| acc.checked_add(c.amount))?;
    if payment.is_zero() {
        return Err(ContractError::ZeroPayment {
            denom: denom.to_string(),
        });
    }
    Ok(payment)
}

/// Shared by `BuyTokens` and the plain `Deposit` entry.
pub fn buy_tokens(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    assert_mintable(deps.storage)?;
    let config = SALE_CONFIG.load(deps.storage)?;
    let payment = extract_payment(&info.funds, &config.payment_denom)?;

    let minted = mint_for_payment(deps.storage, &info.sender, payment)?;

    Ok(Response::new()
        .add_attribute("action", "buy_tokens")
        .add_attribute("payment", payment.to_string())
        .add_attribute("mint_amount", minted.to_string())
        .add_event(events::tokens_minted(&info.sender, minted)))
}

fn mint_for_payment(
    storage: &mut dyn Storage,
    buyer: &Addr,
    payment: Uint128,
) -> Result<Uint128, ContractError> {
    let decimals = TOKEN_INFO.load(storage)?.decimals;
    let minted = compute_mint_amount(payment, decimals, current_price(storage)?)?;

    // checked up front so a treasury overflow cannot follow a ledger write
    let treasury_after = treasury::balance(storage)?.checked_add(payment)?;
    ledger::credit(storage, buyer, minted)?;
    treasury::set_balance(storage, treasury_after)?;
    Ok(minted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{SaleConfig, TokenInfo, PAUSED, TOKEN_PRICE, TREASURY};
    use cosmwasm_std::testing::{mock_dependencies, mock_info};
    use cosmwasm_std::{coin, coins};

    const ONE: u128 = 1_000_000_000_000_000_000;

    #[test]
    fn mint_amount_is_floored() {
        let price = Uint128::new(ONE / 1000);
        assert_eq!(
            compute_mint_amount(Uint128::new(ONE / 100), 18, price).unwrap(),
            Uint128::new(10 * ONE)
        );
        assert_eq!(
            compute_mint_amount(Uint128::new(7), 0, Uint128::new(2)).unwrap(),
            Uint128::new(3)
        );
        assert_eq!(
            compute_mint_amount(Uint128::new(1), 0, Uint128::new(2)).unwrap(),
            Uint128::zero()
        );
    }

    #[test]
    fn wide_intermediate_does_not_overflow() {
        // payment * 10^18 exceeds u128 but the quotient fits
        let payment = Uint128::new(u128::MAX / 1000);
        let price = Uint128::new(ONE);
        assert_eq!(compute_mint_amount(payment, 18, price).unwrap(), payment);

        let err = compute_mint_amount(Uint128::MAX, 18, Uint128::new(1)).unwrap_err();
        assert!(matches!(err, ContractError::MultiplyRatio(_)));
    }

    #[test]
    fn payment_extraction() {
        assert_eq!(
            extract_payment(&[coin(500, "uluna")], "uluna").unwrap(),
            Uint128::new(500)
        );
        assert_eq!(
            extract_payment(&[], "uluna").unwrap_err(),
            ContractError::ZeroPayment { denom: "uluna".to_string() }
        );
        assert_eq!(
            extract_payment(&[coin(0, "uluna")], "uluna").unwrap_err(),
            ContractError::ZeroPayment { denom: "uluna".to_string() }
        );
        assert_eq!(
            extract_payment(&[coin(500, "uluna"), coin(1, "uusd")], "uluna").unwrap_err(),
            ContractError::UnexpectedFunds { denom: "uusd".to_string() }
        );
        assert_eq!(
            extract_payment(&[coin(3, "uluna"), coin(4, "uluna")], "uluna").unwrap(),
            Uint128::new(7)
        );

        let err = extract_payment(
            &[coin(u128::MAX, "uluna"), coin(u128::MAX, "uluna")],
            "uluna",
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Overflow(_)));
    }

    #[test]
    fn treasury_overflow_leaves_ledger_untouched() {
        let mut deps = mock_dependencies();
        TOKEN_INFO
            .save(
                deps.as_mut().storage,
                &TokenInfo {
                    name: "MyToken".to_string(),
                    symbol: "MTK".to_string(),
                    decimals: 0,
                    total_supply: Uint128::zero(),
                },
            )
            .unwrap();
        TOKEN_PRICE.save(deps.as_mut().storage, &Uint128::new(1)).unwrap();
        PAUSED.save(deps.as_mut().storage, &false).unwrap();
        TREASURY
            .save(deps.as_mut().storage, &(Uint128::MAX - Uint128::new(5)))
            .unwrap();
        SALE_CONFIG
            .save(
                deps.as_mut().storage,
                &SaleConfig {
                    payment_denom: "uluna".to_string(),
                    strict_pause: false,
                },
            )
            .unwrap();

        let err = buy_tokens(deps.as_mut(), mock_info("buyer", &coins(10, "uluna"))).unwrap_err();
        assert!(matches!(err, ContractError::Overflow(_)));

        let buyer = Addr::unchecked("buyer");
        assert_eq!(ledger::balance_of(deps.as_ref().storage, &buyer).unwrap(), Uint128::zero());
        assert_eq!(ledger::total_supply(deps.as_ref().storage).unwrap(), Uint128::zero());
        assert_eq!(
            treasury::balance(deps.as_ref().storage).unwrap(),
            Uint128::MAX - Uint128::new(5)
        );
    }
}
