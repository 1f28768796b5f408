//! Chain events emitted after the state change they describe has been written.

use cosmwasm_std::{Addr, Event, Uint128};

pub fn tokens_minted(account: &Addr, amount: Uint128) -> Event {
    Event::new("tokens_minted")
        .add_attribute("account", account.to_string())
        .add_attribute("amount", amount.to_string())
}

pub fn price_updated(new_price: Uint128) -> Event {
    Event::new("price_updated").add_attribute("new_price", new_price.to_string())
}

pub fn minting_paused() -> Event {
    Event::new("minting_paused")
}

pub fn minting_unpaused() -> Event {
    Event::new("minting_unpaused")
}

pub fn funds_withdrawn(owner: &Addr, amount: Uint128) -> Event {
    Event::new("funds_withdrawn")
        .add_attribute("owner", owner.to_string())
        .add_attribute("amount", amount.to_string())
}
