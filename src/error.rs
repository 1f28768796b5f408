use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    MultiplyRatio(#[from] CheckedMultiplyRatioError),

    #[error("Unauthorized: only the owner can perform this operation")]
    Unauthorized {},

    #[error("New price must be higher than current price (current {current}, proposed {proposed})")]
    InvalidPrice { current: Uint128, proposed: Uint128 },

    #[error("Minting is currently paused")]
    MintingPaused {},

    #[error("Payment must be a non-zero amount of {denom}")]
    ZeroPayment { denom: String },

    #[error("Transfer of {amount} to owner failed: {reason}")]
    TransferFailure { amount: Uint128, reason: String },

    #[error("Contract is already initialized")]
    AlreadyInitialized {},

    #[error("Minting is already paused")]
    AlreadyPaused {},

    #[error("Minting is not paused")]
    NotPaused {},

    #[error("Unexpected funds sent in {denom}")]
    UnexpectedFunds { denom: String },

    #[error("Decimals must be at most 38, got {decimals}")]
    InvalidDecimals { decimals: u8 },

    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("Unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
