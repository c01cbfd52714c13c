use cosmwasm_std::StdError;
use thiserror::Error;

/// Application exit codes on the ledger surface.
pub const EXIT_DRAW_ALREADY_EXISTS: u32 = 1004;
pub const EXIT_DRAW_NOT_FOUND: u32 = 1009;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("draw {draw_id} already exists (exit 1004)")]
    DrawAlreadyExists { draw_id: u32 },

    #[error("draw {draw_id} not found (exit 1009)")]
    DrawNotFound { draw_id: u32 },

    #[error("invalid draw parameters: {reason}")]
    InvalidDrawParams { reason: String },

    #[error("fee percent {fee_percent} out of range (0..=100)")]
    InvalidFeePercent { fee_percent: u16 },

    #[error("draw {draw_id} has no staked participants to select from")]
    EmptyDraw { draw_id: u32 },

    #[error("must send {denom} to fund the call")]
    NoFundsSent { denom: String },

    #[error("unexpected denom {denom} attached")]
    UnexpectedDenom { denom: String },
}

impl ContractError {
    /// Application exit code observable by callers, if the error maps to one.
    /// Everything else surfaces as a transport-level abort.
    pub fn exit_code(&self) -> Option<u32> {
        match self {
            ContractError::DrawAlreadyExists { .. } => Some(EXIT_DRAW_ALREADY_EXISTS),
            ContractError::DrawNotFound { .. } => Some(EXIT_DRAW_NOT_FOUND),
            _ => None,
        }
    }
}
