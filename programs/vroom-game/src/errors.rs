use anchor_lang::prelude::*;

#[error_code]
pub enum VroomError {
    #[msg("Amount must be greater than 0")]
    InvalidAmount,
    #[msg("Pick must be between 1 and 4")]
    InvalidPick,
    #[msg("Insufficient balance")]
    InsufficientBalance,
    #[msg("Game has not started yet")]
    NotStarted,
    #[msg("Game has already started")]
    AlreadyStarted,
    #[msg("Round is closed")]
    RoundClosed,
    #[msg("Round is already closed")]
    AlreadyClosed,
    #[msg("Round is not closed yet")]
    NotClosed,
    #[msg("Round is full")]
    RoundFull,
    #[msg("Randomness already requested for this round")]
    AlreadyRequested,
    #[msg("Randomness has not been fulfilled")]
    NotFulfilled,
    #[msg("Fulfillment does not match the outstanding request")]
    UnknownRequest,
    #[msg("Unauthorized")]
    Unauthorized,
    #[msg("Token transfer failed")]
    TransferFailed,
    #[msg("Ledger account missing for a payout recipient")]
    MissingLedgerAccount,
    #[msg("Fee exceeds maximum")]
    FeeExceedsMax,
    #[msg("Invalid mint account")]
    InvalidMint,
    #[msg("Vault account does not match game vault")]
    InvalidVault,
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
