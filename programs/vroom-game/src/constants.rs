use anchor_lang::prelude::*;

/// PDA Seeds
#[constant]
pub const GAME_SEED: &str = "game";
#[constant]
pub const ROUND_SEED: &str = "round";
#[constant]
pub const ENTROPY_SEED: &str = "entropy";
#[constant]
pub const BALANCE_SEED: &str = "balance";
#[constant]
pub const VAULT_SEED: &str = "vault";

/// Number of selectable picks per round (1..=4).
pub const PICK_COUNT: usize = 4;

pub const HUNDRED_PERCENT_BPS: u16 = 10_000;

/// Commission is capped at 10% of the losing pool.
pub const MAX_COMMISSION_BPS: u16 = 1_000;

/// Distinct bettors a single round can hold. Bounded by the number of
/// ledger accounts `pick_winner` can receive in one transaction.
pub const MAX_BETTORS_PER_ROUND: usize = 24;
