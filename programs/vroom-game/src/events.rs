use anchor_lang::prelude::*;

#[event]
pub struct GameInitialized {
    pub operator: Pubkey,
    pub treasury: Pubkey,
    pub oracle_authority: Pubkey,
    pub token_mint: Pubkey,
    pub commission_bps: u16,
    pub referral_bps: u16,
}

#[event]
pub struct GameStarted {
    pub round_id: u64,
}

#[event]
pub struct BalanceOpened {
    pub owner: Pubkey,
}

#[event]
pub struct Deposited {
    pub owner: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct ReferralLinked {
    pub owner: Pubkey,
    pub godfather: Pubkey,
}

#[event]
pub struct Withdrawn {
    pub owner: Pubkey,
    pub amount: u64,
    pub new_balance: u64,
}

#[event]
pub struct BetPlaced {
    pub round_id: u64,
    pub bettor: Pubkey,
    pub pick: u8,
    pub amount: u64,
    pub new_pot: u64,
}

#[event]
pub struct RoundClosed {
    pub round_id: u64,
    pub request_id: u64,
    pub total_pot: u64,
}

#[event]
pub struct EntropyFulfilled {
    pub round_id: u64,
    pub request_id: u64,
}

#[event]
pub struct PayoutCredited {
    pub round_id: u64,
    pub account: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RoundSettled {
    pub round_id: u64,
    pub winning_pick: u8,
    pub winning_pool: u64,
    pub losing_pool: u64,
    pub commission: u64,
    pub referral_paid: u64,
    pub dust: u64,
    pub treasury_credit: u64,
}

#[event]
pub struct RoundOpened {
    pub round_id: u64,
}

#[event]
pub struct FeesUpdated {
    pub commission_bps: u16,
    pub referral_bps: u16,
}

#[event]
pub struct TreasuryUpdated {
    pub old_treasury: Pubkey,
    pub new_treasury: Pubkey,
}

#[event]
pub struct OracleUpdated {
    pub old_authority: Pubkey,
    pub new_authority: Pubkey,
}
