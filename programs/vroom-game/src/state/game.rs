use anchor_lang::prelude::*;
use crate::constants::{HUNDRED_PERCENT_BPS, MAX_COMMISSION_BPS};
use crate::errors::VroomError;
use crate::utils::payout::FeeSchedule;

/// Singleton game state. Seeds: `["game"]`
#[account]
#[derive(InitSpace)]
pub struct Game {
    pub operator: Pubkey,
    pub treasury: Pubkey,
    /// Key allowed to fulfill randomness requests.
    pub oracle_authority: Pubkey,
    pub token_mint: Pubkey,
    pub vault: Pubkey,
    /// Share of the losing pool kept as commission.
    pub commission_bps: u16,
    /// Share of the commission paid out to godfathers.
    pub referral_bps: u16,
    /// 0 until `start`, then the id of the round taking bets.
    pub current_round: u64,
    pub request_counter: u64,
    pub pending_request: Option<u64>,
    /// Tokens held by the vault on behalf of the ledger.
    pub total_custodied: u64,
    pub bump: u8,
    pub vault_bump: u8,
}

impl Game {
    pub const LEN: usize = 8 + Game::INIT_SPACE;

    pub fn validate_fees(commission_bps: u16, referral_bps: u16) -> Result<()> {
        require!(commission_bps <= MAX_COMMISSION_BPS, VroomError::FeeExceedsMax);
        require!(referral_bps <= HUNDRED_PERCENT_BPS, VroomError::FeeExceedsMax);
        Ok(())
    }

    pub fn fee_schedule(&self) -> FeeSchedule {
        FeeSchedule {
            commission_bps: self.commission_bps,
            referral_bps: self.referral_bps,
        }
    }

    pub fn is_started(&self) -> bool {
        self.current_round > 0
    }

    pub fn next_round_id(&self) -> u64 {
        self.current_round + 1
    }

    pub fn start(&mut self) -> Result<u64> {
        require!(!self.is_started(), VroomError::AlreadyStarted);
        self.current_round = 1;
        Ok(self.current_round)
    }

    /// Allocates a fresh correlation id and marks it outstanding.
    pub fn issue_request(&mut self) -> Result<u64> {
        require!(self.is_started(), VroomError::NotStarted);
        self.request_counter = self
            .request_counter
            .checked_add(1)
            .ok_or(VroomError::MathOverflow)?;
        self.pending_request = Some(self.request_counter);
        Ok(self.request_counter)
    }

    /// Moves on to the next round once the current one is settled.
    pub fn advance_round(&mut self) -> Result<u64> {
        require!(self.is_started(), VroomError::NotStarted);
        self.pending_request = None;
        self.current_round = self
            .current_round
            .checked_add(1)
            .ok_or(VroomError::MathOverflow)?;
        Ok(self.current_round)
    }

    pub fn record_inflow(&mut self, amount: u64) -> Result<()> {
        self.total_custodied = self
            .total_custodied
            .checked_add(amount)
            .ok_or(VroomError::MathOverflow)?;
        Ok(())
    }

    pub fn record_outflow(&mut self, amount: u64) -> Result<()> {
        self.total_custodied = self
            .total_custodied
            .checked_sub(amount)
            .ok_or(VroomError::MathOverflow)?;
        Ok(())
    }
}
