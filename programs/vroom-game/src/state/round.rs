use anchor_lang::prelude::*;
use crate::constants::{MAX_BETTORS_PER_ROUND, PICK_COUNT};
use crate::errors::VroomError;
use crate::state::EntropyRequest;
use crate::utils::payout::{compute_payouts, FeeSchedule, PayoutPlan};
use crate::utils::pick::pick_from_randomness;

/// One of the four lanes a bettor can back.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum Pick {
    One,
    Two,
    Three,
    Four,
}

impl Pick {
    pub const ALL: [Pick; PICK_COUNT] = [Pick::One, Pick::Two, Pick::Three, Pick::Four];

    /// Zero based slot into per-pick arrays.
    pub fn index(self) -> usize {
        match self {
            Pick::One => 0,
            Pick::Two => 1,
            Pick::Three => 2,
            Pick::Four => 3,
        }
    }

    /// The 1..=4 number players see.
    pub fn number(self) -> u8 {
        self.index() as u8 + 1
    }
}

impl TryFrom<u32> for Pick {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u32) -> Result<Self> {
        match value {
            1 => Ok(Pick::One),
            2 => Ok(Pick::Two),
            3 => Ok(Pick::Three),
            4 => Ok(Pick::Four),
            _ => err!(VroomError::InvalidPick),
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub enum RoundStatus {
    /// Genesis placeholder (round 0) before `start`.
    NotStarted,
    Open,
    Closed,
    Settled,
}

/// A bettor's stakes in one round, accumulated per pick.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, PartialEq, Eq, InitSpace, Debug)]
pub struct StakeEntry {
    pub bettor: Pubkey,
    /// Snapshot of the bettor's referral link at first bet.
    pub godfather: Option<Pubkey>,
    pub amounts: [u64; PICK_COUNT],
}

impl StakeEntry {
    pub fn total(&self) -> Result<u64> {
        checked_sum(&self.amounts)
    }
}

fn checked_sum(amounts: &[u64; PICK_COUNT]) -> Result<u64> {
    amounts
        .iter()
        .try_fold(0u64, |acc, a| acc.checked_add(*a))
        .ok_or(error!(VroomError::MathOverflow))
}

/// Seeds: `["round", round_id (u64 LE)]`
#[account]
#[derive(InitSpace)]
pub struct Round {
    pub round_id: u64,
    pub status: RoundStatus,
    pub pots: [u64; PICK_COUNT],
    #[max_len(MAX_BETTORS_PER_ROUND)]
    pub stakes: Vec<StakeEntry>,
    pub winning_pick: Option<Pick>,
    pub opened_at: i64,
    pub closed_at: Option<i64>,
    pub settled_at: Option<i64>,
    pub bump: u8,
}

impl Round {
    pub const LEN: usize = 8 + Round::INIT_SPACE;

    pub fn open(&mut self, round_id: u64, now: i64, bump: u8) {
        self.round_id = round_id;
        self.status = if round_id == 0 {
            RoundStatus::NotStarted
        } else {
            RoundStatus::Open
        };
        self.pots = [0; PICK_COUNT];
        self.stakes = Vec::new();
        self.winning_pick = None;
        self.opened_at = now;
        self.closed_at = None;
        self.settled_at = None;
        self.bump = bump;
    }

    pub fn is_picking_closed(&self) -> bool {
        self.status == RoundStatus::Closed
    }

    /// Winning pick number, 0 until settled.
    pub fn winner(&self) -> u8 {
        self.winning_pick.map(Pick::number).unwrap_or(0)
    }

    pub fn total_pot(&self) -> Result<u64> {
        checked_sum(&self.pots)
    }

    pub fn stake_of(&self, bettor: &Pubkey) -> Option<&StakeEntry> {
        self.stakes.iter().find(|s| s.bettor == *bettor)
    }

    /// All guards a bet must pass before the bettor is debited.
    pub fn validate_bet(&self, bettor: &Pubkey, pick: u32, amount: u64) -> Result<Pick> {
        require!(self.status != RoundStatus::NotStarted, VroomError::NotStarted);
        let pick = Pick::try_from(pick)?;
        require!(self.status == RoundStatus::Open, VroomError::RoundClosed);
        require!(amount > 0, VroomError::InvalidAmount);
        require!(
            self.stake_of(bettor).is_some() || self.stakes.len() < MAX_BETTORS_PER_ROUND,
            VroomError::RoundFull
        );
        Ok(pick)
    }

    pub fn record_stake(
        &mut self,
        bettor: Pubkey,
        godfather: Option<Pubkey>,
        pick: Pick,
        amount: u64,
    ) -> Result<u64> {
        let slot = pick.index();
        let new_pot = self.pots[slot]
            .checked_add(amount)
            .ok_or(VroomError::MathOverflow)?;

        match self.stakes.iter_mut().find(|s| s.bettor == bettor) {
            Some(entry) => {
                entry.amounts[slot] = entry.amounts[slot]
                    .checked_add(amount)
                    .ok_or(VroomError::MathOverflow)?;
            }
            None => {
                require!(self.stakes.len() < MAX_BETTORS_PER_ROUND, VroomError::RoundFull);
                let mut amounts = [0; PICK_COUNT];
                amounts[slot] = amount;
                self.stakes.push(StakeEntry { bettor, godfather, amounts });
            }
        }

        self.pots[slot] = new_pot;
        Ok(new_pot)
    }

    pub fn close_betting(&mut self, now: i64) -> Result<()> {
        require!(self.status != RoundStatus::NotStarted, VroomError::NotStarted);
        require!(self.status == RoundStatus::Open, VroomError::AlreadyClosed);
        self.status = RoundStatus::Closed;
        self.closed_at = Some(now);
        Ok(())
    }

    pub fn ensure_closed(&self) -> Result<()> {
        require!(self.status == RoundStatus::Closed, VroomError::NotClosed);
        Ok(())
    }

    pub fn settle(&mut self, winning_pick: Pick, now: i64) -> Result<()> {
        self.ensure_closed()?;
        self.winning_pick = Some(winning_pick);
        self.status = RoundStatus::Settled;
        self.settled_at = Some(now);
        Ok(())
    }

    /// Draws the winner from fulfilled entropy, splits the pot and marks the
    /// round settled. Ledger credits are left to the caller.
    pub fn resolve(
        &mut self,
        entropy: &EntropyRequest,
        fees: FeeSchedule,
        treasury: Pubkey,
        now: i64,
    ) -> Result<PayoutPlan> {
        self.ensure_closed()?;
        let winning_pick = pick_from_randomness(&entropy.consume()?);
        let plan = compute_payouts(&self.pots, &self.stakes, winning_pick, fees, treasury)?;
        self.settle(winning_pick, now)?;
        Ok(plan)
    }
}
