use anchor_lang::prelude::*;
use crate::errors::VroomError;

/// Internal spendable balance of one address.
///
/// Seeds: `["balance", owner]`
///
/// Treasury and godfather addresses hold ordinary entries; they are only
/// ever credited by settlement and withdraw like any player.
#[account]
#[derive(InitSpace)]
pub struct PlayerBalance {
    pub owner: Pubkey,
    pub balance: u64,
    /// Referral address, set once by the owner's own deposit.
    pub godfather: Option<Pubkey>,
    pub total_deposited: u64,
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl PlayerBalance {
    pub const LEN: usize = 8 + PlayerBalance::INIT_SPACE;

    /// Fresh entries come out of `init_if_needed` zeroed.
    pub fn is_initialized(&self) -> bool {
        self.owner != Pubkey::default()
    }

    pub fn open(&mut self, owner: Pubkey, bump: u8) {
        self.owner = owner;
        self.balance = 0;
        self.godfather = None;
        self.total_deposited = 0;
        self.total_withdrawn = 0;
        self.bump = bump;
    }

    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self.balance.checked_add(amount).ok_or(VroomError::MathOverflow)?;
        Ok(())
    }

    pub fn debit(&mut self, amount: u64) -> Result<()> {
        require!(amount <= self.balance, VroomError::InsufficientBalance);
        self.balance -= amount;
        Ok(())
    }

    /// Credit after the tokens have landed in the vault.
    pub fn record_deposit(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VroomError::InvalidAmount);
        self.credit(amount)?;
        self.total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(VroomError::MathOverflow)?;
        Ok(())
    }

    /// Debit ahead of the outgoing token transfer.
    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VroomError::InvalidAmount);
        self.debit(amount)?;
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(VroomError::MathOverflow)?;
        Ok(())
    }

    /// Returns true when the link was recorded by this call. An existing
    /// link and self-referral are ignored.
    pub fn link_godfather(&mut self, godfather: Pubkey) -> bool {
        if self.godfather.is_some() || godfather == self.owner || godfather == Pubkey::default() {
            return false;
        }
        self.godfather = Some(godfather);
        true
    }
}
