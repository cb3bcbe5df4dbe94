use anchor_lang::prelude::*;
use crate::constants::{BALANCE_SEED, GAME_SEED};
use crate::state::{Game, PlayerBalance};
use crate::events::TreasuryUpdated;
use crate::errors::VroomError;

#[derive(Accounts)]
pub struct UpdateTreasury<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED.as_bytes()],
        bump = game.bump,
        constraint = game.operator == operator.key() @ VroomError::Unauthorized
    )]
    pub game: Account<'info, Game>,
    pub operator: Signer<'info>,

    /// CHECK: New treasury wallet; only its ledger entry is used.
    pub new_treasury: UncheckedAccount<'info>,

    // Settlement credits the treasury through its ledger entry, so it must exist.
    #[account(
        seeds = [BALANCE_SEED.as_bytes(), new_treasury.key().as_ref()],
        bump = new_treasury_balance.bump,
        constraint = new_treasury_balance.owner == new_treasury.key() @ VroomError::MissingLedgerAccount
    )]
    pub new_treasury_balance: Account<'info, PlayerBalance>,
}

pub fn process_update_treasury(ctx: Context<UpdateTreasury>) -> Result<()> {
    let game = &mut ctx.accounts.game;
    let old_treasury = game.treasury;
    game.treasury = ctx.accounts.new_treasury.key();

    emit!(TreasuryUpdated { old_treasury, new_treasury: game.treasury });
    msg!("Treasury {} -> {}", old_treasury, game.treasury);
    Ok(())
}
