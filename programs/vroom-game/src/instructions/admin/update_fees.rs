use anchor_lang::prelude::*;
use crate::constants::GAME_SEED;
use crate::state::Game;
use crate::events::{FeesUpdated, OracleUpdated};
use crate::errors::VroomError;

#[derive(Accounts)]
pub struct GameAdmin<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED.as_bytes()],
        bump = game.bump,
        constraint = game.operator == operator.key() @ VroomError::Unauthorized
    )]
    pub game: Account<'info, Game>,
    pub operator: Signer<'info>,
}

/// New rates apply from the next settlement on, including a round already closed.
pub fn process_update_fees(ctx: Context<GameAdmin>, commission_bps: u16, referral_bps: u16) -> Result<()> {
    Game::validate_fees(commission_bps, referral_bps)?;
    let game = &mut ctx.accounts.game;
    game.commission_bps = commission_bps;
    game.referral_bps = referral_bps;

    emit!(FeesUpdated { commission_bps, referral_bps });
    msg!("Fees set: commission {} bps, referral {} bps", commission_bps, referral_bps);
    Ok(())
}

pub fn process_update_oracle(ctx: Context<GameAdmin>, new_authority: Pubkey) -> Result<()> {
    let game = &mut ctx.accounts.game;
    let old_authority = game.oracle_authority;
    game.oracle_authority = new_authority;

    emit!(OracleUpdated { old_authority, new_authority });
    msg!("Oracle authority {} -> {}", old_authority, new_authority);
    Ok(())
}
