use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{EntropyRequest, Game, Round};
use crate::events::RoundClosed;
use crate::errors::VroomError;

#[derive(Accounts)]
pub struct CloseRound<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED.as_bytes()],
        bump = game.bump,
        constraint = game.operator == operator.key() @ VroomError::Unauthorized
    )]
    pub game: Account<'info, Game>,

    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &game.current_round.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    #[account(
        mut,
        seeds = [ENTROPY_SEED.as_bytes(), &game.current_round.to_le_bytes()],
        bump = entropy_request.bump,
    )]
    pub entropy_request: Account<'info, EntropyRequest>,

    pub operator: Signer<'info>,
}

/// Stops betting and asks the oracle for this round's entropy. Returns
/// immediately; the oracle answers in its own transaction.
pub fn process_close_round(ctx: Context<CloseRound>) -> Result<()> {
    let clock = Clock::get()?;
    let round = &mut ctx.accounts.round;

    round.close_betting(clock.unix_timestamp)?;
    let request_id = ctx.accounts.game.issue_request()?;
    ctx.accounts.entropy_request.request(request_id, clock.slot)?;
    let total_pot = round.total_pot()?;

    emit!(RoundClosed {
        round_id: round.round_id,
        request_id,
        total_pot,
    });

    Ok(())
}
