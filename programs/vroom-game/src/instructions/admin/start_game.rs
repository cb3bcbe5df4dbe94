use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{EntropyRequest, Game, Round};
use crate::events::{GameStarted, RoundOpened};
use crate::errors::VroomError;

#[derive(Accounts)]
pub struct StartGame<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED.as_bytes()],
        bump = game.bump,
        constraint = game.operator == operator.key() @ VroomError::Unauthorized
    )]
    pub game: Account<'info, Game>,

    #[account(
        init,
        seeds = [ROUND_SEED.as_bytes(), &game.next_round_id().to_le_bytes()],
        bump,
        payer = operator,
        space = Round::LEN
    )]
    pub first_round: Box<Account<'info, Round>>,

    #[account(
        init,
        seeds = [ENTROPY_SEED.as_bytes(), &game.next_round_id().to_le_bytes()],
        bump,
        payer = operator,
        space = EntropyRequest::LEN
    )]
    pub first_entropy: Account<'info, EntropyRequest>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_start_game(ctx: Context<StartGame>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let round_id = ctx.accounts.game.start()?;

    ctx.accounts.first_round.open(round_id, now, ctx.bumps.first_round);
    ctx.accounts.first_entropy.init(round_id, ctx.bumps.first_entropy);

    emit!(GameStarted { round_id });
    emit!(RoundOpened { round_id });

    Ok(())
}
