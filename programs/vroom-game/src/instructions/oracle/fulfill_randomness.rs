use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{EntropyRequest, Game};
use crate::events::EntropyFulfilled;
use crate::errors::VroomError;

#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    #[account(
        seeds = [GAME_SEED.as_bytes()],
        bump = game.bump,
        constraint = game.oracle_authority == oracle.key() @ VroomError::Unauthorized
    )]
    pub game: Account<'info, Game>,

    #[account(
        mut,
        seeds = [ENTROPY_SEED.as_bytes(), &game.current_round.to_le_bytes()],
        bump = entropy_request.bump,
    )]
    pub entropy_request: Account<'info, EntropyRequest>,

    pub oracle: Signer<'info>,
}

/// Oracle callback. Only the outstanding correlation id is accepted.
pub fn process_fulfill_randomness(
    ctx: Context<FulfillRandomness>,
    request_id: u64,
    randomness: [u8; 32],
) -> Result<()> {
    let slot = Clock::get()?.slot;
    let entropy = &mut ctx.accounts.entropy_request;
    entropy.fulfill(request_id, ctx.accounts.game.pending_request, randomness, slot)?;

    emit!(EntropyFulfilled {
        round_id: entropy.round_id,
        request_id,
    });

    Ok(())
}
