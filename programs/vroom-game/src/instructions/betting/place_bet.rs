use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{Game, PlayerBalance, Round};
use crate::events::BetPlaced;

#[derive(Accounts)]
pub struct PlaceBet<'info> {
    #[account(
        seeds = [GAME_SEED.as_bytes()],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,

    // Before `start` this is the genesis round, which rejects with NotStarted.
    #[account(
        mut,
        seeds = [ROUND_SEED.as_bytes(), &game.current_round.to_le_bytes()],
        bump = round.bump,
    )]
    pub round: Box<Account<'info, Round>>,

    #[account(
        init_if_needed,
        seeds = [BALANCE_SEED.as_bytes(), bettor.key().as_ref()],
        bump,
        payer = bettor,
        space = PlayerBalance::LEN
    )]
    pub player_balance: Account<'info, PlayerBalance>,

    #[account(mut)]
    pub bettor: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn process_place_bet(ctx: Context<PlaceBet>, pick: u32, amount: u64) -> Result<()> {
    let bettor = ctx.accounts.bettor.key();
    let round = &mut ctx.accounts.round;

    // 1. Guard checks
    let pick = round.validate_bet(&bettor, pick, amount)?;

    // 2. Debit the ledger
    let entry = &mut ctx.accounts.player_balance;
    if !entry.is_initialized() {
        entry.open(bettor, ctx.bumps.player_balance);
    }
    entry.debit(amount)?;

    // 3. Stake
    let new_pot = round.record_stake(bettor, entry.godfather, pick, amount)?;

    emit!(BetPlaced {
        round_id: round.round_id,
        bettor,
        pick: pick.number(),
        amount,
        new_pot,
    });

    Ok(())
}
