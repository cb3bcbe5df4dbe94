use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::constants::*;
use crate::state::{EntropyRequest, Game, PlayerBalance, Round};
use crate::events::GameInitialized;

#[derive(Accounts)]
pub struct InitGame<'info> {
    #[account(
        init,
        seeds = [GAME_SEED.as_bytes()],
        bump,
        payer = operator,
        space = Game::LEN
    )]
    pub game: Account<'info, Game>,

    // Round 0 only exists so that bets and closes before `start` resolve
    // to a NotStarted round instead of a missing account.
    #[account(
        init,
        seeds = [ROUND_SEED.as_bytes(), &0u64.to_le_bytes()],
        bump,
        payer = operator,
        space = Round::LEN
    )]
    pub genesis_round: Box<Account<'info, Round>>,

    #[account(
        init,
        seeds = [ENTROPY_SEED.as_bytes(), &0u64.to_le_bytes()],
        bump,
        payer = operator,
        space = EntropyRequest::LEN
    )]
    pub genesis_entropy: Account<'info, EntropyRequest>,

    #[account(
        init,
        seeds = [VAULT_SEED.as_bytes()],
        bump,
        payer = operator,
        token::mint = token_mint,
        token::authority = game,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        init,
        seeds = [BALANCE_SEED.as_bytes(), treasury.key().as_ref()],
        bump,
        payer = operator,
        space = PlayerBalance::LEN
    )]
    pub treasury_balance: Account<'info, PlayerBalance>,

    /// CHECK: Treasury wallet. Commission is credited to its ledger entry, never transferred here directly.
    pub treasury: UncheckedAccount<'info>,

    pub token_mint: Account<'info, Mint>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

pub fn process_init_game(
    ctx: Context<InitGame>,
    commission_bps: u16,
    referral_bps: u16,
    oracle_authority: Pubkey,
) -> Result<()> {
    Game::validate_fees(commission_bps, referral_bps)?;
    let now = Clock::get()?.unix_timestamp;

    let game = &mut ctx.accounts.game;
    game.operator = ctx.accounts.operator.key();
    game.treasury = ctx.accounts.treasury.key();
    game.oracle_authority = oracle_authority;
    game.token_mint = ctx.accounts.token_mint.key();
    game.vault = ctx.accounts.vault.key();
    game.commission_bps = commission_bps;
    game.referral_bps = referral_bps;
    game.current_round = 0;
    game.request_counter = 0;
    game.pending_request = None;
    game.total_custodied = 0;
    game.bump = ctx.bumps.game;
    game.vault_bump = ctx.bumps.vault;

    ctx.accounts.genesis_round.open(0, now, ctx.bumps.genesis_round);
    ctx.accounts.genesis_entropy.init(0, ctx.bumps.genesis_entropy);
    ctx.accounts
        .treasury_balance
        .open(ctx.accounts.treasury.key(), ctx.bumps.treasury_balance);

    emit!(GameInitialized {
        operator: game.operator,
        treasury: game.treasury,
        oracle_authority,
        token_mint: game.token_mint,
        commission_bps,
        referral_bps,
    });

    Ok(())
}
