use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::state::{Game, PlayerBalance};
use crate::events::Withdrawn;
use crate::errors::VroomError;

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(
        mut,
        seeds = [GAME_SEED.as_bytes()],
        bump = game.bump,
    )]
    pub game: Account<'info, Game>,

    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes()],
        bump = game.vault_bump,
        constraint = vault.key() == game.vault @ VroomError::InvalidVault
    )]
    pub vault: Account<'info, TokenAccount>,

    // A missing entry reads as a zero balance.
    #[account(
        init_if_needed,
        seeds = [BALANCE_SEED.as_bytes(), owner.key().as_ref()],
        bump,
        payer = owner,
        space = PlayerBalance::LEN
    )]
    pub player_balance: Account<'info, PlayerBalance>,

    #[account(
        mut,
        constraint = owner_token.mint == game.token_mint @ VroomError::InvalidMint,
    )]
    pub owner_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let owner = ctx.accounts.owner.key();

    // 1. Debit first
    let entry = &mut ctx.accounts.player_balance;
    if !entry.is_initialized() {
        entry.open(owner, ctx.bumps.player_balance);
    }
    entry.record_withdrawal(amount)?;
    let new_balance = entry.balance;

    let game = &mut ctx.accounts.game;
    game.record_outflow(amount)?;

    // 2. Push from the vault, signed by the game PDA
    let bump = [game.bump];
    let seeds: &[&[u8]] = &[GAME_SEED.as_bytes(), &bump];
    let signer = &[seeds];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.owner_token.to_account_info(),
                authority: game.to_account_info(),
            },
            signer,
        ),
        amount,
    )
    .map_err(|_| error!(VroomError::TransferFailed))?;

    emit!(Withdrawn {
        owner,
        amount,
        new_balance,
    });

    Ok(())
}
