use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::constants::*;
use crate::state::{Game, PlayerBalance};
use crate::events::{Deposited, ReferralLinked};
use crate::errors::VroomError;

#[derive(Accounts)]
pub struct Deposit<'info> {
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

    #[account(
        init_if_needed,
        seeds = [BALANCE_SEED.as_bytes(), depositor.key().as_ref()],
        bump,
        payer = depositor,
        space = PlayerBalance::LEN
    )]
    pub player_balance: Account<'info, PlayerBalance>,

    #[account(
        mut,
        constraint = depositor_token.mint == game.token_mint @ VroomError::InvalidMint,
        constraint = depositor_token.owner == depositor.key() @ VroomError::Unauthorized,
    )]
    pub depositor_token: Account<'info, TokenAccount>,

    #[account(mut)]
    pub depositor: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn process_deposit(ctx: Context<Deposit>, amount: u64, godfather: Option<Pubkey>) -> Result<()> {
    require!(amount > 0, VroomError::InvalidAmount);
    let depositor = ctx.accounts.depositor.key();

    // 1. Pull tokens into custody
    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.depositor_token.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.depositor.to_account_info(),
            },
        ),
        amount,
    )
    .map_err(|_| error!(VroomError::TransferFailed))?;

    // 2. Credit
    let entry = &mut ctx.accounts.player_balance;
    if !entry.is_initialized() {
        entry.open(depositor, ctx.bumps.player_balance);
    }
    entry.record_deposit(amount)?;
    ctx.accounts.game.record_inflow(amount)?;

    // 3. Referral, first one wins
    if let Some(godfather) = godfather {
        if entry.link_godfather(godfather) {
            emit!(ReferralLinked { owner: depositor, godfather });
        }
    }

    emit!(Deposited {
        owner: depositor,
        amount,
        new_balance: entry.balance,
    });

    Ok(())
}
