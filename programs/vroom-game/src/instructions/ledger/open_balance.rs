use anchor_lang::prelude::*;
use crate::constants::BALANCE_SEED;
use crate::state::PlayerBalance;
use crate::events::BalanceOpened;

#[derive(Accounts)]
#[instruction(owner: Pubkey)]
pub struct OpenBalance<'info> {
    #[account(
        init_if_needed,
        seeds = [BALANCE_SEED.as_bytes(), owner.as_ref()],
        bump,
        payer = payer,
        space = PlayerBalance::LEN
    )]
    pub player_balance: Account<'info, PlayerBalance>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Creates an empty ledger entry so settlement can credit `owner` (e.g. a
/// godfather who never deposited). A no-op when the entry already exists.
pub fn process_open_balance(ctx: Context<OpenBalance>, owner: Pubkey) -> Result<()> {
    let entry = &mut ctx.accounts.player_balance;
    if entry.is_initialized() {
        return Ok(());
    }
    entry.open(owner, ctx.bumps.player_balance);

    emit!(BalanceOpened { owner });
    Ok(())
}
