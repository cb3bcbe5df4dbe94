use anchor_lang::prelude::*;

pub mod constants;
pub mod state;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod utils;


use instructions::*;

declare_id!("98xBXHvEeDif1jRUnHJJKRo7y7JHPKwA16t56kS5A3d3");

#[program]
pub mod vroom_game {
    use super::*;

    pub fn initialize(
        ctx: Context<InitGame>,
        commission_bps: u16,
        referral_bps: u16,
        oracle_authority: Pubkey,
    ) -> Result<()> {
        instructions::admin::init_game::process_init_game(ctx, commission_bps, referral_bps, oracle_authority)
    }

    pub fn start(ctx: Context<StartGame>) -> Result<()> {
        instructions::admin::start_game::process_start_game(ctx)
    }

    pub fn open_balance(ctx: Context<OpenBalance>, owner: Pubkey) -> Result<()> {
        instructions::ledger::open_balance::process_open_balance(ctx, owner)
    }

    pub fn deposit(ctx: Context<Deposit>, amount: u64, godfather: Option<Pubkey>) -> Result<()> {
        instructions::ledger::deposit::process_deposit(ctx, amount, godfather)
    }

    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        instructions::ledger::withdraw::process_withdraw(ctx, amount)
    }

    pub fn bet(ctx: Context<PlaceBet>, pick: u32, amount: u64) -> Result<()> {
        instructions::betting::place_bet::process_place_bet(ctx, pick, amount)
    }

    pub fn close_round(ctx: Context<CloseRound>) -> Result<()> {
        instructions::admin::close_round::process_close_round(ctx)
    }

    pub fn fulfill_randomness(
        ctx: Context<FulfillRandomness>,
        request_id: u64,
        randomness: [u8; 32],
    ) -> Result<()> {
        instructions::oracle::fulfill_randomness::process_fulfill_randomness(ctx, request_id, randomness)
    }

    pub fn pick_winner(ctx: Context<PickWinner>) -> Result<()> {
        instructions::admin::pick_winner::process_pick_winner(ctx)
    }

    pub fn update_fees(ctx: Context<GameAdmin>, commission_bps: u16, referral_bps: u16) -> Result<()> {
        instructions::admin::update_fees::process_update_fees(ctx, commission_bps, referral_bps)
    }

    pub fn update_oracle(ctx: Context<GameAdmin>, new_authority: Pubkey) -> Result<()> {
        instructions::admin::update_fees::process_update_oracle(ctx, new_authority)
    }

    pub fn update_treasury(ctx: Context<UpdateTreasury>) -> Result<()> {
        instructions::admin::update_treasury::process_update_treasury(ctx)
    }
}
