use anchor_lang::prelude::*;
use crate::constants::*;
use crate::state::{EntropyRequest, Game, PlayerBalance, Round};
use crate::events::{PayoutCredited, RoundOpened, RoundSettled};
use crate::errors::VroomError;
use crate::utils::payout::Credit;

#[derive(Accounts)]
pub struct PickWinner<'info> {
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
        seeds = [ENTROPY_SEED.as_bytes(), &game.current_round.to_le_bytes()],
        bump = entropy_request.bump,
    )]
    pub entropy_request: Account<'info, EntropyRequest>,

    #[account(
        mut,
        seeds = [BALANCE_SEED.as_bytes(), game.treasury.as_ref()],
        bump = treasury_balance.bump,
    )]
    pub treasury_balance: Account<'info, PlayerBalance>,

    #[account(
        init,
        seeds = [ROUND_SEED.as_bytes(), &game.next_round_id().to_le_bytes()],
        bump,
        payer = operator,
        space = Round::LEN
    )]
    pub next_round: Box<Account<'info, Round>>,

    #[account(
        init,
        seeds = [ENTROPY_SEED.as_bytes(), &game.next_round_id().to_le_bytes()],
        bump,
        payer = operator,
        space = EntropyRequest::LEN
    )]
    pub next_entropy: Account<'info, EntropyRequest>,

    #[account(mut)]
    pub operator: Signer<'info>,

    pub system_program: Program<'info, System>,
    // remaining_accounts: writable ledger entries of every winner and godfather
}

pub fn process_pick_winner(ctx: Context<PickWinner>) -> Result<()> {
    let clock = Clock::get()?;
    let game = &mut ctx.accounts.game;
    let round = &mut ctx.accounts.round;

    // 1. Draw and split
    let plan = round.resolve(
        &ctx.accounts.entropy_request,
        game.fee_schedule(),
        game.treasury,
        clock.unix_timestamp,
    )?;

    // 2. Credit the ledger
    apply_credits(
        ctx.program_id,
        ctx.remaining_accounts,
        game.treasury,
        &mut ctx.accounts.treasury_balance,
        &plan.credits,
    )?;
    for credit in plan.credits.iter() {
        emit!(PayoutCredited {
            round_id: round.round_id,
            account: credit.account,
            amount: credit.amount,
        });
    }

    emit!(RoundSettled {
        round_id: round.round_id,
        winning_pick: round.winner(),
        winning_pool: plan.winning_pool,
        losing_pool: plan.losing_pool,
        commission: plan.commission,
        referral_paid: plan.referral_paid,
        dust: plan.dust,
        treasury_credit: plan.treasury_credit,
    });
    msg!(
        "Round {} settled: pick {}, pot {}, treasury {}",
        round.round_id,
        round.winner(),
        plan.total_credited(),
        plan.treasury_credit
    );

    // 3. Next round
    let next_id = game.advance_round()?;
    ctx.accounts.next_round.open(next_id, clock.unix_timestamp, ctx.bumps.next_round);
    ctx.accounts.next_entropy.init(next_id, ctx.bumps.next_entropy);

    emit!(RoundOpened { round_id: next_id });

    Ok(())
}

/// The treasury is credited through its named account, everyone else
/// through their ledger PDA in `remaining`.
fn apply_credits(
    program_id: &Pubkey,
    remaining: &[AccountInfo],
    treasury: Pubkey,
    treasury_balance: &mut PlayerBalance,
    credits: &[Credit],
) -> Result<()> {
    for credit in credits {
        if credit.account == treasury {
            treasury_balance.credit(credit.amount)?;
        } else {
            credit_ledger_entry(program_id, remaining, credit.account, credit.amount)?;
        }
    }
    Ok(())
}

/// Finds `owner`'s ledger PDA among the remaining accounts and credits it in place.
fn credit_ledger_entry(
    program_id: &Pubkey,
    remaining: &[AccountInfo],
    owner: Pubkey,
    amount: u64,
) -> Result<()> {
    let (expected, _) =
        Pubkey::find_program_address(&[BALANCE_SEED.as_bytes(), owner.as_ref()], program_id);
    let info = remaining
        .iter()
        .find(|acc| *acc.key == expected)
        .ok_or(VroomError::MissingLedgerAccount)?;
    require!(
        info.is_writable && info.owner == program_id,
        VroomError::MissingLedgerAccount
    );

    let mut data = info.try_borrow_mut_data()?;
    let mut entry = PlayerBalance::try_deserialize(&mut &data[..])?;
    require_keys_eq!(entry.owner, owner, VroomError::MissingLedgerAccount);
    entry.credit(amount)?;

    let mut writer = &mut data[..];
    entry.try_serialize(&mut writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger_pda(owner: &Pubkey) -> (Pubkey, u8) {
        Pubkey::find_program_address(&[BALANCE_SEED.as_bytes(), owner.as_ref()], &crate::ID)
    }

    /// Account data of an entry owned by `owner` holding `balance`.
    fn entry_data(owner: Pubkey, balance: u64) -> Vec<u8> {
        let mut entry = PlayerBalance {
            owner: Pubkey::default(),
            balance: 0,
            godfather: None,
            total_deposited: 0,
            total_withdrawn: 0,
            bump: 0,
        };
        entry.open(owner, ledger_pda(&owner).1);
        entry.balance = balance;
        let mut data = vec![0u8; PlayerBalance::LEN];
        let mut writer = &mut data[..];
        entry.try_serialize(&mut writer).unwrap();
        data
    }

    fn balance_of(data: &[u8]) -> u64 {
        PlayerBalance::try_deserialize(&mut &data[..]).unwrap().balance
    }

    #[test]
    fn test_credit_ledger_entry_in_place() {
        let program_id = crate::ID;
        let owner = Pubkey::new_unique();
        let (key, _) = ledger_pda(&owner);
        let mut data = entry_data(owner, 5);
        let mut lamports = 1_000_000;
        {
            let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &program_id, false, 0);
            credit_ledger_entry(&program_id, &[info], owner, 7).unwrap();
        }
        assert_eq!(balance_of(&data), 12);
    }

    #[test]
    fn test_credit_requires_the_owners_entry() {
        let program_id = crate::ID;
        let owner = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        let (other_key, _) = ledger_pda(&other);
        let mut data = entry_data(other, 5);
        let mut lamports = 1_000_000;

        assert_eq!(
            credit_ledger_entry(&program_id, &[], owner, 7).unwrap_err(),
            VroomError::MissingLedgerAccount.into()
        );
        let info = AccountInfo::new(&other_key, false, true, &mut lamports, &mut data, &program_id, false, 0);
        assert_eq!(
            credit_ledger_entry(&program_id, &[info], owner, 7).unwrap_err(),
            VroomError::MissingLedgerAccount.into()
        );
    }

    #[test]
    fn test_credit_rejects_read_only_entry() {
        let program_id = crate::ID;
        let owner = Pubkey::new_unique();
        let (key, _) = ledger_pda(&owner);
        let mut data = entry_data(owner, 5);
        let mut lamports = 1_000_000;
        {
            let info = AccountInfo::new(&key, false, false, &mut lamports, &mut data, &program_id, false, 0);
            assert_eq!(
                credit_ledger_entry(&program_id, &[info], owner, 7).unwrap_err(),
                VroomError::MissingLedgerAccount.into()
            );
        }
        assert_eq!(balance_of(&data), 5);
    }

    #[test]
    fn test_credit_rejects_foreign_owned_entry() {
        let program_id = crate::ID;
        let foreign = Pubkey::new_unique();
        let owner = Pubkey::new_unique();
        let (key, _) = ledger_pda(&owner);
        let mut data = entry_data(owner, 5);
        let mut lamports = 1_000_000;
        {
            let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &foreign, false, 0);
            assert_eq!(
                credit_ledger_entry(&program_id, &[info], owner, 7).unwrap_err(),
                VroomError::MissingLedgerAccount.into()
            );
        }
        assert_eq!(balance_of(&data), 5);
    }

    #[test]
    fn test_credit_rejects_entry_of_someone_else_at_owners_address() {
        let program_id = crate::ID;
        let owner = Pubkey::new_unique();
        let (key, _) = ledger_pda(&owner);
        let mut data = entry_data(Pubkey::new_unique(), 5);
        let mut lamports = 1_000_000;
        let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &program_id, false, 0);
        assert_eq!(
            credit_ledger_entry(&program_id, &[info], owner, 7).unwrap_err(),
            VroomError::MissingLedgerAccount.into()
        );
    }

    #[test]
    fn test_treasury_credit_goes_to_named_account() {
        let program_id = crate::ID;
        let treasury = Pubkey::new_unique();
        let winner = Pubkey::new_unique();
        let mut treasury_balance = PlayerBalance::try_deserialize(&mut &entry_data(treasury, 1)[..]).unwrap();

        let (key, _) = ledger_pda(&winner);
        let mut data = entry_data(winner, 0);
        let mut lamports = 1_000_000;
        let credits = [
            Credit { account: winner, amount: 29 },
            Credit { account: treasury, amount: 3 },
        ];
        {
            // only the winner's entry is passed; the treasury never is
            let info = AccountInfo::new(&key, false, true, &mut lamports, &mut data, &program_id, false, 0);
            apply_credits(&program_id, &[info], treasury, &mut treasury_balance, &credits).unwrap();
        }
        assert_eq!(treasury_balance.balance, 4);
        assert_eq!(balance_of(&data), 29);

        // a missing recipient fails the whole settlement
        assert_eq!(
            apply_credits(&program_id, &[], treasury, &mut treasury_balance, &credits).unwrap_err(),
            VroomError::MissingLedgerAccount.into()
        );
    }
}
