use anchor_lang::prelude::*;
use crate::constants::PICK_COUNT;
use crate::errors::VroomError;
use crate::state::{Pick, StakeEntry};
use crate::utils::math::{bps_of, mul_div_floor};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSchedule {
    pub commission_bps: u16,
    pub referral_bps: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credit {
    pub account: Pubkey,
    pub amount: u64,
}

/// Everything settlement needs to credit the ledger for one round.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PayoutPlan {
    pub winning_pool: u64,
    pub losing_pool: u64,
    pub commission: u64,
    pub referral_paid: u64,
    pub dust: u64,
    pub treasury_credit: u64,
    /// One entry per account, in first-credited order.
    pub credits: Vec<Credit>,
}

impl PayoutPlan {
    pub fn total_credited(&self) -> u64 {
        self.credits.iter().map(|c| c.amount).sum()
    }

    pub fn credit_for(&self, account: &Pubkey) -> u64 {
        self.credits
            .iter()
            .find(|c| c.account == *account)
            .map(|c| c.amount)
            .unwrap_or(0)
    }

    fn add(&mut self, account: Pubkey, amount: u64) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }
        match self.credits.iter_mut().find(|c| c.account == account) {
            Some(c) => {
                c.amount = c.amount.checked_add(amount).ok_or(VroomError::MathOverflow)?;
            }
            None => self.credits.push(Credit { account, amount }),
        }
        Ok(())
    }
}

/// Splits a settled round's pot.
///
/// Winners get their stake back plus `floor(distributable * stake / winning_pool)`.
/// Commission comes off the losing pool first; godfathers take `referral_bps`
/// of it in proportion to their referee's whole stake in the round. Rounding
/// dust and any unassigned commission land on the treasury. With nobody on the
/// winning pick, the whole pot goes to the treasury.
///
/// Credits always sum to the pot. Panics if `pots` disagree with `stakes`.
pub fn compute_payouts(
    pots: &[u64; PICK_COUNT],
    stakes: &[StakeEntry],
    winning_pick: Pick,
    fees: FeeSchedule,
    treasury: Pubkey,
) -> Result<PayoutPlan> {
    for (slot, pot) in pots.iter().enumerate() {
        let tallied: u128 = stakes.iter().map(|s| s.amounts[slot] as u128).sum();
        assert!(tallied == *pot as u128, "pot {} does not match stake entries", slot + 1);
    }

    let total_pot = pots
        .iter()
        .try_fold(0u64, |acc, p| acc.checked_add(*p))
        .ok_or(VroomError::MathOverflow)?;
    let w = winning_pick.index();

    let mut plan = PayoutPlan {
        winning_pool: pots[w],
        losing_pool: total_pot - pots[w],
        ..Default::default()
    };

    if plan.winning_pool == 0 {
        plan.treasury_credit = plan.losing_pool;
        plan.add(treasury, plan.treasury_credit)?;
        return Ok(plan);
    }

    plan.commission = bps_of(plan.losing_pool, fees.commission_bps)?;
    let distributable = plan.losing_pool - plan.commission;

    let mut distributed = 0u64;
    for entry in stakes.iter().filter(|s| s.amounts[w] > 0) {
        let stake = entry.amounts[w];
        let share = mul_div_floor(distributable, stake, plan.winning_pool)?;
        distributed = distributed.checked_add(share).ok_or(VroomError::MathOverflow)?;
        plan.add(
            entry.bettor,
            stake.checked_add(share).ok_or(VroomError::MathOverflow)?,
        )?;
    }
    plan.dust = distributable - distributed;

    let referral_pool = bps_of(plan.commission, fees.referral_bps)?;
    if referral_pool > 0 {
        for entry in stakes {
            if let Some(godfather) = entry.godfather {
                let cut = mul_div_floor(referral_pool, entry.total()?, total_pot)?;
                plan.referral_paid = plan
                    .referral_paid
                    .checked_add(cut)
                    .ok_or(VroomError::MathOverflow)?;
                plan.add(godfather, cut)?;
            }
        }
    }

    plan.treasury_credit = plan.commission - plan.referral_paid + plan.dust;
    plan.add(treasury, plan.treasury_credit)?;

    assert!(plan.total_credited() == total_pot, "payout does not conserve the pot");
    Ok(plan)
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIVE_PERCENT: FeeSchedule = FeeSchedule { commission_bps: 500, referral_bps: 0 };

    fn entry(bettor: Pubkey, godfather: Option<Pubkey>, amounts: [u64; PICK_COUNT]) -> StakeEntry {
        StakeEntry { bettor, godfather, amounts }
    }

    fn pots_of(stakes: &[StakeEntry]) -> [u64; PICK_COUNT] {
        let mut pots = [0; PICK_COUNT];
        for s in stakes {
            for (slot, amount) in s.amounts.iter().enumerate() {
                pots[slot] += amount;
            }
        }
        pots
    }

    /// A and B on picks 1+2, C on 1+2+3, D on 3+4, ten each.
    fn four_bettors(godfather: Option<Pubkey>) -> (Vec<Pubkey>, Vec<StakeEntry>) {
        let who: Vec<Pubkey> = (0..4).map(|_| Pubkey::new_unique()).collect();
        let stakes = vec![
            entry(who[0], godfather, [10, 10, 0, 0]),
            entry(who[1], godfather, [10, 10, 0, 0]),
            entry(who[2], godfather, [10, 10, 10, 0]),
            entry(who[3], godfather, [0, 0, 10, 10]),
        ];
        (who, stakes)
    }

    #[test]
    fn test_four_bettor_round_pick_one() {
        let treasury = Pubkey::new_unique();
        let (who, stakes) = four_bettors(None);
        let pots = pots_of(&stakes);
        assert_eq!(pots, [30, 30, 20, 10]);

        let plan = compute_payouts(&pots, &stakes, Pick::One, FIVE_PERCENT, treasury).unwrap();
        assert_eq!(plan.winning_pool, 30);
        assert_eq!(plan.losing_pool, 60);
        assert_eq!(plan.commission, 3);
        assert_eq!(plan.dust, 0);
        assert_eq!(plan.credit_for(&who[0]), 29);
        assert_eq!(plan.credit_for(&who[1]), 29);
        assert_eq!(plan.credit_for(&who[2]), 29);
        assert_eq!(plan.credit_for(&who[3]), 0);
        assert_eq!(plan.credit_for(&treasury), 3);
        assert_eq!(plan.total_credited(), 90);
    }

    #[test]
    fn test_every_winner_conserves_pot() {
        let treasury = Pubkey::new_unique();
        let godfather = Pubkey::new_unique();
        let (_, stakes) = four_bettors(Some(godfather));
        let pots = pots_of(&stakes);
        let fees = FeeSchedule { commission_bps: 1_000, referral_bps: 3_333 };
        for pick in Pick::ALL {
            let plan = compute_payouts(&pots, &stakes, pick, fees, treasury).unwrap();
            assert_eq!(plan.total_credited(), 90, "pick {}", pick.number());
            assert_eq!(
                plan.treasury_credit,
                plan.commission - plan.referral_paid + plan.dust
            );
        }
    }

    #[test]
    fn test_dust_goes_to_treasury() {
        let treasury = Pubkey::new_unique();
        let (a, b, c, d) = (
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
            Pubkey::new_unique(),
        );
        let stakes = vec![
            entry(a, None, [1, 0, 0, 0]),
            entry(b, None, [1, 0, 0, 0]),
            entry(c, None, [1, 0, 0, 0]),
            entry(d, None, [0, 100, 0, 0]),
        ];
        let pots = pots_of(&stakes);
        let plan = compute_payouts(&pots, &stakes, Pick::One, FIVE_PERCENT, treasury).unwrap();
        // commission 5, distributable 95, each share floor(95/3) = 31
        assert_eq!(plan.commission, 5);
        assert_eq!(plan.credit_for(&a), 32);
        assert_eq!(plan.dust, 2);
        assert_eq!(plan.credit_for(&treasury), 7);
        assert_eq!(plan.total_credited(), 103);
    }

    #[test]
    fn test_no_winner_forfeits_to_treasury() {
        let treasury = Pubkey::new_unique();
        let godfather = Pubkey::new_unique();
        let (who, stakes) = four_bettors(Some(godfather));
        let mut stakes = stakes;
        // nobody on pick four
        stakes[3].amounts = [0, 0, 10, 0];
        let pots = pots_of(&stakes);
        assert_eq!(pots, [30, 30, 20, 0]);
        let total_pot: u64 = pots.iter().sum();

        let fees = FeeSchedule { commission_bps: 500, referral_bps: 5_000 };
        let plan = compute_payouts(&pots, &stakes, Pick::Four, fees, treasury).unwrap();
        assert_eq!(plan.winning_pool, 0);
        assert_eq!(plan.losing_pool, total_pot);
        assert_eq!(plan.commission, 0);
        assert_eq!(plan.referral_paid, 0);
        assert_eq!(plan.credits, vec![Credit { account: treasury, amount: total_pot }]);
        assert_eq!(plan.credits[0].amount, 80);
        assert_eq!(plan.credit_for(&who[0]), 0);
    }

    #[test]
    fn test_empty_round() {
        let treasury = Pubkey::new_unique();
        let plan = compute_payouts(&[0; PICK_COUNT], &[], Pick::Two, FIVE_PERCENT, treasury).unwrap();
        assert_eq!(plan.total_credited(), 0);
        assert!(plan.credits.is_empty());
    }

    #[test]
    fn test_no_losers_returns_stakes() {
        let treasury = Pubkey::new_unique();
        let a = Pubkey::new_unique();
        let b = Pubkey::new_unique();
        let stakes = vec![entry(a, None, [0, 0, 7, 0]), entry(b, None, [0, 0, 5, 0])];
        let plan = compute_payouts(&pots_of(&stakes), &stakes, Pick::Three, FIVE_PERCENT, treasury).unwrap();
        assert_eq!(plan.credit_for(&a), 7);
        assert_eq!(plan.credit_for(&b), 5);
        assert_eq!(plan.credit_for(&treasury), 0);
    }

    #[test]
    fn test_referral_cut_from_commission() {
        let treasury = Pubkey::new_unique();
        let godfather = Pubkey::new_unique();
        let winner = Pubkey::new_unique();
        let loser = Pubkey::new_unique();
        let stakes = vec![
            entry(winner, None, [1_000, 0, 0, 0]),
            entry(loser, Some(godfather), [0, 1_000, 0, 0]),
        ];
        let fees = FeeSchedule { commission_bps: 1_000, referral_bps: 5_000 };
        let plan = compute_payouts(&pots_of(&stakes), &stakes, Pick::One, fees, treasury).unwrap();

        // commission 100, referral pool 50, loser holds half the pot
        assert_eq!(plan.commission, 100);
        assert_eq!(plan.referral_paid, 25);
        assert_eq!(plan.credit_for(&godfather), 25);
        assert_eq!(plan.credit_for(&treasury), 75);
        assert_eq!(plan.credit_for(&winner), 1_900);
        assert_eq!(plan.total_credited(), 2_000);
    }

    #[test]
    fn test_godfather_who_also_bets_gets_one_credit() {
        let treasury = Pubkey::new_unique();
        let godfather = Pubkey::new_unique();
        let player = Pubkey::new_unique();
        let stakes = vec![
            entry(godfather, None, [300, 0, 0, 0]),
            entry(player, Some(godfather), [0, 0, 0, 700]),
        ];
        let fees = FeeSchedule { commission_bps: 1_000, referral_bps: 10_000 };
        let plan = compute_payouts(&pots_of(&stakes), &stakes, Pick::One, fees, treasury).unwrap();

        // commission 70; godfather gets 300 + 630 back and floor(70 * 700 / 1000) = 49
        assert_eq!(plan.credits.len(), 2);
        assert_eq!(plan.credit_for(&godfather), 979);
        assert_eq!(plan.credit_for(&treasury), 21);
    }

    #[test]
    #[should_panic(expected = "does not match")]
    fn test_inconsistent_tally_panics() {
        let stakes = vec![entry(Pubkey::new_unique(), None, [5, 0, 0, 0])];
        let _ = compute_payouts(&[6, 0, 0, 0], &stakes, Pick::One, FIVE_PERCENT, Pubkey::new_unique());
    }
}
