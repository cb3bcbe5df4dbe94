use anchor_lang::prelude::*;
use crate::constants::HUNDRED_PERCENT_BPS;
use crate::errors::VroomError;

/// `floor(value * numerator / denominator)` computed in u128.
pub fn mul_div_floor(value: u64, numerator: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, VroomError::MathOverflow);
    let product = (value as u128)
        .checked_mul(numerator as u128)
        .ok_or(VroomError::MathOverflow)?;
    u64::try_from(product / denominator as u128).map_err(|_| error!(VroomError::MathOverflow))
}

/// Basis-point share of `value`, rounded down.
pub fn bps_of(value: u64, bps: u16) -> Result<u64> {
    mul_div_floor(value, bps as u64, HUNDRED_PERCENT_BPS as u64)
}
