pub mod math;
pub mod payout;
pub mod pick;

pub use math::*;
pub use payout::*;
pub use pick::*;
