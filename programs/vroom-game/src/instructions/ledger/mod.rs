pub mod open_balance;
pub mod deposit;
pub mod withdraw;

pub use open_balance::*;
pub use deposit::*;
pub use withdraw::*;
