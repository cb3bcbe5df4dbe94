pub mod game;
pub mod round;
pub mod entropy;
pub mod ledger;

pub use game::*;
pub use round::*;
pub use entropy::*;
pub use ledger::*;
