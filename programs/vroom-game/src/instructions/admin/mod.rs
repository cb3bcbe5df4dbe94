pub mod init_game;
pub mod start_game;
pub mod close_round;
pub mod pick_winner;
pub mod update_fees;
pub mod update_treasury;

pub use init_game::*;
pub use start_game::*;
pub use close_round::*;
pub use pick_winner::*;
pub use update_fees::*;
pub use update_treasury::*;
