pub mod admin;
pub mod ledger;
pub mod betting;
pub mod oracle;

pub use admin::*;
pub use ledger::*;
pub use betting::*;
pub use oracle::*;
