pub mod initialize_treasury;
pub mod create_event;
pub mod bet;
pub mod update_result;
pub mod redeem;
pub mod withdraw_fees;

pub use initialize_treasury::*;
pub use create_event::*;
pub use bet::*;
pub use update_result::*;
pub use redeem::*;
pub use withdraw_fees::*;
