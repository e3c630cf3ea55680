pub mod lamports;
pub mod payout;
