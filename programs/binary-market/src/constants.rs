use solana_program::native_token::LAMPORTS_PER_SOL;

pub const EVENT_SEED: &[u8] = b"event";
pub const PRIZE_POOL_SEED: &[u8] = b"prize_pool";
pub const TREASURY_SEED: &[u8] = b"treasury";

pub const MAX_DESCRIPTION_LEN: usize = 256;

// 0.001 SOL
pub const MIN_BET: u64 = LAMPORTS_PER_SOL / 1_000;

// 2% = 200 basis points
pub const FEE_RATE_BPS: u64 = 200;
pub const FEE_DENOMINATOR: u64 = 10_000;

// Share units track lamports 1:1, so the mints carry SOL's precision.
pub const SHARE_DECIMALS: u8 = 9;
