use anchor_lang::prelude::*;
use crate::{constants::*, error::MarketError};

/// Split of one winning claim against the escrow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    /// Proportional slice of the pool before fees.
    pub gross: u64,
    /// Protocol fee routed to the treasury.
    pub fee: u64,
    /// Amount credited to the claimant.
    pub net: u64,
}

/// `floor(pool * units / winning_supply)`, widened to u128 so the product
/// cannot overflow.
pub fn gross_entitlement(pool: u64, units: u64, winning_supply: u64) -> Result<u64> {
    require!(winning_supply > 0, MarketError::NoWinnerSupply);

    let gross = (pool as u128)
        .checked_mul(units as u128)
        .ok_or(MarketError::ArithmeticOverflow)?
        .checked_div(winning_supply as u128)
        .ok_or(MarketError::ArithmeticOverflow)?;

    u64::try_from(gross).map_err(|_| error!(MarketError::ArithmeticOverflow))
}

pub fn protocol_fee(gross: u64) -> Result<u64> {
    let fee = (gross as u128)
        .checked_mul(FEE_RATE_BPS as u128)
        .ok_or(MarketError::ArithmeticOverflow)?
        .checked_div(FEE_DENOMINATOR as u128)
        .ok_or(MarketError::ArithmeticOverflow)?;

    u64::try_from(fee).map_err(|_| error!(MarketError::ArithmeticOverflow))
}

pub fn compute_payout(pool: u64, units: u64, winning_supply: u64) -> Result<Payout> {
    let gross = gross_entitlement(pool, units, winning_supply)?;
    let fee = protocol_fee(gross)?;
    let net = gross.checked_sub(fee).ok_or(MarketError::ArithmeticOverflow)?;

    // A zero net payout would burn the claimant's shares for nothing.
    require!(net > 0, MarketError::PayoutTooSmall);

    Ok(Payout { gross, fee, net })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_program::native_token::LAMPORTS_PER_SOL;

    fn market_err(e: MarketError) -> anchor_lang::error::Error {
        e.into()
    }

    #[test]
    fn single_winner_takes_pool_minus_two_percent() {
        let payout = compute_payout(3 * LAMPORTS_PER_SOL, LAMPORTS_PER_SOL, LAMPORTS_PER_SOL).unwrap();

        assert_eq!(payout.gross, 3 * LAMPORTS_PER_SOL);
        assert_eq!(payout.fee, 60_000_000);
        assert_eq!(payout.net, 2_940_000_000);
    }

    #[test]
    fn gross_is_floored() {
        // 10 * 1 / 3 = 3.33..
        assert_eq!(gross_entitlement(10, 1, 3).unwrap(), 3);
    }

    #[test]
    fn fee_is_floored() {
        // 2% of 49 = 0.98
        assert_eq!(protocol_fee(49).unwrap(), 0);
        assert_eq!(protocol_fee(50).unwrap(), 1);
        assert_eq!(protocol_fee(0).unwrap(), 0);
    }

    #[test]
    fn zero_winning_supply_is_rejected() {
        assert_eq!(
            compute_payout(1_000, 10, 0).unwrap_err(),
            market_err(MarketError::NoWinnerSupply)
        );
    }

    #[test]
    fn dust_claim_is_rejected() {
        // 10 * 1 / 100 floors to zero
        assert_eq!(
            compute_payout(10, 1, 100).unwrap_err(),
            market_err(MarketError::PayoutTooSmall)
        );
    }

    #[test]
    fn fee_free_small_claim_still_pays() {
        let payout = compute_payout(100, 1, 100).unwrap();
        assert_eq!(payout, Payout { gross: 1, fee: 0, net: 1 });
    }

    #[test]
    fn large_values_do_not_overflow() {
        let payout = compute_payout(u64::MAX, u64::MAX / 2, u64::MAX).unwrap();
        assert_eq!(payout.gross, u64::MAX / 2);
        assert_eq!(payout.net + payout.fee, payout.gross);
    }

    #[test]
    fn entitlement_above_u64_is_an_overflow() {
        assert_eq!(
            gross_entitlement(u64::MAX, u64::MAX, 1).unwrap_err(),
            market_err(MarketError::ArithmeticOverflow)
        );
    }
}
