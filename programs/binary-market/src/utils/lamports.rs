use anchor_lang::prelude::*;
use solana_program::native_token::LAMPORTS_PER_SOL;
use crate::error::MarketError;

/// Lamports as whole SOL, for log lines only.
pub fn to_sol(lamports: u64) -> f64 {
    lamports as f64 / LAMPORTS_PER_SOL as f64
}

/// Lamports held above the rent-exempt minimum, i.e. the value an escrow or
/// treasury account actually holds on behalf of the protocol.
pub fn free_balance(info: &AccountInfo) -> Result<u64> {
    let reserve = Rent::get()?.minimum_balance(info.data_len());
    Ok(info.lamports().saturating_sub(reserve))
}

/// Moves lamports out of a program-owned account by direct debit.
pub fn transfer_lamports(from: &AccountInfo, to: &AccountInfo, amount: u64) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(MarketError::ArithmeticOverflow)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(MarketError::ArithmeticOverflow)?;

    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_sol_formats_log_amounts() {
        assert_eq!(format!("{}", to_sol(2_940_000_000)), "2.94");
        assert_eq!(format!("{}", to_sol(60_000_000)), "0.06");
        assert_eq!(format!("{}", to_sol(1_000_000)), "0.001");
        assert_eq!(to_sol(0), 0.0);
    }
}
