use anchor_lang::prelude::*;
use crate::{state::*, constants::*, error::MarketError, utils::lamports::{to_sol, transfer_lamports}};

#[derive(Accounts)]
pub struct WithdrawFees<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
        has_one = authority @ MarketError::Unauthorized
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub destination: SystemAccount<'info>,
}

pub fn withdraw_fees_handler(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
    ctx.accounts.treasury.record_withdrawal(amount)?;

    transfer_lamports(
        &ctx.accounts.treasury.to_account_info(),
        &ctx.accounts.destination.to_account_info(),
        amount,
    )?;

    msg!(
        "Withdrew {} SOL ({} lamports) of fees to {}, {} lamports left",
        to_sol(amount),
        amount,
        ctx.accounts.destination.key(),
        ctx.accounts.treasury.withdrawable()
    );
    emit!(FeesWithdrawn {
        destination: ctx.accounts.destination.key(),
        amount,
        remaining: ctx.accounts.treasury.withdrawable(),
    });

    Ok(())
}

#[event]
pub struct FeesWithdrawn {
    pub destination: Pubkey,
    pub amount: u64,
    pub remaining: u64,
}
