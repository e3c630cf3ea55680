use anchor_lang::prelude::*;
use anchor_spl::token::{self, Burn, Mint, Token, TokenAccount};
use crate::{state::*, constants::*, error::MarketError, utils::lamports::{to_sol, transfer_lamports}};

#[derive(Accounts)]
pub struct Redeem<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event.authority.as_ref(), &event.unique_id.to_le_bytes()],
        bump = event.bump,
        has_one = prize_pool,
    )]
    pub event: Account<'info, Event>,

    #[account(
        mut,
        seeds = [PRIZE_POOL_SEED, event.key().as_ref()],
        bump = prize_pool.bump,
    )]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(
        mut,
        seeds = [TREASURY_SEED],
        bump = treasury.bump,
    )]
    pub treasury: Account<'info, Treasury>,

    #[account(mut)]
    pub winner_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = user_token_account.owner == user.key() @ MarketError::Unauthorized,
        constraint = user_token_account.mint == winner_mint.key() @ MarketError::InvalidMint,
    )]
    pub user_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn redeem_handler(ctx: Context<Redeem>, choice: bool) -> Result<()> {
    ctx.accounts
        .event
        .require_share_mint(choice, &ctx.accounts.winner_mint.key())?;

    let units = ctx.accounts.user_token_account.amount;
    let payout = ctx.accounts.event.settle_claim(choice, units)?;

    // Burning the whole holding is what makes a claim exactly-once.
    token::burn(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Burn {
                mint: ctx.accounts.winner_mint.to_account_info(),
                from: ctx.accounts.user_token_account.to_account_info(),
                authority: ctx.accounts.user.to_account_info(),
            },
        ),
        units,
    )?;

    let prize_pool = ctx.accounts.prize_pool.to_account_info();
    transfer_lamports(&prize_pool, &ctx.accounts.treasury.to_account_info(), payout.fee)?;
    transfer_lamports(&prize_pool, &ctx.accounts.user.to_account_info(), payout.net)?;
    ctx.accounts.treasury.accrue(payout.fee)?;

    msg!(
        "Redeemed {} {} shares for {} SOL ({} lamports), fee {} lamports",
        units,
        if choice { "Yes" } else { "No" },
        to_sol(payout.net),
        payout.net,
        payout.fee
    );
    emit!(WinningsRedeemed {
        event: ctx.accounts.event.key(),
        user: ctx.accounts.user.key(),
        units,
        payout: payout.net,
        fee: payout.fee,
    });

    Ok(())
}

#[event]
pub struct WinningsRedeemed {
    pub event: Pubkey,
    pub user: Pubkey,
    pub units: u64,
    pub payout: u64,
    pub fee: u64,
}
