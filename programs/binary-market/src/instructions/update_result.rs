use anchor_lang::prelude::*;
use anchor_spl::token::spl_token::instruction::AuthorityType;
use anchor_spl::token::{self, Mint, SetAuthority, Token};
use solana_program::sysvar::clock::Clock;
use crate::{state::*, constants::*, utils::lamports::{free_balance, to_sol}};

#[derive(Accounts)]
pub struct UpdateResult<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [EVENT_SEED, event.authority.as_ref(), &event.unique_id.to_le_bytes()],
        bump = event.bump,
        has_one = yes_mint,
        has_one = no_mint,
        has_one = prize_pool,
    )]
    pub event: Account<'info, Event>,

    #[account(
        seeds = [PRIZE_POOL_SEED, event.key().as_ref()],
        bump = prize_pool.bump,
    )]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(mut)]
    pub yes_mint: Account<'info, Mint>,

    #[account(mut)]
    pub no_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

pub fn update_result_handler(ctx: Context<UpdateResult>, result: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let caller = ctx.accounts.authority.key();
    let pool_balance = free_balance(&ctx.accounts.prize_pool.to_account_info())?;

    ctx.accounts.event.resolve(&caller, now, result, pool_balance)?;

    let event = &ctx.accounts.event;
    let unique_id_bytes = event.unique_id.to_le_bytes();
    let bump = [event.bump];
    let seeds: &[&[u8]] = &[EVENT_SEED, event.authority.as_ref(), &unique_id_bytes, &bump];

    // Freeze issuance on both sides; supplies are final from here on.
    for mint in [&ctx.accounts.yes_mint, &ctx.accounts.no_mint] {
        token::set_authority(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                SetAuthority {
                    current_authority: event.to_account_info(),
                    account_or_mint: mint.to_account_info(),
                },
                &[seeds],
            ),
            AuthorityType::MintTokens,
            None,
        )?;
    }

    msg!(
        "Event {} resolved: {} wins (Yes supply: {}, No supply: {}, pool: {} SOL / {} lamports)",
        event.unique_id,
        if result { "Yes" } else { "No" },
        event.yes_supply,
        event.no_supply,
        to_sol(event.total_pool),
        event.total_pool
    );
    emit!(EventResolved {
        event: event.key(),
        result,
        yes_supply: event.yes_supply,
        no_supply: event.no_supply,
        total_pool: event.total_pool,
    });

    Ok(())
}

#[event]
pub struct EventResolved {
    pub event: Pubkey,
    pub result: bool,
    pub yes_supply: u64,
    pub no_supply: u64,
    pub total_pool: u64,
}
