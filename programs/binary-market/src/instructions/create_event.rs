use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token};
use solana_program::sysvar::clock::Clock;
use crate::{state::*, constants::*};

#[derive(Accounts)]
#[instruction(unique_id: u64)]
pub struct CreateEvent<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Event::LEN,
        seeds = [EVENT_SEED, authority.key().as_ref(), &unique_id.to_le_bytes()],
        bump
    )]
    pub event: Account<'info, Event>,

    #[account(
        init,
        payer = authority,
        space = PrizePool::LEN,
        seeds = [PRIZE_POOL_SEED, event.key().as_ref()],
        bump
    )]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(
        init,
        payer = authority,
        mint::decimals = SHARE_DECIMALS,
        mint::authority = event,
    )]
    pub yes_mint: Account<'info, Mint>,

    #[account(
        init,
        payer = authority,
        mint::decimals = SHARE_DECIMALS,
        mint::authority = event,
    )]
    pub no_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

pub fn create_event_handler(
    ctx: Context<CreateEvent>,
    unique_id: u64,
    description: String,
    deadline: i64,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let authority = ctx.accounts.authority.key();
    let event_key = ctx.accounts.event.key();

    let mut event = Event::open(authority, unique_id, description, deadline, now)?;
    event.yes_mint = ctx.accounts.yes_mint.key();
    event.no_mint = ctx.accounts.no_mint.key();
    event.prize_pool = ctx.accounts.prize_pool.key();
    event.bump = ctx.bumps.event;

    ctx.accounts.prize_pool.set_inner(PrizePool {
        event: event_key,
        bump: ctx.bumps.prize_pool,
    });

    msg!("Event created with ID: {}", unique_id);
    emit!(EventCreated {
        event: event_key,
        authority,
        unique_id,
        description: event.description.clone(),
        deadline,
        yes_mint: event.yes_mint,
        no_mint: event.no_mint,
        prize_pool: event.prize_pool,
    });

    ctx.accounts.event.set_inner(event);
    Ok(())
}

#[event]
pub struct EventCreated {
    pub event: Pubkey,
    pub authority: Pubkey,
    pub unique_id: u64,
    pub description: String,
    pub deadline: i64,
    pub yes_mint: Pubkey,
    pub no_mint: Pubkey,
    pub prize_pool: Pubkey,
}
