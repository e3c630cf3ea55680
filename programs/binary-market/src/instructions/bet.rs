use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{self, Mint, MintTo, Token, TokenAccount};
use solana_program::sysvar::clock::Clock;
use crate::{state::*, constants::*, utils::lamports::to_sol};

#[derive(Accounts)]
pub struct Bet<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

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
        mut,
        seeds = [PRIZE_POOL_SEED, event.key().as_ref()],
        bump = prize_pool.bump,
    )]
    pub prize_pool: Account<'info, PrizePool>,

    #[account(mut)]
    pub yes_mint: Account<'info, Mint>,

    #[account(mut)]
    pub no_mint: Account<'info, Mint>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = yes_mint,
        associated_token::authority = user,
    )]
    pub user_yes_ata: Account<'info, TokenAccount>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = no_mint,
        associated_token::authority = user,
    )]
    pub user_no_ata: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn bet_handler(ctx: Context<Bet>, amount: u64, choice: bool) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    ctx.accounts.event.record_wager(now, amount, choice)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.user.to_account_info(),
                to: ctx.accounts.prize_pool.to_account_info(),
            },
        ),
        amount,
    )?;

    let (mint, holding) = if choice {
        (
            ctx.accounts.yes_mint.to_account_info(),
            ctx.accounts.user_yes_ata.to_account_info(),
        )
    } else {
        (
            ctx.accounts.no_mint.to_account_info(),
            ctx.accounts.user_no_ata.to_account_info(),
        )
    };

    let event = &ctx.accounts.event;
    let unique_id_bytes = event.unique_id.to_le_bytes();
    let bump = [event.bump];
    let seeds: &[&[u8]] = &[EVENT_SEED, event.authority.as_ref(), &unique_id_bytes, &bump];

    // Shares are issued 1:1 with the lamports staked.
    token::mint_to(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            MintTo {
                mint,
                to: holding,
                authority: event.to_account_info(),
            },
            &[seeds],
        ),
        amount,
    )?;

    msg!(
        "Bet placed: {} SOL ({} lamports) on {}",
        to_sol(amount),
        amount,
        if choice { "Yes" } else { "No" }
    );
    emit!(BetPlaced {
        event: event.key(),
        user: ctx.accounts.user.key(),
        amount,
        choice,
        yes_supply: event.yes_supply,
        no_supply: event.no_supply,
    });

    Ok(())
}

#[event]
pub struct BetPlaced {
    pub event: Pubkey,
    pub user: Pubkey,
    pub amount: u64,
    pub choice: bool,
    pub yes_supply: u64,
    pub no_supply: u64,
}
