use anchor_lang::prelude::*;
use crate::{state::*, constants::*};

#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = Treasury::LEN,
        seeds = [TREASURY_SEED],
        bump
    )]
    pub treasury: Account<'info, Treasury>,

    pub system_program: Program<'info, System>,
}

pub fn initialize_treasury_handler(ctx: Context<InitializeTreasury>) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    ctx.accounts.treasury.set_inner(Treasury {
        authority,
        total_fees: 0,
        total_withdrawn: 0,
        bump: ctx.bumps.treasury,
    });

    msg!("Treasury initialized with authority: {}", authority);
    emit!(TreasuryInitialized { authority });
    Ok(())
}

#[event]
pub struct TreasuryInitialized {
    pub authority: Pubkey,
}
