use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod binary_market {
    use super::*;

    // One-time setup of the global fee treasury.
    pub fn initialize_treasury(ctx: Context<InitializeTreasury>) -> Result<()> {
        initialize_treasury::initialize_treasury_handler(ctx)
    }

    pub fn create_event(
        ctx: Context<CreateEvent>,
        unique_id: u64,
        description: String,
        deadline: i64,
    ) -> Result<()> {
        create_event::create_event_handler(ctx, unique_id, description, deadline)
    }

    pub fn bet(ctx: Context<Bet>, amount: u64, choice: bool) -> Result<()> {
        bet::bet_handler(ctx, amount, choice)
    }

    // Authority-only, once the deadline has passed.
    pub fn update_result(ctx: Context<UpdateResult>, result: bool) -> Result<()> {
        update_result::update_result_handler(ctx, result)
    }

    pub fn redeem(ctx: Context<Redeem>, choice: bool) -> Result<()> {
        redeem::redeem_handler(ctx, choice)
    }

    pub fn withdraw_fees(ctx: Context<WithdrawFees>, amount: u64) -> Result<()> {
        withdraw_fees::withdraw_fees_handler(ctx, amount)
    }
}
