use anchor_lang::prelude::*;
use crate::{
    constants::*,
    error::MarketError,
    utils::payout::{compute_payout, Payout},
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EventStatus {
    Active,
    Resolved,
}

#[account]
#[derive(Debug)]
pub struct Event {
    pub authority: Pubkey,
    pub unique_id: u64,
    pub description: String,
    pub deadline: i64,
    pub status: EventStatus,
    pub result: Option<bool>,
    pub yes_mint: Pubkey,
    pub no_mint: Pubkey,
    pub prize_pool: Pubkey,
    pub yes_supply: u64,
    pub no_supply: u64,
    // Escrow balance frozen at resolution; the base every claim is priced on.
    pub total_pool: u64,
    // Sum of gross entitlements paid out so far.
    pub redeemed_amount: u64,
    pub bump: u8,
}

impl Event {
    pub const LEN: usize = 8 + // discriminator
        32 + // authority
        8 + // unique_id
        4 + MAX_DESCRIPTION_LEN + // description
        8 + // deadline
        1 + // status
        1 + 1 + // result
        32 + // yes_mint
        32 + // no_mint
        32 + // prize_pool
        8 + // yes_supply
        8 + // no_supply
        8 + // total_pool
        8 + // redeemed_amount
        1; // bump

    /// Validates creation inputs and returns a fresh, unfunded event. Share
    /// mints and escrow are bound by the caller once provisioned.
    pub fn open(
        authority: Pubkey,
        unique_id: u64,
        description: String,
        deadline: i64,
        now: i64,
    ) -> Result<Self> {
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            MarketError::DescriptionTooLong
        );
        require!(deadline > now, MarketError::InvalidDeadline);

        Ok(Self {
            authority,
            unique_id,
            description,
            deadline,
            status: EventStatus::Active,
            result: None,
            yes_mint: Pubkey::default(),
            no_mint: Pubkey::default(),
            prize_pool: Pubkey::default(),
            yes_supply: 0,
            no_supply: 0,
            total_pool: 0,
            redeemed_amount: 0,
            bump: 0,
        })
    }

    pub fn share_mint(&self, choice: bool) -> Pubkey {
        if choice {
            self.yes_mint
        } else {
            self.no_mint
        }
    }

    pub fn require_share_mint(&self, choice: bool, mint: &Pubkey) -> Result<()> {
        require_keys_eq!(*mint, self.share_mint(choice), MarketError::InvalidMint);
        Ok(())
    }

    pub fn supply(&self, choice: bool) -> u64 {
        if choice {
            self.yes_supply
        } else {
            self.no_supply
        }
    }

    pub fn staked_total(&self) -> Result<u64> {
        Ok(self
            .yes_supply
            .checked_add(self.no_supply)
            .ok_or(MarketError::ArithmeticOverflow)?)
    }

    /// Share of the pool staked on `choice`, in basis points. `None` while
    /// nothing has been wagered.
    pub fn implied_odds_bps(&self, choice: bool) -> Option<u64> {
        let total = (self.yes_supply as u128) + (self.no_supply as u128);
        if total == 0 {
            return None;
        }
        let side = self.supply(choice) as u128;
        Some((side * FEE_DENOMINATOR as u128 / total) as u64)
    }

    pub fn record_wager(&mut self, now: i64, amount: u64, choice: bool) -> Result<()> {
        require!(
            self.status == EventStatus::Active,
            MarketError::EventNotActive
        );
        require!(now < self.deadline, MarketError::EventExpired);
        require!(amount >= MIN_BET, MarketError::BetAmountTooLow);

        let supply = if choice {
            &mut self.yes_supply
        } else {
            &mut self.no_supply
        };
        *supply = supply
            .checked_add(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Freezes the outcome. `pool_balance` is the escrow's current holding and
    /// becomes the fixed base for every later claim.
    pub fn resolve(
        &mut self,
        caller: &Pubkey,
        now: i64,
        result: bool,
        pool_balance: u64,
    ) -> Result<()> {
        require_keys_eq!(*caller, self.authority, MarketError::Unauthorized);
        require!(now >= self.deadline, MarketError::DeadlineNotReached);
        require!(
            self.status == EventStatus::Active,
            MarketError::EventAlreadyResolved
        );

        self.status = EventStatus::Resolved;
        self.result = Some(result);
        self.total_pool = pool_balance;
        Ok(())
    }

    /// Prices a claim of `units` winning shares and books it against the
    /// pool. The caller burns the shares and moves the lamports.
    pub fn settle_claim(&mut self, choice: bool, units: u64) -> Result<Payout> {
        require!(
            self.status == EventStatus::Resolved,
            MarketError::EventNotResolved
        );
        let result = self.result.ok_or(MarketError::EventNotResolved)?;
        require!(choice == result, MarketError::YouLost);

        // Checked ahead of the holding: with no winning supply the only share
        // account a caller can present is an empty one.
        let winning_supply = self.supply(result);
        require!(winning_supply > 0, MarketError::NoWinnerSupply);
        require!(units > 0, MarketError::NoTokensToRedeem);

        let payout = compute_payout(self.total_pool, units, winning_supply)?;

        let redeemed = self
            .redeemed_amount
            .checked_add(payout.gross)
            .ok_or(MarketError::ArithmeticOverflow)?;
        require!(
            redeemed <= self.total_pool,
            MarketError::ArithmeticOverflow
        );
        self.redeemed_amount = redeemed;

        Ok(payout)
    }
}

/// Program-owned escrow holding the lamports staked on one event.
#[account]
pub struct PrizePool {
    pub event: Pubkey,
    pub bump: u8,
}

impl PrizePool {
    pub const LEN: usize = 8 + 32 + 1;
}

#[account]
pub struct Treasury {
    pub authority: Pubkey,
    pub total_fees: u64,
    pub total_withdrawn: u64,
    pub bump: u8,
}

impl Treasury {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 1;

    pub fn accrue(&mut self, fee: u64) -> Result<()> {
        self.total_fees = self
            .total_fees
            .checked_add(fee)
            .ok_or(MarketError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn withdrawable(&self) -> u64 {
        self.total_fees.saturating_sub(self.total_withdrawn)
    }

    pub fn record_withdrawal(&mut self, amount: u64) -> Result<()> {
        require!(
            amount > 0 && amount <= self.withdrawable(),
            MarketError::InsufficientFees
        );
        self.total_withdrawn = self
            .total_withdrawn
            .checked_add(amount)
            .ok_or(MarketError::ArithmeticOverflow)?;
        Ok(())
    }
}
