use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env};

use crate::errors::Error;
use crate::events;
use crate::interfaces::EscrowClient;
use crate::phase;
use crate::price;
use crate::storage::*;
use crate::types::{Outcome, SaleConfig, SaleStatus};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Oracle-Priced Capped Crowdsale with Goal-Based Finalization"
);

#[contract]
pub struct CrowdsaleContract;

#[contractimpl]
impl CrowdsaleContract {
    /// Create the sale. Callable exactly once.
    ///
    /// Timestamps must satisfy `opening <= now < closing < unlock`; rate,
    /// cap, and goal must be strictly positive.
    #[allow(clippy::too_many_arguments)]
    pub fn initialize(
        env: Env,
        rate: i128,
        cap: i128,
        goal: i128,
        opening_time: u64,
        closing_time: u64,
        unlock_time: u64,
        wallet: Address,
        token: Address,
        oracle: Address,
        escrow: Address,
    ) -> Result<(), Error> {
        if has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        let now = env.ledger().timestamp();
        if rate <= 0 || cap <= 0 || goal <= 0 {
            return Err(Error::InvalidConfig);
        }
        if !(opening_time <= now && now < closing_time && closing_time < unlock_time) {
            return Err(Error::InvalidConfig);
        }

        let config = SaleConfig {
            rate,
            cap,
            goal,
            opening_time,
            closing_time,
            unlock_time,
            wallet,
            token,
            oracle,
            escrow,
        };
        set_config(&env, &config);
        set_status(&env, &SaleStatus::Pending);
        set_total_raised(&env, 0);
        set_total_sold(&env, 0);
        Ok(())
    }

    /// Asset units a contribution of `value` would buy at the current
    /// oracle price. Read-only, callable in any phase.
    pub fn estimate(env: Env, value: i128) -> Result<i128, Error> {
        let config = get_config(&env)?;
        price::estimate(&env, &config, value)
    }

    /// Exchange `value` for asset units credited to `beneficiary`.
    ///
    /// The purchaser pays and is the account attributed in the escrow; the
    /// beneficiary receives the allocation. The cap check and all three
    /// counter updates happen within this single invocation, so no pair of
    /// contributions can jointly oversell the cap.
    pub fn contribute(
        env: Env,
        purchaser: Address,
        beneficiary: Address,
        value: i128,
    ) -> Result<i128, Error> {
        purchaser.require_auth();

        let config = get_config(&env)?;
        if beneficiary == env.current_contract_address() {
            return Err(Error::InvalidBeneficiary);
        }
        if value <= 0 {
            return Err(Error::ZeroValue);
        }
        if !phase::is_open(&config, env.ledger().timestamp()) {
            return Err(Error::SaleNotOpen);
        }

        let tokens = price::estimate(&env, &config, value)?;
        let sold = get_total_sold(&env)
            .checked_add(tokens)
            .ok_or(Error::Overflow)?;
        if sold > config.cap {
            return Err(Error::CapExceeded);
        }

        let raised = get_total_raised(&env)
            .checked_add(value)
            .ok_or(Error::Overflow)?;
        let balance = get_balance(&env, &beneficiary)
            .checked_add(tokens)
            .ok_or(Error::Overflow)?;
        set_total_sold(&env, sold);
        set_total_raised(&env, raised);
        set_balance(&env, &beneficiary, balance);

        EscrowClient::new(&env, &config.escrow).deposit(&purchaser, &value);

        events::emit_purchase(&env, &purchaser, &beneficiary, value, tokens);
        Ok(tokens)
    }

    /// Lock in the sale outcome. Callable by anyone, exactly once, after
    /// the closing time.
    ///
    /// Success releases the escrowed value to the wallet and burns unsold
    /// units; failure enables per-contributor refunds and recovers the full
    /// cap of units to the wallet.
    pub fn finalize(env: Env) -> Result<(), Error> {
        let config = get_config(&env)?;
        if get_status(&env) != SaleStatus::Pending {
            return Err(Error::AlreadyFinalized);
        }
        if !phase::has_closed(&config, env.ledger().timestamp()) {
            return Err(Error::SaleNotClosed);
        }

        let sold = get_total_sold(&env);
        let outcome = if sold >= config.goal {
            Outcome::Success
        } else {
            Outcome::Failure
        };
        // Terminal state first; external calls cannot re-enter finalization.
        set_status(&env, &SaleStatus::Finalized(outcome));

        let escrow = EscrowClient::new(&env, &config.escrow);
        let asset = token::Client::new(&env, &config.token);
        let this = env.current_contract_address();
        match outcome {
            Outcome::Success => {
                escrow.close();
                escrow.beneficiary_withdraw();
                let unsold = config.cap - sold;
                if unsold > 0 {
                    asset.burn(&this, &unsold);
                }
            }
            Outcome::Failure => {
                escrow.enable_refunds();
                asset.transfer(&this, &config.wallet, &config.cap);
            }
        }

        events::emit_finalized(&env);
        Ok(())
    }

    /// Pay out `beneficiary`'s pending allocation after a successful sale,
    /// once the unlock time has passed. Each allocation pays exactly once.
    pub fn withdraw(env: Env, beneficiary: Address) -> Result<i128, Error> {
        let config = get_config(&env)?;
        match get_status(&env) {
            SaleStatus::Pending => return Err(Error::NotFinalized),
            SaleStatus::Finalized(Outcome::Failure) => return Err(Error::GoalNotReached),
            SaleStatus::Finalized(Outcome::Success) => {}
        }
        let now = env.ledger().timestamp();
        if !phase::has_closed(&config, now) {
            return Err(Error::SaleNotClosed);
        }
        if !phase::is_unlocked(&config, now) {
            return Err(Error::TokensLocked);
        }

        let amount = get_balance(&env, &beneficiary);
        if amount == 0 {
            return Err(Error::NoBalance);
        }
        // Zero before transfer so a re-entrant call finds no balance.
        set_balance(&env, &beneficiary, 0);
        token::Client::new(&env, &config.token).transfer(
            &env.current_contract_address(),
            &beneficiary,
            &amount,
        );
        Ok(amount)
    }

    /// Return `account`'s escrowed value after a failed sale. The escrow
    /// tracks and zeroes the account's deposits itself.
    pub fn claim_refund(env: Env, account: Address) -> Result<(), Error> {
        let config = get_config(&env)?;
        match get_status(&env) {
            SaleStatus::Pending => return Err(Error::NotFinalized),
            SaleStatus::Finalized(Outcome::Success) => return Err(Error::GoalReached),
            SaleStatus::Finalized(Outcome::Failure) => {}
        }
        EscrowClient::new(&env, &config.escrow).withdraw(&account);
        Ok(())
    }

    // View functions
    pub fn get_config(env: Env) -> Result<SaleConfig, Error> {
        get_config(&env)
    }

    pub fn total_raised(env: Env) -> i128 {
        get_total_raised(&env)
    }

    pub fn total_sold(env: Env) -> i128 {
        get_total_sold(&env)
    }

    pub fn is_finalized(env: Env) -> bool {
        get_status(&env) != SaleStatus::Pending
    }

    pub fn outcome(env: Env) -> Option<Outcome> {
        match get_status(&env) {
            SaleStatus::Pending => None,
            SaleStatus::Finalized(outcome) => Some(outcome),
        }
    }

    pub fn goal_reached(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(get_total_sold(&env) >= config.goal)
    }

    pub fn cap_reached(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(get_total_sold(&env) >= config.cap)
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        get_balance(&env, &account)
    }

    pub fn is_open(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(phase::is_open(&config, env.ledger().timestamp()))
    }

    pub fn has_closed(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(phase::has_closed(&config, env.ledger().timestamp()))
    }

    pub fn is_unlocked(env: Env) -> Result<bool, Error> {
        let config = get_config(&env)?;
        Ok(phase::is_unlocked(&config, env.ledger().timestamp()))
    }
}
