use soroban_sdk::{contractclient, Address, Env};

use crate::types::PriceData;

/// Minimal interface for the external price reference.
#[contractclient(name = "PriceOracleClient")]
pub trait PriceOracle {
    fn latest_price(env: Env) -> PriceData;
    fn decimals(env: Env) -> u32;
}

/// Minimal interface for the external escrow holding contributed value.
///
/// Deposit bookkeeping, refund accounting, and beneficiary payout all live
/// on the escrow side; the sale only drives the transitions.
#[contractclient(name = "EscrowClient")]
pub trait Escrow {
    fn deposit(env: Env, payer: Address, amount: i128);
    fn close(env: Env);
    fn beneficiary_withdraw(env: Env);
    fn enable_refunds(env: Env);
    fn withdraw(env: Env, account: Address);
}
