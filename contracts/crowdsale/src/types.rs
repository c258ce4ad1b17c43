use soroban_sdk::{contracttype, Address};

/// Immutable sale parameters, written once by `initialize`.
#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub rate: i128, // asset units per monetary unit, scaled by 1e18
    pub cap: i128,  // max asset units sellable
    pub goal: i128, // success threshold, compared against units sold
    pub opening_time: u64,
    pub closing_time: u64,
    pub unlock_time: u64,
    pub wallet: Address, // beneficiary wallet receiving escrowed value / recovered units
    pub token: Address,  // asset contract holding the sellable units
    pub oracle: Address,
    pub escrow: Address,
}

/// Terminal outcome of a finalized sale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum Outcome {
    Success,
    Failure,
}

/// Sale lifecycle. Constructed as `Pending`, moved to `Finalized` exactly once.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SaleStatus {
    Pending,
    Finalized(Outcome),
}

/// Latest oracle reading: price plus the ledger time it was observed.
#[derive(Clone)]
#[contracttype]
pub struct PriceData {
    pub price: i128,
    pub timestamp: u64,
}

#[contracttype]
pub enum DataKey {
    Config,
    Status,
    TotalRaised,
    TotalSold,
    Balance(Address),
}
