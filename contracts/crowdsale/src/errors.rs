use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidConfig = 3,
    InvalidBeneficiary = 4,
    ZeroValue = 5,
    SaleNotOpen = 6,
    CapExceeded = 7,
    PriceUnavailable = 8,
    Overflow = 9,
    AlreadyFinalized = 10,
    SaleNotClosed = 11,
    NotFinalized = 12,
    GoalNotReached = 13,
    GoalReached = 14,
    TokensLocked = 15,
    NoBalance = 16,
}
