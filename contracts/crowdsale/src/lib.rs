#![no_std]

mod contract;
mod errors;
mod events;
mod interfaces;
mod phase;
mod price;
mod storage;
mod types;


pub use contract::{CrowdsaleContract, CrowdsaleContractClient};
pub use errors::Error;
pub use interfaces::{Escrow, PriceOracle};
pub use types::{Outcome, PriceData, SaleConfig, SaleStatus};
