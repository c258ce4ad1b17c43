use crate::types::SaleConfig;

/// Opening and closing instants are both inside the sale window.
pub fn is_open(config: &SaleConfig, now: u64) -> bool {
    now >= config.opening_time && now <= config.closing_time
}

pub fn has_closed(config: &SaleConfig, now: u64) -> bool {
    now > config.closing_time
}

pub fn is_unlocked(config: &SaleConfig, now: u64) -> bool {
    now > config.unlock_time
}
