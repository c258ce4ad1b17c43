use soroban_sdk::{symbol_short, Address, Env};

pub fn emit_purchase(
    env: &Env,
    purchaser: &Address,
    beneficiary: &Address,
    value: i128,
    tokens: i128,
) {
    env.events().publish(
        (symbol_short!("purchase"),),
        (purchaser.clone(), beneficiary.clone(), value, tokens),
    );
}

// Occurrence only; the terminal outcome is readable from storage.
pub fn emit_finalized(env: &Env) {
    env.events().publish((symbol_short!("finalized"),), ());
}
