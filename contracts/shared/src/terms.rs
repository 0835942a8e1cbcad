use soroban_sdk::{contracttype, Address, Env};

// Storage keys
#[contracttype]
pub enum DataKey {
    Terms,
    Swapped,
}

/// Parameters of a single bilateral swap. Written once by the constructor,
/// never mutated afterwards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapTerms {
    /// Sender of token X, recipient of token Y.
    pub party_a: Address,
    /// Sender of token Y, recipient of token X.
    pub party_b: Address,
    pub token_x: Address,
    pub token_y: Address,
    pub amount_x: i128,
    pub amount_y: i128,
}

pub fn save_terms(env: &Env, terms: &SwapTerms) {
    env.storage().instance().set(&DataKey::Terms, terms);
    env.storage().instance().set(&DataKey::Swapped, &false);
}

pub fn load_terms(env: &Env) -> SwapTerms {
    env.storage()
        .instance()
        .get(&DataKey::Terms)
        .unwrap_or_else(|| panic!("Terms not set"))
}

pub fn is_swapped(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::Swapped)
        .unwrap_or(false)
}

/// Latches the instance as settled. Transitions false -> true exactly once;
/// callers must have checked `require_not_swapped` first.
pub fn mark_swapped(env: &Env) {
    env.storage().instance().set(&DataKey::Swapped, &true);
}
