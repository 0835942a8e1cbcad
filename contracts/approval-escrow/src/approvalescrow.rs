use shared::{
    is_swapped, load_terms, mark_swapped, pull_from, require_allowance, require_not_swapped,
    save_terms, EscrowError as Error, SwapTerms, TwoPartySwap,
};
use soroban_sdk::{contract, contractimpl, symbol_short, Address, Env};

#[contract]
pub struct ApprovalEscrow;

#[contractimpl]
impl ApprovalEscrow {
    /// Fixes the swap parameters at deployment. Each party grants the escrow
    /// an allowance on its own token; no funds are held here before `swap`.
    pub fn __constructor(
        env: Env,
        party_a: Address,
        party_b: Address,
        token_x: Address,
        token_y: Address,
        amount_x: i128,
        amount_y: i128,
    ) {
        save_terms(
            &env,
            &SwapTerms {
                party_a,
                party_b,
                token_x,
                token_y,
                amount_x,
                amount_y,
            },
        );
    }
}

#[contractimpl]
impl TwoPartySwap for ApprovalEscrow {
    /// Settles the swap: pulls `amount_x` from party A to party B and
    /// `amount_y` from party B to party A, both against live allowances, then
    /// publishes the completion event. Single-use; no caller restriction.
    fn swap(env: Env) -> Result<(), Error> {
        require_not_swapped(&env)?;
        let terms = load_terms(&env);
        require_allowance(&env, &terms.token_x, &terms.party_a, terms.amount_x)?;
        require_allowance(&env, &terms.token_y, &terms.party_b, terms.amount_y)?;

        pull_from(
            &env,
            &terms.token_x,
            &terms.party_a,
            &terms.party_b,
            terms.amount_x,
        );
        pull_from(
            &env,
            &terms.token_y,
            &terms.party_b,
            &terms.party_a,
            terms.amount_y,
        );
        mark_swapped(&env);
        env.events().publish(
            (symbol_short!("swap"),),
            (terms.amount_x, terms.amount_y),
        );
        Ok(())
    }

    fn swapped(env: Env) -> bool {
        is_swapped(&env)
    }

    fn terms(env: Env) -> SwapTerms {
        load_terms(&env)
    }
}
