use shared::{
    is_swapped, load_terms, mark_swapped, pay_out, pull_from, require_allowance, require_balance,
    require_not_swapped, save_terms, EscrowError as Error, SwapTerms, TwoPartySwap,
};
use soroban_sdk::{contract, contractimpl, Address, Env};

#[contract]
pub struct PushEscrow;

#[contractimpl]
impl PushEscrow {
    /// Fixes the swap parameters at deployment. Party B funds the escrow
    /// afterwards with a plain transfer of `amount_y` of `token_y`; party A
    /// only grants an allowance.
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
impl TwoPartySwap for PushEscrow {
    /// Settles the swap: pulls `amount_x` of token X from party A to party B
    /// against the allowance, then pays `amount_y` of token Y to party A out
    /// of the escrow's own custody. Single-use; no caller restriction.
    fn swap(env: Env) -> Result<(), Error> {
        require_not_swapped(&env)?;
        let terms = load_terms(&env);
        require_balance(&env, &terms.token_y, terms.amount_y)?;
        require_allowance(&env, &terms.token_x, &terms.party_a, terms.amount_x)?;

        pull_from(
            &env,
            &terms.token_x,
            &terms.party_a,
            &terms.party_b,
            terms.amount_x,
        );
        pay_out(&env, &terms.token_y, &terms.party_a, terms.amount_y);
        mark_swapped(&env);
        Ok(())
    }

    fn swapped(env: Env) -> bool {
        is_swapped(&env)
    }

    fn terms(env: Env) -> SwapTerms {
        load_terms(&env)
    }
}
