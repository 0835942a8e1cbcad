use soroban_sdk::{contracterror, token, Address, Env};

use crate::terms::{is_swapped, SwapTerms};

// Errors
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
pub enum Error {
    AlreadySwapped = 1,
    InsufficientAllowance = 2,
    InsufficientBalance = 3,
}

/// Interface shared by both escrow variants. `swap` is deliberately
/// caller-unrestricted: anyone may execute once the preconditions hold,
/// so either counterparty's proposal execution (or a neutral bot) can
/// trigger settlement.
pub trait TwoPartySwap {
    fn swap(env: Env) -> Result<(), Error>;
    fn swapped(env: Env) -> bool;
    fn terms(env: Env) -> SwapTerms;
}

// Guard helpers

pub fn require_not_swapped(env: &Env) -> Result<(), Error> {
    if is_swapped(env) {
        return Err(Error::AlreadySwapped);
    }
    Ok(())
}

/// `owner` must have granted this contract a live allowance of at least
/// `amount` on `token`. Read at call time, so a revocation before inclusion
/// fails the swap here.
pub fn require_allowance(
    env: &Env,
    token: &Address,
    owner: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    if client.allowance(owner, &env.current_contract_address()) < amount {
        return Err(Error::InsufficientAllowance);
    }
    Ok(())
}

/// The escrow's own holding of `token` must cover `amount`.
pub fn require_balance(env: &Env, token: &Address, amount: i128) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    if client.balance(&env.current_contract_address()) < amount {
        return Err(Error::InsufficientBalance);
    }
    Ok(())
}

// Token movement

/// Pull `amount` of `token` from `from` to `to` against the allowance
/// granted to this contract.
pub fn pull_from(env: &Env, token: &Address, from: &Address, to: &Address, amount: i128) {
    let client = token::Client::new(env, token);
    client.transfer_from(&env.current_contract_address(), from, to, &amount);
}

/// Pay `amount` of `token` to `to` out of the escrow's own balance.
pub fn pay_out(env: &Env, token: &Address, to: &Address, amount: i128) {
    let client = token::Client::new(env, token);
    client.transfer(&env.current_contract_address(), to, &amount);
}
