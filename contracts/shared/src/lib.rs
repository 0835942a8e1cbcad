#![no_std]

// Shared library for the one-shot OTC swap escrow contracts
// Contains the swap terms type, error enum, and settlement guard helpers

pub mod settlement;
pub mod terms;

pub use settlement::{
    pay_out, pull_from, require_allowance, require_balance, require_not_swapped,
    Error as EscrowError, TwoPartySwap,
};
pub use terms::{is_swapped, load_terms, mark_swapped, save_terms, DataKey, SwapTerms};
