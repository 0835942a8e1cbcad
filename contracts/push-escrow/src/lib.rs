#![no_std]

// Push-custody OTC escrow
// Party B transfers its leg into the contract up front; swap pulls party A's
// leg against an allowance and distributes both in one call.

mod pushescrow;

pub use pushescrow::{PushEscrow, PushEscrowClient};
