#![no_std]

// Approval-only OTC escrow
// Neither party gives up custody in advance; both grant allowances and swap
// executes the two transfer legs atomically.

mod approvalescrow;

pub use approvalescrow::{ApprovalEscrow, ApprovalEscrowClient};
