//! Domain logic - pure naming rules independent of git operations

pub mod branch;
pub mod tag;
pub mod ticket;

pub use branch::BranchName;
pub use tag::{QaTag, TagPrefix};
pub use ticket::{TicketId, TicketMatcher};
