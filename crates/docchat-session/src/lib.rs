//! Document session store for DocChat.
//!
//! Tracks the documents uploaded in one user session, runs type-dispatched
//! extraction on upload, and assembles the stored texts into a single
//! labeled context for question answering.

pub mod context;
pub mod error;
pub mod outcome;
pub mod store;

pub use error::SessionError;
pub use outcome::{Outcome, Severity};
pub use store::DocumentSession;
