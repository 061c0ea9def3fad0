//! Property-based tests for the clause assistant
//!
//! ## Test Modules
//!
//! - `intake_props`: picker, drop and paste normalization
//!   - Document file name is the path's final component
//!   - Quoting and `file://` prefixes do not change the file name
//!   - Whitespace-only pastes never produce a source
//!
//! - `session_props`: session state machine under random input sequences
//!   - Chat log grows in user/assistant pairs with the constant reply
//!   - The menu is only ever open on the analysis page
//!   - Activating a clause always lands on the chat view
//!
//! By default, proptest runs 256 cases per property. Override with
//! `PROPTEST_CASES`.

mod intake_props;
mod session_props;
