pub mod analysis;
pub mod chat;
pub mod intake;
pub mod logging;
pub mod session;
