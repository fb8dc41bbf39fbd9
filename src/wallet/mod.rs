//! Mock Wallet
//!
//! A simulated wallet-connect flow. Connecting waits for the configured
//! latency and then installs a fixed placeholder account; nothing touches a
//! real chain.

mod session;
mod state;

pub use session::{short_address, NetworkInfo, WalletSession, DEMO_ADDRESS, DEMO_BALANCE};
pub use state::WalletState;
