//! Wallet session record

use serde::Serialize;

/// Placeholder account installed by a mock connect
pub const DEMO_ADDRESS: &str = "0x1234567890abcdef1234567890abcdef12345678";

/// Placeholder balance shown for the mock account
pub const DEMO_BALANCE: &str = "1,000.00";

const EMPTY_BALANCE: &str = "0";

/// Network the mock wallet reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkInfo {
    pub name: String,
    pub chain_id: u64,
}

impl NetworkInfo {
    fn demo() -> Self {
        Self {
            name: "demo".to_string(),
            chain_id: 1,
        }
    }
}

/// A simulated wallet connection.
///
/// Fields are private so a session can only be built through
/// [`WalletSession::connected`] or [`WalletSession::disconnected`], which
/// keeps `connected` and `address` in agreement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WalletSession {
    address: Option<String>,
    balance_display: String,
    connected: bool,
    network: Option<NetworkInfo>,
}

impl WalletSession {
    /// The initial, unconnected session
    pub fn disconnected() -> Self {
        Self {
            address: None,
            balance_display: EMPTY_BALANCE.to_string(),
            connected: false,
            network: None,
        }
    }

    /// A connected session for the given account
    pub fn connected(address: impl Into<String>, balance_display: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            balance_display: balance_display.into(),
            connected: true,
            network: Some(NetworkInfo::demo()),
        }
    }

    /// The fixed demo account
    pub fn demo() -> Self {
        Self::connected(DEMO_ADDRESS, DEMO_BALANCE)
    }

    pub fn address(&self) -> Option<&str> {
        self.address.as_deref()
    }

    pub fn balance_display(&self) -> &str {
        &self.balance_display
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn network(&self) -> Option<&NetworkInfo> {
        self.network.as_ref()
    }
}

impl Default for WalletSession {
    fn default() -> Self {
        Self::disconnected()
    }
}

/// Shorten an address to `0x` plus `chars` leading characters, an ellipsis,
/// and `chars` trailing characters.
///
/// Addresses too short to shorten are returned unchanged.
pub fn short_address(address: &str, chars: usize) -> String {
    if address.is_empty() {
        return String::new();
    }
    let head = chars + 2;
    if address.len() <= head + chars || !address.is_ascii() {
        return address.to_string();
    }
    format!("{}...{}", &address[..head], &address[address.len() - chars..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnected_session() {
        let session = WalletSession::disconnected();
        assert!(!session.is_connected());
        assert!(session.address().is_none());
        assert_eq!(session.balance_display(), "0");
        assert!(session.network().is_none());
    }

    #[test]
    fn test_demo_session() {
        let session = WalletSession::demo();
        assert!(session.is_connected());
        assert_eq!(session.address(), Some(DEMO_ADDRESS));
        assert_eq!(session.balance_display(), "1,000.00");
        assert_eq!(session.network().unwrap().chain_id, 1);
    }

    #[test]
    fn test_short_address() {
        assert_eq!(short_address(DEMO_ADDRESS, 4), "0x1234...5678");
        assert_eq!(short_address(DEMO_ADDRESS, 6), "0x123456...345678");
        assert_eq!(short_address("", 4), "");
        assert_eq!(short_address("0x12", 4), "0x12");
    }
}
