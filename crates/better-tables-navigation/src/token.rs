//! Navigation tokens
//!
//! A token is a short opaque string carried in the `nav_token` query
//! parameter. It scopes one stored primary key list to one browsing context,
//! so a user can keep several filtered lists open in different tabs.

use uuid::Uuid;

/// Query parameter carrying the token between list and edit views
pub const NAV_TOKEN_PARAM: &str = "nav_token";

/// Length of minted tokens, in hex characters
pub const TOKEN_LENGTH: usize = 16;

/// Segment between the configured prefix and the token in store keys
const TOKEN_KEY_SEGMENT: &str = "token_";

/// Mint a new token: 16 lowercase hex characters of a random UUID
///
/// # Examples
///
/// ```
/// use better_tables_navigation::token::mint_token;
///
/// let token = mint_token();
/// assert_eq!(token.len(), 16);
/// assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
/// ```
pub fn mint_token() -> String {
	let mut token = Uuid::new_v4().simple().to_string();
	token.truncate(TOKEN_LENGTH);
	token
}

/// Session key for `token` under `prefix`
///
/// Returns `None` for a missing or empty token, which callers treat as
/// "navigation disabled for this request".
///
/// # Examples
///
/// ```
/// use better_tables_navigation::token::key_for;
///
/// assert_eq!(key_for("bdt_nav_", Some("abc")), Some("bdt_nav_token_abc".to_string()));
/// assert_eq!(key_for("bdt_nav_", Some("")), None);
/// assert_eq!(key_for("bdt_nav_", None), None);
/// ```
pub fn key_for(prefix: &str, token: Option<&str>) -> Option<String> {
	match token {
		Some(token) if !token.is_empty() => Some(store_key(prefix, token)),
		_ => None,
	}
}

/// Session key for a token known to be non-empty
pub fn store_key(prefix: &str, token: &str) -> String {
	format!("{}{}{}", prefix, TOKEN_KEY_SEGMENT, token)
}
