//! Share tokens: a session's config packed into a URL-safe string.

use crate::models::SessionConfig;
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use tracing::warn;

const LINK_KEY: &str = "tab=";

pub fn encode(config: &SessionConfig) -> String {
    // Serializing a struct of strings and integers cannot fail.
    let json = serde_json::to_vec(config).unwrap_or_default();
    URL_SAFE_NO_PAD.encode(json)
}

/// Decode a bare token or a link carrying `tab=<token>`. Anything malformed
/// is logged and yields `None`.
pub fn decode(input: &str) -> Option<SessionConfig> {
    let token = extract_token(input.trim());
    if token.is_empty() {
        return None;
    }

    let bytes = match URL_SAFE_NO_PAD.decode(token.trim_end_matches('=')) {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(error = %e, "share token is not valid base64");
            return None;
        }
    };

    match serde_json::from_slice::<SessionConfig>(&bytes) {
        Ok(config) => Some(config),
        Err(e) => {
            warn!(error = %e, "share token does not hold a wheel config");
            None
        }
    }
}

fn extract_token(input: &str) -> &str {
    match input.find(LINK_KEY) {
        Some(pos) => {
            let rest = &input[pos + LINK_KEY.len()..];
            rest.split(['&', '#']).next().unwrap_or(rest)
        }
        None => input,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> SessionConfig {
        SessionConfig {
            label: "Friday".into(),
            names: vec!["Ana".into(), "Budi".into()],
            team_names: vec!["Red".into(), "Blue".into()],
            members_per_team: 3,
        }
    }

    #[test]
    fn test_round_trip() {
        let token = encode(&config());
        assert!(!token.contains('='));
        assert!(!token.contains('+'));
        assert!(!token.contains('/'));
        assert_eq!(decode(&token), Some(config()));
    }

    #[test]
    fn test_decode_from_link() {
        let token = encode(&config());
        let link = format!("https://example.com/wheel?tab={}&x=1", token);
        assert_eq!(decode(&link), Some(config()));
    }

    #[test]
    fn test_legacy_label_key() {
        let json = r#"{"tabName":"Old","names":["A"],"teamNames":["T"],"membersPerTeam":1}"#;
        let token = URL_SAFE_NO_PAD.encode(json);
        let decoded = decode(&token).unwrap();
        assert_eq!(decoded.label, "Old");
        assert_eq!(decoded.members_per_team, 1);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(decode(""), None);
        assert_eq!(decode("!!!not base64!!!"), None);
        assert_eq!(decode(&URL_SAFE_NO_PAD.encode("[1, 2, 3]")), None);
        assert_eq!(decode("https://example.com/?tab="), None);
    }
}
