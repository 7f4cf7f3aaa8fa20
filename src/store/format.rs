//! Line formats of the settings files
//!
//! - `history`: one command per line, trailing newline
//! - `passwords`, `credentials`: `user:password` per line
//! - `tunnels`: `host:port` per line
//!
//! Lines without a `:` in the passwords and tunnels files are skipped with a
//! warning, as are tunnel lines whose port is not a valid `u16`.

use std::fmt::Display;

use indexmap::IndexMap;
use tracing::warn;

use super::dir::split_lines;
use super::{Credentials, HistoryLog, PasswordTable, TunnelRegistry};

/// Split a line on its first `:`
pub fn split_pair(line: &str) -> Option<(&str, &str)> {
    line.split_once(':')
}

pub fn parse_history(contents: &str) -> HistoryLog {
    split_lines(contents)
}

pub fn format_history(history: &[String]) -> String {
    let mut out = history.join("\n");
    out.push('\n');
    out
}

/// Parse `user:password` lines. The last entry for a user wins.
pub fn parse_passwords<S: AsRef<str>>(lines: &[S]) -> PasswordTable {
    let mut table = PasswordTable::new();
    for line in lines.iter().map(AsRef::as_ref).filter(|l| !l.is_empty()) {
        match split_pair(line) {
            Some((user, password)) => {
                table.insert(user.to_string(), password.to_string());
            }
            None => warn!("Skipping passwords line without ':' delimiter"),
        }
    }
    table
}

/// Parse the first line of the credentials file
pub fn parse_credentials(line: &str) -> Option<Credentials> {
    split_pair(line).map(|(user, password)| Credentials::new(user, password))
}

pub fn format_credentials(credentials: &Credentials) -> String {
    format!("{}:{}\n", credentials.user, credentials.password)
}

/// Parse `host:port` lines. The last entry for a host wins.
pub fn parse_tunnels<S: AsRef<str>>(lines: &[S]) -> TunnelRegistry {
    let mut tunnels = TunnelRegistry::new();
    for line in lines.iter().map(AsRef::as_ref).filter(|l| !l.is_empty()) {
        let Some((host, port)) = split_pair(line) else {
            warn!(line, "Skipping tunnels line without ':' delimiter");
            continue;
        };
        match port.trim().parse::<u16>() {
            Ok(port) => {
                tunnels.insert(host.to_string(), port);
            }
            Err(e) => warn!(host, port, "Skipping tunnel with invalid port: {}", e),
        }
    }
    tunnels
}

/// Serialize a map as `key:value` lines in iteration order
pub fn format_pairs<K: Display, V: Display>(pairs: &IndexMap<K, V>) -> String {
    pairs
        .iter()
        .map(|(key, value)| format!("{}:{}\n", key, value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_split_pair_first_colon_only() {
        assert_eq!(split_pair("bob:pw:with:colons"), Some(("bob", "pw:with:colons")));
        assert_eq!(split_pair("alice:"), Some(("alice", "")));
        assert_eq!(split_pair("nocolon"), None);
    }

    #[test]
    fn test_history_format() {
        let history = vec!["ls".to_string(), "cd /tmp".to_string()];
        assert_eq!(format_history(&history), "ls\ncd /tmp\n");
        assert_eq!(parse_history("ls\ncd /tmp\n"), history);
        assert!(parse_history("").is_empty());
    }

    #[test]
    fn test_parse_passwords() {
        let lines = split_lines("alice:secret\nbob:pw:with:colons\n");
        let table = parse_passwords(&lines);

        let expected: PasswordTable = [
            ("alice".to_string(), "secret".to_string()),
            ("bob".to_string(), "pw:with:colons".to_string()),
        ]
        .into_iter()
        .collect();
        assert_eq!(table, expected);
    }

    #[test]
    fn test_parse_passwords_last_wins_and_skips_malformed() {
        let table = parse_passwords(&["alice:one", "garbage", "", "alice:two"]);
        assert_eq!(table.len(), 1);
        assert_eq!(table["alice"], "two");
    }

    #[test]
    fn test_credentials_line() {
        let creds = parse_credentials("user1:pa:ss").unwrap();
        assert_eq!(creds.user, "user1");
        assert_eq!(creds.password, "pa:ss");
        assert_eq!(format_credentials(&creds), "user1:pa:ss\n");
        assert!(parse_credentials("justone").is_none());
    }

    #[test]
    fn test_parse_tunnels() {
        let tunnels = parse_tunnels(&["myserver:8080"]);
        assert_eq!(tunnels.get("myserver"), Some(&8080));
    }

    #[test]
    fn test_parse_tunnels_skips_bad_ports() {
        let tunnels = parse_tunnels(&["a:22", "b:80abc", "c:", "d:70000", "e", "f:-1", "a:2222"]);
        let entries: Vec<_> = tunnels.iter().map(|(h, p)| (h.as_str(), *p)).collect();
        assert_eq!(entries, vec![("a", 2222)]);
    }

    #[test]
    fn test_format_pairs_preserves_order() {
        let mut tunnels = TunnelRegistry::new();
        tunnels.insert("zeta".to_string(), 9000);
        tunnels.insert("alpha".to_string(), 22);
        assert_eq!(format_pairs(&tunnels), "zeta:9000\nalpha:22\n");
        assert_eq!(format_pairs(&TunnelRegistry::new()), "");
    }
}
