//! Deriving a browsable URL from a remote address.

use regex::Regex;

use crate::error::{Error, Result};

/// Normalize a remote address into its canonical `https://host/project` form.
///
/// Accepts the HTTP(S) form (`http(s)://host/project`) and the SSH shorthand
/// (`git@host:project`), each with an optional trailing `.git`. The pattern
/// is anchored at both ends, so partial matches are rejected. Known
/// limitations carried over from the accepted grammar: no port numbers in
/// the SSH form and no dots inside the project path.
pub fn derive(address: &str) -> Result<String> {
    let grammar = Regex::new(r"^(?:https?://|git@)([^:/]+)[:/]([\w/-]+)(?:\.git)?$").unwrap();
    let caps = grammar
        .captures(address)
        .ok_or_else(|| Error::InvalidAddress {
            address: address.to_string(),
        })?;
    Ok(format!("https://{}/{}", &caps[1], &caps[2]))
}
