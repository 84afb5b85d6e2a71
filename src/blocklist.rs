//! Blocklist detection against the breach corpus.
//!
//! Checks the password itself, then every desubstituted candidate, issuing
//! one range query per unique digest prefix. Corpus unavailability is
//! fail-open: a failed round counts as "not found", never as an error.

use std::collections::HashMap;
use std::pin::pin;

use futures_util::stream::{self, StreamExt};
use sha1::{Digest, Sha1};
use tokio_util::sync::CancellationToken;

use crate::hibp::RangeLookup;
use crate::substitutions::expand;

/// Hex length of the k-anonymity lookup prefix.
const PREFIX_LEN: usize = 5;

/// Range queries in flight at once during the candidate sweep.
const MAX_IN_FLIGHT: usize = 8;

/// Lowercase hex SHA-1 of the exact UTF-8 bytes.
pub(crate) fn sha1_hex(input: &str) -> String {
    data_encoding::HEXLOWER.encode(Sha1::digest(input.as_bytes()).as_slice())
}

/// Returns true when the password, or any desubstituted candidate of it,
/// appears in the breach corpus.
///
/// The candidate sweep runs its per-prefix queries concurrently and stops at
/// the first match; dropping the remainder of the stream cancels whatever is
/// still in flight. A cancelled token abandons the sweep, which then reports
/// no match.
pub async fn is_blocked<C>(password: &str, client: &C, token: &CancellationToken) -> bool
where
    C: RangeLookup + ?Sized,
{
    let direct = sha1_hex(password);
    if round_matches(client, &direct[..PREFIX_LEN], std::slice::from_ref(&direct)).await {
        return true;
    }

    // One query per unique prefix across all candidates.
    let mut rounds: HashMap<String, Vec<String>> = HashMap::new();
    for candidate in expand(password) {
        let digest = sha1_hex(&candidate);
        if digest == direct {
            continue;
        }
        rounds
            .entry(digest[..PREFIX_LEN].to_string())
            .or_default()
            .push(digest);
    }

    let sweep = stream::iter(rounds)
        .map(|(prefix, digests)| async move { round_matches(client, &prefix, &digests).await })
        .buffer_unordered(MAX_IN_FLIGHT)
        .take_until(token.cancelled());
    let mut sweep = pin!(sweep);

    while let Some(matched) = sweep.next().await {
        if matched {
            return true;
        }
    }
    false
}

/// One query round: fetch the suffixes under `prefix`, rebuild each into a
/// full digest and compare against the expected set. Lookup failures are
/// swallowed as a non-match.
async fn round_matches<C>(client: &C, prefix: &str, digests: &[String]) -> bool
where
    C: RangeLookup + ?Sized,
{
    match client.lookup(prefix).await {
        Ok(suffixes) => suffixes.iter().any(|suffix| {
            let full = format!("{prefix}{suffix}");
            digests.iter().any(|digest| *digest == full)
        }),
        Err(_err) => {
            #[cfg(feature = "tracing")]
            tracing::warn!("breach corpus lookup failed, treating round as clean: {_err}");
            false
        }
    }
}
