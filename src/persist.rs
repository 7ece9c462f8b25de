//! Recents persistence.
//!
//! The recents page's order is stored as one string under
//! [`RECENT_KEYS_SETTING`]: each code in decimal followed by
//! [`RECENT_KEY_SEPARATOR`], front of the grid first.
//!
//! ```text
//!   grid order:  [0x1f602] [0x1f44d] [0x2764]
//!   stored:      "128514,128077,10084,"
//! ```
//!
//! Restore reads the string back, resolves each code through an ordered list
//! of [`LookupSource`]s (first match wins) and appends the items silently, so
//! the rebuilt order matches the stored order and nothing is re-persisted.
//! Restore is best-effort: unresolved codes are dropped and malformed tokens
//! follow the configured [`MalformedTokenPolicy`].

use tracing::{debug, info, warn};

use crate::grid::GridPage;
use crate::item::Item;
use crate::store::traits::SettingsStore;
use crate::traits::LookupSource;

/// Settings key holding the recents order.
pub const RECENT_KEYS_SETTING: &str = "emoji_recent_keys";
/// Separator written after every stored code, including the last.
pub const RECENT_KEY_SEPARATOR: char = ',';

/// What restore does with a token that is not a decimal integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedTokenPolicy {
    /// Skip the token and continue with the rest.
    #[default]
    Skip,
    /// Stop at the token; codes before it are still restored.
    Abort,
}

/// Codes parsed from a stored recents string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCodes {
    pub codes: Vec<i32>,
    pub malformed: usize,
    pub aborted: bool,
}

/// Outcome of a restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestoreReport {
    /// Items resolved and appended to the page.
    pub restored: usize,
    /// Codes no lookup source could resolve.
    pub unresolved: usize,
    /// Tokens that failed to parse.
    pub malformed: usize,
    /// `true` if a malformed token stopped the restore early.
    pub aborted: bool,
}

/// Encodes `codes` as `"<code>,<code>,...,"`.
pub fn encode_codes<I>(codes: I) -> String
where
    I: IntoIterator<Item = i32>,
{
    let mut encoded = String::new();
    for code in codes {
        encoded.push_str(&code.to_string());
        encoded.push(RECENT_KEY_SEPARATOR);
    }
    encoded
}

/// Parses a stored recents string.
///
/// Empty tokens (trailing separator, adjacent separators) are skipped and do
/// not count as malformed.
pub fn parse_codes(value: &str, policy: MalformedTokenPolicy) -> ParsedCodes {
    let mut parsed = ParsedCodes::default();
    for token in value.split(RECENT_KEY_SEPARATOR) {
        if token.is_empty() {
            continue;
        }
        match token.parse::<i32>() {
            Ok(code) => parsed.codes.push(code),
            Err(err) => {
                parsed.malformed += 1;
                warn!(token, error = %err, "malformed recent key token");
                if policy == MalformedTokenPolicy::Abort {
                    parsed.aborted = true;
                    break;
                }
            },
        }
    }
    parsed
}

/// Writes `codes` to `store` under [`RECENT_KEYS_SETTING`].
pub fn save_recent_keys(store: &dyn SettingsStore, codes: &[i32]) {
    let encoded = encode_codes(codes.iter().copied());
    debug!(count = codes.len(), "persisting recent keys");
    store.write_string(RECENT_KEYS_SETTING, &encoded);
}

/// Returns the first item any of `sources` resolves for `code`.
pub fn resolve(code: i32, sources: &[&dyn LookupSource]) -> Option<Item> {
    sources.iter().find_map(|source| source.lookup(code))
}

/// Restores the stored recents order into `page`.
///
/// Reads [`RECENT_KEYS_SETTING`] from `store`; an absent or empty value is a
/// no-op. Each resolved item is appended with
/// [`GridPage::insert_silent`], which never writes back to the store.
pub fn load_recent_keys(
    page: &GridPage,
    sources: &[&dyn LookupSource],
    store: &dyn SettingsStore,
    policy: MalformedTokenPolicy,
) -> RestoreReport {
    let stored = store.read_string(RECENT_KEYS_SETTING, "");
    if stored.is_empty() {
        debug!("no recent keys stored");
        return RestoreReport::default();
    }

    let parsed = parse_codes(&stored, policy);
    let mut report = RestoreReport {
        malformed: parsed.malformed,
        aborted: parsed.aborted,
        ..RestoreReport::default()
    };

    for code in parsed.codes {
        match resolve(code, sources) {
            Some(item) => {
                page.insert_silent(item);
                report.restored += 1;
            },
            None => {
                debug!(code, "dropping unresolvable recent key");
                report.unresolved += 1;
            },
        }
    }

    info!(
        restored = report.restored,
        unresolved = report.unresolved,
        malformed = report.malformed,
        aborted = report.aborted,
        "restored recent keys"
    );
    report
}
