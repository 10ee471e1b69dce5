//! `Debug` helpers that keep secrets out of logs.

use core::fmt;

use indexmap::IndexMap;

pub(crate) const REDACTED: &str = "<redacted>";

/// Formats HTTP headers with their names but without their values.
pub(crate) struct RedactedHeaders<'a>(pub &'a IndexMap<String, String>);

impl fmt::Debug for RedactedHeaders<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.0.keys().map(|name| (name, REDACTED)))
            .finish()
    }
}

/// Reveals only whether an optional secret is set.
pub(crate) fn redacted<T>(secret: Option<&T>) -> Option<&'static str> {
    secret.map(|_| REDACTED)
}
