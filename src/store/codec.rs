//! JSON encoding of a layout.
//!
//! ```json
//! {
//!   "version": 1,
//!   "owner": "alice",
//!   "panels": [
//!     { "id": "…", "type": "kpi-summary", "size": "medium", "isVisible": true }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::layout::Layout;
use crate::panel::Panel;
use crate::store::StoreError;

/// Format version written by this build.
pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct EnvelopeRef<'a> {
    version: u32,
    owner: &'a str,
    panels: &'a [Panel],
}

#[derive(Debug, Deserialize)]
struct Envelope {
    version: u32,
    panels: Vec<Panel>,
}

/// Serializes a layout for `owner`.
pub fn encode(owner: &str, layout: &Layout) -> Result<String, StoreError> {
    let envelope = EnvelopeRef {
        version: FORMAT_VERSION,
        owner,
        panels: layout.panels(),
    };
    serde_json::to_string_pretty(&envelope).map_err(|e| StoreError::Serialize(e.to_string()))
}

/// Parses and validates a stored layout.
pub fn decode(content: &str) -> Result<Layout, StoreError> {
    let envelope: Envelope =
        serde_json::from_str(content).map_err(|e| StoreError::Corrupt(e.to_string()))?;
    if envelope.version != FORMAT_VERSION {
        return Err(StoreError::UnsupportedVersion {
            found: envelope.version,
            expected: FORMAT_VERSION,
        });
    }
    Ok(Layout::from_panels(envelope.panels)?)
}
