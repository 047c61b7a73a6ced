//! Writing config documents into an environment.

use std::collections::HashMap;

use crate::client::ConfigDocument;

/// Destination for applied key-value pairs.
pub trait EnvSink {
    /// Set `key` to `value`, replacing any previous value. Returns `false`
    /// when the pair was rejected and nothing was written.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// The real process environment.
///
/// Mutating the process environment is only sound while no other thread
/// reads it, so this belongs at startup before application threads exist.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSink for ProcessEnv {
    fn set(&mut self, key: &str, value: &str) -> bool {
        // `set_var` panics on these; skip them instead.
        if key.is_empty() || key.contains(['=', '\0']) || value.contains('\0') {
            tracing::warn!(key = %key, "Skipping property with invalid environment variable name or value");
            return false;
        }
        std::env::set_var(key, value);
        true
    }
}

impl EnvSink for HashMap<String, String> {
    fn set(&mut self, key: &str, value: &str) -> bool {
        self.insert(key.to_string(), value.to_string());
        true
    }
}

/// Apply every property source of `document` to `sink`, in order.
///
/// Returns the keys written, in application order. A key defined by several
/// sources appears once per source; the last write wins. Keys the sink
/// rejected are left out.
pub fn apply_document<S>(document: &ConfigDocument, sink: &mut S) -> Vec<String>
where
    S: EnvSink + ?Sized,
{
    let mut applied = Vec::new();

    for property_source in &document.property_sources {
        tracing::debug!(
            source = %property_source.name,
            entries = property_source.source.len(),
            "Applying property source"
        );
        for (key, value) in &property_source.source {
            if sink.set(key, &value.to_string()) {
                applied.push(key.clone());
            }
        }
    }

    applied
}
