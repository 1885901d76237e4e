//! The variable document handed to the render engine.
//!
//! Serializes as:
//!
//! ```json
//! {
//!     "in": { "hosts": [ { "name": "leaf1" } ] },
//!     "out": {},
//!     "_copy_without_render": [ "*.j2" ]
//! }
//! ```
//!
//! `in` adds the nesting level the render engine needs for lists to work,
//! `out` is reserved for data produced while rendering.

use crate::error::{Error, Result};
use crate::loader::DataSet;
use globset::Glob;
use indexmap::IndexMap;
use serde::Serialize;

/// Namespace of parsed data files keyed by lowercased file stem.
pub type Namespace = IndexMap<String, DataSet>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Context {
    #[serde(rename = "in")]
    pub input: Namespace,

    #[serde(rename = "out")]
    pub output: IndexMap<String, serde_json::Value>,

    #[serde(rename = "_copy_without_render")]
    pub copy_without_render: Vec<String>,
}

impl Context {
    /// Builds a context around `input` with an empty `out` bucket.
    ///
    /// # Errors
    /// * `Error::PatternError` if a copy-without-render pattern is not a valid glob
    pub fn new<S: AsRef<str>>(input: Namespace, copy_without_render: &[S]) -> Result<Self> {
        let copy_without_render = copy_without_render
            .iter()
            .map(|pattern| {
                let pattern = pattern.as_ref();
                Glob::new(pattern)
                    .map(|_| pattern.to_string())
                    .map_err(|source| Error::PatternError { pattern: pattern.to_string(), source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { input, output: IndexMap::new(), copy_without_render })
    }

    /// Serializes the context the way the render engine expects it:
    /// pretty-printed with a four space indent.
    pub fn to_json_pretty(&self) -> Result<String> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
