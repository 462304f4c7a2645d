use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Directive applied to a single capability field during a build.
///
/// A field with no directive at all (absent from the [`OverrideSpec`]) takes
/// the builder's built-in default; that absence is the "unspecified" case and
/// deliberately has no variant here.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(tag = "policy", content = "value", rename_all = "snake_case")]
pub enum OverrideDirective {
    /// Never touch the field, whatever it currently holds.
    KeepExisting,
    /// Apply the built-in default only when the field is currently absent.
    FillIfAbsent,
    /// Use the supplied value in place of the built-in default.
    Replace(Value),
}

impl OverrideDirective {
    /// Returns the canonical string name of the directive.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::KeepExisting => "keep_existing",
            Self::FillIfAbsent => "fill_if_absent",
            Self::Replace(_) => "replace",
        }
    }
}

impl fmt::Display for OverrideDirective {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Per-field directives supplied once per capability build.
///
/// Keys are the exact protocol field names the builder's catalogue uses
/// (for example `snippetSupport` or `tagSupport`); no normalisation is
/// applied. The spec is read-only while a build runs.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(transparent)]
pub struct OverrideSpec {
    fields: BTreeMap<String, OverrideDirective>,
}

impl OverrideSpec {
    /// Creates an empty spec; every field takes its built-in default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or replaces the directive for a field.
    pub fn set_directive(
        &mut self,
        field: impl Into<String>,
        directive: OverrideDirective,
    ) -> &mut Self {
        self.fields.insert(field.into(), directive);
        self
    }

    /// Retrieves the directive for a field, when one was supplied.
    #[must_use]
    pub fn directive_for(&self, field: &str) -> Option<&OverrideDirective> {
        self.fields.get(field)
    }

    /// Whether the spec carries no directives at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, OverrideDirective)> for OverrideSpec {
    fn from_iter<I: IntoIterator<Item = (String, OverrideDirective)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
