//! Deprecated flat-override entry point.
//!
//! Earlier hosts passed a flat map of field name to raw value instead of an
//! [`OverrideSpec`]. This adapter translates that shape at the boundary and
//! delegates to [`build`]; nothing legacy leaks into the core builder.

use std::sync::Once;

use plume_config::{OverrideDirective, OverrideSpec};

use crate::builder::build;
use crate::errors::BuildError;
use crate::tree::ConfigTree;

static FLAT_API_ADVISORY: Once = Once::new();

/// Fields whose flat-API value was a whole sub-structure of which only one
/// inner field is the conceptual override payload.
const UNWRAPPED_FIELDS: [(&str, &str); 4] = [
    ("tagSupport", "valueSet"),
    ("insertTextModeSupport", "valueSet"),
    ("resolveSupport", "properties"),
    ("completionList", "itemDefaults"),
];

fn inner_payload_key(field: &str) -> Option<&'static str> {
    UNWRAPPED_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, inner)| *inner)
}

/// Builds a capability descriptor from the legacy flat override format.
///
/// Every value present in `flat` is treated as a `Replace` directive. For the
/// four envelope fields the payload is first unwrapped from the named inner
/// field, matching the old API where callers passed the whole envelope but
/// only the inner list was meaningful.
///
/// Emits a one-time-per-process advisory naming [`build`] as the
/// replacement; behaviour is otherwise identical.
///
/// # Errors
///
/// Returns the same errors as [`build`].
#[deprecated(note = "use `build` with an `OverrideSpec` instead")]
pub fn build_with_flat_overrides(
    flat: &ConfigTree,
    base: Option<ConfigTree>,
) -> Result<ConfigTree, BuildError> {
    FLAT_API_ADVISORY.call_once(|| {
        tracing::warn!(
            "build_with_flat_overrides is deprecated; migrate to build with an OverrideSpec"
        );
    });
    build(&translate_flat_spec(flat), base)
}

fn translate_flat_spec(flat: &ConfigTree) -> OverrideSpec {
    let mut spec = OverrideSpec::new();
    for (field, value) in flat {
        let payload = inner_payload_key(field)
            .and_then(|inner| value.get(inner))
            .cloned()
            .unwrap_or_else(|| value.clone());
        spec.set_directive(field.clone(), OverrideDirective::Replace(payload));
    }
    spec
}

#[cfg(test)]
mod tests {
    use plume_config::OverrideDirective;
    use rstest::rstest;
    use serde_json::{Value, json};

    use super::*;

    fn flat(value: Value) -> ConfigTree {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[rstest]
    fn wraps_plain_values_as_replace() {
        let spec = translate_flat_spec(&flat(json!({"snippetSupport": false})));
        assert_eq!(
            spec.directive_for("snippetSupport"),
            Some(&OverrideDirective::Replace(json!(false)))
        );
    }

    #[rstest]
    #[case("tagSupport", json!({"valueSet": [2]}), json!([2]))]
    #[case("insertTextModeSupport", json!({"valueSet": [2]}), json!([2]))]
    #[case("resolveSupport", json!({"properties": ["detail"]}), json!(["detail"]))]
    #[case("completionList", json!({"itemDefaults": ["data"]}), json!(["data"]))]
    fn unwraps_the_inner_payload_for_envelope_fields(
        #[case] field: &str,
        #[case] value: Value,
        #[case] payload: Value,
    ) {
        let mut overrides = ConfigTree::new();
        overrides.insert(field.to_owned(), value);

        let spec = translate_flat_spec(&overrides);
        assert_eq!(
            spec.directive_for(field),
            Some(&OverrideDirective::Replace(payload))
        );
    }

    #[rstest]
    fn falls_back_to_the_whole_value_when_the_inner_field_is_missing() {
        let spec = translate_flat_spec(&flat(json!({"tagSupport": {"unexpected": 1}})));
        assert_eq!(
            spec.directive_for("tagSupport"),
            Some(&OverrideDirective::Replace(json!({"unexpected": 1})))
        );
    }
}
