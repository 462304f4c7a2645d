//! Override resolution and merge policies for individual capability fields.
//!
//! Every catalogued field is written through one of two applicators. The
//! simple applicator assigns a resolved value directly; the merged applicator
//! combines the resolved value with whatever the container already holds,
//! through a caller-supplied merge function. Both honour the same directive
//! resolution order, so a host's [`OverrideSpec`] behaves uniformly across
//! boolean flags and composite enumerations.

use plume_config::{OverrideDirective, OverrideSpec};
use serde_json::Value;

use crate::tree::ConfigTree;

/// Whether the container currently holds nothing usable at `key`.
///
/// JSON null is treated as absent: hosts whose configuration layer cannot
/// delete keys express removal by writing null.
fn is_absent(current: Option<&Value>) -> bool {
    matches!(current, None | Some(Value::Null))
}

/// Resolves the incoming value for a field, or `None` when the directive
/// forbids any mutation.
fn resolve_incoming(
    spec: &OverrideSpec,
    field: &str,
    current: Option<&Value>,
    builtin_default: Value,
) -> Option<Value> {
    match spec.directive_for(field) {
        None => Some(builtin_default),
        Some(OverrideDirective::FillIfAbsent) => {
            if is_absent(current) {
                Some(builtin_default)
            } else {
                None
            }
        }
        Some(OverrideDirective::KeepExisting) => None,
        Some(OverrideDirective::Replace(value)) => Some(value.clone()),
    }
}

/// Applies a simple (assign-or-default) field override to `container`.
///
/// `target_key` names the container key the field governs; it defaults to
/// the field name itself, which covers all but the handful of catalogue
/// entries whose spec name differs from the protocol key.
pub fn apply_simple(
    container: &mut ConfigTree,
    spec: &OverrideSpec,
    field: &str,
    builtin_default: Value,
    target_key: Option<&str>,
) {
    let key = target_key.unwrap_or(field);
    if let Some(value) = resolve_incoming(spec, field, container.get(key), builtin_default) {
        container.insert(key.to_owned(), value);
    }
}

/// Applies an additive field override to `container`.
///
/// The resolved incoming value (the built-in default, or a `Replace`
/// payload) is combined with the container's current value through `merge`,
/// and the merge result is what gets assigned. `KeepExisting` short-circuits
/// without calling `merge`.
pub fn apply_merged<M>(
    container: &mut ConfigTree,
    spec: &OverrideSpec,
    field: &str,
    merge: M,
    builtin_default: Value,
    target_key: Option<&str>,
) where
    M: Fn(Option<&Value>, Value) -> Value,
{
    let key = target_key.unwrap_or(field);
    let Some(incoming) = resolve_incoming(spec, field, container.get(key), builtin_default) else {
        return;
    };
    let merged = merge(container.get(key), incoming);
    container.insert(key.to_owned(), merged);
}

/// Set-union merge: keeps the existing elements in order, then appends the
/// incoming elements that are not already present.
///
/// Idempotent whenever the incoming elements are a subset of the existing
/// ones, which makes repeated builds stable for enumeration fields.
#[must_use]
pub fn merge_value_set(existing: Option<&Value>, incoming: Value) -> Value {
    let mut merged = existing_elements(existing);
    for element in into_elements(incoming) {
        if !merged.contains(&element) {
            merged.push(element);
        }
    }
    Value::Array(merged)
}

/// Ordered append merge: existing elements first, incoming elements after,
/// with no duplicate suppression.
///
/// Meant for priority-ordered lists where the consumer reads position as
/// precedence and repetition is the caller's business.
#[must_use]
pub fn merge_ordered(existing: Option<&Value>, incoming: Value) -> Value {
    let mut merged = existing_elements(existing);
    merged.extend(into_elements(incoming));
    Value::Array(merged)
}

/// Lifts a merge over an inner list into a merge over its envelope object.
///
/// Several capability fields wrap their conceptually relevant list in a
/// one-field object (`tagSupport.valueSet`, `resolveSupport.properties`,
/// and friends). Directives and defaults for those fields speak in terms of
/// the inner list; this adapter unwraps the existing envelope, merges at the
/// list level, and wraps the result back up, preserving any sibling keys the
/// envelope already carried.
pub fn enveloped<M>(inner_key: &'static str, merge: M) -> impl Fn(Option<&Value>, Value) -> Value
where
    M: Fn(Option<&Value>, Value) -> Value,
{
    move |existing, incoming| {
        let existing_inner = existing.and_then(|envelope| envelope.get(inner_key));
        let merged_inner = merge(existing_inner, incoming);
        let mut envelope = match existing {
            Some(Value::Object(map)) => map.clone(),
            _ => ConfigTree::new(),
        };
        envelope.insert(inner_key.to_owned(), merged_inner);
        Value::Object(envelope)
    }
}

/// Clones the existing value's elements, treating anything that is not an
/// array as absent. Shape tolerance only; values are never type-checked.
fn existing_elements(existing: Option<&Value>) -> Vec<Value> {
    match existing {
        Some(Value::Array(items)) => items.clone(),
        _ => Vec::new(),
    }
}

/// Decomposes the incoming value into elements; a non-array incoming value
/// is merged as a single element.
fn into_elements(incoming: Value) -> Vec<Value> {
    match incoming {
        Value::Array(items) => items,
        other => vec![other],
    }
}
