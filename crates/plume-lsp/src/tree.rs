//! Structural walking and materialization of capability trees.

use serde_json::Value;
use thiserror::Error;

/// Nested string-keyed configuration object the builder operates on.
pub type ConfigTree = serde_json::Map<String, Value>;

/// A path element could not be turned into a container.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("value at '{key}' (depth {depth}) is not a container")]
pub struct MaterializeError {
    /// 1-indexed depth of the blocking element, counted from the root.
    pub depth: usize,
    /// Key whose value blocked the walk.
    pub key: String,
}

impl MaterializeError {
    fn new(depth: usize, key: &str) -> Self {
        Self {
            depth,
            key: key.to_owned(),
        }
    }
}

/// Default reification strategy: refuse to clobber a non-container value.
#[must_use]
pub fn refuse_reify(_depth: usize, _key: &str, _existing: &Value) -> Option<ConfigTree> {
    None
}

/// Guarantees a container exists at every key along `path` and returns a
/// mutable borrow of the deepest one.
///
/// Absent keys are created as empty objects. When a key already holds a
/// non-container value, `reify` is offered the 1-indexed depth, the key, and
/// the current value; it may produce a substitute container or decline, in
/// which case the walk aborts with a [`MaterializeError`] locating the
/// blockage. Existing containers are entered untouched.
///
/// The operation is purely structural: it never inspects field semantics,
/// only container-ness.
///
/// # Errors
///
/// Returns [`MaterializeError`] when `reify` declines to substitute a
/// container for an existing non-container value.
pub fn materialize<'t, R>(
    root: &'t mut ConfigTree,
    path: &[&str],
    mut reify: R,
) -> Result<&'t mut ConfigTree, MaterializeError>
where
    R: FnMut(usize, &str, &Value) -> Option<ConfigTree>,
{
    let mut current = root;
    for (index, key) in path.iter().enumerate() {
        let depth = index + 1;
        let slot = current
            .entry((*key).to_owned())
            .or_insert_with(|| Value::Object(ConfigTree::new()));
        if !slot.is_object() {
            match reify(depth, key, &*slot) {
                Some(container) => *slot = Value::Object(container),
                None => return Err(MaterializeError::new(depth, key)),
            }
        }
        match slot {
            Value::Object(map) => current = map,
            _ => return Err(MaterializeError::new(depth, key)),
        }
    }
    Ok(current)
}
