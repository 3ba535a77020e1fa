//! A process-wide, type-identity-keyed singleton cell.
//!
//! Three components need "one of these per `T`" process-wide state that
//! Rust cannot express as a literal per-type `static` (statics can't
//! mention a generic parameter of an enclosing function): the scratch
//! pool, the sticky size hints, and the enum name→value dispatch table.
//! All three are the same shape — double-checked, idempotent,
//! discard-on-race publication keyed by [`TypeId`] — so it lives here
//! once instead of three times (spec §9's design note on per-triple
//! specialized lookups, generalized).

use std::any::{Any, TypeId};
use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

type Registry = Lazy<RwLock<HashMap<TypeId, &'static (dyn Any + Send + Sync)>>>;
static REGISTRY: Registry = Lazy::new(|| RwLock::new(HashMap::new()));

/// Return the process-wide `V` keyed by `Key`, constructing it with
/// `init` on first use. If two threads race to construct it, only the
/// first publish wins; the loser's `V` is simply dropped.
pub fn cell<Key: 'static, V: Send + Sync + 'static>(init: impl FnOnce() -> V) -> &'static V {
    let id = TypeId::of::<Key>();
    if let Some(v) = REGISTRY.read().get(&id) {
        return v.downcast_ref::<V>().expect("registry type mismatch");
    }
    let mut guard = REGISTRY.write();
    let entry = guard
        .entry(id)
        .or_insert_with(|| Box::leak(Box::new(init())) as &'static (dyn Any + Send + Sync));
    entry.downcast_ref::<V>().expect("registry type mismatch")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct KeyA;
    struct KeyB;

    #[test]
    fn same_key_returns_same_instance() {
        let a: &'static u32 = cell::<KeyA, u32>(|| 1);
        let b: &'static u32 = cell::<KeyA, u32>(|| 2);
        assert_eq!(*a, 1);
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn distinct_keys_are_independent() {
        let a: &'static u32 = cell::<KeyB, u32>(|| 7);
        assert_eq!(*a, 7);
    }
}
