use fnv::FnvHasher;
use std::{
    collections::HashMap,
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashMap<K, V> = HashMap<K, V, BuildHasherDefault<FnvHasher>>;

/// Hash map keyed with FNV, which beats SipHash on the short integer keys of coordinates.
/// Not collision attack resistant.
pub fn fnv_hashmap<K: Hash + Eq, V>(capacity: usize) -> FnvHashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, BuildHasherDefault::<FnvHasher>::default())
}

/// Initial capacity for containers sized by the cell count of a maze.
///
/// Huge mazes only reserve up to a cap and then grow on demand, a template is free to reach
/// only a fraction of the grid.
#[inline]
pub fn capacity_hint(cells_count: usize) -> usize {
    const MAX_RESERVED: usize = 1 << 20;
    if cells_count > MAX_RESERVED { MAX_RESERVED } else { cells_count }
}
