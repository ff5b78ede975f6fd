//! # Common Types

use compact_str::CompactString;

/// An atomic unit of the vocabulary.
///
/// Either a single Telugu codepoint, or the concatenation of merged symbols.
pub type Symbol = CompactString;

/// A pair of adjacent symbols.
pub type Pair = (Symbol, Symbol);

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type TBHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type TBHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TBHashMap<K, V> {
            TBHashMap::with_capacity(capacity)
        }
    } else {
        /// Type Alias for hash maps in this crate.
        pub type TBHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type TBHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> TBHashMap<K, V> {
            TBHashMap::with_capacity(capacity)
        }
    }
}

/// Concatenate a pair into its merged symbol.
pub fn concat_pair(
    left: &str,
    right: &str,
) -> Symbol {
    let mut merged = CompactString::with_capacity(left.len() + right.len());
    merged.push_str(left);
    merged.push_str(right);
    merged
}
