//! A priority queue with decrease-key and removal by identity, built on a plain
//! [BinaryHeap] through lazy deletion.
//!
//! Two structures are kept side by side:
//! - a heap of every `(key, id)` pair ever inserted, including superseded and removed ones;
//! - a map holding the single authoritative key per identity.
//!
//! A heap entry is live iff the map holds the same key for its identity. Stale entries are only
//! discarded once they reach the top of the heap, so an update costs one heap push and the total
//! number of heap pops over a run is bounded by the number of inserts.
use fxhash::FxHashMap;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

#[derive(Clone, Copy, Debug)]
struct HeapEntry<K, I> {
    key: K,
    id: I,
}

impl<K: Ord, I: Ord> Eq for HeapEntry<K, I> {}

impl<K: Ord, I: Ord> PartialEq for HeapEntry<K, I> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.id == other.id
    }
}

impl<K: Ord, I: Ord> PartialOrd for HeapEntry<K, I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord, I: Ord> Ord for HeapEntry<K, I> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap yields the smallest key; equal keys fall back to the
        // smallest identity to keep pops deterministic.
        match other.key.cmp(&self.key) {
            Ordering::Equal => other.id.cmp(&self.id),
            s => s,
        }
    }
}

/// Min-priority queue keyed by identity `I` with ranking key `K`.
#[derive(Clone, Debug)]
pub struct LazyPq<K, I> {
    heap: BinaryHeap<HeapEntry<K, I>>,
    live: FxHashMap<I, K>,
}

impl<K, I> Default for LazyPq<K, I>
where
    K: Ord + Copy,
    I: Ord + Hash + Copy,
{
    fn default() -> Self {
        LazyPq {
            heap: BinaryHeap::new(),
            live: FxHashMap::default(),
        }
    }
}

impl<K, I> LazyPq<K, I>
where
    K: Ord + Copy,
    I: Ord + Hash + Copy,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `key` as the authoritative key of `id`, replacing any previous one, and returns
    /// the replaced key. The old heap copy is left behind and goes stale.
    pub fn insert(&mut self, key: K, id: I) -> Option<K> {
        let replaced = self.live.insert(id, key);
        self.heap.push(HeapEntry { key, id });
        replaced
    }

    /// Removes and returns the entry with the smallest key, or [None] if no live entry is left.
    pub fn pop(&mut self) -> Option<(K, I)> {
        self.discard_stale();
        let entry = self.heap.pop()?;
        self.live.remove(&entry.id);
        Some((entry.key, entry.id))
    }

    /// The entry [pop](Self::pop) would return. Needs `&mut self` because stale entries above
    /// it are discarded on the way.
    pub fn top(&mut self) -> Option<(K, I)> {
        self.discard_stale();
        self.heap.peek().map(|e| (e.key, e.id))
    }

    /// Drops `id` from the authoritative set. Its heap copies are skipped when they surface.
    pub fn remove(&mut self, id: &I) -> Option<K> {
        self.live.remove(id)
    }

    /// The authoritative key of `id`, if it is queued.
    pub fn key_of(&self, id: &I) -> Option<K> {
        self.live.get(id).copied()
    }

    pub fn contains(&self, id: &I) -> bool {
        self.live.contains_key(id)
    }

    /// Number of live identities.
    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Physical heap size, live and stale entries alike. Always at least [len](Self::len).
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    fn discard_stale(&mut self) {
        if self.live.is_empty() {
            self.heap.clear();
            return;
        }
        // Every live identity has a heap copy with its current key, so this stops before the
        // heap runs dry.
        while let Some(top) = self.heap.peek() {
            if self.live.get(&top.id) == Some(&top.key) {
                break;
            }
            self.heap.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::BTreeMap;

    #[test]
    fn pops_in_key_order() {
        let mut pq = LazyPq::new();
        pq.insert(5, 'a');
        pq.insert(1, 'b');
        pq.insert(3, 'c');
        assert_eq!(pq.len(), 3);
        assert_eq!(pq.pop(), Some((1, 'b')));
        assert_eq!(pq.pop(), Some((3, 'c')));
        assert_eq!(pq.pop(), Some((5, 'a')));
        assert_eq!(pq.pop(), None);
        assert!(pq.is_empty());
    }

    #[test]
    fn decrease_key_supersedes_old_entry() {
        let mut pq = LazyPq::new();
        pq.insert(10, 1u32);
        pq.insert(4, 2u32);
        assert_eq!(pq.insert(2, 1u32), Some(10));
        assert_eq!(pq.len(), 2);
        assert_eq!(pq.heap_len(), 3);
        assert_eq!(pq.top(), Some((2, 1)));
        assert_eq!(pq.pop(), Some((2, 1)));
        assert_eq!(pq.pop(), Some((4, 2)));
        // The stale (10, 1) copy must not resurface.
        assert_eq!(pq.pop(), None);
        assert_eq!(pq.heap_len(), 0);
    }

    #[test]
    fn increase_key_also_supersedes() {
        let mut pq = LazyPq::new();
        pq.insert(1, 'x');
        pq.insert(2, 'y');
        pq.insert(3, 'x');
        assert_eq!(pq.pop(), Some((2, 'y')));
        assert_eq!(pq.pop(), Some((3, 'x')));
        assert!(pq.pop().is_none());
    }

    #[test]
    fn removed_identity_never_pops() {
        let mut pq = LazyPq::new();
        pq.insert(1, 7u8);
        pq.insert(2, 8u8);
        assert_eq!(pq.remove(&7), Some(1));
        assert_eq!(pq.remove(&7), None);
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.top(), Some((2, 8)));
        assert_eq!(pq.pop(), Some((2, 8)));
        assert_eq!(pq.pop(), None);
    }

    #[test]
    fn reinsert_after_remove_at_same_key_wins() {
        let mut pq = LazyPq::new();
        pq.insert(3, 'q');
        pq.remove(&'q');
        assert!(pq.is_empty());
        pq.insert(3, 'q');
        assert_eq!(pq.len(), 1);
        assert_eq!(pq.pop(), Some((3, 'q')));
        // Both heap copies matched the key; only one pop may come out.
        assert_eq!(pq.pop(), None);
    }

    #[test]
    fn top_does_not_remove() {
        let mut pq = LazyPq::new();
        pq.insert(2, 0usize);
        assert_eq!(pq.top(), Some((2, 0)));
        assert_eq!(pq.top(), Some((2, 0)));
        assert_eq!(pq.len(), 1);
        assert!(pq.contains(&0));
        assert_eq!(pq.key_of(&0), Some(2));
    }

    #[test]
    fn equal_keys_pop_by_identity() {
        let mut pq = LazyPq::new();
        pq.insert(1, 9u16);
        pq.insert(1, 4u16);
        pq.insert(1, 6u16);
        assert_eq!(pq.pop(), Some((1, 4)));
        assert_eq!(pq.pop(), Some((1, 6)));
        assert_eq!(pq.pop(), Some((1, 9)));
    }

    #[derive(Clone, Debug)]
    enum Op {
        Insert(u8, u8),
        Remove(u8),
        Pop,
        Top,
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..50, 0u8..12).prop_map(|(k, i)| Op::Insert(k, i)),
            (0u8..12).prop_map(Op::Remove),
            Just(Op::Pop),
            Just(Op::Top),
        ]
    }

    proptest! {
        /// Checks every operation against a map of the live entries.
        #[test]
        fn matches_model(ops in prop::collection::vec(op(), 0..200)) {
            let mut pq = LazyPq::new();
            let mut model: BTreeMap<u8, u8> = BTreeMap::new();
            let mut inserts = 0;
            for op in ops {
                match op {
                    Op::Insert(k, i) => {
                        inserts += 1;
                        prop_assert_eq!(pq.insert(k, i), model.insert(i, k));
                    }
                    Op::Remove(i) => {
                        prop_assert_eq!(pq.remove(&i), model.remove(&i));
                    }
                    Op::Pop | Op::Top => {
                        let expected = model.iter().map(|(&i, &k)| (k, i)).min();
                        let got = if matches!(op, Op::Pop) { pq.pop() } else { pq.top() };
                        prop_assert_eq!(got, expected);
                        if let (Op::Pop, Some((_, i))) = (&op, expected) {
                            model.remove(&i);
                        }
                    }
                }
                prop_assert_eq!(pq.len(), model.len());
                prop_assert!(pq.heap_len() >= pq.len());
                prop_assert!(pq.heap_len() <= inserts);
            }
        }
    }
}
