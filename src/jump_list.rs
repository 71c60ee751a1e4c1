// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Jump List
//!
//! A sorted singly-linked list of strings with a second, sparse "fast lane"
//! of jump pointers. Every node sits on the slow lane (`next`); some nodes are
//! jump nodes that start a segment and point at the jump node that starts the
//! following segment.
//!
//! # Gap Semantics
//!
//! - `node.gap` = number of slow-lane nodes from this jump node (inclusive) to
//!   its jump target (exclusive), or to the end of the list for the last one
//! - plain nodes have `gap == 0` and no jump target
//! - every gap lies in `1..=max_gap`; the sum of all gaps is `len`
//!
//! ```text
//! Fast: a ---------------------> d -------------> x -> NULL
//! Slow: a -> b -> blah -> c -> cat -> d -> etc -> ooo... -> x -> zzz -> NULL
//! Gaps: 5                            3                      2
//! ```
//!
//! # Operations
//!
//! - `find(s)`: follow jumps while the target sorts below `s`, then scan
//! - `get(i)`: follow jumps while the segment ends before `i`, then scan
//! - `insert(s)`: grows one segment by one, splitting it when it overflows
//! - `erase(s)`: shrinks one segment, or merges two when a jump node goes
//!
//! A single insert or erase can overflow at most one segment, so one split
//! per mutation keeps every gap within bounds.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::error::JumpListError;

/// Default bound on the number of slow-lane nodes a single segment may span.
pub const MAX_GAP_SIZE: u32 = 5;

/// Node index into the arena.
pub(crate) type Idx = u32;

/// Null index marker.
pub(crate) const NULL: Idx = Idx::MAX;

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) value: String,
    /// Slow lane. Owns the rest of the chain.
    pub(crate) next: Idx,
    /// Fast lane. Lookup shortcut only, never an owner.
    pub(crate) jump: Idx,
    pub(crate) gap: u32,
}

impl Node {
    pub(crate) fn new(value: String, gap: u32) -> Self {
        Node {
            value,
            next: NULL,
            jump: NULL,
            gap,
        }
    }

    fn is_jump(&self) -> bool {
        self.gap > 0
    }
}

/// A sorted set of strings with bounded jump segments.
///
/// Nodes live in an arena, so dropping the list frees the whole chain without
/// recursing down `next` links.
#[derive(Clone)]
pub struct JumpList {
    pub(crate) nodes: Vec<Node>,
    pub(crate) head: Idx,
    pub(crate) len: usize,
    /// Slots of erased nodes, reused by later inserts.
    pub(crate) free_list: Vec<Idx>,
    pub(crate) max_gap: u32,
}

impl JumpList {
    pub fn new() -> Self {
        JumpList {
            nodes: Vec::new(),
            head: NULL,
            len: 0,
            free_list: Vec::new(),
            max_gap: MAX_GAP_SIZE,
        }
    }

    /// Create an empty list whose segments hold at most `max_gap` nodes.
    pub fn with_max_gap(max_gap: u32) -> Result<Self, JumpListError> {
        if max_gap == 0 {
            return Err(JumpListError::InvalidMaxGap);
        }
        let mut list = JumpList::new();
        list.max_gap = max_gap;
        Ok(list)
    }

    pub fn max_gap(&self) -> u32 {
        self.max_gap
    }

    /// Number of values, tracked incrementally.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head == NULL
    }

    /// Number of values, counted by walking the slow lane. O(n).
    pub fn size(&self) -> usize {
        self.slots().count()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free_list.clear();
        self.head = NULL;
        self.len = 0;
    }

    // --- Node access helpers ---

    pub(crate) fn node(&self, idx: Idx) -> &Node {
        &self.nodes[idx as usize]
    }

    pub(crate) fn node_mut(&mut self, idx: Idx) -> &mut Node {
        &mut self.nodes[idx as usize]
    }

    fn alloc_node(&mut self, value: String, gap: u32) -> Idx {
        if let Some(idx) = self.free_list.pop() {
            *self.node_mut(idx) = Node::new(value, gap);
            idx
        } else {
            let idx = self.nodes.len() as Idx;
            self.nodes.push(Node::new(value, gap));
            idx
        }
    }

    fn free_node(&mut self, idx: Idx) {
        let node = self.node_mut(idx);
        node.value = String::new();
        node.next = NULL;
        node.jump = NULL;
        node.gap = 0;
        self.free_list.push(idx);
    }

    // --- Invariant checking ---

    /// Walk both lanes and report the first structural inconsistency.
    pub fn verify(&self) -> Result<(), JumpListError> {
        let violated = |msg: String| -> Result<(), JumpListError> {
            Err(JumpListError::InvariantViolated(msg))
        };

        let mut live = FxHashSet::default();
        let mut prev_value: Option<&str> = None;
        // The jump node the slow lane must reach when the current segment ends.
        let mut expected_jump = self.head;
        let mut remaining = 0u32;
        let mut idx = self.head;

        while idx != NULL {
            if !live.insert(idx) {
                return violated(format!("slow lane revisits slot {}", idx));
            }
            let node = self.node(idx);

            if let Some(prev) = prev_value {
                if prev >= node.value.as_str() {
                    return violated(format!("{:?} does not sort before {:?}", prev, node.value));
                }
            }

            if remaining == 0 {
                if idx != expected_jump {
                    return violated(format!("segment ends at {:?}, not at a jump target", node.value));
                }
                if node.gap == 0 || node.gap > self.max_gap {
                    return violated(format!(
                        "jump node {:?} has gap {} outside 1..={}",
                        node.value, node.gap, self.max_gap
                    ));
                }
                remaining = node.gap;
                expected_jump = node.jump;
            } else if node.is_jump() || node.jump != NULL {
                return violated(format!("{:?} starts a segment inside another", node.value));
            }

            remaining -= 1;
            prev_value = Some(node.value.as_str());
            idx = node.next;
        }

        if remaining != 0 {
            return violated(format!("last segment overruns the list by {}", remaining));
        }
        if expected_jump != NULL {
            return violated(format!("last jump points at unreachable slot {}", expected_jump));
        }
        if live.len() != self.len {
            return violated(format!("slow lane has {} nodes, len is {}", live.len(), self.len));
        }

        for &slot in &self.free_list {
            if live.contains(&slot) {
                return violated(format!("slot {} is both live and free", slot));
            }
        }
        if live.len() + self.free_list.len() != self.nodes.len() {
            return violated(format!(
                "{} live + {} free slots != arena of {}",
                live.len(),
                self.free_list.len(),
                self.nodes.len()
            ));
        }

        Ok(())
    }

    #[cfg(debug_assertions)]
    pub(crate) fn check_invariants(&self) {
        if let Err(err) = self.verify() {
            panic!("INVARIANT VIOLATED: {}", err);
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline(always)]
    pub(crate) fn check_invariants(&self) {}

    // --- Core operations ---

    /// Follow the fast lane to the jump node whose segment could hold `s`.
    /// The list must be non-empty.
    fn descend(&self, s: &str) -> Idx {
        let mut idx = self.head;
        loop {
            let jump = self.node(idx).jump;
            if jump != NULL && self.node(jump).value.as_str() < s {
                idx = jump;
            } else {
                return idx;
            }
        }
    }

    pub fn find(&self, s: &str) -> bool {
        if self.head == NULL {
            return false;
        }

        let mut idx = self.descend(s);
        while idx != NULL {
            let node = self.node(idx);
            match node.value.as_str().cmp(s) {
                std::cmp::Ordering::Equal => return true,
                std::cmp::Ordering::Greater => return false,
                std::cmp::Ordering::Less => idx = node.next,
            }
        }
        false
    }

    /// The `index`-th smallest value, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&str> {
        if index >= self.len {
            return None;
        }

        let mut idx = self.head;
        let mut pos = 0usize;
        loop {
            let node = self.node(idx);
            if node.jump != NULL && pos + (node.gap as usize) < index {
                pos += node.gap as usize;
                idx = node.jump;
            } else {
                break;
            }
        }

        while pos < index {
            idx = self.node(idx).next;
            pos += 1;
        }
        Some(self.node(idx).value.as_str())
    }

    /// Insert `value` in order. Returns false, leaving the list untouched, if
    /// it is already present.
    pub fn insert<S: Into<String>>(&mut self, value: S) -> bool {
        let value = value.into();
        if self.find(&value) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(value = %value, len = self.len, "insert");

        if self.head == NULL {
            self.head = self.alloc_node(value, 1);
            self.len = 1;
            self.check_invariants();
            return true;
        }

        let mut jump_node = self.descend(&value);
        let mut prev = NULL;
        let mut cur = jump_node;
        while cur != NULL && self.node(cur).value < value {
            prev = cur;
            cur = self.node(cur).next;
        }

        let new_idx = self.alloc_node(value, 0);
        self.node_mut(new_idx).next = cur;

        if prev == NULL {
            // Only the head can sort after the new value without a jump
            // having skipped it, so the new node takes over its jump role.
            debug_assert_eq!(cur, self.head);
            let old_head = self.node_mut(cur);
            let (gap, jump) = (old_head.gap, old_head.jump);
            old_head.gap = 0;
            old_head.jump = NULL;

            let new_head = self.node_mut(new_idx);
            new_head.gap = gap;
            new_head.jump = jump;
            self.head = new_idx;
            jump_node = new_idx;
        } else {
            self.node_mut(prev).next = new_idx;
        }
        self.len += 1;

        let grown = self.node(jump_node).gap + 1;
        if grown > self.max_gap {
            self.split_segment(jump_node, grown);
        } else {
            self.node_mut(jump_node).gap = grown;
        }

        self.check_invariants();
        true
    }

    /// Remove `s`. Returns false if it is absent or the list is empty.
    pub fn erase(&mut self, s: &str) -> bool {
        if self.head == NULL || !self.find(s) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::trace!(value = s, len = self.len, "erase");

        if self.len == 1 {
            self.free_node(self.head);
            self.head = NULL;
            self.len = 0;
            self.check_invariants();
            return true;
        }

        let jump_node = self.descend(s);
        let mut prev = NULL;
        let mut cur = jump_node;
        while self.node(cur).value.as_str() != s {
            prev = cur;
            cur = self.node(cur).next;
        }

        let removed = self.node(cur);
        let (gap, jump, next) = (removed.gap, removed.jump, removed.next);

        if gap > 0 {
            if cur == self.head {
                // A head with gap 1 is followed by a jump node that already
                // carries its own segment.
                self.head = next;
                let successor = self.node_mut(next);
                if !successor.is_jump() {
                    successor.gap = gap - 1;
                    successor.jump = jump;
                }
                #[cfg(feature = "tracing")]
                tracing::debug!(gap = gap - 1, "head transferred");
            } else {
                // Descent stops before any jump node equal to `s`, so the
                // removed node starts the segment after `jump_node`.
                debug_assert_ne!(prev, NULL);
                debug_assert_eq!(self.node(jump_node).jump, cur);
                self.node_mut(prev).next = next;

                let merged = self.node(jump_node).gap + gap - 1;
                self.node_mut(jump_node).jump = jump;
                #[cfg(feature = "tracing")]
                tracing::debug!(merged, "segments merged");
                if merged > self.max_gap {
                    self.split_segment(jump_node, merged);
                } else {
                    self.node_mut(jump_node).gap = merged;
                }
            }
        } else {
            self.node_mut(prev).next = next;
            self.node_mut(jump_node).gap -= 1;
        }

        self.free_node(cur);
        self.len -= 1;
        self.check_invariants();
        true
    }

    /// Split the segment starting at `node`, which now spans `new_gap` nodes,
    /// into a first half of `ceil(new_gap / 2)` and a second half holding the
    /// rest. The second half's first node becomes a jump node.
    fn split_segment(&mut self, node: Idx, new_gap: u32) {
        let first = new_gap.div_ceil(2);

        let mut second = node;
        for _ in 0..first {
            second = self.node(second).next;
        }
        debug_assert_ne!(second, NULL, "segment of {} is shorter than its gap", new_gap);

        let old_jump = self.node(node).jump;
        let start = self.node_mut(second);
        start.gap = new_gap - first;
        start.jump = old_jump;

        let node = self.node_mut(node);
        node.gap = first;
        node.jump = second;

        #[cfg(feature = "tracing")]
        tracing::debug!(new_gap, first, second = new_gap - first, "segment split");
    }

    // --- Traversal ---

    /// `(value, gap)` for every node in slow-lane order.
    pub(crate) fn slots(&self) -> Slots<'_> {
        Slots {
            list: self,
            current: self.head,
        }
    }

    /// Iterate over all values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.slots().map(|(value, _)| value)
    }

    /// `(value, gap)` for each jump node, following the fast lane from the head.
    pub fn fast_lane(&self) -> SmallVec<[(&str, u32); 8]> {
        let mut lane = SmallVec::new();
        let mut idx = self.head;
        while idx != NULL {
            let node = self.node(idx);
            lane.push((node.value.as_str(), node.gap));
            idx = node.jump;
        }
        lane
    }
}

impl Default for JumpList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for JumpList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JumpList")
            .field("values", &self.iter().collect::<Vec<_>>())
            .field("fast_lane", &self.fast_lane())
            .finish()
    }
}

impl<S: Into<String>> FromIterator<S> for JumpList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut list = JumpList::new();
        list.extend(iter);
        list
    }
}

impl<S: Into<String>> Extend<S> for JumpList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

pub(crate) struct Slots<'a> {
    list: &'a JumpList,
    current: Idx,
}

impl<'a> Iterator for Slots<'a> {
    type Item = (&'a str, u32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == NULL {
            return None;
        }

        let node = self.list.node(self.current);
        self.current = node.next;
        Some((node.value.as_str(), node.gap))
    }
}
