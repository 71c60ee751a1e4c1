// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Bulk construction from values that are already sorted.

use crate::error::JumpListError;
use crate::jump_list::{Idx, JumpList, MAX_GAP_SIZE, NULL, Node};

impl JumpList {
    /// Build from strictly ascending values, partitioned greedily from the
    /// front into segments of `MAX_GAP_SIZE`.
    pub fn from_sorted<I, S>(values: I) -> Result<JumpList, JumpListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        return JumpList::from_sorted_with_max_gap(values, MAX_GAP_SIZE);
    }

    /// Build from strictly ascending values. Every `max_gap`-th node becomes a
    /// jump node; the last segment holds whatever remains.
    pub fn from_sorted_with_max_gap<I, S>(values: I, max_gap: u32) -> Result<JumpList, JumpListError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = JumpList::with_max_gap(max_gap)?;
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if let Some(index) = values.windows(2).position(|pair| pair[0] >= pair[1]) {
            return Err(JumpListError::Unsorted { index: index + 1 });
        }

        list.link_chain(values);
        list.partition();
        list.check_invariants();
        return Ok(list);
    }

    /// Replace the contents with a plain slow-lane chain, one node per value
    /// in order. No node is a jump node afterwards.
    fn link_chain(&mut self, values: Vec<String>) {
        let count = values.len();
        self.nodes = values
            .into_iter()
            .enumerate()
            .map(|(i, value)| {
                let mut node = Node::new(value, 0);
                if i + 1 < count {
                    node.next = (i + 1) as Idx;
                }
                node
            })
            .collect();
        self.free_list.clear();
        self.head = if count == 0 { NULL } else { 0 };
        self.len = count;
    }

    fn partition(&mut self) {
        if self.len == 0 {
            return;
        }

        let step = self.max_gap as usize;
        let mut start = 0;
        while start + step < self.len {
            let node = self.node_mut(start as Idx);
            node.jump = (start + step) as Idx;
            node.gap = step as u32;
            start += step;
        }
        self.node_mut(start as Idx).gap = (self.len - start) as u32;
    }

    /// Turn the listed chain positions into jump nodes with the given gaps,
    /// each pointing at the next listed position.
    fn mark_jumps(&mut self, jumps: &[(usize, u32)]) {
        for (i, &(pos, gap)) in jumps.iter().enumerate() {
            let target = jumps.get(i + 1).map_or(NULL, |&(next, _)| next as Idx);
            let node = self.node_mut(pos as Idx);
            node.jump = target;
            node.gap = gap;
        }
    }
}

/// Fixed layouts used by tests and the demo binary.
///
/// These are scaffolding, not part of the general API: build real lists with
/// [`JumpList::insert`] or [`JumpList::from_sorted`].
pub mod fixture {
    use super::*;

    /// Values the presets are drawn from, in ascending order.
    pub const PRESET_VALUES: [&str; 10] =
        ["a", "b", "blah", "c", "cat", "d", "etc", "ooo...", "x", "zzz"];

    /// A list holding the first `size` preset values with a hand-picked
    /// layout. Only sizes 1, 3 and 10 are laid out:
    ///
    /// - 1: a single jump node with gap 1
    /// - 3: a single jump node with gap 3
    /// - 10: jump nodes at positions 0, 5, 8 with gaps 5, 3, 2
    pub fn preset(size: usize) -> Result<JumpList, JumpListError> {
        let jumps: &[(usize, u32)] = match size {
            1 => &[(0, 1)],
            3 => &[(0, 3)],
            10 => &[(0, 5), (5, 3), (8, 2)],
            _ => return Err(JumpListError::UnsupportedPresetSize(size)),
        };

        let mut list = JumpList::new();
        list.link_chain(PRESET_VALUES[..size].iter().map(|s| s.to_string()).collect());
        list.mark_jumps(jumps);
        list.check_invariants();
        return Ok(list);
    }
}
