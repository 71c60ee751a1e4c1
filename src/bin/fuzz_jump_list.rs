//! AFL Fuzz harness for the jump list
//!
//! Replays byte-encoded insert/erase/find/get operations against both a
//! `JumpList` and a `BTreeSet<String>` and checks that:
//! 1. Every operation reports the same outcome as the model
//! 2. The fast lane stays valid (`verify`) after every mutation
//! 3. Index access and rendering agree with the model at the end

use std::collections::BTreeSet;

use afl::fuzz;
use jumplist::JumpList;

/// Operation types the fuzzer can generate
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    Insert { key: u8 },
    Erase { key: u8 },
    Find { key: u8 },
    Get { index_frac: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.len() < 2 {
            return None;
        }

        let arg = bytes[1];
        let op = match bytes[0] % 4 {
            0 => FuzzOp::Insert { key: arg },
            1 => FuzzOp::Erase { key: arg },
            2 => FuzzOp::Find { key: arg },
            _ => FuzzOp::Get { index_frac: arg },
        };
        Some((op, &bytes[2..]))
    }
}

/// Keys of varying length so prefixes of each other show up.
fn key_string(key: u8) -> String {
    let len = (key % 4) as usize;
    (0..len).map(|i| (b'a' + (key >> (2 + i)) % 4) as char).collect()
}

fn main() {
    fuzz!(|data: &[u8]| {
        // The first byte picks the gap bound.
        let Some((&first, mut remaining)) = data.split_first() else {
            return;
        };
        let max_gap = u32::from(first % 8) + 1;
        let mut list = JumpList::with_max_gap(max_gap).expect("gap bound is nonzero");
        let mut model = BTreeSet::new();

        while let Some((op, rest)) = FuzzOp::from_bytes(remaining) {
            remaining = rest;

            match op {
                FuzzOp::Insert { key } => {
                    let value = key_string(key);
                    assert_eq!(list.insert(value.clone()), model.insert(value), "insert mismatch");
                    list.verify().expect("invalid after insert");
                }
                FuzzOp::Erase { key } => {
                    let value = key_string(key);
                    assert_eq!(list.erase(&value), model.remove(&value), "erase mismatch");
                    list.verify().expect("invalid after erase");
                }
                FuzzOp::Find { key } => {
                    let value = key_string(key);
                    assert_eq!(list.find(&value), model.contains(&value), "find mismatch");
                }
                FuzzOp::Get { index_frac } => {
                    let index = index_frac as usize * (model.len() + 1) / 256;
                    assert_eq!(
                        list.get(index),
                        model.iter().nth(index).map(String::as_str),
                        "get({}) mismatch",
                        index
                    );
                }
            }
        }

        assert_eq!(list.size(), model.len(), "size mismatch");
        let values: Vec<&str> = model.iter().map(String::as_str).collect();
        let rendered = list.render();
        assert_eq!(rendered.split('\n').next(), Some(values.join(" ").as_str()));
    });
}
