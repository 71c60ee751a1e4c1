// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Text rendering of both lanes.
//!
//! Both renderings are three lines: every value, the jump node values, and
//! the jump node gaps.

use std::fmt;

use crate::jump_list::JumpList;

impl JumpList {
    /// Space separated values, jump values and gaps on three lines.
    pub fn render(&self) -> String {
        let lane = self.fast_lane();
        let values: Vec<&str> = self.iter().collect();
        let jumps: Vec<&str> = lane.iter().map(|&(value, _)| value).collect();
        let gaps: Vec<String> = lane.iter().map(|&(_, gap)| gap.to_string()).collect();
        return format!("{}\n{}\n{}", values.join(" "), jumps.join(" "), gaps.join(" "));
    }

    /// Like [`render`](Self::render), with arrows between values and each
    /// jump value and gap aligned under its slow-lane counterpart.
    pub fn render_pretty(&self) -> String {
        let mut slow = String::new();
        let mut fast = String::new();
        let mut gaps = String::new();
        let mut remaining = self.len();

        let mut slots = self.slots().peekable();
        while let Some((value, gap)) = slots.next() {
            if gap > 0 {
                if !slow.is_empty() {
                    let column = width(&slow);
                    pad_to(&mut fast, column, '-');
                    fast.pop();
                    fast.pop();
                    fast.push_str("> ");
                    pad_to(&mut gaps, column, ' ');
                }
                gaps.push_str(&gap.to_string());
                fast.push_str(value);

                remaining = remaining.saturating_sub(gap as usize);
                if remaining > 0 {
                    gaps.push(' ');
                    fast.push(' ');
                }
            }

            slow.push_str(value);
            if slots.peek().is_some() {
                slow.push_str(" --> ");
            }
        }

        return format!("{}\n{}\n{}", slow, fast, gaps);
    }
}

/// Display columns, counted in chars.
fn width(s: &str) -> usize {
    return s.chars().count();
}

fn pad_to(buf: &mut String, column: usize, fill: char) {
    for _ in width(buf)..column {
        buf.push(fill);
    }
}

impl fmt::Display for JumpList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str(&self.render());
    }
}

#[cfg(test)]
mod tests {
    use crate::fixture::preset;
    use crate::jump_list::JumpList;

    #[test]
    fn render_empty() {
        assert_eq!(JumpList::new().render(), "\n\n");
        assert_eq!(JumpList::new().render_pretty(), "\n\n");
    }

    #[test]
    fn render_preset() {
        let list = preset(10).unwrap();
        assert_eq!(
            list.render(),
            "a b blah c cat d etc ooo... x zzz\na d x\n5 3 2"
        );
        assert_eq!(list.to_string(), list.render());
    }

    #[test]
    fn render_single_segment() {
        let list = preset(3).unwrap();
        assert_eq!(list.render(), "a b blah\na\n3");
        assert_eq!(list.render_pretty(), "a --> b --> blah\na\n3");
    }

    #[test]
    fn render_pretty_after_split() {
        let mut list = JumpList::new();
        for value in ["a", "b", "c", "d", "e", "f"] {
            list.insert(value);
        }

        let expected = [
            "a --> b --> c --> d --> e --> f",
            "a --------------> d",
            "3                 3",
        ]
        .join("\n");
        assert_eq!(list.render_pretty(), expected);
    }

    #[test]
    fn render_pretty_aligns_jump_values() {
        let list = preset(10).unwrap();
        let pretty = list.render_pretty();
        let lines: Vec<&str> = pretty.lines().collect();
        assert_eq!(lines.len(), 3);

        for (value, _) in list.fast_lane() {
            let token = format!(" {}", value);
            let slow_col = format!(" {} ", lines[0]).find(&format!(" {} ", value)).unwrap();
            let fast_col = format!(" {}", lines[1]).find(&token).unwrap();
            assert_eq!(slow_col, fast_col, "{} is misaligned", value);
        }
    }
}
