//! Human-readable pairing report.
//!
//! ```text
//! A1 is matched with B2
//! A2 is matched with B1
//!
//! B1 is matched with A2
//! B2 is matched with A1
//! ```

use stablematch_types::{Group, constants};

/// Render the current match state of both groups: group A first, a blank
/// line, then group B. Read-only; safe to call before or after a run.
#[must_use]
pub fn describe(group_a: &Group, group_b: &Group) -> String {
    let mut out = String::new();
    describe_group(&mut out, group_a);
    out.push('\n');
    describe_group(&mut out, group_b);
    out
}

fn describe_group(out: &mut String, group: &Group) {
    for (id, partner) in group.pairs() {
        out.push_str(id.as_str());
        match partner {
            Some(partner) => {
                out.push_str(" is matched with ");
                out.push_str(partner.as_str());
            }
            None => {
                out.push(' ');
                out.push_str(constants::NO_MATCH_NOTICE);
            }
        }
        out.push('\n');
    }
}
