use std::sync::LazyLock;

use regex::Regex;

use crate::markup::{inline::kinds::Grey, node::FormulaSegment};

/// ```` ```formula ```` fenced blocks.
///
/// The body uses `UPPERCASE_lowercase` for a base symbol with a subscript,
/// e.g. `E_max = P_nom * T_op`.
pub struct FormulaFence;

static SUBSCRIPT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z]+)_([a-z]+)").expect("valid regex"));

impl FormulaFence {
    pub const OPEN: &'static str = "```formula";
    pub const CLOSE: &'static str = "```";

    /// Splits a formula body into alternating text and subscript segments.
    pub fn segments(body: &str) -> Vec<FormulaSegment> {
        let body = Grey::unmark(body);
        let mut out = vec![];
        let mut last = 0;

        for caps in SUBSCRIPT.captures_iter(&body) {
            let (Some(whole), Some(base), Some(sub)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if whole.start() > last {
                out.push(FormulaSegment::Text {
                    text: body[last..whole.start()].to_string(),
                });
            }
            out.push(FormulaSegment::Subscript {
                base: base.as_str().to_string(),
                sub: sub.as_str().to_string(),
            });
            last = whole.end();
        }

        if last < body.len() {
            out.push(FormulaSegment::Text {
                text: body[last..].to_string(),
            });
        }
        out
    }
}
