/// Debugger reply normalization
///
/// Debug adapters decorate their replies with value-history labels, prompt
/// noise and one layer of string quoting. This module scrubs that decoration
/// off a raw reply to recover the embedded JSON payload for the parser.

use regex::Regex;

/// Clean a raw evaluate reply down to (hopefully) a bare JSON object.
///
/// Steps, in order: trim; strip a leading `$N = ` value-history label; slice
/// from the first `{` to the last `}` when both appear in order; undo one
/// layer of debugger quoting by unescaping `\"`, then `\'`, then `\\`.
///
/// Never fails; with no recognizable payload the trimmed input passes
/// through for the parser to reject. The brace slice is deliberately
/// simplistic and is wrong for replies with stray braces before or after the
/// payload inside string values; the parser is the arbiter of validity.
pub fn clean(raw: &str) -> String {
    let mut text = raw.trim().to_string();

    // `$3 = {...}` is GDB echoing its value history, not payload.
    if let Ok(re) = Regex::new(r"^\$\d+\s*=\s*") {
        if let Some(m) = re.find(&text) {
            text = text[m.end()..].to_string();
        }
    }

    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if start < end {
            text = text[start..=end].to_string();
        }
    }

    // Fixed order: escaped quotes first, escaped backslashes last.
    text.replace("\\\"", "\"")
        .replace("\\'", "'")
        .replace("\\\\", "\\")
}
