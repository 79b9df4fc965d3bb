//! Markdown code-fence removal.

const FENCE: &str = "```";

/// Extract the body of the first fenced block, dropping its language tag.
///
/// Text without a fence line is returned with surrounding whitespace and
/// stray backticks trimmed. Applying this twice gives the same result as
/// applying it once.
pub fn strip_fences(raw: &str) -> String {
    let lines: Vec<&str> = raw.lines().collect();
    let Some(open) = lines
        .iter()
        .position(|line| line.trim_start().starts_with(FENCE))
    else {
        return trim_ticks(raw).to_string();
    };

    let mut body: Vec<&str> = Vec::new();
    let opener = &lines[open].trim_start()[FENCE.len()..];
    if !is_info_string(opener) {
        // Single-line form: ```{...}```
        body.push(opener);
    }
    for line in &lines[open + 1..] {
        if line.trim_start().starts_with(FENCE) {
            break;
        }
        body.push(line);
    }

    trim_ticks(&body.join("\n")).to_string()
}

/// A fence's language tag, e.g. `json` or `javascript`.
fn is_info_string(s: &str) -> bool {
    s.trim()
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | '_' | '.'))
}

fn trim_ticks(s: &str) -> &str {
    s.trim_matches(|c: char| c == '`' || c.is_whitespace())
}
