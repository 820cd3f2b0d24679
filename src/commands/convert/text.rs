use super::grammar::PaperPatterns;

/// Rewrites footnote references glued to words as superscripts.
///
/// A digit run counts as a reference when it follows a period, a comma
/// after a non-digit, a quote, a semicolon or a letter, and is not itself
/// followed by a period. A trailing `%` stays after the superscript.
pub(crate) fn normalize_text(text: &str, patterns: &PaperPatterns) -> String {
    text.lines()
        .map(|line| normalize_line(line, patterns))
        .collect::<Vec<String>>()
        .join("\n")
        .trim()
        .to_string()
}

fn normalize_line(line: &str, patterns: &PaperPatterns) -> String {
    let bracketed = bracket_markers(line, patterns);
    patterns
        .bracket_marker
        .replace_all(&bracketed, |captures: &regex::Captures<'_>| {
            superscript(&captures[1])
        })
        .into_owned()
}

/// First pass: `word12 ` becomes `word [12] `.
fn bracket_markers(line: &str, patterns: &PaperPatterns) -> String {
    patterns
        .footnote_marker
        .replace_all(line, "${1} [${2}]${3}${4}")
        .into_owned()
}

pub(crate) fn superscript(digits: &str) -> String {
    digits.chars().filter_map(superscript_digit).collect()
}

fn superscript_digit(digit: char) -> Option<char> {
    let value = digit.to_digit(10)?;
    let code = match value {
        1 => 0x00B9,
        2 => 0x00B2,
        3 => 0x00B3,
        other => 0x2070 + other,
    };
    char::from_u32(code)
}
