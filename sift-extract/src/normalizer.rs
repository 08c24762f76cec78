//! Text normalization: lowercase, strip punctuation except inside
//! identifiers, collapse whitespace.
//!
//! Identifier punctuation is what resume tech terms need to survive:
//! `c++`, `c#`, `node.js`, `.net`, `scikit-learn`, `security+`. A `-` or `_`
//! is kept only between two alphanumerics; `.` additionally survives at the
//! start of a token (`.net`); `+` and `#` are kept when they continue an
//! alphanumeric token, so sentence punctuation disappears but `c++` does not.

/// Normalize raw resume text for vocabulary matching.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut out = String::with_capacity(lowered.len());

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            out.push(c);
            continue;
        }
        if c.is_whitespace() {
            push_space(&mut out);
            continue;
        }
        let next_alnum = chars.get(i + 1).is_some_and(|n| n.is_alphanumeric());
        let kept = match c {
            '-' | '_' => prev_alphanumeric(&chars, i) && next_alnum,
            '.' => next_alnum,
            '+' | '#' => continues_token(&chars, i),
            _ => false,
        };
        if kept {
            out.push(c);
        } else {
            push_space(&mut out);
        }
    }

    out.trim().to_string()
}

fn prev_alphanumeric(chars: &[char], i: usize) -> bool {
    i > 0 && chars[i - 1].is_alphanumeric()
}

/// `+` / `#` continue a token when the nearest char to the left that is not
/// itself `+` or `#` is alphanumeric. Covers `c#`, `c++`, `security+`.
fn continues_token(chars: &[char], i: usize) -> bool {
    let mut j = i;
    while j > 0 {
        j -= 1;
        match chars[j] {
            '+' | '#' => continue,
            c => return c.is_alphanumeric(),
        }
    }
    false
}

fn push_space(out: &mut String) {
    if !out.ends_with(' ') && !out.is_empty() {
        out.push(' ');
    }
}
