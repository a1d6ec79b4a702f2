/// Split a shorthand selector on whitespace, except whitespace that sits
/// inside a bracketed group or a single-quoted string.
///
/// A whitespace run is inside a group when, looking ahead, a closing
/// bracket of some kind shows up before an opening bracket of the same kind.
/// Quoted text never counts toward that lookahead, and `\` escapes the next
/// character inside quotes. Leading and trailing whitespace produce no tokens.
pub fn tokenize(selector: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    let mut token_start = 0;
    let mut quoted = false;
    let mut chars = selector.char_indices().peekable();

    while let Some((run_start, c)) = chars.next() {
        if quoted {
            match c {
                '\\' => {
                    chars.next();
                }
                '\'' => quoted = false,
                _ => {}
            }
            continue;
        }
        if c == '\'' {
            quoted = true;
            continue;
        }
        if !c.is_whitespace() {
            continue;
        }

        let mut run_end = run_start + c.len_utf8();
        while let Some(&(i, next)) = chars.peek() {
            if !next.is_whitespace() {
                break;
            }
            run_end = i + next.len_utf8();
            chars.next();
        }

        if inside_group(&selector[run_end..]) {
            continue;
        }

        if run_start > token_start {
            tokens.push(&selector[token_start..run_start]);
        }
        token_start = run_end;
    }

    if token_start < selector.len() {
        tokens.push(&selector[token_start..]);
    }
    tokens
}

fn inside_group(rest: &str) -> bool {
    const GROUPS: [(char, char); 3] = [('[', ']'), ('(', ')'), ('{', '}')];

    GROUPS.iter().any(|&(open, close)| {
        unquoted(rest)
            .find(|&c| c == open || c == close)
            .is_some_and(|c| c == close)
    })
}

/// Characters of `text` outside single-quoted strings.
fn unquoted(text: &str) -> impl Iterator<Item = char> + '_ {
    let mut quoted = false;
    let mut escaped = false;
    text.chars().filter(move |&c| {
        if escaped {
            escaped = false;
            return false;
        }
        match (quoted, c) {
            (true, '\\') => {
                escaped = true;
                false
            }
            (_, '\'') => {
                quoted = !quoted;
                false
            }
            (quoted, _) => !quoted,
        }
    })
}
