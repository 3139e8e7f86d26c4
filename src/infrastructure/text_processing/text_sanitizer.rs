/// Normalizes whitespace in extracted PDF text: internal runs of
/// whitespace collapse to single spaces, single line breaks are kept, and
/// runs of blank lines become one paragraph break.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut pending_blank = false;
    let mut first_content = true;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            pending_blank = true;
            continue;
        }

        if !first_content {
            result.push_str(if pending_blank { "\n\n" } else { "\n" });
        }

        collapse_internal_whitespace(trimmed, &mut result);
        pending_blank = false;
        first_content = false;
    }

    result
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
