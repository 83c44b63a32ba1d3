//! Greedy word wrapping.

/// Wrap `text` to at most `width` columns, breaking at word boundaries only.
///
/// Runs of whitespace collapse to one space. Newlines are hard breaks, and
/// an empty source line yields an empty output line. A word longer than
/// `width` sits alone on its own line.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for hard_line in text.lines() {
        let mut current = String::new();
        let mut current_width = 0;
        for word in hard_line.split_whitespace() {
            let word_width = word.chars().count();
            if current.is_empty() {
                current.push_str(word);
                current_width = word_width;
            } else if current_width + 1 + word_width <= width {
                current.push(' ');
                current.push_str(word);
                current_width += 1 + word_width;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
                current_width = word_width;
            }
        }
        lines.push(current);
    }
    lines
}
