use unicode_width::UnicodeWidthStr;

/// Greedy word wrap measured in terminal cells.
///
/// Words wider than `width` are split on character boundaries.
pub fn wrap_words(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![];
    }

    let mut lines = vec![];
    let mut current = String::new();
    for word in s.split_whitespace() {
        let sep = usize::from(!current.is_empty());
        if current.width() + sep + word.width() <= width {
            if sep == 1 {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        for c in word.chars() {
            if !current.is_empty() && current.width() + c.to_string().width() > width {
                lines.push(std::mem::take(&mut current));
            }
            current.push(c);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Rounded whole percentage of `current / total`, 0 when `total` is 0.
pub fn percent(current: usize, total: usize) -> u16 {
    if total == 0 {
        return 0;
    }
    ((current as f64 / total as f64) * 100.0).round() as u16
}
