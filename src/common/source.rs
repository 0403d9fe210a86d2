//!
//! Working with raw grammar text: physical lines and snippets.
//!

///
/// Splits text into its physical lines, paired
/// with their (1-based) line numbers.
///
/// Each line keeps its trailing `\n`; the last line
/// may lack one. Empty text yields no lines.
///
pub fn physical_lines(text: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    text.split_inclusive('\n')
        .enumerate()
        .map(|(i, line)| (i + 1, line))
}

///
/// The text of the line that contains byte `index`,
/// without its line terminator.
///
/// An index at the very end of the text points to the
/// last line holding any text.
///
pub fn snippet_at(text: &str, index: usize) -> &str {
    let index = index.min(text.len());

    let start = text[..index].rfind('\n').map(|i| i + 1).unwrap_or(0);
    let end = text[index..]
        .find('\n')
        .map(|i| index + i)
        .unwrap_or(text.len());

    if start == end && start == text.len() && start > 0 {
        // End of input, right after a newline.
        return snippet_at(text, start - 1);
    }

    &text[start..end]
}
