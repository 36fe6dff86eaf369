use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::as_24_bit_terminal_escaped;

/// Highlight source for the terminal, by file extension.
///
/// Returns `None` when stdout is not a terminal or the syntax is unknown,
/// in which case the caller prints the plain text.
pub fn highlight(content: &str, extension: &str) -> Option<String> {
    if !atty::is(atty::Stream::Stdout) {
        return None;
    }

    let syntax_set = SyntaxSet::load_defaults_newlines();
    let theme_set = ThemeSet::load_defaults();

    let syntax = syntax_set.find_syntax_by_extension(extension)?;
    let theme = theme_set.themes.get("base16-eighties.dark")?;

    let mut highlighted = String::new();
    let mut highlighter = HighlightLines::new(syntax, theme);

    for line in content.lines() {
        let ranges = highlighter.highlight_line(line, &syntax_set).ok()?;
        highlighted.push_str(&as_24_bit_terminal_escaped(&ranges[..], false));
        highlighted.push('\n');
    }
    highlighted.push_str("\x1b[0m");

    Some(highlighted)
}
