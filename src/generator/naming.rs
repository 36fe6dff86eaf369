//! Identifier helpers for generated Go code

/// Prefix of every generated loader function
pub const LOADER_PREFIX: &str = "Load";

/// Upper-case the first letter of every word.
///
/// A word starts after any character that is not a letter, digit or
/// underscore, so `max_conn` stays one word (`Max_conn`) while `db host`
/// becomes `Db Host`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in input.chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_separator(c);
    }

    out
}

/// Loader function name for a section (`Server` -> `LoadServer`)
pub fn loader_name(section: &str) -> String {
    format!("{}{}", LOADER_PREFIX, title_case(section))
}

/// Quote a value as a Go interpreted string literal
pub fn go_quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", c as u32)),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn is_word_separator(c: char) -> bool {
    if c.is_ascii() {
        return !(c.is_ascii_alphanumeric() || c == '_');
    }
    if c.is_alphanumeric() {
        return false;
    }
    c.is_whitespace()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("port"), "Port");
        assert_eq!(title_case("Port"), "Port");
        assert_eq!(title_case("max_conn"), "Max_conn");
        assert_eq!(title_case("db host"), "Db Host");
        assert_eq!(title_case("db.host"), "Db.Host");
        assert_eq!(title_case("élan"), "Élan");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_loader_name() {
        assert_eq!(loader_name("Server"), "LoadServer");
        assert_eq!(loader_name("database"), "LoadDatabase");
    }

    #[test]
    fn test_go_quote() {
        assert_eq!(go_quote("Server"), "\"Server\"");
        assert_eq!(go_quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(go_quote("c:\\dir"), "\"c:\\\\dir\"");
    }
}
