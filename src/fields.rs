//! Attribute extraction from single-line `key="value"` records
//! (one `<row .../>` per line, as in StackExchange data dumps).

use regex::Regex;
use std::sync::OnceLock;

/// Whole attribute names followed by a quoted value closed on the same line.
/// Leftmost-first matching consumes `PostTypeId` as one name, so a lookup of
/// `Id` never hits the tail of a longer attribute.
static ATTR_RE: OnceLock<Regex> = OnceLock::new();

fn attr_re() -> &'static Regex {
    ATTR_RE.get_or_init(|| {
        Regex::new(r#"([A-Za-z_][A-Za-z0-9_.:-]*)="([^"]*)""#).expect("attribute pattern is valid")
    })
}

/// Borrowed view over the attributes of one record line, scanned once.
///
/// Values are returned verbatim: no entity or quote unescaping.
#[derive(Debug, Default)]
pub struct RecordLine<'a> {
    attrs: Vec<(&'a str, &'a str)>,
}

impl<'a> RecordLine<'a> {
    pub fn parse(line: &'a str) -> Self {
        let attrs = attr_re()
            .captures_iter(line)
            .filter_map(|c| Some((c.get(1)?.as_str(), c.get(2)?.as_str())))
            .collect();
        Self { attrs }
    }

    /// First value for `key`, or `""` when absent.
    pub fn get(&self, key: &str) -> &'a str {
        self.attrs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| *v)
            .unwrap_or("")
    }

    /// Best-effort integer for `key`; 0 when absent or non-numeric.
    pub fn get_int(&self, key: &str) -> i64 {
        parse_int_lenient(self.get(key))
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }
}

/// Value of `key="value"` in `line`, or `""` if the key is absent
/// or its value is not closed on the same line.
pub fn field_from_line<'a>(line: &'a str, key: &str) -> &'a str {
    RecordLine::parse(line).get(key)
}

/// Integer value of `key` in `line`, see [`parse_int_lenient`].
pub fn int_field_from_line(line: &str, key: &str) -> i64 {
    parse_int_lenient(field_from_line(line, key))
}

/// `atoi`-style parse: leading whitespace, optional sign, longest digit prefix.
/// Anything else (including overflow) yields 0.
pub fn parse_int_lenient(s: &str) -> i64 {
    let s = s.trim_start();
    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..].bytes().take_while(u8::is_ascii_digit).count();
    s[..sign_len + digits].parse().unwrap_or(0)
}
