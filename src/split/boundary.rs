use regex::Regex;
use std::sync::LazyLock;

static LINK_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("link pattern should compile"));

/// Candidate split characters, strongest binding first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    /// Sentence end: `.`
    Sentence,
    /// Clause break: `,`
    Clause,
    /// Word gap: ` `
    Word,
}

impl Separator {
    /// Fixed priority order: sentence end beats comma beats space
    pub const PRIORITY: [Separator; 3] = [Separator::Sentence, Separator::Clause, Separator::Word];

    /// The character this separator splits on
    pub fn as_char(self) -> char {
        match self {
            Separator::Sentence => '.',
            Separator::Clause => ',',
            Separator::Word => ' ',
        }
    }
}

/// Find the strongest separator whose first occurrence in `window` does not
/// land inside a detected `http(s)://` link.
///
/// Cutting on the dot of `example.com` would tear the URL apart, so a
/// separator is rejected when its first occurrence coincides with that
/// separator's position inside one of the window's links. Returns `None`
/// when no candidate survives; the segmenter falls back to a plain cut.
pub fn find_separator(window: &str) -> Option<Separator> {
    let links: Vec<regex::Match> = LINK_PATTERN.find_iter(window).collect();

    for sep in Separator::PRIORITY {
        let ch = sep.as_char();
        let Some(first) = window.find(ch) else {
            continue;
        };

        let mut valid = true;
        for link in &links {
            if let Some(in_link) = link.as_str().find(ch) {
                if first == link.start() + in_link {
                    valid = false;
                    break;
                }
            }
        }

        if valid {
            return Some(sep);
        }
    }

    None
}
