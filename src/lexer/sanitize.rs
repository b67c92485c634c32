use lazy_static::lazy_static;
use regex::Regex;

/// Punctuation that separates identifiers glued together in a raw token.
pub const DEFAULT_SEPARATORS: &str = "()[]{}<>!~+-*/%=^&|#?:;,.";

lazy_static! {
    // Only spans that could be a type argument list; comparisons such as
    // `a<b&&f(c)>0` hold characters a type never does.
    static ref TEMPLATE_ARGS: Regex = Regex::new(r"<[\w\s:,*&\[\]]*>").unwrap();
    static ref DEFAULT_SEPARATOR_CLASS: Regex = separator_class(DEFAULT_SEPARATORS).unwrap();
}

fn separator_class(separators: &str) -> Option<Regex> {
    if separators.is_empty() {
        return None;
    }

    let escaped = separators
        .chars()
        .map(|c| regex::escape(&c.to_string()))
        .collect::<String>();

    Regex::new(&format!("[{}]+", escaped)).ok()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizeOptions {
    /// Characters replaced by whitespace before re-splitting.
    pub separators: String,
    /// Remove `<...>` spans, innermost first, before splitting.
    pub strip_templates: bool,
}

impl Default for SanitizeOptions {
    fn default() -> Self {
        SanitizeOptions {
            separators: String::from(DEFAULT_SEPARATORS),
            strip_templates: true,
        }
    }
}

/// Compiled form of [`SanitizeOptions`].
#[derive(Debug, Clone)]
pub struct Sanitizer {
    separators: Option<Regex>,
    strip_templates: bool,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Sanitizer {
            separators: Some(DEFAULT_SEPARATOR_CLASS.clone()),
            strip_templates: true,
        }
    }
}

impl Sanitizer {
    pub fn new(options: &SanitizeOptions) -> Sanitizer {
        if *options == SanitizeOptions::default() {
            return Sanitizer::default();
        }

        Sanitizer {
            separators: separator_class(&options.separators),
            strip_templates: options.strip_templates,
        }
    }

    /// Splits one raw buffered token into the identifier fragments it holds.
    /// Empty fragments are dropped.
    pub fn sanitize(&self, raw: &str) -> Vec<String> {
        let mut text = raw.to_string();

        if self.strip_templates {
            // Each pass removes the innermost spans, so nested arguments
            // like `map<int, vector<int>>` need several.
            while TEMPLATE_ARGS.is_match(&text) {
                text = TEMPLATE_ARGS.replace_all(&text, " ").into_owned();
            }
        }

        if let Some(separators) = &self.separators {
            text = separators.replace_all(&text, " ").into_owned();
        }

        text.split_whitespace().map(String::from).collect()
    }
}

pub fn sanitize(raw: &str) -> Vec<String> {
    Sanitizer::default().sanitize(raw)
}
