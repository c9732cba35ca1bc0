//! Output sanitization for free-text bookmark fields
//!
//! Whitelist tag filter applied when a bookmark leaves the service:
//! - HTML comments are removed
//! - Tags not on the whitelist (`<script>`, `<iframe>`, ...) have their
//!   angle brackets escaped so they render as text
//! - Whitelisted tags are rebuilt with only their allowed attributes;
//!   `href`/`src` must use a safe scheme
//! - Stray `<` / `>` in text are escaped; quotes and `&` are left alone
//!
//! Only `title` and `description` are filtered. `id`, `url` and `rating`
//! pass through untouched.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::Bookmark;

static COMMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<!--.*?-->").expect("invalid comment regex"));

/// `<`, optional `/`, name, attribute source, optional self-closing `/`, `>`.
/// No whitespace is allowed before the name: `< b >` is text, not a tag.
static TAG_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^<(/)?([A-Za-z][A-Za-z0-9]*)((?:\s.*?)?)(/?)\s*>$")
        .expect("invalid tag regex")
});

static ATTR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'>]+)))?"#)
        .expect("invalid attribute regex")
});

static NUMERIC_ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"&#(?:[xX]([0-9A-Fa-f]+)|([0-9]+));?").expect("invalid entity regex")
});

/// URL prefixes accepted in `href` and `src`
const SAFE_URL_PREFIXES: &[&str] = &[
    "http://",
    "https://",
    "mailto:",
    "tel:",
    "data:image/",
    "ftp://",
    "./",
    "../",
    "#",
    "/",
];

const NONE: &[&str] = &[];
const ALIGN: &[&str] = &["align", "valign"];
const CELL: &[&str] = &["width", "rowspan", "colspan", "align", "valign"];
const MEDIA: &[&str] = &[
    "autoplay", "controls", "crossorigin", "loop", "muted", "preload", "src",
];

/// Tags allowed through, with their allowed attributes
const TAG_ATTRS: &[(&str, &[&str])] = &[
    ("a", &["target", "href", "title"]),
    ("abbr", &["title"]),
    ("address", NONE),
    ("area", &["shape", "coords", "href", "alt"]),
    ("article", NONE),
    ("aside", NONE),
    ("audio", MEDIA),
    ("b", NONE),
    ("bdi", &["dir"]),
    ("bdo", &["dir"]),
    ("big", NONE),
    ("blockquote", &["cite"]),
    ("br", NONE),
    ("caption", NONE),
    ("center", NONE),
    ("cite", NONE),
    ("code", NONE),
    ("col", &["align", "valign", "span", "width"]),
    ("colgroup", &["align", "valign", "span", "width"]),
    ("dd", NONE),
    ("del", &["datetime"]),
    ("details", &["open"]),
    ("div", NONE),
    ("dl", NONE),
    ("dt", NONE),
    ("em", NONE),
    ("figcaption", NONE),
    ("figure", NONE),
    ("font", &["color", "size", "face"]),
    ("footer", NONE),
    ("h1", NONE),
    ("h2", NONE),
    ("h3", NONE),
    ("h4", NONE),
    ("h5", NONE),
    ("h6", NONE),
    ("header", NONE),
    ("hr", NONE),
    ("i", NONE),
    ("img", &["src", "alt", "title", "width", "height", "loading"]),
    ("ins", &["datetime"]),
    ("kbd", NONE),
    ("li", NONE),
    ("mark", NONE),
    ("nav", NONE),
    ("ol", NONE),
    ("p", NONE),
    ("pre", NONE),
    ("s", NONE),
    ("section", NONE),
    ("small", NONE),
    ("span", NONE),
    ("sub", NONE),
    ("summary", NONE),
    ("sup", NONE),
    ("strong", NONE),
    ("strike", NONE),
    ("table", &["width", "border", "align", "valign"]),
    ("tbody", ALIGN),
    ("td", CELL),
    ("tfoot", ALIGN),
    ("th", CELL),
    ("thead", ALIGN),
    ("tr", &["rowspan", "align", "valign"]),
    ("tt", NONE),
    ("u", NONE),
    ("ul", NONE),
    ("video", MEDIA),
];

static ALLOWED_TAGS: Lazy<HashMap<&'static str, &'static [&'static str]>> =
    Lazy::new(|| TAG_ATTRS.iter().copied().collect());

/// Return a copy of the bookmark with `title` and `description` filtered.
pub fn sanitize_bookmark(bookmark: Bookmark) -> Bookmark {
    Bookmark {
        title: filter_xss(&bookmark.title),
        description: filter_xss(&bookmark.description),
        ..bookmark
    }
}

/// Filter untrusted text so it cannot execute when rendered as HTML.
///
/// # Example
/// ```
/// use bookmarks_server::sanitize::filter_xss;
///
/// assert_eq!(filter_xss("<script>x</script>"), "&lt;script&gt;x&lt;/script&gt;");
/// assert_eq!(filter_xss("<b onclick=\"x()\">hi</b>"), "<b>hi</b>");
/// ```
pub fn filter_xss(input: &str) -> String {
    let html = COMMENT_RE.replace_all(input, "");
    let mut out = String::with_capacity(html.len());

    let mut last = 0;
    let mut tag_start: Option<usize> = None;
    let mut quote: Option<char> = None;
    let mut prev = ' ';

    for (i, c) in html.char_indices() {
        let Some(start) = tag_start else {
            if c == '<' {
                tag_start = Some(i);
                prev = c;
            }
            continue;
        };

        if let Some(q) = quote {
            if c == q {
                quote = None;
                prev = c;
            }
            continue;
        }

        match c {
            // A new `<` abandons the open tag; what came before is text.
            '<' => {
                out.push_str(&escape_text(&html[last..i]));
                last = i;
                tag_start = Some(i);
            }
            '>' => {
                out.push_str(&escape_text(&html[last..start]));
                out.push_str(&filter_tag(&html[start..=i]));
                last = i + 1;
                tag_start = None;
            }
            '"' | '\'' if prev == '=' => quote = Some(c),
            _ => {}
        }
        if !c.is_whitespace() {
            prev = c;
        }
    }

    out.push_str(&escape_text(&html[last..]));
    out
}

/// Filter one complete tag, `<` through `>`.
fn filter_tag(tag: &str) -> String {
    let Some(caps) = TAG_RE.captures(tag) else {
        return escape_text(tag);
    };
    let name = caps[2].to_ascii_lowercase();
    let Some(allowed) = ALLOWED_TAGS.get(name.as_str()) else {
        return escape_text(tag);
    };

    if caps.get(1).is_some() {
        return format!("</{name}>");
    }

    let mut rebuilt = format!("<{name}");
    for attr in ATTR_RE.captures_iter(&caps[3]) {
        let attr_name = attr[1].to_ascii_lowercase();
        if !allowed.contains(&attr_name.as_str()) {
            continue;
        }

        rebuilt.push(' ');
        let value = attr
            .get(2)
            .or_else(|| attr.get(3))
            .or_else(|| attr.get(4))
            .map(|m| safe_attr_value(&attr_name, m.as_str()))
            .unwrap_or_default();
        if value.is_empty() {
            rebuilt.push_str(&attr_name);
        } else {
            rebuilt.push_str(&format!("{attr_name}=\"{value}\""));
        }
    }
    if !caps[4].is_empty() {
        rebuilt.push_str(" /");
    }
    rebuilt.push('>');
    rebuilt
}

/// Decode, check and re-escape an attribute value. Empty means "drop value".
fn safe_attr_value(name: &str, raw: &str) -> String {
    let decoded = decode_entities(raw);
    let value: String = decoded.chars().filter(|c| !c.is_control()).collect();
    let value = value.trim();

    if matches!(name, "href" | "src") && value != "#" {
        let lower = value.to_ascii_lowercase();
        if !SAFE_URL_PREFIXES.iter().any(|prefix| lower.starts_with(prefix)) {
            return String::new();
        }
    }

    value
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn decode_entities(value: &str) -> String {
    let named = value
        .replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">");

    NUMERIC_ENTITY_RE
        .replace_all(&named, |caps: &regex::Captures<'_>| {
            let code = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (None, Some(dec)) => dec.as_str().parse::<u32>().ok(),
                (None, None) => None,
            };
            code.and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_default()
        })
        .into_owned()
}

fn escape_text(text: &str) -> String {
    text.replace('<', "&lt;").replace('>', "&gt;")
}
