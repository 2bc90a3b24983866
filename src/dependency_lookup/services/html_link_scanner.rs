/// Pull-style scanner over an HTML document
///
/// The scanner never fails: markup it cannot make sense of is skipped, and an
/// unterminated tag or comment ends the scan. Every call to [`tags`] or
/// [`links`] starts a fresh pass over the document, and the returned
/// iterators are `Clone`, so a scan can be restarted or forked at any point.
///
/// ```
/// use depviz::dependency_lookup::services::HtmlLinkScanner;
///
/// let html = r#"<a href="numpy-1.23.0.tar.gz">numpy-1.23.0.tar.gz</a>"#;
/// let scanner = HtmlLinkScanner::new(html);
/// assert_eq!(scanner.links().collect::<Vec<_>>(), vec!["numpy-1.23.0.tar.gz"]);
/// ```
///
/// [`tags`]: HtmlLinkScanner::tags
/// [`links`]: HtmlLinkScanner::links
#[derive(Debug, Clone, Copy)]
pub struct HtmlLinkScanner<'a> {
    html: &'a str,
}

/// A start tag with its attributes in document order
///
/// Tag and attribute names are lowercased. Attributes written without a
/// value (`<input disabled>`) have an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
    pub attributes: Vec<(String, String)>,
}

impl Tag {
    /// Value of the first attribute with this (lowercase) name
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

impl<'a> HtmlLinkScanner<'a> {
    pub fn new(html: &'a str) -> Self {
        Self { html }
    }

    /// Lazily yields every start tag in the document
    pub fn tags(&self) -> Tags<'a> {
        Tags {
            html: self.html,
            pos: 0,
        }
    }

    /// Lazily yields the `href` of every anchor tag, in document order
    pub fn links(&self) -> Links<'a> {
        Links { tags: self.tags() }
    }
}

/// Iterator over start tags, see [`HtmlLinkScanner::tags`]
#[derive(Debug, Clone)]
pub struct Tags<'a> {
    html: &'a str,
    pos: usize,
}

impl Iterator for Tags<'_> {
    type Item = Tag;

    fn next(&mut self) -> Option<Tag> {
        let bytes = self.html.as_bytes();

        loop {
            let start = self.pos + self.html.get(self.pos..)?.find('<')?;
            let after = start + 1;

            if self.html[after..].starts_with("!--") {
                self.pos = match self.html[after + 3..].find("-->") {
                    Some(end) => after + 3 + end + 3,
                    None => self.html.len(),
                };
                continue;
            }

            match bytes.get(after) {
                Some(b'/') | Some(b'!') | Some(b'?') => {
                    self.pos = match self.html[after..].find('>') {
                        Some(end) => after + end + 1,
                        None => self.html.len(),
                    };
                    continue;
                }
                Some(c) if c.is_ascii_alphabetic() => {}
                // A bare '<' in text, not a tag
                _ => {
                    self.pos = after;
                    continue;
                }
            }

            let Some((tag, end)) = parse_start_tag(self.html, after) else {
                self.pos = self.html.len();
                return None;
            };

            self.pos = if tag.name == "script" || tag.name == "style" {
                let closing = format!("</{}", tag.name);
                find_ascii_case_insensitive(self.html, end, &closing).unwrap_or(end)
            } else {
                end
            };

            return Some(tag);
        }
    }
}

/// Iterator over anchor targets, see [`HtmlLinkScanner::links`]
#[derive(Debug, Clone)]
pub struct Links<'a> {
    tags: Tags<'a>,
}

impl Iterator for Links<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.tags.find_map(|tag| {
            if tag.name == "a" {
                tag.attribute("href").map(str::to_string)
            } else {
                None
            }
        })
    }
}

/// Parses a start tag whose name begins at `start`.
///
/// Returns the tag and the position just past its closing `>`, or `None`
/// when the tag is never closed.
fn parse_start_tag(html: &str, start: usize) -> Option<(Tag, usize)> {
    let bytes = html.as_bytes();
    let mut i = start;

    while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'-' || bytes[i] == b':')
    {
        i += 1;
    }
    let name = html[start..i].to_ascii_lowercase();
    let mut attributes = Vec::new();

    loop {
        while i < bytes.len() && (bytes[i].is_ascii_whitespace() || bytes[i] == b'/') {
            i += 1;
        }
        match bytes.get(i)? {
            b'>' => return Some((Tag { name, attributes }, i + 1)),
            b'=' | b'"' | b'\'' | b'<' => {
                // Stray punctuation, skip it
                i += 1;
                continue;
            }
            _ => {}
        }

        let name_start = i;
        while i < bytes.len()
            && !bytes[i].is_ascii_whitespace()
            && !matches!(bytes[i], b'=' | b'>' | b'/')
        {
            i += 1;
        }
        let attr_name = html[name_start..i].to_ascii_lowercase();

        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }

        let mut value = String::new();
        if bytes.get(i) == Some(&b'=') {
            i += 1;
            while i < bytes.len() && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            match bytes.get(i)? {
                quote @ (b'"' | b'\'') => {
                    let value_start = i + 1;
                    let len = html[value_start..].find(*quote as char)?;
                    value = decode_entities(&html[value_start..value_start + len]);
                    i = value_start + len + 1;
                }
                _ => {
                    let value_start = i;
                    while i < bytes.len() && !bytes[i].is_ascii_whitespace() && bytes[i] != b'>' {
                        i += 1;
                    }
                    value = decode_entities(&html[value_start..i]);
                }
            }
        }

        attributes.push((attr_name, value));
    }
}

fn find_ascii_case_insensitive(haystack: &str, from: usize, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    haystack.as_bytes()[from..]
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
        .map(|offset| from + offset)
}

/// Decodes the character references that commonly appear in attribute values
fn decode_entities(value: &str) -> String {
    if !value.contains('&') {
        return value.to_string();
    }
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&#x27;", "'")
        .replace("&amp;", "&")
}
