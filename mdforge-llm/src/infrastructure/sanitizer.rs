//! Turns raw model output into a Markdown document ready for insertion
//!
//! Models like to wrap their answer in a code fence and to open with a line
//! of chatter ("Here is your README:"). [`MarkdownSanitizer::clean`] strips
//! both and makes sure the result starts with a top-level heading.
//!
//! Heading detection is regex based: a `#` inside a code block or a URL
//! counts as "a heading marker is present" and suppresses the synthesized
//! title. The fence pattern also reads a language tag such as ```` ```bash ````
//! as an untagged fence, so the first code block of any kind is unwrapped.

use once_cell::sync::Lazy;
use regex::Regex;

/// First fenced block tagged `markdown`/`md`, or untagged
static RE_FENCED_BLOCK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)```(?:markdown|md)?\s*([\s\S]+?)```").unwrap());

static RE_LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^```(?:markdown|md)?\s*").unwrap());

static RE_TRAILING_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"```$").unwrap());

/// `# ` heading at a line start
static RE_TOP_HEADING: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# .+").unwrap());

pub struct MarkdownSanitizer;

impl MarkdownSanitizer {
    /// Clean raw model output.
    ///
    /// 1) Trim.
    /// 2) Keep only the interior of the first markdown/md/untagged fence.
    /// 3) Drop a leading and a trailing fence marker that survived.
    /// 4) Drop everything before the first `# ` heading.
    /// 5) With no heading and no `#` at all, prepend `# {fallback_title}`.
    ///    A blank fallback title leaves the text as it is.
    pub fn clean(raw: &str, fallback_title: &str) -> String {
        let mut markdown = raw.trim().to_string();

        if let Some(block) = RE_FENCED_BLOCK
            .captures(&markdown)
            .and_then(|caps| caps.get(1))
        {
            markdown = block.as_str().trim().to_string();
        }

        markdown = RE_LEADING_FENCE.replace(&markdown, "").into_owned();
        markdown = RE_TRAILING_FENCE.replace(&markdown, "").into_owned();

        if let Some(heading) = RE_TOP_HEADING.find(&markdown) {
            if heading.start() > 0 {
                markdown = markdown[heading.start()..].to_string();
            }
        } else if !markdown.contains('#') {
            let title = fallback_title.trim();
            if !title.is_empty() {
                markdown = format!("# {}\n\n{}", title, markdown);
            }
        }

        markdown
    }
}
