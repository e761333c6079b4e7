//! Markdown inspection for metadata the front-matter leaves out

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

/// Plain text of the first level-1 heading in a markdown body
pub fn first_heading(markdown: &str) -> Option<String> {
    let options = Options::ENABLE_HEADING_ATTRIBUTES | Options::ENABLE_STRIKETHROUGH;
    let mut in_title = false;
    let mut title = String::new();

    for event in Parser::new_ext(markdown, options) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_title = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = title.trim();
                return if title.is_empty() {
                    None
                } else {
                    Some(title.to_string())
                };
            }
            Event::Text(text) | Event::Code(text) if in_title => title.push_str(&text),
            Event::SoftBreak | Event::HardBreak if in_title => title.push(' '),
            _ => {}
        }
    }

    None
}

/// Excerpt separators, in the forms `.md` and `.mdx` posts use
const EXCERPT_MARKERS: &[&str] = &["<!-- truncate -->", "{/* truncate */}", "<!-- more -->"];

/// Plain text of the first paragraph of the excerpt, used when a post has no
/// `description`. The excerpt is everything before the first separator, or
/// the whole body when there is none.
pub fn excerpt_description(markdown: &str) -> Option<String> {
    let excerpt = EXCERPT_MARKERS
        .iter()
        .filter_map(|marker| markdown.find(marker))
        .min()
        .map_or(markdown, |pos| &markdown[..pos]);

    let options = Options::ENABLE_HEADING_ATTRIBUTES | Options::ENABLE_STRIKETHROUGH;
    let mut in_paragraph = false;
    let mut image_depth = 0usize;
    let mut text = String::new();

    for event in Parser::new_ext(excerpt, options) {
        match event {
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                text.clear();
            }
            Event::End(TagEnd::Paragraph) => {
                in_paragraph = false;
                let paragraph = text.split_whitespace().collect::<Vec<_>>().join(" ");
                // `{/* ... */}` lines are MDX comments, not prose
                if !paragraph.is_empty() && !is_mdx_comment(&paragraph) {
                    return Some(paragraph);
                }
            }
            Event::Start(Tag::Image { .. }) => image_depth += 1,
            Event::End(TagEnd::Image) => image_depth = image_depth.saturating_sub(1),
            Event::Text(t) | Event::Code(t) if in_paragraph && image_depth == 0 => {
                text.push_str(&t)
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => text.push(' '),
            _ => {}
        }
    }

    None
}

fn is_mdx_comment(text: &str) -> bool {
    text.starts_with("{/*") && text.ends_with("*/}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_heading() {
        let md = "Intro line\n\n## Not this\n\n# The *Real* `Title`\n\n# Second\n";
        assert_eq!(first_heading(md), Some("The Real Title".to_string()));
    }

    #[test]
    fn test_setext_heading() {
        assert_eq!(
            first_heading("Setext Title\n============\n\nbody"),
            Some("Setext Title".to_string())
        );
    }

    #[test]
    fn test_no_heading() {
        assert_eq!(first_heading("just a paragraph\n\n## h2 only"), None);
        assert_eq!(first_heading(""), None);
    }

    #[test]
    fn test_code_fence_is_not_heading() {
        assert_eq!(first_heading("```\n# comment\n```\n"), None);
    }

    #[test]
    fn test_excerpt_description_first_paragraph() {
        let md = "# Title\n\nFirst *plain* `text`\nwraps here.\n\nSecond paragraph.\n";
        assert_eq!(
            excerpt_description(md),
            Some("First plain text wraps here.".to_string())
        );
    }

    #[test]
    fn test_excerpt_description_stops_at_truncate() {
        assert_eq!(
            excerpt_description("# Only heading\n\n<!-- truncate -->\n\nAfter the fold."),
            None
        );
        assert_eq!(
            excerpt_description("{/* lead */}\n\nLead in.\n\n{/* truncate */}\n\nMore."),
            Some("Lead in.".to_string())
        );
    }

    #[test]
    fn test_excerpt_description_skips_images_and_blank() {
        assert_eq!(
            excerpt_description("![diagram](/img/a.png)\n\nReal text."),
            Some("Real text.".to_string())
        );
        assert_eq!(excerpt_description(""), None);
        assert_eq!(excerpt_description("```\ncode only\n```\n"), None);
    }
}
