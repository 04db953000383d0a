//! Plain-text helpers for article bodies

/// Words per minute used for reading time estimates
pub const WORDS_PER_MINUTE: usize = 200;

/// Reading time used when the content has no words at all
pub const DEFAULT_READING_TIME: u32 = 5;

/// Remove markup tags, leaving the text content.
///
/// Each tag is replaced by a space so adjacent blocks never glue words together.
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                out.push(' ');
            }
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

pub fn word_count(html: &str) -> usize {
    strip_tags(html).split_whitespace().count()
}

/// Estimated reading time in whole minutes, rounded up.
pub fn reading_time(html: &str) -> u32 {
    let words = word_count(html);
    if words == 0 {
        return DEFAULT_READING_TIME;
    }
    words.div_ceil(WORDS_PER_MINUTE) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tags_do_not_count_as_words() {
        assert_eq!(word_count("<h2>Two words</h2><p>and three more</p>"), 5);
        assert_eq!(word_count("<br/><hr>"), 0);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let words = vec!["word"; 201].join(" ");
        assert_eq!(reading_time(&words), 2);

        let words = vec!["word"; 200].join(" ");
        assert_eq!(reading_time(&format!("<p>{}</p>", words)), 1);

        assert_eq!(reading_time("just a few"), 1);
    }

    #[test]
    fn test_reading_time_defaults_for_empty_content() {
        assert_eq!(reading_time(""), DEFAULT_READING_TIME);
        assert_eq!(reading_time("   <p></p>  "), DEFAULT_READING_TIME);
    }
}
