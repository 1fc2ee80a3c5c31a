use crate::domain::{Article, Fallback, Mode};

const RULE_WIDTH: usize = 50;
const PREVIEW_CHARS: usize = 100;

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

pub fn banner(title: &str) -> String {
    format!("{rule}\n{title}\n{rule}", rule = rule())
}

/// Lines reporting the requested mode and, if taken, the fallback
pub fn mode_report(requested: Mode, fallback: Option<&Fallback>, what: &str) -> Vec<String> {
    let mut lines = vec![requested.banner().to_string()];

    if let Some(reason) = fallback {
        lines.push(format!("Warning: {}, falling back to mock {}", reason, what));
        lines.push(Mode::Mock.banner().to_string());
    }

    lines
}

/// Numbered preview of an article: title, source and a content excerpt
pub fn preview(index: usize, article: &Article) -> String {
    format!(
        "{}. {}\n   Source: {}\n   {}...",
        index,
        article.title,
        article.source,
        article.excerpt(PREVIEW_CHARS)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_banner() {
        let banner = banner("News Fetcher");
        let lines: Vec<&str> = banner.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].len(), 50);
        assert_eq!(lines[1], "News Fetcher");
    }

    #[test]
    fn test_mode_report_without_fallback() {
        let lines = mode_report(Mode::Mock, None, "data");
        assert_eq!(lines, vec!["[MOCK] Running in MOCK mode (deterministic)"]);
    }

    #[test]
    fn test_mode_report_with_fallback() {
        let reason = Fallback::MissingCredential("NEWS_API_KEY");
        let lines = mode_report(Mode::Live, Some(&reason), "data");

        assert_eq!(
            lines,
            vec![
                "[REAL] Running in REAL mode",
                "Warning: NEWS_API_KEY not set, falling back to mock data",
                "[MOCK] Running in MOCK mode (deterministic)",
            ]
        );
    }

    #[test]
    fn test_preview_truncates_content() {
        let article = Article::new("Long read", Utc::now())
            .with_source("Daily")
            .with_content("x".repeat(250));

        let preview = preview(2, &article);
        let last = preview.lines().last().unwrap();

        assert!(preview.starts_with("2. Long read\n   Source: Daily\n"));
        assert_eq!(last, format!("   {}...", "x".repeat(100)));
    }
}
