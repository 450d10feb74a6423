//! HTML page rendering.

use std::collections::BTreeSet;

use super::styles::STYLESHEET;
use super::{category_css_class, category_display_name, html_escape};
use crate::models::{Paper, PaperListing};

/// Page title and header text.
const PAGE_TITLE: &str = "Daily AI Research Feed";

/// Categories offered in the filter bar when present in the feed.
const FILTER_CATEGORIES: &[&str] = &["cs.CL", "cs.CV", "cs.AI"];

/// Badges shown per card.
const MAX_BADGES: usize = 3;

/// Render the full feed page for a listing.
#[must_use]
pub fn render_page(listing: &PaperListing) -> String {
    let body = if listing.is_empty() {
        render_empty_stats()
    } else {
        let cards = if listing.papers.is_empty() {
            render_empty_papers_message()
        } else {
            listing.papers.iter().map(render_paper_card).collect::<Vec<_>>().join("\n")
        };

        format!(
            "{}\n{}\n<div class=\"grid-container\">\n{}\n</div>",
            render_stats(listing),
            render_filter_bar(&listing.categories, listing.category.as_deref()),
            cards
        )
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width,initial-scale=1">
<title>{PAGE_TITLE}</title>
<style>{STYLESHEET}</style>
</head>
<body>
<main>
{body}
</main>
</body>
</html>"#
    )
}

/// Render one paper as a card.
#[must_use]
pub fn render_paper_card(paper: &Paper) -> String {
    let badges = paper
        .categories
        .iter()
        .take(MAX_BADGES)
        .map(|code| {
            format!(
                r#"<span class="category-badge {}">{}</span>"#,
                category_css_class(code),
                html_escape(category_display_name(code))
            )
        })
        .collect::<String>();

    format!(
        r#"<article class="paper-card">
<h3 class="paper-title">{title}</h3>
<p class="paper-authors">{authors}</p>
<p class="paper-abstract">{abstract_text}</p>
<div class="paper-categories">{badges}</div>
<div class="paper-meta">
<span class="paper-date">{date}</span>
<a class="arxiv-btn" href="{link}" target="_blank" rel="noopener">View on arXiv</a>
</div>
</article>"#,
        title = html_escape(&paper.title),
        authors = html_escape(&paper.author_line()),
        abstract_text = html_escape(&paper.r#abstract),
        date = html_escape(&paper.published_display),
        link = html_escape(&paper.link()),
    )
}

fn render_header() -> String {
    let sparkles = ["✨", "💫", "⭐", "✨", "🌟"]
        .iter()
        .map(|s| format!(r#"<span class="sparkle">{s}</span>"#))
        .collect::<String>();

    format!(
        r#"<div class="header-icon">🤖</div>
<h2><span class="glitter-text">{PAGE_TITLE}</span></h2>
<div class="floating-sparkles">{sparkles}</div>"#
    )
}

fn stat_item(value: &str, label: &str) -> String {
    format!(
        r#"<div class="stat-item"><span class="stat-number">{value}</span><div class="stat-label">{label}</div></div>"#
    )
}

fn render_stats(listing: &PaperListing) -> String {
    let mut stats = stat_item(&listing.total_count.to_string(), "📄 Papers");
    if listing.category_count > 1 {
        stats.push_str(&stat_item(&listing.category_count.to_string(), "🏷️ Categories"));
    }
    if listing.cache_age_minutes >= 0 {
        stats.push_str(&stat_item(&format!("{}m", listing.cache_age_minutes), "🕒 Cache Age"));
    }

    let subtitle = listing.category.as_deref().map_or_else(
        || "🌟 Latest from arXiv".to_string(),
        |code| format!("🔍 {}", html_escape(category_display_name(code))),
    );

    format!(
        r#"<section class="stats-section">
{header}
<div class="stats-content">
<div class="stats-grid">{stats}</div>
<p>{subtitle}</p>
<a class="refresh-btn" href="/refresh" role="button">🔄 Refresh</a>
</div>
</section>"#,
        header = render_header(),
    )
}

fn render_empty_stats() -> String {
    format!(
        r#"<section class="stats-section">
{header}
<div class="stats-content">
<div class="stats-grid">{stats}</div>
<p>🚀 Initialize your collection</p>
<a class="refresh-btn" href="/refresh" role="button">🔄 Fetch Papers</a>
</div>
</section>"#,
        header = render_header(),
        stats = stat_item("0", "📄 Papers"),
    )
}

fn render_filter_bar(categories: &BTreeSet<String>, current: Option<&str>) -> String {
    let active = |on: bool| if on { " active" } else { "" };

    let mut badges =
        format!(r#"<a class="filter-badge{}" href="/">All Categories</a>"#, active(current.is_none()));

    for code in FILTER_CATEGORIES.iter().filter(|c| categories.contains(**c)) {
        badges.push_str(&format!(
            r#"<a class="filter-badge{}" href="/?category={}">{}</a>"#,
            active(current == Some(*code)),
            code,
            category_display_name(code)
        ));
    }

    format!(
        r#"<section class="filter-section">
<div class="filter-title">Research Categories</div>
<div class="filter-badges">{badges}</div>
</section>"#
    )
}

fn render_empty_papers_message() -> String {
    r#"<div class="empty-message">
<h3>No Research Papers Available</h3>
<p>No papers found in the selected category. Try a different filter or refresh the collection.</p>
</div>"#
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper() -> Paper {
        Paper {
            title: "Attention <Is> All You Need".into(),
            authors: vec!["A".into(), "B".into(), "C".into(), "D".into()],
            r#abstract: "Transformers & friends.".into(),
            published_display: "2026-03-09 17:59:58 UTC".into(),
            source_id: "http://arxiv.org/abs/1706.03762v7".into(),
            categories: vec!["cs.CL".into(), "cs.LG".into(), "cs.AI".into(), "stat.ML".into()],
            ..Default::default()
        }
    }

    fn listing(
        papers: Vec<Paper>,
        all_count: usize,
        categories: &[&str],
        category: Option<&str>,
    ) -> PaperListing {
        PaperListing {
            total_count: papers.len(),
            papers,
            all_count,
            category_count: categories.len(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            cache_age_minutes: 4,
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_card_escapes_and_links() {
        let html = render_paper_card(&paper());
        assert!(html.contains("Attention &lt;Is&gt; All You Need"));
        assert!(html.contains("Transformers &amp; friends."));
        assert!(html.contains("A, B, C et al."));
        assert!(html.contains(r#"href="http://arxiv.org/abs/1706.03762v7""#));
    }

    #[test]
    fn test_card_limits_badges() {
        let html = render_paper_card(&paper());
        assert_eq!(html.matches("category-badge").count(), 3);
        assert!(html.contains("Natural Language Processing"));
        assert!(!html.contains("Statistical ML"));
    }

    #[test]
    fn test_page_with_papers() {
        let html = render_page(&listing(vec![paper()], 1, &["cs.CL", "cs.LG"], None));

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("paper-card"));
        assert!(html.contains("4m"));
        assert!(html.contains(r#"href="/?category=cs.CL""#));
        assert!(!html.contains("category=cs.CV"));
        assert!(html.contains(r#"<a class="filter-badge active" href="/">"#));
    }

    #[test]
    fn test_page_with_empty_filter_result() {
        let html = render_page(&listing(Vec::new(), 5, &["cs.CV"], Some("cs.CV")));

        assert!(html.contains("No Research Papers Available"));
        assert!(html.contains("🔍 Computer Vision"));
        assert!(html.contains(r#"<a class="filter-badge active" href="/?category=cs.CV">"#));
    }

    #[test]
    fn test_page_when_nothing_fetched() {
        let html = render_page(&listing(Vec::new(), 0, &[], None));
        assert!(html.contains("Initialize your collection"));
        assert!(html.contains("Fetch Papers"));
        assert!(!html.contains(r#"<section class="filter-section">"#));
        assert!(!html.contains(r#"<a class="filter-badge"#));
    }

    #[test]
    fn test_filter_bar_markup_only_with_papers() {
        let filled = render_page(&listing(vec![paper()], 1, &["cs.AI"], None));
        assert!(filled.contains(r#"<section class="filter-section">"#));

        let empty = render_empty_stats();
        assert!(!empty.contains("filter-section"));
        assert!(empty.contains(r#"href="/refresh""#));
    }
}
