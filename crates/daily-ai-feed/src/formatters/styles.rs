//! Stylesheet for the feed page.

/// CSS inlined into every page.
pub const STYLESHEET: &str = r#"
:root {
    --card-bg: #ffffff;
    --card-border: #e5e7eb;
    --page-bg: #f8fafc;
    --text-primary: #1f2937;
    --text-secondary: #6b7280;
    --text-muted: #9ca3af;
    --accent-blue: #3b82f6;
    --accent-blue-hover: #2563eb;
    --accent-green: #10b981;
    --accent-purple: #8b5cf6;
    --accent-orange: #f59e0b;
    --accent-red: #ef4444;
    --shadow-sm: 0 1px 2px 0 rgb(0 0 0 / 0.05);
    --shadow-lg: 0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1);
}

@media (prefers-color-scheme: dark) {
    :root {
        --card-bg: #1f2937;
        --card-border: #374151;
        --page-bg: #111827;
        --text-primary: #f9fafb;
        --text-secondary: #d1d5db;
    }
}

body {
    margin: 0;
    background: var(--page-bg);
    color: var(--text-primary);
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif;
}

main { max-width: 960px; margin: 0 auto; padding: 2rem 1rem; }

.stats-section {
    position: relative;
    overflow: hidden;
    text-align: center;
    padding: 2.5rem 1.5rem;
    margin-bottom: 2rem;
    border-radius: 1rem;
    color: white;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 50%, #f093fb 100%);
    box-shadow: var(--shadow-lg);
}
.header-icon { font-size: 3rem; margin-bottom: 0.5rem; }
.glitter-text {
    font-size: 2rem;
    font-weight: 800;
    background: linear-gradient(90deg, #fff, #ffd700, #fff, #ff69b4, #fff);
    background-size: 300% 100%;
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
    animation: shimmer 4s ease-in-out infinite;
}
@keyframes shimmer {
    0%, 100% { background-position: 0% 50%; }
    50% { background-position: 100% 50%; }
}
.floating-sparkles { position: absolute; inset: 0; pointer-events: none; }
.sparkle { position: absolute; bottom: -1rem; animation: float 6s ease-in-out infinite; }
.sparkle:nth-child(1) { left: 10%; animation-delay: 0s; }
.sparkle:nth-child(2) { left: 25%; animation-delay: 1s; }
.sparkle:nth-child(3) { left: 50%; animation-delay: 2s; }
.sparkle:nth-child(4) { left: 75%; animation-delay: 3s; }
.sparkle:nth-child(5) { left: 90%; animation-delay: 4s; }
@keyframes float {
    0% { transform: translateY(0); opacity: 0; }
    20% { opacity: 1; }
    100% { transform: translateY(-14rem); opacity: 0; }
}
.stats-grid { display: flex; justify-content: center; gap: 2.5rem; margin: 1.5rem 0 1rem; }
.stat-number { display: block; font-size: 2rem; font-weight: 700; }
.stat-label { font-size: 0.85rem; opacity: 0.9; }
.stats-section p { margin: 0.5rem 0 1.25rem; font-weight: 500; }
.refresh-btn {
    display: inline-block;
    padding: 0.6rem 1.4rem;
    border-radius: 9999px;
    color: white;
    text-decoration: none;
    font-weight: 600;
    background: rgb(255 255 255 / 0.2);
    border: 1px solid rgb(255 255 255 / 0.4);
}
.refresh-btn:hover { background: rgb(255 255 255 / 0.35); }

.filter-section { margin-bottom: 1.5rem; }
.filter-title { font-weight: 600; margin-bottom: 0.75rem; color: var(--text-secondary); }
.filter-badges { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.filter-badge {
    padding: 0.35rem 0.9rem;
    border-radius: 9999px;
    border: 1px solid var(--card-border);
    color: var(--text-secondary);
    text-decoration: none;
    font-size: 0.875rem;
}
.filter-badge:hover { border-color: var(--accent-blue); color: var(--accent-blue); }
.filter-badge.active { background: var(--accent-blue); border-color: var(--accent-blue); color: white; }

.paper-card {
    border: 1px solid var(--card-border);
    border-radius: 0.75rem;
    padding: 1.5rem;
    margin-bottom: 1.5rem;
    background: var(--card-bg);
    box-shadow: var(--shadow-sm);
    transition: all 0.2s ease-in-out;
}
.paper-card:hover { transform: translateY(-2px); box-shadow: var(--shadow-lg); border-color: var(--accent-blue); }
.paper-title { font-size: 1.125rem; font-weight: 600; margin: 0 0 0.75rem; line-height: 1.4; }
.paper-authors { font-size: 0.875rem; font-weight: 500; color: var(--text-secondary); margin: 0 0 0.75rem; }
.paper-abstract { font-size: 0.9rem; line-height: 1.6; color: var(--text-secondary); text-align: justify; }
.paper-categories { margin-bottom: 1rem; }
.category-badge {
    display: inline-block;
    font-size: 0.75rem;
    font-weight: 500;
    padding: 0.25rem 0.75rem;
    margin: 0.125rem 0.5rem 0.125rem 0;
    border-radius: 9999px;
    color: white;
}
.category-ai { background-color: var(--accent-blue); }
.category-ml { background-color: var(--accent-green); }
.category-cv { background-color: var(--accent-purple); }
.category-cl { background-color: var(--accent-orange); }
.category-ne { background-color: var(--accent-red); }
.category-stat { background-color: #a855f7; }
.category-default { background-color: var(--text-muted); }
.paper-meta {
    display: flex;
    flex-wrap: wrap;
    gap: 0.75rem;
    justify-content: space-between;
    align-items: center;
    border-top: 1px solid var(--card-border);
    padding-top: 1rem;
}
.paper-date { font-size: 0.8rem; font-weight: 500; color: var(--text-muted); }
.arxiv-btn {
    font-size: 0.875rem;
    padding: 0.4rem 1rem;
    border-radius: 0.5rem;
    background: var(--accent-blue);
    color: white;
    text-decoration: none;
}
.arxiv-btn:hover { background: var(--accent-blue-hover); }

.empty-message { text-align: center; padding: 2rem; color: var(--text-muted); }

@media (max-width: 768px) {
    .stats-grid { gap: 1.25rem; }
    .paper-meta { flex-direction: column; align-items: flex-start; }
}
"#;
