#![cfg(test)]
/*!
Theme selector lint for the desktop build.

Purpose:
- Ensure that critical CSS selectors required by the desktop UI (chart frames,
  tooltips, the brush overlay, donut toggles) remain present in the unified
  shared theme: ui/assets/theme/main.css
- Fail fast if a refactor accidentally drops or renames core classes, preventing a
  silent styling regression in packaged (embedded) desktop builds.

How it works:
- We compile‑time embed the unified theme using `include_str!` pointing to the shared
  `ui/` location (mirrors the constant in `desktop/src/main.rs`).
- We assert presence of a curated set of selectors / tokens.
- If you intentionally rename or remove a selector:
    1. Update the component markup.
    2. Adjust this test's REQUIRED_SELECTORS accordingly.

Why not parse CSS properly?
- A lightweight substring presence check is sufficient as an early warning.
- Keeping zero extra dependencies avoids increasing compile times.

Extending:
- Add new selectors to REQUIRED_SELECTORS when introducing structural CSS relied
  upon by Rust components (especially for new charts or summary panels).
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

/// Core selectors / tokens that must exist in the shared theme for desktop.
const REQUIRED_SELECTORS: &[&str] = &[
    // Global / layout
    ":root",
    "body {",
    ".page {",
    ".page__error",
    // Highlights cards
    ".results-card",
    ".results-card__header",
    ".results-card__meta",
    ".results-card__placeholder",
    ".results-highlights",
    ".results-highlight",
    ".results-highlight__value",
    // Chart chrome
    ".chart-card",
    ".chart-frame",
    ".chart-tooltip",
    ".chart-title",
    ".chart-axis__domain",
    ".chart-axis__label",
    ".chart-legend__label",
    // Bar chart & brush
    ".bar-chart__bar",
    ".chart-brush__overlay",
    ".chart-brush__extent",
    ".bar-summary",
    // Donut
    ".donut-toggle__button",
    ".donut-toggle__button--active",
    ".donut__slice",
    ".donut__figure",
    // Sankey
    ".sankey__ribbon",
    ".sankey__node",
    ".sankey__label",
];

#[test]
fn unified_theme_contains_required_selectors() {
    let mut missing = Vec::new();
    for sel in REQUIRED_SELECTORS {
        if !THEME_CSS.contains(sel) {
            missing.push(*sel);
        }
    }

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in unified theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn unified_theme_not_trivially_empty() {
    let non_ws_len = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws_len > 2_500,
        "Embedded theme appears unexpectedly small ({} non-whitespace chars) – \
         did the file get truncated or path change?",
        non_ws_len
    );
}

#[test]
fn interactive_marks_keep_their_transitions() {
    // The bar dim/undim and sankey hover fades rely on CSS transitions.
    for selector in [".bar-chart__bar", ".sankey__ribbon"] {
        let start = THEME_CSS
            .find(selector)
            .unwrap_or_else(|| panic!("selector `{selector}` missing"));
        let block = &THEME_CSS[start..THEME_CSS[start..].find('}').map_or(THEME_CSS.len(), |end| start + end)];
        assert!(
            block.contains("transition"),
            "`{selector}` lost its transition"
        );
    }
}
