//! Presentational style rules for the dashboard widgets.
//!
//! The dashboard page is served bare; the goal cards, progress indicators,
//! macros legend and meal log get their layout from this block, appended to
//! the page head at render time. Colors, spacing, radii and shadows resolve
//! through the host theme's design tokens so the block stays theme-agnostic.

use tracing::debug;

use crate::page::DashboardPage;

/// Style rules appended to the dashboard page head.
pub const DASHBOARD_STYLE_RULES: &str = r#"
.nutrition-dashboard {
    padding: var(--spacing-lg) 0;
}

.goals-cards {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: var(--spacing-md);
    margin-bottom: var(--spacing-lg);
}

.goal-card {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: var(--spacing-md);
    border-radius: var(--radius-lg);
    text-align: center;
}

.goal-value {
    font-size: 2rem;
    font-weight: 700;
    margin: var(--spacing-sm) 0;
}

.dashboard-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
    gap: var(--spacing-lg);
    margin-bottom: var(--spacing-lg);
}

.dashboard-card {
    background: white;
    padding: var(--spacing-lg);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-md);
}

.dashboard-card.full-width {
    grid-column: 1 / -1;
}

.dashboard-card h2 {
    margin-bottom: var(--spacing-md);
}

.progress-container {
    position: relative;
    text-align: center;
    margin-bottom: var(--spacing-md);
}

.progress-text {
    margin-top: var(--spacing-md);
}

.progress-text div {
    font-size: 2rem;
    font-weight: 700;
    color: var(--primary-color);
}

.progress-bar {
    height: 12px;
    background: var(--bg-secondary);
    border-radius: 10px;
    overflow: hidden;
}

.progress-fill {
    height: 100%;
    background: var(--gradient-primary);
    transition: width 0.5s ease;
}

.macros-legend {
    margin-top: var(--spacing-md);
}

.legend-item {
    display: flex;
    align-items: center;
    gap: var(--spacing-sm);
    margin-bottom: var(--spacing-sm);
}

.legend-color {
    width: 20px;
    height: 20px;
    border-radius: 4px;
}

.meals-log {
    background: white;
    padding: var(--spacing-lg);
    border-radius: var(--radius-lg);
    box-shadow: var(--shadow-md);
}

.meal-item {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: var(--spacing-sm);
    border-bottom: 1px solid var(--border-color);
}

.meal-type {
    display: inline-block;
    background: var(--bg-secondary);
    padding: 0.25rem 0.5rem;
    border-radius: var(--radius-sm);
    font-size: 0.75rem;
    margin-left: var(--spacing-sm);
}

.empty-state {
    text-align: center;
    color: var(--text-secondary);
    padding: var(--spacing-lg);
}
"#;

/// Append the dashboard style rules to the page head.
///
/// Always additive: every call appends a fresh resource and leaves existing
/// ones untouched, mirroring how the page accumulates injected style blocks.
pub fn inject_dashboard_styles(page: &mut DashboardPage) {
    debug!(bytes = DASHBOARD_STYLE_RULES.len(), "appending dashboard styles");
    page.append_style(DASHBOARD_STYLE_RULES);
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_each_injection_appends_a_resource() {
        let mut page = DashboardPage::new();

        inject_dashboard_styles(&mut page);
        assert_eq!(page.head_styles().len(), 1);

        inject_dashboard_styles(&mut page);
        assert_eq!(page.head_styles().len(), 2);
        assert_eq!(page.head_styles()[0].content, DASHBOARD_STYLE_RULES);
        assert_eq!(page.head_styles()[1].content, DASHBOARD_STYLE_RULES);
    }

    #[test]
    fn test_existing_styles_stay_untouched() {
        let mut page = DashboardPage::new();
        page.append_style(".host { color: red; }");

        inject_dashboard_styles(&mut page);

        assert_eq!(page.head_styles().len(), 2);
        assert_eq!(page.head_styles()[0].content, ".host { color: red; }");
    }

    #[test]
    fn test_rules_cover_the_dashboard_widgets() {
        for class in [
            ".nutrition-dashboard",
            ".goals-cards",
            ".goal-card",
            ".goal-value",
            ".dashboard-grid",
            ".dashboard-card",
            ".progress-container",
            ".progress-bar",
            ".progress-fill",
            ".macros-legend",
            ".legend-item",
            ".legend-color",
            ".meals-log",
            ".meal-item",
            ".meal-type",
            ".empty-state",
        ] {
            assert!(
                DASHBOARD_STYLE_RULES.contains(class),
                "missing rule for {class}"
            );
        }
    }

    #[test]
    fn test_rules_reference_the_design_tokens() {
        for token in [
            "var(--spacing-sm)",
            "var(--spacing-md)",
            "var(--spacing-lg)",
            "var(--radius-sm)",
            "var(--radius-lg)",
            "var(--shadow-md)",
            "var(--primary-color)",
            "var(--bg-secondary)",
            "var(--border-color)",
            "var(--text-secondary)",
            "var(--gradient-primary)",
        ] {
            assert!(
                DASHBOARD_STYLE_RULES.contains(token),
                "missing token {token}"
            );
        }
    }
}
