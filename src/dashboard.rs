//! Dashboard
//!
//! Composes one full render: the fixed page chrome, the selected page and,
//! on request, the full-year calendar. Every call starts from an empty
//! [`Document`], so nothing carries over between interactions.

use crate::dataset::Dataset;
use crate::pages::{invoke, Page, RenderContext};
use crate::surface::{DisplaySurface, Document};
use chrono::NaiveDate;
use std::sync::Arc;

pub const TITLE: &str = "Healthcare Stroke Dataset";

const INTRODUCTION: [&str; 6] = [
    "A Stroke is a medical condition that may cause sudden death. In these cases, the movement ability of the patient reduces or even stops.",
    "The patient may also experience problems in speaking and understanding languages. If not treated in time, it will cause death.",
    "In addition, stroke is correlated with high blood pressure, smoking, obesity, high blood cholesterol, and diabetes.",
    "In this work, we propose to use the database proposed in to identify people who are likely to be suffering a stroke.",
    "The final output is a classification/boolean problem.",
    "and also what specific crops suitable to be planted in an appropriate area",
];

const AUTHOR: &str = "Submitted by: Prince Naif Cambing BSIT-3A";
const GITHUB_LABEL: &str = "Visit my GitHub";
const GITHUB_URL: &str = "https://github.com/SungDy";

const PRIMARY_OBJECTIVE: &str = "The primary objective of this notebook is to conduct a thorough evaluation of various machine learning models classifiers to identify the most accurate algorithm for predicting the target variable. The evaluation will culminate with the application of the best-performing model on a set of dummy data to demonstrate its predictive capabilities.";

/// Read-only dashboard over a loaded dataset
#[derive(Debug, Clone)]
pub struct Dashboard {
    dataset: Arc<Dataset>,
}

impl Dashboard {
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    pub fn from_shared(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Render a page as of today's local date
    pub fn render(&self, page: Page, show_calendar: bool) -> Document {
        self.render_at(page, show_calendar, chrono::Local::now().date_naive())
    }

    /// Render a page with the calendar computed from `today`
    pub fn render_at(&self, page: Page, show_calendar: bool, today: NaiveDate) -> Document {
        let ctx = RenderContext::at(&self.dataset, today);
        let mut doc = Document::new();

        self.chrome(&mut doc);
        invoke(page, &ctx, &mut doc);
        if show_calendar {
            invoke(Page::FullYearCalendar, &ctx, &mut doc);
        }

        tracing::debug!(
            page = page.label(),
            calendar = show_calendar,
            blocks = doc.blocks.len(),
            "Rendered dashboard"
        );
        doc
    }

    fn chrome(&self, surface: &mut dyn DisplaySurface) {
        surface.title(TITLE);
        surface.text(&INTRODUCTION.join(" "));
        surface.text(AUTHOR);
        surface.link(GITHUB_LABEL, GITHUB_URL);
        surface.table(&self.dataset);
        surface.header("Primary Objective");
        surface.text(PRIMARY_OBJECTIVE);
        surface.header("Dataset Overview");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Value;
    use crate::surface::Block;

    fn dashboard() -> Dashboard {
        Dashboard::new(Dataset::from_rows(
            &["gender", "age", "stroke"],
            vec![
                vec!["Male".into(), Value::Int(67), Value::Int(1)],
                vec!["Female".into(), Value::Int(61), Value::Int(0)],
            ],
        ))
    }

    fn june_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_chrome_order() {
        let doc = dashboard().render_at(Page::Home, false, june_2024());

        assert_eq!(doc.blocks[0], Block::Title { text: TITLE.to_string() });
        assert!(matches!(&doc.blocks[3], Block::Link { url, .. } if url == GITHUB_URL));
        assert_eq!(
            doc.headers(),
            vec!["Primary Objective", "Dataset Overview", "Home"]
        );
    }

    #[test]
    fn test_introduction_is_complete() {
        let doc = dashboard().render_at(Page::Home, false, june_2024());
        let Block::Text { text } = &doc.blocks[1] else {
            panic!("expected the introduction, got {:?}", doc.blocks[1]);
        };
        assert!(text.starts_with("A Stroke is a medical condition that may cause sudden death."));
        assert!(text.ends_with(
            "The final output is a classification/boolean problem. and also what specific crops suitable to be planted in an appropriate area"
        ));
    }

    #[test]
    fn test_full_table_is_shown() {
        let doc = dashboard().render_at(Page::Home, false, june_2024());
        let table = doc
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Table { columns, rows } => Some((columns, rows)),
                _ => None,
            })
            .unwrap();
        assert_eq!(table.0, &vec!["gender", "age", "stroke"]);
        assert_eq!(table.1.len(), 2);
    }

    #[test]
    fn test_page_follows_chrome() {
        let doc = dashboard().render_at(Page::GenderDistribution, false, june_2024());
        assert_eq!(doc.headers().last().copied(), Some("Distribution of Gender Feature"));
        assert_eq!(doc.charts().len(), 1);
    }

    #[test]
    fn test_calendar_appended_after_page() {
        let doc = dashboard().render_at(Page::GenderDistribution, true, june_2024());
        let headers = doc.headers();
        assert_eq!(
            &headers[headers.len() - 2..],
            &["Distribution of Gender Feature", "Full Year Calendar"]
        );
        assert_eq!(doc.charts().len(), 1);
        assert_eq!(doc.subheaders().len(), 12);
    }

    #[test]
    fn test_calendar_page_and_trigger_render_twice() {
        let doc = dashboard().render_at(Page::FullYearCalendar, true, june_2024());
        assert_eq!(doc.subheaders().len(), 24);
    }

    #[test]
    fn test_renders_are_independent() {
        let dashboard = dashboard();
        let first = dashboard.render_at(Page::MarriageByStroke, false, june_2024());
        let second = dashboard.render_at(Page::Home, false, june_2024());
        assert_eq!(first.errors().len(), 1);
        assert!(second.errors().is_empty());
    }
}
