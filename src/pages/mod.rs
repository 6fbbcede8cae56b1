//! Page Dispatcher
//!
//! The fixed, ordered menu of pages and the renderer behind each one.
//!
//! A [`Page`] is resolved from its menu label, its renderer is invoked
//! with a [`RenderContext`], and any [`RenderError`] is caught and shown
//! inline on the display surface.
//!
//! ```text
//! label → Page::resolve → page.renderer() → validate columns → build spec → surface
//! ```

pub mod error;
pub mod renderers;

pub use error::{RenderError, RenderResult};

use crate::dataset::Dataset;
use crate::surface::DisplaySurface;
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// Everything a renderer may read
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub dataset: &'a Dataset,
    /// Date the calendar is computed from
    pub today: NaiveDate,
}

impl<'a> RenderContext<'a> {
    /// Context for the current local date
    pub fn new(dataset: &'a Dataset) -> Self {
        Self::at(dataset, chrono::Local::now().date_naive())
    }

    pub fn at(dataset: &'a Dataset, today: NaiveDate) -> Self {
        Self { dataset, today }
    }
}

/// Common renderer signature
pub type Renderer = fn(&RenderContext<'_>, &mut dyn DisplaySurface) -> RenderResult;

/// A menu page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    GenderDistribution,
    StrokeByGender,
    AgeDistribution,
    StrokeByAge,
    AgeByStrokeStatus,
    MarriageByStroke,
    WorkTypeByStroke,
    ResidenceTypeByStroke,
    ResidenceByStroke,
    GlucoseByAge,
    SmokingByStroke,
    CorrelationHeatmap,
    FullYearCalendar,
}

impl Page {
    /// Menu order
    pub const ALL: [Page; 14] = [
        Page::Home,
        Page::GenderDistribution,
        Page::StrokeByGender,
        Page::AgeDistribution,
        Page::StrokeByAge,
        Page::AgeByStrokeStatus,
        Page::MarriageByStroke,
        Page::WorkTypeByStroke,
        Page::ResidenceTypeByStroke,
        Page::ResidenceByStroke,
        Page::GlucoseByAge,
        Page::SmokingByStroke,
        Page::CorrelationHeatmap,
        Page::FullYearCalendar,
    ];

    /// Menu label; also the page header
    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::GenderDistribution => "Distribution of Gender Feature",
            Page::StrokeByGender => "Stroke Distribution by Gender Group",
            Page::AgeDistribution => "Age Distribution",
            Page::StrokeByAge => "Stroke Distribution by Age Group",
            Page::AgeByStrokeStatus => "Age Distribution by Stroke Status",
            Page::MarriageByStroke => "Marriage Distribution by Stroke Status",
            Page::WorkTypeByStroke => "Work Type Distribution by Stroke Status",
            Page::ResidenceTypeByStroke => "Residence Type Distribution by Stroke Status",
            Page::ResidenceByStroke => "Residence Distribution by Stroke Status",
            Page::GlucoseByAge => "Average Glucose Level by Age Group",
            Page::SmokingByStroke => "Smoking Status Distribution by Stroke",
            Page::CorrelationHeatmap => "Correlation Matrix Heatmap",
            Page::FullYearCalendar => "Full Year Calendar",
        }
    }

    /// URL-friendly identifier
    pub fn slug(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::GenderDistribution => "gender-distribution",
            Page::StrokeByGender => "stroke-by-gender",
            Page::AgeDistribution => "age-distribution",
            Page::StrokeByAge => "stroke-by-age",
            Page::AgeByStrokeStatus => "age-by-stroke-status",
            Page::MarriageByStroke => "marriage-by-stroke",
            Page::WorkTypeByStroke => "work-type-by-stroke",
            Page::ResidenceTypeByStroke => "residence-type-by-stroke",
            Page::ResidenceByStroke => "residence-by-stroke",
            Page::GlucoseByAge => "glucose-by-age",
            Page::SmokingByStroke => "smoking-by-stroke",
            Page::CorrelationHeatmap => "correlation-heatmap",
            Page::FullYearCalendar => "full-year-calendar",
        }
    }

    /// Look up a page by its exact menu label
    pub fn resolve(label: &str) -> Option<Page> {
        Self::ALL.iter().copied().find(|p| p.label() == label)
    }

    pub fn from_slug(slug: &str) -> Option<Page> {
        Self::ALL.iter().copied().find(|p| p.slug() == slug)
    }

    pub fn renderer(&self) -> Renderer {
        match self {
            Page::Home => renderers::home,
            Page::GenderDistribution => renderers::distribution_of_gender,
            Page::StrokeByGender => renderers::stroke_by_gender,
            Page::AgeDistribution => renderers::age_distribution,
            Page::StrokeByAge => renderers::stroke_by_age,
            Page::AgeByStrokeStatus => renderers::age_by_stroke_status,
            Page::MarriageByStroke => renderers::marriage_by_stroke,
            Page::WorkTypeByStroke => renderers::work_type_by_stroke,
            Page::ResidenceTypeByStroke => renderers::residence_type_by_stroke,
            Page::ResidenceByStroke => renderers::residence_by_stroke,
            Page::GlucoseByAge => renderers::glucose_by_age,
            Page::SmokingByStroke => renderers::smoking_by_stroke,
            Page::CorrelationHeatmap => renderers::correlation_heatmap,
            Page::FullYearCalendar => renderers::full_year_calendar,
        }
    }

    /// Columns the renderer checks before drawing
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Page::Home | Page::CorrelationHeatmap | Page::FullYearCalendar => &[],
            Page::GenderDistribution => &["gender"],
            Page::StrokeByGender => &["gender", "stroke"],
            Page::AgeDistribution => &["age"],
            Page::StrokeByAge | Page::AgeByStrokeStatus => &["age", "stroke"],
            Page::MarriageByStroke => &["ever_married", "stroke"],
            Page::WorkTypeByStroke => &["work_type", "stroke"],
            Page::ResidenceTypeByStroke => &["residence_type", "stroke"],
            Page::ResidenceByStroke => &["Residence", "stroke"],
            Page::GlucoseByAge => &["age", "avg_glucose_level"],
            Page::SmokingByStroke => &["smoking_status", "stroke"],
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Run a page's renderer, showing any failure inline
pub fn invoke(page: Page, ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) {
    tracing::debug!(page = page.label(), "Rendering page");

    if let Err(err) = (page.renderer())(ctx, surface) {
        tracing::warn!(page = page.label(), error = %err, "Renderer failed");
        surface.error(&err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Document;
    use std::collections::HashSet;

    #[test]
    fn test_resolve_every_label() {
        for page in Page::ALL {
            assert_eq!(Page::resolve(page.label()), Some(page));
            assert_eq!(Page::from_slug(page.slug()), Some(page));
        }
        assert_eq!(Page::resolve("Home"), Some(Page::Home));
        assert_eq!(Page::resolve("Age Distribution"), Some(Page::AgeDistribution));
    }

    #[test]
    fn test_resolve_is_exact() {
        assert_eq!(Page::resolve("home"), None);
        assert_eq!(Page::resolve("Age Distribution "), None);
        assert_eq!(Page::resolve("Unknown"), None);
    }

    #[test]
    fn test_labels_and_slugs_unique() {
        let labels: HashSet<&str> = Page::ALL.iter().map(|p| p.label()).collect();
        let slugs: HashSet<&str> = Page::ALL.iter().map(|p| p.slug()).collect();
        assert_eq!(labels.len(), 14);
        assert_eq!(slugs.len(), 14);
    }

    #[test]
    fn test_menu_order() {
        assert_eq!(Page::ALL[0], Page::Home);
        assert_eq!(Page::ALL[13], Page::FullYearCalendar);
        assert_eq!(Page::default(), Page::Home);
    }

    #[test]
    fn test_every_page_starts_with_its_label() {
        let ds = Dataset::default();
        let ctx = RenderContext::new(&ds);
        for page in Page::ALL {
            let mut doc = Document::new();
            invoke(page, &ctx, &mut doc);
            assert_eq!(doc.headers().first().copied(), Some(page.label()));
        }
    }

    #[test]
    fn test_invoke_catches_errors() {
        let ds = Dataset::default();
        let ctx = RenderContext::new(&ds);
        let mut doc = Document::new();
        invoke(Page::MarriageByStroke, &ctx, &mut doc);
        assert_eq!(doc.errors(), vec!["Necessary columns not found in the dataset"]);
    }
}
