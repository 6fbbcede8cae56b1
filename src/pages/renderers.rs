//! Page renderers
//!
//! Each renderer writes its header, checks its required columns, builds
//! one chart specification and hands it to the surface. Failures are
//! returned to the dispatcher, which shows them inline.

use super::error::{RenderError, RenderResult};
use super::{Page, RenderContext};
use crate::calendar::CalendarGrid;
use crate::chart::{evaluate, to_vega_lite, ChartSpec, ColorEncoding, Encoding, Mark, Predicate};
use crate::correlation::CorrelationMatrix;
use crate::dataset::Dataset;
use crate::surface::{ChartBlock, DisplaySurface};

pub const GENDER_COLUMN_MISSING: &str = "Gender column not found in the dataset";
pub const AGE_COLUMN_MISSING: &str = "Age column not found in the dataset";
pub const NECESSARY_COLUMNS_MISSING: &str = "Necessary columns not found in the dataset";

/// Colors of the conditional age histogram
pub const STROKE_COLOR: &str = "orange";
pub const NO_STROKE_COLOR: &str = "steelblue";

const ATTRIBUTES_OVERVIEW: &str = "\
According to the World Health Organization (WHO) stroke is the 2nd leading cause of death globally \n\
responsible for approximately 11% of total deaths. This dataset is used to predict whether a patient is likely to get stroke based on the input parameters like gender \n\
age, various diseases, and smoking status. Each row in the data provides relevant information about the patient.

**Attributes Overview**:

- id: unique identifier.
- gender: \"Male\", \"Female\" or \"Other\".
- age: age of the patient.
- hypertension: 0 if the patient doesn't have hypertension, 1 if the patient has hypertension.
- heart_disease: 0 if the patient doesn't have any heart diseases, 1 if the patient has a heart disease.
- ever_married: \"No\" or \"Yes\".
- work_type: \"children\", \"Govt_job\", \"Never_worked\", \"Private\" or \"Self-employed\".
- residence_type: \"Rural\" or \"Urban\".
- avg_glucose_level: average glucose level in blood.
- bmi: body mass index.
- smoking_status: \"formerly smoked\", \"never smoked\", \"smokes\" or \"Unknown\".
- stroke: 1 if the patient had a stroke or 0 if not.
";

pub fn home(_ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) -> RenderResult {
    surface.header(Page::Home.label());
    surface.text("About Data");
    surface.text("Dataset Overview");
    surface.markdown(ATTRIBUTES_OVERVIEW);
    Ok(())
}

pub fn distribution_of_gender(
    ctx: &RenderContext<'_>,
    surface: &mut dyn DisplaySurface,
) -> RenderResult {
    let page = Page::GenderDistribution;
    surface.header(page.label());
    require(ctx, page, GENDER_COLUMN_MISSING)?;

    let spec = ChartSpec::new(
        Mark::Bar,
        Encoding::nominal("gender").title("Gender"),
        count(),
    )
    .title(page.label())
    .color(ColorEncoding::by(Encoding::nominal("gender")));

    draw(ctx.dataset, spec, surface)
}

pub fn stroke_by_gender(ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) -> RenderResult {
    let page = Page::StrokeByGender;
    surface.header(page.label());
    require(ctx, page, NECESSARY_COLUMNS_MISSING)?;

    let spec = ChartSpec::new(
        Mark::Bar,
        Encoding::nominal("gender").title("Gender"),
        count(),
    )
    .title(page.label())
    .color(by_stroke())
    .filter(had_stroke());

    draw(ctx.dataset, spec, surface)
}

pub fn age_distribution(ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) -> RenderResult {
    let page = Page::AgeDistribution;
    surface.header(page.label());
    require(ctx, page, AGE_COLUMN_MISSING)?;

    let spec = ChartSpec::new(Mark::Bar, binned_age(), count())
        .title(page.label())
        .color(ColorEncoding::condition(
            had_stroke(),
            STROKE_COLOR,
            NO_STROKE_COLOR,
        ));

    draw(ctx.dataset, spec, surface)
}

pub fn stroke_by_age(ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) -> RenderResult {
    let page = Page::StrokeByAge;
    surface.header(page.label());
    require(ctx, page, NECESSARY_COLUMNS_MISSING)?;

    let spec = ChartSpec::new(Mark::Bar, binned_age(), count())
        .title(page.label())
        .color(by_stroke())
        .filter(had_stroke());

    draw(ctx.dataset, spec, surface)
}

pub fn age_by_stroke_status(
    ctx: &RenderContext<'_>,
    surface: &mut dyn DisplaySurface,
) -> RenderResult {
    let page = Page::AgeByStrokeStatus;
    surface.header(page.label());
    require(ctx, page, NECESSARY_COLUMNS_MISSING)?;

    let spec = ChartSpec::new(Mark::Bar, binned_age(), count())
        .title(page.label())
        .color(by_stroke());

    draw(ctx.dataset, spec, surface)
}

pub fn marriage_by_stroke(ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) -> RenderResult {
    count_by_stroke(
        ctx,
        surface,
        Page::MarriageByStroke,
        "ever_married",
        "Marital Status",
        Page::MarriageByStroke.label(),
    )
}

pub fn work_type_by_stroke(ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) -> RenderResult {
    count_by_stroke(
        ctx,
        surface,
        Page::WorkTypeByStroke,
        "work_type",
        "Work Type",
        "Work Type Distribution by Stroke",
    )
}

pub fn residence_type_by_stroke(
    ctx: &RenderContext<'_>,
    surface: &mut dyn DisplaySurface,
) -> RenderResult {
    count_by_stroke(
        ctx,
        surface,
        Page::ResidenceTypeByStroke,
        "residence_type",
        "Residence Type",
        Page::ResidenceTypeByStroke.label(),
    )
}

/// Reads the capitalized `Residence` column, which the stroke schema does
/// not have; against that schema this page always reports missing columns.
pub fn residence_by_stroke(
    ctx: &RenderContext<'_>,
    surface: &mut dyn DisplaySurface,
) -> RenderResult {
    count_by_stroke(
        ctx,
        surface,
        Page::ResidenceByStroke,
        "Residence",
        "Residence",
        Page::ResidenceByStroke.label(),
    )
}

pub fn glucose_by_age(ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) -> RenderResult {
    let page = Page::GlucoseByAge;
    surface.header(page.label());
    require(ctx, page, NECESSARY_COLUMNS_MISSING)?;

    let spec = ChartSpec::new(
        Mark::Line,
        binned_age(),
        Encoding::mean("avg_glucose_level").title("Average Glucose Level"),
    )
    .title(page.label())
    .color(by_stroke());

    draw(ctx.dataset, spec, surface)
}

pub fn smoking_by_stroke(ctx: &RenderContext<'_>, surface: &mut dyn DisplaySurface) -> RenderResult {
    count_by_stroke(
        ctx,
        surface,
        Page::SmokingByStroke,
        "smoking_status",
        "Smoking Status",
        Page::SmokingByStroke.label(),
    )
}

pub fn correlation_heatmap(
    ctx: &RenderContext<'_>,
    surface: &mut dyn DisplaySurface,
) -> RenderResult {
    let page = Page::CorrelationHeatmap;
    surface.header(page.label());

    let long_form = CorrelationMatrix::compute(ctx.dataset).long_form();

    let spec = ChartSpec::new(
        Mark::Rect,
        Encoding::ordinal("index"),
        Encoding::ordinal("variable"),
    )
    .title(page.label())
    .color(ColorEncoding::by(Encoding::quantitative("value")));

    draw(&long_form, spec, surface)
}

pub fn full_year_calendar(
    ctx: &RenderContext<'_>,
    surface: &mut dyn DisplaySurface,
) -> RenderResult {
    surface.header(Page::FullYearCalendar.label());

    let grid = CalendarGrid::containing(ctx.today);
    for month in &grid.months {
        surface.subheader(month.name);
        surface.weeks(&month.weeks);
    }
    Ok(())
}

/// Bar chart of `field` counts colored by stroke status
fn count_by_stroke(
    ctx: &RenderContext<'_>,
    surface: &mut dyn DisplaySurface,
    page: Page,
    field: &str,
    x_title: &str,
    chart_title: &str,
) -> RenderResult {
    surface.header(page.label());
    require(ctx, page, NECESSARY_COLUMNS_MISSING)?;

    let spec = ChartSpec::new(Mark::Bar, Encoding::nominal(field).title(x_title), count())
        .title(chart_title)
        .color(by_stroke());

    draw(ctx.dataset, spec, surface)
}

fn require(ctx: &RenderContext<'_>, page: Page, message: &'static str) -> RenderResult {
    let missing = ctx.dataset.missing_columns(page.required_columns());
    if missing.is_empty() {
        return Ok(());
    }

    Err(RenderError::MissingColumns {
        missing: missing.into_iter().map(String::from).collect(),
        message,
    })
}

/// Evaluate the chart and hand the result to the surface
fn draw(dataset: &Dataset, spec: ChartSpec, surface: &mut dyn DisplaySurface) -> RenderResult {
    let table = evaluate(&spec, dataset)?;
    let vega_lite = to_vega_lite(&spec, dataset);
    surface.chart(ChartBlock {
        spec,
        table,
        vega_lite,
    });
    Ok(())
}

fn count() -> Encoding {
    Encoding::count().title("Count")
}

fn binned_age() -> Encoding {
    Encoding::quantitative("age").binned().title("Age")
}

fn by_stroke() -> ColorEncoding {
    ColorEncoding::by(Encoding::nominal("stroke"))
}

fn had_stroke() -> Predicate {
    Predicate::field_equal("stroke", 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{AxisKey, Aggregate, FieldType, Measure};
    use crate::dataset::{CsvLoader, Value};
    use crate::pages::invoke;
    use crate::surface::{Block, Document};
    use chrono::NaiveDate;

    const STROKE_CSV: &str = "\
id,gender,age,hypertension,heart_disease,ever_married,work_type,residence_type,avg_glucose_level,bmi,smoking_status,stroke
9046,Male,67,0,1,Yes,Private,Urban,228.69,36.6,formerly smoked,1
51676,Female,61,0,0,Yes,Self-employed,Rural,202.21,N/A,never smoked,1
31112,Male,80,0,1,Yes,Private,Rural,105.92,32.5,never smoked,1
60182,Female,49,0,0,Yes,Private,Urban,171.23,34.4,smokes,0
1665,Female,79,1,0,Yes,Self-employed,Rural,174.12,24,never smoked,1
56669,Male,81,0,0,Yes,Private,Urban,186.21,29,formerly smoked,0
53882,Male,74,1,1,Yes,Private,Rural,70.09,27.4,never smoked,0
10434,Female,69,0,0,No,Private,Urban,94.39,22.8,never smoked,0
27419,Female,59,0,0,Yes,Private,Rural,76.15,N/A,Unknown,0
60491,Female,78,0,0,Yes,Private,Urban,58.57,24.2,Unknown,0
12109,Female,81,1,0,Yes,Private,Rural,80.43,29.7,never smoked,0
12095,Female,61,0,1,Yes,Govt_job,Rural,120.46,36.8,smokes,0
12175,Female,54,0,0,Yes,Private,Urban,104.51,27.3,smokes,0
8213,Male,78,0,1,Yes,Private,Urban,219.84,N/A,Unknown,0
5317,Female,79,0,1,Yes,Private,Urban,214.09,28.2,never smoked,0
58202,Female,50,1,0,Yes,Self-employed,Rural,167.41,30.9,never smoked,0
56112,Male,64,0,1,Yes,Private,Urban,191.61,37.5,smokes,0
34120,Male,75,1,0,Yes,Private,Urban,221.29,25.8,smokes,0
27458,Female,60,0,0,No,Private,Urban,89.22,37.8,never smoked,0
25226,Male,57,0,1,No,Govt_job,Urban,217.08,N/A,Unknown,0
70630,Female,71,0,0,Yes,Govt_job,Rural,193.94,22.4,smokes,0
13861,Female,52,1,0,Yes,Self-employed,Urban,233.29,48.9,never smoked,0
68794,Female,8,0,0,No,children,Urban,96.1,14.3,Unknown,0
64778,Male,1.32,0,0,No,children,Rural,70.37,N/A,Unknown,0
";

    /// Chart-producing pages
    const CHART_PAGES: [Page; 12] = [
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
    ];

    fn stroke_dataset() -> Dataset {
        CsvLoader::new().load_str(STROKE_CSV).unwrap()
    }

    fn render(page: Page, ds: &Dataset) -> Document {
        let ctx = RenderContext::at(ds, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        let mut doc = Document::new();
        invoke(page, &ctx, &mut doc);
        doc
    }

    /// The stroke dataset plus a literal `Residence` column
    fn with_all_columns(ds: &Dataset) -> Dataset {
        let mut columns = ds.columns().to_vec();
        let residence = ds.column("residence_type").unwrap().values.clone();
        columns.push(crate::dataset::Column::new("Residence", residence));
        Dataset::from_columns(columns)
    }

    /// Copy of the dataset without one column
    fn without(ds: &Dataset, column: &str) -> Dataset {
        Dataset::from_columns(
            ds.columns()
                .iter()
                .filter(|c| c.name != column)
                .cloned()
                .collect(),
        )
    }

    #[test]
    fn test_every_chart_page_draws_one_chart() {
        let ds = with_all_columns(&stroke_dataset());
        for page in CHART_PAGES {
            let doc = render(page, &ds);
            assert!(doc.errors().is_empty(), "{} failed: {:?}", page, doc.errors());
            assert_eq!(doc.charts().len(), 1, "{} chart count", page);
        }
    }

    #[test]
    fn test_missing_any_required_column_draws_nothing() {
        let ds = with_all_columns(&stroke_dataset());
        for page in CHART_PAGES {
            for column in page.required_columns() {
                let doc = render(page, &without(&ds, column));
                assert!(doc.charts().is_empty(), "{} drew without {}", page, column);
                assert_eq!(doc.errors().len(), 1, "{} without {}", page, column);
            }
        }
    }

    #[test]
    fn test_missing_column_messages() {
        let empty = Dataset::default();
        assert_eq!(
            render(Page::GenderDistribution, &empty).errors(),
            vec![GENDER_COLUMN_MISSING]
        );
        assert_eq!(
            render(Page::AgeDistribution, &empty).errors(),
            vec![AGE_COLUMN_MISSING]
        );
        assert_eq!(
            render(Page::SmokingByStroke, &empty).errors(),
            vec![NECESSARY_COLUMNS_MISSING]
        );
    }

    #[test]
    fn test_marriage_page_without_ever_married() {
        let ds = Dataset::from_rows(
            &["gender", "age", "stroke"],
            vec![vec!["Male".into(), Value::Int(40), Value::Int(0)]],
        );
        let doc = render(Page::MarriageByStroke, &ds);

        assert_eq!(doc.headers(), vec!["Marriage Distribution by Stroke Status"]);
        assert_eq!(doc.errors(), vec!["Necessary columns not found in the dataset"]);
        assert!(doc.charts().is_empty());
    }

    #[test]
    fn test_residence_page_needs_literal_residence_column() {
        let doc = render(Page::ResidenceByStroke, &stroke_dataset());
        assert_eq!(doc.errors(), vec![NECESSARY_COLUMNS_MISSING]);
        assert!(doc.charts().is_empty());

        // residence_type works for its own page
        let doc = render(Page::ResidenceTypeByStroke, &stroke_dataset());
        assert_eq!(doc.charts().len(), 1);
    }

    #[test]
    fn test_gender_distribution_counts() {
        let ds = Dataset::from_rows(
            &["gender", "stroke"],
            vec![
                vec!["Male".into(), Value::Int(1)],
                vec!["Female".into(), Value::Int(0)],
                vec!["Male".into(), Value::Int(0)],
            ],
        );
        let doc = render(Page::GenderDistribution, &ds);
        let chart = doc.charts()[0];

        assert_eq!(chart.spec.mark, Mark::Bar);
        assert_eq!(chart.table.categories().len(), 2);
        assert_eq!(chart.table.total_for("Male"), 2.0);
        assert_eq!(chart.table.total_for("Female"), 1.0);
    }

    #[test]
    fn test_stroke_by_gender_filters_to_strokes() {
        let doc = render(Page::StrokeByGender, &stroke_dataset());
        let chart = doc.charts()[0];

        assert_eq!(chart.spec.filter, Some(Predicate::field_equal("stroke", 1)));
        assert_eq!(chart.table.total_for("Male"), 2.0);
        assert_eq!(chart.table.total_for("Female"), 2.0);
    }

    #[test]
    fn test_chart_encodings() {
        let ds = with_all_columns(&stroke_dataset());

        let expected: [(Page, Mark, &str, bool, Option<Aggregate>); 11] = [
            (Page::GenderDistribution, Mark::Bar, "gender", false, Some(Aggregate::Count)),
            (Page::StrokeByGender, Mark::Bar, "gender", false, Some(Aggregate::Count)),
            (Page::AgeDistribution, Mark::Bar, "age", true, Some(Aggregate::Count)),
            (Page::StrokeByAge, Mark::Bar, "age", true, Some(Aggregate::Count)),
            (Page::AgeByStrokeStatus, Mark::Bar, "age", true, Some(Aggregate::Count)),
            (Page::MarriageByStroke, Mark::Bar, "ever_married", false, Some(Aggregate::Count)),
            (Page::WorkTypeByStroke, Mark::Bar, "work_type", false, Some(Aggregate::Count)),
            (Page::ResidenceTypeByStroke, Mark::Bar, "residence_type", false, Some(Aggregate::Count)),
            (Page::ResidenceByStroke, Mark::Bar, "Residence", false, Some(Aggregate::Count)),
            (Page::GlucoseByAge, Mark::Line, "age", true, Some(Aggregate::Mean)),
            (Page::SmokingByStroke, Mark::Bar, "smoking_status", false, Some(Aggregate::Count)),
        ];

        for (page, mark, x, binned, aggregate) in expected {
            let doc = render(page, &ds);
            let spec = &doc.charts()[0].spec;
            assert_eq!(spec.mark, mark, "{}", page);
            assert_eq!(spec.x.field_name(), Some(x), "{}", page);
            assert_eq!(spec.x.bin.is_some(), binned, "{}", page);
            assert_eq!(spec.y.aggregate, aggregate, "{}", page);
            assert!(spec.use_container_width);
        }
    }

    #[test]
    fn test_stroke_color_pages() {
        let ds = with_all_columns(&stroke_dataset());
        for page in [
            Page::StrokeByGender,
            Page::StrokeByAge,
            Page::AgeByStrokeStatus,
            Page::MarriageByStroke,
            Page::WorkTypeByStroke,
            Page::ResidenceTypeByStroke,
            Page::ResidenceByStroke,
            Page::GlucoseByAge,
            Page::SmokingByStroke,
        ] {
            let doc = render(page, &ds);
            assert_eq!(
                doc.charts()[0].spec.color,
                Some(ColorEncoding::by(Encoding::nominal("stroke"))),
                "{}",
                page
            );
        }
    }

    #[test]
    fn test_age_distribution_conditional_color() {
        let doc = render(Page::AgeDistribution, &stroke_dataset());
        let spec = &doc.charts()[0].spec;
        assert_eq!(
            spec.color,
            Some(ColorEncoding::condition(
                Predicate::field_equal("stroke", 1),
                "orange",
                "steelblue"
            ))
        );
        assert_eq!(spec.filter, None);
    }

    #[test]
    fn test_age_distribution_bins() {
        let doc = render(Page::AgeDistribution, &stroke_dataset());
        let table = &doc.charts()[0].table;
        let total: f64 = table.rows.iter().filter_map(|r| r.y.as_f64()).sum();
        assert_eq!(total, 24.0);
        assert!(table.rows.iter().all(|r| matches!(r.x, AxisKey::Bin(_))));
    }

    #[test]
    fn test_glucose_line_is_mean() {
        let doc = render(Page::GlucoseByAge, &stroke_dataset());
        let chart = doc.charts()[0];
        assert_eq!(chart.spec.y.title.as_deref(), Some("Average Glucose Level"));
        assert!(chart
            .table
            .rows
            .iter()
            .all(|r| matches!(r.y, Measure::Aggregate(v) if v > 0.0)));
    }

    #[test]
    fn test_glucose_without_stroke_still_draws() {
        let ds = without(&stroke_dataset(), "stroke");
        let doc = render(Page::GlucoseByAge, &ds);
        assert!(doc.errors().is_empty());
        assert_eq!(doc.charts().len(), 1);
    }

    #[test]
    fn test_text_age_column_is_construction_error() {
        let ds = Dataset::from_rows(
            &["age", "stroke"],
            vec![vec!["forty".into(), Value::Int(0)]],
        );
        let doc = render(Page::AgeByStrokeStatus, &ds);
        assert_eq!(
            doc.errors(),
            vec!["Error in generating chart: Field 'age' must be numeric"]
        );
        assert!(doc.charts().is_empty());
    }

    #[test]
    fn test_work_type_chart_title() {
        let doc = render(Page::WorkTypeByStroke, &stroke_dataset());
        assert_eq!(
            doc.charts()[0].spec.title.as_deref(),
            Some("Work Type Distribution by Stroke")
        );
    }

    #[test]
    fn test_correlation_heatmap() {
        let ds = Dataset::from_rows(
            &["age", "avg_glucose_level", "stroke"],
            vec![
                vec![Value::Int(67), Value::Float(228.69), Value::Int(1)],
                vec![Value::Int(61), Value::Float(202.21), Value::Int(1)],
                vec![Value::Int(49), Value::Float(171.23), Value::Int(0)],
            ],
        );
        let doc = render(Page::CorrelationHeatmap, &ds);
        let chart = doc.charts()[0];

        assert_eq!(chart.spec.mark, Mark::Rect);
        assert_eq!(chart.spec.x.field_type, FieldType::Ordinal);
        assert_eq!(chart.table.len(), 9);

        let diagonal: Vec<f64> = chart
            .table
            .rows
            .iter()
            .filter(|r| match (&r.x, &r.y) {
                (AxisKey::Value(a), Measure::Value(b)) => a == b,
                _ => false,
            })
            .filter_map(|r| match &r.color {
                Some(crate::chart::ColorValue::Field(v)) => v.as_f64(),
                _ => None,
            })
            .collect();
        assert_eq!(diagonal, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_heatmap_without_numeric_columns() {
        let ds = Dataset::from_rows(&["gender"], vec![vec!["Male".into()]]);
        let doc = render(Page::CorrelationHeatmap, &ds);
        assert!(doc.errors().is_empty());
        assert!(doc.charts()[0].table.is_empty());
    }

    #[test]
    fn test_calendar_page() {
        let doc = render(Page::FullYearCalendar, &Dataset::default());
        assert_eq!(doc.subheaders().len(), 12);
        assert_eq!(doc.subheaders()[0], "January");
        assert_eq!(doc.subheaders()[11], "December");

        // Rendered for 2024
        let february = doc.week_blocks()[1];
        assert_eq!(february.len(), 5);
        assert_eq!(february[0], [0, 0, 0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_home_page() {
        let doc = render(Page::Home, &Dataset::default());
        assert_eq!(doc.headers(), vec!["Home"]);
        assert!(doc.charts().is_empty());
        assert!(doc.errors().is_empty());
    }

    #[test]
    fn test_home_overview_text() {
        let doc = render(Page::Home, &Dataset::default());
        let overview = doc
            .blocks
            .iter()
            .find_map(|b| match b {
                Block::Markdown { text } => Some(text.as_str()),
                _ => None,
            })
            .unwrap();
        let lines: Vec<&str> = overview.lines().collect();

        assert_eq!(
            lines[0],
            "According to the World Health Organization (WHO) stroke is the 2nd leading cause of death globally "
        );
        assert!(lines[1].ends_with(
            "likely to get stroke based on the input parameters like gender "
        ));
        assert!(lines[2].starts_with("age, various diseases, and smoking status."));
        assert_eq!(lines.iter().filter(|l| l.starts_with("- ")).count(), 12);
        assert_eq!(lines.last().copied(), Some("- stroke: 1 if the patient had a stroke or 0 if not."));
    }
}
