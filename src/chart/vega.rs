//! Vega-Lite projection of a [`ChartSpec`], with the referenced fields of
//! the dataset inlined as `data.values`.

use super::spec::{ChartSpec, ColorEncoding, Encoding, Mark, Predicate};
use crate::dataset::Dataset;
use serde_json::{json, Map, Value as Json};

pub const VEGA_LITE_SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// Build a Vega-Lite document for the chart
pub fn to_vega_lite(spec: &ChartSpec, dataset: &Dataset) -> Json {
    let mut doc = Map::new();
    doc.insert("$schema".into(), json!(VEGA_LITE_SCHEMA));
    if let Some(title) = &spec.title {
        doc.insert("title".into(), json!(title));
    }
    if spec.use_container_width {
        doc.insert("width".into(), json!("container"));
    }
    doc.insert("data".into(), json!({ "values": inline_values(spec, dataset) }));
    doc.insert("mark".into(), json!(mark_name(spec.mark)));

    let mut encoding = Map::new();
    encoding.insert("x".into(), channel(&spec.x));
    encoding.insert("y".into(), channel(&spec.y));
    if let Some(color) = &spec.color {
        encoding.insert("color".into(), color_channel(color));
    }
    doc.insert("encoding".into(), Json::Object(encoding));

    if let Some(filter) = &spec.filter {
        doc.insert("transform".into(), json!([{ "filter": predicate(filter) }]));
    }

    Json::Object(doc)
}

fn mark_name(mark: Mark) -> &'static str {
    match mark {
        Mark::Bar => "bar",
        Mark::Line => "line",
        Mark::Rect => "rect",
    }
}

fn channel(encoding: &Encoding) -> Json {
    // Encoding serializes to Vega-Lite's channel definition shape
    serde_json::to_value(encoding).unwrap_or(Json::Null)
}

fn color_channel(color: &ColorEncoding) -> Json {
    match color {
        ColorEncoding::Field { encoding } => channel(encoding),
        ColorEncoding::Condition {
            test,
            value,
            otherwise,
        } => json!({
            "condition": { "test": predicate(test), "value": value },
            "value": otherwise,
        }),
    }
}

fn predicate(predicate: &Predicate) -> Json {
    json!({ "field": predicate.field, "equal": predicate.equal })
}

/// Records restricted to the fields the chart reads
fn inline_values(spec: &ChartSpec, dataset: &Dataset) -> Vec<Json> {
    let fields: Vec<&str> = spec
        .fields()
        .into_iter()
        .filter(|f| dataset.has_column(f))
        .collect();

    dataset
        .rows()
        .map(|row| {
            let record: Map<String, Json> = fields
                .iter()
                .map(|f| {
                    let value = row
                        .get(f)
                        .map(|v| serde_json::to_value(v).unwrap_or(Json::Null))
                        .unwrap_or(Json::Null);
                    (f.to_string(), value)
                })
                .collect();
            Json::Object(record)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::spec::{Encoding, Mark};
    use crate::dataset::Value;

    #[test]
    fn test_projection() {
        let ds = Dataset::from_rows(
            &["gender", "stroke", "bmi"],
            vec![vec!["Male".into(), Value::Int(1), Value::Float(22.0)]],
        );
        let spec = ChartSpec::new(
            Mark::Bar,
            Encoding::nominal("gender").title("Gender"),
            Encoding::count().title("Count"),
        )
        .title("Stroke Distribution by Gender Group")
        .color(ColorEncoding::by(Encoding::nominal("stroke")))
        .filter(Predicate::field_equal("stroke", 1));

        let doc = to_vega_lite(&spec, &ds);

        assert_eq!(doc["$schema"], VEGA_LITE_SCHEMA);
        assert_eq!(doc["width"], "container");
        assert_eq!(doc["mark"], "bar");
        assert_eq!(doc["encoding"]["x"]["field"], "gender");
        assert_eq!(doc["encoding"]["y"]["aggregate"], "count");
        assert_eq!(doc["encoding"]["color"]["type"], "nominal");
        assert_eq!(doc["transform"][0]["filter"]["equal"], 1);
        // Only referenced fields are inlined
        assert_eq!(doc["data"]["values"][0], json!({"gender": "Male", "stroke": 1}));
    }

    #[test]
    fn test_conditional_color() {
        let ds = Dataset::from_rows(&["age"], vec![vec![Value::Int(40)]]);
        let spec = ChartSpec::new(Mark::Bar, Encoding::quantitative("age").binned(), Encoding::count())
            .color(ColorEncoding::condition(
                Predicate::field_equal("stroke", 1),
                "orange",
                "steelblue",
            ));

        let doc = to_vega_lite(&spec, &ds);
        assert_eq!(doc["encoding"]["x"]["bin"]["maxbins"], 10);
        assert_eq!(doc["encoding"]["color"]["condition"]["value"], "orange");
        assert_eq!(doc["encoding"]["color"]["value"], "steelblue");
        assert_eq!(doc["data"]["values"][0], json!({"age": 40}));
    }
}
