//! HTML rendering of a [`Document`]
//!
//! The page carries the sidebar (upload control, menu, calendar trigger)
//! and the stacked blocks. Charts are drawn in the browser with
//! `vega-embed`. Markdown blocks are converted with `pulldown-cmark`.

use super::Document;
use crate::pages::Page;
use minijinja::{context, Environment, Value};
use pulldown_cmark::{html, Event, Parser};
use serde::Serialize;

const DASHBOARD_TEMPLATE: &str = include_str!("templates/dashboard.html");

#[derive(Serialize)]
struct MenuEntry {
    label: &'static str,
    selected: bool,
}

/// Markdown to HTML; raw HTML in the source is emitted as text
pub fn markdown_to_html(source: &str) -> String {
    let events = Parser::new(source).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    let mut out = String::new();
    html::push_html(&mut out, events);
    out
}

fn markdown_filter(source: &str) -> Value {
    Value::from_safe_string(markdown_to_html(source))
}

/// Render the full dashboard page
pub fn render_html(document: &Document, selected: Page) -> Result<String, minijinja::Error> {
    let mut env = Environment::new();
    // The .html suffix turns on auto-escaping
    env.add_template("dashboard.html", DASHBOARD_TEMPLATE)?;
    env.add_filter("markdown", markdown_filter);

    let menu: Vec<MenuEntry> = Page::ALL
        .iter()
        .map(|page| MenuEntry {
            label: page.label(),
            selected: *page == selected,
        })
        .collect();

    env.get_template("dashboard.html")?.render(context! {
        title => crate::dashboard::TITLE,
        menu => menu,
        blocks => &document.blocks,
    })
}
