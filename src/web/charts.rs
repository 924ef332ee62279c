//! Plotly figure builders for the dashboard pages.
//!
//! Each builder turns a display-ready table into a `{data, layout}` figure
//! object, serialized into the page and rendered client-side by Plotly.
//! Styling follows the dashboard palette: orange/navy traces on a white
//! background, dark grey font, light grid. Percentage axes are clamped to
//! [0, 100] so absence charts are comparable across selections.

use crate::application::views::{AbsenceRateRow, Histogram};
use crate::domain::entities::{AgeGroupCount, EssayStatusCount, RaceCount, SexCount};
use serde_json::{Value, json};

pub const ORANGE: &str = "#ff6200";
pub const NAVY: &str = "#000d3c";
const FONT_COLOR: &str = "#111111";
const GRID_COLOR: &str = "#e0e0e0";

fn base_layout(title: &str) -> Value {
    json!({
        "title": { "text": title, "font": { "size": 18, "color": FONT_COLOR } },
        "plot_bgcolor": "white",
        "paper_bgcolor": "white",
        "font": { "color": FONT_COLOR },
    })
}

fn gridded_axis(title: &str) -> Value {
    json!({
        "title": { "text": title },
        "showgrid": true,
        "gridcolor": GRID_COLOR,
        "color": FONT_COLOR,
    })
}

fn pct_label(pct: f64) -> String {
    format!("{pct:.1}%")
}

/// Score histogram for the selected competency.
pub fn histogram_figure(histogram: &Histogram, competency_label: &str) -> Value {
    let centers: Vec<f64> = histogram.bins.iter().map(|b| b.center()).collect();
    let counts: Vec<u64> = histogram.bins.iter().map(|b| b.count).collect();
    let widths: Vec<f64> = histogram.bins.iter().map(|b| b.end - b.start).collect();

    let mut layout = base_layout(competency_label);
    layout["bargap"] = json!(0.1);
    layout["xaxis"] = gridded_axis("Nota");
    layout["yaxis"] = gridded_axis("Frequência");

    json!({
        "data": [{
            "type": "bar",
            "x": centers,
            "y": counts,
            "width": widths,
            "marker": { "color": NAVY },
        }],
        "layout": layout,
    })
}

/// Horizontal bar chart of essay statuses. Rows are expected pre-sorted
/// ascending so the largest bar renders at the top.
pub fn essay_status_figure(rows: &[EssayStatusCount]) -> Value {
    let totals: Vec<i64> = rows.iter().map(|r| r.total).collect();
    let statuses: Vec<&str> = rows.iter().map(|r| r.status.as_str()).collect();

    let mut layout = base_layout("Status das Redações");
    layout["bargap"] = json!(0.2);
    layout["xaxis"] = json!({ "title": { "text": "Total" } });
    layout["yaxis"] = json!({ "title": { "text": "Status da Redação" } });

    json!({
        "data": [{
            "type": "bar",
            "orientation": "h",
            "x": totals,
            "y": statuses,
            "marker": { "color": ORANGE },
        }],
        "layout": layout,
    })
}

/// Pie chart of participants by declared sex.
pub fn sex_pie_figure(rows: &[SexCount]) -> Value {
    let totals: Vec<i64> = rows.iter().map(|r| r.total).collect();
    let labels: Vec<&str> = rows.iter().map(|r| r.sexo.as_str()).collect();

    json!({
        "data": [{
            "type": "pie",
            "values": totals,
            "labels": labels,
            "marker": { "colors": [ORANGE, NAVY] },
        }],
        "layout": base_layout("Distribuição por Sexo"),
    })
}

/// Bar chart of participants per age bracket, with slanted tick labels.
pub fn age_bar_figure(rows: &[AgeGroupCount]) -> Value {
    let groups: Vec<&str> = rows.iter().map(|r| r.faixa_etaria.as_str()).collect();
    let totals: Vec<i64> = rows.iter().map(|r| r.total).collect();

    let mut layout = base_layout("Distribuição por Faixa Etária");
    layout["bargap"] = json!(0.2);
    layout["xaxis"] = json!({ "title": { "text": "Faixa Etária" }, "tickangle": -45 });
    layout["yaxis"] = json!({ "title": { "text": "Total" } });

    json!({
        "data": [{
            "type": "bar",
            "x": groups,
            "y": totals,
            "marker": { "color": NAVY },
        }],
        "layout": layout,
    })
}

/// Bar chart of participants per declared race. Rows are expected
/// pre-sorted ascending by total.
pub fn race_bar_figure(rows: &[RaceCount]) -> Value {
    let races: Vec<&str> = rows.iter().map(|r| r.raca.as_str()).collect();
    let totals: Vec<i64> = rows.iter().map(|r| r.total).collect();

    let mut layout = base_layout("Distribuição por Etnia");
    layout["bargap"] = json!(0.2);
    layout["xaxis"] = json!({ "title": { "text": "Etnia" } });
    layout["yaxis"] = json!({ "title": { "text": "Total" } });

    json!({
        "data": [{
            "type": "bar",
            "x": races,
            "y": totals,
            "marker": { "color": ORANGE },
        }],
        "layout": layout,
    })
}

/// Line chart of absence rate per income bracket, labelled point by point.
pub fn absence_income_figure(rows: &[AbsenceRateRow]) -> Value {
    let categories: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    let rates: Vec<f64> = rows.iter().map(|r| r.pct).collect();
    let labels: Vec<String> = rows.iter().map(|r| pct_label(r.pct)).collect();

    let mut layout = base_layout("Percentual de Ausência por Faixa de Renda Familiar");
    layout["xaxis"] = json!({ "title": { "text": "Renda Familiar" } });
    layout["yaxis"] = json!({ "title": { "text": "% de Ausentes" }, "range": [0, 100] });

    json!({
        "data": [{
            "type": "scatter",
            "mode": "lines+markers+text",
            "x": categories,
            "y": rates,
            "text": labels,
            "textposition": "top center",
            "line": { "color": ORANGE, "width": 3 },
            "marker": { "color": ORANGE },
        }],
        "layout": layout,
    })
}

/// Bar chart of absence rate per age bracket.
pub fn absence_age_figure(rows: &[AbsenceRateRow]) -> Value {
    let groups: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    let rates: Vec<f64> = rows.iter().map(|r| r.pct).collect();
    let labels: Vec<String> = rows.iter().map(|r| pct_label(r.pct)).collect();

    let mut layout = base_layout("Percentual de Ausência por Faixa Etária");
    layout["xaxis"] = json!({ "title": { "text": "Faixa Etária" } });
    layout["yaxis"] = json!({ "title": { "text": "% de Ausentes" }, "range": [0, 100] });

    json!({
        "data": [{
            "type": "bar",
            "x": groups,
            "y": rates,
            "text": labels,
            "textposition": "outside",
            "marker": { "color": ORANGE, "line": { "color": "black", "width": 1 } },
        }],
        "layout": layout,
    })
}

/// Horizontal bar chart of absence rate per declared race. The y axis is
/// reversed so the highest rate renders at the top.
pub fn absence_race_figure(rows: &[AbsenceRateRow]) -> Value {
    let races: Vec<&str> = rows.iter().map(|r| r.category.as_str()).collect();
    let rates: Vec<f64> = rows.iter().map(|r| r.pct).collect();
    let labels: Vec<String> = rows.iter().map(|r| pct_label(r.pct)).collect();

    let mut layout = base_layout("Ausência por Cor/Raça");
    layout["xaxis"] = json!({ "title": { "text": "% de Ausentes" }, "range": [0, 100] });
    layout["yaxis"] = json!({ "title": { "text": "Raça" }, "autorange": "reversed" });

    json!({
        "data": [{
            "type": "bar",
            "orientation": "h",
            "x": rates,
            "y": races,
            "text": labels,
            "textposition": "inside",
            "insidetextanchor": "middle",
            "textfont": { "color": "black" },
            "marker": { "color": ORANGE, "line": { "color": "black", "width": 1 } },
        }],
        "layout": layout,
    })
}
