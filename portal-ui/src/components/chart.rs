//! Chart Components
//!
//! Todo status pie and per-user bar chart, drawn on HTML5 Canvas.

use std::f64::consts::PI;

use analytics_portal::analytics::{StatusSlice, TodoStats, UserTotals, COMPLETED_COLOR};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const TOTAL_COLOR: &str = "#007bff";
const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#4b5563";

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()?
        .dyn_into::<CanvasRenderingContext2d>()
        .ok()
}

/// Completed vs pending pie chart
#[component]
pub fn StatusPieChart(stats: TodoStats) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let slices = stats.status_slices();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_pie(&canvas, &slices);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="400"
                height="300"
                class="w-full h-72"
            />

            // Legend
            <div class="flex justify-center gap-4 mt-4">
                {slices
                    .into_iter()
                    .map(|slice| view! { <LegendItem color=slice.color label=slice.name /> })
                    .collect_view()}
            </div>
        </div>
    }
}

/// Total and completed todos per user
#[component]
pub fn UserBarChart(stats: TodoStats) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();
    let series = stats.per_user_series();
    let max_total = stats.max_user_total();

    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bars(&canvas, &series, max_total);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="600"
                height="300"
                class="w-full h-72"
            />

            // Legend
            <div class="flex justify-center gap-4 mt-4">
                <LegendItem color=TOTAL_COLOR label="Total Todos" />
                <LegendItem color=COMPLETED_COLOR label="Completed" />
            </div>
        </div>
    }
}

/// Colored dot with a label
#[component]
fn LegendItem(
    color: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center space-x-2">
            <div
                class="w-3 h-3 rounded-full"
                style=format!("background-color: {}", color)
            />
            <span class="text-sm text-gray-600">{label}</span>
        </div>
    }
}

/// Draw the status pie with percentage labels
fn draw_pie(canvas: &HtmlCanvasElement, slices: &[StatusSlice]) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let (cx, cy) = (width / 2.0, height / 2.0);
    let radius = 80.0;

    ctx.clear_rect(0.0, 0.0, width, height);

    if slices.iter().all(|s| s.value == 0) {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data", cx, cy);
        return;
    }

    // Start at twelve o'clock, clockwise
    let mut start = -PI / 2.0;
    for slice in slices.iter().filter(|s| s.value > 0) {
        let sweep = slice.fraction * PI * 2.0;
        let end = start + sweep;

        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start, end);
        ctx.close_path();
        ctx.fill();

        // Label outside the wedge
        let mid = start + sweep / 2.0;
        let label_x = cx + (radius + 24.0) * mid.cos();
        let label_y = cy + (radius + 24.0) * mid.sin();
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("13px sans-serif");
        ctx.set_text_align(if mid.cos() >= 0.0 { "left" } else { "right" });
        let _ = ctx.fill_text(&slice.percent_label(), label_x, label_y);

        start = end;
    }
}

/// Draw grouped bars (total, completed) for each user
fn draw_bars(canvas: &HtmlCanvasElement, series: &[(u64, UserTotals)], max_total: usize) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 10.0;
    let margin_top = 10.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    ctx.clear_rect(0.0, 0.0, width, height);

    if series.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data", width / 2.0, height / 2.0);
        return;
    }

    let y_max = max_total.max(1) as f64;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 4.0) * y_max;
        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&format!("{:.0}", value), margin_left - 6.0, y + 4.0);
    }

    let group_width = chart_width / series.len() as f64;
    let bar_width = (group_width * 0.35).min(24.0);
    let scale = |v: usize| v as f64 / y_max * chart_height;

    ctx.set_text_align("center");
    for (idx, (user_id, totals)) in series.iter().enumerate() {
        let group_center = margin_left + group_width * (idx as f64 + 0.5);
        let baseline = margin_top + chart_height;

        for (offset, value, color) in [
            (-bar_width, totals.total, TOTAL_COLOR),
            (0.0, totals.completed, COMPLETED_COLOR),
        ] {
            let bar_height = scale(value);
            ctx.set_fill_style(&color.into());
            ctx.fill_rect(group_center + offset, baseline - bar_height, bar_width, bar_height);
        }

        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&user_id.to_string(), group_center, height - 10.0);
    }
}
