use std::f64::consts::TAU;

use shared::constants::PRIMARY_COLOR;
use shared::performance::{ChartKind, ChartScale, DailyXp};
use web_sys::{window, CanvasRenderingContext2d};
use yew::prelude::*;

use crate::components::canvas::context_2d;
use crate::hooks::use_performance::PerformanceState;
use crate::styles;

const CHART_WIDTH: f64 = 600.0;
const CHART_HEIGHT: f64 = 300.0;
const CHART_PADDING: f64 = 32.0;
const GRID_COLOR: &str = "#2a3343";
const AXIS_TEXT_COLOR: &str = "#9ca3af";

#[derive(Properties, PartialEq)]
pub struct PerformanceChartProps {
    pub kind: ChartKind,
    pub performance: PerformanceState,
}

/// XP earned per day over the last week, as a line or bar chart.
#[function_component(PerformanceChart)]
pub fn performance_chart(props: &PerformanceChartProps) -> Html {
    let performance = &props.performance;
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.kind, performance.series.clone()),
            move |(kind, series)| {
                if let Some(context) = context_2d(&canvas_ref) {
                    paint_chart(&context, *kind, series);
                }
                || ()
            },
        );
    }

    let on_refresh = Callback::from(|_: MouseEvent| {
        if let Some(window) = window() {
            let _ = window.location().reload();
        }
    });

    if performance.loading {
        return html! { <div class={styles::CHART_PLACEHOLDER}></div> };
    }

    if performance.series.is_empty() {
        return html! {
            <div class="h-[300px] w-full flex items-center justify-center">
                <div class="text-center">
                    <p class="text-gray-400">{"Unable to load performance data."}</p>
                    <button onclick={on_refresh} class={styles::TEXT_LINK}>{"Refresh"}</button>
                </div>
            </div>
        };
    }

    html! {
        <div class="w-full">
            <canvas
                ref={canvas_ref}
                width={CHART_WIDTH.to_string()}
                height={CHART_HEIGHT.to_string()}
                class="w-full h-auto"
            />
            if performance.error {
                <p class={classes!(styles::TEXT_SMALL, "text-center", "mt-2")}>
                    {"Unable to load performance data. Showing an estimate. "}
                    <button onclick={on_refresh} class={styles::TEXT_LINK}>{"Refresh"}</button>
                </p>
            }
        </div>
    }
}

fn paint_chart(context: &CanvasRenderingContext2d, kind: ChartKind, series: &[DailyXp]) {
    let scale = ChartScale::for_series(series, CHART_WIDTH, CHART_HEIGHT, CHART_PADDING);

    context.clear_rect(0.0, 0.0, CHART_WIDTH, CHART_HEIGHT);
    context.set_font("12px Arial");
    context.set_fill_style_str(AXIS_TEXT_COLOR);

    context.set_stroke_style_str(GRID_COLOR);
    context.set_line_width(1.0);
    context.set_text_align("right");
    for (value, y) in scale.grid_lines() {
        context.begin_path();
        context.move_to(CHART_PADDING, y);
        context.line_to(CHART_WIDTH - CHART_PADDING, y);
        context.stroke();
        let _ = context.fill_text(&value.to_string(), CHART_PADDING - 6.0, y + 4.0);
    }

    context.set_text_align("center");
    for (index, entry) in series.iter().enumerate() {
        let _ = context.fill_text(&entry.day, scale.x_center(index), scale.baseline() + 18.0);
    }

    context.set_fill_style_str(PRIMARY_COLOR);
    context.set_stroke_style_str(PRIMARY_COLOR);
    match kind {
        ChartKind::Line => {
            context.set_line_width(2.0);
            context.begin_path();
            for (index, entry) in series.iter().enumerate() {
                let (x, y) = (scale.x_center(index), scale.y(entry.xp));
                if index == 0 {
                    context.move_to(x, y);
                } else {
                    context.line_to(x, y);
                }
            }
            context.stroke();

            for (index, entry) in series.iter().enumerate() {
                context.begin_path();
                let _ = context.arc(scale.x_center(index), scale.y(entry.xp), 4.0, 0.0, TAU);
                context.fill();
            }
        }
        ChartKind::Bar => {
            for (index, entry) in series.iter().enumerate() {
                let (x, y, w, h) = scale.bar(index, entry.xp);
                context.fill_rect(x, y, w, h);
            }
        }
    }
}
