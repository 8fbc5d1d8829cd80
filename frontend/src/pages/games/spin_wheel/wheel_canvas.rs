use std::f64::consts::TAU;

use shared::constants::{HUB_COLOR, LABEL_COLOR, LABEL_FONT, PRIMARY_COLOR, WHEEL_CANVAS_SIZE};
use shared::wheel_render::{to_canvas_angle, Pointer, WheelFrame};
use web_sys::CanvasRenderingContext2d;
use yew::prelude::*;

use crate::components::canvas::context_2d;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub frame: WheelFrame,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(props.frame.clone(), move |frame| {
            match context_2d(&canvas_ref) {
                Some(context) => paint_wheel(&context, frame),
                None => log::warn!("Wheel canvas has no 2d context"),
            }
            || ()
        });
    }

    html! {
        <canvas
            ref={canvas_ref}
            width={WHEEL_CANVAS_SIZE.to_string()}
            height={WHEEL_CANVAS_SIZE.to_string()}
            class="border border-[#2a3343] rounded-full"
        />
    }
}

fn paint_wheel(context: &CanvasRenderingContext2d, frame: &WheelFrame) {
    let (cx, cy) = (frame.center.x, frame.center.y);

    context.clear_rect(0.0, 0.0, frame.width, frame.height);

    for wedge in &frame.wedges {
        context.begin_path();
        context.move_to(cx, cy);
        let _ = context.arc(
            cx,
            cy,
            frame.radius,
            to_canvas_angle(wedge.start_angle),
            to_canvas_angle(wedge.end_angle),
        );
        context.close_path();
        context.set_fill_style_str(&wedge.color);
        context.fill();

        context.save();
        let _ = context.translate(cx, cy);
        let _ = context.rotate(to_canvas_angle(wedge.bisector()));
        context.set_text_align("right");
        context.set_fill_style_str(LABEL_COLOR);
        context.set_font(LABEL_FONT);
        let _ = context.fill_text(&wedge.label, frame.label_radius, 5.0);
        context.restore();
    }

    // Hub
    context.begin_path();
    let _ = context.arc(cx, cy, frame.hub_radius, 0.0, TAU);
    context.set_fill_style_str(HUB_COLOR);
    context.fill();
    context.set_stroke_style_str(PRIMARY_COLOR);
    context.set_line_width(2.0);
    context.stroke();

    let Pointer { tip, left, right } = frame.pointer;
    context.begin_path();
    context.move_to(tip.x, tip.y);
    context.line_to(left.x, left.y);
    context.line_to(right.x, right.y);
    context.close_path();
    context.set_fill_style_str(PRIMARY_COLOR);
    context.fill();
}
