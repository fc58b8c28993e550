use yew::prelude::*;
use web_sys::{window, HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;

const WEDGE_COLORS: [&str; 4] = ["#F99533", "#24CA69", "#46AEFF", "#9145B7"];
const MAX_LABEL_CHARS: usize = 14;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub labels: Vec<String>,
    /// Clockwise rotation in degrees.
    pub rotation: f64,
    pub is_spinning: bool,
}

fn wedge_color(index: usize, count: usize) -> &'static str {
    let mut color = index % WEDGE_COLORS.len();
    // Keep the last wedge from matching the first one it touches
    if count > 1 && index == count - 1 && color == 0 {
        color = 1 + (index / WEDGE_COLORS.len()) % 2;
    }
    WEDGE_COLORS[color]
}

fn fit_label(label: &str) -> String {
    if label.chars().count() <= MAX_LABEL_CHARS {
        label.to_string()
    } else {
        let head: String = label.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", head)
    }
}

fn draw_wheel(
    canvas: &HtmlCanvasElement,
    context: &CanvasRenderingContext2d,
    labels: &[String],
    rotation: f64,
    is_spinning: bool,
) {
    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = if width < height { width / 2.0 - 20.0 } else { height / 2.0 - 20.0 };

    context.clear_rect(0.0, 0.0, width, height);

    let is_dark_mode = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .map(|el| el.class_list().contains("dark"))
        .unwrap_or(false);

    // Soft glow behind the wheel, stronger while it turns
    let glow_intensity = if is_spinning { 0.25 } else { 0.15 };
    context.begin_path();
    if is_dark_mode {
        context.set_fill_style_str(&format!("rgba(130, 100, 255, {})", glow_intensity));
    } else {
        context.set_fill_style_str(&format!("rgba(100, 130, 255, {})", glow_intensity));
    }
    let _ = context.arc(center_x, center_y, radius + 12.0, 0.0, 2.0 * PI);
    context.fill();

    context.save();
    let _ = context.translate(center_x, center_y);
    let _ = context.rotate(rotation * PI / 180.0);

    // Wedge 0 starts at 12 o'clock and the rest follow clockwise
    let count = labels.len().max(1);
    let segment = 2.0 * PI / count as f64;
    let start_offset = -0.5 * PI;

    for i in 0..count {
        let start = start_offset + i as f64 * segment;
        let end = start + segment;
        context.begin_path();
        context.set_fill_style_str(wedge_color(i, count));
        context.move_to(0.0, 0.0);
        let _ = context.arc(0.0, 0.0, radius, start, end);
        context.close_path();
        context.fill();
    }

    // Radius lines
    context.set_stroke_style_str("rgba(255, 255, 255, 0.9)");
    context.set_line_width(3.0);
    for i in 0..count {
        let angle = start_offset + i as f64 * segment;
        context.begin_path();
        context.move_to(0.0, 0.0);
        context.line_to(radius * angle.cos(), radius * angle.sin());
        context.stroke();
    }

    // Labels, written outward along the middle of each wedge
    context.set_text_align("right");
    context.set_text_baseline("middle");
    context.set_fill_style_str("#ffffff");
    context.set_font("bold 20px 'Segoe UI', Roboto, system-ui, sans-serif");
    context.set_shadow_color("rgba(0, 0, 0, 0.5)");
    context.set_shadow_blur(3.0);
    for (i, label) in labels.iter().enumerate() {
        let middle = start_offset + (i as f64 + 0.5) * segment;
        context.save();
        let _ = context.rotate(middle);
        let _ = context.fill_text(&fit_label(label), radius - 16.0, 0.0);
        context.restore();
    }
    context.set_shadow_color("rgba(0, 0, 0, 0)");
    context.set_shadow_blur(0.0);

    context.restore();

    // Outer ring
    context.begin_path();
    context.set_stroke_style_str(if is_dark_mode { "rgba(180, 130, 255, 0.6)" } else { "#333333" });
    context.set_line_width(2.0);
    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
    context.stroke();

    // Pointer at 12 o'clock
    context.begin_path();
    context.move_to(center_x, center_y - radius + 18.0);
    context.line_to(center_x - 14.0, center_y - radius - 14.0);
    context.line_to(center_x + 14.0, center_y - radius - 14.0);
    context.close_path();
    context.set_fill_style_str(if is_spinning { "#ffd700" } else { "#f59e0b" });
    context.fill();
    context.set_stroke_style_str("#e69500");
    context.set_line_width(1.5);
    context.stroke();
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(
            (props.labels.clone(), props.rotation, props.is_spinning),
            move |(labels, rotation, is_spinning)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .ok()
                        .flatten()
                        .and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok());
                    if let Some(context) = context {
                        draw_wheel(&canvas, &context, labels, *rotation, *is_spinning);
                    }
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
