use crate::lifecycle::{BrowserScheduler, Scheduler};
use crate::reveal::{use_reveal, RevealPolicy};
use crate::theme::{use_theme, Theme};
use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;

pub const CANVAS_SIZE: u32 = 400;
const CENTRE: f64 = CANVAS_SIZE as f64 / 2.0;
/// Portion of a full turn each ring covers.
pub const RING_EXTENT: f64 = 0.75;
pub const SWEEP_MS: f64 = 1500.0;
pub const RING_STAGGER_MS: f64 = 100.0;
const TRACK_RADIUS: i32 = 50;
const FRAME_MS: u32 = 16;

struct Metric {
    label: &'static str,
    value: u32,
    css: &'static str,
    color: RGBColor,
}

const METRICS: [Metric; 5] = [
    Metric {
        label: "Kundenzufriedenheit",
        value: 98,
        css: "#FDE047",
        color: RGBColor(0xFD, 0xE0, 0x47),
    },
    Metric {
        label: "Reaktionszeit (Min)",
        value: 15,
        css: "#D4AF37",
        color: RGBColor(0xD4, 0xAF, 0x37),
    },
    Metric {
        label: "Erfolgreiche Einsätze",
        value: 120,
        css: "#B59218",
        color: RGBColor(0xB5, 0x92, 0x18),
    },
    Metric {
        label: "Mitarbeiter",
        value: 45,
        css: "#856B12",
        color: RGBColor(0x85, 0x6B, 0x12),
    },
    Metric {
        label: "Standorte",
        value: 3,
        css: "#5C4A0C",
        color: RGBColor(0x5C, 0x4A, 0x0C),
    },
];

pub fn ring_radius(index: usize) -> f64 {
    60.0 + 15.0 * index as f64
}

fn ease_out(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

/// Drawn fraction of a full turn for ring `index`, `elapsed_ms` after the
/// chart first became visible.
pub fn ring_sweep(elapsed_ms: f64, index: usize) -> f64 {
    let t = ((elapsed_ms - RING_STAGGER_MS * index as f64) / SWEEP_MS).clamp(0.0, 1.0);
    ease_out(t) * RING_EXTENT
}

/// Time until the last ring has finished sweeping.
pub fn sweep_duration_ms() -> f64 {
    SWEEP_MS + RING_STAGGER_MS * (METRICS.len() - 1) as f64
}

/// Ring under a point in canvas coordinates. Rings start at twelve o'clock
/// and run clockwise; the open quarter is not hittable.
pub fn hit_test(x: f64, y: f64, rings: usize) -> Option<usize> {
    let dx = x - CENTRE;
    let dy = y - CENTRE;
    let distance = dx.hypot(dy);
    let angle = dx.atan2(-dy).rem_euclid(TAU);
    if angle > RING_EXTENT * TAU {
        return None;
    }
    (0..rings).find(|&i| (distance - ring_radius(i)).abs() <= 7.5)
}

pub fn centre_label(hovered: Option<usize>) -> String {
    match hovered.and_then(|i| METRICS.get(i)) {
        Some(metric) => metric.value.to_string(),
        None => "100%".to_string(),
    }
}

fn arc_point(radius: f64, angle: f64) -> (i32, i32) {
    (
        (CENTRE + radius * angle.sin()).round() as i32,
        (CENTRE - radius * angle.cos()).round() as i32,
    )
}

fn draw_rings(
    canvas: &HtmlCanvasElement,
    elapsed_ms: f64,
    hovered: Option<usize>,
    theme: Theme,
) -> Result<(), String> {
    canvas.set_width(CANVAS_SIZE);
    canvas.set_height(CANVAS_SIZE);

    let context = canvas
        .get_context("2d")
        .map_err(|e| format!("{:?}", e))?
        .ok_or("2d context unavailable")?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| "not a 2d context".to_string())?;
    context.clear_rect(0.0, 0.0, CANVAS_SIZE as f64, CANVAS_SIZE as f64);

    let backend = CanvasBackend::with_canvas_object(canvas.clone()).ok_or("canvas backend unavailable")?;
    let root = backend.into_drawing_area();

    let (track_fill, track_stroke) = if theme.is_dark() {
        (RGBColor(0x0F, 0x17, 0x2A), RGBColor(0x1E, 0x29, 0x3B))
    } else {
        (RGBColor(0xE5, 0xE5, 0xE5), RGBColor(0xD4, 0xD4, 0xD4))
    };
    let centre = (CENTRE as i32, CENTRE as i32);
    root.draw(&Circle::new(centre, TRACK_RADIUS, track_fill.filled()))
        .map_err(|e| format!("{:?}", e))?;
    root.draw(&Circle::new(centre, TRACK_RADIUS, track_stroke.stroke_width(1)))
        .map_err(|e| format!("{:?}", e))?;

    for (i, metric) in METRICS.iter().enumerate() {
        let sweep = ring_sweep(elapsed_ms, i);
        if sweep <= 0.0 {
            continue;
        }
        let active = hovered == Some(i);
        let width: u32 = if active { 10 } else { 6 };
        let color = metric.color.mix(if active { 1.0 } else { 0.5 });

        let radius = ring_radius(i);
        let end = sweep * TAU;
        let steps = ((sweep * 360.0) as usize).max(2);
        let points: Vec<(i32, i32)> = (0..=steps)
            .map(|s| arc_point(radius, end * s as f64 / steps as f64))
            .collect();

        root.draw(&PathElement::new(points, color.stroke_width(width)))
            .map_err(|e| format!("{:?}", e))?;
        // round caps
        for angle in [0.0, end] {
            root.draw(&Circle::new(arc_point(radius, angle), width / 2, color.filled()))
                .map_err(|e| format!("{:?}", e))?;
        }
    }

    root.present().map_err(|e| format!("{:?}", e))?;
    Ok(())
}

#[function_component]
pub fn StatsChart() -> Html {
    let section = use_node_ref();
    let canvas_ref = use_node_ref();
    let revealed = use_reveal(section.clone(), RevealPolicy::Once, 0.3);
    let elapsed = use_state(|| 0.0f64);
    let hovered = use_state(|| None::<usize>);
    let (theme, _) = use_theme();

    // Sweep clock; runs from the first reveal until the last ring lands.
    {
        let elapsed = elapsed.clone();
        let running = revealed && *elapsed < sweep_duration_ms();
        use_effect_with_deps(
            move |running: &bool| {
                let timer = running.then(|| {
                    let started = js_sys::Date::now() - *elapsed;
                    BrowserScheduler.interval(
                        FRAME_MS,
                        Box::new(move || elapsed.set(js_sys::Date::now() - started)),
                    )
                });
                move || drop(timer)
            },
            running,
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(elapsed, hovered, theme): &(f64, Option<usize>, Theme)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    if let Err(e) = draw_rings(&canvas, *elapsed, *hovered, *theme) {
                        warn!("stats chart not drawn: {}", e);
                    }
                }
                || ()
            },
            (*elapsed, *hovered, theme),
        );
    }

    let onmousemove = {
        let hovered = hovered.clone();
        let canvas_ref = canvas_ref.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() else {
                return;
            };
            let shown = canvas.client_width().max(1) as f64;
            let scale = CANVAS_SIZE as f64 / shown;
            let hit = hit_test(
                e.offset_x() as f64 * scale,
                e.offset_y() as f64 * scale,
                METRICS.len(),
            );
            if hit != *hovered {
                hovered.set(hit);
            }
        })
    };
    let onmouseleave = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| hovered.set(None))
    };

    let centre_color = (*hovered)
        .and_then(|i| METRICS.get(i))
        .map(|m| m.css)
        .unwrap_or("currentColor");

    html! {
        <section class="stats" ref={section}>
            <div class="stats-rule"></div>

            <div class="stats-legend">
                <h3>{"LEISTUNGS"}<span>{"DATEN"}</span></h3>
                <p>{"Echtzeit-Metriken unserer Operationszentrale."}</p>
                <ul>
                    { for METRICS.iter().enumerate().map(|(idx, metric)| {
                        let enter = {
                            let hovered = hovered.clone();
                            Callback::from(move |_: MouseEvent| hovered.set(Some(idx)))
                        };
                        let leave = onmouseleave.clone();
                        let dimmed = matches!(*hovered, Some(h) if h != idx);
                        html! {
                            <li
                                key={metric.label}
                                onmouseenter={enter}
                                onmouseleave={leave}
                                style={format!("opacity: {};", if dimmed { 0.3 } else { 1.0 })}
                            >
                                <div class="stats-row">
                                    <span class="stats-label">{metric.label}</span>
                                    <div class="stats-value">
                                        <b style={format!("color: {};", metric.css)}>{metric.value}</b>
                                        <div
                                            class="stats-dot"
                                            style={format!("background-color: {0}; box-shadow: 0 0 8px {0};", metric.css)}
                                        ></div>
                                    </div>
                                </div>
                            </li>
                        }
                    }) }
                </ul>
            </div>

            <div class="stats-chart">
                <canvas
                    ref={canvas_ref}
                    width={CANVAS_SIZE.to_string()}
                    height={CANVAS_SIZE.to_string()}
                    {onmousemove}
                    onmouseleave={onmouseleave.clone()}
                />
                <div class="stats-centre">
                    <div>
                        <span class="stats-centre-value" style={format!("color: {};", centre_color)}>
                            {centre_label(*hovered)}
                        </span>
                        <span class="stats-centre-caption">{"STATUS"}</span>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .stats {
                    position: relative;
                    padding: 5rem 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    gap: 4rem;
                    overflow: hidden;
                    background: #fafafa;
                    color: #171717;
                    font-family: 'Roboto', sans-serif;
                    transition: background-color 0.5s ease, color 0.5s ease;
                }

                .dark .stats {
                    background: #0a0a0a;
                    color: #fff;
                }

                .stats-rule {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: linear-gradient(to right, transparent, #D4AF37, transparent);
                }

                .dark .stats-rule {
                    background: linear-gradient(to right, transparent, #B59218, transparent);
                }

                .stats-legend {
                    z-index: 10;
                    width: 100%;
                    max-width: 24rem;
                    padding: 0 1.5rem;
                    box-sizing: border-box;
                }

                .stats-legend h3 {
                    margin: 0 0 0.5rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                }

                .stats-legend h3 span {
                    color: #B59218;
                }

                .dark .stats-legend h3 span {
                    color: #D4AF37;
                }

                .stats-legend p {
                    margin: 0 0 2rem;
                    font-size: 0.875rem;
                    color: #525252;
                }

                .dark .stats-legend p {
                    color: #a3a3a3;
                }

                .stats-legend ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .stats-legend li {
                    padding: 0.75rem;
                    border: 1px solid transparent;
                    border-radius: 4px;
                    cursor: default;
                    transition: all 0.3s ease;
                }

                .stats-legend li:hover {
                    background: #e5e5e5;
                    border-color: #d4d4d4;
                }

                .dark .stats-legend li:hover {
                    background: rgba(255, 255, 255, 0.05);
                    border-color: rgba(212, 175, 55, 0.3);
                }

                .stats-row {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .stats-label {
                    font-weight: 300;
                    color: #404040;
                }

                .dark .stats-label {
                    color: #d4d4d4;
                }

                .stats-value {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .stats-value b {
                    font-family: monospace;
                    font-size: 1.25rem;
                }

                .stats-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                }

                .stats-chart {
                    position: relative;
                    z-index: 10;
                    width: 300px;
                    height: 300px;
                }

                .stats-chart canvas {
                    width: 100%;
                    height: 100%;
                    cursor: pointer;
                }

                .stats-centre {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    pointer-events: none;
                }

                .stats-centre-value {
                    display: block;
                    font-family: monospace;
                    font-size: 2.25rem;
                    font-weight: 700;
                    transition: color 0.3s ease;
                }

                .stats-centre-caption {
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    color: #737373;
                }

                @media (min-width: 768px) {
                    .stats {
                        flex-direction: row;
                    }

                    .stats-chart {
                        width: 400px;
                        height: 400px;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radii_step_outwards() {
        let radii: Vec<f64> = (0..METRICS.len()).map(ring_radius).collect();
        assert_eq!(radii, vec![60.0, 75.0, 90.0, 105.0, 120.0]);
    }

    #[test]
    fn sweep_is_staggered_and_eases_out() {
        assert_eq!(ring_sweep(0.0, 0), 0.0);
        // second ring has not started yet
        assert_eq!(ring_sweep(100.0, 1), 0.0);
        assert!(ring_sweep(100.0, 0) > 0.0);
        // ease-out covers more than half the arc at half time
        assert!(ring_sweep(750.0, 0) > RING_EXTENT / 2.0);
        assert!(ring_sweep(750.0, 0) > ring_sweep(750.0, 1));
    }

    #[test]
    fn sweep_settles_at_three_quarters() {
        for i in 0..METRICS.len() {
            assert_eq!(ring_sweep(sweep_duration_ms(), i), RING_EXTENT);
            assert_eq!(ring_sweep(10_000.0, i), RING_EXTENT);
        }
        assert_eq!(sweep_duration_ms(), 1900.0);
    }

    #[test]
    fn hit_test_maps_points_to_rings() {
        // twelve o'clock on the innermost ring
        assert_eq!(hit_test(200.0, 140.0, 5), Some(0));
        // three o'clock on the middle ring
        assert_eq!(hit_test(290.0, 200.0, 5), Some(2));
        // six o'clock, outermost ring, slightly off the line
        assert_eq!(hit_test(200.0, 324.0, 5), Some(4));
    }

    #[test]
    fn hit_test_ignores_gap_centre_and_outside() {
        let d = 90.0 * std::f64::consts::FRAC_1_SQRT_2;
        // upper-left quarter is the open part of every ring
        assert_eq!(hit_test(200.0 - d, 200.0 - d, 5), None);
        assert_eq!(hit_test(200.0, 200.0, 5), None);
        assert_eq!(hit_test(200.0, 395.0, 5), None);
    }

    #[test]
    fn centre_shows_value_or_full_status() {
        assert_eq!(centre_label(None), "100%");
        assert_eq!(centre_label(Some(0)), "98");
        assert_eq!(centre_label(Some(2)), "120");
        assert_eq!(centre_label(Some(9)), "100%");
    }
}
