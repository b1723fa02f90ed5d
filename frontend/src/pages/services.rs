use crate::components::icons::{Icon, SvgIcon};
use crate::reveal::{use_reveal, RevealPolicy};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollToOptions};
use yew::prelude::*;

struct Service {
    title: &'static str,
    icon: Icon,
    desc: &'static str,
}

const SERVICES: [Service; 5] = [
    Service {
        title: "Objektschutz",
        icon: Icon::Shield,
        desc: "Umfassender Schutz für Immobilien und Firmengebäude rund um die Uhr. Zutrittskontrolle und Streifendienst.",
    },
    Service {
        title: "Personenschutz",
        icon: Icon::UserCheck,
        desc: "Diskret und professionell. Wir sorgen für Ihre persönliche Sicherheit in jeder Situation.",
    },
    Service {
        title: "Event Security",
        icon: Icon::Radio,
        desc: "Sicherheit für Veranstaltungen jeder Größe. Einlasskontrolle, Crowd Management und VIP-Betreuung.",
    },
    Service {
        title: "High-Tech Monitoring",
        icon: Icon::Eye,
        desc: "KI-gestützte Videoüberwachung und Alarmverfolgung mit modernster Drohnentechnologie.",
    },
    Service {
        title: "Alarmverfolgung",
        icon: Icon::Activity,
        desc: "Sofortige Intervention bei Alarmauslösung durch mobile Einsatzkräfte und direkte Aufschaltung zur Leitstelle.",
    },
];

/// Slide nearest to the current scroll position, clamped to the slide range.
pub fn active_index(scroll_top: f64, slide_height: f64, count: usize) -> usize {
    if count == 0 || slide_height <= 0.0 || !scroll_top.is_finite() {
        return 0;
    }
    let raw = (scroll_top / slide_height).round();
    if raw <= 0.0 {
        0
    } else {
        (raw as usize).min(count - 1)
    }
}

/// Two-digit slide label, 1-based.
pub fn slide_label(index: usize) -> String {
    format!("{:02}", index + 1)
}

/// Lets at most one recomputation be queued per animation frame.
#[derive(Default)]
pub struct FrameGate {
    pending: Cell<bool>,
}

impl FrameGate {
    /// True if the caller should queue a frame; false if one is already queued.
    pub fn claim(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }
}

/// Runs `work` on the next frame unless one is already queued. The gate opens
/// again once `work` has run, or straight away when no frame could be requested.
pub fn queue_frame(
    gate: &Rc<FrameGate>,
    request: impl FnOnce(Box<dyn FnOnce()>) -> bool,
    work: impl FnOnce() + 'static,
) {
    if !gate.claim() {
        return;
    }
    let frame_gate = gate.clone();
    let requested = request(Box::new(move || {
        work();
        frame_gate.release();
    }));
    if !requested {
        gate.release();
    }
}

fn request_animation_frame(frame: Box<dyn FnOnce()>) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let frame = Closure::once_into_js(frame);
    window
        .request_animation_frame(frame.unchecked_ref())
        .is_ok()
}

#[derive(Properties, PartialEq)]
struct SlideProps {
    index: usize,
}

#[function_component]
fn ServiceSlide(props: &SlideProps) -> Html {
    let node = use_node_ref();
    let visible = use_reveal(node.clone(), RevealPolicy::Replay, 0.3);
    let service = &SERVICES[props.index];

    html! {
        <div class="service-slide">
            <div ref={node} class={classes!("service-card", visible.then_some("revealed"))}>
                <div class="service-graphic">
                    <div class="service-graphic-glow"></div>
                    <div class="service-graphic-scan">
                        <SvgIcon icon={Icon::Target} size={300} stroke_width={0.5} />
                    </div>
                    <div class="service-emblem">
                        <SvgIcon icon={service.icon} size={64} />
                        <div class="service-scanline"></div>
                    </div>
                </div>

                <div class="service-text">
                    <span class="service-kicker">
                        <span class="service-kicker-line"></span>
                        {format!("SERVICE_{}", slide_label(props.index))}
                    </span>
                    <h2>{service.title}</h2>
                    <p>{service.desc}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn Services() -> Html {
    let slider = use_node_ref();
    let active = use_state(|| 0usize);
    let gate = use_memo(|_| FrameGate::default(), ());

    let onscroll = {
        let slider = slider.clone();
        let active = active.clone();
        let gate = gate.clone();
        Callback::from(move |_: Event| {
            let slider = slider.clone();
            let active = active.clone();
            queue_frame(&gate, request_animation_frame, move || {
                let Some(el) = slider.cast::<HtmlElement>() else {
                    return;
                };
                let height = web_sys::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                active.set(active_index(el.scroll_top() as f64, height, SERVICES.len()));
            });
        })
    };

    let go_to = {
        let slider = slider.clone();
        move |index: usize| {
            let slider = slider.clone();
            Callback::from(move |_: MouseEvent| {
                let height = web_sys::window()
                    .and_then(|w| w.inner_height().ok())
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                if let Some(el) = slider.cast::<HtmlElement>() {
                    let options = ScrollToOptions::new();
                    options.set_top(index as f64 * height);
                    options.set_behavior(ScrollBehavior::Smooth);
                    el.scroll_to_with_scroll_to_options(&options);
                }
            })
        }
    };

    html! {
        <section id="services" class="services">
            <div class="services-grid"></div>

            <div class="services-current">
                <span>{slide_label(*active)}</span>
            </div>

            <div class="services-indicators">
                { for (0..SERVICES.len()).map(|idx| {
                    let is_active = idx == *active;
                    html! {
                        <div class="services-indicator" onclick={go_to(idx)}>
                            <span class={classes!("indicator-label", is_active.then_some("active"))}>
                                {slide_label(idx)}
                            </span>
                            <div class={classes!("indicator-bar", is_active.then_some("active"))}></div>
                        </div>
                    }
                }) }
            </div>

            <div class="services-slider" ref={slider} {onscroll}>
                { for (0..SERVICES.len()).map(|index| html! { <ServiceSlide key={index} {index} /> }) }
            </div>

            <style>
                {r#"
                .services {
                    position: relative;
                    width: 100%;
                    height: 100vh;
                    overflow: hidden;
                    background: #fafafa;
                    font-family: 'Titillium Web', sans-serif;
                    transition: background-color 0.5s ease;
                }

                .dark .services {
                    background: #0a0a0a;
                }

                .services-grid {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                    background-image:
                        linear-gradient(rgba(0, 0, 0, 0.05) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(0, 0, 0, 0.05) 1px, transparent 1px);
                    background-size: 60px 60px;
                }

                .dark .services-grid {
                    background-image:
                        linear-gradient(rgba(212, 175, 55, 0.05) 1px, transparent 1px),
                        linear-gradient(90deg, rgba(212, 175, 55, 0.05) 1px, transparent 1px);
                }

                .services-current {
                    display: none;
                    position: absolute;
                    top: 2rem;
                    right: 2rem;
                    z-index: 30;
                }

                .services-current span {
                    font-size: 3.75rem;
                    font-weight: 700;
                    color: #e5e5e5;
                    user-select: none;
                }

                .dark .services-current span {
                    color: #262626;
                }

                .services-indicators {
                    display: none;
                    position: absolute;
                    right: 5%;
                    top: 50%;
                    z-index: 20;
                    transform: translateY(-50%);
                    flex-direction: column;
                    align-items: center;
                    gap: 1rem;
                }

                .services-indicator {
                    position: relative;
                    display: flex;
                    align-items: center;
                    cursor: pointer;
                }

                .indicator-label {
                    margin-right: 1rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    color: #a3a3a3;
                    transition: all 0.5s ease;
                }

                .indicator-label.active {
                    color: #D4AF37;
                    transform: scale(1.25);
                }

                .indicator-bar {
                    width: 4px;
                    height: 6px;
                    border-radius: 9999px;
                    background: #d4d4d4;
                    transition: all 0.5s ease;
                }

                .dark .indicator-bar {
                    background: #404040;
                }

                .indicator-bar.active,
                .dark .indicator-bar.active {
                    height: 2rem;
                    background: #D4AF37;
                    box-shadow: 0 0 10px rgba(212, 175, 55, 0.5);
                }

                .services-slider {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    height: 100%;
                    overflow-y: scroll;
                    scroll-snap-type: y mandatory;
                    scroll-behavior: smooth;
                    scrollbar-width: none;
                    -ms-overflow-style: none;
                }

                .services-slider::-webkit-scrollbar {
                    display: none;
                }

                .service-slide {
                    width: 100%;
                    height: 100vh;
                    scroll-snap-align: center;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 1.5rem 1.5rem;
                    box-sizing: border-box;
                }

                .service-card {
                    position: relative;
                    width: 100%;
                    max-width: 64rem;
                    display: grid;
                    grid-template-columns: 1fr;
                    border: 1px solid #e5e5e5;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.8);
                    backdrop-filter: blur(12px);
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    opacity: 0;
                    transform: scale(0.9);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .dark .service-card {
                    border-color: rgba(212, 175, 55, 0.2);
                    background: rgba(23, 23, 23, 0.8);
                }

                .service-card.revealed {
                    opacity: 1;
                    transform: scale(1);
                }

                .service-graphic {
                    position: relative;
                    height: 16rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #f5f5f5;
                    border-bottom: 1px solid #e5e5e5;
                }

                .dark .service-graphic {
                    background: #171717;
                    border-color: rgba(212, 175, 55, 0.1);
                }

                .service-graphic-glow {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom right, rgba(212, 175, 55, 0.1), transparent);
                }

                .service-graphic-scan {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #D4AF37;
                    opacity: 0.1;
                    animation: service-pulse 2s ease-in-out infinite;
                }

                .dark .service-graphic-scan {
                    opacity: 0.2;
                }

                .service-emblem {
                    position: relative;
                    z-index: 10;
                    padding: 2rem;
                    border: 1px solid rgba(212, 175, 55, 0.2);
                    border-radius: 9999px;
                    background: #fff;
                    color: #B59218;
                    box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.1);
                    overflow: hidden;
                    transform: scale(0);
                    transition: transform 0.6s cubic-bezier(0.34, 1.56, 0.64, 1) 0.2s;
                }

                .dark .service-emblem {
                    background: rgba(10, 10, 10, 0.8);
                    color: #D4AF37;
                    box-shadow: 0 0 30px rgba(212, 175, 55, 0.2);
                }

                .service-card.revealed .service-emblem {
                    transform: scale(1);
                }

                .service-scanline {
                    position: absolute;
                    left: 0;
                    top: 0;
                    width: 100%;
                    height: 4px;
                    background: rgba(250, 204, 21, 0.5);
                    box-shadow: 0 0 10px #D4AF37;
                    animation: service-scan 3s linear infinite;
                }

                .service-text {
                    padding: 2rem;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                    text-align: left;
                }

                .service-kicker {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 0.5rem;
                    color: #B59218;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    opacity: 0;
                    transform: translateX(-20px);
                    transition: all 0.5s ease 0.3s;
                }

                .dark .service-kicker {
                    color: #D4AF37;
                }

                .service-kicker-line {
                    width: 2rem;
                    height: 1px;
                    background: currentColor;
                }

                .service-text h2 {
                    margin: 0 0 1.5rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #171717;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: all 0.5s ease 0.4s;
                }

                .dark .service-text h2 {
                    color: #fff;
                }

                .service-text p {
                    margin: 0;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: #525252;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: all 0.5s ease 0.5s;
                }

                .dark .service-text p {
                    color: #a3a3a3;
                }

                .service-card.revealed .service-kicker,
                .service-card.revealed .service-text h2,
                .service-card.revealed .service-text p {
                    opacity: 1;
                    transform: none;
                }

                @keyframes service-scan {
                    0% { top: 0%; }
                    50% { top: 100%; }
                    100% { top: 0%; }
                }

                @keyframes service-pulse {
                    0%, 100% { opacity: 0.2; }
                    50% { opacity: 0.1; }
                }

                @media (min-width: 768px) {
                    .services-current {
                        display: block;
                    }

                    .services-indicators {
                        display: flex;
                    }

                    .service-card {
                        grid-template-columns: 1fr 1fr;
                    }

                    .service-graphic {
                        height: auto;
                        border-bottom: none;
                        border-right: 1px solid #e5e5e5;
                    }

                    .service-text {
                        padding: 4rem;
                    }

                    .service-text h2 {
                        font-size: 3rem;
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
    use std::cell::RefCell;

    #[test]
    fn index_rounds_to_the_nearest_slide() {
        assert_eq!(active_index(0.0, 800.0, 5), 0);
        assert_eq!(active_index(399.0, 800.0, 5), 0);
        assert_eq!(active_index(400.0, 800.0, 5), 1);
        assert_eq!(active_index(1700.0, 800.0, 5), 2);
    }

    #[test]
    fn index_is_clamped() {
        assert_eq!(active_index(-300.0, 800.0, 5), 0);
        assert_eq!(active_index(100_000.0, 800.0, 5), 4);
        assert_eq!(active_index(500.0, 0.0, 5), 0);
        assert_eq!(active_index(500.0, 800.0, 0), 0);
        assert_eq!(active_index(f64::NAN, 800.0, 5), 0);
    }

    #[test]
    fn labels_are_two_digits() {
        assert_eq!(slide_label(0), "01");
        assert_eq!(slide_label(4), "05");
        assert_eq!(slide_label(11), "12");
    }

    #[test]
    fn gate_admits_one_frame_at_a_time() {
        let gate = FrameGate::default();
        assert!(gate.claim());
        assert!(!gate.claim());
        assert!(!gate.claim());
        gate.release();
        assert!(gate.claim());
    }

    #[test]
    fn failed_frame_request_reopens_the_gate() {
        let gate = Rc::new(FrameGate::default());
        let ran = Rc::new(Cell::new(false));
        let r = ran.clone();
        queue_frame(&gate, |_| false, move || r.set(true));
        assert!(!ran.get());
        assert!(gate.claim());
    }

    #[test]
    fn queued_frame_holds_the_gate_until_it_runs() {
        let gate = Rc::new(FrameGate::default());
        let queued: Rc<RefCell<Vec<Box<dyn FnOnce()>>>> = Rc::default();
        let runs = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let q = queued.clone();
            let r = runs.clone();
            queue_frame(
                &gate,
                move |frame| {
                    q.borrow_mut().push(frame);
                    true
                },
                move || r.set(r.get() + 1),
            );
        }
        assert_eq!(queued.borrow().len(), 1);

        let frame = queued.borrow_mut().remove(0);
        frame();
        assert_eq!(runs.get(), 1);
        assert!(gate.claim());
    }
}
