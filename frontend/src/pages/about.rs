use crate::components::icons::{Icon, SvgIcon};
use crate::reveal::{use_reveal, RevealPolicy};
use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

struct Value {
    icon: Icon,
    title: &'static str,
    desc: &'static str,
}

const VALUES: [Value; 3] = [
    Value {
        icon: Icon::Shield,
        title: "Präzision",
        desc: "Kein Detail entgeht uns.",
    },
    Value {
        icon: Icon::Lock,
        title: "Diskretion",
        desc: "Schutz, den man fühlt, aber nicht sieht.",
    },
    Value {
        icon: Icon::Radio,
        title: "Technologie",
        desc: "High-End Equipment im Einsatz.",
    },
];

/// Progress of a section through the viewport: 0 when its top edge touches
/// the bottom of the screen, 1 when its bottom edge leaves the top.
pub fn section_progress(top: f64, height: f64, viewport_height: f64) -> f64 {
    let travel = viewport_height + height;
    if travel <= 0.0 {
        return 0.0;
    }
    ((viewport_height - top) / travel).clamp(0.0, 1.0)
}

/// Vertical drift of the image stack, +100 px down to -100 px.
pub fn image_drift(progress: f64) -> f64 {
    100.0 - 200.0 * progress.clamp(0.0, 1.0)
}

#[function_component]
pub fn About() -> Html {
    let section = use_node_ref();
    let heading = use_node_ref();
    let copy = use_node_ref();
    let heading_visible = use_reveal(heading.clone(), RevealPolicy::Replay, 0.2);
    let copy_visible = use_reveal(copy.clone(), RevealPolicy::Replay, 0.2);

    let _ = use_window_scroll();
    let (_, viewport_height) = use_window_size();
    let drift = section
        .cast::<Element>()
        .map(|el| {
            let rect = el.get_bounding_client_rect();
            image_drift(section_progress(rect.top(), rect.height(), viewport_height))
        })
        .unwrap_or(0.0);

    html! {
        <section id="about" class="about" ref={section}>
            <div class="about-backdrop">
                <div class="about-backdrop-image"></div>
                <div class="about-backdrop-fade"></div>
            </div>

            <div class="about-container">
                <div class="about-grid">
                    <div class="about-text">
                        <div ref={heading} class={classes!("about-heading", heading_visible.then_some("revealed"))}>
                            <span class="about-kicker">
                                <span class="about-kicker-line"></span>
                                {"Über Uns"}
                            </span>
                            <h2>
                                {"WIR DEFINIEREN"}
                                <br />
                                <span class="about-accent">{"SICHERHEIT NEU."}</span>
                            </h2>
                        </div>

                        <div ref={copy} class={classes!("about-copy", copy_visible.then_some("revealed"))}>
                            <p class="about-lead">
                                {"A.S.S Security steht für moderne, kompromisslose Sicherheit in Dresden. Wir verbinden deutsche Präzision mit modernster Überwachungstechnologie, um Unternehmen und Privatpersonen den Schutz zu bieten, den sie verdienen."}
                            </p>
                            <div class="about-body">
                                <p>
                                    {"In einer sich schnell wandelnden Welt reichen traditionelle Methoden nicht mehr aus. Unser Ansatz ist proaktiv, diskret und technologisch führend. Wir warten nicht auf Vorfälle, wir verhindern sie."}
                                </p>
                                <p>
                                    {"Gegründet mit der Vision, Sicherheitsdienstleistungen auf ein neues Level zu heben, setzen wir auf handverlesenes Personal, kontinuierliche Weiterbildung und Equipment der nächsten Generation."}
                                </p>
                            </div>
                        </div>

                        <div class="about-values">
                            { for VALUES.iter().map(|value| html! {
                                <div class="about-value" key={value.title}>
                                    <div class="about-value-icon">
                                        <SvgIcon icon={value.icon} />
                                    </div>
                                    <h4>{value.title}</h4>
                                    <p>{value.desc}</p>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="about-images" style={format!("transform: translateY({:.1}px);", drift)}>
                        <div class="about-image about-image-main">
                            <img
                                src="https://images.unsplash.com/photo-1614064641938-3e82da55e6ba?q=80&w=2670&auto=format&fit=crop"
                                alt="Operations Center"
                                loading="lazy"
                            />
                            <div class="about-image-tint"></div>
                        </div>
                        <div class="about-image about-image-inset">
                            <img
                                src="https://images.unsplash.com/photo-1584433144859-1fc3ab64a957?q=80&w=2630&auto=format&fit=crop"
                                alt="Professional Security Team"
                                loading="lazy"
                            />
                        </div>
                        <div class="about-ring"></div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .about {
                    position: relative;
                    padding: 8rem 0;
                    overflow: hidden;
                    background: #fafafa;
                    color: #171717;
                    font-family: 'Host Grotesk', sans-serif;
                    transition: background-color 0.5s ease, color 0.5s ease;
                }

                .dark .about {
                    background: #171717;
                    color: #fff;
                }

                .about-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .about-backdrop-image {
                    position: absolute;
                    inset: 0;
                    background-image: url('https://images.unsplash.com/photo-1451187580459-43490279c0fa?q=80&w=2672&auto=format&fit=crop');
                    background-size: cover;
                    background-position: center;
                    background-attachment: fixed;
                    opacity: 0.1;
                    filter: grayscale(1);
                    mix-blend-mode: luminosity;
                }

                .dark .about-backdrop-image {
                    opacity: 0.2;
                }

                .about-backdrop-fade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to bottom, #fafafa, rgba(245, 245, 245, 0.9), #fafafa);
                }

                .dark .about-backdrop-fade {
                    background: linear-gradient(to bottom, #0a0a0a, rgba(23, 23, 23, 0.9), #0a0a0a);
                }

                .about-container {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 4rem;
                    align-items: center;
                }

                .about-text > * + * {
                    margin-top: 2rem;
                }

                .about-heading {
                    opacity: 0;
                    transform: translateX(-50px);
                    transition: opacity 0.8s ease, transform 0.8s ease;
                }

                .about-heading.revealed {
                    opacity: 1;
                    transform: translateX(0);
                }

                .about-kicker {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    margin-bottom: 1rem;
                    color: #B59218;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    text-transform: uppercase;
                }

                .dark .about-kicker {
                    color: #D4AF37;
                }

                .about-kicker-line {
                    width: 2rem;
                    height: 2px;
                    background: currentColor;
                }

                .about-heading h2 {
                    margin: 0 0 1.5rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                    line-height: 1.2;
                }

                .about-accent {
                    background: linear-gradient(to right, #B59218, #FDE047);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .about-copy {
                    opacity: 0;
                    transform: translateY(20px);
                    transition: opacity 0.8s ease 0.2s, transform 0.8s ease 0.2s;
                }

                .about-copy.revealed {
                    opacity: 1;
                    transform: translateY(0);
                }

                .about-lead {
                    margin: 0 0 2rem;
                    padding-left: 1.5rem;
                    border-left: 4px solid #D4AF37;
                    font-size: 1.125rem;
                    line-height: 1.7;
                    color: #525252;
                }

                .dark .about-lead {
                    color: #d4d4d4;
                }

                .about-body {
                    color: #737373;
                    line-height: 1.7;
                }

                .dark .about-body {
                    color: #a3a3a3;
                }

                .about-body p {
                    margin: 0 0 1rem;
                }

                .about-values {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                    margin-top: 3rem;
                }

                .about-value {
                    padding: 1.5rem;
                    background: #fff;
                    border: 1px solid #e5e5e5;
                    border-radius: 0.75rem;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                    transition: transform 0.3s ease, border-color 0.3s ease;
                }

                .dark .about-value {
                    background: rgba(38, 38, 38, 0.5);
                    border-color: #404040;
                    box-shadow: none;
                }

                .about-value:hover {
                    transform: translateY(-5px);
                    border-color: rgba(212, 175, 55, 0.5);
                }

                .about-value-icon {
                    margin-bottom: 1rem;
                    color: #B59218;
                }

                .dark .about-value-icon {
                    color: #D4AF37;
                }

                .about-value h4 {
                    margin: 0 0 0.5rem;
                    font-weight: 700;
                }

                .about-value p {
                    margin: 0;
                    font-size: 0.75rem;
                    color: #737373;
                }

                .dark .about-value p {
                    color: #a3a3a3;
                }

                .about-images {
                    position: relative;
                    display: none;
                    height: 600px;
                    will-change: transform;
                }

                .about-image {
                    position: absolute;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .about-image img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .about-image-main {
                    top: 0;
                    right: 0;
                    width: 80%;
                    height: 80%;
                    z-index: 10;
                    border: 1px solid #e5e5e5;
                }

                .dark .about-image-main {
                    border-color: rgba(212, 175, 55, 0.2);
                }

                .about-image-main img {
                    filter: grayscale(1);
                    transition: filter 0.7s ease;
                }

                .about-image-main img:hover {
                    filter: grayscale(0);
                }

                .about-image-tint {
                    position: absolute;
                    inset: 0;
                    background: rgba(212, 175, 55, 0.1);
                    mix-blend-mode: overlay;
                    pointer-events: none;
                }

                .about-image-inset {
                    bottom: 0;
                    left: 0;
                    width: 60%;
                    height: 60%;
                    z-index: 20;
                    border: 1px solid #fff;
                }

                .dark .about-image-inset {
                    border-color: #404040;
                }

                .about-ring {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 120%;
                    height: 120%;
                    transform: translate(-50%, -50%);
                    border: 1px solid rgba(212, 175, 55, 0.1);
                    border-radius: 9999px;
                    z-index: -1;
                    animation: about-pulse 2s ease-in-out infinite;
                }

                @keyframes about-pulse {
                    0%, 100% { opacity: 1; }
                    50% { opacity: 0.5; }
                }

                @media (min-width: 768px) {
                    .about-heading h2 {
                        font-size: 3.75rem;
                    }

                    .about-lead {
                        font-size: 1.25rem;
                    }

                    .about-values {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                @media (min-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr 1fr;
                    }

                    .about-images {
                        display: block;
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
    fn progress_spans_entry_to_exit() {
        // just below the fold
        assert_eq!(section_progress(900.0, 1100.0, 900.0), 0.0);
        // halfway through
        assert_eq!(section_progress(-100.0, 1100.0, 900.0), 0.5);
        // fully scrolled past
        assert_eq!(section_progress(-1100.0, 1100.0, 900.0), 1.0);
        assert_eq!(section_progress(-5000.0, 1100.0, 900.0), 1.0);
    }

    #[test]
    fn drift_runs_from_below_to_above() {
        assert_eq!(image_drift(0.0), 100.0);
        assert_eq!(image_drift(0.5), 0.0);
        assert_eq!(image_drift(1.0), -100.0);
    }

    #[test]
    fn empty_travel_is_zero() {
        assert_eq!(section_progress(0.0, 0.0, 0.0), 0.0);
    }
}
