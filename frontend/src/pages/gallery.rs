use web_sys::Element;
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Scroll distance over which the panel strip stays pinned.
pub const PIN_DISTANCE_PX: f64 = 3000.0;
/// Width the strip travels, in viewport widths (four panels, three moves).
pub const TRACK_TRAVEL_VW: f64 = 300.0;

struct Project {
    title: &'static str,
    category: &'static str,
    image: &'static str,
    desc: &'static str,
}

const PROJECTS: [Project; 4] = [
    Project {
        title: "Personenschutz VIP",
        category: "Close Protection",
        image: "https://images.unsplash.com/photo-1551847677-dc82d764e1eb?q=80&w=2670&auto=format&fit=crop",
        desc: "Diskretion und Sicherheit für hochrangige Persönlichkeiten.",
    },
    Project {
        title: "Objektschutz Industrie",
        category: "Site Security",
        image: "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?q=80&w=2670&auto=format&fit=crop",
        desc: "24/7 Überwachung von Industrieanlagen mit Drohnentechnologie.",
    },
    Project {
        title: "Alarmverfolgung",
        category: "Intervention",
        image: "https://images.unsplash.com/photo-1605810230434-7631ac76ec81?q=80&w=2700&auto=format&fit=crop",
        desc: "Schnelle Reaktionszeiten bei Alarmauslösung durch mobile Einheiten.",
    },
    Project {
        title: "Operationszentrale",
        category: "Monitoring",
        image: "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=2670&auto=format&fit=crop",
        desc: "High-Tech Leitstelle für Echtzeit-Reaktion.",
    },
];

/// How far through the pin we are, given the trigger's top edge relative to
/// the viewport (negative once it has scrolled past).
pub fn pin_progress(trigger_top: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return 0.0;
    }
    (-trigger_top / distance).clamp(0.0, 1.0)
}

/// Horizontal translation of the strip, in vw.
pub fn track_offset_vw(progress: f64) -> f64 {
    -progress.clamp(0.0, 1.0) * TRACK_TRAVEL_VW
}

#[function_component]
pub fn Gallery() -> Html {
    let trigger = use_node_ref();
    // Re-render on scroll; the position itself comes from the trigger rect.
    let _ = use_window_scroll();
    let _ = use_window_size();

    let progress = trigger
        .cast::<Element>()
        .map(|el| pin_progress(el.get_bounding_client_rect().top(), PIN_DISTANCE_PX))
        .unwrap_or(0.0);
    let offset = track_offset_vw(progress);

    html! {
        <section id="gallery" class="gallery">
            <div
                class="gallery-trigger"
                ref={trigger}
                style={format!("height: calc(100vh + {}px);", PIN_DISTANCE_PX)}
            >
                <div class="gallery-pin">
                    <div class="gallery-track" style={format!("transform: translateX({:.3}vw);", offset)}>
                        { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                            <div class="gallery-panel" key={project.title}>
                                <div class="gallery-backdrop">
                                    <img src={project.image} alt={project.title} loading="lazy" />
                                    <div class="gallery-shade"></div>
                                </div>

                                <div class="gallery-card-wrap">
                                    <div class="gallery-card">
                                        <div class="gallery-card-meta">
                                            <span class="gallery-category">{project.category}</span>
                                            <span class="gallery-count">{format!("0{} / 04", index + 1)}</span>
                                        </div>
                                        <h3>{project.title}</h3>
                                        <p>{project.desc}</p>
                                    </div>
                                </div>

                                <div class="gallery-watermark">
                                    <span>{index + 1}</span>
                                </div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .gallery {
                    background: #171717;
                    color: #fff;
                }

                .gallery-trigger {
                    position: relative;
                }

                .gallery-pin {
                    position: sticky;
                    top: 0;
                    height: 100vh;
                    overflow: hidden;
                }

                .gallery-track {
                    display: flex;
                    flex-direction: row;
                    width: 400vw;
                    height: 100%;
                    transition: transform 0.6s ease-out;
                    will-change: transform;
                }

                .gallery-panel {
                    position: relative;
                    width: 100vw;
                    height: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 1rem;
                    box-sizing: border-box;
                }

                .gallery-backdrop {
                    position: absolute;
                    inset: 0;
                    z-index: 0;
                }

                .gallery-backdrop img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    opacity: 0.4;
                    filter: grayscale(1);
                    transition: filter 0.7s ease;
                }

                .gallery-backdrop img:hover {
                    filter: grayscale(0);
                }

                .gallery-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, #000, transparent, rgba(0, 0, 0, 0.5));
                    pointer-events: none;
                }

                .gallery-card-wrap {
                    position: relative;
                    z-index: 10;
                    width: 100%;
                    max-width: 90vw;
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 2rem;
                    align-items: center;
                }

                .gallery-card {
                    padding: 1.5rem;
                    background: rgba(0, 0, 0, 0.6);
                    backdrop-filter: blur(12px);
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    border-radius: 1rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.5);
                    transition: transform 0.5s ease;
                }

                .gallery-card:hover {
                    transform: translateY(-0.5rem);
                }

                .gallery-card-meta {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1rem;
                }

                .gallery-category {
                    padding: 0.25rem 0.75rem;
                    background: #D4AF37;
                    color: #000;
                    font-size: 0.625rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    border-radius: 4px;
                }

                .gallery-count {
                    color: #a3a3a3;
                    font-size: 0.75rem;
                    font-family: monospace;
                }

                .gallery-card h3 {
                    margin: 0 0 1rem;
                    font-family: 'Host Grotesk', sans-serif;
                    font-size: 1.875rem;
                    font-weight: 700;
                    line-height: 1.15;
                    hyphens: auto;
                    overflow-wrap: break-word;
                }

                .gallery-card p {
                    margin: 0 0 1rem;
                    padding-left: 1rem;
                    border-left: 2px solid #D4AF37;
                    color: #d4d4d4;
                    font-size: 1rem;
                }

                .gallery-watermark {
                    position: absolute;
                    right: 0;
                    bottom: 0;
                    padding: 1rem;
                    opacity: 0.1;
                    pointer-events: none;
                }

                .gallery-watermark span {
                    font-size: 6rem;
                    font-weight: 700;
                    line-height: 1;
                    color: transparent;
                    -webkit-text-stroke: 2px rgba(255, 255, 255, 0.5);
                }

                @media (min-width: 768px) {
                    .gallery-panel {
                        padding: 2.5rem;
                    }

                    .gallery-card-wrap {
                        max-width: 64rem;
                        grid-template-columns: 1fr 1fr;
                    }

                    .gallery-card {
                        padding: 2.5rem;
                    }

                    .gallery-card h3 {
                        font-size: 3rem;
                    }

                    .gallery-card p {
                        font-size: 1.125rem;
                    }

                    .gallery-watermark {
                        padding: 2.5rem;
                    }

                    .gallery-watermark span {
                        font-size: 15rem;
                    }
                }

                @media (min-width: 1024px) {
                    .gallery-panel {
                        padding: 5rem;
                    }

                    .gallery-card h3 {
                        font-size: 3.75rem;
                    }

                    .gallery-watermark span {
                        font-size: 20rem;
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
    fn progress_is_zero_before_the_pin() {
        assert_eq!(pin_progress(250.0, PIN_DISTANCE_PX), 0.0);
        assert_eq!(pin_progress(0.0, PIN_DISTANCE_PX), 0.0);
    }

    #[test]
    fn progress_tracks_the_pinned_distance() {
        assert_eq!(pin_progress(-1500.0, PIN_DISTANCE_PX), 0.5);
        assert_eq!(pin_progress(-3000.0, PIN_DISTANCE_PX), 1.0);
        assert_eq!(pin_progress(-9000.0, PIN_DISTANCE_PX), 1.0);
    }

    #[test]
    fn zero_distance_never_divides() {
        assert_eq!(pin_progress(-10.0, 0.0), 0.0);
    }

    #[test]
    fn strip_moves_three_viewports() {
        assert_eq!(track_offset_vw(0.0), 0.0);
        assert_eq!(track_offset_vw(0.5), -150.0);
        assert_eq!(track_offset_vw(1.0), -300.0);
        assert_eq!(track_offset_vw(2.0), -300.0);
    }
}
