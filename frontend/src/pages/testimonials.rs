use crate::components::icons::{Icon, SvgIcon};
use yew::prelude::*;

struct Testimonial {
    name: &'static str,
    company: &'static str,
    text: &'static str,
}

const TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "Hans Müller",
        company: "Tech Corp",
        text: "Hervorragender Service. Sehr diskret und professionell.",
    },
    Testimonial {
        name: "Sarah Schmidt",
        company: "Event GmbH",
        text: "Das Event verlief dank A.S.S reibungslos.",
    },
    Testimonial {
        name: "Klaus Weber",
        company: "Immobilien AG",
        text: "Bester Objektschutz in Dresden. Absolut empfehlenswert.",
    },
    Testimonial {
        name: "Julia Wagner",
        company: "Privat",
        text: "Ich fühle mich endlich wieder sicher.",
    },
];

pub fn next_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (current + 1) % len
    }
}

pub fn prev_index(current: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else if current == 0 || current >= len {
        len - 1
    } else {
        current - 1
    }
}

#[function_component]
pub fn Testimonials() -> Html {
    let index = use_state(|| 0usize);
    let len = TESTIMONIALS.len();

    let next = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(next_index(*index, len)))
    };
    let prev = {
        let index = index.clone();
        Callback::from(move |_: MouseEvent| index.set(prev_index(*index, len)))
    };

    let current = &TESTIMONIALS[(*index).min(len - 1)];

    html! {
        <section id="testimonials" class="testimonials">
            <div class="testimonials-quote-mark">
                <SvgIcon icon={Icon::Quote} size={400} />
            </div>

            <div class="testimonials-inner">
                <div class="testimonials-stars">
                    { for (0..5).map(|_| html! { <SvgIcon icon={Icon::Star} class={classes!("star")} /> }) }
                </div>

                <div class="testimonials-stage">
                    // keyed so the entrance animation replays on every change
                    <div class="testimonial" key={*index}>
                        <h2>{format!("\"{}\"", current.text)}</h2>
                        <div class="testimonial-author">
                            <p class="testimonial-name">{current.name}</p>
                            <p class="testimonial-company">{current.company}</p>
                        </div>
                    </div>
                </div>

                <div class="testimonials-nav">
                    <button class="testimonials-arrow" onclick={prev} aria-label="Zurück">
                        <SvgIcon icon={Icon::ChevronLeft} />
                    </button>

                    <div class="testimonials-dots">
                        { for (0..len).map(|i| {
                            let select = {
                                let index = index.clone();
                                Callback::from(move |_: MouseEvent| index.set(i))
                            };
                            html! {
                                <div class={classes!("testimonials-dot", (i == *index).then_some("active"))} onclick={select}></div>
                            }
                        }) }
                    </div>

                    <button class="testimonials-arrow" onclick={next} aria-label="Weiter">
                        <SvgIcon icon={Icon::ChevronRight} />
                    </button>
                </div>
            </div>

            <style>
                {r#"
                .testimonials {
                    position: relative;
                    width: 100%;
                    height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: #fff;
                    color: #0f172a;
                    font-family: 'Host Grotesk', sans-serif;
                    transition: background-color 0.5s ease, color 0.5s ease;
                }

                .dark .testimonials {
                    background: #1e293b;
                    color: #fff;
                }

                .testimonials-quote-mark {
                    position: absolute;
                    top: 0;
                    right: 0;
                    opacity: 0.05;
                }

                .dark .testimonials-quote-mark {
                    opacity: 0.1;
                }

                .testimonials-inner {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-align: center;
                }

                .testimonials-stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 2rem;
                }

                .testimonials-stars .star {
                    color: #fbbf24;
                    fill: #fbbf24;
                }

                .testimonials-stage {
                    position: relative;
                    width: 100%;
                    height: 300px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .testimonial {
                    position: absolute;
                    width: 100%;
                    animation: testimonial-in 0.4s ease both;
                }

                .testimonial h2 {
                    margin: 0 0 2rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    font-style: italic;
                    letter-spacing: -0.025em;
                    line-height: 1.2;
                    color: #1e293b;
                }

                .dark .testimonial h2 {
                    color: #f1f5f9;
                }

                .testimonial-author {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                }

                .testimonial-name {
                    margin: 0 0 0.25rem;
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #B59218;
                }

                .dark .testimonial-name {
                    color: #FDE047;
                }

                .testimonial-company {
                    margin: 0;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #64748b;
                }

                .dark .testimonial-company {
                    color: #94a3b8;
                }

                .testimonials-nav {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-top: 2rem;
                }

                .testimonials-arrow {
                    width: 3rem;
                    height: 3rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #cbd5e1;
                    border-radius: 9999px;
                    background: none;
                    color: #475569;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .dark .testimonials-arrow {
                    border-color: #475569;
                    color: #cbd5e1;
                }

                .testimonials-arrow:hover {
                    background: #f1f5f9;
                    transform: scale(1.1);
                }

                .dark .testimonials-arrow:hover {
                    background: #334155;
                }

                .testimonials-dots {
                    display: flex;
                    gap: 0.5rem;
                }

                .testimonials-dot {
                    width: 0.5rem;
                    height: 6px;
                    border-radius: 9999px;
                    background: #cbd5e1;
                    cursor: pointer;
                    transition: all 0.3s ease;
                }

                .dark .testimonials-dot {
                    background: #475569;
                }

                .testimonials-dot:hover {
                    background: #94a3b8;
                }

                .testimonials-dot.active,
                .dark .testimonials-dot.active {
                    width: 2rem;
                    background: #D4AF37;
                }

                @keyframes testimonial-in {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @media (min-width: 768px) {
                    .testimonial h2 {
                        font-size: 3.75rem;
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
    fn next_wraps_to_the_first() {
        assert_eq!(next_index(0, 4), 1);
        assert_eq!(next_index(3, 4), 0);
    }

    #[test]
    fn prev_wraps_to_the_last() {
        assert_eq!(prev_index(2, 4), 1);
        assert_eq!(prev_index(0, 4), 3);
    }

    #[test]
    fn full_cycle_returns_home() {
        let mut i = 0;
        for _ in 0..TESTIMONIALS.len() {
            i = next_index(i, TESTIMONIALS.len());
        }
        assert_eq!(i, 0);
        for _ in 0..TESTIMONIALS.len() {
            i = prev_index(i, TESTIMONIALS.len());
        }
        assert_eq!(i, 0);
    }

    #[test]
    fn empty_carousel_stays_put() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
    }
}
