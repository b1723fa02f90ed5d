use crate::components::icons::{Icon, SvgIcon};
use crate::reveal::{use_reveal, RevealPolicy};
use yew::prelude::*;

struct Step {
    title: &'static str,
    desc: &'static str,
    sub: &'static str,
    icon: Icon,
    emblem: Icon,
}

const STEPS: [Step; 4] = [
    Step {
        title: "Analyse & Beratung",
        desc: "Detaillierte Risikoanalyse Ihrer Situation und Erstellung eines maßgeschneiderten Sicherheitskonzepts.",
        sub: "Assessment",
        icon: Icon::Target,
        emblem: Icon::Eye,
    },
    Step {
        title: "Planung & Strategie",
        desc: "Auswahl der passenden Sicherheitsmaßnahmen, Technologie und des qualifizierten Personals.",
        sub: "Strategy",
        icon: Icon::Shield,
        emblem: Icon::HelpCircle,
    },
    Step {
        title: "Operative Umsetzung",
        desc: "Reibungslose Integration unserer Sicherheitskräfte und Systeme in Ihre Abläufe.",
        sub: "Execution",
        icon: Icon::Zap,
        emblem: Icon::ShieldCheck,
    },
    Step {
        title: "Qualitätskontrolle",
        desc: "Kontinuierliche Überwachung, Reporting und Anpassung der Maßnahmen für maximalen Schutz.",
        sub: "Quality",
        icon: Icon::CheckCircle,
        emblem: Icon::Lock,
    },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

/// Cards alternate sides on wide layouts, starting on the left.
pub fn card_side(index: usize) -> Side {
    if index % 2 == 0 {
        Side::Left
    } else {
        Side::Right
    }
}

#[derive(Properties, PartialEq)]
struct ItemProps {
    index: usize,
}

#[function_component]
fn TimelineItem(props: &ItemProps) -> Html {
    let step = &STEPS[props.index];
    let emblem = use_node_ref();
    let card = use_node_ref();
    let emblem_visible = use_reveal(emblem.clone(), RevealPolicy::Replay, 0.1);
    let card_visible = use_reveal(card.clone(), RevealPolicy::Replay, 0.2);

    let side = match card_side(props.index) {
        Side::Left => "left",
        Side::Right => "right",
    };

    html! {
        <div class="timeline-item">
            <div ref={emblem} class={classes!("timeline-emblem", emblem_visible.then_some("revealed"))}>
                <SvgIcon icon={step.emblem} size={40} stroke_width={1.5} class={classes!("timeline-emblem-icon")} />
            </div>

            <div ref={card} class={classes!("timeline-card", side, card_visible.then_some("revealed"))}>
                <div class={classes!("timeline-connector", side)}></div>
                <div class="timeline-card-body">
                    <div class="timeline-card-head">
                        <h3>{step.title}</h3>
                        <div class="timeline-card-icon">
                            <SvgIcon icon={step.icon} size={20} />
                        </div>
                    </div>
                    <p>{step.desc}</p>
                    <div class="timeline-card-sub">
                        <span class="timeline-dot"></span>
                        {step.sub}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[function_component]
pub fn Timeline() -> Html {
    html! {
        <section id="timeline" class="timeline">
            <div class="timeline-glow"></div>

            <div class="timeline-header">
                <h2>{"Unser "}<span>{"Vorgehen"}</span></h2>
                <p>{"Ein strukturierter Prozess für kompromisslose Sicherheit in vier Phasen."}</p>
                <div class="timeline-header-line"></div>
            </div>

            <div class="timeline-body">
                <div class="timeline-spine"></div>
                <div class="timeline-items">
                    { for (0..STEPS.len()).map(|index| html! { <TimelineItem key={index} {index} /> }) }
                </div>
            </div>

            <style>
                {r#"
                .timeline {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: #f5f5f5;
                    font-family: 'Titillium Web', sans-serif;
                    transition: background-color 0.5s ease;
                }

                .dark .timeline {
                    background: #0a0a0a;
                }

                .timeline-glow {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 500px;
                    background: linear-gradient(to bottom, #fff, transparent);
                    pointer-events: none;
                }

                .dark .timeline-glow {
                    background: linear-gradient(to bottom, #171717, transparent);
                }

                .timeline-header {
                    position: relative;
                    z-index: 10;
                    margin-bottom: 6rem;
                    padding: 0 1rem;
                    text-align: center;
                }

                .timeline-header h2 {
                    margin: 0 0 1rem;
                    font-size: 2.25rem;
                    font-weight: 700;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    color: #171717;
                }

                .dark .timeline-header h2 {
                    color: #fff;
                }

                .timeline-header h2 span {
                    color: #B59218;
                }

                .dark .timeline-header h2 span {
                    color: #D4AF37;
                }

                .timeline-header p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: #525252;
                }

                .dark .timeline-header p {
                    color: #a3a3a3;
                }

                .timeline-header-line {
                    width: 4px;
                    height: 5rem;
                    margin: 2rem auto 0;
                    background: linear-gradient(to bottom, transparent, #D4AF37, #D4AF37);
                }

                .timeline-body {
                    position: relative;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }

                .timeline-spine {
                    display: none;
                    position: absolute;
                    left: 50%;
                    top: 0;
                    bottom: 0;
                    width: 2px;
                    transform: translateX(-50%);
                    background: linear-gradient(to bottom, transparent, #d4d4d4, transparent);
                }

                .dark .timeline-spine {
                    background: linear-gradient(to bottom, transparent, rgba(212, 175, 55, 0.3), transparent);
                }

                .timeline-items {
                    padding: 3rem 0;
                }

                .timeline-item {
                    position: relative;
                    width: 100%;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 2rem;
                    margin-bottom: 4rem;
                }

                .timeline-item:last-child {
                    margin-bottom: 0;
                }

                .timeline-emblem {
                    position: relative;
                    z-index: 20;
                    flex-shrink: 0;
                    width: 5rem;
                    height: 5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 2px solid #D4AF37;
                    border-radius: 9999px;
                    background: #fff;
                    color: #D4AF37;
                    box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
                    opacity: 0;
                    transform: scale(0.5);
                    transition: opacity 0.5s ease, transform 0.5s ease;
                }

                .dark .timeline-emblem {
                    background: #0a0a0a;
                    box-shadow: 0 0 20px rgba(212, 175, 55, 0.4);
                }

                .timeline-emblem.revealed {
                    opacity: 1;
                    transform: scale(1);
                }

                .timeline-emblem-icon {
                    animation: timeline-breathe 2.4s ease-in-out infinite;
                }

                .timeline-card {
                    position: relative;
                    width: 100%;
                    padding: 2rem;
                    box-sizing: border-box;
                    background: #fff;
                    border: 1px solid #e5e5e5;
                    border-radius: 1rem;
                    backdrop-filter: blur(4px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    opacity: 0;
                    transition: opacity 0.6s ease-out, transform 0.6s ease-out, border-color 0.3s ease;
                }

                .timeline-card.left {
                    transform: translateX(-50px);
                }

                .timeline-card.right {
                    transform: translateX(50px);
                }

                .timeline-card.revealed {
                    opacity: 1;
                    transform: translateX(0);
                }

                .dark .timeline-card {
                    background: rgba(23, 23, 23, 0.8);
                    border-color: rgba(212, 175, 55, 0.2);
                }

                .timeline-card:hover {
                    border-color: rgba(212, 175, 55, 0.5);
                }

                .timeline-connector {
                    display: none;
                    position: absolute;
                    top: 50%;
                    width: 20%;
                    height: 2px;
                    transform: translateY(-50%);
                    background: #fef08a;
                    z-index: -1;
                }

                .dark .timeline-connector {
                    background: rgba(212, 175, 55, 0.3);
                }

                .timeline-connector.left {
                    right: -20%;
                }

                .timeline-connector.right {
                    left: -20%;
                }

                .timeline-card-body {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .timeline-card-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: flex-start;
                    margin-bottom: 0.5rem;
                    padding-bottom: 1rem;
                    border-bottom: 1px solid #e5e5e5;
                }

                .dark .timeline-card-head {
                    border-color: rgba(255, 255, 255, 0.1);
                }

                .timeline-card-head h3 {
                    margin: 0;
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: 0.025em;
                    color: #171717;
                    transition: color 0.3s ease;
                }

                .dark .timeline-card-head h3 {
                    color: #fff;
                }

                .timeline-card:hover .timeline-card-head h3 {
                    color: #B59218;
                }

                .dark .timeline-card:hover .timeline-card-head h3 {
                    color: #FDE047;
                }

                .timeline-card-icon {
                    padding: 0.5rem;
                    border-radius: 0.5rem;
                    background: #fefce8;
                    color: #D4AF37;
                }

                .dark .timeline-card-icon {
                    background: rgba(113, 63, 18, 0.2);
                }

                .timeline-card-body p {
                    margin: 0;
                    font-size: 1rem;
                    line-height: 1.7;
                    color: #525252;
                }

                .dark .timeline-card-body p {
                    color: #d4d4d4;
                }

                .timeline-card-sub {
                    margin-top: 0.5rem;
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #a3a3a3;
                }

                .dark .timeline-card-sub {
                    color: #737373;
                }

                .timeline-dot {
                    width: 0.5rem;
                    height: 0.5rem;
                    border-radius: 9999px;
                    background: #D4AF37;
                }

                @keyframes timeline-breathe {
                    0%, 100% { transform: scale(1); }
                    50% { transform: scale(1.08); }
                }

                @media (min-width: 768px) {
                    .timeline {
                        padding: 8rem 0;
                    }

                    .timeline-header {
                        margin-bottom: 8rem;
                    }

                    .timeline-header h2 {
                        font-size: 3.75rem;
                    }

                    .timeline-spine {
                        display: block;
                    }

                    .timeline-item {
                        flex-direction: row;
                        justify-content: center;
                        gap: 0;
                        margin-bottom: 8rem;
                    }

                    .timeline-emblem {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 6.25rem;
                        height: 6.25rem;
                        margin: -3.125rem 0 0 -3.125rem;
                    }

                    .timeline-card {
                        width: 40%;
                    }

                    .timeline-card.left {
                        margin-right: 55%;
                    }

                    .timeline-card.right {
                        margin-left: 55%;
                    }

                    .timeline-connector {
                        display: block;
                    }

                    .timeline-card-head h3 {
                        font-size: 1.5rem;
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
    fn cards_alternate_starting_left() {
        let sides: Vec<Side> = (0..STEPS.len()).map(card_side).collect();
        assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left, Side::Right]);
    }
}
