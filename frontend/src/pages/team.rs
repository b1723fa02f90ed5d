use crate::reveal::{use_reveal, RevealPolicy};
use yew::prelude::*;

/// Per-card delay of the staggered entrance.
pub const STAGGER_MS: u32 = 150;

struct Member {
    name: &'static str,
    role: &'static str,
    image: &'static str,
}

const TEAM: [Member; 3] = [
    Member {
        name: "Semen Raskin",
        role: "Geschäftsführung",
        image: "https://images.unsplash.com/photo-1560250097-0b93528c311a?q=80&w=1000&auto=format&fit=crop",
    },
    Member {
        name: "Andrey Pagasyan",
        role: "Geschäftsführung",
        image: "https://images.unsplash.com/photo-1519085360753-af0119f7cbe7?q=80&w=1000&auto=format&fit=crop",
    },
    Member {
        name: "Alexander",
        role: "Geschäftsführung",
        image: "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?q=80&w=1000&auto=format&fit=crop",
    },
];

pub fn entrance_delay_ms(index: usize) -> u32 {
    index as u32 * STAGGER_MS
}

#[function_component]
pub fn Team() -> Html {
    let row = use_node_ref();
    let revealed = use_reveal(row.clone(), RevealPolicy::Once, 0.2);

    html! {
        <section id="team" class="team">
            <div class="team-container">
                <div class="team-header">
                    <h2>{"Unser "}<span>{"Team"}</span></h2>
                    <p>{"Die Geschäftsführung von A.S.S Security. Kompetenz und Verantwortung."}</p>
                    <div class="team-header-bar"></div>
                </div>

                <div ref={row} class={classes!("team-row", revealed.then_some("revealed"))}>
                    { for TEAM.iter().enumerate().map(|(index, member)| html! {
                        <div
                            class="team-card"
                            key={member.name}
                            style={format!("transition-delay: {}ms;", entrance_delay_ms(index))}
                        >
                            <div class="team-photo">
                                <img src={member.image} alt={member.name} loading="lazy" />
                                <div class="team-photo-shade"></div>
                                <div class="team-caption">
                                    <p>{member.role}</p>
                                    <h3>{member.name}</h3>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .team {
                    padding: 6rem 0;
                    overflow: hidden;
                    background: #fafafa;
                    font-family: 'Titillium Web', sans-serif;
                    transition: background-color 0.5s ease;
                }

                .dark .team {
                    background: #0a0a0a;
                }

                .team-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .team-header {
                    margin-bottom: 4rem;
                    text-align: center;
                }

                .team-header h2 {
                    margin: 0 0 1rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    color: #171717;
                }

                .dark .team-header h2 {
                    color: #fff;
                }

                .team-header h2 span {
                    color: #B59218;
                }

                .dark .team-header h2 span {
                    color: #D4AF37;
                }

                .team-header p {
                    max-width: 42rem;
                    margin: 0 auto;
                    color: #525252;
                }

                .dark .team-header p {
                    color: #a3a3a3;
                }

                .team-header-bar {
                    width: 4rem;
                    height: 4px;
                    margin: 1.5rem auto 0;
                    border-radius: 9999px;
                    background: #D4AF37;
                }

                .team-row {
                    display: flex;
                    gap: 2rem;
                    padding-bottom: 3rem;
                    overflow-x: auto;
                    scroll-snap-type: x mandatory;
                    scrollbar-width: none;
                    -ms-overflow-style: none;
                }

                .team-row::-webkit-scrollbar {
                    display: none;
                }

                .team-card {
                    position: relative;
                    flex-shrink: 0;
                    min-width: 280px;
                    width: 80vw;
                    scroll-snap-align: center;
                    opacity: 0;
                    transform: translateY(2.5rem);
                    transition: opacity 0.8s cubic-bezier(0.215, 0.61, 0.355, 1), transform 0.8s cubic-bezier(0.215, 0.61, 0.355, 1);
                }

                .team-row.revealed .team-card {
                    opacity: 1;
                    transform: translateY(0);
                }

                .team-photo {
                    position: relative;
                    height: 450px;
                    border: 1px solid #e5e5e5;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .dark .team-photo {
                    border-color: #262626;
                }

                .team-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                    filter: grayscale(1);
                    transition: transform 0.7s ease, filter 0.7s ease;
                }

                .team-card:hover .team-photo img {
                    transform: scale(1.05);
                    filter: grayscale(0);
                }

                .team-photo-shade {
                    position: absolute;
                    inset: 0;
                    background: linear-gradient(to top, rgba(0, 0, 0, 0.9), rgba(0, 0, 0, 0.2), transparent);
                    opacity: 0.8;
                    transition: opacity 0.3s ease;
                }

                .team-card:hover .team-photo-shade {
                    opacity: 1;
                }

                .team-caption {
                    position: absolute;
                    left: 0;
                    bottom: 0;
                    width: 100%;
                    padding: 2rem;
                    box-sizing: border-box;
                    transform: translateY(1rem);
                    transition: transform 0.5s ease;
                }

                .team-card:hover .team-caption {
                    transform: translateY(0);
                }

                .team-caption p {
                    margin: 0 0 0.25rem;
                    color: #D4AF37;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                }

                .team-caption h3 {
                    margin: 0 0 0.5rem;
                    color: #fff;
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                @media (min-width: 768px) {
                    .team-header h2 {
                        font-size: 3rem;
                    }

                    .team-row {
                        justify-content: center;
                        overflow: visible;
                    }

                    .team-card {
                        min-width: 0;
                        width: 24rem;
                        flex-shrink: 1;
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
    fn cards_enter_one_after_another() {
        assert_eq!(entrance_delay_ms(0), 0);
        assert_eq!(entrance_delay_ms(1), 150);
        assert_eq!(entrance_delay_ms(2), 300);
    }
}
