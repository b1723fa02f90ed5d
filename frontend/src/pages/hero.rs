use crate::components::icons::{Icon, SvgIcon};
use crate::scene::{BrowserHost, SceneHandle, SceneHost};
use crate::theme::use_theme_store;
use log::warn;
use std::rc::Rc;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

/// Headline drift and fade for a page scroll offset: 0..500 px moves the
/// copy down 100 px, 0..400 px fades it out.
pub fn hero_parallax(scroll: f64) -> (f64, f64) {
    let offset = (scroll / 500.0).clamp(0.0, 1.0) * 100.0;
    let opacity = 1.0 - (scroll / 400.0).clamp(0.0, 1.0);
    (offset, opacity)
}

#[function_component]
fn ShieldScene() -> Html {
    let container = use_node_ref();
    let store = use_theme_store();

    {
        let container = container.clone();
        use_effect_with_deps(
            move |container: &NodeRef| {
                let handle = container
                    .cast::<HtmlElement>()
                    .ok_or(crate::scene::SceneError::NoContainer)
                    .and_then(BrowserHost::new)
                    .and_then(|host| {
                        let host: Rc<dyn SceneHost> = Rc::new(host);
                        SceneHandle::create(host, &store)
                    });
                let handle = match handle {
                    Ok(handle) => Some(handle),
                    Err(e) => {
                        warn!("hero scene unavailable, rendering without it: {}", e);
                        None
                    }
                };
                move || drop(handle)
            },
            container,
        );
    }

    html! { <div class="hero-scene" ref={container}></div> }
}

#[function_component]
pub fn Hero() -> Html {
    let (_, scroll_y) = use_window_scroll();
    let (offset, opacity) = hero_parallax(scroll_y);

    let scroll_to_contact = Callback::from(|_: MouseEvent| {
        if let Some(contact) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("contact"))
        {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            contact.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-scene-layer">
                <ShieldScene />
            </div>

            <div class="hero-content">
                <div class="hero-copy">
                    <div
                        class="hero-copy-inner"
                        style={format!("transform: translateY({:.1}px); opacity: {:.3};", offset, opacity)}
                    >
                        <div class="hero-kicker">
                            <div class="hero-kicker-line"></div>
                            <span>{"Premium Security Services"}</span>
                        </div>

                        <div class="hero-headline">
                            <h1 class="line-1">{"ES IST IMMER"}</h1>
                            <h1 class="line-2">
                                {"SCHÖN, EIN "}
                                <span class="ace">{"ASS"}</span>
                            </h1>
                            <h1 class="line-3">{"IM ÄRMEL ZU HABEN."}</h1>
                        </div>

                        <div class="hero-subtext">
                            <p>
                                {"Verlassen Sie sich nicht auf Glück. Vertrauen Sie auf zertifizierte Sicherheitsexperten, die im Hintergrund agieren, damit Sie im Vordergrund glänzen können."}
                            </p>
                        </div>

                        <div class="hero-actions">
                            <button class="hero-cta" onclick={scroll_to_contact}>
                                <span>{"Jetzt Anfragen"}</span>
                                <SvgIcon icon={Icon::ArrowRight} size={20} class={classes!("hero-cta-arrow")} />
                            </button>
                        </div>
                    </div>
                </div>
                <div class="hero-spacer"></div>
            </div>

            <style>
                {r#"
                .hero {
                    position: relative;
                    width: 100%;
                    height: 100dvh;
                    min-height: 600px;
                    overflow: hidden;
                    background: #fafafa;
                    font-family: 'Host Grotesk', sans-serif;
                    transition: background-color 0.5s ease;
                }

                .dark .hero {
                    background: #050505;
                }

                .hero-scene-layer {
                    position: absolute;
                    inset: 0;
                    z-index: 10;
                }

                .hero-scene {
                    width: 100%;
                    height: 100%;
                }

                .hero-content {
                    position: relative;
                    z-index: 30;
                    height: 100%;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                    display: flex;
                    flex-direction: column;
                    pointer-events: none;
                }

                .hero-copy {
                    width: 100%;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    justify-content: flex-end;
                    padding-bottom: 6rem;
                }

                .hero-copy-inner {
                    pointer-events: auto;
                    will-change: transform, opacity;
                }

                .hero-kicker {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 1.5rem;
                    animation: hero-rise 0.6s ease-out 0.5s both;
                }

                .hero-kicker-line {
                    width: 4rem;
                    height: 2px;
                    background: #D4AF37;
                }

                .hero-kicker span {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.4em;
                    text-transform: uppercase;
                    color: #525252;
                }

                .dark .hero-kicker span {
                    color: #FDE047;
                }

                .hero-headline {
                    display: flex;
                    flex-direction: column;
                    line-height: 1;
                    margin-bottom: 2.5rem;
                }

                .hero-headline h1 {
                    margin: 0 0 0.25rem;
                    animation: hero-slide 0.8s ease-out both;
                }

                .hero-headline .line-1 {
                    font-size: 1.875rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    color: #171717;
                    animation-delay: 0.6s;
                }

                .hero-headline .line-2 {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: baseline;
                    column-gap: 1rem;
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #262626;
                    animation-delay: 0.7s;
                }

                .hero-headline .line-3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #a3a3a3;
                    animation-delay: 0.8s;
                }

                .dark .hero-headline .line-1 {
                    color: #fff;
                }

                .dark .hero-headline .line-2 {
                    color: #e5e5e5;
                }

                .dark .hero-headline .line-3 {
                    color: #d4d4d4;
                }

                .hero-headline .ace {
                    font-size: 2.25rem;
                    font-weight: 900;
                    background: linear-gradient(to right, #FDE047, #D4AF37, #B59218);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                    filter: drop-shadow(0 0 15px rgba(212, 175, 55, 0.3));
                }

                .hero-subtext {
                    position: relative;
                    max-width: 36rem;
                    padding-left: 2rem;
                    border-left: 4px solid #D4AF37;
                    animation: hero-rise 0.6s ease-out 0.8s both;
                }

                .hero-subtext p {
                    margin: 0;
                    font-size: 1rem;
                    font-weight: 500;
                    line-height: 1.6;
                    color: #171717;
                }

                .dark .hero-subtext p {
                    color: #fff;
                }

                .hero-actions {
                    margin-top: 2.5rem;
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }

                .hero-cta {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1.25rem 2.5rem;
                    border: 1px solid transparent;
                    border-radius: 2px;
                    background: #000;
                    color: #fff;
                    font-size: 0.875rem;
                    font-weight: 700;
                    letter-spacing: 0.25em;
                    text-transform: uppercase;
                    cursor: pointer;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    transition: all 0.3s ease;
                }

                .dark .hero-cta {
                    background: #D4AF37;
                    color: #000;
                }

                .hero-cta:hover {
                    background: #D4AF37;
                    color: #000;
                    transform: translateY(-2px) scale(1.02);
                }

                .dark .hero-cta:hover {
                    background: #fff;
                }

                .hero-cta:hover .hero-cta-arrow {
                    transform: translateX(0.5rem);
                }

                .hero-cta-arrow {
                    transition: transform 0.3s ease;
                }

                .hero-spacer {
                    display: none;
                }

                @keyframes hero-rise {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                @keyframes hero-slide {
                    from { opacity: 0; transform: translateX(-30px); }
                    to { opacity: 1; transform: translateX(0); }
                }

                @media (min-width: 768px) {
                    .hero-content {
                        flex-direction: row;
                    }

                    .hero-copy {
                        width: 50%;
                        justify-content: flex-start;
                        padding-top: 8rem;
                        padding-bottom: 0;
                    }

                    .hero-spacer {
                        display: block;
                        width: 50%;
                    }

                    .hero-headline .line-1 {
                        font-size: 3rem;
                    }

                    .hero-headline .line-2,
                    .hero-headline .line-3 {
                        font-size: 2.25rem;
                    }

                    .hero-headline .ace {
                        font-size: 3.75rem;
                    }

                    .hero-subtext p {
                        font-size: 1.125rem;
                    }
                }

                @media (min-width: 1024px) {
                    .hero-copy {
                        justify-content: center;
                        padding-top: 0;
                    }

                    .hero-headline .line-1 {
                        font-size: 3.75rem;
                    }

                    .hero-headline .line-2,
                    .hero-headline .line-3 {
                        font-size: 3rem;
                    }

                    .hero-headline .ace {
                        font-size: 4.5rem;
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
    fn parallax_starts_at_rest() {
        assert_eq!(hero_parallax(0.0), (0.0, 1.0));
    }

    #[test]
    fn parallax_is_clamped() {
        assert_eq!(hero_parallax(200.0), (40.0, 0.5));
        assert_eq!(hero_parallax(400.0), (80.0, 0.0));
        assert_eq!(hero_parallax(5_000.0), (100.0, 0.0));
        assert_eq!(hero_parallax(-50.0), (0.0, 1.0));
    }
}
