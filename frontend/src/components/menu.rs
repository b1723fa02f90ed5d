use crate::components::icons::{Icon, SvgIcon};
use crate::components::theme_switch::ThemeSwitch;
use crate::config;
use crate::lifecycle::{BrowserScheduler, Registration, Scheduler};
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};
use yew::prelude::*;
use yew_hooks::prelude::*;

const GLASS_AFTER_PX: f64 = 50.0;
const HIDE_AFTER_PROGRESS: f64 = 0.05;
const SHUTTERS: usize = 5;

pub struct NavLink {
    pub name: &'static str,
    pub target: &'static str,
    pub label: &'static str,
}

pub const LINKS: [NavLink; 5] = [
    NavLink { name: "Home", target: "home", label: "Startseite" },
    NavLink { name: "Services", target: "services", label: "Dienstleistungen" },
    NavLink { name: "FAQ", target: "faq", label: "Fragen & Antworten" },
    NavLink { name: "Über Uns", target: "about", label: "Unsere Firma" },
    NavLink { name: "Kontakt", target: "contact", label: "Anfrage" },
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    /// Frosted background behind the bar.
    pub glass: bool,
    /// Slid out of view above the page.
    pub hidden: bool,
}

impl NavState {
    /// Next bar state for a scroll update. `max_scroll` is document height
    /// minus viewport height. Only wide viewports ever hide the bar.
    pub fn on_scroll(
        self,
        previous: f64,
        scroll: f64,
        max_scroll: f64,
        viewport_width: f64,
    ) -> Self {
        let progress = if max_scroll > 0.0 { scroll / max_scroll } else { 0.0 };
        let hidden = if viewport_width < config::BREAKPOINT_WIDE {
            false
        } else if scroll < previous || progress <= 0.0 {
            false
        } else if scroll > previous && progress > HIDE_AFTER_PROGRESS {
            true
        } else {
            self.hidden
        };
        Self {
            glass: scroll > GLASS_AFTER_PX,
            hidden,
        }
    }
}

/// Delay before scrolling to a link target; the overlay needs time to close.
pub fn scroll_delay_ms(overlay_open: bool) -> u32 {
    if overlay_open {
        config::MENU_SCROLL_DELAY_MS
    } else {
        0
    }
}

fn scroll_to_section(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        warn!("no section with id {}", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

fn lock_body_scroll(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        warn!("failed to toggle body scroll lock: {:?}", e);
    }
}

fn max_scroll() -> f64 {
    let Some(window) = web_sys::window() else { return 0.0 };
    let viewport = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let document = window
        .document()
        .and_then(|d| d.document_element())
        .map(|e| f64::from(e.scroll_height()))
        .unwrap_or(0.0);
    (document - viewport).max(0.0)
}

#[function_component]
pub fn Menu() -> Html {
    let is_open = use_state(|| false);
    let nav = use_state(NavState::default);
    let previous_scroll = use_mut_ref(|| 0.0_f64);
    let pending_scroll = use_mut_ref(|| None::<Registration>);
    let (_, scroll_y) = use_window_scroll();
    let (viewport_width, _) = use_window_size();

    {
        let nav = nav.clone();
        let previous_scroll = previous_scroll.clone();
        use_effect_with_deps(
            move |(scroll, width): &(i64, i64)| {
                let scroll = *scroll as f64;
                let previous = *previous_scroll.borrow();
                let next = nav.on_scroll(previous, scroll, max_scroll(), *width as f64);
                if next != *nav {
                    nav.set(next);
                }
                *previous_scroll.borrow_mut() = scroll;
                || ()
            },
            (scroll_y as i64, viewport_width as i64),
        );
    }

    {
        use_effect_with_deps(
            move |open: &bool| {
                lock_body_scroll(*open);
                || lock_body_scroll(false)
            },
            *is_open,
        );
    }

    {
        // a pending delayed scroll must not outlive the menu
        let pending_scroll = pending_scroll.clone();
        use_effect_with_deps(
            move |_| move || drop(pending_scroll.borrow_mut().take()),
            (),
        );
    }

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(!*is_open))
    };

    let navigate = |target: &'static str| {
        let is_open = is_open.clone();
        let pending_scroll = pending_scroll.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let was_open = *is_open;
            if was_open {
                is_open.set(false);
            }
            let delay = scroll_delay_ms(was_open);
            debug!("navigating to #{} in {}ms", target, delay);
            if delay == 0 {
                scroll_to_section(target);
            } else {
                let timer =
                    BrowserScheduler.timeout(delay, Box::new(move || scroll_to_section(target)));
                *pending_scroll.borrow_mut() = Some(timer);
            }
        })
    };

    html! {
        <>
            <nav class={classes!(
                "site-nav",
                nav.glass.then_some("glass"),
                nav.hidden.then_some("nav-hidden")
            )}>
                <div class="nav-glass"></div>
                <div class="nav-inner">
                    <a href="#home" class="nav-logo" onclick={navigate("home")}>
                        <div class="nav-logo-mark">
                            <SvgIcon icon={Icon::ShieldCheck} size={28} />
                        </div>
                        <div class="nav-logo-text">
                            <span class="brand">{"A.S.S"}</span>
                            <span class="brand-sub">{"SECURITY"}</span>
                        </div>
                    </a>

                    <div class="nav-desktop">
                        { for LINKS.iter().map(|link| html! {
                            <a href={format!("#{}", link.target)} class="flip-link" onclick={navigate(link.target)}>
                                <span class="flip-front">{link.name}</span>
                                <span class="flip-back">{link.name}</span>
                            </a>
                        }) }
                        <div class="nav-divider"></div>
                        <ThemeSwitch />
                    </div>

                    <div class="nav-compact">
                        <div class="nav-compact-switch">
                            <ThemeSwitch />
                        </div>
                        <button class="nav-toggle" onclick={toggle} aria-label="Menu" aria-expanded={(*is_open).to_string()}>
                            <SvgIcon icon={if *is_open { Icon::Close } else { Icon::Menu }} />
                        </button>
                    </div>
                </div>
            </nav>

            <div class={classes!("shutters", (*is_open).then_some("open"))}>
                { for (0..SHUTTERS).map(|i| {
                    // close in reverse so the last shutter to drop is the first to lift
                    let step = if *is_open { i } else { SHUTTERS - 1 - i };
                    let delay = step as f64 * 0.04;
                    html! {
                        <div class="shutter" style={format!("transition-delay: {:.2}s;", delay)}>
                            <div class="shutter-line"></div>
                        </div>
                    }
                }) }
            </div>

            <div class={classes!("menu-overlay", (*is_open).then_some("open"))}>
                <div class="menu-links">
                    { for LINKS.iter().enumerate().map(|(i, link)| html! {
                        <a
                            href={format!("#{}", link.target)}
                            class="menu-link"
                            style={format!("transition-delay: {:.2}s;", if *is_open { 0.4 + i as f64 * 0.08 } else { 0.0 })}
                            onclick={navigate(link.target)}
                        >
                            <span class="menu-stroke-text">{link.name}</span>
                            <span class="menu-link-label">{link.label}</span>
                        </a>
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .site-nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    z-index: 90;
                    font-family: 'Host Grotesk', sans-serif;
                    transition: transform 0.4s cubic-bezier(0.33, 1, 0.68, 1);
                    animation: nav-enter 1s cubic-bezier(0.33, 1, 0.68, 1) 1s both;
                }

                @keyframes nav-enter {
                    from { transform: translateY(-100px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }

                .site-nav.nav-hidden {
                    transform: translateY(-100%);
                }

                .nav-glass {
                    position: absolute;
                    inset: 0;
                    opacity: 0;
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(24px);
                    border-bottom: 1px solid rgba(229, 229, 229, 0.5);
                    transition: opacity 0.3s ease;
                }

                .dark .nav-glass {
                    background: rgba(5, 5, 5, 0.9);
                    border-bottom-color: rgba(38, 38, 38, 0.5);
                }

                .site-nav.glass .nav-glass {
                    opacity: 1;
                }

                .site-nav.glass {
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .nav-inner {
                    position: relative;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    padding: 1rem 1.5rem;
                }

                @media (min-width: 768px) {
                    .nav-inner {
                        padding: 1.25rem 3rem;
                    }
                }

                .nav-logo {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    z-index: 50;
                    text-decoration: none;
                }

                .nav-logo-mark {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    background: #fff;
                    color: #B59218;
                    transition: transform 0.5s ease;
                }

                .nav-logo:hover .nav-logo-mark {
                    transform: rotate(12deg);
                }

                .nav-logo-text {
                    display: flex;
                    flex-direction: column;
                }

                .brand {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    color: #000;
                }

                .dark .brand {
                    color: #fff;
                }

                .brand-sub {
                    margin-top: 0.25rem;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    line-height: 1;
                    color: #B59218;
                }

                .dark .brand-sub {
                    color: #D4AF37;
                }

                .nav-desktop {
                    display: none;
                    align-items: center;
                    gap: 2rem;
                    z-index: 50;
                }

                .nav-compact {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    z-index: 50;
                }

                @media (min-width: 1024px) {
                    .nav-desktop {
                        display: flex;
                    }

                    .nav-compact {
                        display: none;
                    }
                }

                .flip-link {
                    position: relative;
                    display: block;
                    overflow: hidden;
                    padding: 0.5rem;
                    white-space: nowrap;
                    font-size: 0.875rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: 0.1em;
                    text-decoration: none;
                }

                .flip-front,
                .flip-back {
                    display: block;
                    transition: transform 0.3s cubic-bezier(0.33, 1, 0.68, 1);
                }

                .flip-front {
                    color: #000;
                }

                .dark .flip-front {
                    color: #d4d4d4;
                }

                .flip-back {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #B59218;
                    transform: translateY(100%);
                }

                .dark .flip-back {
                    color: #FDE047;
                }

                .flip-link:hover .flip-front {
                    transform: translateY(-100%);
                }

                .flip-link:hover .flip-back {
                    transform: translateY(0);
                }

                .nav-divider {
                    width: 1px;
                    height: 1.5rem;
                    margin: 0 0.5rem;
                    background: #d4d4d4;
                }

                .dark .nav-divider {
                    background: #262626;
                }

                .nav-compact-switch {
                    padding: 2px;
                    border-radius: 9999px;
                    border: 1px solid #e5e5e5;
                    background: rgba(255, 255, 255, 0.5);
                    backdrop-filter: blur(4px);
                }

                .dark .nav-compact-switch {
                    border-color: #262626;
                    background: rgba(0, 0, 0, 0.5);
                }

                .nav-toggle {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    border: 1px solid #e5e5e5;
                    background: #f5f5f5;
                    color: #000;
                    cursor: pointer;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: transform 0.2s ease;
                }

                .dark .nav-toggle {
                    border-color: #404040;
                    background: #262626;
                    color: #fff;
                }

                .nav-toggle:hover {
                    transform: scale(1.05);
                }

                .shutters {
                    position: fixed;
                    inset: 0;
                    z-index: 80;
                    display: flex;
                    pointer-events: none;
                }

                .shutter {
                    position: relative;
                    width: 20%;
                    height: 0;
                    background: #fafafa;
                    border-right: 1px solid #e5e5e5;
                    transition-property: height;
                    transition-duration: 0.6s;
                    transition-timing-function: cubic-bezier(0.77, 0, 0.175, 1);
                }

                .dark .shutter {
                    background: #0a0a0a;
                    border-right-color: #171717;
                }

                .shutters.open .shutter {
                    height: 100%;
                }

                .shutter-line {
                    position: absolute;
                    bottom: 2.5rem;
                    left: 50%;
                    width: 1px;
                    height: 6rem;
                    background: #d4d4d4;
                }

                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 85;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    pointer-events: none;
                }

                .menu-overlay.open {
                    pointer-events: auto;
                }

                .menu-links {
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    gap: 1.5rem;
                }

                .menu-link {
                    position: relative;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    text-decoration: none;
                    opacity: 0;
                    transform: translateY(-30px);
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }

                .menu-overlay.open .menu-link {
                    opacity: 1;
                    transform: translateY(0) skewY(0);
                    transition: opacity 0.6s ease, transform 0.6s cubic-bezier(0.34, 1.56, 0.64, 1);
                }

                .menu-stroke-text {
                    font-size: 2.25rem;
                    font-weight: 700;
                    text-transform: uppercase;
                    letter-spacing: -0.05em;
                    font-family: 'Host Grotesk', sans-serif;
                    color: transparent;
                    -webkit-text-stroke: 1px rgba(23, 23, 23, 0.8);
                    transition: all 0.3s ease;
                }

                .dark .menu-stroke-text {
                    -webkit-text-stroke: 1px rgba(255, 255, 255, 0.8);
                }

                .menu-stroke-text:hover {
                    color: #D4AF37;
                    -webkit-text-stroke: 0px;
                    transform: scale(1.05);
                }

                @media (min-width: 768px) {
                    .menu-links {
                        gap: 2rem;
                    }

                    .menu-stroke-text {
                        font-size: 3.75rem;
                    }
                }

                .menu-link-label {
                    position: absolute;
                    bottom: -1rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.5em;
                    color: #B59218;
                    opacity: 0;
                    transition: opacity 0.3s ease;
                }

                .menu-link:hover .menu-link-label {
                    opacity: 1;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIDE: f64 = 1280.0;
    const MAX: f64 = 10_000.0;

    #[test]
    fn glass_appears_past_fifty_pixels() {
        let state = NavState::default();
        assert!(!state.on_scroll(0.0, 50.0, MAX, WIDE).glass);
        assert!(state.on_scroll(0.0, 51.0, MAX, WIDE).glass);
        assert!(!state.on_scroll(100.0, 10.0, MAX, WIDE).glass);
    }

    #[test]
    fn wide_bar_hides_scrolling_down_past_five_percent() {
        let state = NavState::default();
        // 4% down: stays
        let state = state.on_scroll(0.0, 400.0, MAX, WIDE);
        assert!(!state.hidden);
        let state = state.on_scroll(400.0, 600.0, MAX, WIDE);
        assert!(state.hidden);
        // any upward movement brings it back
        let state = state.on_scroll(600.0, 590.0, MAX, WIDE);
        assert!(!state.hidden);
    }

    #[test]
    fn top_of_page_always_shows_the_bar() {
        let hidden = NavState { glass: true, hidden: true };
        assert!(!hidden.on_scroll(0.0, 0.0, MAX, WIDE).hidden);
    }

    #[test]
    fn narrow_and_medium_never_hide() {
        for width in [375.0, 767.0, 1023.0] {
            let state = NavState::default().on_scroll(0.0, 5_000.0, MAX, width);
            assert!(!state.hidden, "width {width}");
            assert!(state.glass);
        }
    }

    #[test]
    fn unchanged_scroll_keeps_visibility() {
        let hidden = NavState { glass: true, hidden: true };
        assert!(hidden.on_scroll(800.0, 800.0, MAX, WIDE).hidden);
    }

    #[test]
    fn link_scroll_waits_only_when_overlay_was_open() {
        assert_eq!(scroll_delay_ms(true), config::MENU_SCROLL_DELAY_MS);
        assert_eq!(scroll_delay_ms(false), 0);
    }

    #[test]
    fn every_link_targets_a_section_id() {
        for link in &LINKS {
            assert!(!link.target.starts_with('#'));
            assert!(!link.target.is_empty());
        }
    }
}
