use log::{info, warn};
use std::rc::Rc;
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

mod config;
mod consent;
mod lifecycle;
mod preloader;
mod reveal;
mod scene;
mod storage;
mod theme;
mod components {
    pub mod cookie_consent;
    pub mod icons;
    pub mod menu;
    pub mod preloader;
    pub mod theme_switch;
}
mod pages {
    pub mod about;
    pub mod contact;
    pub mod faq;
    pub mod footer;
    pub mod gallery;
    pub mod hero;
    pub mod services;
    pub mod stats_chart;
    pub mod team;
    pub mod testimonials;
    pub mod timeline;
}

use components::{cookie_consent::CookieConsent, menu::Menu, preloader::Preloader};
use pages::{
    about::About,
    contact::ContactSection,
    faq::Faq,
    footer::Footer,
    gallery::Gallery,
    hero::Hero,
    services::Services,
    stats_chart::StatsChart,
    team::Team,
    testimonials::Testimonials,
    timeline::Timeline,
};
use preloader::AppPhase;
use theme::{DetachedRoot, DocumentRoot, PresentationRoot, ThemeContext, ThemeStore};

pub enum PhaseEvent {
    ProgressComplete,
    ExitFinished,
}

impl Reducible for AppPhase {
    type Action = PhaseEvent;

    fn reduce(self: Rc<Self>, action: PhaseEvent) -> Rc<Self> {
        let next = match action {
            PhaseEvent::ProgressComplete => self.on_progress_complete(),
            PhaseEvent::ExitFinished => self.on_exit_finished(),
        };
        if next == *self {
            return self;
        }
        info!("phase {:?} -> {:?}", *self, next);
        Rc::new(next)
    }
}

#[function_component]
fn GlobalStyles() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
                background: #fafafa;
                color-scheme: light;
            }

            html.dark {
                background: #0a0a0a;
                color-scheme: dark;
            }

            body {
                margin: 0;
                min-height: 100vh;
                overflow-x: hidden;
                background: inherit;
                color: #171717;
                font-family: 'Host Grotesk', 'Titillium Web', sans-serif;
                -webkit-font-smoothing: antialiased;
                transition: background-color 0.5s ease, color 0.5s ease;
            }

            html.dark body {
                color: #fff;
            }

            ::selection {
                background: #D4AF37;
                color: #000;
            }

            ::-webkit-scrollbar {
                width: 8px;
            }

            ::-webkit-scrollbar-track {
                background: #f5f5f5;
            }

            html.dark ::-webkit-scrollbar-track {
                background: #0a0a0a;
            }

            ::-webkit-scrollbar-thumb {
                background: #D4AF37;
                border-radius: 4px;
            }

            ::-webkit-scrollbar-thumb:hover {
                background: #B59218;
            }
        "#)} />
    }
}

#[function_component]
fn App() -> Html {
    let phase = use_reducer(|| AppPhase::Loading);
    let theme = use_memo(
        |_| {
            let root: Box<dyn PresentationRoot> = match DocumentRoot::current() {
                Some(root) => Box::new(root),
                None => {
                    warn!("no document root; theme changes will not reach the page");
                    Box::new(DetachedRoot::default())
                }
            };
            ThemeContext(ThemeStore::new(root, storage::browser_store()))
        },
        (),
    );

    let on_reveal = {
        let dispatcher = phase.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PhaseEvent::ProgressComplete))
    };
    let on_complete = {
        let dispatcher = phase.dispatcher();
        Callback::from(move |_: ()| dispatcher.dispatch(PhaseEvent::ExitFinished))
    };

    let mounted = phase.content_mounted();

    html! {
        <ContextProvider<ThemeContext> context={(*theme).clone()}>
            <GlobalStyles />
            <div class="app-shell">
                if !mounted {
                    <Preloader {on_reveal} {on_complete} />
                }

                if mounted {
                    <main
                        class="app-main"
                        style={format!("animation-duration: {}ms;", config::CONTENT_FADE_MS)}
                    >
                        <Menu />
                        <Hero />
                        <Gallery />
                        <Services />
                        <About />
                        <Timeline />
                        <Team />
                        <Testimonials />
                        <StatsChart />
                        <Faq />
                        <ContactSection />
                        <Footer />
                        <CookieConsent />
                    </main>
                }
            </div>

            <style>
                {r#"
                .app-shell {
                    min-height: 100vh;
                    overflow-x: hidden;
                }

                .app-main {
                    overflow-x: hidden;
                    animation-name: app-fade-in;
                    animation-timing-function: ease;
                    animation-fill-mode: both;
                }

                @keyframes app-fade-in {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<ThemeContext>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        web_sys::console::error_1(&format!("logger init failed: {}", e).into());
    }

    info!("Starting A.S.S Security site");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(phase: AppPhase, events: Vec<PhaseEvent>) -> AppPhase {
        events
            .into_iter()
            .fold(Rc::new(phase), |state, event| state.reduce(event))
            .as_ref()
            .to_owned()
    }

    #[test]
    fn phases_advance_in_order() {
        let ready = apply(
            AppPhase::Loading,
            vec![PhaseEvent::ProgressComplete, PhaseEvent::ExitFinished],
        );
        assert_eq!(ready, AppPhase::Ready);
        assert!(ready.content_mounted());
    }

    #[test]
    fn early_exit_is_ignored() {
        let still_loading = apply(AppPhase::Loading, vec![PhaseEvent::ExitFinished]);
        assert_eq!(still_loading, AppPhase::Loading);
    }

    #[test]
    fn unchanged_phase_keeps_the_same_state() {
        let state = Rc::new(AppPhase::Ready);
        let next = state.clone().reduce(PhaseEvent::ProgressComplete);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
