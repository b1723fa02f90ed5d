use crate::config;
use crate::lifecycle::{BrowserScheduler, SharedScheduler};
use crate::preloader::{LoadProgress, PreloaderEvent, PreloaderRun};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PreloaderProps {
    /// Counter reached 100 and the curtains start to open.
    pub on_reveal: Callback<()>,
    /// Curtains are gone; the content may mount.
    pub on_complete: Callback<()>,
}

#[function_component]
pub fn Preloader(props: &PreloaderProps) -> Html {
    let progress = use_state(LoadProgress::default);
    let revealing = use_state(|| false);

    {
        let progress = progress.clone();
        let revealing = revealing.clone();
        let on_reveal = props.on_reveal.clone();
        let on_complete = props.on_complete.clone();
        use_effect_with_deps(
            move |_| {
                let scheduler: SharedScheduler = Rc::new(BrowserScheduler);
                let run = PreloaderRun::start(
                    scheduler,
                    move |event| match event {
                        PreloaderEvent::Progress(value) => progress.set(value),
                        PreloaderEvent::Revealing => {
                            revealing.set(true);
                            on_reveal.emit(());
                        }
                    },
                    move || on_complete.emit(()),
                );
                move || drop(run)
            },
            (),
        );
    }

    let value = progress.value();
    let curtain_transition = format!(
        "transition: transform {}ms cubic-bezier(0.76, 0, 0.24, 1) {}ms;",
        config::CURTAIN_DURATION_MS,
        config::CURTAIN_DELAY_MS
    );
    let counter_transition = format!(
        "transition: opacity {0}ms ease, transform {0}ms ease;",
        config::COUNTER_FADE_MS
    );

    html! {
        <div class={classes!("preloader", (*revealing).then_some("revealing"))} aria-busy={(!*revealing).to_string()}>
            <div class="curtain curtain-left" style={curtain_transition.clone()}></div>
            <div class="curtain curtain-right" style={curtain_transition}></div>

            <div class="preloader-counter" style={counter_transition}>
                <div class="preloader-value">{format!("{}%", value)}</div>
                <div class="preloader-track">
                    <div class="preloader-bar" style={format!("width: {}%;", value)}></div>
                </div>
                <h1 class="preloader-caption">{"A.S.S Security loading"}</h1>
            </div>

            <style>
                {r#"
                .preloader {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    display: flex;
                    pointer-events: none;
                }

                .curtain {
                    width: 50%;
                    height: 100%;
                    background: #0a0a0a;
                    transform: translateX(0);
                }

                .curtain-left {
                    border-right: 1px solid rgba(212, 175, 55, 0.2);
                }

                .curtain-right {
                    border-left: 1px solid rgba(212, 175, 55, 0.2);
                }

                .preloader.revealing .curtain-left {
                    transform: translateX(-100%);
                }

                .preloader.revealing .curtain-right {
                    transform: translateX(100%);
                }

                .preloader-counter {
                    position: absolute;
                    inset: 0;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    opacity: 1;
                    transform: scale(1);
                }

                .preloader.revealing .preloader-counter {
                    opacity: 0;
                    transform: scale(0.8);
                }

                .preloader-value {
                    font-family: 'Host Grotesk', sans-serif;
                    font-size: 6rem;
                    font-weight: 700;
                    line-height: 1;
                    color: #D4AF37;
                    font-variant-numeric: tabular-nums;
                }

                .preloader-track {
                    width: 16rem;
                    height: 2px;
                    margin-top: 1rem;
                    background: #262626;
                    border-radius: 9999px;
                    overflow: hidden;
                }

                .preloader-bar {
                    height: 100%;
                    background: #D4AF37;
                }

                .preloader-caption {
                    margin-top: 1rem;
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.5em;
                    text-transform: uppercase;
                }

                @media (min-width: 768px) {
                    .preloader-value {
                        font-size: 8rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
