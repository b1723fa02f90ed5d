use crate::components::icons::{Icon, SvgIcon};
use crate::consent::{self, ConsentDecision};
use crate::lifecycle::{BrowserScheduler, SharedScheduler};
use crate::storage::{browser_store, SharedStore};
use std::rc::Rc;
use yew::prelude::*;

#[function_component]
pub fn CookieConsent() -> Html {
    let storage = use_memo(|_| browser_store(), ());
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        let storage: SharedStore = (*storage).clone();
        use_effect_with_deps(
            move |_| {
                let scheduler: SharedScheduler = Rc::new(BrowserScheduler);
                let timer = consent::schedule_banner(&storage, &scheduler, move || {
                    visible.set(true)
                });
                move || drop(timer)
            },
            (),
        );
    }

    let decide = |decision: ConsentDecision| {
        let visible = visible.clone();
        let storage: SharedStore = (*storage).clone();
        Callback::from(move |_: MouseEvent| {
            consent::record_decision(&storage, decision);
            visible.set(false);
        })
    };

    html! {
        <div class={classes!("cookie-consent", (*visible).then_some("visible"))} role="dialog" aria-hidden={(!*visible).to_string()}>
            <div class="cookie-card">
                <div class="cookie-accent"></div>
                <div class="cookie-watermark">
                    <SvgIcon icon={Icon::Shield} size={120} />
                </div>
                <div class="cookie-body">
                    <div class="cookie-badge">
                        <SvgIcon icon={Icon::Cookie} size={24} />
                    </div>
                    <div>
                        <h4>{"Datenschutz & Sicherheit"}</h4>
                        <p>
                            {"Wir nutzen Cookies, um Ihre Erfahrung auf unserer High-Tech Sicherheitsplattform zu optimieren. Keine Sorge, Ihre Daten sind bei uns sicher wie in einem Tresor."}
                        </p>
                        <div class="cookie-actions">
                            <button class="cookie-accept" onclick={decide(ConsentDecision::Accepted)}>
                                {"Akzeptieren"}
                            </button>
                            <button class="cookie-decline" onclick={decide(ConsentDecision::Declined)}>
                                {"Ablehnen"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .cookie-consent {
                    position: fixed;
                    bottom: 1.5rem;
                    left: 1.5rem;
                    right: 1.5rem;
                    z-index: 200;
                    font-family: 'Host Grotesk', sans-serif;
                    transform: translateY(100px);
                    opacity: 0;
                    pointer-events: none;
                    transition: transform 0.5s cubic-bezier(0.34, 1.3, 0.64, 1), opacity 0.5s ease;
                }

                .cookie-consent.visible {
                    transform: translateY(0);
                    opacity: 1;
                    pointer-events: auto;
                }

                @media (min-width: 768px) {
                    .cookie-consent {
                        left: auto;
                        max-width: 28rem;
                    }
                }

                .cookie-card {
                    position: relative;
                    overflow: hidden;
                    padding: 1.5rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.9);
                    border: 1px solid #e5e5e5;
                    backdrop-filter: blur(24px);
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .dark .cookie-card {
                    background: rgba(10, 10, 10, 0.9);
                    border-color: rgba(212, 175, 55, 0.2);
                }

                .cookie-accent {
                    position: absolute;
                    top: 0;
                    left: 0;
                    width: 100%;
                    height: 4px;
                    background: linear-gradient(to right, #FDE047, #B59218);
                }

                .cookie-watermark {
                    position: absolute;
                    right: -2.5rem;
                    bottom: -2.5rem;
                    color: #f5f5f5;
                    pointer-events: none;
                }

                .dark .cookie-watermark {
                    color: rgba(23, 23, 23, 0.5);
                }

                .cookie-body {
                    position: relative;
                    display: flex;
                    gap: 1rem;
                    align-items: flex-start;
                }

                .cookie-badge {
                    flex-shrink: 0;
                    padding: 0.75rem;
                    border-radius: 9999px;
                    color: #B59218;
                    background: #fef9c3;
                }

                .cookie-body h4 {
                    margin: 0 0 0.5rem;
                    font-size: 1.125rem;
                    font-weight: 700;
                }

                .cookie-body p {
                    margin: 0 0 1.5rem;
                    font-size: 0.875rem;
                    line-height: 1.6;
                    color: #525252;
                }

                .dark .cookie-body p {
                    color: #a3a3a3;
                }

                .cookie-actions {
                    display: flex;
                    gap: 0.75rem;
                }

                .cookie-actions button {
                    flex: 1;
                    cursor: pointer;
                    padding: 0.625rem 1rem;
                    border: none;
                    border-radius: 0.5rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    transition: background 0.2s ease;
                }

                .cookie-accept {
                    background: #D4AF37;
                    color: #000;
                    box-shadow: 0 0 15px rgba(212, 175, 55, 0.3);
                }

                .cookie-accept:hover {
                    background: #FDE047;
                }

                .cookie-decline {
                    background: #f5f5f5;
                    color: #171717;
                }

                .dark .cookie-decline {
                    background: #262626;
                    color: #fff;
                }
                "#}
            </style>
        </div>
    }
}
