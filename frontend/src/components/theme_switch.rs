use crate::components::icons::{Icon, SvgIcon};
use crate::theme::{use_theme, Theme};
use yew::prelude::*;

#[function_component]
pub fn ThemeSwitch() -> Html {
    let (theme, toggle) = use_theme();
    let onclick = Callback::from(move |_: MouseEvent| toggle.emit(()));

    let (icon, icon_class) = match theme {
        Theme::Dark => (Icon::Moon, "theme-icon moon"),
        Theme::Light => (Icon::Sun, "theme-icon sun"),
    };

    html! {
        <button class="theme-switch" {onclick} aria-label="Toggle Theme">
            <span class={classes!("theme-icon-wrap", theme.as_str())}>
                <SvgIcon {icon} size={18} class={classes!(icon_class)} />
            </span>
            <style>
                {r#"
                .theme-switch {
                    position: relative;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    border: 1px solid #404040;
                    background: #f5f5f5;
                    cursor: pointer;
                    transition: border-color 0.3s ease;
                }

                .dark .theme-switch {
                    background: #171717;
                }

                .theme-switch:hover {
                    border-color: #D4AF37;
                }

                .theme-icon-wrap {
                    display: flex;
                    transition: transform 0.4s cubic-bezier(0.34, 1.56, 0.64, 1);
                }

                .theme-icon-wrap.light {
                    transform: rotate(180deg);
                }

                .theme-icon.moon {
                    color: #D4AF37;
                    fill: #D4AF37;
                }

                .theme-icon.sun {
                    color: #d97706;
                    fill: #d97706;
                }
                "#}
            </style>
        </button>
    }
}
