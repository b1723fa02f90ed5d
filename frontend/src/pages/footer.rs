use crate::components::icons::{Icon, SvgIcon};
use chrono::Datelike;
use yew::prelude::*;

const LEGAL: [&str; 3] = ["Impressum", "Datenschutz", "AGB"];
const SOCIAL: [(Icon, &str); 4] = [
    (Icon::Facebook, "Facebook"),
    (Icon::Twitter, "Twitter"),
    (Icon::Linkedin, "LinkedIn"),
    (Icon::Instagram, "Instagram"),
];

pub fn copyright(year: i32) -> String {
    format!("© {} A.S.S Security GmbH. All Rights Reserved.", year)
}

#[function_component]
pub fn Footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <div class="footer-badge">
                        <SvgIcon icon={Icon::ShieldCheck} />
                    </div>
                    <div class="footer-wordmark">
                        <span class="footer-name">{"A.S.S"}</span>
                        <span class="footer-tag">{"SECURITY"}</span>
                    </div>
                </div>

                <div class="footer-legal">
                    { for LEGAL.iter().map(|label| html! { <a key={*label} href="#">{*label}</a> }) }
                </div>

                <div class="footer-social">
                    { for SOCIAL.iter().map(|(icon, label)| html! {
                        <a key={*label} href="#" aria-label={*label}>
                            <SvgIcon icon={*icon} size={18} />
                        </a>
                    }) }
                </div>
            </div>
            <div class="footer-copyright">{copyright(year)}</div>

            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem;
                    background: #fff;
                    border-top: 1px solid #e5e5e5;
                    font-family: 'Host Grotesk', sans-serif;
                }

                .dark .site-footer {
                    background: #000;
                    border-color: #171717;
                }

                .footer-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: space-between;
                    gap: 2rem;
                }

                .footer-brand {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                }

                .footer-badge {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 4px;
                    background: #D4AF37;
                    color: #000;
                }

                .footer-wordmark {
                    display: flex;
                    flex-direction: column;
                }

                .footer-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    color: #171717;
                }

                .dark .footer-name {
                    color: #fff;
                }

                .footer-tag {
                    margin-top: 0.25rem;
                    font-size: 10px;
                    font-weight: 700;
                    letter-spacing: 0.3em;
                    line-height: 1;
                    color: #B59218;
                }

                .dark .footer-tag {
                    color: #D4AF37;
                }

                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-legal a {
                    font-size: 0.875rem;
                    font-weight: 500;
                    letter-spacing: 0.05em;
                    text-transform: uppercase;
                    text-decoration: none;
                    color: #737373;
                    transition: color 0.3s ease;
                }

                .dark .footer-legal a {
                    color: #a3a3a3;
                }

                .footer-legal a:hover {
                    color: #D4AF37;
                }

                .footer-social {
                    display: flex;
                    gap: 1rem;
                }

                .footer-social a {
                    width: 2.5rem;
                    height: 2.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border-radius: 9999px;
                    background: #f5f5f5;
                    color: #525252;
                    transition: all 0.3s ease;
                }

                .dark .footer-social a {
                    background: #171717;
                    color: #a3a3a3;
                }

                .footer-social a:hover,
                .dark .footer-social a:hover {
                    background: #D4AF37;
                    color: #000;
                }

                .footer-copyright {
                    margin-top: 3rem;
                    text-align: center;
                    font-size: 0.75rem;
                    color: #a3a3a3;
                }

                .dark .footer-copyright {
                    color: #525252;
                }

                @media (min-width: 768px) {
                    .footer-container {
                        flex-direction: row;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_carries_the_year() {
        assert_eq!(copyright(2026), "© 2026 A.S.S Security GmbH. All Rights Reserved.");
    }
}
