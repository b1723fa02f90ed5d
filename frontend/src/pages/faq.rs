use crate::components::icons::{Icon, SvgIcon};
use web_sys::MouseEvent;
use yew::prelude::*;

const FAQS: [(&str, &str); 5] = [
    (
        "Bieten Sie Sicherheitsdienste rund um die Uhr an?",
        "Ja, unsere Operationszentrale und unsere Einsatzteams sind 24/7, 365 Tage im Jahr für Sie erreichbar und einsatzbereit. Ob Nachtschichten, Feiertage oder spontane Einsätze, wir sind da.",
    ),
    (
        "In welchen Gebieten ist A.S.S Security tätig?",
        "Unser Hauptsitz ist in Dresden. Wir decken den gesamten sächsischen Raum ab, einschließlich Leipzig und Chemnitz. Für Großprojekte sind wir auch bundesweit im Einsatz.",
    ),
    (
        "Sind Ihre Mitarbeiter zertifiziert?",
        "Absolut. Alle unsere Sicherheitsmitarbeiter verfügen mindestens über die Unterrichtung nach §34a GewO. Unsere Führungskräfte und spezialisierten Teams besitzen weiterführende Qualifikationen wie die Sachkundeprüfung, Waffensachkunde oder Meistertitel für Schutz und Sicherheit.",
    ),
    (
        "Wie schnell können Sie auf Anfragen reagieren?",
        "Für Notfälle garantieren wir eine Reaktionszeit von unter 60 Minuten in unserem Kerngebiet. Reguläre Angebote erstellen wir in der Regel innerhalb von 24 Stunden nach der ersten Bedarfsanalyse.",
    ),
    (
        "Bieten Sie auch technische Überwachung an?",
        "Ja, wir setzen auf einen hybriden Ansatz. Neben physischer Präsenz bieten wir modernste Videoüberwachung, Drohnen-Patrouillen und Einbruchmeldeanlagen, die direkt auf unsere Leitstelle aufgeschaltet sind.",
    ),
];

/// Accordion rule: clicking the open item closes it, anything else opens
/// the clicked item and closes the rest.
pub fn toggle(open: Option<usize>, clicked: usize) -> Option<usize> {
    if open == Some(clicked) {
        None
    } else {
        Some(clicked)
    }
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
    is_open: bool,
    on_toggle: Callback<()>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let onclick = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(());
        })
    };

    html! {
        <div class={classes!("faq-item", if props.is_open { "open" } else { "" })}>
            <button class="faq-question" {onclick} aria-expanded={props.is_open.to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">
                    <SvgIcon icon={if props.is_open { Icon::Minus } else { Icon::Plus }} size={20} />
                </span>
            </button>
            <div class="faq-answer">
                <div class="faq-answer-inner">
                    <p>{props.answer}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    let open = use_state(|| None::<usize>);

    html! {
        <section id="faq" class="faq">
            <div class="faq-decoration">
                <SvgIcon icon={Icon::HelpCircle} size={400} />
            </div>

            <div class="faq-container">
                <div class="faq-header">
                    <h2>{"HÄUFIGE "}<span>{"FRAGEN"}</span></h2>
                    <p>{"Wichtige Informationen zu unseren Dienstleistungen auf einen Blick."}</p>
                    <div class="faq-header-bar"></div>
                </div>

                <div class="faq-list">
                    { for FAQS.iter().enumerate().map(|(idx, (question, answer))| {
                        let on_toggle = {
                            let open = open.clone();
                            Callback::from(move |_: ()| open.set(toggle(*open, idx)))
                        };
                        html! {
                            <FaqItem
                                key={idx}
                                question={*question}
                                answer={*answer}
                                is_open={*open == Some(idx)}
                                {on_toggle}
                            />
                        }
                    }) }
                </div>
            </div>

            <style>
                {r#"
                .faq {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: #f5f5f5;
                    font-family: 'Host Grotesk', sans-serif;
                    transition: background-color 0.5s ease;
                }

                .dark .faq {
                    background: #0a0a0a;
                }

                .faq-decoration {
                    display: none;
                    position: absolute;
                    right: 0;
                    top: 0;
                    color: #D4AF37;
                    opacity: 0.05;
                    pointer-events: none;
                }

                .faq-container {
                    position: relative;
                    z-index: 10;
                    max-width: 56rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .faq-header {
                    margin-bottom: 4rem;
                    text-align: center;
                }

                .faq-header h2 {
                    margin: 0 0 1rem;
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #171717;
                }

                .dark .faq-header h2 {
                    color: #fff;
                }

                .faq-header h2 span {
                    color: #B59218;
                }

                .dark .faq-header h2 span {
                    color: #D4AF37;
                }

                .faq-header p {
                    margin: 0;
                    color: #525252;
                }

                .dark .faq-header p {
                    color: #a3a3a3;
                }

                .faq-header-bar {
                    width: 4rem;
                    height: 4px;
                    margin: 1.5rem auto 0;
                    border-radius: 9999px;
                    background: #D4AF37;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    background: #fff;
                    border: 1px solid #e5e5e5;
                    border-radius: 1rem;
                    overflow: hidden;
                    box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                }

                .dark .faq-item {
                    background: #121212;
                    border-color: #262626;
                }

                .faq-question {
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 1.25rem 1.5rem;
                    background: none;
                    border: none;
                    text-align: left;
                    cursor: pointer;
                    font-family: inherit;
                    touch-action: manipulation;
                }

                .faq-question:focus {
                    outline: none;
                }

                .question-text {
                    font-size: 1rem;
                    font-weight: 700;
                    color: #262626;
                    transition: color 0.3s ease;
                }

                .dark .question-text {
                    color: #e5e5e5;
                }

                .faq-item.open .question-text {
                    color: #B59218;
                }

                .dark .faq-item.open .question-text {
                    color: #FDE047;
                }

                .toggle-icon {
                    flex-shrink: 0;
                    display: flex;
                    margin-left: 1rem;
                    padding: 0.5rem;
                    border-radius: 9999px;
                    background: #f5f5f5;
                    color: #737373;
                    transition: all 0.3s ease;
                }

                .dark .toggle-icon {
                    background: #262626;
                }

                .faq-item.open .toggle-icon {
                    transform: rotate(180deg);
                    background: #fef9c3;
                    color: #B59218;
                }

                .dark .faq-item.open .toggle-icon {
                    background: rgba(113, 63, 18, 0.3);
                }

                .faq-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    opacity: 0;
                    transition: grid-template-rows 0.2s ease-out, opacity 0.2s ease-out;
                }

                .faq-item.open .faq-answer {
                    grid-template-rows: 1fr;
                    opacity: 1;
                }

                .faq-answer-inner {
                    overflow: hidden;
                }

                .faq-answer p {
                    margin: 0;
                    padding: 0 1.5rem 1.5rem;
                    line-height: 1.7;
                    color: #525252;
                }

                .dark .faq-answer p {
                    color: #a3a3a3;
                }

                @media (min-width: 768px) {
                    .faq-decoration {
                        display: block;
                    }

                    .faq-header h2 {
                        font-size: 3rem;
                    }

                    .faq-question {
                        padding: 1.5rem 2rem;
                    }

                    .question-text {
                        font-size: 1.25rem;
                    }

                    .faq-answer p {
                        padding: 0.5rem 2rem 2rem;
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
    fn clicking_a_closed_item_opens_only_it() {
        assert_eq!(toggle(None, 2), Some(2));
        assert_eq!(toggle(Some(0), 3), Some(3));
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        assert_eq!(toggle(Some(1), 1), None);
    }

    #[test]
    fn every_question_has_an_answer() {
        assert!(FAQS.iter().all(|(q, a)| !q.is_empty() && !a.is_empty()));
    }
}
