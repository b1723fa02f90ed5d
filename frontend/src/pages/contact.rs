use crate::components::icons::{Icon, SvgIcon};
use log::info;
use yew::prelude::*;

const CHANNELS: [(Icon, &str, &str); 3] = [
    (Icon::Phone, "24/7 Hotline", "+49 (0) 351 123 456 78"),
    (Icon::Mail, "Email", "info@ass-security.de"),
    (Icon::MapPin, "Hauptquartier", "Musterstraße 1, 01067 Dresden"),
];

#[derive(Properties, PartialEq)]
struct FloatingInputProps {
    label: &'static str,
    name: &'static str,
    #[prop_or("text")]
    kind: &'static str,
}

#[function_component]
fn FloatingInput(props: &FloatingInputProps) -> Html {
    html! {
        <div class="floating-field">
            <input type={props.kind} name={props.name} placeholder=" " />
            <label>{props.label}</label>
        </div>
    }
}

#[function_component]
pub fn ContactSection() -> Html {
    // The form has no backend yet; submitting only keeps the page in place.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        info!("contact form submitted; no delivery configured");
    });

    html! {
        <section id="contact" class="contact">
            <div class="contact-noise"></div>
            <div class="contact-orb contact-orb-a"></div>
            <div class="contact-orb contact-orb-b"></div>

            <div class="contact-container">
                <div class="contact-grid">
                    <div class="contact-info">
                        <div class="contact-pill">
                            <span>{"Get In Touch"}</span>
                        </div>
                        <h2>
                            {"Kontakt"}
                            <br />
                            <span class="contact-accent">{"Aufnehmen"}</span>
                        </h2>
                        <p class="contact-lead">
                            {"Sicherheit ist Vertrauenssache. Wir erstellen Ihnen ein individuelles Sicherheitskonzept, das exakt auf Ihre Bedürfnisse zugeschnitten ist."}
                        </p>

                        <div class="contact-channels">
                            { for CHANNELS.iter().map(|(icon, label, value)| html! {
                                <div class="contact-channel" key={*label}>
                                    <div class="contact-channel-icon">
                                        <SvgIcon icon={*icon} size={20} />
                                    </div>
                                    <div>
                                        <h4>{*label}</h4>
                                        <p>{*value}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="contact-form-wrap">
                        <div class="contact-card">
                            <div class="contact-card-glow"></div>

                            <form class="contact-form" {onsubmit}>
                                <div class="contact-form-row">
                                    <FloatingInput label="Name" name="name" />
                                    <FloatingInput label="Firma" name="company" />
                                </div>
                                <div class="contact-form-row">
                                    <FloatingInput label="Email" name="email" kind="email" />
                                    <FloatingInput label="Telefon" name="phone" kind="tel" />
                                </div>

                                <div class="floating-field floating-field-message">
                                    <textarea name="message" rows="4" placeholder=" "></textarea>
                                    <label>{"Nachricht"}</label>
                                </div>

                                <div class="contact-submit-row">
                                    <button type="submit" class="contact-submit">
                                        <span>{"Absenden"}</span>
                                        <SvgIcon icon={Icon::Send} size={16} />
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .contact {
                    position: relative;
                    padding: 6rem 0;
                    overflow: hidden;
                    background: #fafafa;
                    font-family: 'Host Grotesk', sans-serif;
                    transition: background-color 0.5s ease;
                }

                .dark .contact {
                    background: #080808;
                }

                .contact-noise {
                    display: none;
                    position: absolute;
                    inset: 0;
                    opacity: 0.03;
                    mix-blend-mode: overlay;
                    pointer-events: none;
                    background-image: url('https://grainy-gradients.vercel.app/noise.svg');
                }

                .dark .contact-noise {
                    opacity: 0.05;
                }

                .contact-orb {
                    position: absolute;
                    border-radius: 9999px;
                    pointer-events: none;
                }

                .contact-orb-a {
                    top: 0;
                    left: 0;
                    width: 300px;
                    height: 300px;
                    background: rgba(212, 175, 55, 0.05);
                    filter: blur(60px);
                    transform: translate(-50%, -50%);
                }

                .contact-orb-b {
                    right: 0;
                    bottom: 0;
                    width: 250px;
                    height: 250px;
                    background: rgba(212, 175, 55, 0.1);
                    filter: blur(50px);
                    transform: translate(33%, 33%);
                }

                .contact-container {
                    position: relative;
                    z-index: 10;
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }

                .contact-info {
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .contact-pill {
                    width: fit-content;
                    margin-bottom: 1rem;
                    padding: 0.25rem 0.75rem;
                    border: 1px solid rgba(212, 175, 55, 0.3);
                    border-radius: 9999px;
                }

                .contact-pill span {
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.2em;
                    text-transform: uppercase;
                    color: #B59218;
                }

                .dark .contact-pill span {
                    color: #D4AF37;
                }

                .contact-info h2 {
                    margin: 0 0 2rem;
                    font-size: 3rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                    line-height: 1;
                    color: #171717;
                }

                .dark .contact-info h2 {
                    color: #fff;
                }

                .contact-accent {
                    background: linear-gradient(to right, #FDE047, #B59218);
                    -webkit-background-clip: text;
                    background-clip: text;
                    color: transparent;
                }

                .contact-lead {
                    margin: 0 0 3rem;
                    font-size: 1.125rem;
                    font-weight: 300;
                    line-height: 1.7;
                    color: #525252;
                }

                .dark .contact-lead {
                    color: #a3a3a3;
                }

                .contact-channels {
                    display: flex;
                    flex-direction: column;
                    gap: 2.5rem;
                }

                .contact-channel {
                    display: flex;
                    align-items: flex-start;
                    gap: 1.5rem;
                    cursor: default;
                }

                .contact-channel-icon {
                    width: 3rem;
                    height: 3rem;
                    flex-shrink: 0;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    border: 1px solid #e5e5e5;
                    border-radius: 9999px;
                    background: #fff;
                    color: #a3a3a3;
                    transition: all 0.3s ease;
                }

                .dark .contact-channel-icon {
                    border-color: #262626;
                    background: #171717;
                }

                .contact-channel:hover .contact-channel-icon {
                    color: #D4AF37;
                    border-color: #D4AF37;
                }

                .contact-channel h4 {
                    margin: 0 0 0.25rem;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #a3a3a3;
                    transition: color 0.3s ease;
                }

                .dark .contact-channel h4 {
                    color: #737373;
                }

                .contact-channel:hover h4 {
                    color: #D4AF37;
                }

                .contact-channel p {
                    margin: 0;
                    font-size: 1.125rem;
                    font-weight: 500;
                    color: #171717;
                }

                .dark .contact-channel p {
                    color: #fff;
                }

                .contact-card {
                    position: relative;
                    padding: 2rem;
                    overflow: hidden;
                    background: #fff;
                    border: 1px solid #f5f5f5;
                    border-radius: 2rem;
                    box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                }

                .dark .contact-card {
                    background: #0f0f0f;
                    border-color: rgba(255, 255, 255, 0.05);
                    box-shadow: 0 0 50px -20px rgba(0, 0, 0, 0.5);
                }

                .contact-card-glow {
                    display: none;
                    position: absolute;
                    top: 0;
                    right: 0;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 9999px;
                    background: rgba(212, 175, 55, 0.05);
                    filter: blur(80px);
                    transition: background-color 0.7s ease;
                }

                .contact-card:hover .contact-card-glow {
                    background: rgba(212, 175, 55, 0.1);
                }

                .contact-form {
                    position: relative;
                    z-index: 10;
                    margin-top: 1rem;
                }

                .contact-form-row {
                    display: grid;
                    grid-template-columns: 1fr;
                    column-gap: 2rem;
                    row-gap: 1rem;
                    margin-top: 1rem;
                }

                .floating-field {
                    position: relative;
                    z-index: 0;
                    width: 100%;
                    margin-bottom: 1.5rem;
                }

                .floating-field-message {
                    margin-top: 2rem;
                }

                .floating-field input,
                .floating-field textarea {
                    display: block;
                    width: 100%;
                    padding: 0.75rem 0;
                    font-family: inherit;
                    font-size: 1rem;
                    color: #171717;
                    background: transparent;
                    border: 0;
                    border-bottom: 2px solid #d4d4d4;
                    appearance: none;
                    resize: none;
                    transition: border-color 0.3s ease;
                }

                .dark .floating-field input,
                .dark .floating-field textarea {
                    color: #fff;
                    border-color: #404040;
                }

                .floating-field input:focus,
                .floating-field textarea:focus,
                .dark .floating-field input:focus,
                .dark .floating-field textarea:focus {
                    outline: none;
                    border-color: #D4AF37;
                }

                .floating-field label {
                    position: absolute;
                    top: 0.75rem;
                    left: 0;
                    z-index: -1;
                    font-size: 0.875rem;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    color: #737373;
                    transform-origin: left;
                    transform: translateY(-1.5rem) scale(0.75);
                    transition: transform 0.3s ease, color 0.3s ease;
                }

                .dark .floating-field label {
                    color: #a3a3a3;
                }

                .floating-field input:placeholder-shown + label,
                .floating-field textarea:placeholder-shown + label {
                    transform: translateY(0) scale(1);
                }

                .floating-field input:focus + label,
                .floating-field textarea:focus + label {
                    font-weight: 500;
                    color: #B59218;
                    transform: translateY(-1.5rem) scale(0.75);
                }

                .dark .floating-field input:focus + label,
                .dark .floating-field textarea:focus + label {
                    color: #D4AF37;
                }

                .contact-submit-row {
                    display: flex;
                    justify-content: flex-end;
                    margin-top: 2rem;
                }

                .contact-submit {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem 2.5rem;
                    border: none;
                    border-radius: 4px;
                    background: #171717;
                    color: #fff;
                    font-size: 0.75rem;
                    font-weight: 700;
                    letter-spacing: 0.1em;
                    text-transform: uppercase;
                    cursor: pointer;
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    transition: background-color 0.3s ease, transform 0.2s ease;
                }

                .dark .contact-submit {
                    background: #D4AF37;
                    color: #000;
                }

                .contact-submit:hover {
                    background: #262626;
                    transform: scale(1.02);
                }

                .dark .contact-submit:hover {
                    background: #FDE047;
                }

                .contact-submit:active {
                    transform: scale(0.98);
                }

                @media (min-width: 768px) {
                    .contact {
                        padding: 8rem 0;
                    }

                    .contact-noise,
                    .contact-card-glow {
                        display: block;
                    }

                    .contact-orb-a {
                        width: 500px;
                        height: 500px;
                        filter: blur(120px);
                    }

                    .contact-orb-b {
                        width: 400px;
                        height: 400px;
                        filter: blur(100px);
                    }

                    .contact-info h2 {
                        font-size: 4.5rem;
                    }

                    .contact-card {
                        padding: 3rem;
                    }

                    .contact-form-row {
                        grid-template-columns: 1fr 1fr;
                    }
                }

                @media (min-width: 1024px) {
                    .contact-grid {
                        grid-template-columns: 5fr 7fr;
                        gap: 5rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
