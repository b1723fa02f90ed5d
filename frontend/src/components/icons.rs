//! Inline stroke icons, 24x24 viewBox.

use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ShieldCheck,
    Shield,
    Lock,
    Menu,
    Close,
    Sun,
    Moon,
    Cookie,
    ArrowRight,
    Plus,
    Minus,
    ChevronLeft,
    ChevronRight,
    Star,
    Quote,
    Phone,
    Mail,
    MapPin,
    Send,
    Target,
    Zap,
    CheckCircle,
    UserCheck,
    Radio,
    Eye,
    Activity,
    HelpCircle,
    Facebook,
    Twitter,
    Linkedin,
    Instagram,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::ShieldCheck => &[
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z",
                "M9 12l2 2 4-4",
            ],
            Icon::Shield => &["M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"],
            Icon::Lock => &[
                "M5 11h14a2 2 0 0 1 2 2v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-7a2 2 0 0 1 2-2z",
                "M7 11V7a5 5 0 0 1 10 0v4",
            ],
            Icon::Menu => &["M4 6h16", "M4 12h16", "M4 18h16"],
            Icon::Close => &["M18 6L6 18", "M6 6l12 12"],
            Icon::Sun => &[
                "M12 8a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
                "M12 2v2",
                "M12 20v2",
                "M4.93 4.93l1.41 1.41",
                "M17.66 17.66l1.41 1.41",
                "M2 12h2",
                "M20 12h2",
                "M6.34 17.66l-1.41 1.41",
                "M19.07 4.93l-1.41 1.41",
            ],
            Icon::Moon => &["M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9z"],
            Icon::Cookie => &[
                "M12 2a10 10 0 1 0 10 10 4 4 0 0 1-5-5 4 4 0 0 1-5-5",
                "M8.5 8.5v.01",
                "M16 15.5v.01",
                "M12 12v.01",
                "M11 17v.01",
                "M7 14v.01",
            ],
            Icon::ArrowRight => &["M5 12h14", "M12 5l7 7-7 7"],
            Icon::Plus => &["M5 12h14", "M12 5v14"],
            Icon::Minus => &["M5 12h14"],
            Icon::ChevronLeft => &["M15 18l-6-6 6-6"],
            Icon::ChevronRight => &["M9 18l6-6-6-6"],
            Icon::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            Icon::Quote => &[
                "M3 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2H4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-2 6-4 6z",
                "M15 21c3 0 7-1 7-8V5c0-1.25-.76-2-2-2h-4c-1.25 0-2 .75-2 2v6c0 1.25.75 2 2 2h3c0 4-2 6-4 6z",
            ],
            Icon::Phone => &[
                "M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72c.13.96.36 1.9.7 2.81a2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45c.91.34 1.85.57 2.81.7A2 2 0 0 1 22 16.92z",
            ],
            Icon::Mail => &[
                "M4 4h16c1.1 0 2 .9 2 2v12c0 1.1-.9 2-2 2H4c-1.1 0-2-.9-2-2V6c0-1.1.9-2 2-2z",
                "M22 6l-10 7L2 6",
            ],
            Icon::MapPin => &[
                "M21 10c0 7-9 13-9 13s-9-6-9-13a9 9 0 0 1 18 0z",
                "M12 7a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
            ],
            Icon::Send => &["M22 2L11 13", "M22 2l-7 20-4-9-9-4 20-7z"],
            Icon::Target => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z",
                "M12 6a6 6 0 1 0 0 12 6 6 0 0 0 0-12z",
                "M12 10a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
            Icon::Zap => &["M13 2L3 14h9l-1 8 10-12h-9l1-8z"],
            Icon::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "M22 4L12 14.01l-3-3"],
            Icon::UserCheck => &[
                "M16 21v-2a4 4 0 0 0-4-4H5a4 4 0 0 0-4 4v2",
                "M8.5 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8z",
                "M17 11l2 2 4-4",
            ],
            Icon::Radio => &[
                "M12 10a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
                "M16.24 7.76a6 6 0 0 1 0 8.49",
                "M7.76 16.24a6 6 0 0 1 0-8.49",
                "M19.07 4.93a10 10 0 0 1 0 14.14",
                "M4.93 19.07a10 10 0 0 1 0-14.14",
            ],
            Icon::Eye => &[
                "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z",
                "M12 9a3 3 0 1 0 0 6 3 3 0 0 0 0-6z",
            ],
            Icon::Activity => &["M22 12h-4l-3 9L9 3l-3 9H2"],
            Icon::HelpCircle => &[
                "M12 2a10 10 0 1 0 0 20 10 10 0 0 0 0-20z",
                "M9.09 9a3 3 0 0 1 5.83 1c0 2-3 3-3 3",
                "M12 17h.01",
            ],
            Icon::Facebook => &["M18 2h-3a5 5 0 0 0-5 5v3H7v4h3v8h4v-8h3l1-4h-4V7a1 1 0 0 1 1-1h3z"],
            Icon::Twitter => &[
                "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z",
            ],
            Icon::Linkedin => &[
                "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-4 0v7h-4v-7a6 6 0 0 1 6-6z",
                "M2 9h4v12H2z",
                "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4z",
            ],
            Icon::Instagram => &[
                "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5z",
                "M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z",
                "M17.5 6.5h.01",
            ],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(2.0)]
    pub stroke_width: f32,
}

#[function_component]
pub fn SvgIcon(props: &IconProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            class={props.class.clone()}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width={props.stroke_width.to_string()}
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}
