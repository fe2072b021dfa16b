use stylist::yew::Global;
use stylist::css;
use yew::prelude::*;

pub const PRIMARY_PURPLE: &str = "#5C3C80";
pub const SECONDARY_MAGENTA: &str = "#96397C";

/// Page-wide base styles and the keyframes shared by several components.
#[function_component(ThemeStyles)]
pub fn theme_styles() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                background: #ffffff;
                color: #1E1E1E;
                font-family: system-ui, -apple-system, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                -webkit-font-smoothing: antialiased;
            }

            h1, h2, h3 {
                font-family: "OriginTech", system-ui, sans-serif;
            }

            a {
                color: inherit;
            }

            @keyframes fadeIn {
                from { opacity: 0; }
                to { opacity: 1; }
            }

            @keyframes fadeUp {
                from { opacity: 0; transform: translateY(50px); }
                to { opacity: 1; transform: translateY(0); }
            }
        "#)} />
    }
}
