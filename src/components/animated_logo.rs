use yew::prelude::*;

use crate::theme::{PRIMARY_PURPLE, SECONDARY_MAGENTA};

#[derive(Properties, PartialEq)]
pub struct AnimatedLogoProps {
    #[prop_or(200)]
    pub width: u32,
}

/// The geometric brand mark. Wings draw in one after another, the centre knot
/// shimmers and a soft pulse sits behind it.
#[function_component(AnimatedLogo)]
pub fn animated_logo(props: &AnimatedLogoProps) -> Html {
    // Keep the 197x143 artwork ratio.
    let height = props.width * 143 / 197;
    let style = format!("width: {}px; height: {}px;", props.width, height);

    html! {
        <div class="animated-logo" style={style}>
            <svg width="100%" height="100%" viewBox="0 0 197 143" fill="none" xmlns="http://www.w3.org/2000/svg">
                <path
                    class="logo-knot"
                    d="M93.046 59.299L94.8329 56.2132C95.335 55.3461 96.5873 55.3469 97.0883 56.2147C97.3213 56.6183 97.321 57.1155 97.0875 57.5188L96.0589 59.2951L94.7297 61.5904L93.2928 64.0719C93.2762 64.1005 93.2762 64.1357 93.2927 64.1643L94.582 66.3974L97.0133 70.6086C97.7825 71.9409 99.7051 71.9421 100.476 70.6108L102.53 67.0644C103.302 65.7301 102.338 64.0602 100.796 64.0622L98.8127 64.0647C97.5401 64.0664 96.7444 62.6882 97.3821 61.5869L98.7113 59.2916C98.7454 59.2327 98.8307 59.2325 98.8647 59.2914L99.6097 60.5818C99.9674 61.2014 100.629 61.5827 101.344 61.5818L102.84 61.5799L105.794 61.5761C105.804 61.576 105.812 61.571 105.817 61.5628L107.139 59.2807L109.589 55.0496C110.361 53.7153 109.397 52.0454 107.855 52.0474L100.371 52.0571C100.338 52.0571 100.318 52.0919 100.334 52.1197L101.598 54.3074L103.364 57.3671C103.856 58.2198 103.242 59.2858 102.257 59.287C101.799 59.2876 101.376 59.0436 101.147 58.6471L100.117 56.8636L99.3746 55.5771L98.7941 54.5717L97.8692 52.9698C97.5115 52.3502 96.8501 51.9688 96.1346 51.9698L94.6387 51.9717L89.7185 51.9781C88.18 51.9801 87.2198 53.6457 87.989 54.9781L91.2274 60.5872C91.4656 60.9997 92.0609 61.0001 92.2996 60.5879L93.046 59.299Z"
                    fill="url(#brand_knot_gradient)"
                />
                <path class="logo-wing" style="animation-delay: 0.5s;" fill={PRIMARY_PURPLE}
                    d="M181.135 101.027L181.134 70.0928L111.042 2.20537e-06L103.068 7.97315L103.069 40.1102L172.56 109.602L181.135 101.027Z" />
                <path class="logo-wing" style="animation-delay: 0.6s;" fill={PRIMARY_PURPLE}
                    d="M15.467 101.027L15.4671 70.0928L85.5599 2.20537e-06L93.5331 7.97315L93.533 40.1102L24.0416 109.602L15.467 101.027Z" />
                <path class="logo-wing" style="animation-delay: 0.7s;" fill={SECONDARY_MAGENTA}
                    d="M102.844 82.08L102.844 108.596L136.962 142.714L145.642 134.034V103.311L113.627 71.2964L102.844 82.08Z" />
                <path class="logo-wing" style="animation-delay: 0.8s;" fill={SECONDARY_MAGENTA}
                    d="M93.7578 82.08L93.7578 108.596L59.6397 142.714L50.9595 134.034V103.311L82.9742 71.2964L93.7578 82.08Z" />
                <defs>
                    <linearGradient id="brand_knot_gradient" x1="99.071" y1="46.3382" x2="98.1379" y2="73.8269" gradientUnits="userSpaceOnUse">
                        <animate attributeName="x1" values="99.071;110;99.071" dur="2s" repeatCount="indefinite" />
                        <animate attributeName="x2" values="98.1379;110;98.1379" dur="2s" repeatCount="indefinite" />
                        <stop stop-color={SECONDARY_MAGENTA} />
                        <stop offset="0.999163" stop-color={PRIMARY_PURPLE} />
                    </linearGradient>
                </defs>
            </svg>
            <div class="animated-logo__pulse"></div>
            <style>
                {r#"
                .animated-logo {
                    position: relative;
                    animation: logoEnter 0.5s ease-out both;
                }

                .animated-logo svg {
                    position: relative;
                    z-index: 1;
                }

                .logo-knot {
                    opacity: 0;
                    animation: fadeIn 0.8s ease-out 0.2s forwards;
                }

                .logo-wing {
                    opacity: 0;
                    transform-box: fill-box;
                    transform-origin: center;
                    animation: wingIn 1s ease-out forwards;
                }

                .animated-logo__pulse {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 4rem;
                    height: 4rem;
                    margin: -2rem 0 0 -2rem;
                    border-radius: 50%;
                    background: #96397C;
                    pointer-events: none;
                    animation: logoPulse 1.5s ease-out infinite alternate;
                }

                @keyframes logoEnter {
                    from { opacity: 0; transform: translateY(20px) scale(0.8); }
                    to { opacity: 1; transform: translateY(0) scale(1); }
                }

                @keyframes wingIn {
                    from { opacity: 0; transform: scale(0.6); }
                    to { opacity: 1; transform: scale(1); }
                }

                @keyframes logoPulse {
                    from { opacity: 0; transform: scale(0.8); }
                    to { opacity: 0.3; transform: scale(1.2); }
                }
                "#}
            </style>
        </div>
    }
}
