use gloo_timers::callback::{Interval, Timeout};
use log::{debug, info};
use web_sys::js_sys::Math;
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::components::animated_logo::AnimatedLogo;
use crate::config;
use crate::splash::particles::generate_particles;
use crate::splash::progress::{progress_label, LoadingProgress, Phase, Tick};

#[derive(Properties, PartialEq)]
pub struct LoaderProps {
    #[prop_or_default]
    pub on_loading_complete: Option<Callback<()>>,
    #[prop_or_else(config::loading_time_ms)]
    pub loading_time: u32,
}

/// Full-screen splash with a simulated progress bar.
///
/// Once progress reaches 100 the overlay fades out and `on_loading_complete`
/// fires exactly once. Unmounting cancels every timer.
#[function_component(Loader)]
pub fn loader(props: &LoaderProps) -> Html {
    let meter = use_mut_ref(|| LoadingProgress::new(props.loading_time, config::SPLASH_TICK_MS));
    let progress = use_state(|| 0.0_f64);
    let phase = use_state(|| Phase::Loading);
    let particles = use_state(|| generate_particles(config::PARTICLE_COUNT, Math::random));

    // Progress ticks while loading
    {
        let deps = (*phase, props.loading_time);
        let meter = meter.clone();
        let progress = progress.clone();
        let phase = phase.clone();
        use_effect_with_deps(
            move |(current, loading_time)| {
                let interval = (*current == Phase::Loading).then(|| {
                    if meter.borrow().loading_time() != *loading_time {
                        *meter.borrow_mut() = LoadingProgress::new(*loading_time, config::SPLASH_TICK_MS);
                        progress.set(0.0);
                    }
                    Interval::new(config::SPLASH_TICK_MS, move || {
                        let tick = meter.borrow_mut().tick();
                        match tick {
                            Tick::Advanced(value) => progress.set(value),
                            Tick::Reached100 => {
                                debug!("splash progress reached 100");
                                progress.set(100.0);
                                phase.set(meter.borrow().phase());
                            }
                            Tick::Idle => {}
                        }
                    })
                });
                move || drop(interval)
            },
            deps,
        );
    }

    // Fade out, then hand over to the page
    {
        let meter = meter.clone();
        let phase_handle = phase.clone();
        let on_complete = props.on_loading_complete.clone();
        use_effect_with_deps(
            move |current| {
                let timeout = (*current == Phase::FadingOut).then(|| {
                    Timeout::new(config::SPLASH_FADE_OUT_MS, move || {
                        if meter.borrow_mut().finish() {
                            info!("Loading complete");
                            phase_handle.set(meter.borrow().phase());
                            if let Some(on_complete) = on_complete {
                                on_complete.emit(());
                            }
                        }
                    })
                });
                move || drop(timeout)
            },
            *phase,
        );
    }

    // Fresh sparkles every couple of seconds
    {
        let particles = particles.clone();
        let millis = if *phase == Phase::Finished {
            0
        } else {
            config::PARTICLE_REFRESH_MS
        };
        use_interval(
            move || particles.set(generate_particles(config::PARTICLE_COUNT, Math::random)),
            millis,
        );
    }

    if *phase == Phase::Finished {
        return html! {};
    }

    let overlay_class = classes!("loader", (*phase == Phase::FadingOut).then(|| "loader--fading"));
    let bar_style = format!("width: {:.1}%;", *progress);

    html! {
        <div class={overlay_class} role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow={format!("{}", progress.round() as u32)}>
            <div class="loader__background">
                { for particles.iter().map(|particle| html! {
                    <div key={particle.id} class="loader__particle" style={particle.style()}></div>
                }) }
                <div class="loader__ring loader__ring--purple"></div>
                <div class="loader__ring loader__ring--magenta"></div>
            </div>

            <div class="loader__content">
                <div class="loader__logo">
                    <AnimatedLogo width={200} />
                </div>

                <div class="loader__track">
                    <div class="loader__bar" style={bar_style}></div>
                </div>

                <p class="loader__label">{ progress_label(*progress) }</p>

                <div class="loader__dots">
                    { for (0..3_i32).map(|i| html! {
                        <span key={i} style={format!("animation-delay: {:.1}s;", f64::from(i) * 0.2)}></span>
                    }) }
                </div>

                <div class="loader__burst"></div>
            </div>

            <style>
                {r#"
                .loader {
                    position: fixed;
                    inset: 0;
                    z-index: 50;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    background: linear-gradient(135deg, #0f0c29, #302b63, #24243e);
                    opacity: 1;
                    transition: opacity 0.8s ease-in-out;
                }

                .loader--fading {
                    opacity: 0;
                    pointer-events: none;
                }

                .loader__background {
                    position: absolute;
                    inset: 0;
                    overflow: hidden;
                }

                .loader__particle {
                    position: absolute;
                    border-radius: 50%;
                    background: linear-gradient(to bottom right, #fde047, #ec4899);
                    filter: blur(1px);
                    opacity: 0;
                    animation-name: sparkle;
                    animation-iteration-count: infinite;
                    animation-direction: alternate;
                    animation-timing-function: ease-in-out;
                }

                @keyframes sparkle {
                    0% { opacity: 0; transform: translate(0, 0) scale(0); }
                    50% { opacity: 0.8; transform: translate(var(--dx1), var(--dy1)) scale(1); }
                    100% { opacity: 0; transform: translate(var(--dx2), var(--dy2)) scale(0); }
                }

                .loader__ring {
                    position: absolute;
                    top: 50%;
                    left: 50%;
                    width: 24rem;
                    height: 24rem;
                    margin: -12rem 0 0 -12rem;
                    border-radius: 50%;
                    border: 4px solid;
                    animation-iteration-count: infinite;
                    animation-direction: alternate;
                }

                .loader__ring--purple {
                    border-color: #a855f7;
                    animation-name: ringPurple;
                    animation-duration: 2s;
                }

                .loader__ring--magenta {
                    border-color: #ec4899;
                    animation-name: ringMagenta;
                    animation-duration: 3s;
                    animation-delay: 0.5s;
                }

                @keyframes ringPurple {
                    from { opacity: 0; transform: scale(0); }
                    to { opacity: 0.1; transform: scale(1); }
                }

                @keyframes ringMagenta {
                    from { opacity: 0; transform: scale(0); }
                    to { opacity: 0.05; transform: scale(1.5); }
                }

                .loader__content {
                    position: relative;
                    z-index: 10;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                }

                .loader__logo {
                    margin-bottom: 2rem;
                }

                .loader__track {
                    width: 16rem;
                    height: 0.5rem;
                    margin-bottom: 1rem;
                    border-radius: 9999px;
                    background: #1f2937;
                    overflow: hidden;
                }

                .loader__bar {
                    height: 100%;
                    background: linear-gradient(to right, #a855f7, #ec4899);
                    transition: width 0.3s;
                }

                .loader__label {
                    margin: 0 0 1rem;
                    color: #ffffff;
                    font-size: 1.125rem;
                    font-weight: 500;
                    animation: labelIn 0.5s ease-out 0.5s both;
                }

                @keyframes labelIn {
                    from { opacity: 0; transform: translateY(10px); }
                    to { opacity: 1; transform: translateY(0); }
                }

                .loader__dots {
                    display: flex;
                    gap: 0.5rem;
                }

                .loader__dots span {
                    width: 0.75rem;
                    height: 0.75rem;
                    border-radius: 50%;
                    background: linear-gradient(to bottom right, #c084fc, #f472b6);
                    animation: dotBounce 1s infinite;
                }

                @keyframes dotBounce {
                    0%, 100% { transform: translateY(0) scale(1); opacity: 0.5; }
                    50% { transform: translateY(-10px) scale(1.2); opacity: 1; }
                }

                .loader__burst {
                    position: absolute;
                    width: 16rem;
                    height: 16rem;
                    border-radius: 50%;
                    border: 4px solid rgba(216, 180, 254, 0.3);
                    pointer-events: none;
                    animation: burst 3s infinite;
                }

                @keyframes burst {
                    0% { opacity: 0; transform: scale(0); }
                    33% { opacity: 0.8; }
                    66% { opacity: 0; transform: scale(2); }
                    100% { opacity: 0; transform: scale(2); }
                }
                "#}
            </style>
        </div>
    }
}
