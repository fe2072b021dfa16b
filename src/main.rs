use std::rc::Rc;

use log::{error, info};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod theme;
mod tracker;
mod splash {
    pub mod loader;
    pub mod particles;
    pub mod progress;
}
mod components {
    pub mod animated_logo;
    pub mod checklist;
    pub mod color_chip;
    pub mod layout;
    pub mod navigation;
    pub mod section;
    pub mod typography;
}
mod pages {
    pub mod guidelines;
}

use content::ContentStore;
use pages::guidelines::Guidelines;
use splash::loader::Loader;
use theme::ThemeStyles;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Guidelines,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Guidelines => {
            info!("Rendering Guidelines page");
            html! { <Guidelines /> }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Guidelines} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub content: Rc<ContentStore>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    let loading = use_state(|| true);
    let on_loading_complete = {
        let loading = loading.clone();
        Callback::from(move |_: ()| loading.set(false))
    };

    html! {
        <ContextProvider<Rc<ContentStore>> context={props.content.clone()}>
            <ThemeStyles />
            {
                if *loading {
                    html! { <Loader on_loading_complete={on_loading_complete} /> }
                } else {
                    html! {
                        <BrowserRouter>
                            <Switch<Route> render={switch} />
                        </BrowserRouter>
                    }
                }
            }
        </ContextProvider<Rc<ContentStore>>>
    }
}

#[derive(Properties, PartialEq)]
struct ContentUnavailableProps {
    message: String,
}

#[function_component]
fn ContentUnavailable(props: &ContentUnavailableProps) -> Html {
    html! {
        <>
            <ThemeStyles />
            <div class="content-unavailable" style="padding: 4rem 2rem; text-align: center;">
                <h1>{"The brand guidelines could not be displayed"}</h1>
                <p>{ &props.message }</p>
            </div>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting brand guidelines");
    match ContentStore::load() {
        Ok(content) => {
            info!("Loaded {} sections", content.len());
            yew::Renderer::<App>::with_props(AppProps {
                content: Rc::new(content),
            })
            .render();
        }
        Err(err) => {
            error!("Brand content failed to load: {}", err);
            yew::Renderer::<ContentUnavailable>::with_props(ContentUnavailableProps {
                message: err.to_string(),
            })
            .render();
        }
    }
}
