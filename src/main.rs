use log::{info, warn};
use stylist::yew::Global;
use stylist::StyleSource;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod theme;
mod motion {
    pub mod parallax;
    pub mod scroll;
    pub mod timers;
    pub mod typewriter;
}
mod components {
    pub mod bubbles;
    pub mod header;
    pub mod hero;
}
mod pages {
    pub mod home;
}

use pages::home::{Home, NotFound};
use theme::THEME;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let global_css = use_memo(
        |_| match StyleSource::try_from(THEME.stylesheet()) {
            Ok(css) => Some(css),
            Err(e) => {
                warn!("theme stylesheet rejected, rendering unstyled: {}", e);
                None
            }
        },
        (),
    );

    html! {
        <BrowserRouter>
            if let Some(css) = (*global_css).clone() {
                <Global css={css} />
            }
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        gloo_console::error!(format!("error initializing log: {}", e));
    }

    info!("Starting {} {}", config::SITE_NAME, config::SITE_VERSION);
    yew::Renderer::<App>::new().render();
}
