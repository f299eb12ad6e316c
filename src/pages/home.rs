use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::header::Header;
use crate::components::hero::HeroSection;
use crate::Route;

#[function_component(Home)]
pub fn home() -> Html {
    // Start every visit at the top so the bubbles open at their start positions
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <>
            <Header />
            <main>
                <HeroSection />
            </main>
        </>
    }
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <>
            <Header />
            <div class="not-found">
                <h1>{"Page not found"}</h1>
                <Link<Route> to={Route::Home}>{"Back to the front page"}</Link<Route>>
            </div>
        </>
    }
}
