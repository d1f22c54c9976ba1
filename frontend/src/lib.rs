use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;

pub mod api;
pub mod components;
pub mod config;
pub mod state;
pub mod pages {
    pub mod tournaments;
    pub mod tournament_details;
    pub mod not_found;
}

use pages::{tournaments::Tournaments, tournament_details::TournamentDetails, not_found::NotFound};


#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/tournaments/:id")]
    TournamentDetails { id: i64 },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <BrowserRouter>
            <div class="app-container">
                <main class="flex-1">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        </BrowserRouter>
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => {
            debug!("Rendering Tournaments dashboard");
            html! { <Tournaments /> }
        },
        Route::TournamentDetails { id } => {
            debug!("Rendering Tournament details component for id: {}", id);
            html! { <TournamentDetails id={id} /> }
        },
        Route::NotFound => {
            debug!("Rendering 404 Not Found");
            html! { <NotFound /> }
        },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    // Initialize logging
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    info!("Logger initialized");

    // Set up panic hook
    console_error_panic_hook::set_once();
    info!("Panic hook set");

    info!("Mounting application, API base: {}", config::Config::api_base_url());
    yew::Renderer::<App>::new().render();
    info!("Application mounted");

    Ok(())
}

// Start function that Trunk calls
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            web_sys::console::error_1(&e);
        }
    });
    Ok(())
}
