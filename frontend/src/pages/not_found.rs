use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="min-h-screen gaming-gradient text-white p-4 sm:p-8">
            <div class="max-w-4xl mx-auto text-center">
                <h1 class="text-xl sm:text-2xl font-bold text-[#01a74b] neon-text">{"404 - Page Not Found"}</h1>
                <p class="mt-2 text-zinc-400">{"The page you're looking for doesn't exist."}</p>
                <Link<Route> to={Route::Home} classes={classes!("inline-block", "mt-4", "gaming-button", "text-white", "px-4", "py-2", "rounded")}>
                    {"Back to Tournaments"}
                </Link<Route>>
            </div>
        </div>
    }
}
