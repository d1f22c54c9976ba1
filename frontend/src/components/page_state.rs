use crate::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub message: AttrValue,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    html! {
        <div class="min-h-screen gaming-gradient text-white p-4 sm:p-8">
            <div class="max-w-7xl mx-auto text-center">
                <div class="animate-pulse flex flex-col items-center gap-4">
                    <span class="text-5xl text-[#01a74b]">{"🎮"}</span>
                    <span class="text-xl">{props.message.clone()}</span>
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorScreenProps {
    pub message: AttrValue,
    /// Show a link back to the tournament list.
    #[prop_or_default]
    pub back_link: bool,
}

#[function_component(ErrorScreen)]
pub fn error_screen(props: &ErrorScreenProps) -> Html {
    html! {
        <div class="min-h-screen gaming-gradient text-white p-4 sm:p-8">
            <div class="max-w-4xl mx-auto text-center">
                if props.back_link {
                    <>
                        <h1 class="text-xl sm:text-2xl font-bold text-[#01a74b] neon-text">
                            {props.message.clone()}
                        </h1>
                        <Link<Route> to={Route::Home} classes={classes!("inline-block", "mt-4", "gaming-button", "text-white", "px-4", "py-2", "rounded")}>
                            {"Back to Tournaments ←"}
                        </Link<Route>>
                    </>
                } else {
                    <div class="text-red-500">{props.message.clone()}</div>
                }
            </div>
        </div>
    }
}
