use shared::StatusFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub active: StatusFilter,
    pub menu_open: bool,
    pub on_filter: Callback<StatusFilter>,
    pub on_add: Callback<()>,
    pub on_toggle_menu: Callback<()>,
}

fn filter_icon(filter: StatusFilter) -> &'static str {
    match filter {
        StatusFilter::All => "▦",
        StatusFilter::Upcoming => "⏶",
        StatusFilter::Completed => "✔",
    }
}

fn filter_button_classes(active: bool) -> Classes {
    if active {
        classes!("gaming-button", "text-white", "bg-[#01a74b]", "hover:bg-[#018a3d]")
    } else {
        classes!(
            "gaming-button", "border", "border-[#01a74b]", "text-white", "bg-transparent",
            "hover:bg-[#01a74b]", "hover:text-white"
        )
    }
}

/// Dashboard header: title, status filters and the "Add Tournament" action.
///
/// On small screens the buttons move into a full-screen menu; picking an
/// entry there also closes the menu.
#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let toggle_menu = {
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| on_toggle_menu.emit(()))
    };

    let on_add_click = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    // Mobile entries close the menu after acting
    let mobile_filter = |filter: StatusFilter| {
        let on_filter = props.on_filter.clone();
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| {
            on_filter.emit(filter);
            on_toggle_menu.emit(());
        })
    };

    let mobile_add = {
        let on_add = props.on_add.clone();
        let on_toggle_menu = props.on_toggle_menu.clone();
        Callback::from(move |_: MouseEvent| {
            on_add.emit(());
            on_toggle_menu.emit(());
        })
    };

    html! {
        <>
            <div class={classes!("flex", "items-center", "justify-between", "mb-8", "sm:mb-12")}>
                <h1 class={classes!(
                    "text-3xl", "sm:text-5xl", "font-bold", "text-[#01a74b]", "neon-text",
                    "flex", "items-center", "gap-2", "sm:gap-3"
                )}>
                    <span aria-hidden="true">{"🎮"}</span>
                    {"Tournament Hub"}
                </h1>

                // Hamburger - mobile only
                <div class="md:hidden">
                    <button
                        onclick={toggle_menu.clone()}
                        class="text-white p-2"
                        aria-label="Toggle menu"
                    >
                        {if props.menu_open { "✕" } else { "☰" }}
                    </button>
                </div>

                // Desktop navigation
                <div class={classes!("hidden", "md:flex", "gap-2", "lg:gap-3")}>
                    {for StatusFilter::ALL.into_iter().map(|filter| {
                        let on_filter = props.on_filter.clone();
                        html! {
                            <button
                                key={filter.as_str()}
                                onclick={Callback::from(move |_: MouseEvent| on_filter.emit(filter))}
                                class={classes!("px-4", "py-2", "rounded", filter_button_classes(props.active == filter))}
                            >
                                {filter.label()}
                                <span class="ml-2 sm:ml-4">{filter_icon(filter)}</span>
                            </button>
                        }
                    })}
                    <button
                        onclick={on_add_click}
                        class={classes!("px-4", "py-2", "rounded", filter_button_classes(true))}
                    >
                        {"Add Tournament"}
                        <span class="ml-2 sm:ml-4">{"⊕"}</span>
                    </button>
                </div>
            </div>

            if props.menu_open {
                <div class={classes!(
                    "fixed", "inset-0", "md:hidden", "bg-[rgba(17,24,39,0.98)]", "backdrop-blur-lg",
                    "z-50", "flex", "flex-col", "items-center", "justify-center", "p-6"
                )}>
                    <button
                        onclick={toggle_menu}
                        class="absolute top-4 right-4 text-white p-2 text-2xl"
                        aria-label="Close menu"
                    >
                        {"✕"}
                    </button>
                    <div class="flex flex-col gap-6 w-full max-w-md">
                        {for StatusFilter::ALL.into_iter().map(|filter| html! {
                            <button
                                key={filter.as_str()}
                                onclick={mobile_filter(filter)}
                                class={classes!("w-full", "text-lg", "py-6", "rounded", filter_button_classes(props.active == filter))}
                            >
                                {filter.label()}
                                <span class="ml-4">{filter_icon(filter)}</span>
                            </button>
                        })}
                        <button
                            onclick={mobile_add}
                            class={classes!("w-full", "text-lg", "py-6", "rounded", filter_button_classes(true))}
                        >
                            {"Add Tournament"}
                            <span class="ml-4">{"⊕"}</span>
                        </button>
                    </div>
                </div>
            }
        </>
    }
}
