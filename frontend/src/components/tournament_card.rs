use crate::Route;
use shared::{Tournament, TournamentStatus};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: TournamentStatus,
    #[prop_or_default]
    pub classes: Classes,
}

/// Status pill; upcoming tournaments are highlighted, anything else is muted.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    let tone = if props.status.is_upcoming() {
        classes!("bg-[#01a74b]", "text-white")
    } else {
        classes!("bg-zinc-700", "text-white")
    };

    html! {
        <span class={classes!("inline-flex", "px-2.5", "py-0.5", "rounded-full", "text-xs", "font-semibold", tone, props.classes.clone())}>
            {props.status.as_str()}
        </span>
    }
}

#[derive(Properties, PartialEq)]
pub struct TournamentCardProps {
    pub tournament: Tournament,
}

#[function_component(TournamentCard)]
pub fn tournament_card(props: &TournamentCardProps) -> Html {
    let tournament = &props.tournament;

    html! {
        <div class="tournament-card p-4 sm:p-6 rounded-xl">
            <div class="flex flex-col h-full">
                <div class="flex justify-between items-start mb-4 sm:mb-6">
                    <h2 class="text-xl sm:text-2xl font-bold text-[#01a74b] neon-text">
                        {&tournament.title}
                    </h2>
                    <StatusBadge status={tournament.status.clone()} />
                </div>
                <div class="space-y-3 sm:space-y-4 mb-4 sm:mb-6 flex-grow">
                    <div class="flex items-center gap-2 sm:gap-3 text-zinc-300">
                        <span class="text-[#01a74b]">{"🏆"}</span>
                        <span class="text-base sm:text-lg">{&tournament.game_name}</span>
                    </div>
                    <div class="flex items-center gap-2 sm:gap-3 text-zinc-300">
                        <span class="text-[#01a74b]">{"📅"}</span>
                        <span class="text-base sm:text-lg">{tournament.display_date()}</span>
                    </div>
                    <div class="flex items-center gap-2 sm:gap-3 text-zinc-300">
                        <span class="text-[#01a74b]">{"💲"}</span>
                        <span class="text-base sm:text-lg">{tournament.display_prize_pool()}</span>
                    </div>
                    <p class="text-sm sm:text-base text-zinc-400 mt-2 sm:mt-4 leading-relaxed">
                        {&tournament.description}
                    </p>
                </div>
                <Link<Route> to={Route::TournamentDetails { id: tournament.id }} classes={classes!("mt-auto")}>
                    <span class="block w-full text-center gaming-button text-white py-2 rounded">
                        {"View Details"}
                    </span>
                </Link<Route>>
            </div>
        </div>
    }
}
