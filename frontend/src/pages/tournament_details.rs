use crate::api::tournaments::get_tournament_by_id;
use crate::api::utils::RequestAbort;
use crate::components::page_state::{ErrorScreen, LoadingScreen};
use crate::components::tournament_card::StatusBadge;
use crate::state::{issue_ticket, DetailAction, DetailStore};
use crate::Route;
use shared::{FetchState, Ticket, RULES};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TournamentDetailsProps {
    pub id: i64,
}

#[function_component(TournamentDetails)]
pub fn tournament_details(props: &TournamentDetailsProps) -> Html {
    let store = use_reducer(DetailStore::default);
    let tickets = use_mut_ref(Ticket::default);

    // Reload whenever the id changes; the previous request is aborted and
    // its late response, if any, is dropped by ticket.
    {
        let store = store.clone();
        use_effect_with(props.id, move |id| {
            let id = *id;
            let ticket = issue_ticket(&tickets);
            store.dispatch(DetailAction::Begin { id, ticket });

            let abort = RequestAbort::new();
            let signal = abort.signal();
            let dispatcher = store.dispatcher();
            spawn_local(async move {
                let result = get_tournament_by_id(id, signal.as_ref()).await;
                dispatcher.dispatch(DetailAction::Loaded(ticket, result));
            });

            move || abort.abort()
        });
    }

    let tournament = match store.view.fetch_state() {
        FetchState::Loading => {
            return html! { <LoadingScreen message="Loading Tournament Details..." /> };
        }
        FetchState::Failure(_) => {
            return html! {
                <ErrorScreen message={store.view.failure_heading().to_string()} back_link=true />
            };
        }
        FetchState::Success(tournament) => tournament,
    };

    html! {
        <div class="min-h-screen gaming-gradient text-white p-4 sm:p-8">
            <div class="max-w-4xl mx-auto">
                <Link<Route> to={Route::Home} classes={classes!(
                    "inline-flex", "items-center", "mb-6", "px-4", "py-2", "rounded", "text-white",
                    "hover:bg-[#01a74b]", "gaming-button"
                )}>
                    {"← Back to Tournaments"}
                </Link<Route>>

                <div class="space-y-6 sm:space-y-8">
                    <div class="flex flex-col sm:flex-row justify-between items-start gap-4">
                        <h1 class="text-3xl sm:text-4xl font-bold text-[#01a74b] neon-text">
                            {&tournament.title}
                        </h1>
                        <StatusBadge status={tournament.status.clone()} classes={classes!("text-sm", "sm:text-base")} />
                    </div>

                    <div class="tournament-card p-4 sm:p-6 rounded-xl">
                        <div class="grid grid-cols-1 sm:grid-cols-3 gap-4 mb-6">
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
                        </div>

                        <div class="space-y-6 sm:space-y-8">
                            <section>
                                <h2 class="text-lg sm:text-xl font-semibold text-[#01a74b] neon-text mb-3">{"Description"}</h2>
                                <p class="text-zinc-400 text-sm sm:text-base">{&tournament.description}</p>
                            </section>
                            <section>
                                <h2 class="text-lg sm:text-xl font-semibold text-[#01a74b] neon-text mb-3">{"Rules"}</h2>
                                <ul class="list-disc list-inside space-y-2 text-zinc-400 text-sm sm:text-base">
                                    {for RULES.iter().map(|rule| html! { <li>{*rule}</li> })}
                                </ul>
                            </section>
                            <section>
                                <h2 class="text-lg sm:text-xl font-semibold text-[#01a74b] neon-text mb-3">{"Prize Breakdown"}</h2>
                                <div class="space-y-2 text-zinc-400 text-sm sm:text-base">
                                    {for tournament.prize_breakdown().into_iter().map(|share| html! {
                                        <div class="flex justify-between items-center">
                                            <span>{share.place.label()}</span>
                                            <span>{share.describe()}</span>
                                        </div>
                                    })}
                                </div>
                            </section>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
