use crate::api::tournaments::{create_tournament, get_all_tournaments};
use crate::api::utils::RequestAbort;
use crate::components::common_modal::Modal;
use crate::components::nav::Nav;
use crate::components::page_state::{ErrorScreen, LoadingScreen};
use crate::components::tournament_card::TournamentCard;
use crate::components::tournament_form::TournamentForm;
use crate::state::{issue_ticket, ListAction, ListStore};
use log::debug;
use shared::{StatusFilter, Ticket, TournamentDraft};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[function_component(Tournaments)]
pub fn tournaments() -> Html {
    let store = use_reducer(ListStore::default);
    let tickets = use_mut_ref(Ticket::default);
    let filter = use_state(StatusFilter::default);
    let show_form = use_state(|| false);
    let menu_open = use_state(|| false);

    // Initial load; the request is aborted if the page unmounts first
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            let ticket = issue_ticket(&tickets);
            store.dispatch(ListAction::Begin(ticket));

            let abort = RequestAbort::new();
            let signal = abort.signal();
            let dispatcher = store.dispatcher();
            spawn_local(async move {
                let result = get_all_tournaments(signal.as_ref()).await;
                dispatcher.dispatch(ListAction::Loaded(ticket, result));
            });

            move || abort.abort()
        });
    }

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |selected: StatusFilter| {
            debug!("Filter changed to {}", selected);
            filter.set(selected);
        })
    };

    let on_toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| menu_open.set(!*menu_open))
    };

    let on_open_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: ()| show_form.set(true))
    };

    let on_close_form = {
        let show_form = show_form.clone();
        Callback::from(move |_: ()| show_form.set(false))
    };

    // The form hands over its draft; the create request is owned here
    let on_create = {
        let dispatcher = store.dispatcher();
        Callback::from(move |draft: TournamentDraft| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                let result = create_tournament(&draft).await;
                dispatcher.dispatch(ListAction::Created(result));
            });
        })
    };

    if store.view.is_loading() {
        return html! { <LoadingScreen message="Loading Tournaments..." /> };
    }

    if let Some(message) = store.view.error() {
        return html! { <ErrorScreen message={message.to_string()} /> };
    }

    let visible = store.view.visible(*filter);

    html! {
        <div class="min-h-screen gaming-gradient text-white p-4 sm:p-8 relative">
            <div class="max-w-7xl mx-auto">
                <Nav
                    active={*filter}
                    menu_open={*menu_open}
                    on_filter={on_filter}
                    on_add={on_open_form}
                    on_toggle_menu={on_toggle_menu}
                />

                <div class={if *show_form { "blur-md" } else { "" }}>
                    <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 sm:gap-8">
                        {for visible.into_iter().map(|tournament| html! {
                            <TournamentCard key={tournament.id.to_string()} tournament={tournament.clone()} />
                        })}
                    </div>
                </div>

                <Modal is_open={*show_form} title="Add New Tournament" on_close={on_close_form.clone()}>
                    <TournamentForm on_submit={on_create} on_close={on_close_form} />
                </Modal>
            </div>
        </div>
    }
}
