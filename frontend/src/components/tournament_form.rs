use crate::state::{DraftAction, DraftStore};
use shared::{DraftField, TournamentDraft, TournamentStatus};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TournamentFormProps {
    /// Receives the completed draft. The owner performs the create request.
    pub on_submit: Callback<TournamentDraft>,
    pub on_close: Callback<()>,
}

const INPUT_CLASSES: &str = "w-full p-2 rounded bg-zinc-800 text-white border border-zinc-700";

#[derive(Properties, PartialEq)]
struct TextFieldProps {
    field: DraftField,
    label: &'static str,
    #[prop_or("text")]
    input_type: &'static str,
    #[prop_or("")]
    placeholder: &'static str,
    value: String,
    on_change: Callback<(DraftField, String)>,
}

#[function_component(TextField)]
fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let field = props.field;
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit((field, input.value()));
        })
    };

    html! {
        <div>
            <label for={props.field.name()} class="block text-sm mb-1">{props.label}</label>
            <input
                id={props.field.name()}
                name={props.field.name()}
                type={props.input_type}
                value={props.value.clone()}
                placeholder={props.placeholder}
                oninput={oninput}
                class={INPUT_CLASSES}
                required=true
            />
        </div>
    }
}

/// Creation form for a new tournament.
///
/// Submitting emits the draft and then closes the form straight away; the
/// outcome of the create request is reported by the dashboard, not here.
#[function_component(TournamentForm)]
pub fn tournament_form(props: &TournamentFormProps) -> Html {
    let store = use_reducer(DraftStore::default);
    let draft = &store.draft;

    let on_change = {
        let dispatcher = store.dispatcher();
        Callback::from(move |(field, value): (DraftField, String)| {
            dispatcher.dispatch(DraftAction::Set(field, value));
        })
    };

    let on_status_change = {
        let on_change = on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit((DraftField::Status, select.value()));
        })
    };

    let onsubmit = {
        let store = store.clone();
        let on_submit = props.on_submit.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Some(checked) = store.submission() {
                on_submit.emit(checked);
                on_close.emit(());
            }
        })
    };

    let on_cancel = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <form onsubmit={onsubmit} class="space-y-4">
            <TextField
                field={DraftField::Title}
                label="Title"
                placeholder={"Tournament Title"}
                value={draft.title.clone()}
                on_change={on_change.clone()}
            />
            <TextField
                field={DraftField::GameName}
                label="Game Name"
                placeholder={"Game Name"}
                value={draft.game_name.clone()}
                on_change={on_change.clone()}
            />
            <TextField
                field={DraftField::Date}
                label="Date"
                input_type="date"
                value={draft.date.clone()}
                on_change={on_change.clone()}
            />
            <TextField
                field={DraftField::PrizePool}
                label="Prize Pool ($)"
                input_type="number"
                placeholder={"Prize Pool"}
                value={store.prize_pool_text.clone()}
                on_change={on_change.clone()}
            />
            <div>
                <label for={DraftField::Status.name()} class="block text-sm mb-1">{"Status"}</label>
                <select
                    id={DraftField::Status.name()}
                    name={DraftField::Status.name()}
                    onchange={on_status_change}
                    class={INPUT_CLASSES}
                    aria-label="Status"
                >
                    {for [TournamentStatus::Upcoming, TournamentStatus::Completed].into_iter().map(|status| html! {
                        <option
                            value={status.as_str().to_string()}
                            selected={draft.status == status}
                        >
                            {status.as_str().to_string()}
                        </option>
                    })}
                </select>
            </div>
            <TextField
                field={DraftField::Description}
                label="Description"
                placeholder={"Description"}
                value={draft.description.clone()}
                on_change={on_change}
            />
            <div class="flex gap-2">
                <button type="submit" class="bg-[#01a74b] hover:bg-[#018a3d] w-full py-2 rounded">
                    {"Submit"}
                </button>
                <button type="button" onclick={on_cancel} class="bg-zinc-700 hover:bg-zinc-600 w-full py-2 rounded">
                    {"Cancel"}
                </button>
            </div>
        </form>
    }
}
