use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub is_open: bool,
    pub title: String,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.is_open {
        return html! {};
    }

    let on_overlay_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = {
        Callback::from(|e: MouseEvent| {
            e.stop_propagation();
        })
    };

    html! {
        <div class="modal-overlay fixed inset-0 z-50 flex items-center justify-center">
            <div
                class="absolute inset-0 bg-black bg-opacity-50"
                onclick={on_overlay_click}
            ></div>
            <div
                class="relative bg-zinc-900 text-white p-6 rounded-lg w-full max-w-md mx-4"
                onclick={on_modal_click}
            >
                <h2 class="text-2xl font-bold text-[#01a74b] mb-4">{&props.title}</h2>
                {props.children.clone()}
            </div>
        </div>
    }
}
