use crate::form::{FormController, TorneoField};
use shared::KNOWN_GAMES;
use web_sys::{Element, HtmlInputElement};
use yew::prelude::*;

const BACKDROP_ID: &str = "modal";

#[derive(Properties, Clone, PartialEq)]
pub struct TorneoModalProps {
    pub form: FormController,
    pub on_field: Callback<(TorneoField, String)>,
    pub on_submit: Callback<()>,
    pub on_delete: Callback<()>,
    pub on_close: Callback<()>,
    /// Any click on the modal area; `true` when it landed on the backdrop
    pub on_dismiss: Callback<bool>,
}

#[function_component(TorneoModal)]
pub fn torneo_modal(props: &TorneoModalProps) -> Html {
    if !props.form.is_open() {
        return html! {};
    }

    let on_backdrop_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |e: MouseEvent| {
            let on_backdrop = e
                .target_dyn_into::<Element>()
                .map(|target| target.id() == BACKDROP_ID)
                .unwrap_or(false);
            on_dismiss.emit(on_backdrop);
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let field_input = |field: TorneoField| {
        let on_input = {
            let on_field = props.on_field.clone();
            Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_field.emit((field, input.value()));
            })
        };
        let list = (field == TorneoField::TipoJuego).then_some("juegos-conocidos");
        html! {
            <label class="block mb-3">
                <span class="block text-sm font-medium text-gray-700">{field.label()}</span>
                <input
                    id={field.name()}
                    name={field.name()}
                    type={field.input_type()}
                    list={list}
                    required={field.required()}
                    value={props.form.value(field).to_string()}
                    oninput={on_input}
                    class="w-full px-3 py-2 border border-gray-300 rounded-lg"
                />
            </label>
        }
    };

    html! {
        <div id={BACKDROP_ID} class="fixed inset-0 z-50 flex items-center justify-center bg-black bg-opacity-50" onclick={on_backdrop_click}>
            <div class="relative bg-white rounded-lg shadow-xl p-6 max-w-lg w-full mx-4">
                <h2 id="titulo-modal" class="text-lg font-medium text-gray-900 mb-4">{props.form.title()}</h2>
                <form id="formulario-torneo" onsubmit={on_submit}>
                    {for TorneoField::ALL.into_iter().map(field_input)}
                    <datalist id="juegos-conocidos">
                        {for KNOWN_GAMES.iter().map(|juego| html! { <option value={*juego} /> })}
                    </datalist>
                    <div class="flex justify-end gap-2 mt-4">
                        if props.form.current_id().is_some() {
                            <button type="button" onclick={props.on_delete.reform(|_| ())} class="btn-eliminar px-4 py-2 rounded-md">
                                {"Eliminar"}
                            </button>
                        }
                        <button type="button" onclick={props.on_close.reform(|_| ())} class="px-4 py-2 border border-gray-300 rounded-md">
                            {"Cancelar"}
                        </button>
                        <button type="submit" class="px-4 py-2 bg-blue-600 text-white rounded-md">
                            {"Guardar"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
