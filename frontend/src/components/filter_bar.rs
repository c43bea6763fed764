use shared::{LocationSet, TorneoFilter, KNOWN_GAMES};
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct FilterBarProps {
    pub filter: TorneoFilter,
    pub locations: LocationSet,
    pub on_change: Callback<TorneoFilter>,
    pub on_clear_date: Callback<()>,
    pub on_clear_all: Callback<()>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_fecha = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_change.emit(TorneoFilter {
                fecha: input.value(),
                ..filter.clone()
            });
        })
    };

    let on_ubicacion = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(TorneoFilter {
                ubicacion: select.value(),
                ..filter.clone()
            });
        })
    };

    let on_juego = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            on_change.emit(TorneoFilter {
                juego: select.value(),
                ..filter.clone()
            });
        })
    };

    html! {
        <div class="filtros bg-white rounded-lg shadow-sm p-4 mb-6 flex flex-col md:flex-row gap-4">
            <div class="flex gap-2 items-center">
                <input
                    type="date"
                    id="filtro-fecha"
                    name="filtro-fecha"
                    value={props.filter.fecha.clone()}
                    onchange={on_fecha}
                    class="px-4 py-2 border border-gray-300 rounded-lg"
                />
                <button onclick={props.on_clear_date.reform(|_| ())} class="px-3 py-2 border border-gray-300 rounded-lg">
                    {"✕"}
                </button>
            </div>

            <select id="filtro-ubicacion" name="filtro-ubicacion" onchange={on_ubicacion} class="px-4 py-2 border border-gray-300 rounded-lg">
                <option value="" selected={props.filter.ubicacion.is_empty()}>{"Todas las ubicaciones"}</option>
                {for props.locations.iter().map(|ubicacion| html! {
                    <option value={ubicacion.to_string()} selected={props.filter.ubicacion == ubicacion}>
                        {ubicacion}
                    </option>
                })}
            </select>

            <select id="filtro-juego" name="filtro-juego" onchange={on_juego} class="px-4 py-2 border border-gray-300 rounded-lg">
                <option value="" selected={props.filter.juego.is_empty()}>{"Todos los juegos"}</option>
                {for KNOWN_GAMES.iter().map(|juego| html! {
                    <option value={*juego} selected={props.filter.juego == *juego}>{*juego}</option>
                })}
            </select>

            <button onclick={props.on_clear_all.reform(|_| ())} class="px-4 py-2 border border-gray-300 rounded-lg hover:bg-gray-50">
                {"Limpiar filtros"}
            </button>
        </div>
    }
}
