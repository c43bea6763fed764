use chrono::{Locale, NaiveDate};
use shared::models::torneo::FECHA_FORMAT;
use shared::Torneo;
use yew::prelude::*;

/// Long-ish Spanish date, e.g. `sáb, 1 jun 2024`
pub fn format_fecha(fecha: &str) -> String {
    match NaiveDate::parse_from_str(fecha.trim(), FECHA_FORMAT) {
        Ok(date) => date.format_localized("%a, %-d %b %Y", Locale::es_ES).to_string(),
        Err(_) => fecha.to_string(),
    }
}

/// Placeholder background for cards without an image
pub fn game_gradient(tipo_juego: &str) -> &'static str {
    match tipo_juego {
        "Pokemon" => "from-yellow-400 to-orange-500",
        "One Piece" => "from-blue-400 to-cyan-500",
        "Yu-Gi-Oh" => "from-purple-500 to-pink-500",
        "Magic" => "from-red-500 to-orange-600",
        _ => "from-gray-400 to-gray-600",
    }
}

/// Everything a tarjeta displays, derived from one torneo
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub id: i64,
    pub nombre_tienda: String,
    pub tipo_juego: String,
    pub categoria: String,
    pub tipo_torneo: String,
    pub fecha: String,
    pub hora: String,
    pub ubicacion: String,
    pub premio: String,
    pub imagen: Option<String>,
    pub gradient: &'static str,
    pub upcoming: bool,
}

impl CardView {
    pub fn new(torneo: &Torneo, today: NaiveDate) -> Self {
        Self {
            id: torneo.id,
            nombre_tienda: torneo.nombre_tienda.clone(),
            tipo_juego: torneo.tipo_juego.clone(),
            categoria: torneo.categoria.clone(),
            tipo_torneo: torneo.tipo_torneo.clone(),
            fecha: format_fecha(&torneo.fecha),
            hora: torneo.hora.clone(),
            ubicacion: torneo.ubicacion_display().to_string(),
            premio: torneo.premio_display().to_string(),
            imagen: torneo.imagen_url().map(str::to_string),
            gradient: game_gradient(&torneo.tipo_juego),
            upcoming: torneo.is_upcoming(today),
        }
    }

    pub fn status_badge(&self) -> (&'static str, &'static str) {
        if self.upcoming {
            ("bg-red-500", "PROX")
        } else {
            ("bg-gray-400", "PAST")
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct TorneoCardProps {
    pub torneo: Torneo,
    pub today: NaiveDate,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(TorneoCard)]
pub fn torneo_card(props: &TorneoCardProps) -> Html {
    let view = CardView::new(&props.torneo, props.today);
    let (badge_class, badge_text) = view.status_badge();

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = view.id;
        Callback::from(move |_: MouseEvent| on_edit.emit(id))
    };
    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = view.id;
        Callback::from(move |_: MouseEvent| on_delete.emit(id))
    };

    let info = |label: &'static str, value: &str| {
        html! {
            <div class="info-item">
                <div class="info-label">{label}</div>
                <div class="info-value">{value.to_string()}</div>
            </div>
        }
    };

    html! {
        <div class="tarjeta-torneo bg-white rounded-xl shadow-lg overflow-hidden">
            <div class="relative">
                <div class={classes!("absolute", "top-3", "left-3", "z-10", "text-white", "text-xs", "font-bold", "px-3", "py-1", "rounded-full", badge_class)}>
                    {badge_text}
                </div>
                if let Some(src) = view.imagen.clone() {
                    <img src={src} alt={view.nombre_tienda.clone()} class="w-full h-48 object-cover" />
                } else {
                    <div class={classes!("h-48", "bg-gradient-to-br", view.gradient)}></div>
                }
            </div>

            <div class="tarjeta-header p-4">
                <h3 class="tarjeta-titulo">{&view.nombre_tienda}</h3>
            </div>

            <div class="tarjeta-badges">
                <span class="badge-juego">{&view.tipo_juego}</span>
                <span class="badge-categoria">{&view.categoria}</span>
                <span class="badge-tipo">{&view.tipo_torneo}</span>
            </div>

            <div class="tarjeta-info">
                {info("Fecha", &view.fecha)}
                {info("Hora", &view.hora)}
                {info("Ubicación", &view.ubicacion)}
                {info("Premio", &view.premio)}
            </div>

            <div class="tarjeta-acciones">
                <button class="btn-editar" onclick={on_edit}>{"Editar"}</button>
                <button class="btn-eliminar" onclick={on_delete}>{"Eliminar"}</button>
            </div>
        </div>
    }
}
