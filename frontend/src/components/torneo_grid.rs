use crate::components::torneo_card::TorneoCard;
use crate::panel::GridView;
use crate::store::Snapshot;
use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use shared::FilterOutcome;
use std::rc::Rc;
use web_sys::Element;
use yew::prelude::*;

pub const NO_MATCHES_MESSAGE: &str = "No hay torneos que coincidan con los filtros";
pub const EMPTY_MESSAGE: &str = "Todavía no hay torneos";

lazy_static! {
    static ref EDIT_HANDLER_REGEX: Regex = Regex::new(r"abrirFormulario\(\s*(\d+)\s*\)").unwrap();
}

/// Torneo id targeted by an edit button of the server-rendered markup,
/// whose inline handler reads `abrirFormulario(<id>)`
pub fn edit_target(handler: &str) -> Option<i64> {
    EDIT_HANDLER_REGEX
        .captures(handler)
        .and_then(|caps| caps.get(1))
        .and_then(|id| id.as_str().parse().ok())
}

/// Message shown instead of cards, if any
pub fn empty_state(outcome: &FilterOutcome<'_>) -> Option<&'static str> {
    match outcome {
        FilterOutcome::NoMatches => Some(NO_MATCHES_MESSAGE),
        FilterOutcome::All(records) if records.is_empty() => Some(EMPTY_MESSAGE),
        _ => None,
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct TorneoGridProps {
    pub view: GridView,
    pub snapshot: Rc<Snapshot>,
    pub today: NaiveDate,
    pub on_edit: Callback<i64>,
    pub on_delete: Callback<i64>,
}

#[function_component(TorneoGrid)]
pub fn torneo_grid(props: &TorneoGridProps) -> Html {
    let message = |class: &'static str, text: String| {
        html! { <p class={classes!("mensaje-carga", "col-span-full", class)}>{text}</p> }
    };

    match &props.view {
        GridView::Loading => message("", "Cargando torneos...".to_string()),
        GridView::Failed(error) => html! {
            <div class="bg-red-50 border border-red-200 rounded-lg p-4 col-span-full">
                <h3 class="text-sm font-medium text-red-800">{"Error al cargar torneos"}</h3>
                <div class="mt-1 text-sm text-red-700">{error}</div>
            </div>
        },
        GridView::Server(markup) => {
            // Edit buttons in server markup call a page-global function; route
            // their clicks to the form instead.
            let on_click = {
                let on_edit = props.on_edit.clone();
                Callback::from(move |e: MouseEvent| {
                    let Some(target) = e.target_dyn_into::<Element>() else {
                        return;
                    };
                    let handler = target
                        .closest("button")
                        .ok()
                        .flatten()
                        .and_then(|button| button.get_attribute("onclick"));
                    if let Some(id) = handler.as_deref().and_then(edit_target) {
                        e.prevent_default();
                        on_edit.emit(id);
                    }
                })
            };
            html! {
                <div id="grid-torneos" class="grid-torneos" onclick={on_click}>
                    {Html::from_html_unchecked(AttrValue::from(markup.clone()))}
                </div>
            }
        }
        GridView::Local(filter) => {
            let outcome = filter.apply(&props.snapshot.torneos);
            if let Some(text) = empty_state(&outcome) {
                return html! {
                    <div id="grid-torneos" class="grid-torneos">
                        {message("sin-resultados", text.to_string())}
                    </div>
                };
            }
            html! {
                <div id="grid-torneos" class="grid-torneos">
                    {for outcome.records().iter().map(|torneo| html! {
                        <TorneoCard
                            key={torneo.id}
                            torneo={(*torneo).clone()}
                            today={props.today}
                            on_edit={props.on_edit.clone()}
                            on_delete={props.on_delete.clone()}
                        />
                    })}
                </div>
            }
        }
    }
}
