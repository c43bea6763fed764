use crate::api::torneos::HttpTorneoApi;
use crate::components::common_toast::ToastContext;
use crate::components::filter_bar::FilterBar;
use crate::components::torneo_grid::TorneoGrid;
use crate::components::torneo_modal::TorneoModal;
use crate::config::Config;
use crate::form::TorneoField;
use crate::notifications::{ToastNotifier, WindowPrompt};
use crate::panel::TorneoPanel;
use log::debug;
use shared::TorneoFilter;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

type Panel = TorneoPanel<HttpTorneoApi>;

#[function_component(TorneosPage)]
pub fn torneos_page() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let panel: Rc<Panel> = {
        let add_toast = toast_context.add_toast.clone();
        use_memo((), move |_| {
            TorneoPanel::new(
                HttpTorneoApi,
                Rc::new(ToastNotifier::new(add_toast)),
                Rc::new(WindowPrompt),
            )
        })
    };
    let rerender = use_force_update();

    // Initial load
    {
        let panel = panel.clone();
        let rerender = rerender.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                panel.load(Config::seed_dummy_on_start()).await;
                rerender.force_update();
            });
            || ()
        });
    }

    let on_filter_change = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |filter: TorneoFilter| {
            panel.apply_filter(filter);
            rerender.force_update();
        })
    };

    let on_clear_date = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            let panel = panel.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                panel.clear_date_filter().await;
                rerender.force_update();
            });
        })
    };

    let on_clear_all = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            let panel = panel.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                panel.clear_filters().await;
                rerender.force_update();
            });
        })
    };

    let on_new = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            panel.open_for_create();
            rerender.force_update();
        })
    };

    let on_edit = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |id: i64| {
            if panel.open_for_edit(id).is_ok() {
                rerender.force_update();
            }
        })
    };

    let delete = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |id: Option<i64>| {
            let panel = panel.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                if let Err(e) = panel.delete(id).await {
                    debug!("Delete not sent: {}", e);
                }
                rerender.force_update();
            });
        })
    };

    let on_field = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |(field, value): (TorneoField, String)| {
            panel.set_field(field, value);
            rerender.force_update();
        })
    };

    let on_submit = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            let panel = panel.clone();
            let rerender = rerender.clone();
            spawn_local(async move {
                if let Err(e) = panel.submit().await {
                    debug!("Submit not sent: {}", e);
                }
                rerender.force_update();
            });
        })
    };

    let on_close = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |_| {
            panel.close();
            rerender.force_update();
        })
    };

    let on_dismiss = {
        let panel = panel.clone();
        let rerender = rerender.clone();
        Callback::from(move |on_backdrop: bool| {
            if panel.dismiss(on_backdrop) {
                rerender.force_update();
            }
        })
    };

    let snapshot = panel.snapshot();
    let today = chrono::Local::now().date_naive();

    html! {
        <div class="min-h-screen bg-gray-50">
            <header class="p-4 sticky top-0 z-40 bg-white shadow-sm">
                <div class="container mx-auto flex justify-between items-center flex-wrap gap-3">
                    <h1 class="text-xl font-medium">{"Torneos"}</h1>
                    <button onclick={on_new} class="px-6 py-2 bg-blue-600 text-white rounded-lg hover:bg-blue-700">
                        {"Nuevo torneo"}
                    </button>
                </div>
            </header>

            <main class="container mx-auto px-4 py-6">
                <FilterBar
                    filter={panel.filter()}
                    locations={snapshot.locations.clone()}
                    on_change={on_filter_change}
                    on_clear_date={on_clear_date}
                    on_clear_all={on_clear_all}
                />
                <TorneoGrid
                    view={panel.grid()}
                    snapshot={snapshot.clone()}
                    today={today}
                    on_edit={on_edit}
                    on_delete={delete.reform(Some)}
                />
            </main>

            <TorneoModal
                form={panel.form()}
                on_field={on_field}
                on_submit={on_submit}
                on_delete={delete.reform(|_| None)}
                on_close={on_close}
                on_dismiss={on_dismiss}
            />
        </div>
    }
}
