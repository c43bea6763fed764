use yew::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <h1>{"404 - Página no encontrada"}</h1>
            <p>{"La página que buscas no existe."}</p>
            <a href="/">{"Volver a los torneos"}</a>
        </div>
    }
}
