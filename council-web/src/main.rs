use frontend::app::App;
use frontend::logging;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(CouncilApp)]
fn council_app() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    logging::install_panic_hook();
    if let Err(err) = logging::init(logging::level_from_env()) {
        web_sys::console::error_1(&format!("Logger already installed: {err}").into());
    }

    log::info!("Starting LLM Council");

    let Some(body) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    else {
        log::error!("No document body to mount into");
        return;
    };

    Renderer::<CouncilApp>::with_root(body.into()).render();
}
