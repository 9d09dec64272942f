use log::{info, Level};
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod countdown;
mod components {
    pub mod contact;
    pub mod countdown;
    pub mod navbar;
}
mod pages {
    pub mod home;
}

use pages::home::Home;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home | Route::NotFound => {
            html! { <Home /> }
        }
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(Level::Info).expect("failed to initialize logging");
    info!("starting spectrum site");
    yew::Renderer::<App>::new().render();
}
