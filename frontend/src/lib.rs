pub mod styles;
pub mod hooks;
pub mod components;
pub mod pages;
pub mod config;
pub mod location;

use yew::prelude::*;
use yew_router::prelude::*;
use crate::pages::roulette::RoulettePage;

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
   #[at("/")] Roulette,
   #[at("/index.html")] Index,
   #[not_found]
   #[at("/404")] NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <div class="min-h-screen w-full bg-gray-50 dark:bg-gray-900">
                <div class="mx-auto">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}

/// Sends unknown paths home, keeping the query so `?data=` survives.
#[function_component(NotFound)]
fn not_found() -> Html {
    let navigator = use_navigator();
    let location = use_location();

    use_effect_with((), move |_| {
        if let Some(navigator) = navigator {
            let query = location
                .and_then(|l| l.query::<Vec<(String, String)>>().ok())
                .unwrap_or_default();
            if let Err(e) = navigator.replace_with_query(&Route::Roulette, &query) {
                log::warn!("could not carry query over to home: {:?}", e);
                navigator.replace(&Route::Roulette);
            }
        }
        || ()
    });

    html! {}
}

pub fn switch(route: Route) -> Html {
   match route {
       Route::Roulette | Route::Index => html! { <RoulettePage /> },
       Route::NotFound => html! { <NotFound /> },
   }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_html_opens_the_wheel() {
        assert_eq!(Route::recognize("/"), Some(Route::Roulette));
        assert_eq!(Route::recognize("/index.html"), Some(Route::Index));
        assert_eq!(Route::recognize("/somewhere/else"), Some(Route::NotFound));
    }
}
