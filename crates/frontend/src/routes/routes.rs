use crate::domain::a001_contact::ui::add::AddContactPage;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <main class="not-found">
            <h2>"Page not found"</h2>
            <a href="/add">"Add a New Contact"</a>
        </main>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/add" /> } />
                <Route path=path!("/add") view=AddContactPage />
            </Routes>
        </Router>
    }
}
