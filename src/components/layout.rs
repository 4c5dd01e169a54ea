use leptos::*;
use leptos_router::*;

use crate::auth::{logout, use_session};

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app-shell">
            <NavBar/>
            <main>
                {children()}
            </main>
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let on_logout = move |_| {
        logout(session);
        navigate("/login", Default::default());
    };

    view! {
        <nav class="navbar">
            <a href="/" class="navbar-brand">"🎓 Campus Help Desk"</a>
            <div class="navbar-links">
                {move || {
                    let s = session.get();
                    if s.is_authenticated() {
                        view! {
                            <a href="/complaints/new">"Report Issue"</a>
                            <a href="/dashboard">"Dashboard"</a>
                            <span>{s.display_name()}</span>
                            <button class="btn btn-secondary" on:click=on_logout.clone()>
                                "Logout"
                            </button>
                        }
                        .into_view()
                    } else {
                        view! {
                            <a href="/login">"Login"</a>
                            <a href="/register">"Register"</a>
                        }
                        .into_view()
                    }
                }}
            </div>
        </nav>
    }
}

#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <h1>{title}</h1>
            {description.map(|desc| view! { <p>{desc}</p> })}
        </div>
    }
}

#[component]
pub fn Card(#[prop(optional)] title: Option<String>, children: Children) -> impl IntoView {
    view! {
        <div class="card">
            {title.map(|t| view! { <h3 class="card-title">{t}</h3> })}
            {children()}
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="spinner">
            <h2>"Loading..."</h2>
        </div>
    }
}

#[component]
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">{message}</div>
    }
}
