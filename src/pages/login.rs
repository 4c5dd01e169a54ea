use leptos::*;
use leptos_router::*;

use crate::api::use_api;
use crate::auth::{establish, use_session};
use crate::components::forms::TextInput;
use crate::components::layout::Card;
use crate::components::notifications::use_toasts;
use crate::types::LoginRequest;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());

    let login = create_action(move |req: &LoginRequest| {
        let req = req.clone();
        let api = api.clone();
        let navigate = navigate.clone();
        async move {
            match api.login(&req).await {
                Ok(payload) => {
                    establish(session, payload.data, payload.token);
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    log::warn!("login failed: {}", e);
                    toasts.error(e.user_message("Invalid credentials"));
                }
            }
        }
    });
    let loading = login.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        login.dispatch(LoginRequest {
            email: email.get(),
            password: password.get(),
        });
    };

    view! {
        <div class="auth-form-section">
            <div class="auth-card">
                <Card>
                    <h2>"Sign in to Campus Help Desk"</h2>
                    <form on:submit=on_submit>
                        <TextInput
                            label="Email address"
                            name="email"
                            value=email
                            input_type="email"
                            placeholder="student@college.edu"
                            required=true
                        />
                        <TextInput
                            label="Password"
                            name="password"
                            value=password
                            input_type="password"
                            placeholder="Password"
                            required=true
                        />
                        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                            {move || if loading.get() { "Signing in..." } else { "Sign in" }}
                        </button>
                    </form>
                    <p>
                        "New here? "
                        <a href="/register">"Create an account"</a>
                    </p>
                </Card>
            </div>
        </div>
    }
}
