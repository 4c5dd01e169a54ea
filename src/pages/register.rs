use leptos::*;
use leptos_router::*;

use crate::api::use_api;
use crate::auth::{establish, use_session};
use crate::components::notifications::use_toasts;
use crate::types::{RegisterDraft, RegisterRequest};

/// Static weekly numbers shown in the hero panel.
const HERO_BARS: [(&str, u32, u32); 5] = [
    ("Mon", 45, 24),
    ("Tue", 52, 18),
    ("Wed", 38, 20),
    ("Thu", 65, 15),
    ("Fri", 48, 12),
];

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let username = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let confirm_password = create_rw_signal(String::new());
    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());
    let role = create_rw_signal("student".to_string());

    let register = create_action(move |req: &RegisterRequest| {
        let req = req.clone();
        let api = api.clone();
        let navigate = navigate.clone();
        async move {
            match api.register(&req).await {
                Ok(payload) => {
                    establish(session, payload.data, payload.token);
                    toasts.success("Registration successful! Welcome to Campus Help Desk.");
                    navigate("/dashboard", Default::default());
                }
                Err(e) => {
                    log::warn!("registration failed: {}", e);
                    toasts.error(e.user_message("Registration failed"));
                }
            }
        }
    });
    let loading = register.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = RegisterDraft {
            username: username.get(),
            email: email.get(),
            password: password.get(),
            confirm_password: confirm_password.get(),
            first_name: first_name.get(),
            last_name: last_name.get(),
            phone: phone.get(),
            role: role.get(),
        };
        match draft.validate() {
            Ok(req) => register.dispatch(req),
            Err(message) => toasts.error(message),
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-hero">
                <h1>"Join Our Campus Community."</h1>
                <p>
                    "Sign up to report issues instantly, track resolutions in real-time, \
                     and make your voice heard for a better campus environment."
                </p>
                <HeroChart/>
            </div>

            <div class="auth-form-section">
                <div class="auth-card card">
                    <h2>"Create Account"</h2>
                    <p>"Get started with Campus Help Desk"</p>

                    <form on:submit=on_submit>
                        <div class="form-row">
                            <Field
                                label="First Name"
                                value=first_name
                                placeholder="First name"
                                required=true
                            />
                            <Field
                                label="Last Name"
                                value=last_name
                                placeholder="Last name"
                                required=true
                            />
                        </div>
                        <div class="form-row">
                            <Field
                                label="Username"
                                value=username
                                placeholder="Username"
                                required=true
                            />
                            <Field label="Phone (Optional)" value=phone placeholder="Mobile number"/>
                        </div>
                        <Field
                            label="Email Address"
                            value=email
                            placeholder="student@college.edu"
                            input_type="email"
                            required=true
                        />
                        <div class="form-row">
                            <Field
                                label="Password"
                                value=password
                                placeholder="••••••••"
                                input_type="password"
                                required=true
                            />
                            <Field
                                label="Confirm"
                                value=confirm_password
                                placeholder="••••••••"
                                input_type="password"
                                required=true
                            />
                        </div>

                        <RolePicker role=role/>

                        <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                            {move || {
                                if loading.get() {
                                    "Creating Account...".to_string()
                                } else if role.get() == "staff" {
                                    "Sign Up as Staff".to_string()
                                } else {
                                    "Sign Up as Student".to_string()
                                }
                            }}
                        </button>
                    </form>

                    <p>
                        "Already have an account? "
                        <a href="/login">"Login here"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}

#[component]
fn Field(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] input_type: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let input_type = if input_type.is_empty() {
        "text".to_string()
    } else {
        input_type
    };
    view! {
        <div class="form-group">
            <label>{label}</label>
            <input
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
fn RolePicker(role: RwSignal<String>) -> impl IntoView {
    let options = [
        ("student", "🎓", "Student"),
        ("staff", "👔", "Staff"),
    ];

    view! {
        <div class="form-group">
            <label>"I am joining as"</label>
            <div class="role-picker">
                {options
                    .into_iter()
                    .map(|(value, icon, text)| {
                        view! {
                            <div
                                class="role-option"
                                class:selected=move || role.get() == value
                                on:click=move |_| role.set(value.to_string())
                            >
                                <div>{icon}</div>
                                <div>{text}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn HeroChart() -> impl IntoView {
    view! {
        <div class="card">
            <h3>"Impact Overview"</h3>
            <div class="hero-chart">
                {HERO_BARS
                    .into_iter()
                    .map(|(day, solved, pending)| {
                        view! {
                            <div class="hero-bar-group">
                                <div
                                    class="hero-bar solved"
                                    style=format!("height: {}%", solved)
                                ></div>
                                <div
                                    class="hero-bar pending"
                                    style=format!("height: {}%", pending)
                                ></div>
                                <span>{day}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
