// Page components
use leptos::*;
use leptos_router::*;

use crate::auth::use_session;

pub mod admin_dashboard;
pub mod complaint_detail;
pub mod create_complaint;
pub mod login;
pub mod register;

pub use admin_dashboard::AdminDashboardPage;
pub use complaint_detail::ComplaintDetailPage;
pub use create_complaint::CreateComplaintPage;
pub use login::LoginPage;
pub use register::RegisterPage;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    create_effect(move |_| {
        if session.get().is_authenticated() {
            navigate("/dashboard", Default::default());
        } else {
            navigate("/login", Default::default());
        }
    });

    view! { <div class="spinner">"Redirecting..."</div> }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page-container">
            <div class="empty-state">
                <h1>"404"</h1>
                <h2>"Page not found"</h2>
                <p>"The page you're looking for doesn't exist."</p>
                <a href="/dashboard" class="btn btn-primary">"Go to Dashboard"</a>
            </div>
        </div>
    }
}
