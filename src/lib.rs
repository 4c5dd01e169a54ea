// Campus Help Desk - browser UI for the campus issue-tracking portal
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

pub mod api;
pub mod auth;
pub mod components;
pub mod pages;
pub mod types;
pub mod utils;

use components::layout::Layout;
use components::notifications::{provide_toasts, ToastHost};
use pages::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let session = auth::provide_session();
    api::provide_api_client(session);
    provide_toasts();

    view! {
        <Title text="Campus Help Desk"/>
        <Meta name="description" content="Report and track campus issues"/>
        <Meta name="viewport" content="width=device-width, initial-scale=1"/>

        <Router>
            <Layout>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/register" view=RegisterPage/>
                    <Route path="/dashboard" view=AdminDashboardPage/>
                    <Route path="/complaints/new" view=CreateComplaintPage/>
                    <Route path="/complaint/:id" view=ComplaintDetailPage/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Layout>
        </Router>
        <ToastHost/>
    }
}
