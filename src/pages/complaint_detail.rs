use leptos::*;
use leptos_router::*;

use crate::api::use_api;
use crate::components::layout::{Card, EmptyState, LoadingSpinner, PageHeader};
use crate::types::Complaint;
use crate::utils::{format_datetime, humanize_category};

#[component]
pub fn ComplaintDetailPage() -> impl IntoView {
    let api = use_api();
    let params = use_params_map();
    let complaint_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());

    let complaint = create_resource(complaint_id, move |id| {
        let api = api.clone();
        async move { api.get_complaint(&id).await }
    });

    view! {
        <div class="page-container">
            <PageHeader title="Issue Details"/>
            {move || match complaint.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(Err(e)) => {
                    view! { <EmptyState message=e.user_message("Issue not found")/> }.into_view()
                }
                Some(Ok(c)) => view! { <ComplaintCard complaint=c/> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn ComplaintCard(complaint: Complaint) -> impl IntoView {
    view! {
        <Card title=complaint.complaint_id.clone()>
            <p>
                <strong>"Category: "</strong>
                {humanize_category(&complaint.category)}
            </p>
            <p>
                <strong>"Location: "</strong>
                {complaint.display_location()}
            </p>
            <p>
                <strong>"Priority: "</strong>
                <span class=format!("priority-badge priority-{}", complaint.priority.as_str())>
                    {complaint.priority.label()}
                </span>
            </p>
            <p>
                <strong>"Status: "</strong>
                {complaint.status.label()}
            </p>
            <p>
                <strong>"Reported: "</strong>
                {format_datetime(&complaint.created_at)}
            </p>
            <p>{complaint.description}</p>
        </Card>
    }
}
