use leptos::*;
use leptos_router::*;

use crate::components::complaint_form::ComplaintForm;
use crate::components::layout::PageHeader;

#[component]
pub fn CreateComplaintPage() -> impl IntoView {
    let navigate = use_navigate();

    let on_success = Callback::new(move |complaint_id: String| {
        navigate(&format!("/complaint/{}", complaint_id), Default::default());
    });

    view! {
        <div class="page-container">
            <PageHeader
                title="🎓 Report Campus Issue"
                description="Tell us what's broken and we'll route it to the right team.".to_string()
            />
            <div class="card">
                <ComplaintForm on_success=on_success/>
            </div>
        </div>
    }
}
