// Shared issue report form
//
// Used by the standalone report page and inlined in the admin dashboard;
// only the post-success behavior differs between the two call sites.
use leptos::*;

use crate::api::use_api;
use crate::components::forms::{SelectField, TextArea, TextInput};
use crate::components::image_upload::ImagePicker;
use crate::components::notifications::use_toasts;
use crate::types::{
    ComplaintDraft, CreateComplaintRequest, IssueLocation, Priority, CATEGORY_OPTIONS,
    MAX_DESCRIPTION_LEN,
};

const LOCATION_OPTIONS: &[(&str, &str)] = &[
    ("Classroom", "Classroom"),
    ("Hostel", "Hostel"),
    ("Laboratory", "Laboratory"),
    ("Library", "Library"),
    ("Common Area", "Common Area"),
    ("Other", "Other"),
];

const PRIORITY_OPTIONS: &[(&str, &str)] = &[
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
];

/// Collects a complaint draft, validates it locally, and submits it.
/// `on_success` receives the identifier of the created complaint.
#[component]
pub fn ComplaintForm(
    on_success: Callback<String>,
    #[prop(optional)] on_cancel: Option<Callback<()>>,
) -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();

    let category = create_rw_signal("classroom_issues".to_string());
    let custom_category = create_rw_signal(String::new());
    let description = create_rw_signal(String::new());
    let priority = create_rw_signal("medium".to_string());
    let student_id = create_rw_signal(String::new());
    let department = create_rw_signal(String::new());
    let building_name = create_rw_signal(String::new());
    let room_number = create_rw_signal(String::new());
    let issue_location = create_rw_signal("Classroom".to_string());
    let image_url = create_rw_signal(String::new());

    let submit = create_action(move |req: &CreateComplaintRequest| {
        let req = req.clone();
        let api = api.clone();
        async move {
            match api.create_complaint(&req).await {
                Ok(created) => {
                    toasts.success("Issue reported successfully!");
                    on_success.call(created.route_id().to_string());
                }
                Err(e) => {
                    log::warn!("complaint submission failed: {}", e);
                    toasts.error(e.user_message("Failed to submit issue"));
                }
            }
        }
    });
    let loading = submit.pending();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = ComplaintDraft {
            category: category.get(),
            custom_category: custom_category.get(),
            description: description.get(),
            priority: Priority::parse(&priority.get()).unwrap_or_default(),
            student_id: student_id.get(),
            department: department.get(),
            building_name: building_name.get(),
            room_number: room_number.get(),
            issue_location: IssueLocation::parse(&issue_location.get()).unwrap_or_default(),
            image_url: image_url.get(),
        };
        match draft.validate() {
            Ok(req) => submit.dispatch(req),
            Err(message) => toasts.error(message),
        }
    };

    view! {
        <form on:submit=on_submit>
            <div class="form-row">
                <TextInput
                    label="Student ID"
                    name="studentId"
                    value=student_id
                    placeholder="e.g. STU-2024-001"
                    required=true
                />
                <TextInput
                    label="Department"
                    name="department"
                    value=department
                    placeholder="e.g. Computer Science"
                />
            </div>

            <SelectField
                label="Issue Category"
                name="category"
                value=category
                options=CATEGORY_OPTIONS
                required=true
            />
            {move || (category.get() == "other").then(|| view! {
                <TextInput
                    label="Custom Category"
                    name="customCategory"
                    value=custom_category
                    placeholder="Please specify the category"
                    required=true
                />
            })}

            <div class="form-row">
                <SelectField
                    label="Location Type"
                    name="issueLocation"
                    value=issue_location
                    options=LOCATION_OPTIONS
                    required=true
                />
                <TextInput
                    label="Building Name"
                    name="buildingName"
                    value=building_name
                    placeholder="e.g. Academic Block A"
                />
                <TextInput
                    label="Room Number"
                    name="roomNumber"
                    value=room_number
                    placeholder="e.g. 101"
                />
            </div>

            <TextArea
                label="Issue Description"
                name="description"
                value=description
                placeholder="Describe the issue in detail..."
                required=true
                max_len=MAX_DESCRIPTION_LEN
            />

            <SelectField
                label="Priority"
                name="priority"
                value=priority
                options=PRIORITY_OPTIONS
            />

            <ImagePicker label="Upload Image (Optional)" value=image_url/>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" disabled=move || loading.get()>
                    {move || if loading.get() { "Submitting..." } else { "Submit Issue" }}
                </button>
                {on_cancel.map(|cancel| view! {
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| cancel.call(())
                    >
                        "Cancel"
                    </button>
                })}
            </div>
        </form>
    }
}
