use leptos::*;
use leptos_router::*;

use crate::api::use_api;
use crate::auth::use_session;
use crate::components::charts::{
    category_slices, priority_slices, status_slices, BarChart, DistributionLegend,
};
use crate::components::complaint_form::ComplaintForm;
use crate::components::forms::{SelectField, TextInput};
use crate::components::layout::{EmptyState, LoadingSpinner};
use crate::components::notifications::use_toasts;
use crate::types::{
    status_update_payload, Complaint, ComplaintFilter, ComplaintStatus, Officer, OfficerDraft,
    Priority, RegisterRequest, SystemStats,
};
use crate::utils::{format_date, humanize_category, truncate_string};

const STATUS_FILTER_OPTIONS: &[(&str, &str)] = &[
    ("", "All Status"),
    ("submitted", "Submitted"),
    ("in-progress", "In Progress"),
    ("resolved", "Resolved"),
    ("closed", "Closed"),
];

const PRIORITY_FILTER_OPTIONS: &[(&str, &str)] = &[
    ("", "All Priorities"),
    ("low", "Low"),
    ("medium", "Medium"),
    ("high", "High"),
];

const DEPARTMENT_OPTIONS: &[(&str, &str)] = &[
    ("", "Select Department"),
    ("IT Support", "IT Support"),
    ("Hostel Administration", "Hostel Administration"),
    ("Maintenance", "Maintenance"),
    ("Academic Affairs", "Academic Affairs"),
    ("Library", "Library"),
    ("Security", "Security"),
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Overview,
    Complaints,
    Officers,
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = use_session();

    // Display-time gate only; the backend enforces authorization itself.
    move || {
        if session.get().can_manage() {
            view! { <DashboardInner/> }.into_view()
        } else {
            view! {
                <div class="page-container">
                    <div class="card">
                        <h2>"Welcome to Campus Help Desk"</h2>
                        <p>
                            "Spotted a problem on campus? "
                            <a href="/complaints/new">"Report an issue"</a>
                            " and track its resolution."
                        </p>
                    </div>
                </div>
            }
            .into_view()
        }
    }
}

#[component]
fn DashboardInner() -> impl IntoView {
    let api = use_api();
    let toasts = use_toasts();
    let navigate = use_navigate();

    // Bumped after every successful mutation; the snapshot is refetched
    // wholesale rather than patched locally.
    let reload = create_rw_signal(0u32);

    let snapshot = create_resource(
        move || reload.get(),
        move |_| {
            let api = api.clone();
            async move { api.load_dashboard().await }
        },
    );

    let active_tab = create_rw_signal(Tab::Overview);
    let show_add_complaint = create_rw_signal(false);
    let show_add_officer = create_rw_signal(false);
    let status_filter = create_rw_signal(String::new());
    let priority_filter = create_rw_signal(String::new());

    let change_status = {
        let api = use_api();
        create_action(move |input: &(String, ComplaintStatus)| {
            let (id, status) = input.clone();
            let api = api.clone();
            async move {
                let payload = status_update_payload(status);
                match api.update_complaint_status(&id, &payload).await {
                    Ok(()) => {
                        toasts.success("Status updated successfully!");
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => {
                        log::warn!("status update failed: {}", e);
                        toasts.error(e.user_message("Failed to update status"));
                    }
                }
            }
        })
    };

    let delete_complaint = {
        let api = use_api();
        create_action(move |id: &String| {
            let id = id.clone();
            let api = api.clone();
            async move {
                match api.delete_complaint(&id).await {
                    Ok(()) => {
                        toasts.success("Issue deleted successfully!");
                        reload.update(|n| *n += 1);
                    }
                    Err(e) => {
                        log::warn!("delete failed: {}", e);
                        toasts.error(e.user_message("Failed to delete issue"));
                    }
                }
            }
        })
    };

    let add_officer = {
        let api = use_api();
        create_action(move |req: &RegisterRequest| {
            let req = req.clone();
            let api = api.clone();
            async move {
                match api.register(&req).await {
                    Ok(_) => {
                        toasts.success("Staff created successfully!");
                        settle_form_mutation(true, show_add_officer, reload);
                    }
                    Err(e) => {
                        log::warn!("staff registration failed: {}", e);
                        toasts.error(e.user_message("Failed to create staff"));
                        settle_form_mutation(false, show_add_officer, reload);
                    }
                }
            }
        })
    };

    let on_status_change =
        Callback::new(move |(id, status): (String, ComplaintStatus)| {
            change_status.dispatch((id, status));
        });

    let on_delete = Callback::new(move |id: String| {
        if confirm("Are you sure you want to delete this issue?") {
            delete_complaint.dispatch(id);
        }
    });

    let on_add_officer = Callback::new(move |req: RegisterRequest| {
        add_officer.dispatch(req);
    });

    let inline_navigate = navigate.clone();
    let on_inline_complaint = Callback::new(move |complaint_id: String| {
        show_add_complaint.set(false);
        inline_navigate(&format!("/complaint/{}", complaint_id), Default::default());
    });

    view! {
        <div class="page-container">
            <div class="page-header">
                <div style="display: flex; justify-content: space-between; align-items: center">
                    <div>
                        <h1>"College Issue Management Portal"</h1>
                        <p>"Campus Administration & Analytics"</p>
                    </div>
                    <button
                        class="btn btn-primary"
                        on:click=move |_| show_add_complaint.update(|v| *v = !*v)
                    >
                        {move || if show_add_complaint.get() { "Cancel" } else { "➕ Report Issue" }}
                    </button>
                </div>
            </div>

            {move || show_add_complaint.get().then(|| view! {
                <div class="card">
                    <h3>"Report Campus Issue"</h3>
                    <ComplaintForm
                        on_success=on_inline_complaint
                        on_cancel=Callback::new(move |_| show_add_complaint.set(false))
                    />
                </div>
            })}

            <div class="tabs">
                <TabButton tab=Tab::Overview active=active_tab label="Overview"/>
                <TabButton tab=Tab::Complaints active=active_tab label="All Issues"/>
                <TabButton tab=Tab::Officers active=active_tab label="Staff / Faculty"/>
            </div>

            {move || match snapshot.get() {
                None => view! { <LoadingSpinner/> }.into_view(),
                Some(snap) => {
                    view! {
                        {snap.degraded.then(|| view! {
                            <div class="error-banner">"Failed to load some dashboard data"</div>
                        })}
                        {match active_tab.get() {
                            Tab::Overview => view! { <OverviewTab stats=snap.stats/> }.into_view(),
                            Tab::Complaints => view! {
                                <ComplaintsTab
                                    complaints=snap.complaints
                                    status_filter=status_filter
                                    priority_filter=priority_filter
                                    on_status_change=on_status_change
                                    on_delete=on_delete
                                />
                            }
                            .into_view(),
                            Tab::Officers => view! {
                                <OfficersTab
                                    officers=snap.officers
                                    on_submit=on_add_officer
                                    show_form=show_add_officer
                                />
                            }
                            .into_view(),
                        }}
                    }
                    .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn TabButton(tab: Tab, active: RwSignal<Tab>, #[prop(into)] label: String) -> impl IntoView {
    view! {
        <button
            class="tab-button"
            class:active=move || active.get() == tab
            on:click=move |_| active.set(tab)
        >
            {label}
        </button>
    }
}

#[component]
fn OverviewTab(stats: SystemStats) -> impl IntoView {
    let cards = [
        ("Total Issues", stats.total),
        ("✅ Resolved", stats.resolved),
        ("⏳ In Progress", stats.in_progress),
        ("📋 Pending", stats.submitted),
    ];

    view! {
        <div class="stats-grid">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stat-card">
                            <div class="stat-value">{value}</div>
                            <div class="stat-label">{label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <div class="charts-container">
            <DistributionLegend
                title="Issue Status Distribution"
                slices=status_slices(&stats)
            />
            <BarChart title="Priority Distribution" slices=priority_slices(&stats)/>
            <BarChart title="Issue Categories" slices=category_slices(&stats)/>
        </div>
    }
}

#[component]
fn ComplaintsTab(
    complaints: Vec<Complaint>,
    status_filter: RwSignal<String>,
    priority_filter: RwSignal<String>,
    on_status_change: Callback<(String, ComplaintStatus)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let complaints = store_value(complaints);

    let filtered = move || {
        let filter = ComplaintFilter {
            status: ComplaintStatus::parse(&status_filter.get()),
            priority: Priority::parse(&priority_filter.get()),
        };
        complaints.with_value(|all| {
            all.iter().filter(|c| filter.matches(c)).cloned().collect::<Vec<_>>()
        })
    };

    view! {
        <h2>"All Campus Issues"</h2>
        <div class="form-row">
            <SelectField
                label="Status"
                name="statusFilter"
                value=status_filter
                options=STATUS_FILTER_OPTIONS
            />
            <SelectField
                label="Priority"
                name="priorityFilter"
                value=priority_filter
                options=PRIORITY_FILTER_OPTIONS
            />
        </div>

        {move || {
            let rows = filtered();
            if rows.is_empty() {
                view! { <EmptyState message="No issues found"/> }.into_view()
            } else {
                view! {
                    <table class="data-table">
                        <thead>
                            <tr>
                                <th>"Issue ID"</th>
                                <th>"Category"</th>
                                <th>"Location"</th>
                                <th>"Description"</th>
                                <th>"Priority"</th>
                                <th>"Status"</th>
                                <th>"Reported"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For
                                each=move || rows.clone()
                                key=|c| c.id.clone()
                                children=move |c: Complaint| {
                                    view! {
                                        <ComplaintRow
                                            complaint=c
                                            on_status_change=on_status_change
                                            on_delete=on_delete
                                        />
                                    }
                                }
                            />
                        </tbody>
                    </table>
                }
                .into_view()
            }
        }}
    }
}

#[component]
fn ComplaintRow(
    complaint: Complaint,
    on_status_change: Callback<(String, ComplaintStatus)>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let navigate = use_navigate();
    let row_id = complaint.id.clone();
    let route_id = complaint.complaint_id.clone();
    let current_status = complaint.status;

    let status_id = complaint.id.clone();
    let on_select = move |ev: ev::Event| {
        if let Some(status) = ComplaintStatus::parse(&event_target_value(&ev)) {
            on_status_change.call((status_id.clone(), status));
        }
    };

    view! {
        <tr>
            <td><strong>{complaint.complaint_id.clone()}</strong></td>
            <td>{humanize_category(&complaint.category)}</td>
            <td>{complaint.display_location()}</td>
            <td>{truncate_string(&complaint.description, 50)}</td>
            <td>
                <span class=format!("priority-badge priority-{}", complaint.priority.as_str())>
                    {complaint.priority.label().to_uppercase()}
                </span>
            </td>
            <td>
                <select on:change=on_select>
                    {ComplaintStatus::ALL
                        .into_iter()
                        .map(|status| {
                            view! {
                                <option
                                    value=status.as_str()
                                    selected=status == current_status
                                >
                                    {status.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td>{format_date(&complaint.created_at)}</td>
            <td>
                <button
                    class="btn btn-secondary"
                    on:click=move |_| {
                        navigate(&format!("/complaint/{}", route_id), Default::default())
                    }
                >
                    "View"
                </button>
                <button class="btn btn-danger" on:click=move |_| on_delete.call(row_id.clone())>
                    "🗑️"
                </button>
            </td>
        </tr>
    }
}

#[component]
fn OfficersTab(
    officers: Vec<Officer>,
    on_submit: Callback<RegisterRequest>,
    show_form: RwSignal<bool>,
) -> impl IntoView {
    view! {
        <div style="display: flex; justify-content: space-between; align-items: center">
            <h2>"Staff / Faculty Management"</h2>
            <button class="btn btn-primary" on:click=move |_| show_form.update(|v| *v = !*v)>
                {move || if show_form.get() { "Cancel" } else { "➕ Register New Staff" }}
            </button>
        </div>

        {move || show_form.get().then(|| view! {
            <OfficerForm on_submit=on_submit/>
        })}

        {if officers.is_empty() {
            view! { <EmptyState message="No staff found."/> }.into_view()
        } else {
            view! {
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Staff Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {officers
                            .into_iter()
                            .map(|officer| {
                                view! {
                                    <tr>
                                        <td>
                                            <strong>
                                                {format!(
                                                    "{} {}",
                                                    officer.first_name,
                                                    officer.last_name,
                                                )}
                                            </strong>
                                        </td>
                                        <td>{officer.email}</td>
                                        <td>{officer.role.label()}</td>
                                        <td>{if officer.is_active { "Active" } else { "Inactive" }}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            }
            .into_view()
        }}
    }
}

#[component]
fn OfficerForm(on_submit: Callback<RegisterRequest>) -> impl IntoView {
    let toasts = use_toasts();

    let first_name = create_rw_signal(String::new());
    let last_name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let department = create_rw_signal(String::new());
    let phone = create_rw_signal(String::new());

    let on_form_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let draft = OfficerDraft {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: email.get(),
            password: password.get(),
            department: department.get(),
            phone: phone.get(),
        };
        match draft.validate() {
            Ok(req) => on_submit.call(req),
            Err(message) => toasts.error(message),
        }
    };

    view! {
        <div class="card">
            <h3>"Register New Staff Member"</h3>
            <form on:submit=on_form_submit>
                <div class="form-row">
                    <TextInput label="First Name" name="firstName" value=first_name required=true/>
                    <TextInput label="Last Name" name="lastName" value=last_name required=true/>
                </div>
                <div class="form-row">
                    <TextInput
                        label="Email"
                        name="officerEmail"
                        value=email
                        input_type="email"
                        required=true
                    />
                    <TextInput
                        label="Password"
                        name="officerPassword"
                        value=password
                        input_type="password"
                        required=true
                    />
                </div>
                <div class="form-row">
                    <SelectField
                        label="Department"
                        name="officerDepartment"
                        value=department
                        options=DEPARTMENT_OPTIONS
                    />
                    <TextInput label="Phone" name="officerPhone" value=phone/>
                </div>
                <button type="submit" class="btn btn-primary">"Register Staff"</button>
            </form>
        </div>
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .map(|w| w.confirm_with_message(message).unwrap_or(false))
        .unwrap_or(false)
}

/// Settles a form-backed mutation: only a confirmed success closes the form
/// and refetches the snapshot. A failure leaves the typed draft on screen so
/// it can be corrected and resubmitted.
fn settle_form_mutation(succeeded: bool, show_form: RwSignal<bool>, reload: RwSignal<u32>) {
    if succeeded {
        show_form.set(false);
        reload.update(|n| *n += 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_staff_registration_keeps_form_open() {
        let runtime = create_runtime();
        let show_form = create_rw_signal(true);
        let reload = create_rw_signal(0u32);

        settle_form_mutation(false, show_form, reload);
        assert!(show_form.get_untracked());
        assert_eq!(reload.get_untracked(), 0);

        settle_form_mutation(true, show_form, reload);
        assert!(!show_form.get_untracked());
        assert_eq!(reload.get_untracked(), 1);

        runtime.dispose();
    }
}
