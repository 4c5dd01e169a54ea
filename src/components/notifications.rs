// Toast notifications
use gloo_timers::future::TimeoutFuture;
use leptos::*;

const DISMISS_AFTER_MS: u32 = 4000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Context handle pages use to surface transient messages.
#[derive(Clone, Copy)]
pub struct Toasts {
    list: RwSignal<Vec<Toast>>,
    next_id: RwSignal<u32>,
}

impl Toasts {
    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    fn push(&self, kind: ToastKind, message: String) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.list.update(|toasts| toasts.push(Toast { id, kind, message }));

        let list = self.list;
        spawn_local(async move {
            TimeoutFuture::new(DISMISS_AFTER_MS).await;
            list.update(|toasts| toasts.retain(|t| t.id != id));
        });
    }

    fn dismiss(&self, id: u32) {
        self.list.update(|toasts| toasts.retain(|t| t.id != id));
    }
}

pub fn provide_toasts() -> Toasts {
    let toasts = Toasts {
        list: create_rw_signal(Vec::new()),
        next_id: create_rw_signal(0),
    };
    provide_context(toasts);
    toasts
}

pub fn use_toasts() -> Toasts {
    expect_context::<Toasts>()
}

/// Renders the active toasts; mounted once at the application root.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toast-container">
            <For
                each=move || toasts.list.get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let kind_class = match toast.kind {
                        ToastKind::Success => "toast toast-success",
                        ToastKind::Error => "toast toast-error",
                    };
                    let id = toast.id;
                    view! {
                        <div class=kind_class>
                            <span>{toast.message}</span>
                            <button on:click=move |_| toasts.dismiss(id)>"✕"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
