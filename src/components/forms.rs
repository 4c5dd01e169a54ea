// Form field components
use leptos::*;

#[component]
pub fn TextInput(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
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
            <label for=name.clone()>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <input
                type=input_type
                id=name.clone()
                name=name
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextArea(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(default = 5)] rows: u32,
    #[prop(optional)] required: bool,
    /// Renders an `n/max` counter under the field.
    #[prop(optional)] max_len: Option<usize>,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name.clone()>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <textarea
                id=name.clone()
                name=name
                placeholder=placeholder
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
            {max_len.map(|max| view! {
                <small class="char-counter">
                    {move || format!("{}/{} characters", value.get().chars().count(), max)}
                </small>
            })}
        </div>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    #[prop(into)] name: String,
    value: RwSignal<String>,
    options: &'static [(&'static str, &'static str)],
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div class="form-group">
            <label for=name.clone()>
                {label}
                {required.then(|| view! { <span class="required">" *"</span> })}
            </label>
            <select
                id=name.clone()
                name=name
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options
                    .iter()
                    .map(|(tag, text)| {
                        let tag = *tag;
                        view! {
                            <option value=tag selected=move || value.get() == tag>
                                {*text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
