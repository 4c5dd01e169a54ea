// Image attachment via FileReader
use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

/// Reads a local image file into a base64 data URL stored in `value`.
/// The read completes asynchronously; the preview and the bound draft field
/// only update once the reader fires.
#[component]
pub fn ImagePicker(#[prop(into)] label: String, value: RwSignal<String>) -> impl IntoView {
    let file_input = create_node_ref::<html::Input>();

    let open_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_change = move |ev: ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Ok(reader) = web_sys::FileReader::new() else {
            log::error!("FileReader unavailable");
            return;
        };
        let reader_handle = reader.clone();
        let onloadend = Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_| {
            if let Ok(result) = reader_handle.result() {
                if let Some(data_url) = result.as_string() {
                    value.set(data_url);
                }
            }
        });
        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
        if reader.read_as_data_url(&file).is_err() {
            log::error!("failed to start file read");
        }
        // The closure must outlive this handler; the reader owns it now.
        onloadend.forget();
    };

    let clear = move |_| value.set(String::new());

    view! {
        <div class="form-group">
            <label>{label}</label>
            <div>
                <input
                    type="file"
                    accept="image/*"
                    node_ref=file_input
                    on:change=on_change
                    style="display: none"
                />
                <button type="button" class="btn btn-secondary" on:click=open_picker>
                    "📸 Choose Image"
                </button>
                {move || {
                    let data_url = value.get();
                    (!data_url.is_empty()).then(|| view! {
                        <div class="image-preview">
                            <img src=data_url alt="Preview"/>
                            <button type="button" class="btn btn-secondary" on:click=clear>
                                "✕"
                            </button>
                        </div>
                    })
                }}
            </div>
        </div>
    }
}
