use chrono::NaiveDate;
use leptos::*;
use wasm_bindgen::JsCast;

const LABEL: &str = "block text-sm font-medium text-fg-muted mb-1";
const CONTROL: &str = "w-full rounded-md border border-form-control-border bg-form-control-bg px-3 py-2 text-sm text-fg shadow-sm focus:border-action-primary-bg focus:outline-none focus:ring-2 focus:ring-action-primary-focus disabled:opacity-50";

#[component]
pub fn TextField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] id: String,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] autocomplete: String,
    #[prop(optional)] required: bool,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL for=id.clone()>{label}</label>
            <input
                id=id
                type=input_type
                class=CONTROL
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                disabled=move || disabled.get()
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn NumberField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] min: Option<String>,
    #[prop(optional, into)] max: Option<String>,
    #[prop(default = "1")] step: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL for=id.clone()>{label}</label>
            <input
                id=id
                type="number"
                inputmode="decimal"
                class=CONTROL
                min=min
                max=max
                step=step
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] id: String,
    #[prop(default = 4)] rows: u32,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL for=id.clone()>{label}</label>
            <textarea
                id=id
                rows=rows
                class=CONTROL
                placeholder=placeholder
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            ></textarea>
        </div>
    }
}

#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(into)] options: MaybeSignal<Vec<(String, String)>>,
    #[prop(optional, into)] id: String,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class=LABEL for=id.clone()>{label}</label>
            <select
                id=id
                class=CONTROL
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {placeholder.map(|text| view! { <option value="">{text}</option> })}
                {move || {
                    options
                        .get()
                        .into_iter()
                        .map(|(option_value, option_label)| {
                            let selected = option_value == value.get();
                            view! {
                                <option value=option_value selected=selected>{option_label}</option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Human form of a `YYYY-MM-DD` input value.
pub fn date_display(raw: &str) -> String {
    if raw.is_empty() {
        return "Select a date".to_string();
    }
    NaiveDate::parse_from_str(raw, crate::utils::time::DATE_INPUT_FORMAT)
        .map(|date| date.format("%a, %d %b %Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[component]
pub fn DateField(
    #[prop(into)] label: String,
    value: RwSignal<String>,
    #[prop(optional, into)] min: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
) -> impl IntoView {
    let input_ref = create_node_ref::<html::Input>();

    let on_click = move |_| {
        if disabled.get() {
            return;
        }
        if let Some(input) = input_ref.get() {
            let _ = js_sys::Reflect::get(&input, &"showPicker".into()).map(|f| {
                if f.is_function() {
                    let _ = js_sys::Reflect::apply(
                        &f.unchecked_into::<js_sys::Function>(),
                        &input,
                        &js_sys::Array::new(),
                    );
                }
            });
            let _ = input.focus();
        }
    };

    view! {
        <div class="flex flex-col gap-1 w-full">
            <span class=LABEL>{label}</span>
            <div
                class=move || format!(
                    "relative cursor-pointer rounded-md border border-form-control-border bg-form-control-bg py-2 px-3 flex items-center justify-between shadow-sm hover:border-action-primary-border-hover {}",
                    if disabled.get() { "opacity-50 cursor-not-allowed" } else { "" }
                )
                on:click=on_click
            >
                <span class=move || if value.get().is_empty() { "text-sm text-fg-muted" } else { "text-sm text-fg" }>
                    {move || date_display(&value.get())}
                </span>
                <input
                    type="date"
                    node_ref=input_ref
                    class="absolute inset-0 w-full h-full opacity-0 pointer-events-none"
                    min=min
                    disabled=move || disabled.get()
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        </div>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn fields_render_labels_and_values() {
        let html = render_to_string(|| {
            let name = create_rw_signal("Lake Cabin".to_string());
            let price = create_rw_signal("120".to_string());
            let notes = create_rw_signal(String::new());
            let check_in = create_rw_signal("2025-07-01".to_string());
            let category = create_rw_signal("2".to_string());
            view! {
                <form>
                    <TextField label="Name" value=name id="house-name" required=true />
                    <NumberField label="Price per night" value=price min="0".to_string() step="0.01" />
                    <TextAreaField label="Description" value=notes rows=6 />
                    <DateField label="Check-in" value=check_in />
                    <SelectField
                        label="Category"
                        value=category
                        options=vec![("1".to_string(), "Cabins".to_string()), ("2".to_string(), "Villas".to_string())]
                        placeholder="Any category".to_string()
                    />
                </form>
            }
        });
        assert!(html.contains("Price per night"));
        assert!(html.contains("Tue, 01 Jul 2025"));
        assert!(html.contains("Villas"));
        assert!(html.contains("Any category"));
    }
}
