use crate::{
    api::{ApiError, Faq, FaqPayload},
    components::{
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        forms::{NumberField, TextAreaField, TextField},
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::admin::{repository::AdminRepository, utils::bump, AdminShell},
    state::toast::use_toasts,
    utils::validation,
};
use leptos::{ev::SubmitEvent, *};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqFormState {
    pub id: Option<i64>,
    pub question: String,
    pub answer: String,
    pub sort_order: String,
}

impl FaqFormState {
    /// New entries go after the current last one.
    pub fn next(faqs: &[Faq]) -> Self {
        let last = faqs.iter().map(|faq| faq.sort_order).max().unwrap_or(0);
        Self {
            sort_order: (last + 1).to_string(),
            ..Self::default()
        }
    }

    /// Blank entry for whatever the list resource currently holds; a list
    /// that is loading or failed counts as empty.
    pub fn next_after(loaded: Option<Result<Vec<Faq>, ApiError>>) -> Self {
        Self::next(&loaded.and_then(Result::ok).unwrap_or_default())
    }

    pub fn from_faq(faq: &Faq) -> Self {
        Self {
            id: Some(faq.id),
            question: faq.question.clone(),
            answer: faq.answer.clone(),
            sort_order: faq.sort_order.to_string(),
        }
    }

    pub fn to_payload(&self) -> Result<FaqPayload, String> {
        let question = validation::non_blank(&self.question).ok_or("Question is required.")?;
        let answer = validation::non_blank(&self.answer).ok_or("Answer is required.")?;
        let sort_order = match self.sort_order.trim() {
            "" => 0,
            raw => raw
                .parse::<i32>()
                .map_err(|_| "Order must be a whole number.".to_string())?,
        };
        Ok(FaqPayload {
            question,
            answer,
            sort_order,
        })
    }
}

#[component]
pub fn AdminFaqsPage() -> impl IntoView {
    view! {
        <AdminShell title="FAQ">
            <FaqsManager />
        </AdminShell>
    }
}

#[component]
fn FaqsManager() -> impl IntoView {
    let repository = AdminRepository::from_context();
    let toasts = use_toasts();
    let reload = create_rw_signal(0u32);
    let editor = create_rw_signal(None::<FaqFormState>);
    let pending_delete = create_rw_signal(None::<Faq>);

    let repo = repository.clone();
    let faqs = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo.clone();
            async move { repo.faqs().await }
        },
    );
    let repo = repository.clone();
    let save_action = create_action(move |(id, payload): &(Option<i64>, FaqPayload)| {
        let repo = repo.clone();
        let (id, payload) = (*id, payload.clone());
        async move { repo.save_faq(id, payload).await }
    });
    let repo = repository;
    let delete_action = create_action(move |id: &i64| {
        let repo = repo.clone();
        let id = *id;
        async move { repo.delete_faq(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(()) => {
                    toasts.push_success("FAQ saved.");
                    editor.set(None);
                    bump(reload);
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            pending_delete.set(None);
            match result {
                Ok(()) => {
                    toasts.push_success("FAQ deleted.");
                    bump(reload);
                }
                Err(err) => {
                    toasts.push_error(err.to_string());
                }
            }
        }
    });

    let start_new = move |_| {
        editor.set(Some(FaqFormState::next_after(untrack(|| faqs.get()))));
    };

    view! {
        <div class="flex justify-end">
            <button
                class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text"
                on:click=start_new
            >
                "New question"
            </button>
        </div>
        {move || editor.get().map(|initial| view! {
            <FaqEditor
                initial=initial
                pending=save_action.pending()
                on_save=Callback::new(move |request| save_action.dispatch(request))
                on_cancel=Callback::new(move |_: ()| editor.set(None))
            />
        })}
        {move || match faqs.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.to_string() /> }.into_view(),
            Some(Ok(list)) if list.is_empty() => view! {
                <EmptyState title="No questions yet" description="Answers added here appear on the public FAQ page." />
            }
            .into_view(),
            Some(Ok(list)) => list
                .into_iter()
                .map(|faq| {
                    let edit = FaqFormState::from_faq(&faq);
                    let delete = faq.clone();
                    view! {
                        <article class="bg-surface-elevated shadow rounded-lg p-4 space-y-2">
                            <div class="flex items-start justify-between gap-4">
                                <h3 class="font-semibold text-fg">
                                    <span class="mr-2 text-xs text-fg-muted">{format!("#{}", faq.sort_order)}</span>
                                    {faq.question.clone()}
                                </h3>
                                <div class="space-x-2 whitespace-nowrap text-sm">
                                    <button class="text-link hover:text-link-hover" on:click=move |_| editor.set(Some(edit.clone()))>"Edit"</button>
                                    <button class="text-status-error-text" on:click=move |_| pending_delete.set(Some(delete.clone()))>"Delete"</button>
                                </div>
                            </div>
                            <p class="text-sm text-fg-muted whitespace-pre-line">{faq.answer.clone()}</p>
                        </article>
                    }
                })
                .collect_view(),
        }}
        <ConfirmDialog
            is_open=Signal::derive(move || pending_delete.with(Option::is_some))
            title="Delete question"
            message=Signal::derive(move || {
                pending_delete
                    .get()
                    .map(|faq| format!("Remove \"{}\" from the FAQ?", faq.question))
                    .unwrap_or_default()
            })
            confirm_label="Delete"
            destructive=true
            pending=delete_action.pending()
            on_confirm=Callback::new(move |_| {
                if let Some(faq) = pending_delete.get_untracked() {
                    delete_action.dispatch(faq.id);
                }
            })
            on_cancel=Callback::new(move |_| pending_delete.set(None))
        />
    }
}

#[component]
pub fn FaqEditor(
    initial: FaqFormState,
    #[prop(into)] pending: Signal<bool>,
    on_save: Callback<(Option<i64>, FaqPayload)>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let id = initial.id;
    let question = create_rw_signal(initial.question);
    let answer = create_rw_signal(initial.answer);
    let order = create_rw_signal(initial.sort_order);
    let error = create_rw_signal(None::<String>);

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let state = FaqFormState {
            id,
            question: question.get(),
            answer: answer.get(),
            sort_order: order.get(),
        };
        match state.to_payload() {
            Ok(payload) => {
                error.set(None);
                on_save.call((id, payload));
            }
            Err(message) => error.set(Some(message)),
        }
    };

    view! {
        <form class="bg-surface-elevated shadow rounded-lg p-6 space-y-4" on:submit=handle_submit>
            <TextField label="Question" value=question id="faq-question" required=true />
            <TextAreaField label="Answer" value=answer id="faq-answer" rows=4 required=true />
            <div class="w-32">
                <NumberField label="Order" value=order id="faq-order" />
            </div>
            {move || error.get().map(|message| view! { <ErrorMessage message=message /> })}
            <div class="flex justify-end gap-2">
                <button type="button" class="px-4 py-2 rounded-md text-sm text-fg-muted" on:click=move |_| on_cancel.call(())>
                    "Cancel"
                </button>
                <button
                    type="submit"
                    class="px-4 py-2 rounded-md text-sm font-semibold bg-action-primary-bg text-action-primary-text disabled:opacity-50"
                    disabled=move || pending.get()
                >
                    {if id.is_some() { "Save changes" } else { "Add question" }}
                </button>
            </div>
        </form>
    }
}
