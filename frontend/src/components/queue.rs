//! The review queue: pending leads, per-row actions and batch approval.
//!
//! Rows are keyed by [`QueueRow::render_key`], so a row's DOM is rebuilt
//! when its data generation, checkbox or approve state changes, and left
//! alone while the operator is typing in its textarea.

use leptos::*;

use leadboard_core::{ApproveState, Command, QueueRow};

use crate::dispatch::Dispatcher;

#[component]
pub fn QueueSection() -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();
    let model = dispatcher.model();

    let on_batch = {
        let dispatcher = dispatcher.clone();
        move |_| dispatcher.dispatch(Command::BatchRequested)
    };

    view! {
        <section class="review-queue" id="review-queue">
            <h2>"Review Queue"</h2>

            // Batch bar: only while the queue has rows and some are checked.
            <Show
                when=move || model.with(|m| m.batch_bar().is_some())
                fallback=|| view! { }
            >
                <div class="batch-bar">
                    <span class="batch-count">
                        {move || format!("{} selected", model.with(|m| m.batch_bar().unwrap_or(0)))}
                    </span>
                    <button
                        class="btn btn-primary"
                        id="batchApproveBtn"
                        on:click=on_batch.clone()
                        disabled=move || model.with(|m| m.batch_busy())
                    >
                        {move || {
                            if model.with(|m| m.batch_busy()) {
                                "Approving..."
                            } else {
                                "Approve Selected"
                            }
                        }}
                    </button>
                </div>
            </Show>

            <Show
                when=move || model.with(|m| m.is_queue_empty())
                fallback=|| view! { }
            >
                <p class="empty-state">"No leads waiting for approval."</p>
            </Show>

            <For
                each=move || model.with(|m| m.queue_rows())
                key=|row| row.render_key()
                children=move |row| view! { <LeadRow row=row/> }
            />
        </section>
    }
}

#[component]
fn LeadRow(row: QueueRow) -> impl IntoView {
    let dispatcher = expect_context::<Dispatcher>();

    let on_toggle = {
        let dispatcher = dispatcher.clone();
        let id = row.id.clone();
        move |_| {
            dispatcher.dispatch(Command::SelectionToggled { id: id.clone() });
        }
    };

    let on_edit = {
        let dispatcher = dispatcher.clone();
        let id = row.id.clone();
        move |ev| {
            dispatcher.dispatch(Command::BodyEdited {
                id: id.clone(),
                text: event_target_value(&ev),
            });
        }
    };

    let on_approve = {
        let dispatcher = dispatcher.clone();
        let id = row.id.clone();
        move |_| {
            dispatcher.dispatch(Command::ApproveRequested { id: id.clone() });
        }
    };

    let on_logs = {
        let dispatcher = dispatcher.clone();
        let id = row.id.clone();
        move |_| {
            dispatcher.dispatch(Command::LogsRequested { id: id.clone() });
        }
    };

    let approve = row.approve;
    let approve_label = match approve {
        ApproveState::Idle => "Approve",
        ApproveState::Sending => "Sending...",
        ApproveState::Approved => "Approved",
    };

    view! {
        <div
            class="lead-item"
            style:opacity={if approve == ApproveState::Approved { "0.5" } else { "1" }}
        >
            <input
                type="checkbox"
                class="lead-select"
                prop:checked=row.checked
                on:change=on_toggle
            />
            <div class="lead-info">
                <h4>{row.name}</h4>
                <span class="company">{row.company}</span>
                {row.email.map(|email| view! { <span class="email">{email}</span> })}
                <span class=format!("status-badge {}", row.status_class)>
                    {row.status_label}
                </span>
            </div>
            <div class="email-preview">
                <div class="subject">
                    <strong>"Subject: "</strong>
                    {row.subject}
                </div>
                <textarea
                    class="body-edit"
                    placeholder="No content generated"
                    prop:value=row.body
                    on:input=on_edit
                ></textarea>
            </div>
            <div class="actions">
                <button
                    class="btn-approve"
                    on:click=on_approve
                    disabled={approve != ApproveState::Idle}
                >
                    {approve_label}
                </button>
                <button class="btn-logs" on:click=on_logs>"Logs"</button>
                // TODO: wire up once the backend exposes a reject endpoint.
                <button class="btn-reject" disabled=true>"Reject"</button>
            </div>
        </div>
    }
}
