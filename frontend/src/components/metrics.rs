//! Metric cards for the aggregate outreach counters.

use leptos::*;

use crate::dispatch::Dispatcher;

#[component]
pub fn MetricsSection() -> impl IntoView {
    let model = expect_context::<Dispatcher>().model();
    let summary = move || model.with(|m| m.metrics_summary());

    view! {
        <section class="metrics" id="metrics">
            <MetricCard
                label="Total Leads"
                value=Signal::derive(move || summary().total_leads.to_string())
            />
            <MetricCard
                label="Emails Sent"
                value=Signal::derive(move || summary().sent.to_string())
            />
            <MetricCard
                label="Reply Rate"
                value=Signal::derive(move || summary().reply_rate)
            />
            <MetricCard
                label="Positive Replies"
                value=Signal::derive(move || summary().positive.to_string())
            />
        </section>
    }
}

/// One dashboard card: a big number and its label.
#[component]
fn MetricCard(label: &'static str, value: Signal<String>) -> impl IntoView {
    view! {
        <div class="card">
            <div class="number">{value}</div>
            <div class="label">{label}</div>
        </div>
    }
}
