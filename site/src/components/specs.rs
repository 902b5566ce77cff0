use crate::content::{PRODUCT, SPEC_ROWS};
use crate::sections::{PageSection, SectionId};
use leptos::prelude::*;

/// Specifications table beside a decorative terminal.
#[component]
pub fn Specs() -> impl IntoView {
    let heading = format!("{PRODUCT} Specifications");

    view! {
        <section
            id=SectionId::Specs.anchor()
            class="specs"
            data-section=PageSection::Specs.key()
        >
            <div class="container">
                <div class="specs-grid">
                    <div>
                        <h2 class="specs-title">{heading}</h2>
                        <dl class="spec-list">
                            {SPEC_ROWS
                                .iter()
                                .map(|row| {
                                    view! {
                                        <div class="spec-row">
                                            <dt class="spec-label">{row.label}</dt>
                                            <dd class="spec-value">{row.value}</dd>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </dl>
                    </div>
                    <StatusTerminal />
                </div>
            </div>
        </section>
    }
}

/// Decorative shell session showing the node's service and isolation status.
#[component]
fn StatusTerminal() -> impl IntoView {
    view! {
        <div class="terminal">
            <div class="terminal-header">
                <div class="terminal-dots">
                    <div class="terminal-dot red"></div>
                    <div class="terminal-dot yellow"></div>
                    <div class="terminal-dot green"></div>
                </div>
                <span class="terminal-title">"admin@aegis-1:~"</span>
            </div>
            <div class="terminal-body">
                <p>"$ systemctl status aegis-core"</p>
                <p class="terminal-output">"● aegis-core.service - Aegis Inference Engine"</p>
                <p class="terminal-indent">
                    "Loaded: loaded (/etc/systemd/system/aegis.service; enabled)"
                </p>
                <p class="terminal-indent">
                    "Active: "
                    <span class="terminal-ok">"active (running)"</span>
                    " since Thu 2025-11-27 10:00:00 UTC"
                </p>
                <p>"$ nvidia-smi --query-gpu=utilization.gpu --format=csv"</p>
                <p class="terminal-output">"utilization.gpu [%]"</p>
                <p class="terminal-output">"98 %"</p>
                <p class="terminal-output">"99 %"</p>
                <p class="terminal-output">"98 %"</p>
                <p class="terminal-output">"..."</p>
                <p>"$ check-isolation --network"</p>
                <p class="terminal-pass">" [PASS] NIC 1 (Unclassified) -> Isolated"</p>
                <p class="terminal-pass">" [PASS] NIC 2 (Classified) -> Isolated"</p>
                <p class="pulse">"_"</p>
            </div>
        </div>
    }
}
