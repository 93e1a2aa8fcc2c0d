use crate::context::use_app;
use leptos::prelude::*;
use rubro::Severity;
use std::collections::HashSet;

fn alert_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "alert alert-success shadow-lg",
        Severity::Info => "alert alert-info shadow-lg",
        Severity::Warning => "alert alert-warning shadow-lg",
        Severity::Error => "alert alert-error shadow-lg",
    }
}

/// 通知提示框，每条通知在配置的时长后自动消失
#[component]
pub fn NotificationToasts() -> impl IntoView {
    let ctx = use_app();
    let scheduled = StoredValue::new(HashSet::new());

    Effect::new(move |_| {
        let services = ctx.services();
        let timeout = services.config.notice_timeout;
        for notice in ctx.notices.get() {
            let fresh = scheduled
                .try_update_value(|ids| ids.insert(notice.id))
                .unwrap_or(false);
            if !fresh {
                continue;
            }
            let notices = services.notices.clone();
            set_timeout(
                move || {
                    notices.dismiss(notice.id);
                    scheduled.update_value(|ids| {
                        ids.remove(&notice.id);
                    });
                },
                timeout,
            );
        }
    });

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || ctx.notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=alert_class(notice.severity)>
                            <span>{notice.message}</span>
                            <button
                                class="btn btn-ghost btn-xs"
                                on:click=move |_| ctx.services().notices.dismiss(id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
