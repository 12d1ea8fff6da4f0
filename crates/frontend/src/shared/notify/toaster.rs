use super::{Notification, NotificationKind, NotificationService, CLOSE_LABEL};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use thaw::*;
use wasm_bindgen_futures::spawn_local;

/// Renders the notification stack at the application root.
///
/// Must be mounted exactly once.
#[component]
pub fn Toaster() -> impl IntoView {
    let svc = use_context::<NotificationService>()
        .expect("NotificationService not provided in context (provide it in app root)");

    view! {
        <div class="toaster" role="region" aria-live="polite">
            <For
                each=move || svc.items()
                key=|n| n.id
                children=move |n: Notification| {
                    let id = n.id;
                    let timeout_ms = svc.timeout_ms();
                    spawn_local(async move {
                        TimeoutFuture::new(timeout_ms).await;
                        svc.dismiss(id);
                    });

                    let intent = match n.kind {
                        NotificationKind::Success => MessageBarIntent::Success,
                        NotificationKind::Error => MessageBarIntent::Error,
                    };

                    view! {
                        <div class="toaster__item">
                            <MessageBar intent=intent>
                                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                                    <div class="toaster__text">
                                        <div class="toaster__title">{n.title}</div>
                                        <div class="toaster__description">{n.description}</div>
                                    </div>
                                    <Button
                                        appearance=ButtonAppearance::Transparent
                                        on_click=move |_| svc.dismiss(id)
                                    >
                                        {CLOSE_LABEL}
                                    </Button>
                                </Flex>
                            </MessageBar>
                        </div>
                    }
                }
            />
        </div>
    }
}
