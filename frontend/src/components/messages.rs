use leptos::*;

/// One-line outcome of the last user action on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashMessage {
    Success(String),
    Error(String),
}

impl FlashMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self::Success(text.into())
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::Error(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

#[component]
pub fn MessageBanner(#[prop(into)] message: Signal<Option<FlashMessage>>) -> impl IntoView {
    move || {
        message.get().map(|msg| {
            let class = if msg.is_error() {
                "px-4 py-3 rounded-lg mb-4 bg-red-50 border border-red-200 text-red-700"
            } else {
                "px-4 py-3 rounded-lg mb-4 bg-green-50 border border-green-200 text-green-700"
            };
            let role = if msg.is_error() { "alert" } else { "status" };
            view! {
                <div class=class role=role>
                    {msg.text().to_string()}
                </div>
            }
        })
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn banner_styles_errors_and_successes() {
        let html = render_to_string(|| {
            let ok = create_rw_signal(Some(FlashMessage::success("Department created successfully!")));
            let err = create_rw_signal(Some(FlashMessage::error("Failed to create department")));
            view! {
                <div>
                    <MessageBanner message=ok/>
                    <MessageBanner message=err/>
                </div>
            }
        });
        assert!(html.contains("Department created successfully!"));
        assert!(html.contains("text-green-700"));
        assert!(html.contains("Failed to create department"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn banner_renders_nothing_without_message() {
        let html = render_to_string(|| {
            let none = create_rw_signal(None::<FlashMessage>);
            view! { <div><MessageBanner message=none/></div> }
        });
        assert!(!html.contains("role="));
    }
}
