use super::{repository::ReportsRepository, utils::PayrollReport};
use crate::api::ApiClient;
use leptos::*;
use std::rc::Rc;

/// `month_input` is what the user is typing; `query` is the month last
/// applied plus a counter so re-applying the same month still refetches.
#[derive(Clone, Copy)]
pub struct ReportsViewModel {
    pub month_input: RwSignal<String>,
    pub query: RwSignal<(String, u32)>,
    pub report: Resource<(String, u32), PayrollReport>,
}

impl ReportsViewModel {
    pub fn apply_filter(&self) {
        let month = self.month_input.get_untracked();
        self.query.update(|query| next_query(query, month));
    }

    pub fn clear_filter(&self) {
        self.month_input.set(String::new());
        self.query.update(|query| next_query(query, String::new()));
    }
}

fn next_query(query: &mut (String, u32), month: String) {
    query.0 = month;
    query.1 = query.1.wrapping_add(1);
}

pub fn use_reports_view_model() -> ReportsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ReportsRepository::new_with_client(Rc::new(api));

    let month_input = create_rw_signal(String::new());
    let query = create_rw_signal((String::new(), 0u32));

    let report = create_resource(
        move || query.get(),
        move |(month, _)| {
            let repo = repository.clone();
            async move { repo.fetch_payroll_or_empty(&month).await }
        },
    );

    ReportsViewModel {
        month_input,
        query,
        report,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn apply_and_clear_drive_the_query() {
        with_runtime(|| {
            let vm = use_reports_view_model();
            assert_eq!(vm.query.get(), (String::new(), 0));

            vm.month_input.set("January 2025".into());
            vm.apply_filter();
            assert_eq!(vm.query.get(), ("January 2025".to_string(), 1));

            vm.apply_filter();
            assert_eq!(vm.query.get().1, 2);

            vm.clear_filter();
            assert!(vm.month_input.get().is_empty());
            assert_eq!(vm.query.get(), (String::new(), 3));
        });
    }
}
