use super::{repository::DepartmentsRepository, utils::DepartmentForm};
use crate::{
    api::{ApiClient, ApiError, Department},
    components::messages::FlashMessage,
    utils::fetch::or_empty,
};
use leptos::*;
use std::rc::Rc;

pub const CREATE_SUCCESS: &str = "Department created successfully!";
pub const CREATE_FALLBACK: &str = "Failed to create department";

#[derive(Clone, Copy)]
pub struct DepartmentsViewModel {
    pub form: RwSignal<DepartmentForm>,
    pub message: RwSignal<Option<FlashMessage>>,
    pub reload: RwSignal<u32>,
    pub departments: Resource<u32, Vec<Department>>,
    pub create_action: Action<DepartmentForm, Result<(), ApiError>>,
}

impl DepartmentsViewModel {
    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        self.message.set(None);
        self.create_action.dispatch(self.form.get_untracked());
    }
}

/// Applies the outcome of a create call to the page state.
pub fn apply_create_result(
    result: Result<(), ApiError>,
    form: RwSignal<DepartmentForm>,
    message: RwSignal<Option<FlashMessage>>,
    reload: RwSignal<u32>,
) {
    match result {
        Ok(()) => {
            message.set(Some(FlashMessage::success(CREATE_SUCCESS)));
            form.update(DepartmentForm::reset);
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => message.set(Some(FlashMessage::error(err.message_or(CREATE_FALLBACK)))),
    }
}

pub fn use_departments_view_model() -> DepartmentsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DepartmentsRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(DepartmentForm::default());
    let message = create_rw_signal(None::<FlashMessage>);
    let reload = create_rw_signal(0u32);

    let repo_for_list = repository.clone();
    let departments = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move { or_empty("departments", repo.fetch_departments().await) }
        },
    );

    let repo_for_create = repository.clone();
    let create_action = create_action(move |payload: &DepartmentForm| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move { repo.create_department(&payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            apply_create_result(result, form, message, reload);
        }
    });

    DepartmentsViewModel {
        form,
        message,
        reload,
        departments,
        create_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::departments::utils::DepartmentField;
    use crate::test_support::ssr::with_runtime;

    fn filled_form() -> RwSignal<DepartmentForm> {
        let form = create_rw_signal(DepartmentForm::default());
        form.update(|f| {
            f.set(DepartmentField::Code, "CW".into());
            f.set(DepartmentField::Name, "Carwash".into());
        });
        form
    }

    #[test]
    fn success_clears_form_and_triggers_refetch() {
        with_runtime(|| {
            let form = filled_form();
            let message = create_rw_signal(None);
            let reload = create_rw_signal(0u32);

            apply_create_result(Ok(()), form, message, reload);

            assert_eq!(form.get(), DepartmentForm::default());
            assert_eq!(message.get(), Some(FlashMessage::success(CREATE_SUCCESS)));
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn failure_keeps_form_and_shows_backend_message() {
        with_runtime(|| {
            let form = filled_form();
            let message = create_rw_signal(None);
            let reload = create_rw_signal(0u32);

            apply_create_result(
                Err(ApiError::http(400, "Department code already exists")),
                form,
                message,
                reload,
            );

            assert_eq!(form.get().department_code, "CW");
            assert_eq!(
                message.get(),
                Some(FlashMessage::error("Department code already exists"))
            );
            assert_eq!(reload.get(), 0);

            apply_create_result(Err(ApiError::request_failed("offline")), form, message, reload);
            assert_eq!(message.get(), Some(FlashMessage::error(CREATE_FALLBACK)));
        });
    }

    #[test]
    fn view_model_starts_empty() {
        with_runtime(|| {
            let vm = use_departments_view_model();
            assert_eq!(vm.form.get(), DepartmentForm::default());
            assert!(vm.message.get().is_none());
            assert_eq!(vm.reload.get(), 0);
        });
    }
}
