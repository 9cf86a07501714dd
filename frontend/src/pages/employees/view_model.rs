use super::{repository::EmployeesRepository, utils::EmployeeForm};
use crate::{
    api::{ApiClient, ApiError, Department, Employee},
    components::messages::FlashMessage,
    utils::fetch::or_empty,
};
use leptos::*;
use std::rc::Rc;

pub const CREATE_SUCCESS: &str = "Employee created successfully!";
pub const CREATE_FALLBACK: &str = "Failed to create employee";

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub form: RwSignal<EmployeeForm>,
    pub message: RwSignal<Option<FlashMessage>>,
    pub reload: RwSignal<u32>,
    pub employees: Resource<u32, Vec<Employee>>,
    pub departments: Resource<(), Vec<Department>>,
    pub create_action: Action<EmployeeForm, Result<(), ApiError>>,
}

impl EmployeesViewModel {
    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        self.message.set(None);
        self.create_action.dispatch(self.form.get_untracked());
    }
}

pub fn apply_create_result(
    result: Result<(), ApiError>,
    form: RwSignal<EmployeeForm>,
    message: RwSignal<Option<FlashMessage>>,
    reload: RwSignal<u32>,
) {
    match result {
        Ok(()) => {
            message.set(Some(FlashMessage::success(CREATE_SUCCESS)));
            form.update(EmployeeForm::reset);
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => message.set(Some(FlashMessage::error(err.message_or(CREATE_FALLBACK)))),
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EmployeesRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(EmployeeForm::default());
    let message = create_rw_signal(None::<FlashMessage>);
    let reload = create_rw_signal(0u32);

    let repo_for_list = repository.clone();
    let employees = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move { or_empty("employees", repo.fetch_employees().await) }
        },
    );

    let repo_for_departments = repository.clone();
    let departments = create_resource(
        || (),
        move |_| {
            let repo = repo_for_departments.clone();
            async move { or_empty("departments", repo.fetch_departments().await) }
        },
    );

    let repo_for_create = repository.clone();
    let create_action = create_action(move |payload: &EmployeeForm| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move { repo.create_employee(&payload).await }
    });

    create_effect(move |_| {
        if let Some(result) = create_action.value().get() {
            apply_create_result(result, form, message, reload);
        }
    });

    EmployeesViewModel {
        form,
        message,
        reload,
        employees,
        departments,
        create_action,
    }
}
