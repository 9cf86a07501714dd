use super::{repository::SalariesRepository, utils::SalaryForm};
use crate::{
    api::{ApiClient, ApiError, Department, SalaryRecord},
    components::messages::FlashMessage,
    utils::fetch::or_empty,
};
use leptos::*;
use std::rc::Rc;

pub const CREATE_SUCCESS: &str = "Salary created successfully!";
pub const UPDATE_SUCCESS: &str = "Salary updated successfully!";
pub const SAVE_FALLBACK: &str = "Operation failed";
pub const DELETE_SUCCESS: &str = "Salary deleted successfully!";
pub const DELETE_FALLBACK: &str = "Failed to delete salary";
pub const DELETE_PROMPT: &str = "Are you sure you want to delete this salary record?";

/// What the submit button sends: a new record, or an edit of `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalarySubmission {
    pub editing_id: Option<String>,
    pub form: SalaryForm,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
}

#[derive(Clone, Copy)]
pub struct SalariesViewModel {
    pub form: RwSignal<SalaryForm>,
    pub editing_id: RwSignal<Option<String>>,
    pub pending_delete: RwSignal<Option<String>>,
    pub message: RwSignal<Option<FlashMessage>>,
    pub reload: RwSignal<u32>,
    pub salaries: Resource<u32, Vec<SalaryRecord>>,
    pub departments: Resource<(), Vec<Department>>,
    pub save_action: Action<SalarySubmission, Result<SaveOutcome, ApiError>>,
    pub delete_action: Action<String, Result<(), ApiError>>,
}

impl SalariesViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        self.message.set(None);
        self.save_action.dispatch(SalarySubmission {
            editing_id: self.editing_id.get_untracked(),
            form: self.form.get_untracked(),
        });
    }

    pub fn start_edit(&self, record: &SalaryRecord) {
        begin_edit(record, self.form, self.editing_id);
    }

    pub fn cancel_edit(&self) {
        end_edit(self.form, self.editing_id);
    }

    pub fn request_delete(&self, id: String) {
        self.pending_delete.set(Some(id));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    /// Sends the delete for the record awaiting confirmation, if any.
    pub fn confirm_delete(&self) {
        if let Some(id) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(id);
        }
    }
}

pub fn begin_edit(
    record: &SalaryRecord,
    form: RwSignal<SalaryForm>,
    editing_id: RwSignal<Option<String>>,
) {
    editing_id.set(Some(record.salary_id.clone()));
    form.set(SalaryForm::from_record(record));
}

pub fn end_edit(form: RwSignal<SalaryForm>, editing_id: RwSignal<Option<String>>) {
    editing_id.set(None);
    form.update(SalaryForm::reset);
}

pub fn apply_save_result(
    result: Result<SaveOutcome, ApiError>,
    form: RwSignal<SalaryForm>,
    editing_id: RwSignal<Option<String>>,
    message: RwSignal<Option<FlashMessage>>,
    reload: RwSignal<u32>,
) {
    match result {
        Ok(outcome) => {
            let text = match outcome {
                SaveOutcome::Created => CREATE_SUCCESS,
                SaveOutcome::Updated => UPDATE_SUCCESS,
            };
            message.set(Some(FlashMessage::success(text)));
            end_edit(form, editing_id);
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => message.set(Some(FlashMessage::error(err.message_or(SAVE_FALLBACK)))),
    }
}

pub fn apply_delete_result(
    result: Result<(), ApiError>,
    message: RwSignal<Option<FlashMessage>>,
    reload: RwSignal<u32>,
) {
    match result {
        Ok(()) => {
            message.set(Some(FlashMessage::success(DELETE_SUCCESS)));
            reload.update(|value| *value = value.wrapping_add(1));
        }
        Err(err) => message.set(Some(FlashMessage::error(err.message_or(DELETE_FALLBACK)))),
    }
}

async fn save(
    repo: &SalariesRepository,
    submission: SalarySubmission,
) -> Result<SaveOutcome, ApiError> {
    match submission.editing_id {
        Some(id) => {
            repo.update_salary(&id, &submission.form).await?;
            Ok(SaveOutcome::Updated)
        }
        None => {
            repo.create_salary(&submission.form).await?;
            Ok(SaveOutcome::Created)
        }
    }
}

pub fn use_salaries_view_model() -> SalariesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SalariesRepository::new_with_client(Rc::new(api));

    let form = create_rw_signal(SalaryForm::default());
    let editing_id = create_rw_signal(None::<String>);
    let pending_delete = create_rw_signal(None::<String>);
    let message = create_rw_signal(None::<FlashMessage>);
    let reload = create_rw_signal(0u32);

    let repo_for_list = repository.clone();
    let salaries = create_resource(
        move || reload.get(),
        move |_| {
            let repo = repo_for_list.clone();
            async move { or_empty("salaries", repo.fetch_salaries().await) }
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

    let repo_for_save = repository.clone();
    let save_action = create_action(move |submission: &SalarySubmission| {
        let repo = repo_for_save.clone();
        let submission = submission.clone();
        async move { save(&repo, submission).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &String| {
        let repo = repo_for_delete.clone();
        let id = id.clone();
        async move { repo.delete_salary(&id).await }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            apply_save_result(result, form, editing_id, message, reload);
        }
    });
    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            apply_delete_result(result, message, reload);
        }
    });

    SalariesViewModel {
        form,
        editing_id,
        pending_delete,
        message,
        reload,
        salaries,
        departments,
        save_action,
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::salaries::utils::SalaryField;
    use crate::test_support::{helpers::salary_record, ssr::with_runtime};
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn edit_then_update_clears_editing_state() {
        with_runtime(|| {
            let form = create_rw_signal(SalaryForm::default());
            let editing_id = create_rw_signal(None);
            let message = create_rw_signal(None);
            let reload = create_rw_signal(0u32);

            begin_edit(
                &salary_record("7", "Carwash", 300000.0, 20000.0),
                form,
                editing_id,
            );
            assert_eq!(editing_id.get().as_deref(), Some("7"));
            assert_eq!(form.get().net_salary(), "280000");

            apply_save_result(Ok(SaveOutcome::Updated), form, editing_id, message, reload);
            assert!(editing_id.get().is_none());
            assert_eq!(form.get(), SalaryForm::default());
            assert_eq!(message.get(), Some(FlashMessage::success(UPDATE_SUCCESS)));
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn failed_save_keeps_edit_in_progress() {
        with_runtime(|| {
            let form = create_rw_signal(SalaryForm::default());
            let editing_id = create_rw_signal(Some("7".to_string()));
            let message = create_rw_signal(None);
            let reload = create_rw_signal(0u32);
            form.update(|f| f.set(SalaryField::Month, "May 2025".into()));

            apply_save_result(
                Err(ApiError::request_failed("offline")),
                form,
                editing_id,
                message,
                reload,
            );
            assert_eq!(editing_id.get().as_deref(), Some("7"));
            assert_eq!(form.get().get(SalaryField::Month), "May 2025");
            assert_eq!(message.get(), Some(FlashMessage::error(SAVE_FALLBACK)));
            assert_eq!(reload.get(), 0);
        });
    }

    #[test]
    fn cancel_edit_leaves_editing_mode() {
        with_runtime(|| {
            let form = create_rw_signal(SalaryForm::default());
            let editing_id = create_rw_signal(None);
            begin_edit(&salary_record("3", "Stock", 10.0, 1.0), form, editing_id);
            end_edit(form, editing_id);
            assert!(editing_id.get().is_none());
            assert_eq!(form.get(), SalaryForm::default());
        });
    }

    #[test]
    fn delete_outcomes() {
        with_runtime(|| {
            let message = create_rw_signal(None);
            let reload = create_rw_signal(0u32);

            apply_delete_result(Err(ApiError::http(404, "Salary record not found")), message, reload);
            assert_eq!(
                message.get(),
                Some(FlashMessage::error("Salary record not found"))
            );
            assert_eq!(reload.get(), 0);

            apply_delete_result(Ok(()), message, reload);
            assert_eq!(message.get(), Some(FlashMessage::success(DELETE_SUCCESS)));
            assert_eq!(reload.get(), 1);
        });
    }

    #[test]
    fn declining_the_prompt_sends_nothing() {
        with_runtime(|| {
            let vm = use_salaries_view_model();
            vm.request_delete("7".into());
            assert_eq!(vm.pending_delete.get().as_deref(), Some("7"));
            vm.cancel_delete();
            vm.confirm_delete();
            assert!(vm.pending_delete.get().is_none());
            assert!(vm.delete_action.input().get().is_none());
        });
    }

    #[tokio::test]
    async fn save_routes_by_editing_state() {
        let server = MockServer::start_async().await;
        let create = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/salaries");
                then.status(201).json_body(json!({}));
            })
            .await;
        let update = server
            .mock_async(|when, then| {
                when.method(PUT).path("/api/salaries/12");
                then.status(200).json_body(json!({}));
            })
            .await;

        let repo = SalariesRepository::new_with_client(Rc::new(ApiClient::new_with_base_url(
            server.url("/api"),
        )));
        let created = save(
            &repo,
            SalarySubmission {
                editing_id: None,
                form: SalaryForm::default(),
            },
        )
        .await
        .unwrap();
        let updated = save(
            &repo,
            SalarySubmission {
                editing_id: Some("12".into()),
                form: SalaryForm::default(),
            },
        )
        .await
        .unwrap();

        assert_eq!(created, SaveOutcome::Created);
        assert_eq!(updated, SaveOutcome::Updated);
        create.assert_async().await;
        update.assert_async().await;
    }
}
