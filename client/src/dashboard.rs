//! The signed-in dashboard.
//!
//! Local state mirrors the server: every mutation waits for the API to
//! confirm it before the task list changes. There is no background refresh,
//! so edits from another session only show up on the next [`Dashboard::mount`].

use crate::{
    error::ClientError,
    models::{Task, User},
    service::TaskService,
};

/// Where the view wants to go next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    SignIn,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    pub user: Option<User>,
    pub tasks: Vec<Task>,
    pub input: String,
    pub loading: bool,
    pub submitting: bool,
}

pub struct Dashboard<S> {
    service: S,
    state: DashboardState,
    redirect: Option<Route>,
}

impl<S: TaskService> Dashboard<S> {
    pub fn new(service: S) -> Self {
        Self {
            service,
            state: DashboardState {
                loading: true,
                ..DashboardState::default()
            },
            redirect: None,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn redirect(&self) -> Option<Route> {
        self.redirect
    }

    #[cfg(test)]
    fn service(&self) -> &S {
        &self.service
    }

    /// Resolves the session and loads the task list once.
    ///
    /// An unauthenticated or unreachable API sends the view to sign-in. Any
    /// other failure leaves the view without a user.
    pub async fn mount(&mut self) -> Option<Route> {
        self.state.loading = true;

        match self.service.current_user().await {
            Ok(user) => {
                self.state.user = Some(user);
                match self.service.list_tasks().await {
                    Ok(tasks) => self.state.tasks = tasks,
                    Err(e) => tracing::warn!(error = %e, "failed to load tasks"),
                }
            }
            Err(ClientError::Unauthorized) => self.redirect = Some(Route::SignIn),
            Err(e @ ClientError::Transport(_)) => {
                tracing::warn!(error = %e, "auth check failed");
                self.redirect = Some(Route::SignIn);
            }
            Err(e) => tracing::warn!(error = %e, "auth check failed"),
        }

        self.state.loading = false;
        self.redirect
    }

    pub fn set_input(&mut self, input: impl Into<String>) {
        self.state.input = input.into();
    }

    pub fn can_submit(&self) -> bool {
        !self.state.submitting && !self.state.input.trim().is_empty()
    }

    /// Creates a task from the input buffer. Returns whether a task was added.
    pub async fn add_task(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }

        let title = self.state.input.trim().to_owned();
        self.state.submitting = true;
        let result = self.service.create_task(&title).await;
        self.state.submitting = false;

        match result {
            Ok(task) => {
                self.state.tasks.insert(0, task);
                self.state.input.clear();
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to add task");
                false
            }
        }
    }

    /// Flips a task's done flag once the server has accepted the change.
    pub async fn toggle_task(&mut self, id: i64) -> bool {
        let Some(done) = self.task(id).map(|task| task.done) else {
            return false;
        };

        match self.service.set_done(id, !done).await {
            Ok(updated) => {
                if let Some(task) = self.state.tasks.iter_mut().find(|task| task.id == id) {
                    task.done = updated.done;
                }
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, task_id = id, "failed to toggle task");
                false
            }
        }
    }

    pub async fn delete_task(&mut self, id: i64) -> bool {
        match self.service.delete_task(id).await {
            Ok(()) => {
                self.state.tasks.retain(|task| task.id != id);
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, task_id = id, "failed to delete task");
                false
            }
        }
    }

    /// Ends the session on a best-effort basis; the view always ends up on
    /// sign-in.
    pub async fn logout(&mut self) -> Route {
        if let Err(e) = self.service.logout().await {
            tracing::warn!(error = %e, "logout failed");
        }
        self.state = DashboardState::default();
        self.redirect = Some(Route::SignIn);
        Route::SignIn
    }

    fn task(&self, id: i64) -> Option<&Task> {
        self.state.tasks.iter().find(|task| task.id == id)
    }
}
