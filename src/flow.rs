//! Backup creation flow.
//!
//! The flow is a plain state machine: user actions and the settlement of the
//! remote call go in, [`FlowEffect`]s come out. It never touches the flash
//! store or the backup collection itself; the owner applies the effects (see
//! [`crate::state::PanelState`]).
//!
//! ```text
//! Closed --open--> Open/Idle --submit(valid)--> Open/Submitting
//!                     ^   |                        |       |
//!                     |   +--submit(invalid)--+    |       |
//!                     |        (field error)  |    |       |
//!                     +-----------------------+    |       |
//!                     +------------ failure -------+       |
//! Closed <------------------------- success ---------------+
//! ```

use tracing::{debug, error, warn};

use crate::api::BackupApi;
use crate::error::{http_error_to_human, HttpError, SubmitRejected, ValidationErrors};
use crate::flash::{FlashCommand, FlashMessage, BACKUPS_CREATE};
use crate::store::BackupCommand;
use crate::types::{BackupFormValues, BackupRecord, CreateBackupRequest, ServerId};
use crate::validation::validate_backup_form;

/// Progress of the current (or last) submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Submission {
    #[default]
    Idle,
    /// A remote call is in flight. Submitting again is rejected.
    Submitting,
    /// The last submission created a backup and closed the dialog.
    Succeeded,
    /// The last submission failed; the dialog is open for a retry.
    Failed(String),
}

/// Work for the owner of the flow.
#[derive(Debug, Clone, PartialEq)]
pub enum FlowEffect {
    Flash(FlashCommand),
    Store(BackupCommand),
}

/// Everything needed to perform the remote call for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub server: ServerId,
    pub request: CreateBackupRequest,
}

#[derive(Debug, Clone, Default)]
struct OpenForm {
    values: BackupFormValues,
    errors: Option<ValidationErrors>,
}

#[derive(Debug, Clone)]
pub struct CreateBackupFlow {
    server: ServerId,
    form: Option<OpenForm>,
    submission: Submission,
}

fn clear_flashes() -> FlowEffect {
    FlowEffect::Flash(FlashCommand::clear(BACKUPS_CREATE))
}

impl CreateBackupFlow {
    pub fn new(server: ServerId) -> Self {
        Self { server, form: None, submission: Submission::Idle }
    }

    pub fn server(&self) -> &ServerId {
        &self.server
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == Submission::Submitting
    }

    /// Current form values, `None` while closed.
    pub fn values(&self) -> Option<&BackupFormValues> {
        self.form.as_ref().map(|f| &f.values)
    }

    pub fn field_error(&self, field: &str) -> Option<&str> {
        self.form.as_ref()?.errors.as_ref()?.for_field(field)
    }

    /// Opens the dialog with empty fields. Opening an open dialog does nothing.
    pub fn open(&mut self) -> Vec<FlowEffect> {
        if self.form.is_some() {
            return Vec::new();
        }
        debug!(server = %self.server, "backup dialog opened");
        self.form = Some(OpenForm::default());
        self.submission = Submission::Idle;
        vec![clear_flashes()]
    }

    /// Closes the dialog and drops the form. Ignored while a submission is in
    /// flight, since the remote call cannot be cancelled.
    pub fn dismiss(&mut self) -> Vec<FlowEffect> {
        if self.form.is_none() {
            return Vec::new();
        }
        if self.is_submitting() {
            debug!("dismiss ignored while submitting");
            return Vec::new();
        }
        debug!(server = %self.server, "backup dialog dismissed");
        self.form = None;
        self.submission = Submission::Idle;
        vec![clear_flashes()]
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        if let Some(form) = self.form.as_mut() {
            form.values.name = name.into();
            form.revalidate();
        }
    }

    pub fn set_ignored(&mut self, ignored: impl Into<String>) {
        if let Some(form) = self.form.as_mut() {
            form.values.ignored = ignored.into();
            form.revalidate();
        }
    }

    /// Validates the form and, if it passes, moves to `Submitting`.
    ///
    /// The returned ticket must be turned into exactly one remote call whose
    /// outcome is handed to [`settle`](Self::settle).
    pub fn submit(&mut self) -> Result<(SubmitTicket, Vec<FlowEffect>), SubmitRejected> {
        let submitting = self.is_submitting();
        let form = self.form.as_mut().ok_or(SubmitRejected::Closed)?;
        if submitting {
            return Err(SubmitRejected::AlreadySubmitting);
        }
        if let Err(errors) = validate_backup_form(&form.values) {
            debug!(?errors, "backup form rejected");
            form.errors = Some(errors.clone());
            return Err(SubmitRejected::Invalid(errors));
        }
        form.errors = None;

        let ticket = SubmitTicket {
            server: self.server.clone(),
            request: CreateBackupRequest::from(&form.values),
        };
        self.submission = Submission::Submitting;
        debug!(server = %self.server, "backup submission started");
        Ok((ticket, vec![clear_flashes()]))
    }

    /// Applies the outcome of the remote call started by [`submit`](Self::submit).
    ///
    /// Outcomes arriving while no submission is in flight are dropped.
    pub fn settle(&mut self, result: Result<BackupRecord, HttpError>) -> Vec<FlowEffect> {
        if !self.is_submitting() {
            warn!("backup settlement without a submission in flight, dropped");
            return Vec::new();
        }
        match result {
            Ok(record) => {
                debug!(uuid = %record.uuid, "backup created");
                self.form = None;
                self.submission = Submission::Succeeded;
                vec![FlowEffect::Store(BackupCommand::Append(record)), clear_flashes()]
            }
            Err(err) => {
                error!(server = %self.server, error = ?err, "failed to create backup");
                let message = http_error_to_human(&err);
                self.submission = Submission::Failed(message.clone());
                vec![FlowEffect::Flash(FlashCommand::Add(FlashMessage::error(BACKUPS_CREATE, message)))]
            }
        }
    }

    /// Submits and awaits the remote call in one go.
    ///
    /// Convenient where the flow is not shared with a renderer while the call
    /// is in flight (CLI, tests).
    pub async fn submit_with<A>(&mut self, api: &A) -> Result<Vec<FlowEffect>, SubmitRejected>
    where
        A: BackupApi + ?Sized,
    {
        let (ticket, mut effects) = self.submit()?;
        let result = api.create_backup(&ticket.server, &ticket.request).await;
        effects.extend(self.settle(result));
        Ok(effects)
    }
}

impl OpenForm {
    // Errors are only refreshed once a submit has produced them.
    fn revalidate(&mut self) {
        if self.errors.is_some() {
            self.errors = validate_backup_form(&self.values).err();
        }
    }
}
