use super::{ContactForm, Enquiry, FormError, SUCCESS_MESSAGE, Submitter, failure_message};
use crate::log;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    /// Request in flight; inputs are disabled.
    Submitting,
    Success(String),
    Error(String),
}

impl FormState {
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Success(msg) | Self::Error(msg) => Some(msg),
            Self::Idle | Self::Submitting => None,
        }
    }
}

/// Proof of a started submission. Only the latest ticket of a mounted
/// controller can settle it.
#[derive(Debug)]
#[must_use = "a submission must be settled with its ticket"]
pub struct Ticket {
    id: u64,
    enquiry: Enquiry,
}

impl Ticket {
    pub fn enquiry(&self) -> &Enquiry {
        &self.enquiry
    }
}

/// Owns the form input and its state for one mounted page view.
#[derive(Debug)]
pub struct FormController {
    form: ContactForm,
    state: FormState,
    generation: u64,
    mounted: bool,
    phone_display: String,
}

impl FormController {
    /// `phone_display` is quoted in the failure message.
    pub fn new(phone_display: impl Into<String>) -> Self {
        Self {
            form: ContactForm::default(),
            state: FormState::Idle,
            generation: 0,
            mounted: true,
            phone_display: phone_display.into(),
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Replace the input. Ignored while a submission is in flight.
    pub fn fill(&mut self, form: ContactForm) {
        if !self.is_disabled() {
            self.form = form;
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_disabled(&self) -> bool {
        self.state == FormState::Submitting
    }

    /// Validate and move to `Submitting`. A validation failure shows its
    /// message and never reaches `Submitting`.
    pub fn begin(&mut self) -> Result<Ticket, FormError> {
        if self.is_disabled() {
            return Err(FormError::InFlight);
        }

        let enquiry = match self.form.validate() {
            Ok(enquiry) => enquiry,
            Err(err) => {
                self.state = FormState::Error(err.to_string());
                return Err(err);
            }
        };

        self.generation += 1;
        self.state = FormState::Submitting;
        Ok(Ticket {
            id: self.generation,
            enquiry,
        })
    }

    /// Record the outcome of a submission. Returns `false` and changes
    /// nothing when the ticket is stale or the view is gone.
    pub fn settle<E: std::fmt::Display>(&mut self, ticket: Ticket, result: Result<(), E>) -> bool {
        if !self.mounted || ticket.id != self.generation || !self.is_disabled() {
            return false;
        }

        match result {
            Ok(()) => {
                self.form.clear();
                self.state = FormState::Success(SUCCESS_MESSAGE.to_owned());
            }
            Err(err) => {
                log!("form"; "enquiry not delivered: {err}");
                self.state = FormState::Error(failure_message(&self.phone_display));
            }
        }
        true
    }

    /// Detach from the page view; later settles are ignored.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    /// Validate, send once, and settle.
    pub fn submit(&mut self, submitter: &dyn Submitter) -> &FormState {
        if let Ok(ticket) = self.begin() {
            let result = submitter.submit(ticket.enquiry());
            self.settle(ticket, result);
        }
        &self.state
    }
}
