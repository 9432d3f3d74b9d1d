use std::rc::Rc;

use yew::prelude::*;

use crate::leads::{Lead, LeadSource, LeadStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FullName,
    Email,
    Phone,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::FullName, Field::Email, Field::Phone];

    /// DOM id of the input, also the lead's wire name for the value.
    pub fn id(&self) -> &'static str {
        match self {
            Field::FullName => "full_name",
            Field::Email => "email",
            Field::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub full_name: String,
    pub email: String,
    pub phone: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FullName => &self.full_name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
        }
    }

    /// Returns a copy with one field replaced, verbatim.
    pub fn with(&self, field: Field, value: String) -> FormState {
        let mut next = self.clone();
        match field {
            Field::FullName => next.full_name = value,
            Field::Email => next.email = value,
            Field::Phone => next.phone = value,
        }
        next
    }

    pub fn to_lead(&self, source: LeadSource) -> Lead {
        Lead {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            source,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Editing,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormAction {
    Update(Field, String),
    Submit,
    Succeeded,
    Failed,
}

/// Lead form state as driven by `use_reducer`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeadForm {
    pub fields: FormState,
    pub phase: Phase,
}

impl LeadForm {
    pub fn can_submit(&self) -> bool {
        self.phase == Phase::Editing
            && !self.fields.full_name.is_empty()
            && !self.fields.email.is_empty()
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == Phase::Submitted
    }

    /// Applies one action and returns the next state. Actions that make no
    /// sense in the current phase leave it untouched.
    pub fn apply(&self, action: FormAction) -> LeadForm {
        match (self.phase, action) {
            (Phase::Editing | Phase::Submitting, FormAction::Update(field, value)) => LeadForm {
                fields: self.fields.with(field, value),
                phase: self.phase,
            },
            (Phase::Editing, FormAction::Submit) => LeadForm {
                fields: self.fields.clone(),
                phase: Phase::Submitting,
            },
            (Phase::Submitting, FormAction::Succeeded) => LeadForm {
                fields: self.fields.clone(),
                phase: Phase::Submitted,
            },
            (Phase::Submitting, FormAction::Failed) => LeadForm {
                fields: self.fields.clone(),
                phase: Phase::Editing,
            },
            _ => self.clone(),
        }
    }
}

impl Reducible for LeadForm {
    type Action = FormAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

/// Hands the lead to the store and maps the outcome to the action that
/// settles the form. Failures are logged and otherwise dropped: the form
/// just returns to editing with the visitor's input intact.
pub async fn settle_submission<S>(store: &S, lead: Lead) -> FormAction
where
    S: LeadStore + ?Sized,
{
    match store.create(lead).await {
        Ok(()) => {
            log::info!("Lead submitted");
            FormAction::Succeeded
        }
        Err(err) => {
            log::error!("Error submitting form: {}", err);
            FormAction::Failed
        }
    }
}
