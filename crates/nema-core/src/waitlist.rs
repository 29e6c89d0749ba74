//! Waitlist Form State
//!
//! `[unsubmitted] --submit--> [submitted]`, one way, once. Nothing is sent
//! anywhere; format checks are left to the browser's `type="email"` and
//! `required` attributes.

/// Local state behind the waitlist form
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Waitlist {
    email: String,
    submitted: bool,
}

impl Waitlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind the input value. Ignored after submission.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if !self.submitted {
            self.email = email.into();
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Mark the form submitted. Returns `true` only for the call that
    /// made the transition.
    pub fn submit(&mut self) -> bool {
        if self.submitted {
            return false;
        }
        self.submitted = true;
        tracing::debug!("waitlist submitted");
        true
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}
