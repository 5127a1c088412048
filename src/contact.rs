use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Form control name, also the key the relay receives.
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Name => "Your name",
            Self::Email => "Your email",
            Self::Message => "Your message",
        }
    }
}

impl std::fmt::Display for ContactField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    Missing(ContactField),
    #[error("email must be a valid address")]
    InvalidEmail,
    #[error("message was already sent")]
    AlreadySubmitted,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactSubmission {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    /// Fields are checked in form order; the first failure is reported.
    pub fn validate(&self) -> Result<(), ContactError> {
        if let Some(field) = ContactField::ALL
            .into_iter()
            .find(|field| self.value(*field).trim().is_empty())
        {
            return Err(ContactError::Missing(field));
        }

        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail);
        }

        Ok(())
    }
}

/// Lets one valid submission through per page session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SubmitGate {
    submitted: bool,
}

impl SubmitGate {
    pub fn admit(&mut self, submission: &ContactSubmission) -> Result<(), ContactError> {
        if self.submitted {
            return Err(ContactError::AlreadySubmitted);
        }

        submission.validate()?;
        self.submitted = true;
        Ok(())
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }
}

/// The grammar browsers enforce for `<input type="email">`.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty() && local.chars().all(is_local_part_char) && domain.split('.').all(is_domain_label)
}

fn is_local_part_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    (1..=63).contains(&label.len())
        && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
        && !label.starts_with('-')
        && !label.ends_with('-')
}
