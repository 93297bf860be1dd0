use crate::foundation::error::{ScrollcueError, ScrollcueResult};

/// Contact form fields as typed by the visitor.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Name,
    Email,
    Company,
    Message,
}

impl ContactField {
    pub fn is_required(self) -> bool {
        !matches!(self, Self::Company)
    }
}

impl ContactForm {
    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    /// Required fields left blank, in form order.
    pub fn missing(&self) -> Vec<ContactField> {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Company,
            ContactField::Message,
        ]
        .into_iter()
        .filter(|f| f.is_required() && self.get(*f).trim().is_empty())
        .collect()
    }

    pub fn validate(&self) -> ScrollcueResult<()> {
        let missing = self.missing();
        if !missing.is_empty() {
            return Err(ScrollcueError::validation(format!(
                "contact form missing required fields: {missing:?}"
            )));
        }
        // Browser-level email check: something@something.
        let valid_email = self
            .email
            .trim()
            .split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && !host.is_empty() && !host.contains('@'));
        if !valid_email {
            return Err(ScrollcueError::validation("contact email is not an address"));
        }
        Ok(())
    }

    /// Validate and record the submission. Nothing is sent anywhere.
    pub fn submit(&self) -> ScrollcueResult<()> {
        self.validate()?;
        tracing::info!(
            name = %self.name,
            email = %self.email,
            company = %self.company,
            message_len = self.message.chars().count(),
            "contact form submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/contact.rs"]
mod tests;
