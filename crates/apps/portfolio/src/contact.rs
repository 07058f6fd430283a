//! Contact form that validates input and hands off to the visitor's mail client.

use desktop_app_contract::AppServices;
use leptos::*;
use thiserror::Error;

use crate::content::PROFILE;

/// Shortest accepted message.
pub const MIN_MESSAGE_LEN: usize = 10;

/// Raw form input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender address.
    pub email: String,
    /// Optional subject line.
    pub subject: String,
    /// Message body.
    pub message: String,
}

/// Field-level validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContactError {
    /// Blank name.
    #[error("Please enter your name")]
    MissingName,
    /// Address without a `local@host.tld` shape.
    #[error("Please enter a valid email address")]
    InvalidEmail,
    /// Message under [`MIN_MESSAGE_LEN`] characters.
    #[error("Message must be at least {MIN_MESSAGE_LEN} characters")]
    MessageTooShort,
}

fn looks_like_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl ContactForm {
    /// Every validation failure, in field order.
    pub fn validate(&self) -> Vec<ContactError> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(ContactError::MissingName);
        }
        if !looks_like_email(self.email.trim()) {
            errors.push(ContactError::InvalidEmail);
        }
        if self.message.trim().chars().count() < MIN_MESSAGE_LEN {
            errors.push(ContactError::MessageTooShort);
        }
        errors
    }

    /// `mailto:` link addressed to `recipient`, or the validation failures.
    pub fn mailto(&self, recipient: &str) -> Result<String, Vec<ContactError>> {
        let errors = self.validate();
        if !errors.is_empty() {
            return Err(errors);
        }
        let subject = match self.subject.trim() {
            "" => format!("Hello from {}", self.name.trim()),
            subject => subject.to_string(),
        };
        let body = format!(
            "{}\n\n{} <{}>",
            self.message.trim(),
            self.name.trim(),
            self.email.trim()
        );
        Ok(format!(
            "mailto:{recipient}?subject={}&body={}",
            urlencoding::encode(&subject),
            urlencoding::encode(&body)
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SubmitStatus {
    Idle,
    Sent,
}

#[component]
/// Contact details and message form.
pub fn ContactApp(
    /// Runtime services used to open the mail client and social links.
    services: AppServices,
) -> impl IntoView {
    let form = create_rw_signal(ContactForm::default());
    let errors = create_rw_signal(Vec::<ContactError>::new());
    let status = create_rw_signal(SubmitStatus::Idle);

    let field_error = move |error: ContactError| {
        move || {
            errors
                .with(|errors| errors.contains(&error))
                .then(|| view! { <p class="field-error" role="alert">{error.to_string()}</p> })
        }
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        match form.with_untracked(|form| form.mailto(PROFILE.email)) {
            Ok(link) => {
                services.shell.open_external_url(link);
                errors.set(Vec::new());
                form.set(ContactForm::default());
                status.set(SubmitStatus::Sent);
            }
            Err(found) => {
                errors.set(found);
                status.set(SubmitStatus::Idle);
            }
        }
    };

    view! {
        <div class="app-shell app-contact-shell">
            <header class="app-header">
                <h1>"Get In Touch"</h1>
                <p>"Have a project in mind? Let's work together."</p>
            </header>
            <div class="contact-layout">
                <aside class="contact-cards">
                    <button type="button" on:click=move |_| services.shell.open_external_url(format!("mailto:{}", PROFILE.email))>
                        <strong>"Email"</strong>
                        <span>{PROFILE.email}</span>
                    </button>
                    <button type="button" on:click=move |_| services.shell.open_external_url(PROFILE.github_url)>
                        <strong>"GitHub"</strong>
                        <span>"@jordan-avery"</span>
                    </button>
                    <button type="button" on:click=move |_| services.shell.open_external_url(PROFILE.linkedin_url)>
                        <strong>"LinkedIn"</strong>
                        <span>"in/jordan-avery"</span>
                    </button>
                </aside>
                <form class="contact-form" on:submit=on_submit novalidate=true>
                    <label>
                        "Name"
                        <input
                            type="text"
                            prop:value=move || form.with(|form| form.name.clone())
                            on:input=move |ev| form.update(|form| form.name = event_target_value(&ev))
                        />
                    </label>
                    {field_error(ContactError::MissingName)}
                    <label>
                        "Email"
                        <input
                            type="email"
                            prop:value=move || form.with(|form| form.email.clone())
                            on:input=move |ev| form.update(|form| form.email = event_target_value(&ev))
                        />
                    </label>
                    {field_error(ContactError::InvalidEmail)}
                    <label>
                        "Subject"
                        <input
                            type="text"
                            prop:value=move || form.with(|form| form.subject.clone())
                            on:input=move |ev| form.update(|form| form.subject = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Message"
                        <textarea
                            rows="6"
                            prop:value=move || form.with(|form| form.message.clone())
                            on:input=move |ev| form.update(|form| form.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    {field_error(ContactError::MessageTooShort)}
                    <button type="submit" class="contact-submit">"Send Message"</button>
                    <Show when=move || status.get() == SubmitStatus::Sent fallback=|| ()>
                        <p class="contact-sent" role="status">"Your mail app should open with the message ready to send."</p>
                    </Show>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Sam Lee".to_string(),
            email: "sam@example.com".to_string(),
            subject: String::new(),
            message: "Let's build something fast.".to_string(),
        }
    }

    #[test]
    fn valid_form_produces_an_encoded_mailto_link() {
        assert_eq!(
            filled().mailto("hello@jordanavery.dev"),
            Ok("mailto:hello@jordanavery.dev?subject=Hello%20from%20Sam%20Lee&body=Let%27s%20build%20something%20fast.%0A%0ASam%20Lee%20%3Csam%40example.com%3E".to_string())
        );
    }

    #[test]
    fn every_invalid_field_is_reported() {
        let form = ContactForm {
            name: "  ".to_string(),
            email: "sam@".to_string(),
            subject: "Hi".to_string(),
            message: "short".to_string(),
        };
        assert_eq!(
            form.mailto("x@y.z"),
            Err(vec![
                ContactError::MissingName,
                ContactError::InvalidEmail,
                ContactError::MessageTooShort,
            ])
        );
    }

    #[test]
    fn email_shape_checks() {
        for good in ["a@b.co", "first.last@sub.example.org"] {
            assert!(looks_like_email(good), "{good}");
        }
        for bad in ["", "plain", "@b.co", "a@b", "a@.co", "a@b.", "a b@c.de", "a@b@c.de"] {
            assert!(!looks_like_email(bad), "{bad}");
        }
    }
}
