use serde::{Deserialize, Serialize};

use crate::usecases::common::FieldError;

/// Максимальная длина сообщения
pub const MESSAGE_MAX_LEN: usize = 5000;

/// Заявка из формы обратной связи
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub message: String,
}

impl ContactRequest {
    /// Обрезать пробелы, пустой телефон превратить в `None`
    pub fn normalized(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self
                .phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
            message: self.message.trim().to_string(),
        }
    }

    /// Проверка полей; пустой список — заявка валидна
    pub fn validate(&self) -> Vec<FieldError> {
        let mut errors = Vec::new();
        let req = self.normalized();

        if req.name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        }

        if req.email.is_empty() {
            errors.push(FieldError::new("email", "Email is required"));
        } else if !is_plausible_email(&req.email) {
            errors.push(FieldError::new("email", "Email address looks invalid"));
        }

        if let Some(phone) = &req.phone {
            let allowed = phone
                .chars()
                .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '(' | ')' | '-'));
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            if !allowed || digits < 5 {
                errors.push(FieldError::new("phone", "Phone number looks invalid"));
            }
        }

        if req.message.is_empty() {
            errors.push(FieldError::new("message", "Message is required"));
        } else if req.message.chars().count() > MESSAGE_MAX_LEN {
            errors.push(FieldError::new(
                "message",
                format!("Message must be at most {} characters", MESSAGE_MAX_LEN),
            ));
        }

        errors
    }
}

/// local@domain.tld без пробелов
fn is_plausible_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2,
        None => false,
    }
}
