use contracts::usecases::common::FieldError;
use contracts::usecases::u501_submit_contact::{ContactRequest, ContactResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::submit_contact;

/// Первая ошибка для поля формы
pub fn field_message(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.clone())
}

#[component]
#[allow(non_snake_case)]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let error_msg = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let accepted = RwSignal::new(None::<ContactResponse>);

    let on_submit = move |_| {
        let request = ContactRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            phone: Some(phone.get_untracked()),
            message: message.get_untracked(),
        }
        .normalized();

        // Сначала проверка на клиенте, сервер повторит её
        let errors = request.validate();
        if !errors.is_empty() {
            field_errors.set(errors);
            return;
        }

        field_errors.set(Vec::new());
        error_msg.set(None);
        submitting.set(true);
        spawn_local(async move {
            match submit_contact(&request).await {
                Ok(response) => {
                    log::info!("Contact request accepted: {}", response.id);
                    accepted.set(Some(response));
                }
                Err(e) => {
                    field_errors.set(e.field_errors);
                    error_msg.set(Some(e.message));
                }
            }
            submitting.set(false);
        });
    };

    let error_for = move |field: &'static str| {
        move || {
            field_errors
                .with(|errors| field_message(errors, field))
                .map(|m| view! { <span class="form__error">{m}</span> })
        }
    };

    view! {
        <Show
            when=move || accepted.get().is_none()
            fallback=|| view! {
                <div class="contact-form contact-form--sent">
                    <MessageBar intent=MessageBarIntent::Success>
                        <MessageBarBody>
                            <MessageBarTitle>"Thank you!"</MessageBarTitle>
                            "Your message has been received. We will get back to you within one business day."
                        </MessageBarBody>
                    </MessageBar>
                </div>
            }
        >
            <div class="contact-form">
                {move || error_msg.get().map(|m| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{m}</MessageBarBody>
                    </MessageBar>
                })}

                <div class="form-group">
                    <label>"Name"</label>
                    <Input value=name placeholder="Your name" />
                    {error_for("name")}
                </div>
                <div class="form-group">
                    <label>"Email"</label>
                    <Input value=email input_type=InputType::Email placeholder="you@example.com" />
                    {error_for("email")}
                </div>
                <div class="form-group">
                    <label>"Phone (optional)"</label>
                    <Input value=phone input_type=InputType::Tel placeholder="+1 (555) 123-4567" />
                    {error_for("phone")}
                </div>
                <div class="form-group">
                    <label>"Message"</label>
                    <Textarea value=message placeholder="Tell us about your project" attr:rows=6 />
                    {error_for("message")}
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=move || submitting.get()
                    on_click=on_submit
                >
                    {move || if submitting.get() { "Sending..." } else { "Send Message" }}
                </Button>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_message_picks_first_match() {
        let errors = vec![
            FieldError::new("email", "Email is required"),
            FieldError::new("email", "second"),
            FieldError::new("name", "Name is required"),
        ];
        assert_eq!(field_message(&errors, "email").as_deref(), Some("Email is required"));
        assert_eq!(field_message(&errors, "phone"), None);
    }
}
