pub mod request;
pub mod response;

pub use request::{ContactRequest, MESSAGE_MAX_LEN};
pub use response::ContactResponse;

use crate::usecases::common::UseCaseMetadata;

pub struct SubmitContact;

impl UseCaseMetadata for SubmitContact {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "submit_contact"
    }

    fn display_name() -> &'static str {
        "Contact form submission"
    }
}
