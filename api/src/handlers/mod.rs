pub mod error_handler;

pub use error_handler::{
    bad_request_response, handle_domain_error, unauthorized_response, validation_error_response,
    Language,
};
