pub mod azure_credentials;
pub mod generated_image;
pub mod image_options;
pub mod image_request_parameters;
pub mod input_spec;
