pub mod api_url;
pub mod registration_client;
pub mod transport;
