use std::time::Duration;

use reqwest::Client;

/// Builds the outbound client shared by every image request. Without a
/// timeout the transport default applies.
pub fn build_client(timeout_secs: Option<u64>) -> reqwest::Result<Client> {
    let mut builder = Client::builder();

    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    builder.build()
}
