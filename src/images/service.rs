use reqwest::{Client, StatusCode};

use super::{
    enums::prompt_mode::PromptMode,
    errors::ImagesApiError,
    models::{
        azure_credentials::AzureCredentials, generated_image::GeneratedImage,
        image_options::ImageOptions, image_request_parameters::ImageRequestParameters,
        input_spec::InputSpec,
    },
    structs::{
        dalle_error_response::DalleErrorResponse,
        dalle_generate_image_response::DalleGenerateImageResponse,
    },
};

/// Builds the prompt for `mode` and requests exactly one image for it.
pub async fn generate_image(
    client: &Client,
    credentials: &AzureCredentials,
    mode: PromptMode,
    subject_text: &str,
    options: &ImageOptions,
) -> Result<GeneratedImage, ImagesApiError> {
    let parameters = ImageRequestParameters::new(mode, subject_text, options);

    tracing::info!(
        mode = mode.value(),
        size = %parameters.size,
        quality = %parameters.quality,
        style = %parameters.style,
        "generating image"
    );

    request_image(client, credentials, &parameters).await
}

/// One call, no retry. Every failure is logged and comes back as
/// `RequestFailure`.
pub async fn request_image(
    client: &Client,
    credentials: &AzureCredentials,
    parameters: &ImageRequestParameters,
) -> Result<GeneratedImage, ImagesApiError> {
    match dalle_generate_image(client, credentials, parameters).await {
        Ok(image) => Ok(image),
        Err(e) => {
            tracing::error!(%e);
            Err(e)
        }
    }
}

async fn dalle_generate_image(
    client: &Client,
    credentials: &AzureCredentials,
    parameters: &ImageRequestParameters,
) -> Result<GeneratedImage, ImagesApiError> {
    let input_spec = InputSpec::new(&credentials.deployment, parameters);

    let res = client
        .post(credentials.generations_url())
        .query(&[("api-version", credentials.api_version.as_str())])
        .header("api-key", &credentials.api_key)
        .json(&input_spec)
        .send()
        .await
        .map_err(ImagesApiError::request_failure)?;

    let status = res.status();
    let text = res.text().await.map_err(ImagesApiError::request_failure)?;

    if !status.is_success() {
        return Err(ImagesApiError::request_failure(describe_failure(
            status, &text,
        )));
    }

    let dalle_response: DalleGenerateImageResponse =
        serde_json::from_str(&text).map_err(ImagesApiError::request_failure)?;

    let Some(data) = dalle_response.data.into_iter().next()
    else {
        return Err(ImagesApiError::request_failure(
            "the response contained no images",
        ));
    };

    let Some(url) = data.url
    else {
        return Err(ImagesApiError::request_failure(
            "the generated image has no url",
        ));
    };

    Ok(GeneratedImage {
        url,
        prompt: parameters.prompt.to_string(),
        revised_prompt: data.revised_prompt,
    })
}

fn describe_failure(status: StatusCode, text: &str) -> String {
    match serde_json::from_str::<DalleErrorResponse>(text) {
        Ok(body) => match body.error.code {
            Some(code) => format!("{} ({}): {}", status, code, body.error.message),
            None => format!("{}: {}", status, body.error.message),
        },
        Err(_) => format!("{}: {}", status, text),
    }
}
