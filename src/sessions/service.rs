use crate::{
    app::models::api_error::ApiError,
    images::{
        self, dtos::generate_image_dto::GenerateImageDto, enums::prompt_mode::PromptMode,
        models::image_options::ImageOptions,
    },
    AppState,
};

use super::{
    dtos::select_example_dto::SelectExampleDto,
    errors::SessionsApiError,
    models::{
        session::{Session, SessionStore},
        session_generation::SessionGeneration,
    },
};

pub async fn create_session(store: &SessionStore) -> Session {
    let session = Session::new();
    save_session(&session, store).await;

    tracing::debug!("created session {}", session.id);

    session
}

pub async fn get_session_by_id(id: &str, store: &SessionStore) -> Result<Session, ApiError> {
    match store.read().await.get(id) {
        Some(session) => Ok(session.clone()),
        None => Err(SessionsApiError::SessionNotFound.value()),
    }
}

pub async fn reset_session_by_id(id: &str, store: &SessionStore) -> Result<Session, ApiError> {
    let mut sessions = store.write().await;

    let Some(session) = sessions.remove(id)
    else {
        return Err(SessionsApiError::SessionNotFound.value());
    };

    let session = session.reset();
    sessions.insert(session.id.to_string(), session.clone());

    Ok(session)
}

/// Generates from free text. The title is left as it was.
pub async fn generate_for_session(
    id: &str,
    dto: &GenerateImageDto,
    state: &AppState,
) -> Result<SessionGeneration, ApiError> {
    let session = get_session_by_id(id, &state.sessions).await?;

    generate_and_store(session, dto.mode, &dto.subject, &dto.options(), state).await
}

/// Picks an example subject. The title changes before the request is made,
/// so it sticks even when the request fails.
pub async fn select_example_for_session(
    id: &str,
    dto: &SelectExampleDto,
    state: &AppState,
) -> Result<SessionGeneration, ApiError> {
    let session = get_session_by_id(id, &state.sessions).await?;

    let Some(example) = dto.example()
    else {
        return Err(SessionsApiError::ExampleNotFound.value());
    };

    let session = session.with_title(example);
    save_session(&session, &state.sessions).await;

    generate_and_store(session, dto.mode, example, &dto.options(), state).await
}

pub async fn evict_sessions_older_than(cutoff_secs: u64, store: &SessionStore) -> usize {
    let mut sessions = store.write().await;
    let before = sessions.len();

    sessions.retain(|_, session| session.created_at >= cutoff_secs as i64);

    before - sessions.len()
}

async fn generate_and_store(
    session: Session,
    mode: PromptMode,
    subject_text: &str,
    options: &ImageOptions,
    state: &AppState,
) -> Result<SessionGeneration, ApiError> {
    let result = images::service::generate_image(
        &state.http,
        &state.envy.credentials(),
        mode,
        subject_text,
        options,
    )
    .await;

    match result {
        Ok(image) => {
            let session = session.with_result(&Ok(image.clone()));
            save_session(&session, &state.sessions).await;

            Ok(SessionGeneration { session, image })
        }
        Err(e) => Err(e.value()),
    }
}

// Concurrent generations are not serialized; the last writer wins.
async fn save_session(session: &Session, store: &SessionStore) {
    store
        .write()
        .await
        .insert(session.id.to_string(), session.clone());
}
