use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::callback::handler::receive_callback,
    ),
    components(
        schemas(
            crate::modules::callback::dto::CallbackPayload,
            crate::modules::callback::dto::CallbackMetadata,
            crate::modules::callback::dto::CallbackResponse,
            crate::common::response::ErrorBody,
        )
    ),
    tags(
        (name = "Callback", description = "Video generation webhooks")
    )
)]
pub struct ApiDoc;
