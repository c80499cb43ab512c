use actix_web::http::Method;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;

use crate::commands::CommandRouter;

/// Telegram update payload, reduced to the fields the router needs.
#[derive(Debug, Deserialize)]
pub struct Update {
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Chat {
    pub id: i64,
}

pub struct BotState {
    pub router: CommandRouter,
    pub authorized_chat_id: String,
}

/// Webhook entry point. Guards run in fixed order (transport, payload,
/// identity) and every branch acknowledges 200 OK; the transport never
/// sees an error status.
pub async fn webhook(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<BotState>,
) -> HttpResponse {
    if req.method() != Method::POST {
        return ok();
    }

    let Ok(update) = serde_json::from_slice::<Update>(&body) else {
        tracing::debug!("ignoring unparsable update");
        return ok();
    };

    let Some(message) = update.message else {
        return ok();
    };

    if message.chat.id.to_string() != state.authorized_chat_id {
        tracing::debug!(chat_id = message.chat.id, "ignoring message from unauthorized chat");
        return ok();
    }

    let text = message.text.unwrap_or_default();
    state.router.handle_command(text.trim()).await;

    ok()
}

fn ok() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}
