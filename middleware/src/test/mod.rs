//! Unit tests for the middleware handlers, kept apart from the source files.


use dbot_core::{Chat, Message, User};

fn message_from(user_id: i64, content: &str) -> Message {
    Message::text(
        "msg-1",
        User {
            id: user_id,
            username: Some("collector".to_string()),
            first_name: Some("Col".to_string()),
            last_name: None,
        },
        Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content,
    )
}
