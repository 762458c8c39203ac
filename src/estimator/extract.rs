use crate::error::EstimateError;
use crate::models::{Conversation, ExtractedMessages, Role};
use crate::utils::utc_date_from_epoch_seconds;

/// Collect user text, assistant text and message dates from every conversation
///
/// Every node in each conversation's `mapping` is visited, regardless of whether it lies on
/// the branch ending at `current_node`. For a node with a message:
///
/// - when the message has content, its parts go to the user or assistant list by role
///   (other roles contribute no text)
/// - when `create_time` is present and non-zero, its UTC date is recorded, whatever the role
///
/// Empty parts are kept here; they are dropped at tokenization.
///
/// # Errors
///
/// Returns [`EstimateError::TimestampOutOfRange`] if a `create_time` cannot be represented
/// as a date.
pub fn extract_messages(
    conversations: &[Conversation],
) -> Result<ExtractedMessages, EstimateError> {
    let mut extracted = ExtractedMessages::default();

    for conversation in conversations {
        for item in conversation.mapping.values() {
            let Some(message) = &item.message else {
                continue;
            };

            if let Some(content) = &message.content {
                match message.author.role() {
                    Role::User => extracted.user_messages.extend_from_slice(content.parts()),
                    Role::Assistant => {
                        extracted.assistant_messages.extend_from_slice(content.parts())
                    }
                    Role::Other => {}
                }
            }

            if let Some(create_time) = message.create_time
                && create_time != 0.0
            {
                let date = utc_date_from_epoch_seconds(create_time)
                    .ok_or(EstimateError::TimestampOutOfRange(create_time))?;
                extracted.message_dates.push(date);
            }
        }
    }

    Ok(extracted)
}
