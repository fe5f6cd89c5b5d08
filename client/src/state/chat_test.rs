use time::macros::datetime;

use super::*;
use crate::data::records::conversation;

const NOW: OffsetDateTime = datetime!(2024-11-07 10:00 UTC);

#[test]
fn send_trims_and_appends() {
    let mut chat = ChatState::new(conversation());
    let before = chat.messages.len();
    let sent = chat.send("  I shipped the migration  ", NOW).cloned().unwrap();
    assert_eq!(sent.content, "I shipped the migration");
    assert_eq!(sent.speaker, Speaker::User);
    assert_eq!(chat.messages.len(), before + 1);
}

#[test]
fn blank_input_is_ignored() {
    let mut chat = ChatState::default();
    assert!(chat.send("   \n", NOW).is_none());
    assert!(chat.messages.is_empty());
}

#[test]
fn reply_appends_a_canned_assistant_message() {
    let mut chat = ChatState::default();
    chat.send("hello", NOW);
    chat.reply(7, NOW);
    let last = chat.messages.last().unwrap();
    assert_eq!(last.speaker, Speaker::Assistant);
    assert!(CANNED_REPLIES.contains(&last.content.as_str()));
}

#[test]
fn canned_reply_covers_every_entry() {
    for (seed, expected) in CANNED_REPLIES.iter().enumerate() {
        assert_eq!(canned_reply(seed as u128), *expected);
    }
    assert_eq!(canned_reply(5), CANNED_REPLIES[0]);
}

#[test]
fn message_ids_are_unique() {
    let mut chat = ChatState::default();
    chat.send("a", NOW);
    chat.send("b", NOW);
    assert_ne!(chat.messages[0].id, chat.messages[1].id);
}
