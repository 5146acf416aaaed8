//! Seeded demo data.
//!
//! The seed ships as embedded JSON with message ages relative to "now";
//! the composition root materializes it against an explicit timestamp so
//! nothing in the library reads a clock.

use serde::Deserialize;

use flick_api_core::Profile;

use crate::chat::{Chat, Message, MessageId};

#[derive(Clone, Debug, Deserialize)]
pub struct SeedData {
    pub current_user: Profile,
    pub candidates: Vec<Profile>,
    chats: Vec<SeedChat>,
}

#[derive(Clone, Debug, Deserialize)]
struct SeedChat {
    id: String,
    /// Candidate profile id of the other participant.
    with: String,
    #[serde(default)]
    unread: u32,
    messages: Vec<SeedMessage>,
}

#[derive(Clone, Debug, Deserialize)]
struct SeedMessage {
    from: SeedSender,
    text: String,
    /// Minutes before "now" the message was sent.
    age_minutes: u64,
}

#[derive(Copy, Clone, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum SeedSender {
    Me,
    Them,
}

/// Parse the embedded seed. The asset is fixed at build time, so a parse
/// failure is a packaging bug.
pub fn load_seed() -> SeedData {
    serde_json::from_str(include_str!("../assets/seed.json")).expect("seed data should parse")
}

impl SeedData {
    /// Materialize the seeded chats against an absolute timestamp.
    /// Unknown `with` ids are skipped.
    pub fn chats_at(&self, now_ms: u64) -> Vec<Chat> {
        self.chats
            .iter()
            .filter_map(|sc| {
                let other = self.candidates.iter().find(|p| p.id.0 == sc.with)?;
                let messages = sc
                    .messages
                    .iter()
                    .enumerate()
                    .map(|(i, sm)| Message {
                        id: MessageId(format!("{}-msg-{i}", sc.id)),
                        text: sm.text.clone(),
                        sender: match sm.from {
                            SeedSender::Me => self.current_user.id.clone(),
                            SeedSender::Them => other.id.clone(),
                        },
                        sent_at_ms: now_ms.saturating_sub(sm.age_minutes * 60_000),
                    })
                    .collect();
                Some(Chat {
                    id: sc.id.as_str().into(),
                    participants: [self.current_user.clone(), other.clone()],
                    messages,
                    unread: sc.unread,
                })
            })
            .collect()
    }
}
