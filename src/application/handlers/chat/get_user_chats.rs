//! GetUserChatsHandler - Query handler for listing a user's chats.

use std::sync::Arc;

use crate::domain::chat::{Chat, ChatError};
use crate::domain::foundation::UserId;
use crate::ports::ChatRepository;

use super::schema::Schema;

/// Query to list every chat a user owns.
#[derive(Debug, Clone)]
pub struct GetUserChatsQuery {
    pub user_id: String,
}

/// Handler for listing user chats, most recently updated first.
pub struct GetUserChatsHandler {
    repository: Arc<dyn ChatRepository>,
}

impl GetUserChatsHandler {
    pub fn new(repository: Arc<dyn ChatRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetUserChatsQuery) -> Result<Vec<Chat>, ChatError> {
        Schema::new()
            .required("userId", &query.user_id, "User ID is required")
            .finish("User ID is required")?;

        let user_id = UserId::new(query.user_id)?;
        let mut chats = self.repository.find_by_user_id(&user_id).await?;

        // Stable, so equal timestamps keep repository order
        chats.sort_by(|a, b| b.updated_at().cmp(a.updated_at()));

        Ok(chats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chat::NewChat;
    use crate::domain::foundation::{AssistantId, ChatId, DomainError, ErrorCode, Timestamp};
    use async_trait::async_trait;
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    struct MockChatRepository {
        chats: Vec<Chat>,
        fail_reads: bool,
    }

    impl MockChatRepository {
        fn with_chats(chats: Vec<Chat>) -> Self {
            Self {
                chats,
                fail_reads: false,
            }
        }

        fn failing() -> Self {
            Self {
                chats: Vec::new(),
                fail_reads: true,
            }
        }
    }

    #[async_trait]
    impl ChatRepository for MockChatRepository {
        async fn find_by_id(&self, _id: &ChatId) -> Result<Option<Chat>, DomainError> {
            Ok(None)
        }

        async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Chat>, DomainError> {
            if self.fail_reads {
                return Err(DomainError::new(ErrorCode::StorageError, "disk gone"));
            }
            Ok(self
                .chats
                .iter()
                .filter(|c| c.user_id() == user_id)
                .cloned()
                .collect())
        }

        async fn find_by_assistant_id(
            &self,
            _assistant_id: &AssistantId,
        ) -> Result<Vec<Chat>, DomainError> {
            Ok(vec![])
        }

        async fn save(&self, _chat: &Chat) -> Result<(), DomainError> {
            Ok(())
        }

        async fn update(&self, _chat: &Chat) -> Result<(), DomainError> {
            Ok(())
        }

        async fn delete(&self, _id: &ChatId) -> Result<(), DomainError> {
            Ok(())
        }

        async fn exists(&self, _id: &ChatId) -> Result<bool, DomainError> {
            Ok(false)
        }
    }

    fn chat_updated_at(user: &str, title: &str, millis: i64) -> Chat {
        let template = Chat::create(NewChat {
            user_id: user.to_string(),
            assistant_id: "a1".to_string(),
            title: title.to_string(),
            voice_style: "Calm".to_string(),
            topic: "Misc".to_string(),
            instructions: String::new(),
        })
        .unwrap();
        let at = Timestamp::from_datetime(Utc.timestamp_millis_opt(millis).unwrap());

        Chat::reconstitute(
            template.id().clone(),
            template.user_id().clone(),
            template.assistant_id().clone(),
            template.title().to_string(),
            template.voice_style().to_string(),
            template.topic().to_string(),
            template.instructions().to_string(),
            at,
            at,
            Vec::new(),
        )
    }

    fn query(user: &str) -> GetUserChatsQuery {
        GetUserChatsQuery {
            user_id: user.to_string(),
        }
    }

    #[tokio::test]
    async fn returns_most_recently_updated_first() {
        let repo = MockChatRepository::with_chats(vec![
            chat_updated_at("u1", "old", 1_000),
            chat_updated_at("u1", "new", 3_000),
            chat_updated_at("u1", "mid", 2_000),
        ]);
        let handler = GetUserChatsHandler::new(Arc::new(repo));

        let chats = handler.handle(query("u1")).await.unwrap();

        let titles: Vec<_> = chats.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn ties_keep_repository_order() {
        let repo = MockChatRepository::with_chats(vec![
            chat_updated_at("u1", "first", 5_000),
            chat_updated_at("u1", "second", 5_000),
            chat_updated_at("u1", "third", 5_000),
        ]);
        let handler = GetUserChatsHandler::new(Arc::new(repo));

        let chats = handler.handle(query("u1")).await.unwrap();

        let titles: Vec<_> = chats.iter().map(|c| c.title()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[tokio::test]
    async fn only_returns_requesting_users_chats() {
        let repo = MockChatRepository::with_chats(vec![
            chat_updated_at("u1", "mine", 1_000),
            chat_updated_at("u2", "theirs", 2_000),
        ]);
        let handler = GetUserChatsHandler::new(Arc::new(repo));

        let chats = handler.handle(query("u1")).await.unwrap();

        assert_eq!(chats.len(), 1);
        assert_eq!(chats[0].title(), "mine");
    }

    #[tokio::test]
    async fn unknown_user_gets_empty_list() {
        let handler = GetUserChatsHandler::new(Arc::new(MockChatRepository::with_chats(vec![])));
        assert!(handler.handle(query("nobody")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn blank_user_id_is_rejected() {
        let handler = GetUserChatsHandler::new(Arc::new(MockChatRepository::with_chats(vec![])));

        let err = handler.handle(query("   ")).await.unwrap_err();

        assert!(matches!(err, ChatError::ValidationFailed { .. }));
    }

    #[tokio::test]
    async fn propagates_repository_failure() {
        let handler = GetUserChatsHandler::new(Arc::new(MockChatRepository::failing()));

        let err = handler.handle(query("u1")).await.unwrap_err();

        assert!(matches!(err, ChatError::Infrastructure(_)));
    }

    proptest! {
        #[test]
        fn result_is_sorted_descending(stamps in proptest::collection::vec(0i64..10_000, 0..20)) {
            let chats = stamps
                .iter()
                .map(|ms| chat_updated_at("u1", "c", *ms))
                .collect();
            let handler = GetUserChatsHandler::new(Arc::new(MockChatRepository::with_chats(chats)));
            let rt = tokio::runtime::Runtime::new().unwrap();

            let result = rt.block_on(handler.handle(query("u1"))).unwrap();

            prop_assert_eq!(result.len(), stamps.len());
            for pair in result.windows(2) {
                prop_assert!(pair[0].updated_at() >= pair[1].updated_at());
            }
        }
    }
}
