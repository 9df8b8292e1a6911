// src/app/update/deck.rs
//! Deck loading, thumbnail and card event handlers

use std::sync::Arc;

use iced::Task;
use iced::time::Instant;

use crate::app::deck::CardId;
use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;
use crate::features::users::sample_users;
use crate::ui::widgets::ToastStyle;

impl App {
    /// Handle deck-related messages
    pub fn handle_deck(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ReloadDeck => {
                tracing::info!("Reloading deck");
                Some(self.load_deck_task())
            }

            Message::UsersLoaded(users) => {
                let requests = self.deck.replace(users.clone(), self.core.swipe_config);
                self.deck.mount_all(Instant::now());
                tracing::info!("Deck ready with {} cards", self.deck.len());
                Some(self.fetch_thumbnails(requests))
            }

            Message::UsersLoadFailed(error) => {
                tracing::error!("Failed to load users: {}", error);
                Some(Task::batch([
                    Task::done(Message::ShowToast(
                        format!("Could not load users: {}", error),
                        ToastStyle::Error,
                    )),
                    Task::done(Message::UsersLoaded(sample_users())),
                ]))
            }

            Message::ThumbnailCacheReady(cache) => {
                self.core.thumbnail_cache = Some(Arc::clone(cache));
                // Cards loaded before the cache was ready still need images
                let pending: Vec<(CardId, String)> = self
                    .deck
                    .entries()
                    .iter()
                    .filter(|e| e.thumbnail.is_none())
                    .map(|e| (e.id, e.user.thumbnail.clone()))
                    .collect();
                Some(self.fetch_thumbnails(pending))
            }

            Message::ThumbnailLoaded(id, thumbnail) => match thumbnail {
                Some(thumb) => {
                    if !self.deck.set_thumbnail(*id, thumb.clone()) {
                        tracing::debug!("Dropping thumbnail for removed card {}", id);
                    }
                    Some(Task::none())
                }
                None if self.deck.note_thumbnail_failure(*id) => {
                    Some(Task::done(Message::ShowToast(
                        "Some thumbnails could not be loaded".to_string(),
                        ToastStyle::Error,
                    )))
                }
                None => Some(Task::none()),
            },

            Message::UserSelected(id) => {
                let task = match self.deck.get(*id) {
                    Some(entry) => {
                        tracing::info!("Selected {}", entry.user.name);
                        Task::done(Message::ShowToast(
                            format!("Selected {}", entry.user.name),
                            ToastStyle::Success,
                        ))
                    }
                    None => Task::none(),
                };
                Some(task)
            }

            Message::UserDismissed(id) => {
                if let Some(user) = self.deck.remove(*id) {
                    tracing::info!("Dismissed {}", user.name);
                }
                Some(Task::done(Message::ShowToast(
                    "Deleted!".to_string(),
                    ToastStyle::Info,
                )))
            }

            _ => None,
        }
    }

    /// Load the deck from the configured source
    pub fn load_deck_task(&self) -> Task<Message> {
        Task::perform(
            helpers::load_deck(self.core.users_path.clone()),
            |result| match result {
                Ok(users) => Message::UsersLoaded(users),
                Err(e) => Message::UsersLoadFailed(e.to_string()),
            },
        )
    }

    /// Fetch thumbnails for the given cards, if the cache is ready
    fn fetch_thumbnails(&self, requests: Vec<(CardId, String)>) -> Task<Message> {
        let Some(cache) = &self.core.thumbnail_cache else {
            return Task::none();
        };
        Task::batch(requests.into_iter().map(|(id, reference)| {
            Task::perform(
                helpers::load_thumbnail(Arc::clone(cache), reference),
                move |thumb| Message::ThumbnailLoaded(id, thumb),
            )
        }))
    }
}
