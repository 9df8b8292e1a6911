//! Deck of swipe cards shown by the application
//!
//! The deck owns every card's state and decides which card receives pointer
//! events. Only one card may hold the gesture at a time.

use std::time::Instant;

use iced::Point;

use crate::features::thumbnails::Thumbnail;
use crate::features::users::User;
use crate::ui::swipe::{CardEvent, SwipeCard, SwipeConfig};

/// Stable identity of a card, unique for the lifetime of the app
pub type CardId = u64;

/// One card in the deck
#[derive(Debug)]
pub struct DeckEntry {
    pub id: CardId,
    pub user: User,
    pub thumbnail: Option<Thumbnail>,
    pub card: SwipeCard,
}

/// Ordered cards plus gesture routing
#[derive(Debug, Default)]
pub struct DeckState {
    entries: Vec<DeckEntry>,
    next_id: CardId,
    /// Card that owns the current gesture
    active: Option<CardId>,
    /// The active card was pressed before any cursor position was known
    awaiting_origin: bool,
    /// A thumbnail failed since the last load
    thumbnail_failed: bool,
}

impl DeckState {
    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: CardId) -> Option<&DeckEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: CardId) -> Option<&mut DeckEntry> {
        self.entries.iter_mut().find(|e| e.id == id)
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<CardId> {
        self.active
    }

    /// Replace every card with fresh, unmounted ones
    ///
    /// Returns the thumbnail references that need fetching, keyed by card.
    pub fn replace(&mut self, users: Vec<User>, config: SwipeConfig) -> Vec<(CardId, String)> {
        self.active = None;
        self.awaiting_origin = false;
        self.thumbnail_failed = false;
        self.entries.clear();

        let mut requests = Vec::with_capacity(users.len());
        for user in users {
            let id = self.next_id;
            self.next_id += 1;
            requests.push((id, user.thumbnail.clone()));
            self.entries.push(DeckEntry {
                id,
                user,
                thumbnail: None,
                card: SwipeCard::new(config),
            });
        }
        requests
    }

    /// Start the entry animation of every card not yet mounted
    pub fn mount_all(&mut self, now: Instant) {
        for entry in &mut self.entries {
            entry.card.mount(now);
        }
    }

    /// Pointer went down on a card
    ///
    /// Without a known cursor `position` the first cursor move becomes the
    /// press origin. Returns `false` when another card holds the gesture and
    /// refuses to give it up.
    pub fn press(&mut self, id: CardId, position: Option<Point>) -> bool {
        if let Some(active) = self.active.filter(|&a| a != id) {
            let released = !self.awaiting_origin
                && self
                    .get(active)
                    .map(|e| e.card.request_termination())
                    .unwrap_or(true);
            if !released {
                tracing::debug!("card {} keeps the gesture, ignoring press on {}", active, id);
                return false;
            }
            if let Some(entry) = self.get_mut(active) {
                entry.card.gesture_terminated();
            }
        }

        let Some(entry) = self.get_mut(id) else {
            return false;
        };
        if let Some(position) = position {
            entry.card.pointer_pressed(position);
        }
        self.awaiting_origin = position.is_none();
        self.active = Some(id);
        true
    }

    /// Forward a cursor move to the card owning the gesture
    pub fn moved(&mut self, position: Point) {
        let Some(id) = self.active else {
            return;
        };
        let first = std::mem::take(&mut self.awaiting_origin);
        if let Some(entry) = self.get_mut(id) {
            if first {
                entry.card.pointer_pressed(position);
            } else {
                entry.card.pointer_moved(position);
            }
        }
    }

    /// Forward a button release and end the gesture
    pub fn release(&mut self) -> Option<(CardId, CardEvent)> {
        let id = self.active.take()?;
        let unmoved = std::mem::take(&mut self.awaiting_origin);
        let card = &mut self.get_mut(id)?.card;
        if unmoved {
            // Pressed and released without the cursor moving: a tap
            card.pointer_pressed(Point::ORIGIN);
        }
        let event = card.pointer_released()?;
        Some((id, event))
    }

    /// The system took the pointer away from the active card
    pub fn terminate(&mut self) {
        self.awaiting_origin = false;
        if let Some(id) = self.active.take()
            && let Some(entry) = self.get_mut(id)
        {
            entry.card.gesture_terminated();
        }
    }

    /// Drop a card from the deck
    pub fn remove(&mut self, id: CardId) -> Option<User> {
        let index = self.entries.iter().position(|e| e.id == id)?;
        if self.active == Some(id) {
            self.active = None;
            self.awaiting_origin = false;
        }
        Some(self.entries.remove(index).user)
    }

    /// Attach a loaded thumbnail; stale ids are ignored
    pub fn set_thumbnail(&mut self, id: CardId, thumbnail: Thumbnail) -> bool {
        match self.get_mut(id) {
            Some(entry) => {
                entry.thumbnail = Some(thumbnail);
                true
            }
            None => false,
        }
    }

    /// Record a failed thumbnail fetch
    ///
    /// Returns `true` only for the first failure since the deck was loaded,
    /// so one bad batch is reported once.
    pub fn note_thumbnail_failure(&mut self, id: CardId) -> bool {
        if self.get(id).is_none() || self.thumbnail_failed {
            return false;
        }
        self.thumbnail_failed = true;
        true
    }

    pub fn set_hovered(&mut self, id: CardId, hovered: bool) {
        if let Some(entry) = self.get_mut(id) {
            entry.card.set_hovered(hovered);
        }
    }

    pub fn tick(&mut self, now: Instant) {
        for entry in &mut self.entries {
            entry.card.tick(now);
        }
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.entries.iter().any(|e| e.card.is_animating(now))
    }
}
