// src/app/update/gesture.rs
//! Pointer routing for card gestures

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::ui::swipe::CardEvent;

impl App {
    /// Handle pointer and hover messages
    pub fn handle_gesture(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::CardPressed(id) => {
                let origin = self.core.mouse_position;
                if self.deck.press(*id, origin) {
                    tracing::debug!("card {} pressed at {:?}", id, origin);
                }
                Some(Task::none())
            }

            Message::PointerMoved(position) => {
                self.core.mouse_position = Some(*position);
                self.deck.moved(*position);
                Some(Task::none())
            }

            Message::PointerReleased => {
                let task = match self.deck.release() {
                    Some((id, CardEvent::Selected)) => Task::done(Message::UserSelected(id)),
                    Some((id, CardEvent::Dismissed)) => Task::done(Message::UserDismissed(id)),
                    None => Task::none(),
                };
                Some(task)
            }

            Message::GestureTerminated => {
                self.deck.terminate();
                Some(Task::none())
            }

            Message::CardHovered(id) => {
                self.deck.set_hovered(*id, true);
                Some(Task::none())
            }

            Message::CardUnhovered(id) => {
                self.deck.set_hovered(*id, false);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
