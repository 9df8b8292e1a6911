// src/app/update/window.rs
//! Window and animation frame handlers

use iced::Task;
use iced::time::Instant;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::AnimationTick => {
                self.deck.tick(Instant::now());
                Some(Task::none())
            }

            Message::WindowResized(size) => {
                self.ui.window_width = size.width;
                Some(Task::none())
            }

            _ => None,
        }
    }
}
