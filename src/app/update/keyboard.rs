// src/app/update/keyboard.rs
//! Keyboard message handlers

use iced::Task;
use iced::keyboard::Key;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => {
                if modifiers.command() || modifiers.alt() {
                    return Some(Task::none());
                }
                match key.as_ref() {
                    Key::Character(c) if c.eq_ignore_ascii_case("r") => {
                        Some(Task::done(Message::ReloadDeck))
                    }
                    _ => Some(Task::none()),
                }
            }

            _ => None,
        }
    }
}
