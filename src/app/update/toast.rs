// src/app/update/toast.rs
//! Toast notification handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle toast messages
    pub fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ShowToast(msg, style) => {
                let id = self.ui.show_toast(msg.clone(), *style);
                let lifetime = style.lifetime();
                // Auto-hide; a newer toast keeps its own timer
                Some(Task::perform(
                    async move {
                        tokio::time::sleep(lifetime).await;
                    },
                    move |_| Message::HideToast(id),
                ))
            }

            Message::HideToast(id) => {
                self.ui.hide_toast(*id);
                Some(Task::none())
            }

            _ => None,
        }
    }
}
