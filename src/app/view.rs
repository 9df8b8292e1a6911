// src/app/view.rs
//! Application view rendering

use iced::time::Instant;
use iced::widget::{Space, container, stack};
use iced::{Alignment, Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, theme, widgets};

impl App {
    /// Build the main window view
    pub fn view(&self) -> Element<'_, Message> {
        let now = Instant::now();

        let deck = container(components::deck::view(
            self.deck.entries(),
            now,
            self.ui.window_width,
        ))
        .width(Fill)
        .height(Fill)
        .style(theme::main_content);

        // Toast overlay (empty space if not visible)
        let toast_overlay: Element<'_, Message> = if let Some(toast) = &self.ui.toast {
            container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(20)
                .align_x(Alignment::Center)
                .align_y(Alignment::End)
                .into()
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![deck, toast_overlay].width(Fill).height(Fill).into()
    }
}
