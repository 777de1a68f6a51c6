use iced::Length;
use iced::widget::{Container, Row};
use crate::app::state::Screen;
use crate::screens::{nav_menu, schedule_screen, settings_screen};
use super::{App, Message};

impl App {
    pub fn view(&self) -> Row<'_, Message> {
        Row::new()
            .spacing(20)
            .push(
                // Левое меню
                Container::new(nav_menu(self))
                    .width(Length::Fixed(200.0))
                    .height(Length::Fill)
                    .padding(10),
            )
            .push(
                match &self.current_screen {
                    Screen::Schedule => schedule_screen(self),
                    Screen::Settings => settings_screen(self),
                }
                    .width(Length::Fill),
            )
    }
}
