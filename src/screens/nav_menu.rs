use iced::{widget::{button, column}, Alignment, Element, Length, Renderer, Theme};
use iced::widget::{text, vertical_space, Container, Row};
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, Message};
use crate::app::state::Screen;

pub fn icon_button_content<'a>(
    icon_element: impl Into<Element<'a, Message, Theme, Renderer>>,
    label: &'a str,
) -> Row<'a, Message> {
    Row::new()
        .align_y(Alignment::Center)
        .spacing(5)
        .push(icon_element)
        .push(text(label))
}

pub fn nav_menu(app: &App) -> Container<'_, Message> {
    let go_to = |screen: Screen, message: Message| (app.current_screen != screen).then_some(message);

    let content = column![
        button(icon_button_content(fa_icon_solid("calendar-days"), "График"))
            .on_press_maybe(go_to(Screen::Schedule, Message::GoToSchedule))
            .width(Length::Fill),
        vertical_space(),
        button(icon_button_content(fa_icon_solid("gear"), "Настройки"))
            .on_press_maybe(go_to(Screen::Settings, Message::GoToSettings))
            .width(Length::Fill),
    ]
        .spacing(10);

    Container::new(content).height(Length::Fill)
}
