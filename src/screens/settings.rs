use iced::{widget::{column, text, Container, vertical_space}, Length, Center};
use iced::widget::toggler;
use crate::app::{App, Message};
use crate::config::StorageBackend;

pub fn settings_screen(app: &App) -> Container<'_, Message> {
    let backend = match app.config.storage {
        StorageBackend::Json => "JSON",
        StorageBackend::Sqlite => "SQLite",
    };
    let persistence = match (&app.storage, app.config.persist_selection) {
        (Some(_), true) => format!(
            "Выбор фильтров сохраняется ({}, {})",
            backend,
            app.config.storage_path.display()
        ),
        (Some(_), false) => "Сохранение выбора фильтров отключено".to_string(),
        (None, _) => "Хранилище недоступно, настройки не сохраняются".to_string(),
    };

    let content = column![
        text("Настройки").size(30),
        vertical_space(),
        toggler(app.is_dark())
            .label("Тёмная тема")
            .on_toggle(Message::ThemeToggled),
        text(persistence),
        text(format!("Источник данных: {}", app.dataset_name)),
        text(format!("Строк на странице: {}", app.session.pagination().page_size())),
    ]
        .spacing(15)
        .align_x(Center);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(40)
}
