use iced::{
    widget::{button, horizontal_space, image, pick_list, text, text_input, Column, Container, Row, Scrollable, Space},
    Alignment, Element, Length,
};
use iced::widget::container::bordered_box;
use iced_font_awesome::fa_icon_solid;
use crate::app::{App, Message};
use crate::app::state::LOGO_PATH;
use crate::schedule::Record;
use crate::screens::nav_menu::icon_button_content;

const COLUMNS: [(&str, u16); 7] = [
    ("Регион", 3),
    ("Район", 3),
    ("Учреждение", 4),
    ("Звено", 2),
    ("День", 2),
    ("Сеанс", 2),
    ("Ответственный", 3),
];

fn selected(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

fn selector<'a>(
    label: &'a str,
    placeholder: &'a str,
    options: &'a [String],
    value: &str,
    on_select: fn(String) -> Message,
    on_clear: Message,
) -> Column<'a, Message> {
    let clear = button(fa_icon_solid("xmark"))
        .on_press_maybe((!value.is_empty()).then_some(on_clear));

    Column::new()
        .spacing(5)
        .push(text(label))
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(
                    pick_list(options, selected(value), on_select)
                        .placeholder(placeholder)
                        .width(Length::Fill),
                )
                .push(clear),
        )
        .width(Length::FillPortion(1))
}

fn table_row<'a>(cells: [&'a str; 7], header: bool) -> Row<'a, Message> {
    COLUMNS
        .iter()
        .zip(cells)
        .fold(Row::new().spacing(10), |row, ((_, portion), cell)| {
            let cell = if header { text(cell).size(16) } else { text(cell).size(14) };
            row.push(Container::new(cell).width(Length::FillPortion(*portion)))
        })
}

fn record_row(record: &Record) -> Row<'_, Message> {
    table_row(
        [
            &record.region,
            &record.district,
            &record.institution,
            &record.level,
            &record.day,
            &record.session,
            &record.responsible,
        ],
        false,
    )
}

fn status_line(app: &App) -> String {
    if app.is_loading {
        "Загрузка данных...".to_string()
    } else if let Some(e) = &app.load_error {
        format!("Ошибка загрузки данных: {}", e)
    } else {
        format!("Найдено записей: {}", app.session.filtered_len())
    }
}

pub fn schedule_screen(app: &App) -> Container<'_, Message> {
    let session = &app.session;
    let selection = session.selection();
    let pagination = session.pagination();

    let mut header = Row::new().spacing(15).align_y(Alignment::Center);
    if app.has_logo {
        header = header.push(image(LOGO_PATH).height(Length::Fixed(48.0)));
    }
    header = header.push(text("График обучения сотрудников по системе DMED").size(28));

    let selectors = Row::new()
        .spacing(15)
        .push(selector(
            "Регион:",
            "Выберите регион",
            session.region_options(),
            selection.region(),
            Message::RegionSelected,
            Message::RegionCleared,
        ))
        .push(selector(
            "Район:",
            "Выберите район",
            session.district_options(),
            selection.district(),
            Message::DistrictSelected,
            Message::DistrictCleared,
        ))
        .push(selector(
            "Учреждение:",
            "Выберите учреждение",
            session.institution_options(),
            selection.institution(),
            Message::InstitutionSelected,
            Message::InstitutionCleared,
        ));

    let actions = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(
            text_input("Поиск по учреждению...", selection.search())
                .on_input(Message::SearchChanged)
                .width(Length::FillPortion(3)),
        )
        .push(
            button(icon_button_content(fa_icon_solid("filter-circle-xmark"), "Сбросить"))
                .on_press_maybe((!selection.is_empty()).then_some(Message::ResetFilters)),
        )
        .push(
            button(icon_button_content(fa_icon_solid("file-import"), "Импорт"))
                .on_press(Message::ImportPressed),
        )
        .push(
            button(icon_button_content(fa_icon_solid("file-export"), "Экспорт"))
                .on_press_maybe((session.filtered_len() > 0).then_some(Message::ExportPressed)),
        );

    let mut rows = Column::new().spacing(8);
    for record in session.visible() {
        rows = rows.push(record_row(record));
    }
    let table = Column::new()
        .spacing(10)
        .push(
            Container::new(table_row(COLUMNS.map(|(title, _)| title), true))
                .style(bordered_box)
                .padding(8),
        )
        .push(Scrollable::new(rows).height(Length::Fill));

    let pager = Row::new()
        .spacing(10)
        .align_y(Alignment::Center)
        .push(
            button(fa_icon_solid("chevron-left"))
                .on_press_maybe(pagination.has_previous().then_some(Message::PreviousPage)),
        )
        .push(text(format!(
            "Страница {} из {}",
            pagination.current_page(),
            pagination.total_pages()
        )))
        .push(
            button(fa_icon_solid("chevron-right"))
                .on_press_maybe(pagination.has_next().then_some(Message::NextPage)),
        )
        .push(Space::with_width(20))
        .push(
            text_input("№", &app.page_input)
                .on_input(Message::PageInputChanged)
                .on_submit(Message::PageInputSubmitted)
                .width(Length::Fixed(60.0)),
        )
        .push(button("Перейти").on_press(Message::PageInputSubmitted))
        .push(horizontal_space())
        .push(text(status_line(app)));

    let mut content = Column::new()
        .spacing(15)
        .padding(20)
        .push(header)
        .push(selectors)
        .push(actions)
        .push(Container::new(table).height(Length::Fill))
        .push(pager);

    if let Some(message) = &app.status_message {
        content = content.push(text(message.as_str()));
    }

    let footer: Element<_> =
        text("© 2024 График обучения сотрудников по системе DMED | Все права защищены")
            .size(12)
            .into();

    Container::new(content.push(footer))
        .width(Length::Fill)
        .height(Length::Fill)
}
