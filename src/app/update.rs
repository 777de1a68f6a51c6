use iced::Task;

use crate::app::state::{theme_for, Screen, DARK_THEME_KEY};
use crate::export;
use crate::schedule::{persist, RecordStore, Selection};
use super::{App, Message};

pub const INVALID_PAGE: &str = "Неверный номер страницы";

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::GoToSchedule => {
                self.current_screen = Screen::Schedule;
                Task::none()
            }
            Message::GoToSettings => {
                self.current_screen = Screen::Settings;
                Task::none()
            }
            Message::DatasetLoaded(result) => {
                self.is_loading = false;
                match result {
                    Ok(rows) => {
                        let store = RecordStore::new(rows);
                        let initial = match &self.storage {
                            Some(storage) if self.config.persist_selection => {
                                persist::restore(storage.as_ref(), store.records())
                            }
                            _ => Selection::default(),
                        };
                        self.session.load(store, &initial);
                        self.load_error = None;
                    }
                    Err(e) => {
                        tracing::error!("Dataset load failed: {}", e);
                        self.load_error = Some(e);
                    }
                }
                Task::none()
            }
            Message::RegionSelected(region) => {
                self.session.set_region(region);
                self.selection_changed()
            }
            Message::RegionCleared => {
                self.session.set_region("");
                self.selection_changed()
            }
            Message::DistrictSelected(district) => {
                self.session.set_district(district);
                self.selection_changed()
            }
            Message::DistrictCleared => {
                self.session.set_district("");
                self.selection_changed()
            }
            Message::InstitutionSelected(institution) => {
                self.session.set_institution(institution);
                self.selection_changed()
            }
            Message::InstitutionCleared => {
                self.session.set_institution("");
                self.selection_changed()
            }
            Message::SearchChanged(text) => {
                // Строка поиска не сохраняется
                self.session.set_search(text);
                self.status_message = None;
                self.page_input.clear();
                Task::none()
            }
            Message::ResetFilters => {
                self.session.reset();
                self.selection_changed()
            }
            Message::PreviousPage => {
                let page = self.session.pagination().current_page().saturating_sub(1);
                self.go_to_page(page);
                Task::none()
            }
            Message::NextPage => {
                let page = self.session.pagination().current_page() + 1;
                self.go_to_page(page);
                Task::none()
            }
            Message::PageInputChanged(value) => {
                self.page_input = value;
                Task::none()
            }
            Message::PageInputSubmitted => {
                match self.page_input.trim().parse::<usize>() {
                    Ok(page) => self.go_to_page(page),
                    Err(_) => self.status_message = Some(INVALID_PAGE.to_string()),
                }
                Task::none()
            }
            Message::ImportPressed => Task::perform(
                crate::dataset::pick_and_import(),
                Message::ImportFinished,
            ),
            Message::ImportFinished(Ok(Some((path, rows)))) => {
                let current = self.session.selection().clone();
                self.session.load(RecordStore::new(rows), &current);
                self.dataset_name = path.display().to_string();
                self.load_error = None;
                self.status_message = Some(format!(
                    "Импортировано записей: {}",
                    self.session.records().len()
                ));
                self.page_input.clear();
                self.persist_selection()
            }
            Message::ImportFinished(Ok(None)) => Task::none(),
            Message::ImportFinished(Err(e)) => {
                tracing::warn!("Import failed: {}", e);
                self.status_message = Some(format!("Ошибка импорта: {}", e));
                Task::none()
            }
            Message::ExportPressed => {
                let rows = self.session.filtered().cloned().collect();
                let summary = export::describe(self.session.selection());
                Task::perform(
                    export::export(rows, summary, self.config.export_dir.clone()),
                    Message::ExportFinished,
                )
            }
            Message::ExportFinished(Ok(path)) => {
                self.status_message = Some(format!("Отчёт сохранён: {}", path.display()));
                if let Err(e) = open::that(&path) {
                    tracing::warn!("Could not open {}: {}", path.display(), e);
                }
                Task::none()
            }
            Message::ExportFinished(Err(e)) => {
                tracing::warn!("Export failed: {}", e);
                self.status_message = Some(format!("Ошибка экспорта: {}", e));
                Task::none()
            }
            Message::ThemeToggled(dark) => {
                self.theme = theme_for(dark);
                self.save(vec![(DARK_THEME_KEY, dark.to_string())])
            }
            Message::Saved(Ok(())) => Task::none(),
            Message::Saved(Err(e)) => {
                tracing::warn!("Failed to persist state: {}", e);
                Task::none()
            }
        }
    }

    fn go_to_page(&mut self, page: usize) {
        match self.session.set_page(page) {
            Ok(()) => {
                self.status_message = None;
                self.page_input.clear();
            }
            Err(e) => {
                tracing::debug!("Rejected page request: {}", e);
                self.status_message = Some(INVALID_PAGE.to_string());
            }
        }
    }

    fn selection_changed(&mut self) -> Task<Message> {
        self.status_message = None;
        self.page_input.clear();
        self.persist_selection()
    }

    fn persist_selection(&self) -> Task<Message> {
        if !self.config.persist_selection {
            return Task::none();
        }
        self.save(persist::entries(self.session.selection()))
    }

    fn save(&self, entries: Vec<(&'static str, String)>) -> Task<Message> {
        match &self.writer {
            Some(writer) => Task::perform(writer.save(entries), Message::Saved),
            None => Task::none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::schedule::persist::{DISTRICT_KEY, REGION_KEY};
    use crate::schedule::RawRecord;
    use crate::storage::{JsonFileStore, KeyValueStore};
    use std::num::NonZeroUsize;

    fn rows() -> Vec<RawRecord> {
        crate::dataset::bundled().unwrap()
    }

    fn app_in(dir: &tempfile::TempDir, page_size: usize) -> App {
        let config = Config {
            page_size: NonZeroUsize::new(page_size).unwrap(),
            storage_path: dir.path().join("session.json"),
            export_dir: dir.path().join("reports"),
            ..Config::default()
        };
        let (mut app, _load) = App::with_config(config);
        let _ = app.update(Message::DatasetLoaded(Ok(rows())));
        app
    }

    #[test]
    fn test_loaded_app_shows_first_page() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_in(&dir, 5);
        assert!(!app.is_loading);
        assert_eq!(app.session.filtered_len(), rows().len());
        assert_eq!(app.session.visible().len(), 5);
        assert_eq!(app.session.pagination().page_size().get(), 5);
        assert_eq!(app.session.region_options()[0], "город Ташкент");
    }

    #[test]
    fn test_selector_messages_cascade() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, 5);
        let _ = app.update(Message::RegionSelected("город Ташкент".into()));
        let _ = app.update(Message::DistrictSelected("Алмазарский район".into()));
        assert!(!app.session.institution_options().is_empty());

        let _ = app.update(Message::RegionCleared);
        assert_eq!(app.session.selection().district(), "");
        assert!(app.session.district_options().is_empty());
    }

    #[test]
    fn test_bad_page_input_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, 5);
        let _ = app.update(Message::NextPage);
        assert_eq!(app.session.pagination().current_page(), 2);

        for input in ["0", "99", "два"] {
            let _ = app.update(Message::PageInputChanged(input.into()));
            let _ = app.update(Message::PageInputSubmitted);
            assert_eq!(app.status_message.as_deref(), Some(INVALID_PAGE));
            assert_eq!(app.session.pagination().current_page(), 2);
        }

        let _ = app.update(Message::PageInputChanged("1".into()));
        let _ = app.update(Message::PageInputSubmitted);
        assert_eq!(app.session.pagination().current_page(), 1);
        assert_eq!(app.status_message, None);
    }

    #[test]
    fn test_previous_on_first_page_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir, 5);
        let _ = app.update(Message::PreviousPage);
        assert_eq!(app.session.pagination().current_page(), 1);
        assert_eq!(app.status_message.as_deref(), Some(INVALID_PAGE));
    }

    #[test]
    fn test_stored_selection_is_restored_on_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("session.json"));
        store.set(REGION_KEY, "Андижанская область").unwrap();
        store.set(DISTRICT_KEY, "Алмазарский район").unwrap();
        store.set(DARK_THEME_KEY, "true").unwrap();

        let app = app_in(&dir, 5);
        assert!(app.is_dark());
        assert_eq!(app.session.selection().region(), "Андижанская область");
        // Алмазарский район относится к Ташкенту, поэтому сбрасывается
        assert_eq!(app.session.selection().district(), "");
    }

    #[test]
    fn test_failed_load_leaves_empty_session() {
        let dir = tempfile::tempdir().unwrap();
        let (mut app, _load) = App::with_config(Config {
            storage_path: dir.path().join("session.json"),
            ..Config::default()
        });
        let _ = app.update(Message::DatasetLoaded(Err("нет файла".into())));
        assert!(!app.is_loading);
        assert_eq!(app.load_error.as_deref(), Some("нет файла"));
        assert!(app.session.region_options().is_empty());
        assert_eq!(app.session.pagination().total_pages(), 1);
    }
}
