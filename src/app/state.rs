use std::path::Path;
use std::sync::Arc;

use iced::{Task, Theme};

use crate::app::Message;
use crate::config::{load_config, Config};
use crate::dataset;
use crate::schedule::{persist, Session};
use crate::storage::{open_store, KeyValueStore};

pub const DARK_THEME_KEY: &str = "darkTheme";
pub const LOGO_PATH: &str = "assets/logo.png";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Schedule,
    Settings,
}

pub struct App {
    pub current_screen: Screen,
    pub theme: Theme,
    pub config: Config,
    pub session: Session,
    // None, если хранилище не открылось: работаем без сохранения
    pub storage: Option<Arc<dyn KeyValueStore>>,
    pub writer: Option<Arc<persist::Writer>>,
    pub is_loading: bool,
    pub load_error: Option<String>,
    pub status_message: Option<String>,
    pub page_input: String,
    pub dataset_name: String,
    pub has_logo: bool,
}

impl App {
    pub fn new() -> (Self, Task<Message>) {
        Self::with_config(load_config())
    }

    pub fn with_config(config: Config) -> (Self, Task<Message>) {
        let storage = match open_store(&config) {
            Ok(store) => Some(store),
            Err(e) => {
                tracing::warn!("Persistence disabled, storage unavailable: {}", e);
                None
            }
        };
        let dark = storage.as_deref().is_some_and(read_dark_flag);
        let writer = storage
            .clone()
            .map(|store| Arc::new(persist::Writer::new(store)));

        let dataset_name = match &config.dataset_path {
            Some(path) => path.display().to_string(),
            None => "встроенный график".to_string(),
        };
        // Данные грузятся асинхронно, до этого показываем "Загрузка данных..."
        let load = Task::perform(
            dataset::load(config.dataset_path.clone()),
            Message::DatasetLoaded,
        );

        let app = Self {
            current_screen: Screen::default(),
            theme: theme_for(dark),
            session: Session::new(config.page_size),
            config,
            storage,
            writer,
            is_loading: true,
            load_error: None,
            status_message: None,
            page_input: String::new(),
            dataset_name,
            has_logo: Path::new(LOGO_PATH).exists(),
        };
        (app, load)
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }
}

fn read_dark_flag(store: &dyn KeyValueStore) -> bool {
    match store.get(DARK_THEME_KEY) {
        Ok(value) => value.as_deref() == Some("true"),
        Err(e) => {
            tracing::warn!("Could not read theme flag: {}", e);
            false
        }
    }
}

pub fn theme_for(dark: bool) -> Theme {
    if dark { Theme::Dark } else { Theme::Light }
}
