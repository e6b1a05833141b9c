use thiserror::Error;

#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Ошибка конфигурации: {0}")]
    Config(String),

    #[error("Файл не найден: {0}")]
    FileNotFound(String),

    #[error("Папка не найдена: {0}")]
    FolderNotFound(String),

    #[error("Не удалось прочитать книгу Excel: {0}")]
    Workbook(String),

    #[error("Ошибка разбора JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Ошибка ввода-вывода (IO): {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] journal_common::Error),
}

pub type Result<T> = std::result::Result<T, JournalError>;
