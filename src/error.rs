use thiserror::Error;

#[derive(Error, Debug)]
pub enum MenuFixError {
    #[error("config error: {0}")]
    Config(String),

    #[error("menu document not found: {0}")]
    DocumentNotFound(String),

    #[error("price list not found: {0}")]
    PriceListNotFound(String),

    #[error("invalid price list: {0}")]
    InvalidPriceList(String),

    #[error("lexicon not found: {0}")]
    LexiconNotFound(String),

    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("CSV parse error: {0}")]
    CsvParse(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MenuFixError>;
