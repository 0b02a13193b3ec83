use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Invalid site configuration: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Post {title:?} has an unparseable date {date:?}")]
    PostDate { title: String, date: String },
    #[error("Couldn't write RSS feed: {0}")]
    Feed(String),
}
