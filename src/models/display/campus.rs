//! News, events and videos

use tabled::Tabled;

use crate::client::models::{Event, NewsItem, Video};
use crate::output::formatters::{
    DESCRIPTION_PREVIEW_LEN, date_or_dash, format_datetime, text_or_dash, truncate,
};

/// News row
#[derive(Debug, Clone, Tabled)]
pub struct NewsDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "PUBLISHED")]
    pub published: String,

    #[tabled(rename = "LINK")]
    pub link: String,
}

impl From<&NewsItem> for NewsDisplay {
    fn from(item: &NewsItem) -> Self {
        Self {
            id: item.id.to_string(),
            title: item.title.clone(),
            published: date_or_dash(item.date.as_deref()),
            link: text_or_dash(item.url.as_deref()),
        }
    }
}

/// Event row
#[derive(Debug, Clone, Tabled)]
pub struct EventDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "PLACE")]
    pub place: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<&Event> for EventDisplay {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.titulo.clone(),
            date: event
                .fecha_evento
                .as_deref()
                .map(format_datetime)
                .unwrap_or_else(|| "-".to_string()),
            place: text_or_dash(event.lugar.as_deref()),
            description: truncate(
                &text_or_dash(event.descripcion.as_deref()),
                DESCRIPTION_PREVIEW_LEN,
            ),
        }
    }
}

/// Video row
#[derive(Debug, Clone, Tabled)]
pub struct VideoDisplay {
    #[tabled(rename = "ID")]
    pub id: String,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "PUBLISHED")]
    pub published: String,

    #[tabled(rename = "URL")]
    pub url: String,
}

impl From<&Video> for VideoDisplay {
    fn from(video: &Video) -> Self {
        Self {
            id: video.id.to_string(),
            title: video.titulo.clone(),
            published: date_or_dash(video.fecha_publicacion.as_deref()),
            url: video.watch_url(),
        }
    }
}
