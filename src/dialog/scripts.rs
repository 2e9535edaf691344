//! Built-in dialog scripts, selected by page identity.

use super::{DialogLine, DialogScript, LineAction};
use crate::navigation::NextTarget;

const GRANDMA: &str = "Бабушка Фатима";

/// Which page is running, from `<body data-page="...">` or the location path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageId {
    /// Landing page (`index.html`).
    Main,
    Welcome,
    Other(String),
}

impl PageId {
    /// A `data-page` value.
    pub fn parse(declared: &str) -> PageId {
        match declared.trim() {
            "main" | "index" => PageId::Main,
            "welcome" => PageId::Welcome,
            other => PageId::Other(other.to_string()),
        }
    }

    /// Identify an undeclared page by its location path. The site root,
    /// `index.html` and extensionless paths are the landing page.
    pub fn from_path(path: &str) -> PageId {
        if path.contains("welcome.html") {
            PageId::Welcome
        } else if path.is_empty()
            || path.ends_with('/')
            || path.ends_with("index.html")
            || !path.contains(".html")
        {
            PageId::Main
        } else {
            let file = path.rsplit('/').next().unwrap_or(path);
            PageId::Other(file.trim_end_matches(".html").to_string())
        }
    }

    /// The declared identity if there is one, the path rule otherwise.
    pub fn detect(declared: Option<&str>, path: &str) -> PageId {
        match declared.map(str::trim) {
            Some(d) if !d.is_empty() => PageId::parse(d),
            _ => PageId::from_path(path),
        }
    }
}

/// Script for `page`, or `None` when the page has no dialog.
pub fn script_for(page: &PageId) -> Option<DialogScript> {
    match page {
        PageId::Main => Some(main_page()),
        PageId::Welcome => Some(welcome_page()),
        PageId::Other(_) => None,
    }
}

fn main_page() -> DialogScript {
    vec![
        DialogLine::new(
            GRANDMA,
            "Салам алейкум! Я бабушка Фатима, и сегодня я научу вас готовить настоящие татарские блюда!",
        ),
        DialogLine::new(
            GRANDMA,
            "Мы приготовим четыре традиционных блюда: эчпочмак, кыстыбый, чак-чак и татарский чай.",
        ),
        DialogLine::new(
            GRANDMA,
            "Каждое блюдо имеет свою историю и особенности приготовления. Готовы начать наш мастер-класс?",
        )
        .with_action(LineAction::NextButton {
            label: "Начать мастер-класс".into(),
            target: NextTarget::Screen("welcome".into()),
        }),
    ]
}

fn welcome_page() -> DialogScript {
    vec![
        DialogLine::new(
            GRANDMA,
            "Салам алейкум, дорогой! Меня зовут Фатима, и я научу тебя готовить настоящие татарские блюда. \
             Моя семья передавала эти рецепты из поколения в поколение уже более 200 лет!",
        ),
        DialogLine::new(
            GRANDMA,
            "Сегодня мы приготовим четыре традиционных блюда: эчпочмак, кыстыбый, чак-чак и татарский чай. \
             Каждое блюдо имеет свою историю и особенности приготовления.",
        ),
        DialogLine::new(
            GRANDMA,
            "Но сначала нам нужно собрать все необходимые продукты. Пойдём к холодильнику и посмотрим, что у нас есть!",
        ),
        DialogLine::new(
            GRANDMA,
            "Помни, дорогой: в татарской кухне главное - это любовь к семье и уважение к традициям. Готовить нужно с душой!",
        )
        .with_action(LineAction::NextButton {
            label: "К холодильнику!".into(),
            target: NextTarget::Page("refrigerator.html".into()),
        }),
    ]
}
