//! Command execution and history.

use fleet_core::router::{Navigation, Router};

use crate::commands::{Command, HELP};
use crate::views::{self, vehicles::list_location};

/// Whether the prompt should keep reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Quit,
}

/// Drives a router from console commands and remembers where it has been.
pub struct Console {
    router: Router,
    history: Vec<String>,
}

impl Console {
    pub fn new(router: Router) -> Self {
        Self {
            router,
            history: Vec::new(),
        }
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Hrefs of committed pages, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub async fn execute(&mut self, command: Command) -> Flow {
        let output = match command {
            Command::Open(href) => self.open(&href).await,
            Command::Submit { href, form } => {
                let navigation = self.router.submit(&href, form).await;
                self.show(navigation)
            }
            Command::Search(query) => self.open(&list_location(&query, 1).href()).await,
            Command::Page(page) => {
                let query = self.current_query().await;
                self.open(&list_location(&query, i64::from(page)).href()).await
            }
            Command::Back => self.back().await,
            Command::Reload => match self.history.last().cloned() {
                Some(href) => self.open(&href).await,
                None => "Nothing to reload".to_string(),
            },
            Command::Help => HELP.to_string(),
            Command::Quit => return Flow::Quit,
        };
        Flow::Continue(output)
    }

    async fn open(&mut self, href: &str) -> String {
        let navigation = self.router.navigate(href).await;
        self.show(navigation)
    }

    async fn back(&mut self) -> String {
        if self.history.len() < 2 {
            return "Nothing to go back to".to_string();
        }
        self.history.pop();
        match self.history.pop() {
            Some(previous) => self.open(&previous).await,
            None => "Nothing to go back to".to_string(),
        }
    }

    /// The search text of the list currently shown, if any.
    async fn current_query(&self) -> String {
        self.router
            .current()
            .await
            .filter(|page| page.location.path().starts_with("/vehicles"))
            .and_then(|page| page.location.query("q").map(String::from))
            .unwrap_or_default()
    }

    fn show(&mut self, navigation: Navigation) -> String {
        match navigation {
            Navigation::Rendered(page) => {
                let href = page.location.href();
                tracing::debug!(href = %href, "Page committed");
                if self.history.last() != Some(&href) {
                    self.history.push(href);
                }
                views::render(&page)
            }
            Navigation::Superseded => String::new(),
        }
    }
}
