//! Жизненный цикл страницы, привязанной к контенту.
//!
//! ```text
//! Loading ──► Ready(T)
//!    │
//!    ├──────► NotFound
//!    │
//!    └──────► Error(message)
//! ```
//!
//! Терминальные состояния не возвращаются в `Loading`: новая навигация
//! (в том числе смена параметров маршрута) создаёт новый экземпляр через
//! [`PageLoader::begin`].

use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PageState<T> {
    Loading,
    Ready(T),
    NotFound,
    Error(String),
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        PageState::Loading
    }
}

impl<T> PageState<T> {
    /// Состояние по результату запроса: `Ok(None)` — записи нет
    pub fn from_result<E: Display>(result: Result<Option<T>, E>) -> Self {
        match result {
            Ok(Some(data)) => PageState::Ready(data),
            Ok(None) => PageState::NotFound,
            Err(e) => PageState::Error(e.to_string()),
        }
    }

    /// Перейти из `Loading` в терминальное состояние.
    ///
    /// Возвращает `false` (и ничего не меняет), если состояние уже терминальное.
    pub fn settle<E: Display>(&mut self, result: Result<Option<T>, E>) -> bool {
        if self.is_terminal() {
            return false;
        }
        *self = Self::from_result(result);
        true
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_loading()
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, PageState::NotFound)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> PageState<U> {
        match self {
            PageState::Loading => PageState::Loading,
            PageState::Ready(data) => PageState::Ready(f(data)),
            PageState::NotFound => PageState::NotFound,
            PageState::Error(e) => PageState::Error(e),
        }
    }
}

/// Билет загрузки: результат принимается, только если билет ещё актуален
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// Загрузчик страницы с защитой от устаревших ответов.
///
/// Каждая навигация получает новый билет; ответ по старому билету или после
/// [`PageLoader::close`] (размонтирование) отбрасывается.
#[derive(Debug, Clone)]
pub struct PageLoader<T> {
    generation: u64,
    closed: bool,
    state: PageState<T>,
}

impl<T> Default for PageLoader<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PageLoader<T> {
    pub fn new() -> Self {
        Self {
            generation: 0,
            closed: false,
            state: PageState::Loading,
        }
    }

    /// Начать новый экземпляр страницы (состояние снова `Loading`)
    pub fn begin(&mut self) -> LoadTicket {
        self.generation += 1;
        self.closed = false;
        self.state = PageState::Loading;
        LoadTicket(self.generation)
    }

    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        !self.closed && ticket.0 == self.generation
    }

    /// Принять результат запроса. `false` — ответ устарел или страница закрыта.
    pub fn complete<E: Display>(&mut self, ticket: LoadTicket, result: Result<Option<T>, E>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.state.settle(result)
    }

    /// Страница размонтирована: все ответы в полёте будут отброшены
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn state(&self) -> &PageState<T> {
        &self.state
    }

    pub fn into_state(self) -> PageState<T> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_loading() {
        let state: PageState<String> = PageState::default();
        assert!(state.is_loading());
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_missing_record_is_not_found() {
        let state = PageState::<String>::from_result(Ok::<_, String>(None));
        assert_eq!(state, PageState::NotFound);
        assert!(state.ready().is_none());
    }

    #[test]
    fn test_found_record_is_ready_verbatim() {
        let state = PageState::from_result(Ok::<_, String>(Some("Garden Retreat".to_string())));
        assert_eq!(state.ready().map(String::as_str), Some("Garden Retreat"));
    }

    #[test]
    fn test_failed_query_is_terminal_error() {
        let mut state = PageState::<String>::Loading;
        assert!(state.settle(Err::<Option<String>, _>("connection reset")));
        assert_eq!(state, PageState::Error("connection reset".into()));
        assert!(state.is_terminal());
    }

    #[test]
    fn test_terminal_state_never_changes() {
        let mut state = PageState::<String>::NotFound;
        assert!(!state.settle(Ok::<_, String>(Some("late".to_string()))));
        assert_eq!(state, PageState::NotFound);

        let mut state = PageState::Ready("first".to_string());
        assert!(!state.settle(Err::<Option<String>, _>("boom")));
        assert_eq!(state, PageState::Ready("first".to_string()));
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let mut loader = PageLoader::<String>::new();
        let first = loader.begin();
        let second = loader.begin();

        assert!(!loader.complete(first, Ok::<_, String>(Some("stale".to_string()))));
        assert!(loader.state().is_loading());

        assert!(loader.complete(second, Ok::<_, String>(Some("fresh".to_string()))));
        assert_eq!(loader.state().ready().map(String::as_str), Some("fresh"));
    }

    #[test]
    fn test_closed_loader_drops_late_result() {
        let mut loader = PageLoader::<String>::new();
        let ticket = loader.begin();
        loader.close();

        assert!(!loader.complete(ticket, Ok::<_, String>(Some("late".to_string()))));
        assert!(loader.state().is_loading());
    }

    #[test]
    fn test_begin_starts_fresh_instance() {
        let mut loader = PageLoader::<String>::new();
        let ticket = loader.begin();
        loader.complete(ticket, Ok::<_, String>(None));
        assert!(loader.state().is_not_found());

        loader.begin();
        assert!(loader.state().is_loading());
    }

    #[test]
    fn test_map_keeps_variant() {
        let state = PageState::Ready(2).map(|n| n * 10);
        assert_eq!(state, PageState::Ready(20));
        let state: PageState<i32> = PageState::<i32>::NotFound.map(|n| n * 10);
        assert_eq!(state, PageState::NotFound);
    }
}
