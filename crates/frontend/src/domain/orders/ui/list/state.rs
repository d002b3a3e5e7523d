use std::collections::HashSet;

use chrono::NaiveDate;
use contracts::domain::orders::{Order, OrdersQuery};
use leptos::prelude::*;

use crate::domain::orders::refine::refine_orders;
use crate::shared::debounce::Epoch;
use crate::shared::list_utils::paginate;

/// Допустимые размеры страницы
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 25];

/// Критерии фильтрации списка заказов.
///
/// Сырой и опубликованный поисковые термы хранятся раздельно:
/// в серверный запрос уходит только опубликованный, после паузы ввода.
/// Статус и даты дебаунсу не подлежат и применяются сразу.
#[derive(Clone, Debug, Default)]
pub struct OrdersFilter {
    pub status: String,
    pub search_input: String,
    pub search_term: String,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    search_epoch: Epoch,
}

impl OrdersFilter {
    /// true — значение изменилось и серверный запрос нужно повторить
    pub fn set_status(&mut self, status: String) -> bool {
        if self.status == status {
            return false;
        }
        self.status = status;
        true
    }

    /// Новый ввод поиска: начинает новое окно дебаунса, возвращает его токен
    pub fn set_search_input(&mut self, value: String) -> u64 {
        self.search_input = value;
        self.search_epoch.bump()
    }

    /// Публикация терма по истечении окна. Токен, вытесненный более
    /// поздним вводом, игнорируется. true — терм изменился и список
    /// нужно перечитать.
    pub fn commit_search(&mut self, token: u64) -> bool {
        if !self.search_epoch.is_current(token) {
            return false;
        }
        if self.search_term == self.search_input {
            return false;
        }
        self.search_term = self.search_input.clone();
        true
    }

    /// Сброс всех фильтров, синхронно: дебаунс ждать не нужно,
    /// незавершённая публикация отменяется. true — серверный запрос изменится.
    pub fn clear(&mut self) -> bool {
        self.search_epoch.bump();
        let query_changed = !self.status.is_empty() || !self.search_term.is_empty();
        self.status.clear();
        self.search_input.clear();
        self.search_term.clear();
        self.date_from = None;
        self.date_to = None;
        query_changed
    }

    /// Дескриптор серверного запроса. Терм уходит одновременно как
    /// подстрока имени клиента и, если он целиком числовой, как точный
    /// номер заказа; сервер сам решает, по какому полю совпадать.
    /// Диапазон дат серверу не передаётся — см. refine_orders.
    pub fn query(&self) -> OrdersQuery {
        OrdersQuery {
            status: if self.status.is_empty() {
                None
            } else {
                Some(self.status.clone())
            },
            client_name: if self.search_term.is_empty() {
                None
            } else {
                Some(self.search_term.clone())
            },
            order_number: self.search_term.parse::<i64>().ok(),
        }
    }
}

/// Состояние экрана списка заказов
#[derive(Clone, Debug)]
pub struct OrdersListState {
    /// Последний результат серверной выборки, как пришёл
    pub orders: Vec<Order>,
    pub filter: OrdersFilter,
    pub page: usize,
    pub page_size: usize,
    /// Раскрытые строки; раскрытых может быть несколько
    pub expanded: HashSet<String>,
    pub loading: bool,
    pub load_error: Option<String>,
    pub is_loaded: bool,
    query_epoch: Epoch,
}

impl Default for OrdersListState {
    fn default() -> Self {
        Self {
            orders: Vec::new(),
            filter: OrdersFilter::default(),
            page: 0,
            page_size: 10,
            expanded: HashSet::new(),
            loading: false,
            load_error: None,
            is_loaded: false,
            query_epoch: Epoch::default(),
        }
    }
}

impl OrdersListState {
    /// Начало загрузки: фиксирует поколение запроса и снимок фильтров
    pub fn begin_load(&mut self) -> (u64, OrdersQuery) {
        self.loading = true;
        let token = self.query_epoch.bump();
        (token, self.filter.query())
    }

    /// Применение ответа. Ответ устаревшего поколения отбрасывается:
    /// поздний ответ не должен затирать состояние более нового запроса.
    /// true — ответ применён.
    pub fn apply_load(&mut self, token: u64, result: Result<Vec<Order>, String>) -> bool {
        if !self.query_epoch.is_current(token) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(orders) => {
                self.orders = orders;
                self.load_error = None;
                self.is_loaded = true;
            }
            Err(e) => {
                // при ошибке список пустеет, экран показывает пустую таблицу
                self.orders.clear();
                self.load_error = Some(e);
            }
        }
        true
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Смена размера страницы всегда возвращает на первую
    pub fn change_page_size(&mut self, size: usize) {
        self.page_size = size;
        self.page = 0;
    }

    pub fn toggle_expanded(&mut self, id: String) {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
        }
    }

    /// Список после клиентского уточнения (статус + диапазон дат)
    pub fn refined(&self) -> Vec<Order> {
        refine_orders(
            &self.orders,
            &self.filter.status,
            self.filter.date_from,
            self.filter.date_to,
        )
    }

    /// Количество записей после уточнения, до разбиения на страницы.
    /// По нему представление считает число страниц.
    pub fn refined_count(&self) -> usize {
        self.refined().len()
    }

    /// Видимая страница уточнённого списка
    pub fn visible(&self) -> Vec<Order> {
        paginate(&self.refined(), self.page, self.page_size)
    }
}

pub fn create_state() -> RwSignal<OrdersListState> {
    RwSignal::new(OrdersListState::default())
}
