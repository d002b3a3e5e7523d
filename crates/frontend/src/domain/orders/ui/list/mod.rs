mod state;

pub use state::{create_state, OrdersFilter, OrdersListState, PAGE_SIZE_OPTIONS};

use chrono::NaiveDate;
use contracts::domain::orders::Order;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::orders::api;
use crate::domain::orders::ui::dialogs::{
    delete_outcome, edit_outcome, EditOrderDialog, OrderDraft,
};
use crate::shared::debounce;
use crate::shared::notify::Notice;

/// Безголовый стор экрана заказов: список с фильтрами, диалоги
/// редактирования/удаления и уведомления. Представление читает
/// сигналы и дёргает методы, вся логика переходов живёт здесь
/// и в `state`.
#[derive(Clone, Copy)]
pub struct OrdersList {
    pub state: RwSignal<OrdersListState>,
    pub editing: RwSignal<Option<EditOrderDialog>>,
    pub deleting: RwSignal<Option<Order>>,
    pub notice: RwSignal<Option<Notice>>,
    pub saving: RwSignal<bool>,
    pub removing: RwSignal<bool>,
}

impl OrdersList {
    pub fn new() -> Self {
        Self {
            state: create_state(),
            editing: RwSignal::new(None),
            deleting: RwSignal::new(None),
            notice: RwSignal::new(None),
            saving: RwSignal::new(false),
            removing: RwSignal::new(false),
        }
    }

    /// Первая загрузка при монтировании экрана (один раз)
    pub fn ensure_loaded(&self) {
        if self.state.with_untracked(|s| !s.is_loaded && !s.loading) {
            self.load_data();
        }
    }

    /// Перечитать список с текущими фильтрами
    pub fn load_data(&self) {
        let state = self.state;
        let Some((token, query)) = state.try_update(|s| s.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let result = api::fetch_orders(&query).await;
            if let Err(e) = &result {
                // ошибка списка не показывается, экран остаётся пустым
                log::warn!("orders query failed: {}", e);
            }
            let applied = state.try_update(|s| s.apply_load(token, result)).unwrap_or(false);
            if !applied {
                log::debug!("stale orders response discarded");
            }
        });
    }

    // ------------------------------------------------------------------
    // Фильтры
    // ------------------------------------------------------------------

    /// Смена статуса применяется сразу, без дебаунса
    pub fn set_status(&self, status: String) {
        let changed = self
            .state
            .try_update(|s| s.filter.set_status(status))
            .unwrap_or(false);
        if changed {
            self.load_data();
        }
    }

    /// Ввод в поле поиска. Публикация терма и перезапрос списка
    /// происходят после паузы ввода; каждый новый символ вытесняет
    /// ещё не опубликованное значение.
    pub fn set_search_input(&self, value: String) {
        let list = *self;
        let Some(token) = self.state.try_update(|s| s.filter.set_search_input(value)) else {
            return;
        };
        spawn_local(async move {
            debounce::pause().await;
            let published = list
                .state
                .try_update(|s| s.filter.commit_search(token))
                .unwrap_or(false);
            if published {
                list.load_data();
            }
        });
    }

    /// Даты меняются сразу и влияют только на клиентское уточнение,
    /// серверный запрос не повторяется
    pub fn set_date_from(&self, date: Option<NaiveDate>) {
        self.state.update(|s| s.filter.date_from = date);
    }

    pub fn set_date_to(&self, date: Option<NaiveDate>) {
        self.state.update(|s| s.filter.date_to = date);
    }

    pub fn set_date_range(&self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.state.update(|s| {
            s.filter.date_from = from;
            s.filter.date_to = to;
        });
    }

    pub fn clear_filters(&self) {
        let query_changed = self
            .state
            .try_update(|s| s.filter.clear())
            .unwrap_or(false);
        if query_changed {
            self.load_data();
        }
    }

    // ------------------------------------------------------------------
    // Пагинация и раскрытие строк
    // ------------------------------------------------------------------

    pub fn go_to_page(&self, page: usize) {
        self.state.update(|s| s.go_to_page(page));
    }

    pub fn change_page_size(&self, size: usize) {
        self.state.update(|s| s.change_page_size(size));
    }

    pub fn toggle_expanded(&self, id: String) {
        self.state.update(|s| s.toggle_expanded(id));
    }

    // ------------------------------------------------------------------
    // Диалог редактирования
    // ------------------------------------------------------------------

    pub fn open_edit(&self, order: Order) {
        self.editing.set(Some(EditOrderDialog::open(order)));
    }

    pub fn close_edit(&self) {
        self.editing.set(None);
    }

    fn update_draft(&self, f: impl FnOnce(&mut OrderDraft)) {
        self.editing.update(|editing| {
            if let Some(dialog) = editing {
                f(&mut dialog.draft);
            }
        });
    }

    pub fn set_draft_status(&self, value: String) {
        self.update_draft(|d| d.status = value);
    }

    pub fn set_draft_quantities(&self, value: String) {
        self.update_draft(|d| d.quantities = value);
    }

    pub fn set_draft_price(&self, value: String) {
        self.update_draft(|d| d.price = value);
    }

    pub fn set_draft_total_price(&self, value: String) {
        self.update_draft(|d| d.total_price = value);
    }

    /// Отправить отредактированный заказ. Успех закрывает диалог и
    /// перечитывает список; ошибка оставляет диалог открытым с тем же
    /// заказом и список не трогает.
    pub fn save_edit(&self) {
        let list = *self;
        let Some(dialog) = self.editing.get_untracked() else {
            return;
        };
        if self.saving.get_untracked() {
            return;
        }
        self.saving.set(true);

        spawn_local(async move {
            let result = api::update_order(&dialog.order.id, &dialog.to_dto()).await;
            // экран мог быть демонтирован, пока запрос был в полёте
            list.saving.try_set(false);

            let outcome = edit_outcome(&result);
            if outcome.close_dialog {
                list.editing.try_set(None);
            }
            list.notice.try_set(Some(outcome.notice));
            if outcome.refetch {
                list.load_data();
            }
        });
    }

    // ------------------------------------------------------------------
    // Диалог удаления
    // ------------------------------------------------------------------

    pub fn open_delete(&self, order: Order) {
        self.deleting.set(Some(order));
    }

    pub fn close_delete(&self) {
        self.deleting.set(None);
    }

    pub fn confirm_delete(&self) {
        let list = *self;
        let Some(order) = self.deleting.get_untracked() else {
            return;
        };
        if self.removing.get_untracked() {
            return;
        }
        self.removing.set(true);

        spawn_local(async move {
            let result = api::delete_order(&order.id).await;
            list.removing.try_set(false);

            let outcome = delete_outcome(&result);
            if outcome.close_dialog {
                list.deleting.try_set(None);
            }
            list.notice.try_set(Some(outcome.notice));
            if outcome.refetch {
                list.load_data();
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

impl Default for OrdersList {
    fn default() -> Self {
        Self::new()
    }
}
