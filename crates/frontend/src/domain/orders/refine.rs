use chrono::NaiveDate;
use contracts::domain::orders::Order;

use crate::shared::date_utils::parse_date;

/// Клиентское уточнение списка после серверной выборки.
///
/// Статус запрашивается у сервера И перепроверяется здесь; диапазон дат
/// серверу не передаётся вовсе (у ресурса нет операторов сравнения
/// в query-параметрах) и применяется только локально. Порядок записей
/// сохраняется, пересортировки нет.
pub fn refine_orders(
    orders: &[Order],
    status: &str,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
) -> Vec<Order> {
    orders
        .iter()
        .filter(|order| {
            matches_status(order, status) && matches_date_range(order, date_from, date_to)
        })
        .cloned()
        .collect()
}

/// Пустой фильтр пропускает всё; иначе точное сравнение, с учётом регистра
fn matches_status(order: &Order, status: &str) -> bool {
    status.is_empty() || order.status == status
}

/// Диапазон неактивен, только когда обе границы отсутствуют.
/// Правая граница включительна до конца календарного дня.
/// Заказ с нечитаемой датой создания активный диапазон не проходит.
fn matches_date_range(order: &Order, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if from.is_none() && to.is_none() {
        return true;
    }
    let created = match parse_date(&order.created_at) {
        Some(date) => date,
        None => return false,
    };
    if let Some(from) = from {
        if created < from {
            return false;
        }
    }
    if let Some(to) = to {
        if created > to {
            return false;
        }
    }
    true
}
