/// Универсальные утилиты для работы со списками
/// Страница списка: непрерывный срез длиной не более page_size,
/// начиная со смещения page * page_size. Выход за конец списка
/// не ошибка: возвращается пустой срез.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Vec<T> {
    let start = page.saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(items.len());
    items.get(start..end).unwrap_or(&[]).to_vec()
}
