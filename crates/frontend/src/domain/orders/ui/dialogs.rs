use contracts::domain::orders::{Order, OrderDto};

use crate::shared::notify::Notice;

// ============================================================================
// Edit dialog
// ============================================================================

/// Открытый диалог редактирования: исходный заказ и черновик формы
#[derive(Debug, Clone, PartialEq)]
pub struct EditOrderDialog {
    pub order: Order,
    pub draft: OrderDraft,
}

/// Черновик формы. Числовые поля хранятся строками, как их отдаёт input;
/// разбор откладывается до сохранения.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderDraft {
    pub status: String,
    pub quantities: String,
    pub price: String,
    pub total_price: String,
}

impl EditOrderDialog {
    pub fn open(order: Order) -> Self {
        let draft = OrderDraft {
            status: order.status.clone(),
            quantities: number_field(order.quantities),
            price: number_field(order.price),
            total_price: number_field(order.total_price),
        };
        Self { order, draft }
    }

    /// DTO для PUT: отредактированные поля из черновика,
    /// остальные (имя клиента, номер, дата создания) без изменений
    pub fn to_dto(&self) -> OrderDto {
        let mut dto = self.order.to_dto();
        dto.status = self.draft.status.clone();
        dto.quantities = parse_number_field(&self.draft.quantities);
        dto.price = parse_number_field(&self.draft.price);
        dto.total_price = parse_number_field(&self.draft.total_price);
        dto
    }
}

fn number_field(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{}", v),
        None => "0".to_string(),
    }
}

/// Локальная валидация не выполняется: пустая или нечитаемая
/// строка уходит на сервер как null
fn parse_number_field(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

// ============================================================================
// Mutation outcomes
// ============================================================================

/// Что сделать после ответа на мутацию: уведомление,
/// закрывать ли диалог, перечитывать ли список
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    pub notice: Notice,
    pub close_dialog: bool,
    pub refetch: bool,
}

/// Итог сохранения. Ошибка оставляет диалог открытым
/// с тем же заказом и не трогает список.
pub fn edit_outcome(result: &Result<Order, String>) -> MutationOutcome {
    match result {
        Ok(_) => MutationOutcome {
            notice: Notice::success("Order updated successfully"),
            close_dialog: true,
            refetch: true,
        },
        Err(e) => MutationOutcome {
            notice: Notice::error(format!("Failed to update order: {}", e)),
            close_dialog: false,
            refetch: false,
        },
    }
}

/// Итог удаления. Список отражает пропажу записи только после
/// перечитывания, локально он не правится.
pub fn delete_outcome(result: &Result<(), String>) -> MutationOutcome {
    match result {
        Ok(_) => MutationOutcome {
            notice: Notice::success("Order deleted"),
            close_dialog: true,
            refetch: true,
        },
        Err(e) => MutationOutcome {
            notice: Notice::error(format!("Failed to delete order: {}", e)),
            close_dialog: false,
            refetch: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notify::Severity;

    fn sample_order() -> Order {
        Order {
            id: "42".to_string(),
            client_name: Some("Acme Corp".to_string()),
            status: "awaiting".to_string(),
            order_number: Some(8457),
            quantities: Some(3.0),
            price: Some(12.5),
            total_price: None,
            created_at: "2024-05-17T09:30:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_open_seeds_draft_from_order() {
        let dialog = EditOrderDialog::open(sample_order());
        assert_eq!(dialog.draft.status, "awaiting");
        assert_eq!(dialog.draft.quantities, "3");
        assert_eq!(dialog.draft.price, "12.5");
        // отсутствующее значение показывается как 0
        assert_eq!(dialog.draft.total_price, "0");
    }

    #[test]
    fn test_to_dto_keeps_untouched_fields() {
        let mut dialog = EditOrderDialog::open(sample_order());
        dialog.draft.status = "sent".to_string();
        dialog.draft.quantities = "5".to_string();

        let dto = dialog.to_dto();
        assert_eq!(dto.client_name.as_deref(), Some("Acme Corp"));
        assert_eq!(dto.order_number, Some(8457));
        assert_eq!(dto.created_at, "2024-05-17T09:30:00.000Z");
        assert_eq!(dto.status, "sent");
        assert_eq!(dto.quantities, Some(5.0));
    }

    #[test]
    fn test_to_dto_malformed_number_becomes_null() {
        let mut dialog = EditOrderDialog::open(sample_order());
        dialog.draft.price = "abc".to_string();
        dialog.draft.total_price = String::new();

        let dto = dialog.to_dto();
        assert_eq!(dto.price, None);
        assert_eq!(dto.total_price, None);
    }

    #[test]
    fn test_edit_outcome_success() {
        let outcome = edit_outcome(&Ok(sample_order()));
        assert_eq!(outcome.notice.severity, Severity::Success);
        assert_eq!(outcome.notice.message, "Order updated successfully");
        assert!(outcome.close_dialog);
        assert!(outcome.refetch);
    }

    #[test]
    fn test_edit_outcome_failure_keeps_dialog_and_list() {
        let outcome = edit_outcome(&Err("conflict".to_string()));
        assert_eq!(outcome.notice.severity, Severity::Error);
        assert!(outcome.notice.message.contains("conflict"));
        assert_eq!(outcome.notice.message, "Failed to update order: conflict");
        assert!(!outcome.close_dialog);
        assert!(!outcome.refetch);
    }

    #[test]
    fn test_delete_outcome_success() {
        let outcome = delete_outcome(&Ok(()));
        assert_eq!(outcome.notice.severity, Severity::Success);
        assert_eq!(outcome.notice.message, "Order deleted");
        assert!(outcome.close_dialog);
        assert!(outcome.refetch);
    }

    #[test]
    fn test_delete_outcome_failure() {
        let outcome = delete_outcome(&Err("410: gone".to_string()));
        assert_eq!(outcome.notice.severity, Severity::Error);
        assert_eq!(outcome.notice.message, "Failed to delete order: 410: gone");
        assert!(!outcome.close_dialog);
        assert!(!outcome.refetch);
    }
}
