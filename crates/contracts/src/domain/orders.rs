use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Заказ из внешней коллекции (read-модель, поля как в JSON API)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,

    #[serde(rename = "clientName")]
    pub client_name: Option<String>,

    /// Статус хранится строкой: сервер может вернуть значение вне известного набора
    pub status: String,

    #[serde(rename = "orderNumber")]
    pub order_number: Option<i64>,

    pub quantities: Option<f64>,
    pub price: Option<f64>,

    #[serde(rename = "totalPrice")]
    pub total_price: Option<f64>,

    /// Дата создания (ISO-8601), назначается при создании и не меняется
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl Order {
    /// Собрать DTO для записи: все поля кроме id (id передаётся в URL)
    pub fn to_dto(&self) -> OrderDto {
        OrderDto {
            client_name: self.client_name.clone(),
            status: self.status.clone(),
            order_number: self.order_number,
            quantities: self.quantities,
            price: self.price,
            total_price: self.total_price,
            created_at: self.created_at.clone(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания/обновления заказа. Тело PUT несёт полный набор полей,
/// включая неизменённые (createdAt сервер не пересчитывает).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderDto {
    #[serde(rename = "clientName")]
    pub client_name: Option<String>,

    pub status: String,

    #[serde(rename = "orderNumber")]
    pub order_number: Option<i64>,

    pub quantities: Option<f64>,
    pub price: Option<f64>,

    #[serde(rename = "totalPrice")]
    pub total_price: Option<f64>,

    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// Параметры серверной фильтрации списка заказов.
/// None — параметр в запрос не попадает.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrdersQuery {
    pub status: Option<String>,
    pub client_name: Option<String>,
    pub order_number: Option<i64>,
}

impl OrdersQuery {
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.client_name.is_none() && self.order_number.is_none()
    }
}

// ============================================================================
// Status
// ============================================================================

/// Известные статусы заказа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    #[serde(rename = "awaiting")]
    Awaiting,
    #[serde(rename = "sent")]
    Sent,
    #[serde(rename = "delivered")]
    Delivered,
}

impl OrderStatus {
    /// Получить код статуса (значение поля status на сервере)
    pub fn code(&self) -> &'static str {
        match self {
            OrderStatus::Awaiting => "awaiting",
            OrderStatus::Sent => "sent",
            OrderStatus::Delivered => "delivered",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            OrderStatus::Awaiting => "Awaiting payment",
            OrderStatus::Sent => "Sent",
            OrderStatus::Delivered => "Delivered",
        }
    }

    /// Получить все статусы
    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Awaiting,
            OrderStatus::Sent,
            OrderStatus::Delivered,
        ]
    }

    /// Парсинг из кода
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "awaiting" => Some(OrderStatus::Awaiting),
            "sent" => Some(OrderStatus::Sent),
            "delivered" => Some(OrderStatus::Delivered),
            _ => None,
        }
    }
}

impl ToString for OrderStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_wire_format() {
        let json = r#"{
            "id": "42",
            "clientName": "Acme Corp",
            "status": "awaiting",
            "orderNumber": 8457,
            "quantities": 3,
            "price": 12.5,
            "totalPrice": 37.5,
            "createdAt": "2024-05-17T09:30:00.000Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, "42");
        assert_eq!(order.client_name.as_deref(), Some("Acme Corp"));
        assert_eq!(order.status, "awaiting");
        assert_eq!(order.order_number, Some(8457));
        assert_eq!(order.quantities, Some(3.0));
        assert_eq!(order.total_price, Some(37.5));
        assert_eq!(order.created_at, "2024-05-17T09:30:00.000Z");
    }

    #[test]
    fn test_order_wire_format_nulls() {
        let json = r#"{
            "id": "7",
            "clientName": null,
            "status": "pending_review",
            "orderNumber": null,
            "quantities": null,
            "price": null,
            "totalPrice": null,
            "createdAt": "2024-01-02T00:00:00.000Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.client_name, None);
        // неизвестный статус не ломает десериализацию
        assert_eq!(order.status, "pending_review");
        assert_eq!(order.order_number, None);
    }

    #[test]
    fn test_order_wire_format_absent_keys() {
        // необязательные ключи могут вовсе отсутствовать, не только быть null
        let json = r#"{
            "id": "9",
            "status": "sent",
            "createdAt": "2024-01-02T00:00:00.000Z"
        }"#;

        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.client_name, None);
        assert_eq!(order.order_number, None);
        assert_eq!(order.quantities, None);
        assert_eq!(order.price, None);
        assert_eq!(order.total_price, None);
    }

    #[test]
    fn test_dto_serializes_camel_case() {
        let order = Order {
            id: "42".to_string(),
            client_name: Some("Acme Corp".to_string()),
            status: "sent".to_string(),
            order_number: Some(8457),
            quantities: Some(3.0),
            price: Some(12.5),
            total_price: Some(37.5),
            created_at: "2024-05-17T09:30:00.000Z".to_string(),
        };

        let value = serde_json::to_value(order.to_dto()).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["clientName"], "Acme Corp");
        assert_eq!(value["orderNumber"], 8457);
        assert_eq!(value["totalPrice"], 37.5);
        assert_eq!(value["createdAt"], "2024-05-17T09:30:00.000Z");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(OrderStatus::Awaiting.code(), "awaiting");
        assert_eq!(OrderStatus::Awaiting.display_name(), "Awaiting payment");
        assert_eq!(OrderStatus::from_code("delivered"), Some(OrderStatus::Delivered));
        assert_eq!(OrderStatus::from_code("unknown"), None);
        assert_eq!(OrderStatus::all().len(), 3);
    }
}
