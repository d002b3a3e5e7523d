use contracts::domain::orders::{Order, OrderDto, OrdersQuery};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Query-string для списка. Отсутствующие параметры не попадают в URL
/// (пустая строка не передаётся).
fn list_query_string(query: &OrdersQuery) -> String {
    let mut params: Vec<String> = Vec::new();
    if let Some(status) = &query.status {
        params.push(format!("status={}", urlencoding::encode(status)));
    }
    if let Some(name) = &query.client_name {
        params.push(format!("clientName={}", urlencoding::encode(name)));
    }
    if let Some(number) = query.order_number {
        params.push(format!("orderNumber={}", number));
    }
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

/// Fetch orders with server-side filters applied.
/// 404 on the list means "nothing matched" and maps to an empty list.
pub async fn fetch_orders(query: &OrdersQuery) -> Result<Vec<Order>, String> {
    let url = format!("{}/orders{}", api_base(), list_query_string(query));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.status() == 404 {
        return Ok(Vec::new());
    }
    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    response
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch a single order by id
pub async fn fetch_order(id: &str) -> Result<Order, String> {
    let response = Request::get(&format!("{}/orders/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch order: {}", response.status()));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Create a new order
pub async fn create_order(dto: &OrderDto) -> Result<Order, String> {
    let response = Request::post(&format!("{}/orders", api_base()))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to create order: {}", response.status()));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Update an existing order. The body carries the full field set,
/// the id travels only in the URL.
pub async fn update_order(id: &str, dto: &OrderDto) -> Result<Order, String> {
    let response = Request::put(&format!("{}/orders/{}", api_base(), id))
        .json(dto)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to update order: {}", response.status()));
    }

    response
        .json::<Order>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Delete an order
pub async fn delete_order(id: &str) -> Result<(), String> {
    let response = Request::delete(&format!("{}/orders/{}", api_base(), id))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to delete order: {}", response.status()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_string_empty() {
        assert_eq!(list_query_string(&OrdersQuery::default()), "");
    }

    #[test]
    fn test_query_string_single_param() {
        let query = OrdersQuery {
            status: Some("awaiting".to_string()),
            ..Default::default()
        };
        assert_eq!(list_query_string(&query), "?status=awaiting");
    }

    #[test]
    fn test_query_string_all_params() {
        let query = OrdersQuery {
            status: Some("sent".to_string()),
            client_name: Some("1024".to_string()),
            order_number: Some(1024),
        };
        assert_eq!(
            list_query_string(&query),
            "?status=sent&clientName=1024&orderNumber=1024"
        );
    }

    #[test]
    fn test_query_string_encodes_values() {
        let query = OrdersQuery {
            client_name: Some("Acme & Co".to_string()),
            ..Default::default()
        };
        assert_eq!(list_query_string(&query), "?clientName=Acme%20%26%20Co");
    }
}
