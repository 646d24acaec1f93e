//! Sales order service: orders, customers, products and the derived
//! per-customer / per-product order-history statistics.

use crate::core::error::{MockError, MockResult};
use crate::core::response::CollectionResponse;
use crate::entities::{
    Customer, CustomerOrderHistory, OrderLine, Product, ProductOrderHistory, SalesOrder,
};
use crate::services::{EntityService, ListParams, fetch_by_key, list_pipeline};
use crate::storage::DataStore;
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

/// Multi-field order search, compiled into one `;`-joined filter expression.
///
/// Date bounds are rendered as `YYYY-MM-DD` strings; they compare against
/// the RFC 3339 order dates lexicographically, so `from_date` is inclusive
/// of the whole day and `to_date` excludes it.
///
/// # Example
/// ```rust,ignore
/// let criteria = OrderSearchCriteria::default()
///     .with_customer_id("CUST-1001")
///     .with_min_amount(1000.0);
/// let orders = client.sales_orders().search_orders(criteria).await?;
/// ```
#[derive(Debug, Clone)]
pub struct OrderSearchCriteria {
    pub customer_id: Option<String>,
    pub order_number: Option<String>,
    pub status_code: Option<String>,
    pub from_date: Option<DateTime<Utc>>,
    pub to_date: Option<DateTime<Utc>>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for OrderSearchCriteria {
    fn default() -> Self {
        OrderSearchCriteria {
            customer_id: None,
            order_number: None,
            status_code: None,
            from_date: None,
            to_date: None,
            min_amount: None,
            max_amount: None,
            limit: 100,
            offset: 0,
        }
    }
}

impl OrderSearchCriteria {
    pub fn with_customer_id(mut self, customer_id: impl Into<String>) -> Self {
        self.customer_id = Some(customer_id.into());
        self
    }

    pub fn with_order_number(mut self, order_number: impl Into<String>) -> Self {
        self.order_number = Some(order_number.into());
        self
    }

    pub fn with_status_code(mut self, status_code: impl Into<String>) -> Self {
        self.status_code = Some(status_code.into());
        self
    }

    pub fn with_from_date(mut self, from_date: DateTime<Utc>) -> Self {
        self.from_date = Some(from_date);
        self
    }

    pub fn with_to_date(mut self, to_date: DateTime<Utc>) -> Self {
        self.to_date = Some(to_date);
        self
    }

    pub fn with_min_amount(mut self, min_amount: f64) -> Self {
        self.min_amount = Some(min_amount);
        self
    }

    pub fn with_max_amount(mut self, max_amount: f64) -> Self {
        self.max_amount = Some(max_amount);
        self
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = offset;
        self
    }

    fn to_params(&self) -> ListParams {
        let mut clauses: Vec<String> = Vec::new();
        if let Some(customer_id) = &self.customer_id {
            clauses.push(format!("CustomerId='{customer_id}'"));
        }
        if let Some(order_number) = &self.order_number {
            clauses.push(format!("OrderNumber='{order_number}'"));
        }
        if let Some(status_code) = &self.status_code {
            clauses.push(format!("StatusCode='{status_code}'"));
        }
        if let Some(from_date) = self.from_date {
            clauses.push(format!("OrderedDate>='{}'", from_date.format("%Y-%m-%d")));
        }
        if let Some(to_date) = self.to_date {
            clauses.push(format!("OrderedDate<='{}'", to_date.format("%Y-%m-%d")));
        }
        if let Some(min_amount) = self.min_amount {
            clauses.push(format!("TotalAmount>={min_amount}"));
        }
        if let Some(max_amount) = self.max_amount {
            clauses.push(format!("TotalAmount<={max_amount}"));
        }

        let params = ListParams::default()
            .with_limit(self.limit)
            .with_offset(self.offset);
        if clauses.is_empty() {
            params
        } else {
            params.with_query(clauses.join(";"))
        }
    }
}

/// Fields an order update may carry. Updates are simulated; nothing is
/// persisted.
#[derive(Debug, Clone, Default)]
pub struct SalesOrderUpdate {
    pub status_code: Option<String>,
    pub requested_ship_date: Option<DateTime<Utc>>,
}

impl SalesOrderUpdate {
    pub fn with_status_code(mut self, status_code: impl Into<String>) -> Self {
        self.status_code = Some(status_code.into());
        self
    }

    pub fn with_requested_ship_date(mut self, requested_ship_date: DateTime<Utc>) -> Self {
        self.requested_ship_date = Some(requested_ship_date);
        self
    }
}

/// Facade over the `salesOrders`, `customers` and `products` entity types
#[derive(Clone)]
pub struct SalesOrderService {
    store: DataStore,
}

impl SalesOrderService {
    pub fn new(store: DataStore) -> Self {
        SalesOrderService { store }
    }

    /// Fetch one sales order by header id.
    pub async fn get_by_id(&self, order_id: &str) -> MockResult<SalesOrder> {
        fetch_by_key(&self.store, order_id.into())
    }

    /// Look an order up by order number, `None` when no order carries it.
    pub async fn get_by_order_number(&self, order_number: &str) -> MockResult<Option<SalesOrder>> {
        let mut found = self
            .list(
                ListParams::default()
                    .with_limit(1)
                    .with_query(format!("OrderNumber='{order_number}'")),
            )
            .await?;
        Ok(found.items.pop())
    }

    /// Orders matching the given search criteria.
    pub async fn search_orders(&self, criteria: OrderSearchCriteria) -> MockResult<Vec<SalesOrder>> {
        Ok(self.list(criteria.to_params()).await?.items)
    }

    /// Orders placed within the last `days` days.
    pub async fn get_recent_orders(&self, days: i64, limit: i64) -> MockResult<Vec<SalesOrder>> {
        let criteria = OrderSearchCriteria::default()
            .with_from_date(Utc::now() - Duration::days(days))
            .with_limit(limit);
        self.search_orders(criteria).await
    }

    /// Simulate an order update.
    ///
    /// The requested changes are logged and the current order is returned
    /// unchanged, like the other simulated write actions.
    pub async fn update_order(
        &self,
        order_id: &str,
        update: SalesOrderUpdate,
    ) -> MockResult<SalesOrder> {
        let order = self.get_by_id(order_id).await?;
        if let Some(status_code) = &update.status_code {
            tracing::info!(order_id, status_code, "order status update requested");
        }
        if let Some(requested_ship_date) = update.requested_ship_date {
            tracing::info!(
                order_id,
                requested_ship_date = %requested_ship_date,
                "order ship date update requested"
            );
        }
        Ok(order)
    }

    /// Simulate updating one header field of an order.
    pub async fn update_order_field(
        &self,
        order_id: &str,
        field_name: &str,
        value: Value,
        reason: Option<&str>,
    ) -> MockResult<SalesOrder> {
        let order = self.get_by_id(order_id).await?;
        tracing::info!(
            order_id,
            field = field_name,
            value = %value,
            reason,
            "order field update requested"
        );
        Ok(order)
    }

    /// Simulate updating the ordered quantity of one line.
    ///
    /// The line must exist on the order.
    pub async fn update_order_line_quantity(
        &self,
        order_id: &str,
        line_id: &str,
        new_quantity: f64,
        reason: Option<&str>,
    ) -> MockResult<SalesOrder> {
        let order = self.get_by_id(order_id).await?;
        if !order.lines.iter().any(|line| line.line_id == line_id) {
            return Err(MockError::InvalidArgument {
                message: format!("order {} has no line {}", order.order_number, line_id),
            });
        }
        tracing::info!(
            order_id,
            line_id,
            new_quantity,
            reason,
            "order line quantity update requested"
        );
        Ok(order)
    }

    /// Orders placed by one customer.
    pub async fn get_by_customer(
        &self,
        customer_id: &str,
        params: ListParams,
    ) -> MockResult<CollectionResponse<SalesOrder>> {
        self.list(params.with_query(format!("CustomerId='{customer_id}'"))).await
    }

    /// List customer accounts.
    pub async fn list_customers(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<Customer>> {
        list_pipeline(&self.store, &params)
    }

    /// Fetch one customer by id.
    pub async fn get_customer(&self, customer_id: &str) -> MockResult<Customer> {
        fetch_by_key(&self.store, customer_id.into())
    }

    /// List products.
    pub async fn list_products(
        &self,
        params: ListParams,
    ) -> MockResult<CollectionResponse<Product>> {
        list_pipeline(&self.store, &params)
    }

    /// Fetch one product by inventory item id.
    pub async fn get_product(&self, product_id: &str) -> MockResult<Product> {
        fetch_by_key(&self.store, product_id.into())
    }

    /// Aggregate one customer's full order history.
    ///
    /// Statistics run over every order of the customer regardless of
    /// pagination; the orders themselves ride along in the result.
    pub async fn get_customer_order_history(
        &self,
        customer_id: &str,
    ) -> MockResult<CustomerOrderHistory> {
        let customer = self.get_customer(customer_id).await?;
        let orders = self
            .get_by_customer(customer_id, ListParams::default().with_limit(i64::MAX))
            .await?
            .items;

        let amounts: Vec<f64> = orders.iter().map(|order| order.total_amount).collect();
        let quantities: Vec<f64> = orders.iter().map(SalesOrder::total_quantity).collect();

        Ok(CustomerOrderHistory {
            customer_id: customer.customer_id,
            customer_name: customer.customer_name,
            total_orders: orders.len(),
            total_amount: amounts.iter().sum(),
            average_order_amount: mean(&amounts),
            max_order_amount: max(&amounts),
            min_order_amount: min(&amounts),
            std_dev_amount: sample_std_dev(&amounts),
            average_quantity: mean(&quantities),
            first_order_date: orders.iter().map(|order| order.order_date).min(),
            last_order_date: orders.iter().map(|order| order.order_date).max(),
            orders,
        })
    }

    /// Aggregate one product's full order history across all sales orders.
    pub async fn get_product_order_history(
        &self,
        product_id: &str,
    ) -> MockResult<ProductOrderHistory> {
        let product = self.get_product(product_id).await?;
        let orders = self.list(ListParams::default().with_limit(i64::MAX)).await?.items;

        let order_lines: Vec<OrderLine> = orders
            .iter()
            .filter_map(|order| order.line_for_product(product_id))
            .cloned()
            .collect();

        let quantities: Vec<f64> = order_lines.iter().map(|line| line.ordered_quantity).collect();
        let prices: Vec<f64> = order_lines
            .iter()
            .filter_map(|line| line.unit_selling_price)
            .collect();

        Ok(ProductOrderHistory {
            product_id: product.product_id,
            product_number: product.product_number,
            product_description: product.product_description,
            total_orders: order_lines.len(),
            total_quantity: quantities.iter().sum(),
            average_quantity: mean(&quantities),
            max_quantity: max(&quantities),
            min_quantity: min(&quantities),
            std_dev_quantity: sample_std_dev(&quantities),
            average_price: mean(&prices),
            order_lines,
        })
    }
}

#[async_trait]
impl EntityService for SalesOrderService {
    type Entity = SalesOrder;

    async fn list(&self, params: ListParams) -> MockResult<CollectionResponse<SalesOrder>> {
        list_pipeline(&self.store, &params)
    }
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (n - 1 denominator); 0.0 for fewer than two
/// observations.
fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance =
        values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    variance.sqrt()
}

fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        // Sample std dev of this classic set is sqrt(32/7).
        let expected = (32.0f64 / 7.0).sqrt();
        assert!((sample_std_dev(&values) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_degenerate_inputs() {
        assert_eq!(sample_std_dev(&[]), 0.0);
        assert_eq!(sample_std_dev(&[42.0]), 0.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_search_criteria_compiles_to_filter_clauses() {
        let from = "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let params = OrderSearchCriteria::default()
            .with_customer_id("CUST-1001")
            .with_status_code("Booked")
            .with_from_date(from)
            .with_min_amount(500.0)
            .with_limit(10)
            .to_params();
        assert_eq!(
            params.query.as_deref(),
            Some("CustomerId='CUST-1001';StatusCode='Booked';OrderedDate>='2024-01-01';TotalAmount>=500")
        );
        assert_eq!(params.limit, 10);
    }

    #[test]
    fn test_empty_criteria_has_no_query() {
        let params = OrderSearchCriteria::default().to_params();
        assert!(params.query.is_none());
        assert_eq!(params.limit, 100);
    }
}
