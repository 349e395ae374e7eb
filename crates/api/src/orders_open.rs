use crate::{OrderingSwitch, routes::routes_path::OrdersOpen};
use axum::{Json, extract::State};
use domain::OrderAvailability;

/// Reports whether orders are accepted. Only reads the switch.
#[tracing::instrument(name = "Report order availability", skip_all)]
pub(crate) async fn orders_open(
    _: OrdersOpen,
    State(ordering): State<OrderingSwitch>,
) -> Json<OrderAvailability> {
    let switch = ordering.current();
    Json(OrderAvailability::from_switch(
        switch.closed,
        &switch.closed_message,
    ))
}
