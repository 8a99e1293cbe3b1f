use shared::{
    model::Order,
    service::order::{AggregateReporter, DisclosureWindow},
    utils::{format_amount, format_date},
};
use std::fmt::Write;

/// Renders the order list view: the visible window of orders, the running
/// total of line items over the whole loaded set, and the "show more" hint
/// while more orders exist.
pub fn render_orders(orders: &[Order], window: &DisclosureWindow, currency: &str) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Pedidos ({})", orders.len());

    for order in window.visible_slice(orders) {
        render_order(&mut out, order, currency);
    }

    let _ = writeln!(
        out,
        "\nArtículos en total: {}",
        AggregateReporter::total_items(orders)
    );

    if window.has_more(orders.len()) {
        let _ = writeln!(out, "Hay más pedidos; escribe 'more' para ver más.");
    }

    out
}

fn render_order(out: &mut String, order: &Order, currency: &str) {
    let _ = writeln!(out, "{}", "-".repeat(60));
    let _ = writeln!(out, "📦 {} [{}]", order.order_number, order.id);

    for item in &order.items {
        let _ = writeln!(out, "   {} x {}", item.name, item.quantity);
    }
    let _ = writeln!(out, "   Artículos: {}", order.items.len());

    let _ = writeln!(out, "   {} {}", order.address.name, order.address.last_name);
    let _ = writeln!(out, "   {},", order.address.street);
    let _ = writeln!(out, "   {},", order.address.email);
    let _ = writeln!(
        out,
        "   {}, {}, {}, {}",
        order.address.city, order.address.province, order.address.country, order.address.postal_code
    );
    let _ = writeln!(out, "   {}", order.address.phone);

    let _ = writeln!(out, "   Método: {}", order.payment_method);
    let payment = if order.payment_done() {
        "Pagado"
    } else {
        "Pendiente"
    };
    let _ = writeln!(out, "   Pago: {payment}");
    let _ = writeln!(out, "   Fecha: {}", format_date(&order.date));
    let _ = writeln!(out, "   Total: {}", format_amount(currency, order.amount));
    let _ = writeln!(out, "   Estado: {}", order.status);
}
