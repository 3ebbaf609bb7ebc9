//! Order conversions.

use woodash_core::{Address, CouponLine, FeeLine, LineItem, Order, ShippingLine, TaxLine};

use super::products::image_from_wire;
use crate::woocommerce::wire::{
    WireAddress, WireCouponLine, WireFeeLine, WireLineItem, WireOrder, WireShippingLine,
    WireTaxLine,
};

pub(crate) fn order_from_wire(wire: WireOrder) -> Order {
    Order {
        id: wire.id,
        number: wire.number,
        status: wire.status,
        currency: wire.currency,
        total: wire.total,
        total_tax: wire.total_tax,
        customer_id: wire.customer_id,
        customer_note: wire.customer_note,
        billing: address_from_wire(wire.billing),
        shipping: address_from_wire(wire.shipping),
        payment_method: wire.payment_method,
        payment_method_title: wire.payment_method_title,
        transaction_id: wire.transaction_id,
        line_items: wire.line_items.into_iter().map(line_item_from_wire).collect(),
        shipping_lines: wire
            .shipping_lines
            .into_iter()
            .map(shipping_line_from_wire)
            .collect(),
        tax_lines: wire.tax_lines.into_iter().map(tax_line_from_wire).collect(),
        fee_lines: wire.fee_lines.into_iter().map(fee_line_from_wire).collect(),
        coupon_lines: wire
            .coupon_lines
            .into_iter()
            .map(coupon_line_from_wire)
            .collect(),
        date_created: wire.date_created,
        date_modified: wire.date_modified,
        date_paid: wire.date_paid,
        date_completed: wire.date_completed,
    }
}

fn address_from_wire(wire: WireAddress) -> Address {
    Address {
        first_name: wire.first_name,
        last_name: wire.last_name,
        company: wire.company,
        address_1: wire.address_1,
        address_2: wire.address_2,
        city: wire.city,
        state: wire.state,
        postcode: wire.postcode,
        country: wire.country,
        email: wire.email,
        phone: wire.phone,
    }
}

fn line_item_from_wire(wire: WireLineItem) -> LineItem {
    LineItem {
        id: wire.id,
        name: wire.name,
        product_id: wire.product_id,
        variation_id: wire.variation_id,
        quantity: wire.quantity,
        sku: wire.sku,
        price: wire.price,
        subtotal: wire.subtotal,
        subtotal_tax: wire.subtotal_tax,
        total: wire.total,
        total_tax: wire.total_tax,
        image: wire.image.map(|image| image_from_wire(image, 0)),
    }
}

fn shipping_line_from_wire(wire: WireShippingLine) -> ShippingLine {
    ShippingLine {
        id: wire.id,
        method_title: wire.method_title,
        method_id: wire.method_id,
        total: wire.total,
        total_tax: wire.total_tax,
    }
}

fn tax_line_from_wire(wire: WireTaxLine) -> TaxLine {
    TaxLine {
        id: wire.id,
        rate_code: wire.rate_code,
        label: wire.label,
        compound: wire.compound,
        tax_total: wire.tax_total,
        shipping_tax_total: wire.shipping_tax_total,
    }
}

fn fee_line_from_wire(wire: WireFeeLine) -> FeeLine {
    FeeLine {
        id: wire.id,
        name: wire.name,
        total: wire.total,
        total_tax: wire.total_tax,
    }
}

fn coupon_line_from_wire(wire: WireCouponLine) -> CouponLine {
    CouponLine {
        id: wire.id,
        code: wire.code,
        discount: wire.discount,
        discount_tax: wire.discount_tax,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;
    use woodash_core::OrderStatus;

    #[test]
    fn test_order_from_wire_drops_wire_only_keys() {
        let wire: WireOrder = serde_json::from_value(json!({
            "id": 5001,
            "number": "5001",
            "status": "on-hold",
            "currency": "EUR",
            "total": "49.98",
            "total_tax": "8.33",
            "customer_id": 12,
            "customer_note": "",
            "order_key": "wc_order_abc123",
            "cart_hash": "deadbeef",
            "cart_tax": "0.00",
            "created_via": "checkout",
            "billing": {"first_name": "Ada", "last_name": "Lovelace", "email": "ada@example.com"},
            "shipping": {},
            "payment_method": "stripe",
            "payment_method_title": "Card",
            "line_items": [{
                "id": 1,
                "name": "Widget",
                "product_id": 101,
                "quantity": 2,
                "price": 24.99,
                "subtotal": "49.98",
                "total": "49.98",
                "taxes": [{"id": 9, "total": "8.33"}]
            }],
            "date_created": "2024-05-03T09:00:00",
            "date_modified": "2024-05-03T09:05:00",
            "date_paid": null
        }))
        .expect("wire order");

        let order = order_from_wire(wire);
        assert_eq!(order.status, OrderStatus::OnHold);
        assert_eq!(order.billing.first_name, "Ada");
        assert_eq!(order.line_items[0].quantity, 2);
        // Unit price arrives as a JSON number and still coerces.
        assert_eq!(
            order.line_items[0].price,
            "24.99".parse::<Decimal>().expect("decimal")
        );

        let value = serde_json::to_value(&order).expect("serialize");
        assert!(value.get("order_key").is_none());
        assert!(value.get("cart_hash").is_none());
        assert!(value.get("created_via").is_none());
        assert_eq!(value["paymentMethodTitle"], "Card");
    }
}
