//! Shared product-record fixture for unit tests.

use serde_json::{json, Value};

/// A representative parsed product record, as the price API reports it.
pub fn full_item() -> Value {
    json!({
        "acquiring": 12.50,
        "commissions": {
            "fbo_deliv_to_customer_amount": 65.00,
            "fbo_direct_flow_trans_max_amount": 60.00,
            "fbo_direct_flow_trans_min_amount": 30.00,
            "fbo_return_flow_amount": 35.00,
            "fbs_deliv_to_customer_amount": 76.38,
            "fbs_direct_flow_trans_max_amount": 71.12,
            "fbs_direct_flow_trans_min_amount": 39.00,
            "fbs_first_mile_max_amount": 25.00,
            "fbs_first_mile_min_amount": 10.00,
            "fbs_return_flow_amount": 50.00,
            "sales_percent_fbo": 11.5,
            "sales_percent_fbs": 10
        },
        "marketing_actions": {
            "actions": [
                {
                    "date_from": "2024-03-01T00:00:00Z",
                    "date_to": "2024-03-31T23:59:00Z",
                    "title": "Мартовская акция",
                    "value": 10.0
                }
            ],
            "current_period_from": "2024-03-01T00:00:00Z",
            "current_period_to": "2024-03-31T23:59:00Z",
            "ozon_actions_exist": true
        },
        "offer_id": "ABC-123",
        "price": {
            "auto_action_enabled": true,
            "auto_add_to_ozon_actions_list_enabled": false,
            "currency_code": "RUB",
            "marketing_price": 950.00,
            "marketing_seller_price": 1000.00,
            "min_price": 900.00,
            "net_price": 850.00,
            "old_price": 1200.00,
            "price": 990.00,
            "retail_price": 990.00,
            "vat": 0.20
        },
        "price_indexes": {
            "color_index": "COLOR_INDEX_GREEN",
            "external_index_data": {
                "min_price": 870.0,
                "min_price_currency": "RUB",
                "price_index_value": 1.02
            },
            "ozon_index_data": null,
            "self_marketplaces_index_data": null
        },
        "product_id": 123456789,
        "volume_weight": 0.4
    })
}
