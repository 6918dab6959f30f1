//! Russian labels for report fields, ported from the seller tooling.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::{fallback_label, Locale, SectionTitle};

static RU_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        // Root item
        ("offer_id", "Артикул"),
        ("product_id", "ID товара"),
        ("volume_weight", "Объёмный вес"),
        ("acquiring", "Эквайринг"),
        // Price
        ("currency_code", "Валюта"),
        ("price", "Цена"),
        ("old_price", "Старая цена"),
        ("retail_price", "Розничная цена"),
        ("marketing_price", "Маркетинговая цена"),
        ("marketing_seller_price", "Маркетинговая цена продавца"),
        ("min_price", "Минимальная цена"),
        ("net_price", "Цена нетто"),
        ("vat", "НДС"),
        ("auto_action_enabled", "Автоакция включена"),
        ("auto_add_to_ozon_actions_list_enabled", "Автодобавление в акции Ozon"),
        // Commissions
        ("sales_percent_fbo", "Процент продаж FBO"),
        ("sales_percent_fbs", "Процент продаж FBS"),
        ("fbo_deliv_to_customer_amount", "FBO: доставка покупателю"),
        ("fbo_direct_flow_trans_max_amount", "FBO: директ флоу (макс.)"),
        ("fbo_direct_flow_trans_min_amount", "FBO: директ флоу (мин.)"),
        ("fbo_return_flow_amount", "FBO: возврат"),
        ("fbs_deliv_to_customer_amount", "FBS: доставка покупателю"),
        ("fbs_direct_flow_trans_max_amount", "FBS: директ флоу (макс.)"),
        ("fbs_direct_flow_trans_min_amount", "FBS: директ флоу (мин.)"),
        ("fbs_first_mile_max_amount", "FBS: первая миля (макс.)"),
        ("fbs_first_mile_min_amount", "FBS: первая миля (мин.)"),
        ("fbs_return_flow_amount", "FBS: возврат"),
        // Price indexes
        ("color_index", "Цвет индекса"),
        ("price_index_value", "Значение индекса"),
        ("min_price_currency", "Валюта мин. цены"),
        ("external_index_data", "Внешние данные индекса"),
        ("ozon_index_data", "Данные индекса Ozon"),
        ("self_marketplaces_index_data", "Данные индекса собственных маркетплейсов"),
        // Marketing actions
        ("title", "Название акции"),
        ("value", "Величина"),
        ("date_from", "Дата начала"),
        ("date_to", "Дата окончания"),
        ("ozon_actions_exist", "Есть акции Ozon"),
        ("current_period_from", "Текущий период с"),
        ("current_period_to", "Текущий период по"),
        ("actions", "Акции"),
        // Derived commission fields
        ("fbs_commission_without_percent", "FBS комиссия без процента"),
        ("fbo_commission_without_percent", "FBO комиссия без процента"),
        ("fbs_ozon_percent", "FBS процент Ozon"),
        ("fbo_ozon_percent", "FBO процент Ozon"),
        ("fbs_total_commission", "FBS общая комиссия"),
        ("fbo_total_commission", "FBO общая комиссия"),
        // Profit rows
        ("user_purchase_price", "Закупочная цена"),
        ("total_commission", "Общая комиссия"),
        ("profit", "Прибыль"),
        ("profit_margin", "Рентабельность"),
    ])
});

/// Russian locale, the default for the seller report.
#[derive(Clone, Copy, Debug, Default)]
pub struct RuLocale;

impl Locale for RuLocale {
    fn label(&self, field: &str) -> String {
        match RU_LABELS.get(field) {
            Some(label) => (*label).to_string(),
            None => fallback_label(field),
        }
    }

    fn section_title(&self, section: SectionTitle) -> String {
        let title = match section {
            SectionTitle::ProfitAtMarketingPrice => "Расчёт прибыли",
            SectionTitle::ProfitAtMinPrice => "Расчёт прибыли от минимальной цены",
            SectionTitle::MainFields => "Основные поля",
            SectionTitle::Commissions => "Комиссии",
            SectionTitle::Price => "Цена",
            SectionTitle::PriceIndexes => "Индексы цен",
            SectionTitle::ExternalIndex => "Внешние данные индекса",
            SectionTitle::OzonIndex => "Данные индекса Ozon",
            SectionTitle::SelfMarketplacesIndex => "Данные индекса собственных маркетплейсов",
            SectionTitle::MarketingActions => "Маркетинговые акции",
        };
        title.to_string()
    }

    fn yes(&self) -> &str {
        "Да"
    }

    fn no(&self) -> &str {
        "Нет"
    }

    fn placeholder(&self) -> &str {
        "—"
    }

    fn actions_count(&self, count: usize) -> String {
        format!("Количество акций: {count}")
    }

    fn action_label(&self, ordinal: usize) -> String {
        format!("Акция {ordinal}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_fields_resolve_to_russian_labels() {
        let locale = RuLocale;
        assert_eq!(locale.label("offer_id"), "Артикул");
        assert_eq!(locale.label("fbs_total_commission"), "FBS общая комиссия");
    }

    #[test]
    fn unknown_fields_fall_back_to_generated_labels() {
        let locale = RuLocale;
        assert_eq!(locale.label("fbs_mystery_amount"), "FBS Mystery Amount");
    }

    #[test]
    fn tokens_are_localized() {
        let locale = RuLocale;
        assert_eq!(locale.yes(), "Да");
        assert_eq!(locale.no(), "Нет");
        assert_eq!(locale.placeholder(), "—");
        assert_eq!(locale.actions_count(3), "Количество акций: 3");
        assert_eq!(locale.action_label(1), "Акция 1");
    }
}
