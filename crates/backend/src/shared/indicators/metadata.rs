use contracts::shared::indicators::*;

/// Well-known indicator IDs (constants to avoid typos).
pub mod ids {
    use super::*;

    pub fn orders_current_month() -> IndicatorId {
        IndicatorId::new("orders.current_month")
    }
    pub fn sales_current_month() -> IndicatorId {
        IndicatorId::new("sales.current_month")
    }
    pub fn orders_total() -> IndicatorId {
        IndicatorId::new("orders.total")
    }
    pub fn sales_total() -> IndicatorId {
        IndicatorId::new("sales.total")
    }
    pub fn sales_avg_order() -> IndicatorId {
        IndicatorId::new("sales.avg_order")
    }
    pub fn sales_max_order() -> IndicatorId {
        IndicatorId::new("sales.max_order")
    }
    pub fn sales_min_order() -> IndicatorId {
        IndicatorId::new("sales.min_order")
    }
}

fn usd() -> ValueFormat {
    ValueFormat::Money {
        currency: "$".into(),
    }
}

/// Labels and formats of every registered indicator.
pub fn build_catalog() -> Vec<IndicatorMeta> {
    vec![
        IndicatorMeta {
            id: ids::orders_current_month(),
            label: "Current Monthly Orders".into(),
            format: ValueFormat::Integer,
            description: Some("Orders in the latest month, change against the month before".into()),
        },
        IndicatorMeta {
            id: ids::sales_current_month(),
            label: "Current Monthly Sales".into(),
            format: usd(),
            description: Some("Sales in the latest month, change against the month before".into()),
        },
        IndicatorMeta {
            id: ids::orders_total(),
            label: "Total Orders".into(),
            format: ValueFormat::Integer,
            description: None,
        },
        IndicatorMeta {
            id: ids::sales_total(),
            label: "Total Sales".into(),
            format: usd(),
            description: None,
        },
        IndicatorMeta {
            id: ids::sales_avg_order(),
            label: "Average Order Sale".into(),
            format: usd(),
            description: None,
        },
        IndicatorMeta {
            id: ids::sales_max_order(),
            label: "Largest Order Sale".into(),
            format: usd(),
            description: None,
        },
        IndicatorMeta {
            id: ids::sales_min_order(),
            label: "Smallest Order Sale".into(),
            format: usd(),
            description: None,
        },
    ]
}
