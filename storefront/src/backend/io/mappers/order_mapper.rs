use shared::{AddOnLine, OrderDetails};

use crate::backend::domain::models::{OrderSnapshot, SelectedAddOn};

pub struct OrderMapper;

impl OrderMapper {
    pub fn add_on_to_dto(add_on: &SelectedAddOn) -> AddOnLine {
        AddOnLine {
            id: add_on.id.clone(),
            name: add_on.name.clone(),
            price: add_on.price.value(),
        }
    }

    /// Convert a domain snapshot to the order details the composer renders
    pub fn to_dto(snapshot: &OrderSnapshot) -> OrderDetails {
        let order = &snapshot.configuration;
        OrderDetails {
            product_name: Some(snapshot.product_name.clone()),
            size: Some(order.size.as_str().to_string()),
            quantity: Some(order.quantity),
            base_price: Some(order.base_price.value()),
            add_ons: order.selected_add_ons.iter().map(Self::add_on_to_dto).collect(),
            total_price: Some(order.total_price.value()),
            special_message: order.special_message.clone(),
            delivery_date: order.delivery_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::ProductCatalog;
    use crate::backend::domain::OrderConfigurator;
    use chrono::NaiveDate;

    #[test]
    fn test_snapshot_to_dto() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let mut configurator = OrderConfigurator::new(ProductCatalog::default(), today).unwrap();
        configurator.toggle_add_on("flowers", true).unwrap();
        configurator.set_quantity(2);

        let dto = OrderMapper::to_dto(&configurator.snapshot());

        assert_eq!(dto.product_name.as_deref(), Some("Premium Birthday Celebration Hamper"));
        assert_eq!(dto.size.as_deref(), Some("regular"));
        assert_eq!(dto.quantity, Some(2));
        assert_eq!(dto.base_price, Some(2999));
        assert_eq!(
            dto.add_ons,
            vec![AddOnLine {
                id: "flowers".to_string(),
                name: "Fresh Flower Bouquet".to_string(),
                price: 499,
            }]
        );
        assert_eq!(dto.total_price, Some((2999 + 499) * 2));
        assert_eq!(dto.delivery_date, NaiveDate::from_ymd_opt(2026, 10, 20));
    }
}
