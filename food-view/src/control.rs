//! User actions and the ids of the controls that trigger them

use std::fmt;
use std::str::FromStr;

use crate::ViewError;

/// Everything a user can trigger on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    AddToCart { restaurant_id: i64, item_id: i64 },
    CancelOrder { order_id: i64 },
    OpenCheckout,
    SubmitPayment,
    ClosePayment,
    ShowAddPayment,
    SavePaymentMethod,
    CloseAddPayment,
}

/// Id of a control rendered inside a panel
///
/// Rendered as `add-{restaurant}-{item}` and `cancel-{order}`; parsing the
/// id back yields the action it stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlId {
    AddToCart { restaurant_id: i64, item_id: i64 },
    Cancel { order_id: i64 },
}

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddToCart {
                restaurant_id,
                item_id,
            } => write!(f, "add-{}-{}", restaurant_id, item_id),
            Self::Cancel { order_id } => write!(f, "cancel-{}", order_id),
        }
    }
}

impl FromStr for ControlId {
    type Err = ViewError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ViewError::UnknownControl(s.to_string());

        if let Some(rest) = s.strip_prefix("add-") {
            let (restaurant, item) = rest.split_once('-').ok_or_else(unknown)?;
            return Ok(Self::AddToCart {
                restaurant_id: restaurant.parse().map_err(|_| unknown())?,
                item_id: item.parse().map_err(|_| unknown())?,
            });
        }
        if let Some(order) = s.strip_prefix("cancel-") {
            return Ok(Self::Cancel {
                order_id: order.parse().map_err(|_| unknown())?,
            });
        }
        Err(unknown())
    }
}

impl From<ControlId> for Action {
    fn from(id: ControlId) -> Self {
        match id {
            ControlId::AddToCart {
                restaurant_id,
                item_id,
            } => Action::AddToCart {
                restaurant_id,
                item_id,
            },
            ControlId::Cancel { order_id } => Action::CancelOrder { order_id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_control_id_format() {
        let add = ControlId::AddToCart {
            restaurant_id: 3,
            item_id: 7,
        };
        assert_eq!(add.to_string(), "add-3-7");
        assert_eq!("add-3-7".parse::<ControlId>().unwrap(), add);
        assert_eq!(
            "cancel-12".parse::<ControlId>().unwrap(),
            ControlId::Cancel { order_id: 12 }
        );
    }

    #[test]
    fn test_rejects_malformed_ids() {
        for id in ["add-3", "add-x-7", "cancel-", "cancel-1-2", "checkoutBtn", ""] {
            assert!(id.parse::<ControlId>().is_err(), "{:?} should not parse", id);
        }
    }

    #[test]
    fn test_into_action() {
        assert_eq!(
            Action::from(ControlId::Cancel { order_id: 5 }),
            Action::CancelOrder { order_id: 5 }
        );
    }
}
