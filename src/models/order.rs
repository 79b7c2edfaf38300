/// One order record: who placed it and where its payment stands.
///
/// `id` stays `None` until a store persists the order for the first time.
/// Nothing here knows how the record is stored; see `services::order_store`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Order {
    id: Option<i64>,
    username: Option<String>,
    pay_status: Option<String>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Stores call this when they assign or restore the identifier.
    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    /// True until the order has been saved once.
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn set_username(&mut self, username: Option<String>) {
        self.username = username;
    }

    pub fn pay_status(&self) -> Option<&str> {
        self.pay_status.as_deref()
    }

    pub fn set_pay_status(&mut self, pay_status: Option<String>) {
        self.pay_status = pay_status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_order_has_every_field_unset() {
        let order = Order::new();
        assert_eq!(order.id(), None);
        assert_eq!(order.username(), None);
        assert_eq!(order.pay_status(), None);
        assert!(order.is_new());
    }

    #[test]
    fn populated_order_keeps_id_unset() {
        let mut order = Order::new();
        order.set_username(Some("alice".to_string()));
        order.set_pay_status(Some("PENDING".to_string()));

        assert_eq!(order.username(), Some("alice"));
        assert_eq!(order.pay_status(), Some("PENDING"));
        assert_eq!(order.id(), None);
    }

    #[test]
    fn assigned_id_is_returned_as_is() {
        let mut order = Order::new();
        order.set_id(Some(1));
        assert_eq!(order.id(), Some(1));
        assert!(!order.is_new());
    }

    #[test]
    fn text_fields_can_be_cleared() {
        let mut order = Order::new();
        order.set_username(Some("bob".to_string()));
        order.set_pay_status(Some("PAID".to_string()));

        order.set_username(None);
        order.set_pay_status(None);

        assert_eq!(order.username(), None);
        assert_eq!(order.pay_status(), None);
    }

    #[test]
    fn mutators_touch_only_their_own_field() {
        let mut order = Order::new();
        order.set_id(Some(7));
        order.set_pay_status(Some("PENDING".to_string()));

        order.set_username(Some("carol".to_string()));
        assert_eq!(order.id(), Some(7));
        assert_eq!(order.pay_status(), Some("PENDING"));

        order.set_pay_status(Some("".to_string()));
        assert_eq!(order.id(), Some(7));
        assert_eq!(order.username(), Some("carol"));
        assert_eq!(order.pay_status(), Some(""));
    }
}
